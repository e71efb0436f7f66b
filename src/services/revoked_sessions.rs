//! Server-side revocation list for logged-out session tokens.
//!
//! Logout cannot recall a signed token, so revoked tokens are remembered
//! in-memory until they would have expired anyway. Entries key on a token
//! fingerprint rather than the token itself.

use dashmap::DashMap;
use log::{debug, info};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Sweep expired entries once per this many revocations.
const SWEEP_EVERY: u64 = 64;

/// Thread-safe set of revoked session tokens.
#[derive(Clone, Default)]
pub struct RevokedSessions {
    /// token fingerprint -> expiry (unix seconds)
    entries: Arc<DashMap<u64, u64>>,
    revocations: Arc<AtomicU64>,
}

impl RevokedSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Revoke a token until its natural expiry.
    ///
    /// Tokens already past their expiry are not stored; the validation step
    /// rejects them on its own.
    pub fn revoke(&self, token: &str, exp: usize) {
        let now = unix_now();
        let exp = exp as u64;

        if exp > now {
            self.entries.insert(fingerprint(token), exp);
            debug!("Session revoked, expires in {}s", exp - now);
        }

        if self.revocations.fetch_add(1, Ordering::Relaxed) % SWEEP_EVERY == SWEEP_EVERY - 1 {
            self.sweep(now);
        }
    }

    /// Check whether a token has been revoked (and should be rejected).
    pub fn is_revoked(&self, token: &str) -> bool {
        let key = fingerprint(token);

        if let Some(entry) = self.entries.get(&key) {
            if *entry > unix_now() {
                return true;
            }
            // Expired entry, drop the read guard before removing it.
            drop(entry);
            self.entries.remove(&key);
        }

        false
    }

    fn sweep(&self, now: u64) {
        let before = self.entries.len();
        self.entries.retain(|_, expiry| *expiry > now);

        let removed = before - self.entries.len();
        if removed > 0 {
            info!(
                "Revocation sweep: removed {} expired entries, {} remaining",
                removed,
                self.entries.len()
            );
        }
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn fingerprint(token: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    token.hash(&mut hasher);
    hasher.finish()
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn far_future() -> usize {
        (unix_now() + 3600) as usize
    }

    #[test]
    fn revoked_token_is_rejected() {
        let revoked = RevokedSessions::new();
        revoked.revoke("some.session.token", far_future());

        assert!(revoked.is_revoked("some.session.token"));
        assert!(!revoked.is_revoked("another.session.token"));
    }

    #[test]
    fn already_expired_token_is_not_stored() {
        let revoked = RevokedSessions::new();
        revoked.revoke("stale.session.token", 1);

        assert!(revoked.is_empty());
        assert!(!revoked.is_revoked("stale.session.token"));
    }

    #[test]
    fn unknown_token_is_not_revoked() {
        let revoked = RevokedSessions::new();
        assert!(!revoked.is_revoked("never.seen.token"));
    }
}
