//! Session token claims.

use serde::{Deserialize, Serialize};

/// Claims carried by the signed session token (cookie or bearer).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Owning user's id (ObjectId hex)
    pub sub: String,
    pub name: String,
    pub email: String,
    /// Expiration timestamp (unix seconds)
    pub exp: usize,
    /// Issued-at timestamp (unix seconds)
    pub iat: usize,
}
