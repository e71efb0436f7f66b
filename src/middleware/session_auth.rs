//! Session authentication middleware for protected routes.
//!
//! The session token travels in an HttpOnly `session` cookie (set at
//! login/register); `Authorization: Bearer` is accepted as a fallback for
//! non-browser clients. The middleware rejects revoked tokens, validates
//! the signature and expiry, and stores the claims plus the raw token in
//! the request extensions.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, HttpRequest,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use jsonwebtoken::{decode, DecodingKey, Validation};
use log::warn;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::constants::{
    ERR_AUTH_REQUIRED, ERR_INVALID_SESSION, ERR_MISSING_SESSION, ERR_SESSION_REVOKED,
};
use crate::errors::ApiError;
use crate::models::Claims;
use crate::services::RevokedSessions;

/// Name of the session cookie set at login and cleared at logout.
pub const SESSION_COOKIE: &str = "session";

/// Session authentication middleware.
pub struct SessionAuth {
    revoked: RevokedSessions,
}

impl SessionAuth {
    /// Create a new SessionAuth guard sharing the given revocation list.
    pub fn new(revoked: RevokedSessions) -> Self {
        Self { revoked }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SessionAuthService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(SessionAuthService {
            service: Rc::new(service),
            revoked: self.revoked.clone(),
        })
    }
}

pub struct SessionAuthService<S> {
    service: Rc<S>,
    revoked: RevokedSessions,
}

impl<S, B> Service<ServiceRequest> for SessionAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let revoked = self.revoked.clone();

        Box::pin(async move {
            let token = extract_token(&req).ok_or_else(|| {
                Error::from(ApiError::Unauthorized(ERR_MISSING_SESSION.to_string()))
            })?;

            // A logged-out token stays invalid until its natural expiry.
            if revoked.is_revoked(&token) {
                return Err(ApiError::Unauthorized(ERR_SESSION_REVOKED.to_string()).into());
            }

            let token_data = decode::<Claims>(
                &token,
                &DecodingKey::from_secret(CONFIG.session_secret.as_bytes()),
                &Validation::default(),
            )
            .map_err(|_| ApiError::Unauthorized(ERR_INVALID_SESSION.to_string()))?;

            // Raw token kept around so logout can revoke it.
            req.extensions_mut().insert(token);
            req.extensions_mut().insert(token_data.claims);

            let res = service.call(req).await?;
            Ok(res)
        })
    }
}

/// Pull the session token out of the cookie, falling back to a bearer header.
fn extract_token(req: &ServiceRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }

    req.headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Extension trait for reading the session claims set by [`SessionAuth`].
pub trait RequestExt {
    /// Get the session claims from the request extensions.
    ///
    /// Returns `Some(Claims)` if the request was authenticated,
    /// or `None` if no claims are present.
    fn get_claims(&self) -> Option<Claims>;
}

impl RequestExt for HttpRequest {
    fn get_claims(&self) -> Option<Claims> {
        self.extensions().get::<Claims>().cloned()
    }
}

/// Extract claims from a request or fail with Unauthorized.
///
/// Use this at the start of any handler that requires authentication.
pub fn require_auth(req: &HttpRequest) -> Result<Claims, ApiError> {
    req.get_claims().ok_or_else(|| {
        warn!("Failed to get claims from request");
        ApiError::Unauthorized(ERR_AUTH_REQUIRED.to_string())
    })
}
