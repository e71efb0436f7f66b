//! Authentication service: registration, login, and session token utilities.

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use log::{info, warn};
use mongodb::bson::oid::ObjectId;
use mongodb::Database;
use std::sync::Arc;

use crate::config::CONFIG;
use crate::constants::{ERR_EMAIL_EXISTS, ERR_INVALID_CREDENTIALS, ERR_INVALID_SESSION, ERR_USER_NOT_FOUND};
use crate::errors::ApiError;
use crate::models::{Claims, LoginRequest, RegisterRequest, User};
use crate::repositories::UserRepository;
use crate::utils::log_sanitizer::mask_email;
use crate::validators::validate_password_match;

/// Service for authentication operations.
pub struct AuthService {
    repository: Arc<UserRepository>,
}

impl AuthService {
    /// Create a new AuthService instance.
    pub fn new(db: &Database) -> Self {
        Self {
            repository: Arc::new(UserRepository::new(db)),
        }
    }

    /// Register a new user and start their session (auto-login).
    pub async fn register(&self, req: RegisterRequest) -> Result<(User, String), ApiError> {
        validate_password_match(&req.password, &req.confirm_password)?;

        if self.repository.find_by_email(&req.email).await?.is_some() {
            warn!(
                "Registration rejected, email already in use: {}",
                mask_email(&req.email)
            );
            return Err(ApiError::Conflict(ERR_EMAIL_EXISTS.to_string()));
        }

        let password_hash = hash_password(&req.password)?;

        let now = mongodb::bson::DateTime::now();
        let user = User {
            id: None,
            name: req.name,
            email: req.email.to_lowercase(),
            password_hash,
            created_at: now,
            updated_at: now,
            last_login: Some(now),
        };

        let id = self.repository.insert(&user).await?;
        let user = User {
            id: Some(id),
            ..user
        };

        let token = generate_session_token(&user)?;
        info!("New user registered: {}", mask_email(&user.email));

        Ok((user, token))
    }

    /// Authenticate a user and return a fresh session token.
    ///
    /// Unknown email and wrong password produce the same generic error.
    pub async fn login(&self, req: LoginRequest) -> Result<(User, String), ApiError> {
        let user = self
            .repository
            .find_by_email(&req.email)
            .await?
            .ok_or_else(|| ApiError::Unauthorized(ERR_INVALID_CREDENTIALS.to_string()))?;

        if !verify_password(&req.password, &user.password_hash)? {
            warn!("Failed login attempt for {}", mask_email(&user.email));
            return Err(ApiError::Unauthorized(ERR_INVALID_CREDENTIALS.to_string()));
        }

        if let Some(user_id) = user.id {
            self.repository.update_last_login(user_id).await?;
        }

        let token = generate_session_token(&user)?;
        info!("User {} logged in", mask_email(&user.email));

        Ok((user, token))
    }

    /// Fetch the profile for an authenticated session.
    pub async fn current_user(&self, claims: &Claims) -> Result<User, ApiError> {
        let user_id = ObjectId::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized(ERR_INVALID_SESSION.to_string()))?;

        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()))
    }
}

/// Hash a password using bcrypt.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Verify a password against a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    Ok(verify(password, hash)?)
}

/// Generate a signed session token for a user.
pub fn generate_session_token(user: &User) -> Result<String, ApiError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + (CONFIG.session_ttl_hours as usize * 3600);

    let claims = Claims {
        sub: user.id.map(|id| id.to_hex()).unwrap_or_default(),
        name: user.name.clone(),
        email: user.email.clone(),
        exp,
        iat: now,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(CONFIG.session_secret.as_bytes()),
    )?;

    Ok(token)
}
