//! Authentication handlers: registration, login, logout, and profile.

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use log::info;
use validator::Validate;

use crate::config::CONFIG;
use crate::constants::{
    MSG_LOGIN_SUCCESS, MSG_LOGOUT_SUCCESS, MSG_PROFILE_RETRIEVED, MSG_USER_REGISTERED,
};
use crate::errors::ApiError;
use crate::middleware::{require_auth, SESSION_COOKIE};
use crate::models::{
    ApiResponse, AuthResponse, Claims, LoginRequest, RegisterRequest, UserResponse,
};
use crate::services::{AuthService, RevokedSessions};
use crate::validators::validation_errors_to_api_error;

/// Build the HttpOnly cookie that carries the session token.
fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::hours(CONFIG.session_ttl_hours))
        .finish()
}

/// Register a new user account
///
/// Registration logs the new user in immediately: the response carries the
/// session token and sets the session cookie.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered and logged in", body = AuthResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 409, description = "Email already in use", body = crate::models::ErrorResponse)
    )
)]
pub async fn register(
    auth_service: web::Data<AuthService>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let (user, token) = auth_service.register(body.into_inner()).await?;
    let user_response: UserResponse = user.into();

    Ok(HttpResponse::Created()
        .cookie(session_cookie(token.clone()))
        .json(AuthResponse {
            success: true,
            message: MSG_USER_REGISTERED.to_string(),
            token,
            user: user_response,
        }))
}

/// Authenticate a user and start a session
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 401, description = "Invalid credentials", body = crate::models::ErrorResponse)
    )
)]
pub async fn login(
    auth_service: web::Data<AuthService>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let (user, token) = auth_service.login(body.into_inner()).await?;

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(token.clone()))
        .json(AuthResponse {
            success: true,
            message: MSG_LOGIN_SUCCESS.to_string(),
            token,
            user: user.into(),
        }))
}

/// End the current session
///
/// The presented token is revoked server-side (kept on the revocation list
/// until its natural expiry) and the session cookie is cleared.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Authentication",
    responses(
        (status = 200, description = "Logout successful"),
        (status = 401, description = "Invalid or missing session", body = crate::models::ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn logout(
    req: HttpRequest,
    revoked: web::Data<RevokedSessions>,
) -> Result<HttpResponse, ApiError> {
    let claims = req.extensions().get::<Claims>().cloned();
    let token = req.extensions().get::<String>().cloned();

    if let (Some(claims), Some(token)) = (claims, token) {
        revoked.revoke(&token, claims.exp);
        info!("User {} logged out", claims.sub);
    }

    let mut removal = Cookie::new(SESSION_COOKIE, "");
    removal.set_path("/");
    removal.make_removal();

    Ok(HttpResponse::Ok()
        .cookie(removal)
        .json(ApiResponse::<()>::message(MSG_LOGOUT_SUCCESS)))
}

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Authentication",
    responses(
        (status = 200, description = "Current user profile", body = UserResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn current_user(
    auth_service: web::Data<AuthService>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;

    let user = auth_service.current_user(&claims).await?;
    let user_response: UserResponse = user.into();

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_PROFILE_RETRIEVED, user_response)))
}
