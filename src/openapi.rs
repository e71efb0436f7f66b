use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::middleware::SESSION_COOKIE;
use crate::models::{
    AuthResponse, CreateThoughtRequest, ErrorResponse, HealthResponse, LoginRequest,
    RegisterRequest, ThoughtListResponse, ThoughtResponse, UpdateThoughtRequest, UserResponse,
};
use crate::pagination::{PageLink, PaginationView, SortOrder};

/// OpenAPI documentation for the Toughts API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Toughts API",
        version = "0.1.0",
        description = "A small note-sharing service: a paginated public feed of short thoughts and a personal dashboard for managing your own."
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Authentication", description = "Registration, login, logout, and profile"),
        (name = "Thoughts", description = "The public feed and the personal dashboard")
    ),
    paths(
        crate::handlers::register,
        crate::handlers::login,
        crate::handlers::logout,
        crate::handlers::current_user,
        crate::handlers::list_thoughts,
        crate::handlers::dashboard,
        crate::handlers::create_thought,
        crate::handlers::get_thought,
        crate::handlers::update_thought,
        crate::handlers::remove_thought,
        crate::routes::health_check
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            CreateThoughtRequest,
            UpdateThoughtRequest,
            UserResponse,
            AuthResponse,
            ThoughtResponse,
            ThoughtListResponse,
            PaginationView,
            PageLink,
            SortOrder,
            ErrorResponse,
            HealthResponse
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security configuration for the session cookie
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    SESSION_COOKIE,
                    "Session token set by the login and register endpoints",
                ))),
            );
        }
    }
}
