//! Services organized by domain concern.

pub mod auth_service;
pub mod revoked_sessions;
pub mod thought_service;

pub use auth_service::AuthService;
pub use revoked_sessions::RevokedSessions;
pub use thought_service::ThoughtService;
