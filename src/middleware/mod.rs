//! Request middleware: session authentication and claim extraction.

pub mod session_auth;

pub use session_auth::{require_auth, RequestExt, SessionAuth, SESSION_COOKIE};
