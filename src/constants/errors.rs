//! Error message constants used throughout the application.

// Session errors
pub const ERR_AUTH_REQUIRED: &str = "Authentication required";
pub const ERR_MISSING_SESSION: &str = "Missing session cookie or bearer token";
pub const ERR_INVALID_SESSION: &str = "Invalid or expired session";
pub const ERR_SESSION_REVOKED: &str = "Session has been logged out";

// Account errors
pub const ERR_INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const ERR_EMAIL_EXISTS: &str = "Email is already in use";
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_PASSWORD_MISMATCH: &str = "Passwords do not match, try again";

// Thought errors
pub const ERR_THOUGHT_NOT_FOUND: &str = "Thought not found";
pub const ERR_INVALID_THOUGHT_ID: &str = "Invalid thought ID format";
pub const ERR_OPERATION_NOT_ALLOWED: &str = "Operation not allowed";
