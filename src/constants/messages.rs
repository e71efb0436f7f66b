//! Success message constants used throughout the application.

// Authentication messages
pub const MSG_USER_REGISTERED: &str = "Registration completed successfully";
pub const MSG_LOGIN_SUCCESS: &str = "Authentication successful";
pub const MSG_LOGOUT_SUCCESS: &str = "Logged out successfully";
pub const MSG_PROFILE_RETRIEVED: &str = "Profile retrieved";

// Thought messages
pub const MSG_THOUGHT_CREATED: &str = "Thought created successfully";
pub const MSG_THOUGHT_UPDATED: &str = "Thought updated successfully";
pub const MSG_THOUGHT_REMOVED: &str = "Thought removed successfully";
pub const MSG_THOUGHT_FOUND: &str = "Thought found";
