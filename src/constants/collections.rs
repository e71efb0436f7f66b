//! MongoDB collection names.

pub const COLLECTION_USERS: &str = "users";
pub const COLLECTION_THOUGHTS: &str = "thoughts";
