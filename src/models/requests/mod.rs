//! Request payloads, validated with `validator`.

pub mod auth;
pub mod thought;

pub use auth::*;
pub use thought::*;
