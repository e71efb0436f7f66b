use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a thought
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateThoughtRequest {
    /// The thought text (1-280 characters)
    #[validate(length(min = 1, max = 280, message = "Title must be between 1 and 280 characters"))]
    #[schema(example = "Rust makes me happy")]
    pub title: String,
}

/// Request payload for editing a thought
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateThoughtRequest {
    /// The new thought text (1-280 characters)
    #[validate(length(min = 1, max = 280, message = "Title must be between 1 and 280 characters"))]
    #[schema(example = "Rust still makes me happy")]
    pub title: String,
}
