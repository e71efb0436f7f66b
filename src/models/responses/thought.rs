use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Thought;
use crate::pagination::{PaginationView, SortOrder};

/// Thought data returned in API responses
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct ThoughtResponse {
    /// Thought's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// The thought text
    #[schema(example = "Rust makes me happy")]
    pub title: String,
    /// Display name of the author
    #[schema(example = "John Doe")]
    pub author: String,
    /// When the thought was posted
    pub created_at: DateTime<Utc>,
    /// When the thought was last edited
    pub updated_at: DateTime<Utc>,
}

impl From<Thought> for ThoughtResponse {
    fn from(thought: Thought) -> Self {
        Self {
            id: thought.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: thought.title,
            author: thought.author,
            created_at: DateTime::from_timestamp_millis(thought.created_at.timestamp_millis())
                .unwrap_or_default(),
            updated_at: DateTime::from_timestamp_millis(thought.updated_at.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}

/// Paginated listing view-model for the feed and the dashboard.
///
/// Everything the renderer needs for one listing page: the page slice, the
/// counts, the echoed filter/sort context, and the ready-made pagination
/// link set.
#[derive(Debug, Serialize, ToSchema)]
pub struct ThoughtListResponse {
    /// Whether the request was successful
    pub success: bool,
    /// Page slice of thoughts (at most `per_page` items)
    pub data: Vec<ThoughtResponse>,
    /// Total number of matching thoughts before pagination
    pub total: u64,
    /// Whether the listing matched nothing at all
    pub empty: bool,
    /// Current page number
    pub page: u64,
    /// Items per page
    pub per_page: u64,
    /// Total number of pages (ceiling; 0 when the listing is empty)
    pub total_pages: u64,
    /// Sort order the listing was computed with
    pub order: SortOrder,
    /// Search term echoed back when one was applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Navigation links for the renderer
    pub pagination: PaginationView,
}
