use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Thought document stored in MongoDB.
///
/// `user_id` is the owner and the predicate every mutation filters on.
/// `author` is the owner's display name, snapshotted at creation so listing
/// pages never need a second lookup.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Thought {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub user_id: ObjectId,
    pub author: String,
    pub created_at: mongodb::bson::DateTime,
    pub updated_at: mongodb::bson::DateTime,
}
