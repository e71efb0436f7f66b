//! Thought repository for all MongoDB operations related to thoughts.
//!
//! Mutations that belong to a single user (edit, delete) take the owner id
//! and fold it into the filter document; a non-owned id simply matches
//! nothing.

use futures::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_THOUGHTS;
use crate::errors::ApiError;
use crate::models::Thought;

/// Repository for thought-related database operations.
pub struct ThoughtRepository {
    collection: Collection<Thought>,
}

impl ThoughtRepository {
    /// Create a new ThoughtRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_THOUGHTS),
        }
    }

    /// Create database indexes for the thoughts collection.
    ///
    /// Called once during application startup:
    /// - `created_at` descending for the public feed sort
    /// - compound `user_id` + `created_at` for the dashboard listing
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        let indexes = vec![
            IndexModel::builder().keys(doc! { "created_at": -1 }).build(),
            IndexModel::builder()
                .keys(doc! { "user_id": 1, "created_at": -1 })
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        Ok(())
    }

    /// Insert a new thought into the database.
    pub async fn insert(&self, thought: &Thought) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(thought).await?;
        Ok(result.inserted_id.as_object_id().unwrap())
    }

    /// Fetch one listing page: the matching slice in the given sort order.
    pub async fn find_page(
        &self,
        filter: Document,
        sort: Document,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Thought>, ApiError> {
        debug!("Repository: Finding thoughts with filter: {:?}", filter);
        let cursor = self
            .collection
            .find(filter)
            .sort(sort)
            .skip(skip)
            .limit(limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    /// Count documents matching a filter (the pre-pagination total).
    pub async fn count(&self, filter: Document) -> Result<u64, ApiError> {
        Ok(self.collection.count_documents(filter).await?)
    }

    /// Find a thought by id, restricted to its owner.
    pub async fn find_owned(
        &self,
        id: ObjectId,
        owner: ObjectId,
    ) -> Result<Option<Thought>, ApiError> {
        Ok(self
            .collection
            .find_one(doc! { "_id": id, "user_id": owner })
            .await?)
    }

    /// Update a thought's title, restricted to its owner.
    pub async fn update_owned(
        &self,
        id: ObjectId,
        owner: ObjectId,
        title: &str,
    ) -> Result<mongodb::results::UpdateResult, ApiError> {
        Ok(self
            .collection
            .update_one(
                doc! { "_id": id, "user_id": owner },
                doc! {
                    "$set": {
                        "title": title,
                        "updated_at": mongodb::bson::DateTime::now()
                    }
                },
            )
            .await?)
    }

    /// Delete a thought, restricted to its owner.
    pub async fn delete_owned(
        &self,
        id: ObjectId,
        owner: ObjectId,
    ) -> Result<mongodb::results::DeleteResult, ApiError> {
        Ok(self
            .collection
            .delete_one(doc! { "_id": id, "user_id": owner })
            .await?)
    }
}
