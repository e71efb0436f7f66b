//! Thought service: the listing computation and CRUD with ownership.

use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Database;
use std::sync::Arc;

use crate::constants::{ERR_INVALID_THOUGHT_ID, ERR_OPERATION_NOT_ALLOWED, ERR_THOUGHT_NOT_FOUND, PAGE_SIZE};
use crate::errors::ApiError;
use crate::models::{Claims, CreateThoughtRequest, Thought, ThoughtResponse, UpdateThoughtRequest};
use crate::pagination::{self, SortOrder};
use crate::repositories::ThoughtRepository;

pub struct ThoughtService {
    repository: Arc<ThoughtRepository>,
}

impl ThoughtService {
    pub fn new(db: &Database) -> Self {
        Self {
            repository: Arc::new(ThoughtRepository::new(db)),
        }
    }

    /// Compute one listing page.
    ///
    /// Applies the title substring filter and, when given, the owner
    /// predicate (the dashboard); counts the full match before slicing so
    /// the caller can derive the page count. Pure read, no side effects.
    pub async fn list(
        &self,
        search: Option<&str>,
        order: SortOrder,
        page: u64,
        owner: Option<ObjectId>,
    ) -> Result<(Vec<ThoughtResponse>, u64), ApiError> {
        let filter = listing_filter(search, owner);
        debug!("Listing thoughts with filter: {:?}", filter);

        let total = self.repository.count(filter.clone()).await?;
        let skip = pagination::offset(page);

        let thoughts = self
            .repository
            .find_page(filter, listing_sort(order), skip, PAGE_SIZE as i64)
            .await?;

        Ok((thoughts.into_iter().map(Into::into).collect(), total))
    }

    /// Create a thought owned by the session user.
    pub async fn create(
        &self,
        claims: &Claims,
        req: CreateThoughtRequest,
    ) -> Result<ThoughtResponse, ApiError> {
        let owner = owner_id(claims)?;

        let now = mongodb::bson::DateTime::now();
        let thought = Thought {
            id: None,
            title: req.title,
            user_id: owner,
            author: claims.name.clone(),
            created_at: now,
            updated_at: now,
        };

        let id = self.repository.insert(&thought).await?;
        info!("User {} created thought {}", claims.sub, id);

        Ok(Thought {
            id: Some(id),
            ..thought
        }
        .into())
    }

    /// Fetch one of the session user's thoughts (the edit form source).
    ///
    /// The owner predicate is part of the query, so someone else's id and a
    /// nonexistent id are the same outcome.
    pub async fn get_owned(&self, claims: &Claims, id: &str) -> Result<ThoughtResponse, ApiError> {
        let owner = owner_id(claims)?;
        let thought_id = parse_thought_id(id)?;

        self.repository
            .find_owned(thought_id, owner)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApiError::NotFound(ERR_OPERATION_NOT_ALLOWED.to_string()))
    }

    /// Update the title of one of the session user's thoughts.
    pub async fn update(
        &self,
        claims: &Claims,
        id: &str,
        req: UpdateThoughtRequest,
    ) -> Result<(), ApiError> {
        let owner = owner_id(claims)?;
        let thought_id = parse_thought_id(id)?;

        let result = self
            .repository
            .update_owned(thought_id, owner, &req.title)
            .await?;

        if result.matched_count == 0 {
            return Err(ApiError::NotFound(ERR_THOUGHT_NOT_FOUND.to_string()));
        }

        info!("User {} updated thought {}", claims.sub, thought_id);
        Ok(())
    }

    /// Delete one of the session user's thoughts.
    pub async fn remove(&self, claims: &Claims, id: &str) -> Result<(), ApiError> {
        let owner = owner_id(claims)?;
        let thought_id = parse_thought_id(id)?;

        let result = self.repository.delete_owned(thought_id, owner).await?;

        if result.deleted_count == 0 {
            return Err(ApiError::NotFound(ERR_THOUGHT_NOT_FOUND.to_string()));
        }

        info!("User {} removed thought {}", claims.sub, thought_id);
        Ok(())
    }
}

/// Build the listing filter document.
///
/// A non-empty search term becomes a case-insensitive substring match on the
/// title, escaped so user input never reaches the regex engine raw. An owner
/// restricts the listing to that user's thoughts.
fn listing_filter(search: Option<&str>, owner: Option<ObjectId>) -> Document {
    let mut filter = doc! {};

    if let Some(term) = search {
        let term = term.trim();
        if !term.is_empty() {
            let title_regex = mongodb::bson::Regex {
                pattern: regex::escape(term),
                options: "i".to_string(),
            };
            filter.insert("title", doc! { "$regex": title_regex });
        }
    }

    if let Some(owner) = owner {
        filter.insert("user_id", owner);
    }

    filter
}

/// Sort document for a listing order: newest first or oldest first.
fn listing_sort(order: SortOrder) -> Document {
    match order {
        SortOrder::Newest => doc! { "created_at": -1 },
        SortOrder::Oldest => doc! { "created_at": 1 },
    }
}

/// Owner ObjectId carried by the session claims.
pub fn owner_id(claims: &Claims) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(&claims.sub)
        .map_err(|_| ApiError::Unauthorized(crate::constants::ERR_INVALID_SESSION.to_string()))
}

fn parse_thought_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::BadRequest(ERR_INVALID_THOUGHT_ID.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_builds_empty_filter() {
        assert_eq!(listing_filter(None, None), doc! {});
        assert_eq!(listing_filter(Some(""), None), doc! {});
        assert_eq!(listing_filter(Some("   "), None), doc! {});
    }

    #[test]
    fn search_term_becomes_escaped_case_insensitive_regex() {
        let filter = listing_filter(Some("node js"), None);
        let title = filter.get_document("title").unwrap();
        let regex = title.get("$regex").unwrap();

        match regex {
            mongodb::bson::Bson::RegularExpression(re) => {
                assert_eq!(re.pattern, "node js");
                assert_eq!(re.options, "i");
            }
            other => panic!("expected a regex, got {:?}", other),
        }
    }

    #[test]
    fn regex_metacharacters_are_escaped() {
        let filter = listing_filter(Some("why?.*"), None);
        let title = filter.get_document("title").unwrap();

        match title.get("$regex").unwrap() {
            mongodb::bson::Bson::RegularExpression(re) => {
                assert_eq!(re.pattern, regex::escape("why?.*"));
            }
            other => panic!("expected a regex, got {:?}", other),
        }
    }

    #[test]
    fn owner_becomes_equality_predicate() {
        let owner = ObjectId::new();
        let filter = listing_filter(None, Some(owner));
        assert_eq!(filter.get_object_id("user_id").unwrap(), owner);

        // search and owner compose
        let both = listing_filter(Some("rust"), Some(owner));
        assert!(both.contains_key("title"));
        assert_eq!(both.get_object_id("user_id").unwrap(), owner);
    }

    #[test]
    fn sort_follows_order() {
        assert_eq!(listing_sort(SortOrder::Newest), doc! { "created_at": -1 });
        assert_eq!(listing_sort(SortOrder::Oldest), doc! { "created_at": 1 });
    }
}
