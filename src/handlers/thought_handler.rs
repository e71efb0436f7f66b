//! Thought handlers: the public feed, the personal dashboard, and the
//! create/edit/delete flows.

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::constants::{MSG_THOUGHT_CREATED, MSG_THOUGHT_FOUND, MSG_THOUGHT_REMOVED, MSG_THOUGHT_UPDATED, PAGE_SIZE};
use crate::errors::ApiError;
use crate::middleware::require_auth;
use crate::models::{
    ApiResponse, CreateThoughtRequest, ThoughtListResponse, ThoughtResponse, UpdateThoughtRequest,
};
use crate::pagination::{self, SortOrder};
use crate::services::thought_service::owner_id;
use crate::services::ThoughtService;
use crate::validators::validation_errors_to_api_error;

/// Query parameters for the public feed listing
#[derive(Debug, serde::Deserialize)]
pub struct FeedQuery {
    /// Substring filter on the thought title
    pub search: Option<String>,
    /// Sort order: "new" (default) or "old"
    pub order: Option<String>,
    /// Page number, parsed as a positive integer (default 1)
    pub page: Option<String>,
}

/// Query parameters for the dashboard listing
#[derive(Debug, serde::Deserialize)]
pub struct DashboardQuery {
    /// Page number, parsed as a positive integer (default 1)
    pub page: Option<String>,
}

/// Browse the public feed
///
/// Paginated listing of every thought, optionally filtered by a title
/// substring and sorted newest- or oldest-first. The response is a complete
/// view-model: page slice, counts, echoed filter context, and the
/// pagination link set (every link preserves `search` and `order`).
#[utoipa::path(
    get,
    path = "/api/thoughts",
    tag = "Thoughts",
    params(
        ("search" = Option<String>, Query, description = "Substring filter on the title"),
        ("order" = Option<String>, Query, description = "Sort order: 'new' (default) or 'old'"),
        ("page" = Option<String>, Query, description = "Page number (default: 1)")
    ),
    responses(
        (status = 200, description = "One page of the feed", body = ThoughtListResponse)
    )
)]
pub async fn list_thoughts(
    thought_service: web::Data<ThoughtService>,
    query: web::Query<FeedQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = pagination::parse_page_number(query.page.as_deref());
    let order = SortOrder::from_param(query.order.as_deref());
    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty());

    let (thoughts, total) = thought_service.list(search, order, page, None).await?;
    let total_pages = pagination::total_pages(total);

    Ok(HttpResponse::Ok().json(ThoughtListResponse {
        success: true,
        empty: total == 0,
        data: thoughts,
        total,
        page,
        per_page: PAGE_SIZE,
        total_pages,
        order,
        search: search.map(str::to_string),
        pagination: pagination::paginate(page, total_pages, search, Some(order)),
    }))
}

/// Browse the authenticated user's own thoughts
///
/// Same page size as the feed, fixed newest-first, no search; pagination
/// links carry only the page number.
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Thoughts",
    params(
        ("page" = Option<String>, Query, description = "Page number (default: 1)")
    ),
    responses(
        (status = 200, description = "One page of the user's thoughts", body = ThoughtListResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn dashboard(
    thought_service: web::Data<ThoughtService>,
    query: web::Query<DashboardQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    let owner = owner_id(&claims)?;

    let page = pagination::parse_page_number(query.page.as_deref());

    let (thoughts, total) = thought_service
        .list(None, SortOrder::Newest, page, Some(owner))
        .await?;
    let total_pages = pagination::total_pages(total);

    Ok(HttpResponse::Ok().json(ThoughtListResponse {
        success: true,
        empty: total == 0,
        data: thoughts,
        total,
        page,
        per_page: PAGE_SIZE,
        total_pages,
        order: SortOrder::Newest,
        search: None,
        pagination: pagination::paginate(page, total_pages, None, None),
    }))
}

/// Post a new thought
#[utoipa::path(
    post,
    path = "/api/dashboard/thoughts",
    tag = "Thoughts",
    request_body = CreateThoughtRequest,
    responses(
        (status = 201, description = "Thought created", body = ThoughtResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn create_thought(
    thought_service: web::Data<ThoughtService>,
    body: web::Json<CreateThoughtRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    body.validate().map_err(validation_errors_to_api_error)?;

    let thought = thought_service.create(&claims, body.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(MSG_THOUGHT_CREATED, thought)))
}

/// Fetch one of the user's thoughts (edit form source)
#[utoipa::path(
    get,
    path = "/api/dashboard/thoughts/{id}",
    tag = "Thoughts",
    params(("id" = String, Path, description = "Thought ID")),
    responses(
        (status = 200, description = "Thought found", body = ThoughtResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "Not found or not owned", body = crate::models::ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn get_thought(
    thought_service: web::Data<ThoughtService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    let thought_id = path.into_inner();

    let thought = thought_service.get_owned(&claims, &thought_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_THOUGHT_FOUND, thought)))
}

/// Edit one of the user's thoughts
#[utoipa::path(
    put,
    path = "/api/dashboard/thoughts/{id}",
    tag = "Thoughts",
    params(("id" = String, Path, description = "Thought ID")),
    request_body = UpdateThoughtRequest,
    responses(
        (status = 200, description = "Thought updated"),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "Not found or not owned", body = crate::models::ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn update_thought(
    thought_service: web::Data<ThoughtService>,
    path: web::Path<String>,
    body: web::Json<UpdateThoughtRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    body.validate().map_err(validation_errors_to_api_error)?;
    let thought_id = path.into_inner();

    thought_service
        .update(&claims, &thought_id, body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(MSG_THOUGHT_UPDATED)))
}

/// Remove one of the user's thoughts
#[utoipa::path(
    delete,
    path = "/api/dashboard/thoughts/{id}",
    tag = "Thoughts",
    params(("id" = String, Path, description = "Thought ID")),
    responses(
        (status = 200, description = "Thought removed"),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "Not found or not owned", body = crate::models::ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn remove_thought(
    thought_service: web::Data<ThoughtService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    let thought_id = path.into_inner();

    thought_service.remove(&claims, &thought_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(MSG_THOUGHT_REMOVED)))
}
