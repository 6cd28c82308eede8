use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::{
    BulkActionRequest, CreatePostRequest, ListPagesQuery, UpdatePostRequest, UpdateStatusRequest,
};
use crate::api::dtos::responses::{BulkActionResponse, IdListResponse, PostListResponse};
use crate::api::extractors::membership::TenantMember;
use crate::domain::models::post::{Post, PostStatus, PostType};
use crate::domain::services::validation::{field_error, validate_post_form};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn list_pages(
    State(state): State<Arc<AppState>>,
    member: TenantMember,
    Query(query): Query<ListPagesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = query.into_filter();
    let page = filter.page;
    let result = state.post_repo.list(&member.tenant.id, &filter).await?;

    for post in &result.items {
        if PostStatus::parse(&post.status).is_none() {
            warn!(
                "Post {} in tenant {} has out-of-set status '{}'",
                post.id, member.tenant.id, post.status
            );
        }
    }

    Ok(Json(PostListResponse::from_page(result, page)))
}

/// The full filtered identifier set, for "select all across pages". The
/// client gets a concrete list back so later bulk calls name exactly the
/// rows that matched at selection time.
pub async fn list_page_ids(
    State(state): State<Arc<AppState>>,
    member: TenantMember,
    Query(query): Query<ListPagesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = query.into_filter();
    let ids = state.post_repo.list_ids(&member.tenant.id, &filter).await?;
    Ok(Json(IdListResponse { ids }))
}

pub async fn create_page(
    State(state): State<Arc<AppState>>,
    member: TenantMember,
    Json(payload): Json<CreatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut errors = validate_post_form(&payload.title, &payload.slug);

    let kind = match payload.kind.as_deref() {
        None | Some("") => PostType::Page,
        Some(raw) => match PostType::parse(raw) {
            Some(kind) => kind,
            None => {
                errors.add("kind", field_error("in", "Unknown content kind"));
                PostType::Page
            }
        },
    };

    if errors.is_empty()
        && state
            .post_repo
            .slug_in_use(&member.tenant.id, kind.as_str(), &payload.slug, None)
            .await?
    {
        errors.add("slug", field_error("unique", "Slug already in use"));
    }

    if !errors.is_empty() {
        return Err(AppError::ValidationFailed(errors));
    }

    let post = state
        .post_repo
        .create(&Post::new(
            member.tenant.id.clone(),
            payload.title,
            payload.slug,
            kind,
        ))
        .await?;

    info!("Post created: {} ({}/{})", post.id, post.kind, post.slug);

    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn update_page(
    State(state): State<Arc<AppState>>,
    member: TenantMember,
    Path(post_id): Path<String>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut post = state
        .post_repo
        .find_by_id(&member.tenant.id, &post_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".into()))?;

    let mut errors = validate_post_form(&payload.title, &payload.slug);

    if let Some(status) = payload.status.as_deref() {
        if PostStatus::parse(status).is_none() {
            errors.add("status", field_error("in", "Unknown status"));
        }
    }

    if errors.is_empty()
        && state
            .post_repo
            .slug_in_use(&member.tenant.id, &post.kind, &payload.slug, Some(&post.id))
            .await?
    {
        errors.add("slug", field_error("unique", "Slug already in use"));
    }

    if !errors.is_empty() {
        return Err(AppError::ValidationFailed(errors));
    }

    post.title = payload.title;
    post.slug = payload.slug;
    if let Some(excerpt) = payload.excerpt {
        post.excerpt = excerpt;
    }
    if let Some(status) = payload.status {
        post.status = status;
    }

    let updated = state.post_repo.update(&post).await?;
    Ok(Json(updated))
}

pub async fn update_page_status(
    State(state): State<Arc<AppState>>,
    member: TenantMember,
    Path(post_id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let status = PostStatus::parse(&payload.status).ok_or_else(|| {
        let mut errors = validator::ValidationErrors::new();
        errors.add("status", field_error("in", "Unknown status"));
        AppError::ValidationFailed(errors)
    })?;

    state
        .post_repo
        .update_status(&member.tenant.id, &post_id, status.as_str())
        .await?;

    Ok(StatusCode::OK)
}

/// One endpoint for all list-screen bulk actions. Unknown actions are a
/// deliberate no-op reporting zero affected rows, so stale clients never
/// turn into errors or surprises.
pub async fn bulk_action(
    State(state): State<Arc<AppState>>,
    member: TenantMember,
    Json(payload): Json<BulkActionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let tenant_id = &member.tenant.id;
    let affected = match payload.action.as_str() {
        "publish" => {
            state
                .post_repo
                .update_status_bulk(tenant_id, &payload.ids, PostStatus::Published.as_str())
                .await?
        }
        "draft" => {
            state
                .post_repo
                .update_status_bulk(tenant_id, &payload.ids, PostStatus::Draft.as_str())
                .await?
        }
        "archive" => {
            state
                .post_repo
                .update_status_bulk(tenant_id, &payload.ids, PostStatus::Archived.as_str())
                .await?
        }
        "delete" => state.post_repo.delete_bulk(tenant_id, &payload.ids).await?,
        other => {
            warn!("Ignoring unknown bulk action '{}'", other);
            0
        }
    };

    info!(
        "Bulk action '{}' on {} ids affected {} rows",
        payload.action,
        payload.ids.len(),
        affected
    );

    Ok(Json(BulkActionResponse { affected }))
}

pub async fn duplicate_page(
    State(state): State<Arc<AppState>>,
    member: TenantMember,
    Path(post_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let post = state
        .post_repo
        .find_by_id(&member.tenant.id, &post_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".into()))?;

    let copy = state.post_repo.create(&post.duplicate()).await?;

    info!("Post {} duplicated as {}", post.id, copy.id);

    Ok((StatusCode::CREATED, Json(copy)))
}

pub async fn delete_page(
    State(state): State<Arc<AppState>>,
    member: TenantMember,
    Path(post_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.post_repo.delete(&member.tenant.id, &post_id).await?;

    info!("Post deleted: {}", post_id);

    Ok(StatusCode::NO_CONTENT)
}
