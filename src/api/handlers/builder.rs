use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse},
    Json,
};
use crate::api::dtos::requests::{BuilderQuery, UpdateContentRequest};
use crate::api::dtos::responses::MessageResponse;
use crate::api::extractors::membership::TenantMember;
use crate::domain::models::post::PostType;
use crate::domain::services::cdn::CdnList;
use crate::domain::services::content::strip_page_wrapper;
use crate::domain::services::render::{render_builder, render_preview};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

/// Serve the editor shell for a post. The editor client may carry CDN
/// entries the server has not persisted yet; it sends them in `?local=` and
/// gets the union back inside `window.post`, server entries first.
pub async fn page_builder(
    State(state): State<Arc<AppState>>,
    member: TenantMember,
    Path(slug): Path<String>,
    Query(query): Query<BuilderQuery>,
) -> Result<impl IntoResponse, AppError> {
    let post = state
        .post_repo
        .find_by_slug(&member.tenant.id, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".into()))?;

    let server_cdns = post.cdns();
    let local_cdns = query
        .local
        .as_deref()
        .map(CdnList::parse)
        .unwrap_or_default();
    let merged = CdnList::merge(&server_cdns, &local_cdns);

    let html = render_builder(&state.templates, &post, &merged, &member.tenant.id)?;
    Ok(Html(html))
}

/// Builder save. Component content arrives as a full document from the
/// editor export; only its body interior is stored.
pub async fn update_content(
    State(state): State<Arc<AppState>>,
    member: TenantMember,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateContentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let post = state
        .post_repo
        .find_by_slug(&member.tenant.id, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".into()))?;

    let content_body = if PostType::parse(&post.kind) == Some(PostType::Component) {
        strip_page_wrapper(&payload.content_body)
    } else {
        payload.content_body
    };

    let affected = state
        .post_repo
        .update_content(
            &member.tenant.id,
            &slug,
            &content_body,
            &payload.content_css,
            &payload.cdns.to_json(),
        )
        .await?;

    if affected == 0 {
        return Err(AppError::NotFound("Post not found".into()));
    }

    info!("Content saved for {}/{}", member.tenant.id, slug);

    Ok(Json(MessageResponse {
        message: "Content updated successfully",
    }))
}

pub async fn preview(
    State(state): State<Arc<AppState>>,
    member: TenantMember,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let post = state
        .post_repo
        .find_by_slug(&member.tenant.id, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".into()))?;

    let html = render_preview(&state.templates, &post)?;
    Ok(Html(html))
}
