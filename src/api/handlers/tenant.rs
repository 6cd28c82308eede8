use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::CreateTenantRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::tenant::{Tenant, ROLE_OWNER};
use crate::domain::services::validation::validate_tenant_id;
use crate::error::AppError;
use crate::state::AppState;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Provision a tenant: the row itself, its subdomain under the platform's
/// base domain, and an owner membership for the caller.
pub async fn create_tenant(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateTenantRequest>,
) -> Result<impl IntoResponse, AppError> {
    let errors = validate_tenant_id(&payload.tenant_id);
    if !errors.is_empty() {
        return Err(AppError::ValidationFailed(errors));
    }

    if state.tenant_repo.find_by_id(&payload.tenant_id).await?.is_some() {
        return Err(AppError::Conflict("Tenant already exists".into()));
    }

    let tenant = state
        .tenant_repo
        .create(&Tenant::new(payload.tenant_id))
        .await?;

    let domain = format!("{}.{}", tenant.id, state.config.base_domain);
    state.tenant_repo.add_domain(&tenant.id, &domain).await?;
    state
        .tenant_repo
        .add_member(&tenant.id, &user.id, ROLE_OWNER)
        .await?;

    info!("Tenant created: {} ({})", tenant.id, domain);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "tenant": tenant, "domain": domain })),
    ))
}

pub async fn list_tenants(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let tenants = state.tenant_repo.list_for_user(&user.id).await?;
    Ok(Json(tenants))
}

pub async fn delete_tenant(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(tenant_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let role = state
        .tenant_repo
        .member_role(&tenant_id, &user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Tenant not found".into()))?;

    if role != ROLE_OWNER {
        return Err(AppError::Forbidden("Only the owner can delete a tenant".into()));
    }

    state.tenant_repo.delete(&tenant_id).await?;

    info!("Tenant deleted: {}", tenant_id);

    Ok(StatusCode::NO_CONTENT)
}
