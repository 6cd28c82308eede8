use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::requests::SaveWebSettingsRequest;
use crate::api::extractors::membership::TenantMember;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

/// Tenants that never saved get the default record rather than a 404; the
/// settings screen always has something to show.
pub async fn get_web_settings(
    State(state): State<Arc<AppState>>,
    member: TenantMember,
) -> Result<impl IntoResponse, AppError> {
    let setting = state
        .web_setting_repo
        .find_by_tenant(&member.tenant.id)
        .await?
        .unwrap_or_else(|| {
            crate::domain::models::web_setting::WebSetting::defaults(&member.tenant.id)
        });

    Ok(Json(setting))
}

pub async fn save_web_settings(
    State(state): State<Arc<AppState>>,
    member: TenantMember,
    Json(payload): Json<SaveWebSettingsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let payload = payload.normalized();
    payload.validate().map_err(AppError::ValidationFailed)?;

    let setting = state
        .web_setting_repo
        .upsert(&payload.into_setting(&member.tenant.id))
        .await?;

    info!("Web settings saved for tenant {}", member.tenant.id);

    Ok(Json(setting))
}
