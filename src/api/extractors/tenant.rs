use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use crate::domain::models::tenant::Tenant;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::debug;

/// Resolves the request's `Host` header to a tenant through the domains
/// table. Any port suffix is dropped before lookup. Unknown hosts are a 404:
/// the dashboard does not exist outside a tenant domain.
pub struct CurrentTenant(pub Tenant);

impl<S> FromRequestParts<S> for CurrentTenant
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let host = parts
            .headers
            .get(axum::http::header::HOST)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::NotFound("Unknown host".into()))?;

        let domain = host.split(':').next().unwrap_or(host);

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        let tenant = app_state
            .tenant_repo
            .find_by_domain(domain)
            .await?
            .ok_or_else(|| {
                debug!("No tenant registered for domain: {}", domain);
                AppError::NotFound("Unknown host".into())
            })?;

        Ok(CurrentTenant(tenant))
    }
}
