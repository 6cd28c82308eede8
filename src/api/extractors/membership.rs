use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use crate::api::extractors::{auth::authenticated_user, tenant::CurrentTenant};
use crate::domain::models::{tenant::Tenant, user::User};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::Span;

/// The dashboard guard: tenant resolution first, then authentication, then
/// membership. Order matters for the status codes callers see; a request to
/// a host nobody owns is a 404 even when unauthenticated, while a stranger
/// hitting a real tenant gets a 403.
pub struct TenantMember {
    pub tenant: Tenant,
    pub user: User,
}

impl<S> FromRequestParts<S> for TenantMember
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentTenant(tenant) = CurrentTenant::from_request_parts(parts, state).await?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        let user = authenticated_user(parts, &app_state)
            .map_err(|_| AppError::Forbidden("Authentication required".into()))?;

        let is_member = app_state.tenant_repo.is_member(&tenant.id, &user.id).await?;
        if !is_member {
            return Err(AppError::Forbidden("Not a member of this tenant".into()));
        }

        Span::current().record("tenant_id", &tenant.id);

        Ok(TenantMember { tenant, user })
    }
}
