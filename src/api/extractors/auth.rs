use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
};
use crate::domain::models::auth::Claims;
use crate::domain::models::user::User;
use crate::domain::services::auth_service::TOKEN_AUDIENCE;
use crate::state::AppState;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::Span;

/// Shared JWT check. Reads the access token cookie, verifies the EdDSA
/// signature and audience, and for mutating methods enforces the
/// double-submit CSRF header against the token's embedded CSRF claim.
pub(crate) fn authenticated_user(
    parts: &Parts,
    state: &AppState,
) -> Result<User, StatusCode> {
    let cookies = parts
        .extensions
        .get::<Cookies>()
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

    let access_token = cookies
        .get("access_token")
        .ok_or(StatusCode::UNAUTHORIZED)?
        .value()
        .to_string();

    let decoding_key = DecodingKey::from_ed_pem(state.config.jwt_public_key.as_bytes())
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let mut validation = Validation::new(Algorithm::EdDSA);
    validation.set_audience(&[TOKEN_AUDIENCE]);

    let token_data = decode::<Claims>(&access_token, &decoding_key, &validation)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let method = &parts.method;
    if method != "GET" && method != "HEAD" && method != "OPTIONS" {
        let csrf_header_val = parts
            .headers
            .get("X-CSRF-Token")
            .ok_or(StatusCode::FORBIDDEN)?
            .to_str()
            .map_err(|_| StatusCode::FORBIDDEN)?;

        if csrf_header_val != token_data.claims.csrf_token {
            return Err(StatusCode::FORBIDDEN);
        }
    }

    let user = User {
        id: token_data.claims.sub,
        username: token_data.claims.username,
        password_hash: String::new(),
        created_at: chrono::Utc::now(),
    };

    Span::current().record("user_id", &user.id);

    Ok(user)
}

pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        let user = authenticated_user(parts, &app_state)?;
        Ok(AuthUser(user))
    }
}
