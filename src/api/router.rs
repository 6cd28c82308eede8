use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::api::handlers::{auth, builder, health, post as post_handlers, tenant, web_setting};
use crate::state::AppState;
use tower_cookies::CookieManagerLayer;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth (central, host-independent)
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))

        // Tenant provisioning (central)
        .route("/api/v1/tenants", post(tenant::create_tenant).get(tenant::list_tenants))
        .route("/api/v1/tenants/{tenant_id}", delete(tenant::delete_tenant))

        // Dashboard (resolved by Host header, membership-guarded)
        .route("/dashboard/pages", get(post_handlers::list_pages).post(post_handlers::create_page))
        .route("/dashboard/pages/ids", get(post_handlers::list_page_ids))
        .route("/dashboard/pages/bulk", post(post_handlers::bulk_action))
        .route("/dashboard/pages/{post}", put(post_handlers::update_page).delete(post_handlers::delete_page))
        .route("/dashboard/pages/{post}/status", put(post_handlers::update_page_status))
        .route("/dashboard/pages/{post}/duplicate", post(post_handlers::duplicate_page))

        // Builder pipeline (slug-addressed)
        .route("/dashboard/pages/{post}/page-builder", get(builder::page_builder))
        .route("/dashboard/pages/{post}/update-content", post(builder::update_content))
        .route("/dashboard/pages/{post}/preview", get(builder::preview))

        // Per-tenant site settings
        .route("/dashboard/web-settings", get(web_setting::get_web_settings).post(web_setting::save_web_settings))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        tenant_id = tracing::field::Empty,
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
