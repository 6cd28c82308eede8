mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_same_slug_can_exist_in_two_tenants() {
    let app = TestApp::new().await;
    let auth_a = app.register_and_login("owner-a", "supersecret1").await;
    let auth_b = app.register_and_login("owner-b", "supersecret1").await;
    let host_a = app.create_tenant(&auth_a, "alpha").await;
    let host_b = app.create_tenant(&auth_b, "beta").await;

    for (auth, host) in [(&auth_a, &host_a), (&auth_b, &host_b)] {
        let res = app
            .dashboard_request(
                auth,
                host,
                "POST",
                "/dashboard/pages",
                Some(json!({ "title": "Home", "slug": "home" })),
            )
            .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    // Each tenant only sees its own row.
    for (auth, host) in [(&auth_a, &host_a), (&auth_b, &host_b)] {
        let res = app
            .dashboard_request(auth, host, "GET", "/dashboard/pages", None)
            .await;
        let listing = parse_body(res).await;
        assert_eq!(listing["total"], 1);
    }
}

#[tokio::test]
async fn test_non_member_gets_forbidden() {
    let app = TestApp::new().await;
    let auth_a = app.register_and_login("insider", "supersecret1").await;
    let auth_b = app.register_and_login("outsider", "supersecret1").await;
    let host_a = app.create_tenant(&auth_a, "private-club").await;

    let res = app
        .dashboard_request(&auth_b, &host_a, "GET", "/dashboard/pages", None)
        .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unauthenticated_dashboard_is_forbidden() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("lonely", "supersecret1").await;
    let host = app.create_tenant(&auth, "lonelyco").await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/dashboard/pages")
                .header(header::HOST, host)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unknown_host_is_not_found() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("nobody", "supersecret1").await;

    let res = app
        .dashboard_request(
            &auth,
            "ghost.testsite.local",
            "GET",
            "/dashboard/pages",
            None,
        )
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_host_port_suffix_is_ignored() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("porter", "supersecret1").await;
    let host = app.create_tenant(&auth, "porterco").await;

    let res = app
        .dashboard_request(
            &auth,
            &format!("{}:3000", host),
            "GET",
            "/dashboard/pages",
            None,
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_bulk_action_cannot_touch_foreign_rows() {
    let app = TestApp::new().await;
    let auth_a = app.register_and_login("victim", "supersecret1").await;
    let auth_b = app.register_and_login("attacker", "supersecret1").await;
    let host_a = app.create_tenant(&auth_a, "victimco").await;
    let host_b = app.create_tenant(&auth_b, "attackerco").await;

    let res = app
        .dashboard_request(
            &auth_a,
            &host_a,
            "POST",
            "/dashboard/pages",
            Some(json!({ "title": "Secret", "slug": "secret-draft" })),
        )
        .await;
    let page = parse_body(res).await;
    let foreign_id = page["id"].as_str().unwrap().to_string();

    // The attacker names the victim's id from their own tenant; the scoped
    // UPDATE matches nothing.
    let res = app
        .dashboard_request(
            &auth_b,
            &host_b,
            "POST",
            "/dashboard/pages/bulk",
            Some(json!({ "action": "publish", "ids": [foreign_id] })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["affected"], 0);

    // The victim's row is untouched.
    let res = app
        .dashboard_request(&auth_a, &host_a, "GET", "/dashboard/pages", None)
        .await;
    let listing = parse_body(res).await;
    assert_eq!(listing["data"][0]["status"], "draft");
}

#[tokio::test]
async fn test_tenant_delete_is_owner_only() {
    let app = TestApp::new().await;
    let auth_a = app.register_and_login("the-owner", "supersecret1").await;
    let auth_b = app.register_and_login("bystander", "supersecret1").await;
    app.create_tenant(&auth_a, "deleteme").await;

    // A non-member sees no tenant at all.
    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/tenants/deleteme")
                .header(
                    header::COOKIE,
                    format!("access_token={}", auth_b.access_token),
                )
                .header("X-CSRF-Token", &auth_b.csrf_token)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // The owner can delete.
    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/tenants/deleteme")
                .header(
                    header::COOKIE,
                    format!("access_token={}", auth_a.access_token),
                )
                .header("X-CSRF-Token", &auth_a.csrf_token)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    // Its domain stops resolving.
    let res = app
        .dashboard_request(
            &auth_a,
            "deleteme.testsite.local",
            "GET",
            "/dashboard/pages",
            None,
        )
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_tenant_id_validation() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("strict", "supersecret1").await;

    for bad_id in ["ab", "UPPER", "has space", &"x".repeat(51)] {
        let res = app
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/tenants")
                    .header(header::COOKIE, format!("access_token={}", auth.access_token))
                    .header("X-CSRF-Token", &auth.csrf_token)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json!({ "tenant_id": bad_id }).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            res.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "tenant id {:?} should be rejected",
            bad_id
        );
    }
}
