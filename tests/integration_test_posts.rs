mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::{json, Value};

async fn parse_body(response: axum::response::Response) -> Value {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    if bytes.is_empty() {
        panic!("Response body is empty. Status: {}", status);
    }
    match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => panic!(
            "Failed to parse JSON: {:?}. Status: {}. Body: {:?}",
            e,
            status,
            String::from_utf8_lossy(&bytes)
        ),
    }
}

#[tokio::test]
async fn test_page_crud_lifecycle() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("alice", "supersecret1").await;
    let host = app.create_tenant(&auth, "acme").await;

    // Create
    let res = app
        .dashboard_request(
            &auth,
            &host,
            "POST",
            "/dashboard/pages",
            Some(json!({ "title": "Landing", "slug": "landing" })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let page = parse_body(res).await;
    let page_id = page["id"].as_str().unwrap().to_string();
    assert_eq!(page["kind"], "page");
    assert_eq!(page["status"], "draft");
    assert_eq!(page["tenant_id"], "acme");

    // List contains it
    let res = app
        .dashboard_request(&auth, &host, "GET", "/dashboard/pages", None)
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let listing = parse_body(res).await;
    assert_eq!(listing["total"], 1);
    assert_eq!(listing["per_page"], 15);
    assert_eq!(listing["data"][0]["slug"], "landing");

    // Update title and slug
    let res = app
        .dashboard_request(
            &auth,
            &host,
            "PUT",
            &format!("/dashboard/pages/{}", page_id),
            Some(json!({ "title": "Landing v2", "slug": "landing-v2" })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = parse_body(res).await;
    assert_eq!(updated["title"], "Landing v2");
    assert_eq!(updated["slug"], "landing-v2");

    // Publish
    let res = app
        .dashboard_request(
            &auth,
            &host,
            "PUT",
            &format!("/dashboard/pages/{}/status", page_id),
            Some(json!({ "status": "published" })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    // Delete
    let res = app
        .dashboard_request(
            &auth,
            &host,
            "DELETE",
            &format!("/dashboard/pages/{}", page_id),
            None,
        )
        .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app
        .dashboard_request(&auth, &host, "GET", "/dashboard/pages", None)
        .await;
    let listing = parse_body(res).await;
    assert_eq!(listing["total"], 0);
}

#[tokio::test]
async fn test_create_page_reports_all_field_errors() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("bob", "supersecret1").await;
    let host = app.create_tenant(&auth, "bobco").await;

    let res = app
        .dashboard_request(
            &auth,
            &host,
            "POST",
            "/dashboard/pages",
            Some(json!({ "title": "", "slug": "Not A Slug" })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = parse_body(res).await;
    assert!(body["errors"]["title"].is_array());
    assert!(body["errors"]["slug"].is_array());
}

#[tokio::test]
async fn test_reserved_slug_rejected() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("carol", "supersecret1").await;
    let host = app.create_tenant(&auth, "carolco").await;

    let res = app
        .dashboard_request(
            &auth,
            &host,
            "POST",
            "/dashboard/pages",
            Some(json!({ "title": "Dashboard Clone", "slug": "dashboard" })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = parse_body(res).await;
    assert_eq!(body["errors"]["slug"][0]["code"], "reserved");
}

#[tokio::test]
async fn test_slug_unique_per_kind_not_globally() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("dave", "supersecret1").await;
    let host = app.create_tenant(&auth, "daveco").await;

    let res = app
        .dashboard_request(
            &auth,
            &host,
            "POST",
            "/dashboard/pages",
            Some(json!({ "title": "Header", "slug": "header-main" })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    // Same slug, same kind -> rejected
    let res = app
        .dashboard_request(
            &auth,
            &host,
            "POST",
            "/dashboard/pages",
            Some(json!({ "title": "Header Again", "slug": "header-main" })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = parse_body(res).await;
    assert_eq!(body["errors"]["slug"][0]["code"], "unique");

    // Same slug, different kind -> fine
    let res = app
        .dashboard_request(
            &auth,
            &host,
            "POST",
            "/dashboard/pages",
            Some(json!({ "title": "Header Component", "slug": "header-main", "kind": "component" })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_update_keeps_own_slug() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("erin", "supersecret1").await;
    let host = app.create_tenant(&auth, "erinco").await;

    let res = app
        .dashboard_request(
            &auth,
            &host,
            "POST",
            "/dashboard/pages",
            Some(json!({ "title": "About", "slug": "about" })),
        )
        .await;
    let page = parse_body(res).await;
    let page_id = page["id"].as_str().unwrap().to_string();

    // Re-saving under the same slug must not trip the uniqueness check.
    let res = app
        .dashboard_request(
            &auth,
            &host,
            "PUT",
            &format!("/dashboard/pages/{}", page_id),
            Some(json!({ "title": "About Us", "slug": "about" })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_status_rejected() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("frank", "supersecret1").await;
    let host = app.create_tenant(&auth, "frankco").await;

    let res = app
        .dashboard_request(
            &auth,
            &host,
            "POST",
            "/dashboard/pages",
            Some(json!({ "title": "News", "slug": "news" })),
        )
        .await;
    let page = parse_body(res).await;
    let page_id = page["id"].as_str().unwrap().to_string();

    let res = app
        .dashboard_request(
            &auth,
            &host,
            "PUT",
            &format!("/dashboard/pages/{}/status", page_id),
            Some(json!({ "status": "in-review" })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = parse_body(res).await;
    assert!(body["errors"]["status"].is_array());
}

#[tokio::test]
async fn test_duplicate_page_resets_status_and_cdns() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("grace", "supersecret1").await;
    let host = app.create_tenant(&auth, "graceco").await;

    let res = app
        .dashboard_request(
            &auth,
            &host,
            "POST",
            "/dashboard/pages",
            Some(json!({ "title": "Promo", "slug": "promo" })),
        )
        .await;
    let page = parse_body(res).await;
    let page_id = page["id"].as_str().unwrap().to_string();

    // Save some content and a CDN, then publish.
    let res = app
        .dashboard_request(
            &auth,
            &host,
            "POST",
            "/dashboard/pages/promo/update-content",
            Some(json!({
                "content_body": "<p>Sale</p>",
                "content_css": "p { color: red; }",
                "cdns": { "scripts": [], "styles": ["https://cdn.example.com/x.css"] }
            })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app
        .dashboard_request(
            &auth,
            &host,
            "PUT",
            &format!("/dashboard/pages/{}/status", page_id),
            Some(json!({ "status": "published" })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app
        .dashboard_request(
            &auth,
            &host,
            "POST",
            &format!("/dashboard/pages/{}/duplicate", page_id),
            None,
        )
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let copy = parse_body(res).await;

    assert!(copy["slug"].as_str().unwrap().starts_with("promo-copia-"));
    assert_eq!(copy["title"], "Promo (copia)");
    assert_eq!(copy["status"], "draft");
    assert_eq!(copy["content_body"], "<p>Sale</p>");
    // The CDN list starts fresh on the copy.
    let cdns: Value = serde_json::from_str(copy["cdns_json"].as_str().unwrap()).unwrap();
    assert_eq!(cdns["styles"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_tolerates_extreme_page_numbers() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("pager", "supersecret1").await;
    let host = app.create_tenant(&auth, "pagerco").await;

    let res = app
        .dashboard_request(
            &auth,
            &host,
            "POST",
            "/dashboard/pages",
            Some(json!({ "title": "Only One", "slug": "only-one" })),
        )
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    // A page number maxing out u32 must yield an empty page, not an error.
    let res = app
        .dashboard_request(
            &auth,
            &host,
            "GET",
            "/dashboard/pages?page=4294967295",
            None,
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let listing = parse_body(res).await;
    assert_eq!(listing["total"], 1);
    assert_eq!(listing["data"].as_array().unwrap().len(), 0);

    // page=0 falls back to the first page.
    let res = app
        .dashboard_request(&auth, &host, "GET", "/dashboard/pages?page=0", None)
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let listing = parse_body(res).await;
    assert_eq!(listing["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_search_and_pagination() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("henry", "supersecret1").await;
    let host = app.create_tenant(&auth, "henryco").await;

    for i in 0..20 {
        let res = app
            .dashboard_request(
                &auth,
                &host,
                "POST",
                "/dashboard/pages",
                Some(json!({ "title": format!("Page {}", i), "slug": format!("page-{}", i) })),
            )
            .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = app
        .dashboard_request(&auth, &host, "GET", "/dashboard/pages", None)
        .await;
    let listing = parse_body(res).await;
    assert_eq!(listing["total"], 20);
    assert_eq!(listing["data"].as_array().unwrap().len(), 15);
    assert_eq!(listing["total_pages"], 2);

    let res = app
        .dashboard_request(&auth, &host, "GET", "/dashboard/pages?page=2", None)
        .await;
    let listing = parse_body(res).await;
    assert_eq!(listing["data"].as_array().unwrap().len(), 5);

    // Search matches title or slug
    let res = app
        .dashboard_request(&auth, &host, "GET", "/dashboard/pages?search=page-19", None)
        .await;
    let listing = parse_body(res).await;
    assert_eq!(listing["total"], 1);
    assert_eq!(listing["data"][0]["slug"], "page-19");

    // Sorting by slug ascending
    let res = app
        .dashboard_request(
            &auth,
            &host,
            "GET",
            "/dashboard/pages?sort=slug&dir=asc",
            None,
        )
        .await;
    let listing = parse_body(res).await;
    assert_eq!(listing["data"][0]["slug"], "page-0");
}
