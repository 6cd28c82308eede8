use tera::{Context, Tera};
use tracing::error;

use crate::domain::models::post::Post;
use crate::domain::services::cdn::CdnList;
use crate::domain::services::content::is_head_script;
use crate::error::AppError;

/// Render the standalone public document for a post. CDN styles go in the
/// head; utility-framework scripts (see `is_head_script`) load in the head
/// to avoid a flash of unstyled content, everything else is deferred at the
/// end of the body, followed by the post's own JS.
pub fn render_preview(tera: &Tera, post: &Post) -> Result<String, AppError> {
    let cdns = post.cdns();
    let (head_scripts, body_scripts): (Vec<&String>, Vec<&String>) =
        cdns.scripts.iter().partition(|url| is_head_script(url));

    let mut ctx = Context::new();
    ctx.insert("title", &post.title);
    ctx.insert("styles", &cdns.styles);
    ctx.insert("head_scripts", &head_scripts);
    ctx.insert("body_scripts", &body_scripts);
    ctx.insert("content_css", &post.content_css);
    ctx.insert("content_body", &post.content_body);
    ctx.insert("content_js", &post.content_js);

    tera.render("page-preview.html", &ctx).map_err(|e| {
        error!("Failed to render preview for {}: {:?}", post.slug, e);
        AppError::Internal
    })
}

/// Render the editor shell: the post's body seeded into the editable
/// surface, plus a `window.post` object with the merged CDN list for the
/// client-side editor to pick up.
pub fn render_builder(
    tera: &Tera,
    post: &Post,
    cdns: &CdnList,
    subdomain: &str,
) -> Result<String, AppError> {
    let post_json = serde_json::json!({
        "id": post.id,
        "title": post.title,
        "slug": post.slug,
        "status": post.status,
        "kind": post.kind,
        "cdns": cdns,
    });

    let mut ctx = Context::new();
    ctx.insert("post_json", &post_json.to_string());
    ctx.insert("subdomain", subdomain);
    ctx.insert("content_body", &post.content_body);

    tera.render("page-builder.html", &ctx).map_err(|e| {
        error!("Failed to render builder for {}: {:?}", post.slug, e);
        AppError::Internal
    })
}
