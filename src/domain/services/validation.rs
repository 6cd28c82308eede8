use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::{ValidationError, ValidationErrors};

/// Lowercase words separated by single hyphens, e.g. `landing-page-2`.
pub static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug regex"));

/// Subdomain labels: lowercase alphanumeric plus `-` and `_`.
pub static TENANT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("tenant id regex"));

/// Slugs that would shadow application routes and can never name a page.
pub const RESERVED_SLUGS: &[&str] = &[
    "api",
    "dashboard",
    "admin",
    "login",
    "logout",
    "register",
    "password",
    "reset-password",
    "verify-email",
    "two-factor",
    "user",
    "users",
    "settings",
    "profile",
    "search",
    "sitemap",
    "feed",
    "rss",
];

pub fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Local (store-independent) checks for the page create/update form. The
/// caller appends the uniqueness error before deciding whether to fail, so
/// every violation is reported in one response.
pub fn validate_post_form(title: &str, slug: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if title.trim().is_empty() {
        errors.add("title", field_error("required", "The title is required."));
    } else if title.chars().count() > 255 {
        errors.add("title", field_error("max_length", "The title may not be longer than 255 characters."));
    }

    if slug.trim().is_empty() {
        errors.add("slug", field_error("required", "The slug is required."));
    } else if slug.chars().count() > 255 {
        errors.add("slug", field_error("max_length", "The slug may not be longer than 255 characters."));
    } else if !SLUG_RE.is_match(slug) {
        errors.add("slug", field_error("regex", "Only lowercase letters, numbers and hyphens."));
    } else if RESERVED_SLUGS.contains(&slug) {
        errors.add("slug", field_error("reserved", "This slug is reserved and cannot be used."));
    }

    errors
}

/// Checks for the tenant subdomain label: 3-50 chars of `[a-z0-9_-]`.
pub fn validate_tenant_id(tenant_id: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if tenant_id.trim().is_empty() {
        errors.add("tenant_id", field_error("required", "The subdomain is required."));
        return errors;
    }
    if tenant_id.chars().count() < 3 {
        errors.add("tenant_id", field_error("min_length", "The subdomain must be at least 3 characters."));
    } else if tenant_id.chars().count() > 50 {
        errors.add("tenant_id", field_error("max_length", "The subdomain may not be longer than 50 characters."));
    }
    if !TENANT_ID_RE.is_match(tenant_id) {
        errors.add("tenant_id", field_error("regex", "Only lowercase letters, numbers, hyphens and underscores."));
    }

    errors
}
