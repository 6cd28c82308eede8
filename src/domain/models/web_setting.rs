use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const DEFAULT_ROBOTS: &str = "index, follow";

/// One flat row of SEO / social / branding / analytics settings per tenant.
/// Fields are stored as plain strings; empty string means "not set".
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct WebSetting {
    pub tenant_id: String,

    // SEO
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub canonical_url: String,
    pub robots: String,
    pub favicon: String,

    // Social media
    pub facebook_url: String,
    pub instagram_url: String,
    pub twitter_url: String,
    pub linkedin_url: String,
    pub youtube_url: String,
    pub tiktok_url: String,
    pub whatsapp_number: String,

    // Branding & colors
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub logo: String,
    pub logo_dark: String,

    // Analytics & scripts
    pub google_analytics_id: String,
    pub custom_head_scripts: String,
    pub custom_body_scripts: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WebSetting {
    /// The record a tenant sees before ever saving: everything blank except
    /// robots.
    pub fn defaults(tenant_id: &str) -> Self {
        let now = Utc::now();
        Self {
            tenant_id: tenant_id.to_string(),
            meta_title: String::new(),
            meta_description: String::new(),
            meta_keywords: String::new(),
            og_title: String::new(),
            og_description: String::new(),
            og_image: String::new(),
            canonical_url: String::new(),
            robots: DEFAULT_ROBOTS.to_string(),
            favicon: String::new(),
            facebook_url: String::new(),
            instagram_url: String::new(),
            twitter_url: String::new(),
            linkedin_url: String::new(),
            youtube_url: String::new(),
            tiktok_url: String::new(),
            whatsapp_number: String::new(),
            primary_color: String::new(),
            secondary_color: String::new(),
            accent_color: String::new(),
            logo: String::new(),
            logo_dark: String::new(),
            google_analytics_id: String::new(),
            custom_head_scripts: String::new(),
            custom_body_scripts: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
