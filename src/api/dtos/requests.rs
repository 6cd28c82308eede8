use serde::Deserialize;
use validator::Validate;

use crate::domain::models::post::{PostListFilter, PostType, SortDir, SortField};
use crate::domain::models::web_setting::{WebSetting, DEFAULT_ROBOTS};
use crate::domain::services::cdn::CdnList;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateTenantRequest {
    pub tenant_id: String,
}

#[derive(Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub kind: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct BulkActionRequest {
    pub action: String,
    pub ids: Vec<String>,
}

#[derive(Deserialize)]
pub struct UpdateContentRequest {
    #[serde(default)]
    pub content_body: String,
    #[serde(default)]
    pub content_css: String,
    #[serde(default)]
    pub cdns: CdnList,
}

/// Query string for the paginated list and the select-all id endpoint.
/// Unknown values fall back to the defaults rather than erroring; the
/// dashboard links are user-editable URLs.
#[derive(Deserialize, Default)]
pub struct ListPagesQuery {
    pub kind: Option<String>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub page: Option<u32>,
}

impl ListPagesQuery {
    pub fn into_filter(self) -> PostListFilter {
        let defaults = PostListFilter::default();
        PostListFilter {
            kind: self
                .kind
                .as_deref()
                .and_then(PostType::parse)
                .unwrap_or(defaults.kind),
            search: self.search.filter(|s| !s.is_empty()),
            status: self.status.filter(|s| !s.is_empty()),
            sort: self
                .sort
                .as_deref()
                .and_then(SortField::parse)
                .unwrap_or(defaults.sort),
            dir: match self.dir.as_deref() {
                Some("asc") => SortDir::Asc,
                Some("desc") => SortDir::Desc,
                _ => defaults.dir,
            },
            page: self.page.unwrap_or(1).max(1),
        }
    }
}

#[derive(Deserialize)]
pub struct BuilderQuery {
    /// JSON-encoded CDN list held by the editor client, merged with the
    /// persisted one before rendering.
    pub local: Option<String>,
}

/// All fields optional; absent and empty both mean "clear". URL checks only
/// run on present values, so `normalized` must be applied before `validate`.
#[derive(Deserialize, Validate, Default)]
pub struct SaveWebSettingsRequest {
    #[validate(length(max = 255))]
    pub meta_title: Option<String>,
    #[validate(length(max = 1000))]
    pub meta_description: Option<String>,
    #[validate(length(max = 500))]
    pub meta_keywords: Option<String>,
    #[validate(length(max = 255))]
    pub og_title: Option<String>,
    #[validate(length(max = 1000))]
    pub og_description: Option<String>,
    #[validate(url, length(max = 2048))]
    pub og_image: Option<String>,
    #[validate(url, length(max = 2048))]
    pub canonical_url: Option<String>,
    #[validate(length(max = 100))]
    pub robots: Option<String>,
    #[validate(url, length(max = 2048))]
    pub favicon: Option<String>,
    #[validate(url, length(max = 2048))]
    pub facebook_url: Option<String>,
    #[validate(url, length(max = 2048))]
    pub instagram_url: Option<String>,
    #[validate(url, length(max = 2048))]
    pub twitter_url: Option<String>,
    #[validate(url, length(max = 2048))]
    pub linkedin_url: Option<String>,
    #[validate(url, length(max = 2048))]
    pub youtube_url: Option<String>,
    #[validate(url, length(max = 2048))]
    pub tiktok_url: Option<String>,
    #[validate(length(max = 20))]
    pub whatsapp_number: Option<String>,
    #[validate(length(max = 20))]
    pub primary_color: Option<String>,
    #[validate(length(max = 20))]
    pub secondary_color: Option<String>,
    #[validate(length(max = 20))]
    pub accent_color: Option<String>,
    #[validate(url, length(max = 2048))]
    pub logo: Option<String>,
    #[validate(url, length(max = 2048))]
    pub logo_dark: Option<String>,
    #[validate(length(max = 50))]
    pub google_analytics_id: Option<String>,
    #[validate(length(max = 5000))]
    pub custom_head_scripts: Option<String>,
    #[validate(length(max = 5000))]
    pub custom_body_scripts: Option<String>,
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl SaveWebSettingsRequest {
    /// Collapse empty strings to `None` so URL validation never fires on a
    /// cleared field.
    pub fn normalized(self) -> Self {
        Self {
            meta_title: blank_to_none(self.meta_title),
            meta_description: blank_to_none(self.meta_description),
            meta_keywords: blank_to_none(self.meta_keywords),
            og_title: blank_to_none(self.og_title),
            og_description: blank_to_none(self.og_description),
            og_image: blank_to_none(self.og_image),
            canonical_url: blank_to_none(self.canonical_url),
            robots: blank_to_none(self.robots),
            favicon: blank_to_none(self.favicon),
            facebook_url: blank_to_none(self.facebook_url),
            instagram_url: blank_to_none(self.instagram_url),
            twitter_url: blank_to_none(self.twitter_url),
            linkedin_url: blank_to_none(self.linkedin_url),
            youtube_url: blank_to_none(self.youtube_url),
            tiktok_url: blank_to_none(self.tiktok_url),
            whatsapp_number: blank_to_none(self.whatsapp_number),
            primary_color: blank_to_none(self.primary_color),
            secondary_color: blank_to_none(self.secondary_color),
            accent_color: blank_to_none(self.accent_color),
            logo: blank_to_none(self.logo),
            logo_dark: blank_to_none(self.logo_dark),
            google_analytics_id: blank_to_none(self.google_analytics_id),
            custom_head_scripts: blank_to_none(self.custom_head_scripts),
            custom_body_scripts: blank_to_none(self.custom_body_scripts),
        }
    }

    pub fn into_setting(self, tenant_id: &str) -> WebSetting {
        let mut setting = WebSetting::defaults(tenant_id);
        setting.meta_title = self.meta_title.unwrap_or_default();
        setting.meta_description = self.meta_description.unwrap_or_default();
        setting.meta_keywords = self.meta_keywords.unwrap_or_default();
        setting.og_title = self.og_title.unwrap_or_default();
        setting.og_description = self.og_description.unwrap_or_default();
        setting.og_image = self.og_image.unwrap_or_default();
        setting.canonical_url = self.canonical_url.unwrap_or_default();
        setting.robots = self.robots.unwrap_or_else(|| DEFAULT_ROBOTS.to_string());
        setting.favicon = self.favicon.unwrap_or_default();
        setting.facebook_url = self.facebook_url.unwrap_or_default();
        setting.instagram_url = self.instagram_url.unwrap_or_default();
        setting.twitter_url = self.twitter_url.unwrap_or_default();
        setting.linkedin_url = self.linkedin_url.unwrap_or_default();
        setting.youtube_url = self.youtube_url.unwrap_or_default();
        setting.tiktok_url = self.tiktok_url.unwrap_or_default();
        setting.whatsapp_number = self.whatsapp_number.unwrap_or_default();
        setting.primary_color = self.primary_color.unwrap_or_default();
        setting.secondary_color = self.secondary_color.unwrap_or_default();
        setting.accent_color = self.accent_color.unwrap_or_default();
        setting.logo = self.logo.unwrap_or_default();
        setting.logo_dark = self.logo_dark.unwrap_or_default();
        setting.google_analytics_id = self.google_analytics_id.unwrap_or_default();
        setting.custom_head_scripts = self.custom_head_scripts.unwrap_or_default();
        setting.custom_body_scripts = self.custom_body_scripts.unwrap_or_default();
        setting
    }
}
