use crate::domain::models::web_setting::WebSetting;
use crate::domain::ports::WebSettingRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqliteWebSettingRepo {
    pool: SqlitePool,
}

impl SqliteWebSettingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WebSettingRepository for SqliteWebSettingRepo {
    async fn find_by_tenant(&self, tenant_id: &str) -> Result<Option<WebSetting>, AppError> {
        sqlx::query_as::<_, WebSetting>("SELECT * FROM web_settings WHERE tenant_id = ?")
            .bind(tenant_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn upsert(&self, setting: &WebSetting) -> Result<WebSetting, AppError> {
        sqlx::query_as::<_, WebSetting>(
            r#"INSERT INTO web_settings (
                tenant_id,
                meta_title, meta_description, meta_keywords,
                og_title, og_description, og_image,
                canonical_url, robots, favicon,
                facebook_url, instagram_url, twitter_url,
                linkedin_url, youtube_url, tiktok_url, whatsapp_number,
                primary_color, secondary_color, accent_color,
                logo, logo_dark,
                google_analytics_id, custom_head_scripts, custom_body_scripts,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(tenant_id) DO UPDATE SET
                meta_title = excluded.meta_title,
                meta_description = excluded.meta_description,
                meta_keywords = excluded.meta_keywords,
                og_title = excluded.og_title,
                og_description = excluded.og_description,
                og_image = excluded.og_image,
                canonical_url = excluded.canonical_url,
                robots = excluded.robots,
                favicon = excluded.favicon,
                facebook_url = excluded.facebook_url,
                instagram_url = excluded.instagram_url,
                twitter_url = excluded.twitter_url,
                linkedin_url = excluded.linkedin_url,
                youtube_url = excluded.youtube_url,
                tiktok_url = excluded.tiktok_url,
                whatsapp_number = excluded.whatsapp_number,
                primary_color = excluded.primary_color,
                secondary_color = excluded.secondary_color,
                accent_color = excluded.accent_color,
                logo = excluded.logo,
                logo_dark = excluded.logo_dark,
                google_analytics_id = excluded.google_analytics_id,
                custom_head_scripts = excluded.custom_head_scripts,
                custom_body_scripts = excluded.custom_body_scripts,
                updated_at = excluded.updated_at
            RETURNING *"#,
        )
            .bind(&setting.tenant_id)
            .bind(&setting.meta_title)
            .bind(&setting.meta_description)
            .bind(&setting.meta_keywords)
            .bind(&setting.og_title)
            .bind(&setting.og_description)
            .bind(&setting.og_image)
            .bind(&setting.canonical_url)
            .bind(&setting.robots)
            .bind(&setting.favicon)
            .bind(&setting.facebook_url)
            .bind(&setting.instagram_url)
            .bind(&setting.twitter_url)
            .bind(&setting.linkedin_url)
            .bind(&setting.youtube_url)
            .bind(&setting.tiktok_url)
            .bind(&setting.whatsapp_number)
            .bind(&setting.primary_color)
            .bind(&setting.secondary_color)
            .bind(&setting.accent_color)
            .bind(&setting.logo)
            .bind(&setting.logo_dark)
            .bind(&setting.google_analytics_id)
            .bind(&setting.custom_head_scripts)
            .bind(&setting.custom_body_scripts)
            .bind(setting.created_at)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
