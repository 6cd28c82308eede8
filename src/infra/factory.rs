use crate::config::Config;
use crate::domain::services::auth_service::AuthService;
use crate::infra::repositories::{
    sqlite_post_repo::SqlitePostRepo, sqlite_tenant_repo::SqliteTenantRepo,
    sqlite_user_repo::SqliteUserRepo, sqlite_web_setting_repo::SqliteWebSettingRepo,
};
use crate::state::AppState;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tera::Tera;
use tracing::info;

/// In-process template set. Templates are compiled into the binary, so a
/// missing or broken template is a build/startup failure, never a request one.
pub fn load_templates() -> Tera {
    let mut tera = Tera::default();
    tera.add_raw_template(
        "page-preview.html",
        include_str!("../templates/page-preview.html"),
    )
    .expect("page-preview.html template must parse");
    tera.add_raw_template(
        "page-builder.html",
        include_str!("../templates/page-builder.html"),
    )
    .expect("page-builder.html template must parse");
    tera
}

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Connecting to SQLite: {}", config.database_url);

    let options = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid DATABASE_URL")
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("Failed to connect to SQLite");

    sqlx::migrate!("./migrations/sqlite")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    info!("Migrations applied");

    AppState {
        config: config.clone(),
        tenant_repo: Arc::new(SqliteTenantRepo::new(pool.clone())),
        user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
        post_repo: Arc::new(SqlitePostRepo::new(pool.clone())),
        web_setting_repo: Arc::new(SqliteWebSettingRepo::new(pool)),
        auth_service: Arc::new(AuthService::new(config.clone())),
        templates: Arc::new(load_templates()),
    }
}
