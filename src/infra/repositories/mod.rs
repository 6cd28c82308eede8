pub mod sqlite_post_repo;
pub mod sqlite_tenant_repo;
pub mod sqlite_user_repo;
pub mod sqlite_web_setting_repo;
