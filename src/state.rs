use std::sync::Arc;
use crate::domain::ports::{
    PostRepository, TenantRepository, UserRepository, WebSettingRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub tenant_repo: Arc<dyn TenantRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub post_repo: Arc<dyn PostRepository>,
    pub web_setting_repo: Arc<dyn WebSettingRepository>,
    pub auth_service: Arc<AuthService>,
    pub templates: Arc<Tera>,
}
