use crate::domain::models::{
    post::{Post, PostListFilter, PostPage},
    tenant::Tenant,
    user::User,
    web_setting::WebSetting,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait TenantRepository: Send + Sync {
    async fn create(&self, tenant: &Tenant) -> Result<Tenant, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Tenant>, AppError>;
    /// Resolve a request host to its owning tenant via the domains table.
    async fn find_by_domain(&self, domain: &str) -> Result<Option<Tenant>, AppError>;
    async fn add_domain(&self, tenant_id: &str, domain: &str) -> Result<(), AppError>;
    async fn add_member(&self, tenant_id: &str, user_id: &str, role: &str) -> Result<(), AppError>;
    async fn is_member(&self, tenant_id: &str, user_id: &str) -> Result<bool, AppError>;
    async fn member_role(&self, tenant_id: &str, user_id: &str) -> Result<Option<String>, AppError>;
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Tenant>, AppError>;
    /// Deletes the tenant row; owned rows (domains, memberships, posts,
    /// web settings) go with it via foreign key cascade.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
}

/// Every operation takes the tenant identifier explicitly; no ambient tenant
/// state exists anywhere below the extractors.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: &Post) -> Result<Post, AppError>;
    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<Post>, AppError>;
    async fn find_by_slug(&self, tenant_id: &str, slug: &str) -> Result<Option<Post>, AppError>;
    async fn list(&self, tenant_id: &str, filter: &PostListFilter) -> Result<PostPage, AppError>;
    /// The full filtered identifier set, ignoring pagination. Used to
    /// materialize "select all" eagerly.
    async fn list_ids(&self, tenant_id: &str, filter: &PostListFilter) -> Result<Vec<String>, AppError>;
    async fn slug_in_use(
        &self,
        tenant_id: &str,
        kind: &str,
        slug: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, AppError>;
    async fn update(&self, post: &Post) -> Result<Post, AppError>;
    /// Narrow update used by the builder save: body, css and cdns only.
    async fn update_content(
        &self,
        tenant_id: &str,
        slug: &str,
        content_body: &str,
        content_css: &str,
        cdns_json: &str,
    ) -> Result<u64, AppError>;
    async fn update_status(&self, tenant_id: &str, id: &str, status: &str) -> Result<(), AppError>;
    async fn update_status_bulk(&self, tenant_id: &str, ids: &[String], status: &str) -> Result<u64, AppError>;
    async fn delete(&self, tenant_id: &str, id: &str) -> Result<(), AppError>;
    async fn delete_bulk(&self, tenant_id: &str, ids: &[String]) -> Result<u64, AppError>;
}

#[async_trait]
pub trait WebSettingRepository: Send + Sync {
    async fn find_by_tenant(&self, tenant_id: &str) -> Result<Option<WebSetting>, AppError>;
    /// Create-if-absent, else update, keyed by tenant.
    async fn upsert(&self, setting: &WebSetting) -> Result<WebSetting, AppError>;
}
