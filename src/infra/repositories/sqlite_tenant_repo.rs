use crate::domain::{models::tenant::Tenant, ports::TenantRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqliteTenantRepo {
    pool: SqlitePool,
}

impl SqliteTenantRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TenantRepository for SqliteTenantRepo {
    async fn create(&self, tenant: &Tenant) -> Result<Tenant, AppError> {
        sqlx::query_as::<_, Tenant>(
            r#"INSERT INTO tenants (id, data_json, created_at)
               VALUES (?, ?, ?)
               RETURNING *"#,
        )
            .bind(&tenant.id)
            .bind(&tenant.data_json)
            .bind(tenant.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Tenant>, AppError> {
        sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_domain(&self, domain: &str) -> Result<Option<Tenant>, AppError> {
        sqlx::query_as::<_, Tenant>(
            r#"SELECT t.* FROM tenants t
               JOIN domains d ON d.tenant_id = t.id
               WHERE d.domain = ?"#,
        )
            .bind(domain)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn add_domain(&self, tenant_id: &str, domain: &str) -> Result<(), AppError> {
        sqlx::query("INSERT INTO domains (domain, tenant_id, created_at) VALUES (?, ?, ?)")
            .bind(domain)
            .bind(tenant_id)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn add_member(&self, tenant_id: &str, user_id: &str, role: &str) -> Result<(), AppError> {
        sqlx::query("INSERT INTO tenants_users (tenant_id, user_id, role, created_at) VALUES (?, ?, ?, ?)")
            .bind(tenant_id)
            .bind(user_id)
            .bind(role)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn is_member(&self, tenant_id: &str, user_id: &str) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tenants_users WHERE tenant_id = ? AND user_id = ?",
        )
            .bind(tenant_id)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(count > 0)
    }

    async fn member_role(&self, tenant_id: &str, user_id: &str) -> Result<Option<String>, AppError> {
        sqlx::query_scalar(
            "SELECT role FROM tenants_users WHERE tenant_id = ? AND user_id = ?",
        )
            .bind(tenant_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Tenant>, AppError> {
        sqlx::query_as::<_, Tenant>(
            r#"SELECT t.* FROM tenants t
               JOIN tenants_users tu ON tu.tenant_id = t.id
               WHERE tu.user_id = ?
               ORDER BY t.created_at DESC"#,
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tenants WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Tenant not found".into()));
        }
        Ok(())
    }
}
