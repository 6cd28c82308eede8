use crate::domain::models::post::{Post, PostListFilter, PostPage, PAGE_SIZE};
use crate::domain::ports::PostRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

pub struct SqlitePostRepo {
    pool: SqlitePool,
}

impl SqlitePostRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn push_filters(qb: &mut QueryBuilder<'_, Sqlite>, tenant_id: &str, filter: &PostListFilter) {
    qb.push(" WHERE tenant_id = ").push_bind(tenant_id.to_string());
    qb.push(" AND kind = ").push_bind(filter.kind.as_str());

    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search);
        qb.push(" AND (title LIKE ").push_bind(pattern.clone());
        qb.push(" OR slug LIKE ").push_bind(pattern);
        qb.push(")");
    }

    if let Some(status) = filter.status.as_deref().filter(|s| !s.is_empty()) {
        qb.push(" AND status = ").push_bind(status.to_string());
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepo {
    async fn create(&self, post: &Post) -> Result<Post, AppError> {
        sqlx::query_as::<_, Post>(
            r#"INSERT INTO posts (
                id, tenant_id, slug, kind, title,
                content_head, content_body, content_css, content_js,
                excerpt, status, cdns_json, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#,
        )
            .bind(&post.id)
            .bind(&post.tenant_id)
            .bind(&post.slug)
            .bind(&post.kind)
            .bind(&post.title)
            .bind(&post.content_head)
            .bind(&post.content_body)
            .bind(&post.content_css)
            .bind(&post.content_js)
            .bind(&post.excerpt)
            .bind(&post.status)
            .bind(&post.cdns_json)
            .bind(post.created_at)
            .bind(post.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<Post>, AppError> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE tenant_id = ? AND id = ?")
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_slug(&self, tenant_id: &str, slug: &str) -> Result<Option<Post>, AppError> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE tenant_id = ? AND slug = ? LIMIT 1")
            .bind(tenant_id)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, tenant_id: &str, filter: &PostListFilter) -> Result<PostPage, AppError> {
        let mut count_qb = QueryBuilder::new("SELECT COUNT(*) FROM posts");
        push_filters(&mut count_qb, tenant_id, filter);
        let total: i64 = count_qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let mut qb = QueryBuilder::new("SELECT * FROM posts");
        push_filters(&mut qb, tenant_id, filter);
        // Sort column and direction come from closed enums, never user text.
        qb.push(format!(" ORDER BY {} {}", filter.sort.as_column(), filter.dir.as_sql()));

        // Widen before multiplying; page is caller-supplied and u32::MAX
        // pages would overflow u32 arithmetic.
        let page = filter.page.max(1) as i64;
        let offset = (page - 1) * PAGE_SIZE as i64;
        qb.push(" LIMIT ").push_bind(PAGE_SIZE as i64);
        qb.push(" OFFSET ").push_bind(offset);

        let items = qb
            .build_query_as::<Post>()
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(PostPage { items, total })
    }

    async fn list_ids(&self, tenant_id: &str, filter: &PostListFilter) -> Result<Vec<String>, AppError> {
        let mut qb = QueryBuilder::new("SELECT id FROM posts");
        push_filters(&mut qb, tenant_id, filter);
        qb.push(format!(" ORDER BY {} {}", filter.sort.as_column(), filter.dir.as_sql()));

        qb.build_query_scalar()
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn slug_in_use(
        &self,
        tenant_id: &str,
        kind: &str,
        slug: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, AppError> {
        let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM posts WHERE tenant_id = ");
        qb.push_bind(tenant_id.to_string());
        qb.push(" AND kind = ").push_bind(kind.to_string());
        qb.push(" AND slug = ").push_bind(slug.to_string());
        if let Some(id) = exclude_id {
            qb.push(" AND id != ").push_bind(id.to_string());
        }

        let count: i64 = qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(count > 0)
    }

    async fn update(&self, post: &Post) -> Result<Post, AppError> {
        sqlx::query_as::<_, Post>(
            r#"UPDATE posts SET
                slug=?, title=?, content_head=?, content_body=?, content_css=?,
                content_js=?, excerpt=?, status=?, cdns_json=?, updated_at=?
               WHERE id=? AND tenant_id=? RETURNING *"#,
        )
            .bind(&post.slug)
            .bind(&post.title)
            .bind(&post.content_head)
            .bind(&post.content_body)
            .bind(&post.content_css)
            .bind(&post.content_js)
            .bind(&post.excerpt)
            .bind(&post.status)
            .bind(&post.cdns_json)
            .bind(Utc::now())
            .bind(&post.id)
            .bind(&post.tenant_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_content(
        &self,
        tenant_id: &str,
        slug: &str,
        content_body: &str,
        content_css: &str,
        cdns_json: &str,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"UPDATE posts SET content_body=?, content_css=?, cdns_json=?, updated_at=?
               WHERE tenant_id=? AND slug=?"#,
        )
            .bind(content_body)
            .bind(content_css)
            .bind(cdns_json)
            .bind(Utc::now())
            .bind(tenant_id)
            .bind(slug)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(result.rows_affected())
    }

    async fn update_status(&self, tenant_id: &str, id: &str, status: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE posts SET status=?, updated_at=? WHERE tenant_id=? AND id=?")
            .bind(status)
            .bind(Utc::now())
            .bind(tenant_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Post not found".into()));
        }
        Ok(())
    }

    async fn update_status_bulk(
        &self,
        tenant_id: &str,
        ids: &[String],
        status: &str,
    ) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut qb = QueryBuilder::new("UPDATE posts SET status = ");
        qb.push_bind(status.to_string());
        qb.push(", updated_at = ").push_bind(Utc::now());
        qb.push(" WHERE tenant_id = ").push_bind(tenant_id.to_string());
        qb.push(" AND id IN (");
        let mut separated = qb.separated(", ");
        for id in ids {
            separated.push_bind(id.clone());
        }
        separated.push_unseparated(")");

        let result = qb
            .build()
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, tenant_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM posts WHERE tenant_id = ? AND id = ?")
            .bind(tenant_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Post not found".into()));
        }
        Ok(())
    }

    async fn delete_bulk(&self, tenant_id: &str, ids: &[String]) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut qb = QueryBuilder::new("DELETE FROM posts WHERE tenant_id = ");
        qb.push_bind(tenant_id.to_string());
        qb.push(" AND id IN (");
        let mut separated = qb.separated(", ");
        for id in ids {
            separated.push_bind(id.clone());
        }
        separated.push_unseparated(")");

        let result = qb
            .build()
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }
}
