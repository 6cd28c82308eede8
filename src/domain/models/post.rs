use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::services::cdn::CdnList;

pub const PAGE_SIZE: u32 = 15;

/// Content entity kinds. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostType {
    Page,
    Post,
    Layout,
    Component,
    // "email_template" is reserved as a fifth kind but not active yet.
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Page => "page",
            PostType::Post => "post",
            PostType::Layout => "layout",
            PostType::Component => "component",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "page" => Some(PostType::Page),
            "post" => Some(PostType::Post),
            "layout" => Some(PostType::Layout),
            "component" => Some(PostType::Component),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostStatus {
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "draft" => Some(PostStatus::Draft),
            "published" => Some(PostStatus::Published),
            "archived" => Some(PostStatus::Archived),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Post {
    pub id: String,
    pub tenant_id: String,
    pub slug: String,
    pub kind: String,
    pub title: String,
    pub content_head: String,
    pub content_body: String,
    pub content_css: String,
    pub content_js: String,
    pub excerpt: String,
    pub status: String,
    pub cdns_json: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(tenant_id: String, title: String, slug: String, kind: PostType) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id,
            slug,
            kind: kind.as_str().to_string(),
            title,
            content_head: String::new(),
            content_body: String::new(),
            content_css: String::new(),
            content_js: String::new(),
            excerpt: String::new(),
            status: PostStatus::Draft.as_str().to_string(),
            cdns_json: CdnList::default().to_json(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn cdns(&self) -> CdnList {
        CdnList::parse(&self.cdns_json)
    }

    /// Clone for the "duplicate" action: content fields and kind are copied
    /// verbatim, slug and title get their copy markers, status resets to
    /// draft and the CDN list starts fresh.
    pub fn duplicate(&self) -> Post {
        let now = Utc::now();
        Post {
            id: Uuid::new_v4().to_string(),
            tenant_id: self.tenant_id.clone(),
            slug: format!("{}-copia-{}", self.slug, now.timestamp()),
            kind: self.kind.clone(),
            title: format!("{} (copia)", self.title),
            content_head: self.content_head.clone(),
            content_body: self.content_body.clone(),
            content_css: self.content_css.clone(),
            content_js: self.content_js.clone(),
            excerpt: self.excerpt.clone(),
            status: PostStatus::Draft.as_str().to_string(),
            cdns_json: CdnList::default().to_json(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Slug,
    Status,
    CreatedAt,
}

impl SortField {
    pub fn as_column(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Slug => "slug",
            SortField::Status => "status",
            SortField::CreatedAt => "created_at",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "title" => Some(SortField::Title),
            "slug" => Some(SortField::Slug),
            "status" => Some(SortField::Status),
            "created_at" => Some(SortField::CreatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }
}

/// Filter applied to the list and select-all queries. Always scoped to one
/// kind, the way the dashboard screens are.
#[derive(Debug, Clone)]
pub struct PostListFilter {
    pub kind: PostType,
    pub search: Option<String>,
    pub status: Option<String>,
    pub sort: SortField,
    pub dir: SortDir,
    pub page: u32,
}

impl Default for PostListFilter {
    fn default() -> Self {
        Self {
            kind: PostType::Page,
            search: None,
            status: None,
            sort: SortField::CreatedAt,
            dir: SortDir::Desc,
            page: 1,
        }
    }
}

#[derive(Debug)]
pub struct PostPage {
    pub items: Vec<Post>,
    pub total: i64,
}
