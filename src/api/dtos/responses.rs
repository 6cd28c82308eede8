use serde::Serialize;

use crate::domain::models::post::{Post, PostPage, PAGE_SIZE};

#[derive(Serialize)]
pub struct PostListResponse {
    pub data: Vec<Post>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: i64,
}

impl PostListResponse {
    pub fn from_page(page: PostPage, current: u32) -> Self {
        let per_page = PAGE_SIZE as i64;
        let total_pages = (page.total + per_page - 1) / per_page;
        Self {
            data: page.items,
            total: page.total,
            page: current,
            per_page: PAGE_SIZE,
            total_pages,
        }
    }
}

#[derive(Serialize)]
pub struct IdListResponse {
    pub ids: Vec<String>,
}

#[derive(Serialize)]
pub struct BulkActionResponse {
    pub affected: u64,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
