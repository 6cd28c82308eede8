use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A tenant is keyed by its subdomain label. Everything else about it lives
/// in the opaque `data_json` blob.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Tenant {
    pub id: String,
    pub data_json: String,
    pub created_at: DateTime<Utc>,
}

impl Tenant {
    pub fn new(id: String) -> Self {
        let name = capitalize(&id);
        Self {
            id,
            data_json: serde_json::json!({ "name": name }).to_string(),
            created_at: Utc::now(),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Domain {
    pub domain: String,
    pub tenant_id: String,
    pub created_at: DateTime<Utc>,
}

pub const ROLE_OWNER: &str = "owner";
pub const ROLE_MEMBER: &str = "member";
