pub mod auth;
pub mod membership;
pub mod tenant;
