pub mod auth;
pub mod post;
pub mod tenant;
pub mod user;
pub mod web_setting;
