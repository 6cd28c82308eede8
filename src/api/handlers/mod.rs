pub mod auth;
pub mod builder;
pub mod health;
pub mod post;
pub mod tenant;
pub mod web_setting;
