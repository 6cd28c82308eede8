pub mod auth_service;
pub mod cdn;
pub mod content;
pub mod render;
pub mod validation;
