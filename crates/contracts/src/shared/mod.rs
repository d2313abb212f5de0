pub mod error;
pub mod gallery;
pub mod html_text;
pub mod pagination;
pub mod route;
pub mod store_config;
