pub mod a001_product;
pub mod store_config;
