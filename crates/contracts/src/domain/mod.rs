pub mod a001_sku;
pub mod a002_category;
pub mod common;
