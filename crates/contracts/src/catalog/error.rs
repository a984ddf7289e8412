use thiserror::Error;

/// Ошибки операций каталога
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("SKU not found: {id}")]
    NotFound { id: String },

    #[error("SKU ID '{code}' is already in use")]
    DuplicateCode { code: String },

    #[error("'{value}' is not a valid token amount for {field}")]
    InvalidPricing { field: &'static str, value: String },

    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    #[error("Category '{name}' already exists")]
    DuplicateCategory { name: String },

    #[error("Category '{name}' is referenced by {sku_count} SKU(s) and cannot be deleted")]
    CategoryInUse { name: String, sku_count: usize },

    #[error("Category not found: {id}")]
    CategoryNotFound { id: String },

    #[error("{0}")]
    Validation(String),
}
