pub mod catalog;

pub use catalog::CatalogContext;
