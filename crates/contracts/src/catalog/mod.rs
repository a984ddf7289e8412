//! Каталог: модель запросов, сервис и посевные данные.
//!
//! `CatalogService` — единственный шов между UI и данными. Сейчас за ним
//! стоит `InMemoryCatalog`; реальный бэкенд подключается заменой реализации
//! трейта без переделки UI-слоя.

pub mod error;
pub mod format;
pub mod query;
pub mod seed;
pub mod service;

pub use error::CatalogError;
pub use format::format_tokens;
pub use query::{derive_categories, filter_skus, CategoryFilter, SkuFilter, ALL_CATEGORIES};
pub use service::{CatalogService, InMemoryCatalog};
