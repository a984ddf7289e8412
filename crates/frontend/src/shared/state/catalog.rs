//! Общий каталог приложения поверх реактивного сигнала.
//!
//! Все страницы читают и мутируют один `InMemoryCatalog` через контекст:
//! список в одном табе видит правки, сделанные в другом. Состояние живёт
//! только в памяти и пересоздаётся из seed при перезагрузке страницы.

use contracts::catalog::{CatalogError, CatalogService, InMemoryCatalog};
use contracts::domain::a001_sku::{Sku, SkuDto, SkuId};
use contracts::domain::a002_category::{CategoryId, CategoryRow};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct CatalogContext {
    store: RwSignal<InMemoryCatalog>,
}

impl CatalogContext {
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(InMemoryCatalog::seeded()),
        }
    }

    // ── Чтение (реактивное) ──────────────────────────────────────────────

    pub fn skus(&self) -> Vec<Sku> {
        self.store.with(|catalog| catalog.list_skus())
    }

    pub fn get_sku(&self, id: &SkuId) -> Option<Sku> {
        self.store.with_untracked(|catalog| catalog.get_sku(id))
    }

    pub fn categories(&self) -> Vec<CategoryRow> {
        self.store.with(|catalog| catalog.list_categories())
    }

    // ── Мутации ──────────────────────────────────────────────────────────

    pub fn upsert_sku(&self, dto: &SkuDto) -> Result<Sku, CatalogError> {
        self.store
            .try_update(|catalog| catalog.upsert_sku(dto))
            .expect("catalog store disposed")
    }

    pub fn delete_sku(&self, id: &SkuId) -> Result<(), CatalogError> {
        self.store
            .try_update(|catalog| catalog.delete_sku(id))
            .expect("catalog store disposed")
    }

    pub fn duplicate_sku(&self, id: &SkuId) -> Result<Sku, CatalogError> {
        self.store
            .try_update(|catalog| catalog.duplicate_sku(id))
            .expect("catalog store disposed")
    }

    pub fn create_category(&self, name: &str) -> Result<CategoryRow, CatalogError> {
        self.store
            .try_update(|catalog| catalog.create_category(name))
            .expect("catalog store disposed")
    }

    pub fn delete_category(&self, id: &CategoryId) -> Result<(), CatalogError> {
        self.store
            .try_update(|catalog| catalog.delete_category(id))
            .expect("catalog store disposed")
    }
}

/// Контекст каталога из дерева Leptos
pub fn use_catalog() -> CatalogContext {
    use_context::<CatalogContext>().expect("CatalogContext not found in context")
}
