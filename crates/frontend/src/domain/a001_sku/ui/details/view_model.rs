use crate::shared::state::catalog::CatalogContext;
use contracts::domain::a001_sku::{SkuDto, SkuId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// ViewModel for the SKU details form
#[derive(Clone, Copy)]
pub struct SkuDetailsViewModel {
    pub form: RwSignal<SkuDto>,
    pub error: RwSignal<Option<String>>,
    pub feature_input: RwSignal<String>,
    catalog: CatalogContext,
}

impl SkuDetailsViewModel {
    pub fn new(catalog: CatalogContext) -> Self {
        Self {
            form: RwSignal::new(SkuDto::default()),
            error: RwSignal::new(None),
            feature_input: RwSignal::new(String::new()),
            catalog,
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().is_edit()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || {
            let f = self.form.get();
            !f.code.trim().is_empty() && !f.name.trim().is_empty()
        }
    }

    /// Load form data from the catalog if an ID is provided
    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        match SkuId::from_string(&existing_id) {
            Ok(sku_id) => match self.catalog.get_sku(&sku_id) {
                Some(sku) => self.form.set(SkuDto::from_aggregate(&sku)),
                None => self.error.set(Some(format!("SKU not found: {}", existing_id))),
            },
            Err(e) => self.error.set(Some(e)),
        }
    }

    /// Добавить фичу из поля ввода (пустые после trim игнорируются)
    pub fn add_feature_command(&self) {
        let value = self.feature_input.get_untracked();
        if value.trim().is_empty() {
            return;
        }
        self.form.update(|f| f.add_feature(&value));
        self.feature_input.set(String::new());
    }

    pub fn remove_feature_command(&self, index: usize) {
        self.form.update(|f| f.remove_feature(index));
    }

    /// Save form data to the catalog
    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get();

        if let Err(e) = current.validate() {
            self.error.set(Some(e));
            return;
        }

        match self.catalog.upsert_sku(&current) {
            Ok(_) => {
                self.error.set(None);
                on_saved.run(());
            }
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }
}
