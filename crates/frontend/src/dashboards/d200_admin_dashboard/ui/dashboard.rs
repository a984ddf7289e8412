//! Админская панель: показатели каталога и быстрые переходы.
//!
//! Набор показателей описан метаданными (`IndicatorMeta`), значения
//! считаются из живого каталога, без отдельного стора.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::StatCard;
use crate::shared::icons::icon;
use crate::shared::state::catalog::use_catalog;
use contracts::domain::a001_sku::Sku;
use contracts::shared::indicators::{IndicatorId, IndicatorMeta, IndicatorStatus, ValueFormat};
use leptos::prelude::*;

/// Каталог показателей панели
fn indicator_metas() -> Vec<IndicatorMeta> {
    vec![
        IndicatorMeta {
            id: IndicatorId::new("total_skus"),
            label: "Total SKUs".to_string(),
            icon: "package".to_string(),
            format: ValueFormat::Integer,
        },
        IndicatorMeta {
            id: IndicatorId::new("active_skus"),
            label: "Active SKUs".to_string(),
            icon: "list".to_string(),
            format: ValueFormat::Integer,
        },
        IndicatorMeta {
            id: IndicatorId::new("categories"),
            label: "Categories".to_string(),
            icon: "tag".to_string(),
            format: ValueFormat::Integer,
        },
        IndicatorMeta {
            id: IndicatorId::new("popular_skus"),
            label: "Popular SKUs".to_string(),
            icon: "star".to_string(),
            format: ValueFormat::Integer,
        },
        IndicatorMeta {
            id: IndicatorId::new("avg_features"),
            label: "Avg Features per SKU".to_string(),
            icon: "database".to_string(),
            format: ValueFormat::Number { decimals: 1 },
        },
    ]
}

/// Значение показателя по живым данным каталога
fn indicator_value(skus: &[Sku], category_count: usize, id: &IndicatorId) -> Option<f64> {
    match id.0.as_str() {
        "total_skus" => Some(skus.len() as f64),
        "active_skus" => Some(skus.iter().filter(|sku| sku.status.is_active()).count() as f64),
        "categories" => Some(category_count as f64),
        "popular_skus" => Some(skus.iter().filter(|sku| sku.popular).count() as f64),
        "avg_features" => {
            if skus.is_empty() {
                Some(0.0)
            } else {
                let total: usize = skus.iter().map(|sku| sku.features.len()).sum();
                Some(total as f64 / skus.len() as f64)
            }
        }
        _ => None,
    }
}

fn indicator_status(id: &IndicatorId) -> IndicatorStatus {
    match id.0.as_str() {
        "active_skus" => IndicatorStatus::Good,
        _ => IndicatorStatus::Neutral,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AdminDashboard() -> impl IntoView {
    let catalog = use_catalog();
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    let cards = indicator_metas()
        .into_iter()
        .map(|meta| {
            let id = meta.id.clone();
            let value = Signal::derive(move || {
                indicator_value(&catalog.skus(), catalog.categories().len(), &id)
            });

            let status_value = indicator_status(&meta.id);
            let status = Signal::derive(move || status_value);

            let subtitle = if meta.id.0 == "active_skus" {
                Signal::derive(move || Some(format!("of {} total", catalog.skus().len())))
            } else {
                Signal::derive(|| None)
            };

            view! {
                <StatCard
                    label=meta.label
                    icon_name=meta.icon
                    value=value
                    format=meta.format
                    status=status
                    subtitle=subtitle
                />
            }
        })
        .collect_view();

    view! {
        <div class="page dashboard-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Admin Dashboard"}</h1>
                    <p class="header__subtitle">{"Catalog overview and shortcuts"}</p>
                </div>
            </div>

            <div class="stat-cards">{cards}</div>

            <h2 class="section-title">{"Quick Actions"}</h2>
            <div class="quick-actions">
                <button
                    class="quick-action"
                    on:click=move |_| tabs_store.open_tab("a001_sku", "SKUs")
                >
                    <div class="quick-action__icon">{icon("list")}</div>
                    <div class="quick-action__body">
                        <div class="quick-action__title">{"Manage SKUs"}</div>
                        <div class="quick-action__hint">{"Edit, duplicate or remove catalog entries"}</div>
                    </div>
                </button>
                <button
                    class="quick-action"
                    on:click=move |_| tabs_store.open_tab("a001_sku_new", "New SKU")
                >
                    <div class="quick-action__icon">{icon("plus")}</div>
                    <div class="quick-action__body">
                        <div class="quick-action__title">{"Add New SKU"}</div>
                        <div class="quick-action__hint">{"Create a catalog entry from scratch"}</div>
                    </div>
                </button>
                <button
                    class="quick-action"
                    on:click=move |_| tabs_store.open_tab("a002_category", "Categories")
                >
                    <div class="quick-action__icon">{icon("tag")}</div>
                    <div class="quick-action__body">
                        <div class="quick-action__title">{"Manage Categories"}</div>
                        <div class="quick-action__hint">{"Add or remove grouping labels"}</div>
                    </div>
                </button>
                <button
                    class="quick-action"
                    on:click=move |_| tabs_store.open_tab("c100_catalog", "Catalog")
                >
                    <div class="quick-action__icon">{icon("search")}</div>
                    <div class="quick-action__body">
                        <div class="quick-action__title">{"View Catalog"}</div>
                        <div class="quick-action__hint">{"See the pricing guide as customers do"}</div>
                    </div>
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::catalog::{CatalogService, InMemoryCatalog};

    #[test]
    fn indicator_values_come_from_live_seed_data() {
        let catalog = InMemoryCatalog::seeded();
        let skus = catalog.list_skus();
        let categories = catalog.list_categories().len();

        let value = |key: &str| indicator_value(&skus, categories, &IndicatorId::new(key));
        assert_eq!(value("total_skus"), Some(6.0));
        assert_eq!(value("active_skus"), Some(5.0));
        assert_eq!(value("categories"), Some(5.0));
        assert_eq!(value("popular_skus"), Some(2.0));
        // каждый посевной SKU несёт ровно четыре фичи
        assert_eq!(value("avg_features"), Some(4.0));
    }

    #[test]
    fn every_meta_has_a_value_source() {
        let catalog = InMemoryCatalog::seeded();
        let skus = catalog.list_skus();
        let categories = catalog.list_categories().len();

        for meta in indicator_metas() {
            assert!(
                indicator_value(&skus, categories, &meta.id).is_some(),
                "no value source for {:?}",
                meta.id
            );
        }
    }

    #[test]
    fn unknown_indicator_id_yields_none() {
        assert_eq!(indicator_value(&[], 0, &IndicatorId::new("bogus")), None);
    }

    #[test]
    fn avg_features_on_empty_catalog_is_zero() {
        assert_eq!(
            indicator_value(&[], 0, &IndicatorId::new("avg_features")),
            Some(0.0)
        );
    }
}
