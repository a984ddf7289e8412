//! Tab content registry - единственный источник правды для маппинга tab.key → View
//!
//! Этот модуль содержит функцию `render_tab_content`, которая по ключу таба
//! возвращает соответствующий View. Все tab keys собраны здесь в одном месте.

use crate::dashboards::AdminDashboard;
use crate::domain::a001_sku::ui::catalog::CatalogBrowse;
use crate::domain::a001_sku::ui::details::SkuDetails;
use crate::domain::a001_sku::ui::list::SkuList;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::layout::global_context::AppGlobalContext;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// # Arguments
/// * `key` - уникальный ключ таба (например "c100_catalog", "a001_sku")
/// * `tabs_store` - контекст для закрытия таба (используется в detail-views с on_close)
///
/// # Returns
/// AnyView с содержимым таба или placeholder для неизвестных ключей
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        // Клиентская витрина
        "c100_catalog" => view! { <CatalogBrowse /> }.into_any(),

        // Админка
        "d200_admin_dashboard" => view! { <AdminDashboard /> }.into_any(),

        "a001_sku" => view! { <SkuList /> }.into_any(),

        "a001_sku_new" => view! {
            <SkuDetails
                id=None
                on_close=Callback::new(move |_| {
                    tabs_store.close_tab(&key_for_close);
                })
            />
        }
        .into_any(),

        k if k.starts_with("a001_sku_detail_") => {
            let id = k
                .strip_prefix("a001_sku_detail_")
                .unwrap_or_default()
                .to_string();
            view! {
                <SkuDetails
                    id=Some(id)
                    on_close=Callback::new(move |_| {
                        tabs_store.close_tab(&key_for_close);
                    })
                />
            }
            .into_any()
        }

        "a002_category" => view! { <CategoryList /> }.into_any(),

        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
