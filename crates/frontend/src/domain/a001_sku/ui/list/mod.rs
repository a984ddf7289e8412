//! Админский список SKU: тот же фильтр, что и на витрине, плюс CRUD-действия.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::sku_detail_tab_title;
use crate::shared::icons::icon;
use crate::shared::state::catalog::use_catalog;
use contracts::catalog::{derive_categories, filter_skus, format_tokens, CategoryFilter, SkuFilter};
use contracts::domain::a001_sku::Sku;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max).collect();
        format!("{}...", cut.trim_end())
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SkuList() -> impl IntoView {
    let catalog = use_catalog();
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(CategoryFilter::All);
    let (error, set_error) = signal::<Option<String>>(None);

    let categories = Memo::new(move |_| derive_categories(&catalog.skus()));
    let filtered = Memo::new(move |_| {
        let filter = SkuFilter::new(&search.get(), category.get());
        filter_skus(&catalog.skus(), &filter)
    });

    let handle_create_new = move || {
        tabs_store.open_tab("a001_sku_new", "New SKU");
    };

    let handle_edit = move |sku: &Sku| {
        let key = format!("a001_sku_detail_{}", sku.base.id.as_string());
        tabs_store.open_tab(&key, &sku_detail_tab_title(&sku.base.code));
    };

    let handle_duplicate = move |sku: &Sku| match catalog.duplicate_sku(&sku.base.id) {
        Ok(_) => set_error.set(None),
        Err(e) => set_error.set(Some(e.to_string())),
    };

    let handle_delete = move |sku: &Sku| {
        // Simple confirm dialog via browser
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!(
                    "Delete {}? This cannot be undone.",
                    sku.base.code
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        match catalog.delete_sku(&sku.base.id) {
            Ok(()) => {
                set_error.set(None);
                // если SKU открыт на редактирование — закрываем его вкладку
                tabs_store.close_tab(&format!("a001_sku_detail_{}", sku.base.id.as_string()));
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"SKUs"}</h1>
                    <p class="header__subtitle">
                        {move || {
                            format!("{} of {} SKUs", filtered.get().len(), catalog.skus().len())
                        }}
                    </p>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        {"New SKU"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="error-banner">
                    <span class="error-banner__icon">{"\u{26a0}"}</span>
                    <span class="error-banner__text">{e}</span>
                </div>
            })}

            <div class="catalog-toolbar">
                <div class="search-box">
                    <span class="search-box__icon">{icon("search")}</span>
                    <input
                        type="text"
                        class="search-box__input"
                        placeholder="Search by name, description or SKU ID..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </div>
                <div class="category-chips">
                    <For
                        each=move || categories.get()
                        key=|name| name.clone()
                        children=move |name: String| {
                            let label = name.clone();
                            let name_for_click = name.clone();
                            let name_for_class = name.clone();
                            view! {
                                <button
                                    class="chip"
                                    class:chip--active=move || category.get().label() == name_for_class
                                    on:click=move |_| {
                                        set_category.set(CategoryFilter::from_label(&name_for_click))
                                    }
                                >
                                    {label}
                                </button>
                            }
                        }
                    />
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"SKU ID"}</th>
                            <th class="table__header-cell">{"Product"}</th>
                            <th class="table__header-cell">{"Category"}</th>
                            <th class="table__header-cell">{"Pay-per-Use"}</th>
                            <th class="table__header-cell">{"Monthly"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                            <th class="table__header-cell">{"Updated"}</th>
                            <th class="table__header-cell table__header-cell--actions">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || filtered.get().into_iter().map(|sku| {
                            let sku_for_edit = sku.clone();
                            let sku_for_copy = sku.clone();
                            let sku_for_delete = sku.clone();
                            let description = truncate(&sku.full_description, 60);
                            let status_class = if sku.status.is_active() {
                                "badge badge--active"
                            } else {
                                "badge badge--inactive"
                            };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--code">{sku.base.code.clone()}</td>
                                    <td class="table__cell">
                                        <div class="table__primary">
                                            {sku.base.description.clone()}
                                            {sku.popular.then(|| view! {
                                                <span class="badge badge--popular">{"Popular"}</span>
                                            })}
                                        </div>
                                        <div class="table__secondary">{description}</div>
                                    </td>
                                    <td class="table__cell">
                                        <span class="badge badge--category">{sku.category.clone()}</span>
                                    </td>
                                    <td class="table__cell">{format_tokens(sku.pricing.ppu_tokens)}</td>
                                    <td class="table__cell">{format_tokens(sku.pricing.monthly_tokens)}</td>
                                    <td class="table__cell">
                                        <span class=status_class>{sku.status.as_str()}</span>
                                    </td>
                                    <td class="table__cell">
                                        {format_timestamp(sku.base.metadata.updated_at)}
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="icon-button"
                                            title="Edit"
                                            on:click=move |_| handle_edit(&sku_for_edit)
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="icon-button"
                                            title="Duplicate"
                                            on:click=move |_| handle_duplicate(&sku_for_copy)
                                        >
                                            {icon("copy")}
                                        </button>
                                        <button
                                            class="icon-button icon-button--danger"
                                            title="Delete"
                                            on:click=move |_| handle_delete(&sku_for_delete)
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate("short", 60), "short");
    }

    #[test]
    fn truncate_cuts_long_strings_with_ellipsis() {
        let long = "a".repeat(80);
        let cut = truncate(&long, 60);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 63);
    }
}
