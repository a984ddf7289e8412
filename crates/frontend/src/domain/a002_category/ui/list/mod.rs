//! Управление категориями: добавление и удаление с живым счётчиком SKU.
//!
//! Кнопка удаления выключена для используемых категорий, но правило
//! навязывает сам каталог: ошибка `CategoryInUse` отображается баннером.

use crate::shared::icons::icon;
use crate::shared::state::catalog::use_catalog;
use contracts::domain::a002_category::CategoryId;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let catalog = use_catalog();

    let (new_name, set_new_name) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let rows = Memo::new(move |_| catalog.categories());

    let handle_create = move || {
        let name = new_name.get_untracked();
        if name.trim().is_empty() {
            return;
        }
        match catalog.create_category(&name) {
            Ok(_) => {
                set_error.set(None);
                set_new_name.set(String::new());
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let handle_delete = move |id: String, name: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete category \"{}\"?", name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        match CategoryId::from_string(&id) {
            Ok(category_id) => match catalog.delete_category(&category_id) {
                Ok(()) => set_error.set(None),
                Err(e) => set_error.set(Some(e.to_string())),
            },
            Err(e) => set_error.set(Some(e)),
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Categories"}</h1>
                    <p class="header__subtitle">
                        {move || format!("{} categories", rows.get().len())}
                    </p>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="error-banner">
                    <span class="error-banner__icon">{"\u{26a0}"}</span>
                    <span class="error-banner__text">{e}</span>
                </div>
            })}

            <div class="category-add-form">
                <input
                    type="text"
                    placeholder="New category name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            handle_create();
                        }
                    }
                />
                <button class="button button--primary" on:click=move |_| handle_create()>
                    {icon("plus")}
                    {"Add Category"}
                </button>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Code"}</th>
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Description"}</th>
                            <th class="table__header-cell">{"SKUs"}</th>
                            <th class="table__header-cell table__header-cell--actions">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row| {
                            let id = row.id.clone();
                            let name = row.name.clone();
                            let in_use = row.sku_count > 0;
                            let delete_title = if in_use {
                                "Cannot delete: category is in use"
                            } else {
                                "Delete"
                            };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--code">{row.code}</td>
                                    <td class="table__cell">{row.name.clone()}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">
                                        <span class="badge badge--count">{row.sku_count}</span>
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="icon-button icon-button--danger"
                                            title=delete_title
                                            disabled=in_use
                                            on:click=move |_| handle_delete(id.clone(), name.clone())
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

            <div class="info-card">
                <div class="info-card__icon">{icon("tag")}</div>
                <div class="info-card__text">
                    {"Categories that are assigned to at least one SKU cannot be deleted. \
                      Reassign or remove those SKUs first."}
                </div>
            </div>
        </div>
    }
}
