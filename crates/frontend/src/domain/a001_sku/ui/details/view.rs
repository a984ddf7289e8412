use super::view_model::SkuDetailsViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::sku_detail_tab_title;
use crate::shared::icons::icon;
use crate::shared::state::catalog::use_catalog;
use contracts::domain::a001_sku::SkuStatus;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn SkuDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let catalog = use_catalog();
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let vm = SkuDetailsViewModel::new(catalog);
    vm.load_if_needed(id.clone());

    // Вкладка из URL открывается с общим заголовком — после загрузки
    // подставляем бизнес-код
    if let Some(ref sku_id) = id {
        let code = vm.form.with_untracked(|f| f.code.clone());
        if !code.is_empty() {
            tabs_store.update_tab_title(
                &format!("a001_sku_detail_{}", sku_id),
                &sku_detail_tab_title(&code),
            );
        }
    }

    view! {
        <div class="page details-container sku-details">
            <div class="details-header">
                <button class="btn btn-ghost" on:click=move |_| on_close.run(())>
                    {icon("arrow-left")}
                    {"Back"}
                </button>
                <h3>
                    {move || if vm.is_edit_mode()() { "Edit SKU" } else { "New SKU" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! {
                <div class="error-banner">
                    <span class="error-banner__icon">{"\u{26a0}"}</span>
                    <span class="error-banner__text">{e}</span>
                </div>
            })}

            <div class="details-form">
                <fieldset class="details-section">
                    <legend>{"Basic Information"}</legend>

                    <div class="form-group">
                        <label for="code">{"SKU ID"}</label>
                        <input
                            type="text"
                            id="code"
                            prop:value=move || vm.form.get().code
                            on:input=move |ev| {
                                vm.form.update(|f| f.code = event_target_value(&ev));
                            }
                            placeholder="e.g. M10006"
                        />
                    </div>

                    <div class="form-group">
                        <label for="name">{"Product Name"}</label>
                        <input
                            type="text"
                            id="name"
                            prop:value=move || vm.form.get().name
                            on:input=move |ev| {
                                vm.form.update(|f| f.name = event_target_value(&ev));
                            }
                            placeholder="e.g. Core Service"
                        />
                    </div>

                    <div class="form-group">
                        <label for="category">{"Category"}</label>
                        <select
                            id="category"
                            prop:value=move || vm.form.get().category
                            on:change=move |ev| {
                                vm.form.update(|f| f.category = event_target_value(&ev));
                            }
                        >
                            <option value="">{"Select category"}</option>
                            {move || catalog.categories().into_iter().map(|row| {
                                let value = row.name.clone();
                                view! { <option value=value>{row.name}</option> }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="full_description">{"Description"}</label>
                        <textarea
                            id="full_description"
                            prop:value=move || vm.form.get().full_description
                            on:input=move |ev| {
                                vm.form.update(|f| f.full_description = event_target_value(&ev));
                            }
                            placeholder="Describe what this SKU provides"
                            rows="3"
                        />
                    </div>

                    <div class="form-group form-group--inline">
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || vm.form.get().popular
                                on:change=move |ev| {
                                    vm.form.update(|f| f.popular = event_target_checked(&ev));
                                }
                            />
                            {"Mark as Most Popular"}
                        </label>
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || vm.form.get().status.is_active()
                                on:change=move |ev| {
                                    let active = event_target_checked(&ev);
                                    vm.form.update(|f| {
                                        f.status = if active {
                                            SkuStatus::Active
                                        } else {
                                            SkuStatus::Inactive
                                        };
                                    });
                                }
                            />
                            {"Active"}
                        </label>
                    </div>
                </fieldset>

                <fieldset class="details-section">
                    <legend>{"Token Pricing"}</legend>
                    <p class="details-section__hint">
                        {"Leave blank or 0 when the plan is not offered for this SKU."}
                    </p>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="ppu_tokens">{"Pay-per-Use"}</label>
                            <input
                                type="text"
                                id="ppu_tokens"
                                inputmode="numeric"
                                prop:value=move || vm.form.get().ppu_tokens
                                on:input=move |ev| {
                                    vm.form.update(|f| f.ppu_tokens = event_target_value(&ev));
                                }
                                placeholder="0"
                            />
                        </div>
                        <div class="form-group">
                            <label for="monthly_tokens">{"Monthly"}</label>
                            <input
                                type="text"
                                id="monthly_tokens"
                                inputmode="numeric"
                                prop:value=move || vm.form.get().monthly_tokens
                                on:input=move |ev| {
                                    vm.form.update(|f| f.monthly_tokens = event_target_value(&ev));
                                }
                                placeholder="0"
                            />
                        </div>
                        <div class="form-group">
                            <label for="one_year_tokens">{"1 Year"}</label>
                            <input
                                type="text"
                                id="one_year_tokens"
                                inputmode="numeric"
                                prop:value=move || vm.form.get().one_year_tokens
                                on:input=move |ev| {
                                    vm.form.update(|f| f.one_year_tokens = event_target_value(&ev));
                                }
                                placeholder="0"
                            />
                        </div>
                        <div class="form-group">
                            <label for="three_year_tokens">{"3 Years"}</label>
                            <input
                                type="text"
                                id="three_year_tokens"
                                inputmode="numeric"
                                prop:value=move || vm.form.get().three_year_tokens
                                on:input=move |ev| {
                                    vm.form.update(|f| f.three_year_tokens = event_target_value(&ev));
                                }
                                placeholder="0"
                            />
                        </div>
                    </div>
                </fieldset>

                <fieldset class="details-section">
                    <legend>{"Features"}</legend>

                    <div class="form-group form-group--inline">
                        <input
                            type="text"
                            prop:value=move || vm.feature_input.get()
                            on:input=move |ev| vm.feature_input.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    vm.add_feature_command();
                                }
                            }
                            placeholder="Add a feature and press Enter"
                        />
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| vm.add_feature_command()
                        >
                            {icon("plus")}
                            {"Add"}
                        </button>
                    </div>

                    <ul class="feature-chips">
                        {move || vm.form.get().features.into_iter().enumerate().map(|(i, feature)| {
                            view! {
                                <li class="feature-chips__item">
                                    {feature}
                                    <button
                                        class="feature-chips__remove"
                                        title="Remove"
                                        on:click=move |_| vm.remove_feature_command(i)
                                    >
                                        {"\u{00d7}"}
                                    </button>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </fieldset>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| vm.save_command(on_close)
                    disabled=move || !vm.is_form_valid()()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode()() { "Save" } else { "Create" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
