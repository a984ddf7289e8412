//! Клиентская витрина прайс-листа: поиск, фильтр по категориям, карточки SKU.
//!
//! Витрина только читает каталог; все мутации живут в админских вкладках.

use crate::shared::icons::icon;
use crate::shared::state::catalog::use_catalog;
use contracts::catalog::{derive_categories, filter_skus, format_tokens, CategoryFilter, SkuFilter};
use contracts::domain::a001_sku::{PricingPlan, Sku};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn CatalogBrowse() -> impl IntoView {
    let catalog = use_catalog();
    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(CategoryFilter::All);

    let categories = Memo::new(move |_| derive_categories(&catalog.skus()));
    let filtered = Memo::new(move |_| {
        let filter = SkuFilter::new(&search.get(), category.get());
        filter_skus(&catalog.skus(), &filter)
    });

    view! {
        <div class="page catalog-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"SKU Pricing Guide"}</h1>
                    <p class="header__subtitle">
                        {"Browse service plans and token pricing across all available SKUs"}
                    </p>
                </div>
            </div>

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

            <Show
                when=move || !filtered.get().is_empty()
                fallback=|| view! {
                    <div class="empty-state">
                        <p class="empty-state__title">{"No SKUs found"}</p>
                        <p class="empty-state__hint">{"Try a different search term or category."}</p>
                    </div>
                }
            >
                <div class="catalog-grid">
                    <For
                        each=move || filtered.get()
                        key=|sku| format!("{}:{}", sku.base.id.as_string(), sku.base.metadata.version)
                        children=move |sku: Sku| view! { <SkuCard sku=sku /> }
                    />
                </div>
            </Show>

            <div class="catalog-footer">
                <div class="info-card">
                    <div class="info-card__icon">{icon("database")}</div>
                    <div class="info-card__text">
                        {"All prices are listed in tokens. Token consumption is billed against your account balance."}
                    </div>
                </div>
                <div class="info-card">
                    <div class="info-card__icon">{icon("clock")}</div>
                    <div class="info-card__text">
                        {"Longer commitments come with lower effective token rates than Pay-per-Use."}
                    </div>
                </div>
                <div class="info-card">
                    <div class="info-card__icon">{icon("users")}</div>
                    <div class="info-card__text">
                        {"N/A means the plan is not offered for that SKU. Contact sales for custom terms."}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Карточка одного SKU с таблицей цен по четырём планам
#[component]
fn SkuCard(sku: Sku) -> impl IntoView {
    let popular = sku.popular;
    let pricing = sku.pricing;

    let pricing_rows = PricingPlan::ALL
        .iter()
        .map(|plan| {
            let offered = pricing.is_offered(*plan);
            let tokens = format_tokens(pricing.tokens_for(*plan));
            view! {
                <div class="pricing-row" class:pricing-row--na=!offered>
                    <span class="pricing-row__plan">
                        {icon(plan.icon_name())}
                        {plan.label()}
                    </span>
                    <span class="pricing-row__tokens">
                        {tokens}
                        {offered.then(|| view! { <span class="pricing-row__unit">{" tokens"}</span> })}
                    </span>
                </div>
            }
        })
        .collect_view();

    let features = sku.features.clone();
    let features_view = (!features.is_empty()).then(|| {
        view! {
            <div class="sku-card__features">
                <div class="sku-card__features-title">{"What's included"}</div>
                <ul class="feature-list">
                    {features
                        .into_iter()
                        .map(|f| view! { <li class="feature-list__item">{"\u{2713} "}{f}</li> })
                        .collect_view()}
                </ul>
            </div>
        }
    });

    view! {
        <div class="sku-card" class:sku-card--popular=popular>
            {popular.then(|| view! {
                <div class="sku-card__badge">{icon("star")}{" Most Popular"}</div>
            })}
            <div class="sku-card__head">
                <span class="sku-card__code">{sku.base.code.clone()}</span>
                <span class="badge badge--category">{sku.category.clone()}</span>
            </div>
            <h3 class="sku-card__name">{sku.base.description.clone()}</h3>
            <p class="sku-card__description">{sku.full_description.clone()}</p>
            <div class="sku-card__pricing">{pricing_rows}</div>
            {features_view}
        </div>
    }
}
