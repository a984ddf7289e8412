use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::state::CatalogContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Единый каталог для всех страниц вместо копий мок-данных по месту
    provide_context(CatalogContext::new());

    view! {
        <AppRoutes />
    }
}
