use crate::domain::a001_sku::api::SharedCatalogApi;
use crate::domain::a001_sku::ui::search::SkuSearchPlayground;
use leptos::prelude::*;

/// Поиск цен DLP по названию, группе и вязкости
#[component]
pub fn PriceLookupDashboard(api: SharedCatalogApi) -> impl IntoView {
    view! {
        <main class="page">
            <div class="page__container">
                <h1 class="page__title">"Price Lookup – MAK Lube"</h1>
                <p class="page__subtitle">
                    "Search by name, product group and viscosity to get current DLP prices."
                </p>

                <SkuSearchPlayground api=api />
            </div>
        </main>
    }
}
