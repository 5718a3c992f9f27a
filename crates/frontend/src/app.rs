use crate::domain::a001_sku::api::HttpSkuCatalogApi;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Один клиент каталога на всё приложение, передаётся страницам явно
    let api = HttpSkuCatalogApi::shared();

    view! {
        <AppRoutes api=api />
    }
}
