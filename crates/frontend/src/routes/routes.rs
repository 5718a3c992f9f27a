use crate::dashboards::{DevCheckDashboard, PriceLookupDashboard};
use crate::domain::a001_sku::api::SharedCatalogApi;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// `/` — проверка подключения и поиск, `/price` — только поиск цен
#[component]
pub fn AppRoutes(api: SharedCatalogApi) -> impl IntoView {
    let dev_check_api = api.clone();
    let price_api = api;

    view! {
        <Router>
            <Routes fallback=|| view! { <p class="page__not-found">"Page not found."</p> }>
                <Route
                    path=path!("/")
                    view=move || view! { <DevCheckDashboard api=dev_check_api.clone() /> }
                />
                <Route
                    path=path!("/price")
                    view=move || view! { <PriceLookupDashboard api=price_api.clone() /> }
                />
            </Routes>
        </Router>
    }
}
