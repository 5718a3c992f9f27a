use crate::domain::a001_sku::api::SharedCatalogApi;
use crate::domain::a001_sku::ui::connection_probe::ConnectionProbe;
use crate::domain::a001_sku::ui::search::SkuSearchPlayground;
use leptos::prelude::*;

/// Временная страница разработчика: проверка подключения + поиск SKU
#[component]
pub fn DevCheckDashboard(api: SharedCatalogApi) -> impl IntoView {
    let probe_api = api.clone();

    view! {
        <main class="page page--centered">
            <div class="page__container">
                <h1 class="page__title">"MAK Lube Field Dashboard — Dev Check"</h1>
                <p class="page__subtitle">
                    "Temporary developer page to verify Supabase connectivity and SKU search before we build the full UI."
                </p>

                <div class="page__stack">
                    <ConnectionProbe api=probe_api />
                    <SkuSearchPlayground api=api />
                </div>
            </div>
        </main>
    }
}
