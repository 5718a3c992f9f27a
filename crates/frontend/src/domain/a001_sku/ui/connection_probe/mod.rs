pub mod status;

use self::status::{ConnectionStatus, ProbeState};
use crate::domain::a001_sku::api::SharedCatalogApi;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Проверка подключения к каталогу
///
/// Один запрос при монтировании, без повторов и опроса.
#[component]
pub fn ConnectionProbe(api: SharedCatalogApi) -> impl IntoView {
    let status = RwSignal::new(ConnectionStatus::unchecked());

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let result = api.probe().await;
            if let Err(e) = &result {
                log::error!("SKU probe failed: {}", e);
            }
            status.set(ConnectionStatus::from_probe(result));
        });
    });

    let status_class = move || match status.with(|s| s.state) {
        ProbeState::Unchecked => "probe probe--pending",
        ProbeState::Healthy => "probe probe--ok",
        ProbeState::Failed => "probe probe--error",
    };

    view! {
        <p class=status_class>{move || status.with(ConnectionStatus::display_text)}</p>
    }
}
