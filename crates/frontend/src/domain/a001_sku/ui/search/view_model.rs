use super::state::{SearchState, SearchTicket};
use crate::domain::a001_sku::api::{SharedCatalogApi, SkuCatalogApi};
use contracts::domain::a001_sku::{SkuSearchParams, SkuSearchRow};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel для площадки поиска SKU
#[derive(Clone, Copy)]
pub struct SkuSearchVm {
    pub state: RwSignal<SearchState>,
    api: StoredValue<SharedCatalogApi>,
}

impl SkuSearchVm {
    pub fn new(api: SharedCatalogApi) -> Self {
        Self {
            state: RwSignal::new(SearchState::default()),
            api: StoredValue::new(api),
        }
    }

    pub fn set_text(&self, value: String) {
        self.state.update(|s| s.filters.text = value);
    }

    pub fn set_group(&self, value: String) {
        self.state.update(|s| s.filters.group = value);
    }

    pub fn set_viscosity(&self, value: String) {
        self.state.update(|s| s.filters.viscosity = value);
    }

    /// Запустить поиск по текущим фильтрам
    pub fn search_command(&self) {
        if let Some(ticket) = self.state.try_update(SearchState::begin_search) {
            self.dispatch(ticket);
        }
    }

    /// Повторить последний запрос
    pub fn retry_command(&self) {
        if let Some(ticket) = self.state.try_update(SearchState::retry).flatten() {
            self.dispatch(ticket);
        }
    }

    /// Очистить фильтры и результаты (без запроса)
    pub fn reset_command(&self) {
        self.state.update(SearchState::reset);
    }

    pub fn sample_query_command(&self) {
        self.state.update(SearchState::use_sample_query);
    }

    fn dispatch(&self, ticket: SearchTicket) {
        let api = self.api.get_value();
        let state = self.state;

        spawn_local(async move {
            let result = run_search(api.as_ref(), &ticket.params).await;
            state.update(|s| {
                if !s.complete(ticket.token, result) {
                    log::debug!("search_skus response #{} is stale, dropped", ticket.token);
                }
            });
        });
    }
}

/// Один вызов RPC с логированием в консоль
pub async fn run_search(
    api: &dyn SkuCatalogApi,
    params: &SkuSearchParams,
) -> Result<Vec<SkuSearchRow>, String> {
    match api.search_skus(params).await {
        Ok(rows) => {
            log::debug!("search_skus result: {} rows", rows.len());
            Ok(rows)
        }
        Err(e) => {
            log::error!("RPC search_skus error: {}", e);
            Err(e)
        }
    }
}
