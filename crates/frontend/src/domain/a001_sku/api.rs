use async_trait::async_trait;
use contracts::domain::a001_sku::{SkuProbeRow, SkuSearchParams, SkuSearchRow};
use std::sync::Arc;

use crate::shared::api_utils::{get_json, post_json};

/// Клиент каталога SKU
///
/// Создаётся один раз в `App` и передаётся компонентам явно,
/// в тестах подменяется фейком.
#[async_trait(?Send)]
pub trait SkuCatalogApi {
    /// Не больше одной строки `id, name` из каталога
    async fn probe(&self) -> Result<Vec<SkuProbeRow>, String>;

    /// RPC `search_skus`
    async fn search_skus(&self, params: &SkuSearchParams) -> Result<Vec<SkuSearchRow>, String>;
}

pub type SharedCatalogApi = Arc<dyn SkuCatalogApi + Send + Sync>;

/// Реализация через backend (`/api/a001/sku/*`)
#[derive(Debug, Clone, Default)]
pub struct HttpSkuCatalogApi;

impl HttpSkuCatalogApi {
    pub fn shared() -> SharedCatalogApi {
        Arc::new(Self)
    }
}

#[async_trait(?Send)]
impl SkuCatalogApi for HttpSkuCatalogApi {
    async fn probe(&self) -> Result<Vec<SkuProbeRow>, String> {
        get_json("/api/a001/sku/probe").await
    }

    async fn search_skus(&self, params: &SkuSearchParams) -> Result<Vec<SkuSearchRow>, String> {
        post_json("/api/a001/sku/search", params).await
    }
}
