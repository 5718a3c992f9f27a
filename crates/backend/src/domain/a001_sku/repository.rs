use async_trait::async_trait;
use contracts::domain::a001_sku::{SkuProbeRow, SkuSearchParams, SkuSearchRow};

use crate::shared::supabase::{SupabaseClient, SupabaseError};

/// Таблица каталога, из которой читает проверка подключения
pub const SKU_TABLE: &str = "skus";

/// Хранимая процедура поиска на стороне Supabase
pub const SEARCH_SKUS_RPC: &str = "search_skus";

/// Источник данных каталога SKU
///
/// Поиск, фильтрация и цены целиком на удалённой стороне.
#[async_trait]
pub trait SkuCatalog: Send + Sync {
    /// Не больше одной строки `id, name` без фильтров
    async fn probe(&self) -> Result<Vec<SkuProbeRow>, SupabaseError>;

    /// Вызов RPC `search_skus`
    async fn search_skus(
        &self,
        params: &SkuSearchParams,
    ) -> Result<Vec<SkuSearchRow>, SupabaseError>;
}

#[async_trait]
impl SkuCatalog for SupabaseClient {
    async fn probe(&self) -> Result<Vec<SkuProbeRow>, SupabaseError> {
        self.select(SKU_TABLE, &[("select", "id,name"), ("limit", "1")])
            .await
    }

    async fn search_skus(
        &self,
        params: &SkuSearchParams,
    ) -> Result<Vec<SkuSearchRow>, SupabaseError> {
        // PostgREST отдаёт null вместо [] для пустого результата у некоторых процедур
        let rows: Option<Vec<SkuSearchRow>> = self.rpc(SEARCH_SKUS_RPC, params).await?;
        Ok(rows.unwrap_or_default())
    }
}
