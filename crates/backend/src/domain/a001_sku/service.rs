use contracts::domain::a001_sku::{SkuProbeRow, SkuSearchParams, SkuSearchRow};

use super::repository::SkuCatalog;
use crate::shared::supabase::SupabaseError;

/// Проверка подключения: одна строка `id, name` из каталога
pub async fn probe(catalog: &dyn SkuCatalog) -> Result<Vec<SkuProbeRow>, SupabaseError> {
    match catalog.probe().await {
        Ok(rows) => {
            tracing::info!("SKU probe ok, rows: {}", rows.len());
            Ok(rows)
        }
        Err(e) => {
            tracing::error!("SKU probe failed: {}", e);
            Err(e)
        }
    }
}

/// Поиск SKU через RPC
///
/// Параметры нормализуются повторно: пустые фильтры превращаются в null,
/// лимит всегда 20, что бы ни прислал клиент.
pub async fn search(
    catalog: &dyn SkuCatalog,
    params: SkuSearchParams,
) -> Result<Vec<SkuSearchRow>, SupabaseError> {
    let params = params.normalized();

    match catalog.search_skus(&params).await {
        Ok(rows) => {
            tracing::info!(
                "search_skus q={:?} grp={:?} visc={:?} -> {} rows",
                params.q,
                params.grp,
                params.visc,
                rows.len()
            );
            Ok(rows)
        }
        Err(e) => {
            tracing::error!("RPC search_skus error: {}", e);
            Err(e)
        }
    }
}
