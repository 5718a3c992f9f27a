use std::sync::Arc;

use crate::domain::a001_sku::repository::SkuCatalog;

/// Состояние приложения, общее для всех обработчиков
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn SkuCatalog>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn SkuCatalog>) -> Self {
        Self { catalog }
    }
}
