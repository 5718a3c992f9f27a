use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a001_sku::{SkuProbeRow, SkuSearchParams, SkuSearchRow};

use crate::domain::a001_sku::service;
use crate::shared::app_state::AppState;
use crate::shared::supabase::SupabaseError;

/// Ошибка удалённого сервиса в виде ответа API: 502 + `ApiErrorBody`
#[derive(Debug)]
pub struct ApiError(pub SupabaseError);

impl From<SupabaseError> for ApiError {
    fn from(e: SupabaseError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, Json(self.0.to_body())).into_response()
    }
}

/// GET /api/a001/sku/probe
pub async fn probe(State(state): State<AppState>) -> Result<Json<Vec<SkuProbeRow>>, ApiError> {
    let rows = service::probe(state.catalog.as_ref()).await?;
    Ok(Json(rows))
}

/// POST /api/a001/sku/search
pub async fn search(
    State(state): State<AppState>,
    Json(params): Json<SkuSearchParams>,
) -> Result<Json<Vec<SkuSearchRow>>, ApiError> {
    let rows = service::search(state.catalog.as_ref(), params).await?;
    Ok(Json(rows))
}
