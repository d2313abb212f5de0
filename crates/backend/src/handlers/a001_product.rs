use axum::Json;
use contracts::domain::a001_product::aggregate::CatalogSummary;

use crate::domain::a001_product;
use crate::shared::config::get_config;

/// GET /api/a001/catalog/summary
pub async fn get_summary() -> Result<Json<CatalogSummary>, axum::http::StatusCode> {
    match a001_product::service::load_summary(get_config()).await {
        Ok(summary) => Ok(Json(summary)),
        Err(e) => {
            tracing::error!("Failed to summarize catalog: {}", e);
            Err(axum::http::StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
