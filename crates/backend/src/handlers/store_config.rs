use axum::Json;
use contracts::shared::store_config::StoreConfig;

use crate::shared::config::get_config;

/// GET /api/config
pub async fn get_store_config() -> Json<StoreConfig> {
    Json(get_config().store.clone())
}
