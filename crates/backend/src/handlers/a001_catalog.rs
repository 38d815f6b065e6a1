use axum::Json;
use contracts::domain::a001_catalog::aggregate::Catalog;

use crate::domain::a001_catalog;

/// GET /Catalogs
pub async fn list_all() -> Result<Json<Vec<Catalog>>, axum::http::StatusCode> {
    match a001_catalog::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list catalogs: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
