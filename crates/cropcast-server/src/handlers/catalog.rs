//! Catalog handler.

use axum::Json;

use cropcast_core::catalog::{crops_for_season, DISTRICTS, SEASONS};

use crate::schema::catalog::{CatalogResponse, SeasonView};

/// Returns the closed district/season/crop sets for form dropdowns.
///
/// `GET /api/catalog`
pub async fn catalog() -> Json<CatalogResponse> {
    let seasons = SEASONS
        .iter()
        .map(|&name| SeasonView {
            name,
            crops: crops_for_season(name).unwrap_or_default().to_vec(),
        })
        .collect();

    Json(CatalogResponse {
        districts: DISTRICTS.to_vec(),
        seasons,
    })
}
