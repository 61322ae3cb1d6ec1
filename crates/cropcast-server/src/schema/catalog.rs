//! Schema types for `GET /api/catalog`.

use serde::Serialize;

/// The closed input sets that feed the advisory form's dropdowns.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub districts: Vec<&'static str>,
    pub seasons: Vec<SeasonView>,
}

/// One cropping season and the crops selectable within it.
#[derive(Debug, Serialize)]
pub struct SeasonView {
    pub name: &'static str,
    pub crops: Vec<&'static str>,
}
