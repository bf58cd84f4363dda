//! Encyclopedia proxy handler.

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use crate::services::encyclopedia;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Summary {
    pub extract: Option<String>,
}

/// `GET /api/encyclopedia/summary?name=`
///
/// Misses and upstream failures both answer `{"extract": null}`; the panel
/// treats them the same.
pub async fn summary(State(state): State<AppState>, Query(query): Query<SummaryQuery>) -> Json<Summary> {
    let extract = encyclopedia::describe(state.encyclopedia.as_ref(), &query.name).await;
    if extract.is_none() {
        tracing::debug!(name = %query.name, "no encyclopedia extract");
    }
    Json(Summary { extract })
}

#[cfg(test)]
#[path = "encyclopedia_test.rs"]
mod tests;
