use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use contracts::domain::a001_scenario::{
    ScenarioCreate, ScenarioDetail, ScenarioSummary, ScenarioUpdate,
};

use super::reject;
use crate::domain::a001_scenario::service;
use crate::shared::analytics;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

/// GET /api/scenarios
pub async fn list_all(
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ScenarioSummary>>, (StatusCode, String)> {
    service::list(query.status.as_deref())
        .await
        .map(Json)
        .map_err(reject)
}

/// GET /api/scenarios/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<ScenarioDetail>, (StatusCode, String)> {
    let mut detail = service::get_detail(&id).await.map_err(reject)?;

    // Best-effort secondary analysis; absence never fails the read.
    detail.analysis = analytics::sink()
        .analyze(json!({
            "type": "scenario-detail",
            "data": detail.summary,
        }))
        .await;

    Ok(Json(detail))
}

/// POST /api/scenarios
pub async fn create(
    Json(dto): Json<ScenarioCreate>,
) -> Result<Json<ScenarioDetail>, (StatusCode, String)> {
    service::create(dto).await.map(Json).map_err(reject)
}

/// PUT /api/scenarios/:id
pub async fn update(
    Path(id): Path<String>,
    Json(patch): Json<ScenarioUpdate>,
) -> Result<Json<ScenarioSummary>, (StatusCode, String)> {
    service::update(&id, patch).await.map(Json).map_err(reject)
}

/// DELETE /api/scenarios/:id
pub async fn delete(
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    service::delete(&id).await.map_err(reject)?;
    Ok(Json(json!({"message": "Scenario deleted"})))
}

/// POST /api/scenarios/:id/duplicate
pub async fn duplicate(
    Path(id): Path<String>,
) -> Result<Json<ScenarioSummary>, (StatusCode, String)> {
    service::duplicate(&id).await.map(Json).map_err(reject)
}
