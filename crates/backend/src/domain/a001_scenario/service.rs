//! Scenario lifecycle orchestration.
//!
//! Stored rows keep only the parameters and the realistic-band impacts
//! of the last computed result; the detail view is recomputed from the
//! persisted parameters on every read so derived data can never go
//! stale in storage.

use chrono::Utc;
use contracts::domain::a001_scenario::{
    ScenarioCreate, ScenarioDetail, ScenarioParameters, ScenarioStatus, ScenarioSummary,
    ScenarioUpdate,
};
use serde_json::{json, Value};
use uuid::Uuid;

use super::error::ScenarioError;
use super::repository::{self, Model};
use crate::shared::simulation::{calculator, projection};

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

// ============================================================================
// Stored parameter bag helpers
// ============================================================================

/// The bag is stored as JSON text with simulation_type/period merged in.
fn parse_stored_bag(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| json!({}))
}

/// Wire defaults for summaries whose bag predates these keys.
fn wire_fields(bag: &Value) -> (String, String) {
    let simulation_type = bag
        .get("simulation_type")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();
    let period = bag
        .get("period")
        .and_then(Value::as_str)
        .unwrap_or("6_months")
        .to_string();
    (simulation_type, period)
}

fn typed_bag(bag: &Value) -> Result<ScenarioParameters, ScenarioError> {
    serde_json::from_value(bag.clone())
        .map_err(|e| ScenarioError::Validation(format!("stored parameter bag is malformed: {e}")))
}

/// Additive merge: patch keys overwrite, keys absent from the patch are
/// retained. Mirrors the `parameters || patch` jsonb update.
fn merge_bag(stored: &mut Value, patch: Value) {
    if let (Some(base), Value::Object(add)) = (stored.as_object_mut(), patch) {
        for (key, value) in add {
            base.insert(key, value);
        }
    }
}

fn merged_bag_for_insert(dto: &ScenarioCreate) -> Result<Value, ScenarioError> {
    let mut bag = serde_json::to_value(&dto.parameters)
        .map_err(|e| ScenarioError::Validation(format!("parameter bag is not serializable: {e}")))?;
    merge_bag(
        &mut bag,
        json!({
            "simulation_type": dto.simulation_type,
            "period": dto.period,
        }),
    );
    Ok(bag)
}

fn summary_from(row: &Model) -> ScenarioSummary {
    let bag = parse_stored_bag(&row.parameters);
    let (simulation_type, period) = wire_fields(&bag);
    ScenarioSummary {
        id: row.id.clone(),
        name: row.name.clone(),
        description: row.description.clone(),
        scenario_type: row.scenario_type.clone(),
        simulation_type,
        period,
        parameters: bag,
        revenue_impact: row.revenue_impact,
        cost_impact: row.cost_impact,
        margin_impact: row.margin_impact,
        probability: row.probability,
        status: row.status.clone(),
        created_at: row.created_at,
        created_by: row.created_by.clone(),
    }
}

// ============================================================================
// Lifecycle operations
// ============================================================================

/// Create a scenario, compute its projection and persist the summary.
/// The returned detail view is assembled in this call, not re-read.
pub async fn create(dto: ScenarioCreate) -> Result<ScenarioDetail, ScenarioError> {
    if dto.name.trim().is_empty() {
        return Err(ScenarioError::Validation("name must not be empty".into()));
    }

    let results = calculator::compute(&dto.simulation_type, &dto.parameters, &dto.period);
    let probability = calculator::probability_for(results.roi);

    let bag = merged_bag_for_insert(&dto)?;
    let id = Uuid::new_v4().to_string();
    let now = now_ms();

    let row = Model {
        id: id.clone(),
        name: dto.name,
        description: dto.description,
        scenario_type: dto.scenario_type,
        parameters: bag.to_string(),
        revenue_impact: results.revenue_impact,
        cost_impact: results.cost_impact,
        margin_impact: results.margin_impact,
        probability,
        status: ScenarioStatus::Active.as_str().to_string(),
        created_by: dto.created_by,
        created_at: now,
        updated_at: now,
        is_deleted: false,
    };

    repository::insert(&row)
        .await
        .map_err(|e| ScenarioError::store("insert", &id, e))?;

    let evolution_data = projection::evolution(results.revenue_impact, &dto.period);
    let store_impact = projection::store_impact();

    Ok(ScenarioDetail {
        summary: summary_from(&row),
        results,
        evolution_data,
        store_impact,
        analysis: None,
    })
}

/// Summary list, most recent first, optionally filtered by status.
pub async fn list(status: Option<&str>) -> Result<Vec<ScenarioSummary>, ScenarioError> {
    let rows = repository::list(status)
        .await
        .map_err(|e| ScenarioError::store("list", "*", e))?;
    Ok(rows.iter().map(summary_from).collect())
}

/// Detail view, recomputed from the persisted parameters on every call.
pub async fn get_detail(id: &str) -> Result<ScenarioDetail, ScenarioError> {
    let row = repository::fetch_by_id(id)
        .await
        .map_err(|e| ScenarioError::store("fetch", id, e))?
        .ok_or(ScenarioError::NotFound)?;

    let bag = parse_stored_bag(&row.parameters);
    let (simulation_type, period) = wire_fields(&bag);
    let parameters = typed_bag(&bag)?;

    let results = calculator::compute(&simulation_type, &parameters, &period);
    let evolution_data = projection::evolution(results.revenue_impact, &period);
    let store_impact = projection::store_impact();

    Ok(ScenarioDetail {
        summary: summary_from(&row),
        results,
        evolution_data,
        store_impact,
        analysis: None,
    })
}

/// Partial update. The parameter patch merges into the stored bag; the
/// persisted impact columns are intentionally left as the last computed
/// result (the detail read recomputes anyway).
pub async fn update(id: &str, patch: ScenarioUpdate) -> Result<ScenarioSummary, ScenarioError> {
    let mut row = repository::fetch_by_id(id)
        .await
        .map_err(|e| ScenarioError::store("fetch", id, e))?
        .ok_or(ScenarioError::NotFound)?;

    if let Some(name) = patch.name {
        row.name = name;
    }
    if let Some(description) = patch.description {
        row.description = Some(description);
    }
    if let Some(status) = patch.status {
        row.status = status;
    }
    if let Some(parameters) = patch.parameters {
        let patch_value = serde_json::to_value(&parameters).map_err(|e| {
            ScenarioError::Validation(format!("parameter patch is not serializable: {e}"))
        })?;
        let mut bag = parse_stored_bag(&row.parameters);
        merge_bag(&mut bag, patch_value);
        row.parameters = bag.to_string();
    }
    row.updated_at = now_ms();

    repository::update(&row)
        .await
        .map_err(|e| ScenarioError::store("update", id, e))?;

    Ok(summary_from(&row))
}

/// Soft delete. Deleting an already-deleted scenario is NotFound, not a
/// no-op.
pub async fn delete(id: &str) -> Result<(), ScenarioError> {
    let deleted = repository::mark_deleted(id, now_ms())
        .await
        .map_err(|e| ScenarioError::store("delete", id, e))?;
    if deleted {
        Ok(())
    } else {
        Err(ScenarioError::NotFound)
    }
}

/// Copy a scenario verbatim (parameters and last-computed impacts
/// included) under a new id, forced back to draft.
pub async fn duplicate(id: &str) -> Result<ScenarioSummary, ScenarioError> {
    let source = repository::fetch_by_id(id)
        .await
        .map_err(|e| ScenarioError::store("fetch", id, e))?
        .ok_or(ScenarioError::NotFound)?;

    let now = now_ms();
    let copy = Model {
        id: Uuid::new_v4().to_string(),
        name: format!("{} (Copy)", source.name),
        status: ScenarioStatus::Draft.as_str().to_string(),
        created_at: now,
        updated_at: now,
        ..source
    };

    repository::insert(&copy)
        .await
        .map_err(|e| ScenarioError::store("duplicate", &copy.id, e))?;

    Ok(summary_from(&copy))
}
