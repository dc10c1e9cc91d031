use serde::{Deserialize, Serialize};

use crate::simulation::{EvolutionItem, SimulationResult, StoreImpact};

// ============================================================================
// Lifecycle status
// ============================================================================

/// Lifecycle state of a scenario. `Deleted` is a soft-delete flag:
/// the row stays in the store but disappears from every read path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioStatus {
    Draft,
    Active,
    Deleted,
}

impl ScenarioStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioStatus::Draft => "draft",
            ScenarioStatus::Active => "active",
            ScenarioStatus::Deleted => "deleted",
        }
    }
}

// ============================================================================
// Parameter bag
// ============================================================================

/// What-if parameters for a simulation. Every field is optional; the
/// calculator applies per-branch defaults for fields it needs and
/// ignores the rest. Out-of-range values are accepted as-is: the
/// simulator is advisory, not an input-validation gate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_increase: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investment: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_revenue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_reduction: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_impact: Option<String>,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

fn default_created_by() -> String {
    "system".to_string()
}

/// Payload for creating (and immediately simulating) a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// what_if | budget | forecast | stress_test
    pub scenario_type: String,
    /// price_change | promotion | new_store | cost_optimization
    pub simulation_type: String,
    /// 1_month | 3_months | 6_months | 12_months
    pub period: String,
    #[serde(default)]
    pub parameters: ScenarioParameters,
    #[serde(default = "default_created_by")]
    pub created_by: String,
}

/// Partial update. Omitted fields are left untouched; the parameter
/// patch is merged key-by-key into the stored bag, never replacing it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ScenarioParameters>,
}

// ============================================================================
// Read views
// ============================================================================

/// List/summary view of a scenario. Impact fields carry the realistic
/// band of the last computed result, not a live recomputation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub scenario_type: String,
    pub simulation_type: String,
    pub period: String,
    pub parameters: serde_json::Value,
    pub revenue_impact: f64,
    pub cost_impact: f64,
    pub margin_impact: f64,
    pub probability: f64,
    pub status: String,
    /// Milliseconds since epoch.
    pub created_at: i64,
    pub created_by: String,
}

/// Detail view: the summary plus results recomputed from the persisted
/// parameters at read time. Derived data is never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioDetail {
    #[serde(flatten)]
    pub summary: ScenarioSummary,
    pub results: SimulationResult,
    #[serde(default)]
    pub evolution_data: Vec<EvolutionItem>,
    #[serde(default)]
    pub store_impact: Vec<StoreImpact>,
    /// Opaque annotation from the external analytics sink, when the
    /// webhook is configured and reachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_deserialize_from_partial_bag() {
        let params: ScenarioParameters =
            serde_json::from_str(r#"{"discount": 15.0, "marketing_budget": 30000}"#).unwrap();
        assert_eq!(params.discount, Some(15.0));
        assert_eq!(params.marketing_budget, Some(30000.0));
        assert_eq!(params.traffic_increase, None);
    }

    #[test]
    fn parameters_ignore_unknown_keys() {
        let params: ScenarioParameters =
            serde_json::from_str(r#"{"discount": 5, "weather": "sunny"}"#).unwrap();
        assert_eq!(params.discount, Some(5.0));
    }

    #[test]
    fn parameters_serialize_without_unset_fields() {
        let params = ScenarioParameters {
            discount: Some(20.0),
            ..Default::default()
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, serde_json::json!({"discount": 20.0}));
    }

    #[test]
    fn create_defaults_created_by_to_system() {
        let dto: ScenarioCreate = serde_json::from_str(
            r#"{
                "name": "Summer promo",
                "scenario_type": "what_if",
                "simulation_type": "promotion",
                "period": "6_months"
            }"#,
        )
        .unwrap();
        assert_eq!(dto.created_by, "system");
        assert_eq!(dto.parameters, ScenarioParameters::default());
    }

    #[test]
    fn status_round_trips_as_lowercase() {
        let s = serde_json::to_string(&ScenarioStatus::Active).unwrap();
        assert_eq!(s, "\"active\"");
        assert_eq!(ScenarioStatus::Active.as_str(), "active");
    }
}
