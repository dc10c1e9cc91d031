//! Wire types for the what-if simulation engine.

use serde::{Deserialize, Serialize};

use crate::domain::a001_scenario::ScenarioParameters;

// ============================================================================
// Simulation type
// ============================================================================

/// Dispatch key for the calculator. The wire carries a free-form string
/// and unrecognized values resolve to `Unknown`, which yields an
/// all-zero result instead of an error (fail-open by design).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationType {
    PriceChange,
    Promotion,
    NewStore,
    CostOptimization,
    Unknown,
}

impl SimulationType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "price_change" => SimulationType::PriceChange,
            "promotion" => SimulationType::Promotion,
            "new_store" => SimulationType::NewStore,
            "cost_optimization" => SimulationType::CostOptimization,
            _ => SimulationType::Unknown,
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

fn default_period() -> String {
    "6_months".to_string()
}

fn default_simulation_type() -> String {
    "promotion".to_string()
}

/// Ad-hoc simulation request. Nothing is persisted; the response is the
/// same detail payload a stored scenario would recompute on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    #[serde(default = "default_simulation_type")]
    pub simulation_type: String,
    #[serde(default = "default_period")]
    pub period: String,
    #[serde(default)]
    pub parameters: ScenarioParameters,
}

// ============================================================================
// Results
// ============================================================================

/// Financial projection for one simulation run. Impacts are absolute
/// currency deltas scaled to the requested period; percents are
/// relative to the period-scaled baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub revenue_impact: f64,
    pub margin_impact: f64,
    pub cost_impact: f64,
    pub revenue_percent: f64,
    pub margin_percent: f64,
    pub cost_percent: f64,
    pub roi: f64,

    pub optimistic_revenue: f64,
    pub optimistic_margin: f64,
    pub realistic_revenue: f64,
    pub realistic_margin: f64,
    pub pessimistic_revenue: f64,
    pub pessimistic_margin: f64,
}

/// One point of the month-by-month evolution curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionItem {
    pub month: String,
    #[serde(default)]
    pub baseline: f64,
    #[serde(default)]
    pub with_simulation: f64,
}

/// Per-store share of the projected impact. The id is a fresh token
/// per invocation, not a reference to a persisted store entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreImpact {
    pub id: String,
    pub impact: f64,
    #[serde(default)]
    pub ca_prevu: f64,
    #[serde(default)]
    pub ca_impact: f64,
    #[serde(default)]
    pub marge_prevue: f64,
    #[serde(default)]
    pub marge_impact: f64,
    #[serde(default)]
    pub details: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub results: SimulationResult,
    #[serde(default)]
    pub evolution_data: Vec<EvolutionItem>,
    #[serde(default)]
    pub store_impact: Vec<StoreImpact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulation_type_parses_known_values() {
        assert_eq!(SimulationType::parse("promotion"), SimulationType::Promotion);
        assert_eq!(
            SimulationType::parse("price_change"),
            SimulationType::PriceChange
        );
        assert_eq!(SimulationType::parse("new_store"), SimulationType::NewStore);
        assert_eq!(
            SimulationType::parse("cost_optimization"),
            SimulationType::CostOptimization
        );
    }

    #[test]
    fn simulation_type_falls_open_on_unknown() {
        assert_eq!(SimulationType::parse("merger"), SimulationType::Unknown);
        assert_eq!(SimulationType::parse(""), SimulationType::Unknown);
    }

    #[test]
    fn request_defaults_type_and_period() {
        let req: SimulationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.simulation_type, "promotion");
        assert_eq!(req.period, "6_months");
    }
}
