//! Per-branch parameter resolution.
//!
//! Each simulation type reads a small subset of the incoming bag and
//! defaults the fields it needs. Nothing is range-checked here: the
//! simulator is advisory and accepts whatever numbers the caller sends.

use contracts::domain::a001_scenario::ScenarioParameters;
use contracts::simulation::SimulationType;

// Promotion defaults
const DEFAULT_DISCOUNT: f64 = 20.0;
const DEFAULT_MARKETING_BUDGET: f64 = 50_000.0;
const DEFAULT_TRAFFIC_INCREASE: f64 = 25.0;

// New store defaults
const DEFAULT_MONTHLY_REVENUE: f64 = 120_000.0;
const DEFAULT_INVESTMENT: f64 = 250_000.0;

// Cost optimization defaults
const DEFAULT_COST_REDUCTION: f64 = 5.0;
const DEFAULT_IMPLEMENTATION_COST: f64 = 25_000.0;

// Price change default: a 10% price cut
const DEFAULT_PRICE_CHANGE: f64 = -10.0;

/// Parameter bag after defaulting, one variant per calculator branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedParameters {
    Promotion {
        discount: f64,
        marketing_budget: f64,
        traffic_increase: f64,
    },
    NewStore {
        monthly_revenue: f64,
        investment: f64,
    },
    CostOptimization {
        cost_reduction: f64,
        implementation_cost: f64,
    },
    PriceChange {
        price_change: f64,
    },
    Unknown,
}

/// Fill in the defaults for the fields the matching formula reads.
/// Fields that belong to other branches are ignored, not rejected.
pub fn resolve(simulation_type: SimulationType, params: &ScenarioParameters) -> ResolvedParameters {
    match simulation_type {
        SimulationType::Promotion => ResolvedParameters::Promotion {
            discount: params.discount.unwrap_or(DEFAULT_DISCOUNT),
            marketing_budget: params.marketing_budget.unwrap_or(DEFAULT_MARKETING_BUDGET),
            traffic_increase: params.traffic_increase.unwrap_or(DEFAULT_TRAFFIC_INCREASE),
        },
        SimulationType::NewStore => ResolvedParameters::NewStore {
            monthly_revenue: params.monthly_revenue.unwrap_or(DEFAULT_MONTHLY_REVENUE),
            investment: params.investment.unwrap_or(DEFAULT_INVESTMENT),
        },
        SimulationType::CostOptimization => ResolvedParameters::CostOptimization {
            cost_reduction: params.cost_reduction.unwrap_or(DEFAULT_COST_REDUCTION),
            implementation_cost: params
                .implementation_cost
                .unwrap_or(DEFAULT_IMPLEMENTATION_COST),
        },
        SimulationType::PriceChange => ResolvedParameters::PriceChange {
            price_change: params.price_change.unwrap_or(DEFAULT_PRICE_CHANGE),
        },
        SimulationType::Unknown => ResolvedParameters::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotion_defaults_apply_to_absent_fields() {
        let resolved = resolve(SimulationType::Promotion, &ScenarioParameters::default());
        assert_eq!(
            resolved,
            ResolvedParameters::Promotion {
                discount: 20.0,
                marketing_budget: 50_000.0,
                traffic_increase: 25.0,
            }
        );
    }

    #[test]
    fn provided_fields_override_defaults() {
        let params = ScenarioParameters {
            discount: Some(5.0),
            ..Default::default()
        };
        let resolved = resolve(SimulationType::Promotion, &params);
        assert_eq!(
            resolved,
            ResolvedParameters::Promotion {
                discount: 5.0,
                marketing_budget: 50_000.0,
                traffic_increase: 25.0,
            }
        );
    }

    #[test]
    fn zero_is_a_valid_explicit_value() {
        let params = ScenarioParameters {
            marketing_budget: Some(0.0),
            ..Default::default()
        };
        match resolve(SimulationType::Promotion, &params) {
            ResolvedParameters::Promotion {
                marketing_budget, ..
            } => assert_eq!(marketing_budget, 0.0),
            other => panic!("unexpected branch: {other:?}"),
        }
    }

    #[test]
    fn foreign_branch_fields_are_ignored() {
        let params = ScenarioParameters {
            investment: Some(1_000_000.0),
            price_change: Some(30.0),
            ..Default::default()
        };
        let resolved = resolve(SimulationType::CostOptimization, &params);
        assert_eq!(
            resolved,
            ResolvedParameters::CostOptimization {
                cost_reduction: 5.0,
                implementation_cost: 25_000.0,
            }
        );
    }

    #[test]
    fn unknown_type_resolves_to_unknown() {
        let resolved = resolve(SimulationType::Unknown, &ScenarioParameters::default());
        assert_eq!(resolved, ResolvedParameters::Unknown);
    }
}
