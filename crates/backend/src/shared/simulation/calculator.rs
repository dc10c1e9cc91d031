//! The simulation calculator: business parameters in, financial
//! projection out. Pure and deterministic; all I/O stays in the
//! lifecycle layer.

use contracts::domain::a001_scenario::ScenarioParameters;
use contracts::simulation::{SimulationResult, SimulationType};

use super::params::{self, ResolvedParameters};

/// Reference monthly revenue of the chain. Fixed business assumption,
/// not configuration.
pub const BASE_MONTHLY_REVENUE: f64 = 2_400_000.0;

/// Reference gross margin rate.
pub const BASE_MARGIN: f64 = 0.35;

// Band multipliers applied after every branch.
const OPTIMISTIC_REVENUE_FACTOR: f64 = 1.20;
const OPTIMISTIC_MARGIN_FACTOR: f64 = 1.24;
const PESSIMISTIC_REVENUE_FACTOR: f64 = 0.85;
const PESSIMISTIC_MARGIN_FACTOR: f64 = 0.74;

// Price elasticity used by the price_change branch.
const PRICE_ELASTICITY: f64 = 1.5;

/// Map a period bucket to its month count. Unrecognized buckets
/// (including the 1_year/2_years aliases the simulation endpoint
/// accepts) fall open to a single month rather than failing; this is
/// the one fallback used everywhere, calculator and projections alike.
pub fn period_months(period: &str) -> u32 {
    match period {
        "1_month" => 1,
        "3_months" => 3,
        "6_months" => 6,
        "12_months" => 12,
        _ => 1,
    }
}

/// Success probability heuristic derived from ROI. The high-ROI check
/// wins when both conditions would match.
pub fn probability_for(roi: f64) -> f64 {
    if roi > 200.0 {
        85.0
    } else if roi < 100.0 {
        60.0
    } else {
        75.0
    }
}

/// Compute the financial projection for one simulation.
///
/// Exactly one branch executes; an unrecognized simulation type yields
/// an all-zero result before the percent and band derivation.
pub fn compute(
    simulation_type: &str,
    parameters: &ScenarioParameters,
    period: &str,
) -> SimulationResult {
    let months = period_months(period) as f64;
    let base_costs = BASE_MONTHLY_REVENUE * (1.0 - BASE_MARGIN);

    let mut revenue_impact = 0.0;
    let mut margin_impact = 0.0;
    let mut cost_impact = 0.0;
    let mut roi = 0.0;

    match params::resolve(SimulationType::parse(simulation_type), parameters) {
        ResolvedParameters::Promotion {
            discount,
            marketing_budget,
            traffic_increase,
        } => {
            // Extra traffic converts to revenue at a 0.7 rate.
            let revenue_increase = BASE_MONTHLY_REVENUE * (traffic_increase / 100.0) * 0.7;
            revenue_impact = (revenue_increase - marketing_budget) * months;

            // The promotion erodes the margin rate.
            let margin_reduction = discount * 0.015;
            margin_impact = revenue_increase * (BASE_MARGIN - margin_reduction) * months;

            cost_impact = -marketing_budget * months;

            if marketing_budget > 0.0 {
                roi = margin_impact / marketing_budget * 100.0;
            }
        }
        ResolvedParameters::NewStore {
            monthly_revenue,
            investment,
        } => {
            revenue_impact = monthly_revenue * months;
            margin_impact = monthly_revenue * BASE_MARGIN * months;
            // One-time capital outlay, deliberately not period-scaled.
            cost_impact = investment;

            if investment > 0.0 {
                roi = margin_impact / investment * 100.0;
            }
        }
        ResolvedParameters::CostOptimization {
            cost_reduction,
            implementation_cost,
        } => {
            let monthly_savings = base_costs * (cost_reduction / 100.0);
            cost_impact = -(monthly_savings * months - implementation_cost);
            margin_impact = monthly_savings * months;
            revenue_impact = 0.0;

            if implementation_cost > 0.0 {
                roi = margin_impact / implementation_cost * 100.0;
            }
        }
        ResolvedParameters::PriceChange { price_change } => {
            let volume_change = -price_change * PRICE_ELASTICITY;
            let revenue_change = BASE_MONTHLY_REVENUE * (price_change / 100.0)
                + BASE_MONTHLY_REVENUE * (volume_change / 100.0);
            revenue_impact = revenue_change * months;

            margin_impact = if price_change > 0.0 {
                revenue_change * (BASE_MARGIN + 0.05) * months
            } else {
                revenue_change * (BASE_MARGIN - 0.02) * months
            };

            // Fixed ROI figures, not derived from the impacts.
            roi = if price_change > 0.0 { 400.0 } else { 200.0 };
        }
        ResolvedParameters::Unknown => {}
    }

    let revenue_percent = revenue_impact / (BASE_MONTHLY_REVENUE * months) * 100.0;
    let margin_percent = margin_impact / (BASE_MONTHLY_REVENUE * BASE_MARGIN * months) * 100.0;
    let cost_percent = cost_impact / (base_costs * months) * 100.0;

    SimulationResult {
        revenue_impact,
        margin_impact,
        cost_impact,
        revenue_percent,
        margin_percent,
        cost_percent,
        roi,
        optimistic_revenue: revenue_impact * OPTIMISTIC_REVENUE_FACTOR,
        optimistic_margin: margin_impact * OPTIMISTIC_MARGIN_FACTOR,
        realistic_revenue: revenue_impact,
        realistic_margin: margin_impact,
        pessimistic_revenue: revenue_impact * PESSIMISTIC_REVENUE_FACTOR,
        pessimistic_margin: margin_impact * PESSIMISTIC_MARGIN_FACTOR,
    }
}
