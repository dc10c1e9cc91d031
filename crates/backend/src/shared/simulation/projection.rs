//! Derived projections: the month-by-month evolution curve and the
//! per-store impact distribution.

use contracts::simulation::{EvolutionItem, StoreImpact};
use uuid::Uuid;

use super::calculator::{period_months, BASE_MONTHLY_REVENUE};

/// Spread `base_impact` over the period as a gentle ramp with a slight
/// mid-period dip. One item per month, labeled from "Month 1".
pub fn evolution(base_impact: f64, period: &str) -> Vec<EvolutionItem> {
    let months = period_months(period);
    let m = months as f64;

    (0..months)
        .map(|i| {
            let x = i as f64;
            let factor = 1.0 + 0.1 * (x / m) - 0.05 * ((x - m / 2.0).powi(2) / (m * m));
            EvolutionItem {
                month: format!("Month {}", i + 1),
                baseline: BASE_MONTHLY_REVENUE,
                with_simulation: BASE_MONTHLY_REVENUE + base_impact * factor / m,
            }
        })
        .collect()
}

/// How the projected impact is split across stores. The default is a
/// static roster; a real allocation keyed on actual store performance
/// can be swapped in without touching the calculator.
pub trait StoreAllocationStrategy {
    fn allocate(&self) -> Vec<StoreImpact>;
}

/// Fixed six-store roster with descending impact weights. A stand-in
/// until per-store allocation is wired to the sales data.
pub struct FixedRosterAllocation;

const ROSTER: [(&str, f64); 6] = [
    ("Paris", 35_000.0),
    ("Lyon", 28_000.0),
    ("Marseille", 22_000.0),
    ("Nice", 21_000.0),
    ("Toulouse", 19_000.0),
    ("Bordeaux", 17_000.0),
];

impl StoreAllocationStrategy for FixedRosterAllocation {
    fn allocate(&self) -> Vec<StoreImpact> {
        ROSTER
            .iter()
            .map(|(_store, impact)| StoreImpact {
                // Fresh token per invocation; not a store entity reference.
                id: Uuid::new_v4().to_string(),
                impact: *impact,
                ca_prevu: 0.0,
                ca_impact: 0.0,
                marge_prevue: 0.0,
                marge_impact: 0.0,
                details: Vec::new(),
            })
            .collect()
    }
}

/// Per-store impact breakdown using the default allocation.
pub fn store_impact() -> Vec<StoreImpact> {
    FixedRosterAllocation.allocate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn evolution_yields_one_item_per_month() {
        assert_eq!(evolution(100_000.0, "1_month").len(), 1);
        assert_eq!(evolution(100_000.0, "3_months").len(), 3);
        assert_eq!(evolution(100_000.0, "6_months").len(), 6);
        assert_eq!(evolution(100_000.0, "12_months").len(), 12);
        // Unrecognized periods use the calculator's one-month fallback.
        assert_eq!(evolution(100_000.0, "5_years").len(), 1);
    }

    #[test]
    fn evolution_months_are_labeled_in_order() {
        let items = evolution(50_000.0, "3_months");
        let labels: Vec<&str> = items.iter().map(|i| i.month.as_str()).collect();
        assert_eq!(labels, vec!["Month 1", "Month 2", "Month 3"]);
    }

    #[test]
    fn evolution_is_finite_and_tracks_impact_sign() {
        for impact in [-500_000.0, 0.0, 500_000.0] {
            for item in evolution(impact, "12_months") {
                assert!(item.with_simulation.is_finite());
                assert_eq!(item.baseline, BASE_MONTHLY_REVENUE);
                let delta = item.with_simulation - item.baseline;
                if impact > 0.0 {
                    assert!(delta > 0.0);
                } else if impact < 0.0 {
                    assert!(delta < 0.0);
                } else {
                    assert_eq!(delta, 0.0);
                }
            }
        }
    }

    #[test]
    fn evolution_first_month_matches_curve_formula() {
        let items = evolution(600_000.0, "6_months");
        // i = 0: factor = 1.0 - 0.05 * (3^2 / 36) = 0.9875
        let expected = BASE_MONTHLY_REVENUE + 600_000.0 * 0.9875 / 6.0;
        assert!((items[0].with_simulation - expected).abs() < 1e-6);
    }

    #[test]
    fn store_impact_returns_fixed_descending_roster() {
        let impacts = store_impact();
        let weights: Vec<f64> = impacts.iter().map(|s| s.impact).collect();
        assert_eq!(
            weights,
            vec![35_000.0, 28_000.0, 22_000.0, 21_000.0, 19_000.0, 17_000.0]
        );
        for pair in weights.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn store_impact_defaults_breakdown_fields_to_zero() {
        for store in store_impact() {
            assert_eq!(store.ca_prevu, 0.0);
            assert_eq!(store.ca_impact, 0.0);
            assert_eq!(store.marge_prevue, 0.0);
            assert_eq!(store.marge_impact, 0.0);
            assert!(store.details.is_empty());
        }
    }

    #[test]
    fn store_impact_ids_are_fresh_each_call() {
        let first = store_impact();
        let second = store_impact();
        let ids: HashSet<String> = first
            .iter()
            .chain(second.iter())
            .map(|s| s.id.clone())
            .collect();
        assert_eq!(ids.len(), 12);
    }
}
