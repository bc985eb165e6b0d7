//! Trader-set thresholds and the single comparator that decides whether a
//! metric meets one.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{CallResults, PutResults};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// `false` whenever either side is absent: no target means no opinion.
/// Equality counts as met in both directions.
pub fn is_met(actual: Option<f64>, target: Option<f64>, direction: Direction) -> bool {
    match (actual, target) {
        (Some(a), Some(t)) => match direction {
            Direction::HigherIsBetter => a >= t,
            Direction::LowerIsBetter => a <= t,
        },
        _ => false,
    }
}

/// A metric that may carry a target.
pub trait TargetKey: Copy + Ord {
    type Results;

    fn direction(&self) -> Direction;
    fn actual(&self, results: &Self::Results) -> f64;
}

/// Target keys for cash-secured puts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum PutMetric {
    DropFromCurrent,
    PercentReturn,
    PremiumPerDay,
    Annualized,
}

impl PutMetric {
    pub const ALL: [PutMetric; 4] = [
        PutMetric::DropFromCurrent,
        PutMetric::PercentReturn,
        PutMetric::PremiumPerDay,
        PutMetric::Annualized,
    ];
}

impl TargetKey for PutMetric {
    type Results = PutResults;

    fn direction(&self) -> Direction {
        Direction::HigherIsBetter
    }

    fn actual(&self, r: &PutResults) -> f64 {
        match self {
            PutMetric::DropFromCurrent => r.drop_from_current,
            PutMetric::PercentReturn => r.percent_return,
            PutMetric::PremiumPerDay => r.premium_per_day,
            PutMetric::Annualized => r.annualized_return,
        }
    }
}

/// Target keys for covered calls.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CallMetric {
    PremiumPctReturn,
    PremiumPerDay,
    Annualized,
    TotalPctGain,
    TotalGain,
}

impl CallMetric {
    pub const ALL: [CallMetric; 5] = [
        CallMetric::PremiumPctReturn,
        CallMetric::PremiumPerDay,
        CallMetric::Annualized,
        CallMetric::TotalPctGain,
        CallMetric::TotalGain,
    ];
}

impl TargetKey for CallMetric {
    type Results = CallResults;

    fn direction(&self) -> Direction {
        Direction::HigherIsBetter
    }

    fn actual(&self, r: &CallResults) -> f64 {
        match self {
            CallMetric::PremiumPctReturn => r.premium_pct_return,
            CallMetric::PremiumPerDay => r.premium_per_day,
            CallMetric::Annualized => r.annualized_return,
            CallMetric::TotalPctGain => r.total_pct_gain,
            CallMetric::TotalGain => r.total_gain,
        }
    }
}

/// Thresholds keyed by metric. Absent keys are never met.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct TargetSet<K: Ord> {
    targets: BTreeMap<K, f64>,
}

impl<K: Ord> Default for TargetSet<K> {
    fn default() -> Self {
        Self {
            targets: BTreeMap::new(),
        }
    }
}

impl<K: TargetKey> TargetSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: K, threshold: f64) -> Self {
        self.set(key, threshold);
        self
    }

    pub fn set(&mut self, key: K, threshold: f64) {
        self.targets.insert(key, threshold);
    }

    pub fn clear(&mut self, key: K) {
        self.targets.remove(&key);
    }

    pub fn get(&self, key: K) -> Option<f64> {
        self.targets.get(&key).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn is_met(&self, key: K, results: &K::Results) -> bool {
        is_met(Some(key.actual(results)), self.get(key), key.direction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::covered_call::compute_covered_call;
    use crate::put::compute_put;
    use crate::types::{CallInputs, PutInputs};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn absent_sides_are_unmet() {
        assert!(!is_met(None, Some(1.0), Direction::HigherIsBetter));
        assert!(!is_met(Some(1.0), None, Direction::HigherIsBetter));
        assert!(!is_met(None, None, Direction::LowerIsBetter));
    }

    #[test]
    fn comparisons_follow_direction() {
        assert!(is_met(Some(2.0), Some(1.0), Direction::HigherIsBetter));
        assert!(!is_met(Some(0.5), Some(1.0), Direction::HigherIsBetter));
        assert!(is_met(Some(0.5), Some(1.0), Direction::LowerIsBetter));
        assert!(!is_met(Some(2.0), Some(1.0), Direction::LowerIsBetter));
        assert!(is_met(Some(1.0), Some(1.0), Direction::LowerIsBetter));
    }

    #[test]
    fn target_keys_use_camel_case() {
        let set: TargetSet<PutMetric> =
            serde_yaml::from_str("dropFromCurrent: 3.5\nannualized: 20\n").unwrap();
        assert_eq!(set.get(PutMetric::DropFromCurrent), Some(3.5));
        assert_eq!(set.get(PutMetric::Annualized), Some(20.0));
        assert_eq!(set.get(PutMetric::PremiumPerDay), None);

        let calls: TargetSet<CallMetric> =
            serde_yaml::from_str("premiumPctReturn: 1\ntotalGain: 500\n").unwrap();
        assert_eq!(calls.get(CallMetric::TotalGain), Some(500.0));
        assert!(serde_yaml::from_str::<TargetSet<CallMetric>>("breakeven: 1\n").is_err());
    }

    #[test]
    fn every_metric_meets_its_own_value() {
        let today = date("2026-10-18");
        let put = compute_put(
            &PutInputs {
                stock_price: 99.0,
                strike_price: 95.0,
                premium: 1.25,
                expiration_date: date("2026-10-25"),
            },
            today,
        );
        for key in PutMetric::ALL {
            let set = TargetSet::new().with(key, key.actual(&put));
            assert!(set.is_met(key, &put), "{key:?}");
        }

        let call = compute_covered_call(
            &CallInputs {
                stock_price: 110.0,
                shares: 200,
                strike: 115.0,
                premium: 3.0,
                expiration_date: Some(date("2026-11-17")),
                owns_shares: true,
                purchase_price: Some(90.0),
            },
            today,
        )
        .unwrap();
        for key in CallMetric::ALL {
            let set = TargetSet::new().with(key, key.actual(&call));
            assert!(set.is_met(key, &call), "{key:?}");
        }
    }

    #[test]
    fn cleared_target_is_unmet() {
        let mut set = TargetSet::new().with(PutMetric::PercentReturn, 0.0);
        set.clear(PutMetric::PercentReturn);
        assert!(set.is_empty());
        let r = PutResults {
            breakeven: 0.0,
            capital_required: 0.0,
            percent_return: 10.0,
            premium_collected: 0.0,
            premium_per_day: 0.0,
            drop_from_current: 0.0,
            days: 0,
            annualized_return: 0.0,
        };
        assert!(!set.is_met(PutMetric::PercentReturn, &r));
    }

    proptest::proptest! {
        #[test]
        fn raising_actual_never_unmeets_higher_is_better(
            a in -1e6f64..1e6, bump in 0.0f64..1e6, t in -1e6f64..1e6,
        ) {
            if is_met(Some(a), Some(t), Direction::HigherIsBetter) {
                proptest::prop_assert!(is_met(Some(a + bump), Some(t), Direction::HigherIsBetter));
            }
            if is_met(Some(a), Some(t), Direction::LowerIsBetter) {
                proptest::prop_assert!(is_met(Some(a - bump), Some(t), Direction::LowerIsBetter));
            }
        }
    }
}
