//! Price range constraints.
//!
//! The two price bounds live inside a fixed domain and never get closer than
//! one step to each other. [`PriceBounds`] can only be built in a consistent
//! shape, so the clamps below always have a non-empty target interval.

use serde::Serialize;
use thiserror::Error;
use tracing::trace;

use crate::{
    params::QueryParams,
    state::{decode_price, keys},
};

/// Result alias for bounds construction.
pub type RangeResult<T> = Result<T, RangeError>;

/// Inconsistent price bound configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("price step must be greater than zero")]
    ZeroStep,

    #[error("price domain [{min}, {max}] is narrower than one step ({step})")]
    DomainTooNarrow { min: u64, max: u64, step: u64 },

    #[error("default {name} price {value} lies outside the domain [{min}, {max}]")]
    DefaultOutOfDomain {
        name: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },

    #[error("default prices {min}..{max} are closer than one step ({step})")]
    DefaultsTooClose { min: u64, max: u64, step: u64 },
}

/// Slider domain, step and the defaults used when the query has no bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBounds {
    domain_min: u64,
    domain_max: u64,
    step: u64,
    default_min: u64,
    default_max: u64,
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self::STOREFRONT
    }
}

impl PriceBounds {
    /// Bounds used by the storefront listing pages.
    pub const STOREFRONT: PriceBounds = PriceBounds {
        domain_min: 0,
        domain_max: 2_000_000,
        step: 1_000,
        default_min: 76_649,
        default_max: 1_268_175,
    };

    /// Validate and build a bounds set.
    pub fn new(
        domain_min: u64,
        domain_max: u64,
        step: u64,
        default_min: u64,
        default_max: u64,
    ) -> RangeResult<Self> {
        if step == 0 {
            return Err(RangeError::ZeroStep);
        }
        if domain_max < domain_min || domain_max - domain_min < step {
            return Err(RangeError::DomainTooNarrow {
                min: domain_min,
                max: domain_max,
                step,
            });
        }
        for (name, value) in [("min", default_min), ("max", default_max)] {
            if !(domain_min..=domain_max).contains(&value) {
                return Err(RangeError::DefaultOutOfDomain {
                    name,
                    value,
                    min: domain_min,
                    max: domain_max,
                });
            }
        }
        if default_max < default_min || default_max - default_min < step {
            return Err(RangeError::DefaultsTooClose {
                min: default_min,
                max: default_max,
                step,
            });
        }

        Ok(Self {
            domain_min,
            domain_max,
            step,
            default_min,
            default_max,
        })
    }

    pub fn domain_min(&self) -> u64 {
        self.domain_min
    }

    pub fn domain_max(&self) -> u64 {
        self.domain_max
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn default_min(&self) -> u64 {
        self.default_min
    }

    pub fn default_max(&self) -> u64 {
        self.default_max
    }

    /// Round `value` to the nearest step mark counted from `domain_min`,
    /// the way a range input with `step` does. The result is in the domain.
    pub fn snap(&self, value: i64) -> u64 {
        let value = u64::try_from(value).unwrap_or(0);
        if value <= self.domain_min {
            return self.domain_min;
        }
        let offset = value - self.domain_min;
        let marks = offset / self.step + u64::from(offset % self.step >= self.step.div_ceil(2));
        self.domain_min
            .saturating_add(marks.saturating_mul(self.step))
            .min(self.domain_max)
    }

    /// Safe lower bound: `clamp(requested, domain_min, current_max - step)`.
    ///
    /// `current_max` is first brought into the domain, so the returned value
    /// is in the domain and at least one step below the effective maximum.
    pub fn set_min(&self, requested: i64, current_max: u64) -> u64 {
        let current_max = current_max.clamp(self.domain_min + self.step, self.domain_max);
        let upper = current_max - self.step;
        let safe = u64::try_from(requested)
            .unwrap_or(0)
            .clamp(self.domain_min, upper);
        trace!(requested, current_max, safe, "set_min");
        safe
    }

    /// Safe upper bound: `clamp(requested, current_min + step, domain_max)`.
    pub fn set_max(&self, requested: i64, current_min: u64) -> u64 {
        let current_min = current_min.clamp(self.domain_min, self.domain_max - self.step);
        let lower = current_min + self.step;
        let safe = u64::try_from(requested)
            .unwrap_or(0)
            .clamp(lower, self.domain_max);
        trace!(requested, current_min, safe, "set_max");
        safe
    }
}

/// Write a safe `min` into a copy of `query`, reading the current `max`
/// from the same query (or its default).
pub fn apply_min(query: &QueryParams, requested: i64, bounds: &PriceBounds) -> QueryParams {
    let current_max = decode_price(query.get(keys::MAX)).unwrap_or(bounds.default_max());
    let safe = bounds.set_min(requested, current_max);
    let mut next = query.clone();
    next.set(keys::MIN, safe.to_string());
    next
}

/// Write a safe `max` into a copy of `query`, reading the current `min`
/// from the same query (or its default).
pub fn apply_max(query: &QueryParams, requested: i64, bounds: &PriceBounds) -> QueryParams {
    let current_min = decode_price(query.get(keys::MIN)).unwrap_or(bounds.default_min());
    let safe = bounds.set_max(requested, current_min);
    let mut next = query.clone();
    next.set(keys::MAX, safe.to_string());
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const B: PriceBounds = PriceBounds::STOREFRONT;

    #[test]
    fn storefront_bounds_pass_validation() {
        let built = PriceBounds::new(0, 2_000_000, 1_000, 76_649, 1_268_175).unwrap();
        assert_eq!(built, B);
    }

    #[test]
    fn rejects_inconsistent_bounds() {
        assert_eq!(PriceBounds::new(0, 10, 0, 0, 10), Err(RangeError::ZeroStep));
        assert!(matches!(
            PriceBounds::new(0, 500, 1_000, 0, 500),
            Err(RangeError::DomainTooNarrow { .. })
        ));
        assert!(matches!(
            PriceBounds::new(0, 10_000, 1_000, 0, 20_000),
            Err(RangeError::DefaultOutOfDomain { name: "max", .. })
        ));
        assert!(matches!(
            PriceBounds::new(0, 10_000, 1_000, 5_000, 5_500),
            Err(RangeError::DefaultsTooClose { .. })
        ));
    }

    #[test]
    fn set_min_clamps_to_domain_and_gap() {
        assert_eq!(B.set_min(-50, 10_000), 0);
        assert_eq!(B.set_min(4_000, 10_000), 4_000);
        assert_eq!(B.set_min(9_500, 10_000), 9_000);
        assert_eq!(B.set_min(50_000, 10_000), 9_000);
    }

    #[test]
    fn set_max_clamps_to_domain_and_gap() {
        assert_eq!(B.set_max(5_000_000, 10_000), 2_000_000);
        assert_eq!(B.set_max(15_000, 10_000), 15_000);
        assert_eq!(B.set_max(10_500, 10_000), 11_000);
        assert_eq!(B.set_max(-1, 10_000), 11_000);
    }

    #[test]
    fn out_of_domain_opposite_bound_is_normalized_first() {
        // A hand-edited URL may carry a max above the domain.
        assert_eq!(B.set_min(3_000_000, 9_000_000), 1_999_000);
        assert_eq!(B.set_max(0, 5_000_000), 2_000_000);
    }

    #[test]
    fn snap_rounds_to_nearest_mark() {
        assert_eq!(B.snap(-10), 0);
        assert_eq!(B.snap(76_649), 77_000);
        assert_eq!(B.snap(76_499), 76_000);
        assert_eq!(B.snap(76_500), 77_000);
        assert_eq!(B.snap(9_999_999), 2_000_000);
    }

    #[test]
    fn apply_min_reads_current_max_from_query() {
        let q = QueryParams::parse("max=20000&color=pink");
        let next = apply_min(&q, 25_000, &B);
        assert_eq!(next.to_query_string(), "max=20000&color=pink&min=19000");
        // Input untouched.
        assert_eq!(q.get("min"), None);
    }

    #[test]
    fn apply_max_uses_default_min_when_absent() {
        let next = apply_max(&QueryParams::new(), 0, &B);
        assert_eq!(next.get("max"), Some("77649"));
    }

    #[derive(Debug, Clone)]
    enum Move {
        Min(i64),
        Max(i64),
    }

    fn move_strategy() -> impl Strategy<Value = Move> {
        prop_oneof![
            (-1_000_000i64..4_000_000).prop_map(Move::Min),
            (-1_000_000i64..4_000_000).prop_map(Move::Max),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

        #[test]
        fn any_move_sequence_keeps_gap_and_domain(moves in prop::collection::vec(move_strategy(), 1..40)) {
            let (mut min, mut max) = (B.default_min(), B.default_max());
            for m in moves {
                match m {
                    Move::Min(v) => min = B.set_min(v, max),
                    Move::Max(v) => max = B.set_max(v, min),
                }
                prop_assert!(max >= min + B.step());
                prop_assert!(min >= B.domain_min() && max <= B.domain_max());
            }
        }

        #[test]
        fn snapped_values_stay_in_domain(v in any::<i64>()) {
            let s = B.snap(v);
            prop_assert!(s >= B.domain_min() && s <= B.domain_max());
        }
    }
}
