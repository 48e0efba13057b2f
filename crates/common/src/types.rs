//! Core types for groupwise

use serde::{Deserialize, Serialize};

/// Default group size for per-group maxima
pub const DEFAULT_MAX_GROUP_SIZE: i64 = 3;

/// Default group size for per-group minima
pub const DEFAULT_MIN_GROUP_SIZE: i64 = 2;

/// Which extremum a group is reduced to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extremum {
    Max,
    Min,
}

impl Default for Extremum {
    fn default() -> Self {
        Self::Max
    }
}

impl std::fmt::Display for Extremum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Extremum::Max => write!(f, "max"),
            Extremum::Min => write!(f, "min"),
        }
    }
}

impl Extremum {
    /// Group size used when the caller does not supply one
    pub fn default_group_size(self) -> i64 {
        match self {
            Extremum::Max => DEFAULT_MAX_GROUP_SIZE,
            Extremum::Min => DEFAULT_MIN_GROUP_SIZE,
        }
    }

    /// Pick the winner of two values.
    ///
    /// NaN on either side wins. Equal operands resolve by sign so that
    /// `+0.0` beats `-0.0` for `Max` and `-0.0` beats `+0.0` for `Min`,
    /// independent of argument order.
    pub fn pick(self, a: f64, b: f64) -> f64 {
        if a.is_nan() {
            return a;
        }
        if b.is_nan() {
            return b;
        }
        match self {
            Extremum::Max => {
                if a > b || (a == b && a.is_sign_positive()) {
                    a
                } else {
                    b
                }
            }
            Extremum::Min => {
                if a < b || (a == b && a.is_sign_negative()) {
                    a
                } else {
                    b
                }
            }
        }
    }

    /// Reduce a window to its extremum. `None` only for an empty window.
    pub fn reduce(self, window: &[f64]) -> Option<f64> {
        window.iter().copied().reduce(|acc, v| self.pick(acc, v))
    }
}

/// One reduced group together with the input range it covers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupExtremum {
    /// Zero-based group index
    pub group: usize,
    /// First input index of the group
    pub start: usize,
    /// One past the last input index of the group
    pub end: usize,
    pub value: f64,
}

impl GroupExtremum {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_group_sizes() {
        assert_eq!(Extremum::Max.default_group_size(), 3);
        assert_eq!(Extremum::Min.default_group_size(), 2);
    }

    #[test]
    fn test_signed_zero_is_order_independent() {
        let max_a = Extremum::Max.pick(-0.0, 0.0);
        let max_b = Extremum::Max.pick(0.0, -0.0);
        assert!(max_a.is_sign_positive() && max_b.is_sign_positive());

        let min_a = Extremum::Min.pick(-0.0, 0.0);
        let min_b = Extremum::Min.pick(0.0, -0.0);
        assert!(min_a.is_sign_negative() && min_b.is_sign_negative());
    }

    #[test]
    fn test_nan_wins_either_side() {
        assert!(Extremum::Max.pick(f64::NAN, 1.0).is_nan());
        assert!(Extremum::Max.pick(1.0, f64::NAN).is_nan());
        assert!(Extremum::Min.pick(f64::NAN, -1.0).is_nan());
        assert!(Extremum::Min.pick(-1.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_reduce_empty_window() {
        assert_eq!(Extremum::Max.reduce(&[]), None);
    }

    #[test]
    fn test_extremum_serde_names() {
        let json = serde_json::to_string(&Extremum::Min).unwrap();
        assert_eq!(json, "\"min\"");
        let parsed: Extremum = serde_json::from_str("\"max\"").unwrap();
        assert_eq!(parsed, Extremum::Max);
        assert_eq!(Extremum::Min.to_string(), "min");
    }
}
