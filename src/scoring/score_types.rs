//! Type-safe score scale for content scoring.
//!
//! Every category score the pipeline produces lives on the closed unit
//! interval. Wrapping the raw `f64` in [`UnitScore`] makes the bound part of
//! the type: a value can only be built through [`UnitScore::new`], which
//! clamps, so no downstream stage can observe an out-of-range score.
//!
//! # Examples
//!
//! ```rust
//! use scriptrate::scoring::UnitScore;
//!
//! let score = UnitScore::new(0.42);
//! assert_eq!(score.value(), 0.42);
//!
//! // Out-of-bounds values are clamped
//! assert_eq!(UnitScore::new(6.0).value(), 1.0);
//! assert_eq!(UnitScore::new(-0.3).value(), 0.0);
//! ```

use serde::{Deserialize, Serialize};

/// Score on the 0-1 scale.
///
/// `NaN` inputs collapse to zero so the range invariant holds even when a
/// caller feeds in a degenerate similarity.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitScore(f64);

impl UnitScore {
    pub const ZERO: UnitScore = UnitScore(0.0);
    pub const MAX: UnitScore = UnitScore(1.0);

    /// Create a new score, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Create a score capped at `ceiling` before the unit clamp is applied.
    ///
    /// ```rust
    /// # use scriptrate::scoring::UnitScore;
    /// assert_eq!(UnitScore::capped(2.0, 0.3).value(), 0.3);
    /// ```
    pub fn capped(value: f64, ceiling: f64) -> Self {
        Self::new(value.min(ceiling))
    }

    /// Get the raw score value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Round to `decimals` places for presentation.
    pub fn rounded(self, decimals: i32) -> f64 {
        let factor = 10f64.powi(decimals);
        (self.0 * factor).round() / factor
    }
}

impl std::fmt::Display for UnitScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<UnitScore> for f64 {
    fn from(score: UnitScore) -> Self {
        score.0
    }
}
