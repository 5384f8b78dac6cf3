//! Age-rating classification over document scores.

pub mod rules;

pub use rules::{classify, Finding, RatingRule, RATING_RULES};
