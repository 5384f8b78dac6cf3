//! Document-level reduction and trigger-scene prioritization.

pub mod aggregation;
pub mod ranking;
pub mod recommendations;

pub use aggregation::aggregate;
pub use ranking::{rank_scenes, TriggerScene};
pub use recommendations::{recommend, NO_ISSUES};
