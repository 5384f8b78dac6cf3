//! Document structure analysis.

pub mod segmenter;

pub use segmenter::{segment_scenes, FULL_SCRIPT_HEADING, MIN_FRAGMENT_CHARS, MIN_SCENES};
