//! Scene segmentation for screenplay text.
//!
//! A scene starts wherever a heading marker begins a line: the interior and
//! exterior markers in both supported languages (`INT.`/`EXT.`,
//! `ИНТ.`/`ЭКСТ.`) or one of the two generic heading labels. Leading
//! indentation and a scene number (`12.`) in front of the marker are
//! tolerated. The regex crate has no lookahead, so the split happens on the
//! start offsets of the marker matches.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::core::Scene;

/// Fragments shorter than this (in characters, after trimming) are noise.
pub const MIN_FRAGMENT_CHARS: usize = 20;

/// Characters of heading text kept after the marker.
pub const MAX_HEADING_TAIL_CHARS: usize = 120;

/// Documents yielding fewer scenes than this collapse to a single scene.
pub const MIN_SCENES: usize = 3;

/// Heading used for the single-scene fallback.
pub const FULL_SCRIPT_HEADING: &str = "full_script";

/// Marker vocabulary, version 2 (bilingual interior/exterior + generic labels).
const MARKER_ALTERNATION: &str =
    r"INT\.|EXT\.|ИНТ\.|ЭКСТ\.|scene_heading[ \t]*:|scene heading[ \t]*:";

static SCENE_BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?mi)^[ \t]*(?:\d+[.)]?[ \t]*)?(?:{MARKER_ALTERNATION})"
    ))
    .expect("scene boundary pattern is a valid constant")
});

static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^(?:\d+[.)]?[ \t]*)?((?:{MARKER_ALTERNATION})[^\r\n]{{0,{MAX_HEADING_TAIL_CHARS}}})"
    ))
    .expect("scene heading pattern is a valid constant")
});

/// Split `text` into ordered scenes with dense 0-based ids.
///
/// Always returns at least one scene.
pub fn segment_scenes(text: &str) -> Vec<Scene> {
    let scenes: Vec<Scene> = fragments(text)
        .filter_map(|fragment| {
            let trimmed = fragment.trim();
            (trimmed.chars().count() >= MIN_FRAGMENT_CHARS).then_some(trimmed)
        })
        .enumerate()
        .map(|(id, trimmed)| Scene {
            id,
            heading: heading_for(trimmed).unwrap_or_else(|| format!("scene_{id}")),
            text: trimmed.to_string(),
        })
        .collect();

    if scenes.len() < MIN_SCENES {
        debug!(
            found = scenes.len(),
            "too few scene markers, treating document as one scene"
        );
        return vec![Scene {
            id: 0,
            heading: FULL_SCRIPT_HEADING.to_string(),
            text: text.to_string(),
        }];
    }

    debug!(scenes = scenes.len(), "segmented document");
    scenes
}

/// Raw slices between consecutive marker boundaries, preamble included.
fn fragments(text: &str) -> impl Iterator<Item = &str> {
    let mut cuts: Vec<usize> = std::iter::once(0)
        .chain(
            SCENE_BOUNDARY_RE
                .find_iter(text)
                .map(|m| m.start())
                .filter(|&start| start > 0),
        )
        .collect();
    cuts.push(text.len());
    cuts.dedup();

    (0..cuts.len().saturating_sub(1)).map(move |i| &text[cuts[i]..cuts[i + 1]])
}

fn heading_for(fragment: &str) -> Option<String> {
    HEADING_RE
        .captures(fragment)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}
