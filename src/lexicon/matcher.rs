use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::config::LexiconConfig;
use crate::core::{Category, CategoryCounts, CategoryExcerpts, MAX_EXCERPTS};
use crate::errors::{Error, Result};

use super::patterns::{LexiconEntry, LEXICON};
use super::suppression::{SuppressionEntry, SUPPRESSIONS};
use super::Locale;

#[derive(Debug)]
struct CompiledPattern {
    locale: Locale,
    regex: Regex,
}

#[derive(Debug)]
struct CompiledGuard {
    entry: SuppressionEntry,
    regex: Regex,
}

/// Result of matching one category against one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMatch {
    /// Every surviving match, not just the ones with a kept excerpt.
    pub count: usize,
    pub excerpts: Vec<String>,
}

/// Compiled keyword and suppression tables.
///
/// Built once per process and shared read-only between workers.
#[derive(Debug)]
pub struct Lexicon {
    by_category: Vec<Vec<CompiledPattern>>,
    guards: Vec<CompiledGuard>,
    settings: LexiconConfig,
}

impl Lexicon {
    /// Compile the built-in bilingual tables.
    pub fn compile(settings: &LexiconConfig) -> Result<Self> {
        Self::from_tables(LEXICON, SUPPRESSIONS, settings)
    }

    pub fn from_tables(
        entries: &[LexiconEntry],
        guards: &[SuppressionEntry],
        settings: &LexiconConfig,
    ) -> Result<Self> {
        let mut by_category: Vec<Vec<CompiledPattern>> =
            (0..Category::COUNT).map(|_| Vec::new()).collect();
        for entry in entries {
            by_category[entry.category.index()].push(CompiledPattern {
                locale: entry.locale,
                regex: compile_pattern(entry.pattern)?,
            });
        }

        let guards = guards
            .iter()
            .map(|guard| {
                Ok(CompiledGuard {
                    entry: *guard,
                    regex: compile_pattern(guard.pattern)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            patterns = entries.len(),
            guards = guards.len(),
            "compiled lexicon"
        );

        Ok(Self {
            by_category,
            guards,
            settings: settings.clone(),
        })
    }

    /// Number of compiled keyword patterns, optionally for a single locale.
    pub fn pattern_count(&self, locale: Option<Locale>) -> usize {
        self.by_category
            .iter()
            .flatten()
            .filter(|p| locale.map_or(true, |l| p.locale == l))
            .count()
    }

    pub fn guard_count(&self) -> usize {
        self.guards.len()
    }

    /// Count surviving matches of one category in already-lowercased text.
    pub fn match_category(&self, category: Category, lowered: &str) -> CategoryMatch {
        let excerpt_cap = self.settings.max_excerpts.min(MAX_EXCERPTS);
        let mut result = CategoryMatch::default();

        for pattern in &self.by_category[category.index()] {
            for m in pattern.regex.find_iter(lowered) {
                let window = context_window(lowered, m.start(), m.end(), self.settings.window_chars);
                if self.is_suppressed(category, window) {
                    continue;
                }
                let excerpt = window.trim();
                if excerpt.chars().count() < self.settings.min_excerpt_chars {
                    continue;
                }
                result.count += 1;
                if result.excerpts.len() < excerpt_cap {
                    result.excerpts.push(excerpt.to_string());
                }
            }
        }
        result
    }

    /// Lexical counts and excerpts for every category of `text`.
    pub fn extract(&self, text: &str) -> (CategoryCounts, CategoryExcerpts) {
        let lowered = text.to_lowercase();
        let mut counts = CategoryCounts::default();
        let mut excerpts = CategoryExcerpts::new();
        for category in Category::ALL {
            let found = self.match_category(category, &lowered);
            counts.set(category, found.count);
            excerpts.extend_capped(category, found.excerpts);
        }
        (counts, excerpts)
    }

    fn is_suppressed(&self, category: Category, window: &str) -> bool {
        self.guards
            .iter()
            .any(|guard| guard.entry.applies_to(category) && guard.regex.is_match(window))
    }
}

fn compile_pattern(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .unicode(true)
        .build()
        .map_err(|e| Error::Lexicon(format!("pattern `{pattern}`: {e}")))
}

/// Slice of `text` spanning `radius` characters on each side of a match.
fn context_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let from = if radius == 0 {
        start
    } else {
        text[..start]
            .char_indices()
            .rev()
            .nth(radius - 1)
            .map_or(0, |(i, _)| i)
    };
    let to = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| end + i);
    &text[from..to]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    static BUILTIN: once_cell::sync::Lazy<Lexicon> =
        once_cell::sync::Lazy::new(|| Lexicon::compile(&LexiconConfig::default()).unwrap());

    fn lexicon() -> &'static Lexicon {
        &BUILTIN
    }

    #[test]
    fn builtin_tables_compile() {
        let lexicon = lexicon();
        assert_eq!(lexicon.pattern_count(None), LEXICON.len());
        assert!(lexicon.pattern_count(Some(Locale::Ru)) > 0);
        assert_eq!(lexicon.guard_count(), SUPPRESSIONS.len());
    }

    #[test]
    fn literal_violence_is_counted() {
        let found = lexicon().match_category(Category::Violence, "he killed the soldier with a knife");
        assert!(found.count >= 1);
        assert_eq!(found.excerpts[0], "he killed the soldier with a knife");
    }

    #[test]
    fn figurative_idiom_is_suppressed() {
        let found = lexicon().match_category(Category::Violence, "if it kills me");
        assert_eq!(found, CategoryMatch::default());
    }

    #[test]
    fn suppressed_match_does_not_hide_distant_ones() {
        let filler = " and then the long quiet evening went on and on".repeat(3);
        let text = format!("i will finish this even if it kills me{filler} before he shot the guard");
        let found = lexicon().match_category(Category::Violence, &text);
        assert_eq!(found.count, 1);
        assert!(found.excerpts[0].contains("shot the guard"));
    }

    #[test]
    fn scoped_guard_leaves_other_categories_alone() {
        let lexicon = lexicon();
        let text = "you lying son of a bitch, get out of my house";
        assert_eq!(lexicon.match_category(Category::ChildRisk, text).count, 0);
        assert_eq!(lexicon.match_category(Category::Profanity, text).count, 1);
    }

    #[test]
    fn short_excerpts_are_dropped_and_not_counted() {
        let found = lexicon().match_category(Category::Violence, "gun");
        assert_eq!(found.count, 0);
        assert!(found.excerpts.is_empty());
    }

    #[test]
    fn count_is_true_total_while_excerpts_are_capped() {
        let text = "he fired the gun again. ".repeat(12);
        let found = lexicon().match_category(Category::Violence, &text);
        assert_eq!(found.count, 12);
        assert_eq!(found.excerpts.len(), MAX_EXCERPTS);
    }

    #[test]
    fn russian_stems_match_cyrillic_text() {
        let lexicon = lexicon();
        let (counts, excerpts) = lexicon.extract("Он достал НОЖ, и на полу осталась кровь.");
        assert_eq!(counts.get(Category::Violence), 1);
        assert_eq!(counts.get(Category::Gore), 1);
        assert!(excerpts.get(Category::Gore)[0].contains("кровь"));
    }

    #[test]
    fn russian_homonyms_are_not_counted() {
        let lexicon = lexicon();
        let (counts, _) = lexicon.extract("Главная героиня встала рано и легла на кровать.");
        assert_eq!(counts.get(Category::Drugs), 0);
        assert_eq!(counts.get(Category::Gore), 0);

        let (counts, _) = lexicon.extract("Вы трусы, все до одного, и это знают во дворе.");
        assert_eq!(counts.get(Category::Nudity), 0);
        let (counts, _) = lexicon.extract("На верёвке сушились его трусы и носки.");
        assert_eq!(counts.get(Category::Nudity), 1);

        let (counts, _) = lexicon.extract("Хоть убей, не помню, куда положил ключи.");
        assert_eq!(counts.get(Category::Violence), 0);
    }

    #[test]
    fn extract_lowercases_before_matching() {
        let (counts, excerpts) = lexicon().extract("THE MOB STORMED THE GATE AT DAWN");
        assert_eq!(counts.get(Category::Violence), 1);
        assert_eq!(excerpts.get(Category::Violence)[0], "the mob stormed the gate at dawn");
    }

    #[test]
    fn window_respects_char_boundaries() {
        let text = "ёёёё kill ёёёё";
        let start = text.find("kill").unwrap();
        assert_eq!(context_window(text, start, start + 4, 2), "ё kill ё");
        assert_eq!(context_window(text, start, start + 4, 100), text);
        assert_eq!(context_window(text, start, start + 4, 0), "kill");
    }

    #[test]
    fn invalid_pattern_reports_lexicon_error() {
        let bad = [LexiconEntry {
            category: Category::Violence,
            locale: Locale::En,
            pattern: r"(unclosed",
        }];
        let err = Lexicon::from_tables(&bad, &[], &LexiconConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Lexicon(_)));
        assert!(err.is_fatal());
    }

    proptest! {
        #[test]
        fn excerpts_never_exceed_cap(words in prop::collection::vec("(kill|blood|the|a|house|gun)", 0..200)) {
            let text = words.join(" ");
            let (_, excerpts) = lexicon().extract(&text);
            for category in Category::ALL {
                prop_assert!(excerpts.get(category).len() <= MAX_EXCERPTS);
            }
        }

        #[test]
        fn extraction_is_deterministic(text in "\\PC{0,300}") {
            let lexicon = lexicon();
            prop_assert_eq!(lexicon.extract(&text), lexicon.extract(&text));
        }
    }
}
