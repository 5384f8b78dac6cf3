use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scoring::UnitScore;

/// Maximum number of illustrative excerpts kept for any category.
pub const MAX_EXCERPTS: usize = 5;

/// Content dimension scored for every scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Violence,
    Gore,
    #[serde(rename = "sex_act")]
    Sexual,
    Nudity,
    Profanity,
    Drugs,
    ChildRisk,
}

impl Category {
    pub const COUNT: usize = 7;

    /// Fixed category order; recommendation and report output follow it.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Violence,
        Category::Gore,
        Category::Sexual,
        Category::Nudity,
        Category::Profanity,
        Category::Drugs,
        Category::ChildRisk,
    ];

    pub fn index(self) -> usize {
        match self {
            Category::Violence => 0,
            Category::Gore => 1,
            Category::Sexual => 2,
            Category::Nudity => 3,
            Category::Profanity => 4,
            Category::Drugs => 5,
            Category::ChildRisk => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Violence => "violence",
            Category::Gore => "gore",
            Category::Sexual => "sex_act",
            Category::Nudity => "nudity",
            Category::Profanity => "profanity",
            Category::Drugs => "drugs",
            Category::ChildRisk => "child_risk",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference context class a scene is compared against semantically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    GraphicViolence,
    StylizedAction,
    SexualContent,
    MildRomance,
    HorrorViolence,
    ProfanityContext,
    DrugAbuse,
    ChildEndangerment,
    DiscussionViolence,
    ThrillerTension,
}

impl Archetype {
    pub const COUNT: usize = 10;

    pub const ALL: [Archetype; Archetype::COUNT] = [
        Archetype::GraphicViolence,
        Archetype::StylizedAction,
        Archetype::SexualContent,
        Archetype::MildRomance,
        Archetype::HorrorViolence,
        Archetype::ProfanityContext,
        Archetype::DrugAbuse,
        Archetype::ChildEndangerment,
        Archetype::DiscussionViolence,
        Archetype::ThrillerTension,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Archetype::GraphicViolence => "graphic_violence",
            Archetype::StylizedAction => "stylized_action",
            Archetype::SexualContent => "sexual_content",
            Archetype::MildRomance => "mild_romance",
            Archetype::HorrorViolence => "horror_violence",
            Archetype::ProfanityContext => "profanity_context",
            Archetype::DrugAbuse => "drug_abuse",
            Archetype::ChildEndangerment => "child_endangerment",
            Archetype::DiscussionViolence => "discussion_violence",
            Archetype::ThrillerTension => "thriller_tension",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contiguous span of the document delimited by heading markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scene {
    pub id: usize,
    pub heading: String,
    pub text: String,
}

/// Similarity of one scene to every archetype.
///
/// Missing entries read as `0.0`, which is the neutral context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextScores(BTreeMap<Archetype, f32>);

impl ContextScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, archetype: Archetype) -> f32 {
        self.0.get(&archetype).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, archetype: Archetype, similarity: f32) {
        self.0.insert(archetype, similarity);
    }

    pub fn with(mut self, archetype: Archetype, similarity: f32) -> Self {
        self.set(archetype, similarity);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Archetype, f32)> + '_ {
        self.0.iter().map(|(a, s)| (*a, *s))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Lexical match counts indexed by [`Category`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts([usize; Category::COUNT]);

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        self.0[category.index()]
    }

    pub fn set(&mut self, category: Category, count: usize) {
        self.0[category.index()] = count;
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

/// Up to [`MAX_EXCERPTS`] text fragments per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryExcerpts(BTreeMap<Category, Vec<String>>);

impl CategoryExcerpts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> &[String] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Appends excerpts in order until the category holds `MAX_EXCERPTS`.
    pub fn extend_capped<I>(&mut self, category: Category, excerpts: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut excerpts = excerpts.into_iter().peekable();
        if excerpts.peek().is_none() {
            return;
        }
        let slot = self.0.entry(category).or_default();
        let room = MAX_EXCERPTS.saturating_sub(slot.len());
        slot.extend(excerpts.into_iter().take(room));
    }
}

/// Scores for all seven categories, each on the unit interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CategoryScores {
    pub violence: UnitScore,
    pub gore: UnitScore,
    pub sex_act: UnitScore,
    pub nudity: UnitScore,
    pub profanity: UnitScore,
    pub drugs: UnitScore,
    pub child_risk: UnitScore,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> UnitScore {
        match category {
            Category::Violence => self.violence,
            Category::Gore => self.gore,
            Category::Sexual => self.sex_act,
            Category::Nudity => self.nudity,
            Category::Profanity => self.profanity,
            Category::Drugs => self.drugs,
            Category::ChildRisk => self.child_risk,
        }
    }

    pub fn set(&mut self, category: Category, score: UnitScore) {
        let slot = match category {
            Category::Violence => &mut self.violence,
            Category::Gore => &mut self.gore,
            Category::Sexual => &mut self.sex_act,
            Category::Nudity => &mut self.nudity,
            Category::Profanity => &mut self.profanity,
            Category::Drugs => &mut self.drugs,
            Category::ChildRisk => &mut self.child_risk,
        };
        *slot = score;
    }

    /// Builder-style setter taking a raw value, mostly for tests and fixtures.
    pub fn with(mut self, category: Category, value: f64) -> Self {
        self.set(category, UnitScore::new(value));
        self
    }

    /// Copy with every score rounded to `decimals` places.
    pub fn rounded(&self, decimals: i32) -> Self {
        let mut out = Self::default();
        for category in Category::ALL {
            out.set(category, UnitScore::new(self.get(category).rounded(decimals)));
        }
        out
    }
}

/// Everything measured about one scene before scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub counts: CategoryCounts,
    pub excerpts: CategoryExcerpts,
    /// Word length of the scene, never below 1.
    pub length: usize,
    pub context: ContextScores,
}

/// Scored scene: category scores plus the evidence behind them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreVector {
    pub scores: CategoryScores,
    pub excerpts: CategoryExcerpts,
    pub context: ContextScores,
}

/// Document-level scores reduced across all scenes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentScoreVector {
    pub scores: CategoryScores,
    pub excerpts: CategoryExcerpts,
}

/// Age rating, ordered from least to most restrictive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "0+")]
    ZeroPlus,
    #[serde(rename = "6+")]
    SixPlus,
    #[serde(rename = "12+")]
    TwelvePlus,
    #[serde(rename = "16+")]
    SixteenPlus,
    #[serde(rename = "18+")]
    EighteenPlus,
}

impl Rating {
    pub fn as_str(self) -> &'static str {
        match self {
            Rating::ZeroPlus => "0+",
            Rating::SixPlus => "6+",
            Rating::TwelvePlus => "12+",
            Rating::SixteenPlus => "16+",
            Rating::EighteenPlus => "18+",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the rating rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingResult {
    pub rating: Rating,
    pub reasons: Vec<String>,
    pub evidence: Vec<String>,
}
