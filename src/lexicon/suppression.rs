//! False-positive guards.
//!
//! A guard is tested against the context window around each keyword match,
//! not against the keyword itself. Guards cover figurative idioms ("kill
//! time"), hypothetical wrappers ("as if he would ..."), and words that
//! share a spelling with an unrelated noun ("трусы" as cowards, "сука" as a
//! dog, "героиня" as a heroine). A guard with an empty category list applies
//! to every category; otherwise only to the listed ones.

use crate::core::Category;

use super::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuppressionEntry {
    /// Categories the guard applies to; empty means all of them.
    pub categories: &'static [Category],
    pub locale: Locale,
    pub pattern: &'static str,
}

impl SuppressionEntry {
    pub fn applies_to(&self, category: Category) -> bool {
        self.categories.is_empty() || self.categories.contains(&category)
    }
}

const ANY: &[Category] = &[];
const VIOLENCE: &[Category] = &[Category::Violence];
const VIOLENT: &[Category] = &[Category::Violence, Category::Gore];
const SEXUAL: &[Category] = &[Category::Sexual];
const HYPOTHETICAL: &[Category] = &[Category::Sexual, Category::Violence];
const GORE: &[Category] = &[Category::Gore];
const NUDITY: &[Category] = &[Category::Nudity];
const PROFANITY: &[Category] = &[Category::Profanity];
const DRUGS: &[Category] = &[Category::Drugs];
const CHILD: &[Category] = &[Category::ChildRisk];

const fn en(categories: &'static [Category], pattern: &'static str) -> SuppressionEntry {
    SuppressionEntry {
        categories,
        locale: Locale::En,
        pattern,
    }
}

const fn ru(categories: &'static [Category], pattern: &'static str) -> SuppressionEntry {
    SuppressionEntry {
        categories,
        locale: Locale::Ru,
        pattern,
    }
}

pub static SUPPRESSIONS: &[SuppressionEntry] = &[
    // idioms
    en(ANY, r"\bif (it|that|this) kills\b"),
    en(ANY, r"\b(it|that|this)'ll kill\b"),
    en(ANY, r"\bmake love\b"),
    en(VIOLENCE, r"\bkill(ing)? time\b"),
    en(VIOLENCE, r"\bdressed to kill\b"),
    en(VIOLENCE, r"\bkiller instinct\b"),
    en(VIOLENCE, r"\blady killer\b"),
    en(VIOLENCE, r"\bkilling me softly\b"),
    en(VIOLENCE, r"\bshoot the breeze\b"),
    en(VIOLENCE, r"\bshoot for\b"),
    en(VIOLENCE, r"\bshot in the dark\b"),
    en(VIOLENCE, r"\blong shot\b"),
    en(VIOLENCE, r"\bshot at\b"),
    en(VIOLENCE, r"\bfight (for|to see|to|for the)\b"),
    en(VIOLENCE, r"\bwon the war\b"),
    en(VIOLENCE, r"\bbattles? (with|against|for)\b"),
    en(VIOLENCE, r"\battack(ed|ing)? (the|a) problem\b"),
    en(VIOLENCE, r"\bfight back tears\b"),
    en(VIOLENCE, r"\bfight for (justice|freedom|rights)\b"),
    en(VIOLENCE, r"\bfighting? (cancer|disease|illness)\b"),
    en(VIOLENCE, r"\bdead (tired|serious|end|line|silence|wrong)\b"),
    en(VIOLENCE, r"\bbeat (you|him|her|them|me|us) to it\b"),
    en(ANY, r"\bspeed of light\b"),
    en(GORE, r"\bbrain (garbage|dump|drain|power|wave|dead|cell|teaser)\b"),
    en(GORE, r"\bbrains? (are|is) (just|garbage|trash)\b"),
    en(GORE, r"\bcrash course\b"),
    en(GORE, r"\bburn(ing)? the midnight oil\b"),
    en(NUDITY, r"\bnaked (eye|truth)\b"),
    en(CHILD, r"\bson of a (bitch|gun)\b"),
    en(DRUGS, r"\bsmoke (alarm|detector|signal)\b"),
    // hypothetical wrappers
    en(HYPOTHETICAL, r"\bas if.{0,40}\b(molest|rape|seduce|fondle)"),
    en(HYPOTHETICAL, r"\babout to.{0,40}\b(molest|rape|seduce|fondle)"),
    ru(HYPOTHETICAL, r"(как будто|словно|будто бы?|вот-вот).{0,40}(изнасил|домога|совращ)"),
    // Russian idioms
    ru(VIOLENCE, r"\bхоть убей\b"),
    ru(VIOLENCE, r"\bубива(ть|ем|ю) время\b"),
    ru(VIOLENCE, r"\bубийственн\w*"),
    ru(VIOLENCE, r"\bдо смерти (надоел\w*|устал\w*|испуга\w*|скучно|хочется|рад\w*)"),
    ru(VIOLENCE, r"\bстреля\w* глазами\b"),
    ru(VIOLENT, r"\bкровн\w* (брат\w*|враг\w*|связ\w*|родств\w*)"),
    ru(GORE, r"\bкровь с молоком\b"),
    ru(GORE, r"\bкровь из носу\b"),
    ru(NUDITY, r"\bгол\w* (правд\w*|факт\w*|цифр\w*)"),
    ru(SEXUAL, r"\bзанима\w* любовью\b"),
    // Russian homonym guards
    ru(NUDITY, r"\b(ты|он|вы|они|все|жалкие|жалкий) трус(ы)?\b"),
    ru(NUDITY, r"\bтрус(ы|ов) (и|или) (предател\w*|негодя\w*)"),
    ru(PROFANITY, r"\bсук(а|у|и) (ощенил\w*|с щенками|щенн\w*|родила)"),
    ru(DRUGS, r"\bглавн\w* героин\w*"),
    ru(DRUGS, r"\bкосяк\w* (двер\w*|окн\w*|рыб\w*)"),
    ru(DRUGS, r"\bдверн\w* косяк\w*"),
    ru(DRUGS, r"\b(зел(е|ё)н\w*|по|на|в) травк\w*"),
];
