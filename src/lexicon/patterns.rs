//! Keyword pattern table.
//!
//! One row per `(category, locale, pattern)`. Rows are matched in table
//! order, which also fixes the order excerpts are collected in. Patterns are
//! written against lowercased text and compiled case-insensitively; `\b` and
//! `\w` are Unicode-aware, so Cyrillic stems behave like Latin ones.

use crate::core::Category;

use super::Locale;

/// A single keyword stem of the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconEntry {
    pub category: Category,
    pub locale: Locale,
    pub pattern: &'static str,
}

const fn en(category: Category, pattern: &'static str) -> LexiconEntry {
    LexiconEntry {
        category,
        locale: Locale::En,
        pattern,
    }
}

const fn ru(category: Category, pattern: &'static str) -> LexiconEntry {
    LexiconEntry {
        category,
        locale: Locale::Ru,
        pattern,
    }
}

use Category::{ChildRisk, Drugs, Gore, Nudity, Profanity, Sexual, Violence};

pub static LEXICON: &[LexiconEntry] = &[
    // Violence
    en(Violence, r"\bkill\w*"),
    en(Violence, r"\bshoot\w*"),
    en(Violence, r"\bshot\b"),
    en(Violence, r"\bstab\w*"),
    en(Violence, r"\bknife\b"),
    en(Violence, r"\bgun\w*"),
    en(Violence, r"\bpistol\b"),
    en(Violence, r"\brifle\b"),
    en(Violence, r"\bexplod\w*"),
    en(Violence, r"\bblast\w*"),
    en(Violence, r"\battack\w*"),
    en(Violence, r"\bbeat\w*"),
    en(Violence, r"\bcorpse\b"),
    en(Violence, r"\bdead\b"),
    en(Violence, r"\bmurder\w*"),
    en(Violence, r"\bviolence\b"),
    en(Violence, r"\bterrorist\b"),
    en(Violence, r"\bhostage\b"),
    en(Violence, r"\brip(ped|s)? apart\b"),
    en(Violence, r"\bthugs?\b"),
    en(Violence, r"\bterror\b"),
    en(Violence, r"\bfight(ing)?\b"),
    en(Violence, r"\bbattle[sd]?\b"),
    en(Violence, r"\bwar\b"),
    en(Violence, r"\bshoot[- ]?out\b"),
    en(Violence, r"\bexplosion\b"),
    en(Violence, r"\bgrenade\b"),
    en(Violence, r"\bkidnap\w*"),
    en(Violence, r"\babduct\w*"),
    en(Violence, r"\bpliers\b"),
    en(Violence, r"\binject\w*"),
    en(Violence, r"\bjab\w*"),
    en(Violence, r"\bmob\b"),
    en(Violence, r"\blooter\w*"),
    ru(Violence, r"\bубий\w*"),
    ru(Violence, r"\bуби(л|ла|ли|ть|т|та|ты|тый|вать|вает|вают)\b"),
    ru(Violence, r"\bубь(ю|ёт|ет|ют|ёшь|ешь)\b|\bубей(те)?\b"),
    ru(Violence, r"\bзастрел\w*"),
    ru(Violence, r"\bстрел(ял|яла|яли|ять|яет|яют|ьба|ьбу|ьбы|ок)\b"),
    ru(Violence, r"\bвыстрел\w*"),
    ru(Violence, r"\bзарез\w*"),
    ru(Violence, r"\bнож(а|ом|у|и|ей|ами|ах)?\b"),
    ru(Violence, r"\bпистолет\w*"),
    ru(Violence, r"\bружь(е|я|ём|ем)\b"),
    ru(Violence, r"\bвзрыв\w*"),
    ru(Violence, r"\bнапа(л|ла|ли|дение|дения|дает|дают)\b"),
    ru(Violence, r"\bизби\w*"),
    ru(Violence, r"\bдрак(а|и|у|ой|е)\b"),
    ru(Violence, r"\bтруп\w*"),
    ru(Violence, r"\bм(е|ё)ртв\w*"),
    ru(Violence, r"\bсмерт\w*"),
    ru(Violence, r"\bтеррорист\w*"),
    ru(Violence, r"\bзаложни\w*"),
    ru(Violence, r"\bпохи(тил|тила|тили|тить|щен\w*)"),
    ru(Violence, r"\bвойн(а|ы|у|ой|е)\b"),
    ru(Violence, r"\bгранат(а|ы|у|ой)\b"),
    // Gore
    en(Gore, r"\bblood\b"),
    en(Gore, r"\bbloody\b"),
    en(Gore, r"\bbloodied\b"),
    en(Gore, r"\bbleeding\b"),
    en(Gore, r"\bcorpse\b"),
    en(Gore, r"\bwound\b"),
    en(Gore, r"\bscar\b"),
    en(Gore, r"\binjur\w*"),
    en(Gore, r"\bcrash\w*"),
    en(Gore, r"\bburn\w*"),
    en(Gore, r"\bguts\b"),
    en(Gore, r"\bentrails\b"),
    en(Gore, r"\bbrain\b"),
    en(Gore, r"\bdead body\b"),
    en(Gore, r"\bgore\b"),
    en(Gore, r"\bmutilat\w*"),
    en(Gore, r"\bsplorch\b"),
    ru(Gore, r"\bкров(ь|и|ью|ав\w*|оточ\w*|опролит\w*)"),
    ru(Gore, r"\bран(а|ы|у|ой|ами|ах|ен\w*|ени\w*|ил|ила|или|ить)\b"),
    ru(Gore, r"\bшрам\w*"),
    ru(Gore, r"\bувеч\w*"),
    ru(Gore, r"\bкишк\w*"),
    ru(Gore, r"\bрасчлен\w*"),
    ru(Gore, r"\bмозг(и|ами)\b"),
    // Sexual content
    en(Sexual, r"\brape\b"),
    en(Sexual, r"\bsexual\b"),
    en(Sexual, r"\bintercourse\b"),
    en(Sexual, r"\bsex scene\b"),
    en(Sexual, r"\bmolest\w*"),
    en(Sexual, r"\borgasm\b"),
    en(Sexual, r"\bhaving sex\b"),
    en(Sexual, r"\bsexually\b"),
    en(Sexual, r"\bbed\s+scene\b"),
    ru(Sexual, r"\bизнасил\w*"),
    ru(Sexual, r"\bсекс\w*"),
    ru(Sexual, r"\bполов\w* (акт|связ)\w*"),
    ru(Sexual, r"\bдомогат\w*"),
    ru(Sexual, r"\bсовращ\w*"),
    ru(Sexual, r"\bоргазм\w*"),
    // Nudity
    en(Nudity, r"\bbra\b"),
    en(Nudity, r"\bpant(y|ies)\b"),
    en(Nudity, r"\bunderwear\b"),
    en(Nudity, r"\bnaked\b"),
    en(Nudity, r"\bnude\b"),
    en(Nudity, r"\bundress\w*"),
    en(Nudity, r"\btopless\b"),
    ru(Nudity, r"\bгол(ый|ая|ое|ые|ого|ую|ышом)\b"),
    ru(Nudity, r"\bнаг(ой|ая|ие|ишом|ота|оту)\b"),
    ru(Nudity, r"\bобнаж\w*"),
    ru(Nudity, r"\bбюстгальтер\w*"),
    ru(Nudity, r"\bтрус(ы|ики|иках|ах)\b"),
    ru(Nudity, r"\bнижн\w* бель\w*"),
    ru(Nudity, r"\bраздева\w*|\bраздел(ся|ась|ись)\b"),
    // Profanity
    en(Profanity, r"\bfuck\b"),
    en(Profanity, r"\bshit\b"),
    en(Profanity, r"\bmotherfucker\b"),
    en(Profanity, r"\bbitch\b"),
    en(Profanity, r"\basshole\b"),
    en(Profanity, r"\bdamn\b"),
    en(Profanity, r"\bhell\b"),
    en(Profanity, r"\bcrap\b"),
    ru(Profanity, r"\bбля(дь|ть|ха)?\b"),
    ru(Profanity, r"\bху(й|я|ем|ё)\w*"),
    ru(Profanity, r"\bпизд\w*"),
    ru(Profanity, r"\bсук(а|и|у|ой|ин\w*)\b"),
    ru(Profanity, r"\b(е|ё)ба(ть|л|ный|ная|ное)\w*"),
    ru(Profanity, r"\bмудак\w*"),
    ru(Profanity, r"\bговн\w*"),
    ru(Profanity, r"\bдерьм\w*"),
    ru(Profanity, r"\bч(е|ё)рт\b"),
    // Drugs
    en(Drugs, r"\bdrugs?\b"),
    en(Drugs, r"\bheroin\b"),
    en(Drugs, r"\bcocaine\b"),
    en(Drugs, r"\bmarijuana\b"),
    en(Drugs, r"\bpills?\b"),
    en(Drugs, r"\bweed\b"),
    en(Drugs, r"\balcohol\b"),
    en(Drugs, r"\bdrunk\b"),
    en(Drugs, r"\bcigarette\b"),
    en(Drugs, r"\bsmok(e|ing)\b"),
    en(Drugs, r"\baddiction\b"),
    ru(Drugs, r"\bнаркот\w*"),
    ru(Drugs, r"\bгероин(а|ом|у)?\b"),
    ru(Drugs, r"\bкокаин\w*"),
    ru(Drugs, r"\bмарихуан\w*"),
    ru(Drugs, r"\bтаблетк\w*"),
    ru(Drugs, r"\bтравк\w*"),
    ru(Drugs, r"\bкосяк\w*"),
    ru(Drugs, r"\bалкогол\w*"),
    ru(Drugs, r"\bпьян\w*"),
    ru(Drugs, r"\bсигарет\w*"),
    ru(Drugs, r"\bкур(ит|ил|ила|или|ят|ить|ение|ю)\b"),
    ru(Drugs, r"\bшприц\w*"),
    ru(Drugs, r"\bдоз(а|у|ы|ой)\b"),
    ru(Drugs, r"\bзависимост\w*"),
    // Child references
    en(ChildRisk, r"\bchild(ren)?\b"),
    en(ChildRisk, r"\bkids?\b"),
    en(ChildRisk, r"\bson\b"),
    en(ChildRisk, r"\bdaughter\b"),
    en(ChildRisk, r"\bteen(aged)?\b"),
    en(ChildRisk, r"\bboy\b"),
    en(ChildRisk, r"\bgirl\b"),
    en(ChildRisk, r"\bminor\b"),
    ru(ChildRisk, r"\bреб(е|ё)н(ок|ка|ку|ком|ке)\b"),
    ru(ChildRisk, r"\bдет(и|ей|ям|ьми|ях)\b"),
    ru(ChildRisk, r"\bсын(а|у|ом|е|ок|ишк\w*)?\b"),
    ru(ChildRisk, r"\bдоч(ь|ка|ери|ерью|ку|ке)\b"),
    ru(ChildRisk, r"\bмальчик\w*"),
    ru(ChildRisk, r"\bдевочк\w*"),
    ru(ChildRisk, r"\bподрост\w*"),
    ru(ChildRisk, r"\bнесовершеннолет\w*"),
    ru(ChildRisk, r"\bшкольни\w*"),
];
