//! Reference exemplar phrases for the ten context archetypes.

use crate::core::Archetype;
use crate::lexicon::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeExemplar {
    pub archetype: Archetype,
    pub locale: Locale,
    pub phrase: &'static str,
}

const fn en(archetype: Archetype, phrase: &'static str) -> ArchetypeExemplar {
    ArchetypeExemplar {
        archetype,
        locale: Locale::En,
        phrase,
    }
}

const fn ru(archetype: Archetype, phrase: &'static str) -> ArchetypeExemplar {
    ArchetypeExemplar {
        archetype,
        locale: Locale::Ru,
        phrase,
    }
}

use Archetype::*;

pub static EXEMPLARS: &[ArchetypeExemplar] = &[
    en(GraphicViolence, "brutal murder with blood and gore"),
    en(GraphicViolence, "torture and physical violence causing injury"),
    en(GraphicViolence, "graphic depiction of death and killing"),
    en(GraphicViolence, "violent assault with weapons causing harm"),
    ru(GraphicViolence, "жестокое убийство с кровью и увечьями"),
    ru(GraphicViolence, "пытки и физическое насилие с ранениями"),
    ru(GraphicViolence, "натуралистичное изображение смерти и убийства"),
    en(StylizedAction, "heroic action scene with combat"),
    en(StylizedAction, "adventure movie fight sequence"),
    en(StylizedAction, "comic book style action without gore"),
    en(StylizedAction, "spy thriller chase and combat"),
    en(StylizedAction, "superhero saving people from danger"),
    ru(StylizedAction, "героическая сцена боя"),
    ru(StylizedAction, "приключенческая погоня и драка без крови"),
    ru(StylizedAction, "супергерой спасает людей от опасности"),
    en(SexualContent, "explicit sexual intercourse scene"),
    en(SexualContent, "nudity in sexual context"),
    en(SexualContent, "rape or sexual assault"),
    en(SexualContent, "graphic sexual activity"),
    ru(SexualContent, "откровенная сцена секса"),
    ru(SexualContent, "нагота в сексуальном контексте"),
    ru(SexualContent, "изнасилование или сексуальное насилие"),
    en(MildRomance, "romantic kissing and affection"),
    en(MildRomance, "love scene without explicit content"),
    en(MildRomance, "romantic relationship development"),
    ru(MildRomance, "романтический поцелуй и нежность"),
    ru(MildRomance, "любовная сцена без откровенных подробностей"),
    en(HorrorViolence, "horror movie with scary violence"),
    en(HorrorViolence, "psychological terror and fear"),
    en(HorrorViolence, "monster attack with blood"),
    en(HorrorViolence, "slasher film with killing"),
    ru(HorrorViolence, "фильм ужасов со страшным насилием"),
    ru(HorrorViolence, "нападение чудовища и кровь"),
    en(ProfanityContext, "casual conversation with swearing"),
    en(ProfanityContext, "aggressive confrontation with profanity"),
    en(ProfanityContext, "repeated use of strong language"),
    ru(ProfanityContext, "разговор с матом и руганью"),
    ru(ProfanityContext, "агрессивная ссора с нецензурной бранью"),
    en(DrugAbuse, "drug use and addiction"),
    en(DrugAbuse, "substance abuse scene"),
    en(DrugAbuse, "characters taking illegal drugs"),
    ru(DrugAbuse, "употребление наркотиков и зависимость"),
    ru(DrugAbuse, "герои принимают запрещённые вещества"),
    en(ChildEndangerment, "child in dangerous situation"),
    en(ChildEndangerment, "violence involving minors"),
    en(ChildEndangerment, "child abuse or threat to children"),
    ru(ChildEndangerment, "ребёнок в опасной ситуации"),
    ru(ChildEndangerment, "насилие над детьми или угроза детям"),
    en(DiscussionViolence, "courtroom discussion of crime"),
    en(DiscussionViolence, "testimony about violent event"),
    en(DiscussionViolence, "describing past violence in dialogue"),
    en(DiscussionViolence, "academic or legal discussion of weapons"),
    en(DiscussionViolence, "demonstration or explanation without action"),
    ru(DiscussionViolence, "обсуждение преступления в суде"),
    ru(DiscussionViolence, "свидетель рассказывает о насилии в прошлом"),
    en(ThrillerTension, "psychological thriller with suspense"),
    en(ThrillerTension, "tense dramatic confrontation"),
    en(ThrillerTension, "mystery investigation without violence"),
    en(ThrillerTension, "courtroom drama legal arguments"),
    ru(ThrillerTension, "психологический триллер с напряжением"),
    ru(ThrillerTension, "расследование загадочного дела без насилия"),
];
