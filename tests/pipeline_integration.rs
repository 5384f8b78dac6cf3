mod common;

use common::{filler, hashing_analyzer, neutral_analyzer, topic_analyzer};
use indoc::indoc;
use pretty_assertions::assert_eq;
use scriptrate::analysis::FULL_SCRIPT_HEADING;
use scriptrate::{Category, Rating};

#[test]
fn dense_violence_in_one_scene_rates_sixteen_plus() {
    // 50 words, 3 violence matches, neutral context: 3 / 50 * 100 = 6, clamped to 1.
    let text = format!("He grabs the knife. {} They kill him. The gunman", filler(41));
    assert_eq!(text.split_whitespace().count(), 50);

    let report = neutral_analyzer().analyze_text("duel.txt", &text).unwrap();

    assert_eq!(report.total_scenes, 1);
    assert_eq!(report.aggregated_scores.violence.value(), 1.0);
    assert_eq!(report.predicted_rating, Rating::SixteenPlus);
    assert_eq!(
        report.reasons,
        vec!["интенсивное насилие и сцены убийств".to_string()]
    );
    assert_eq!(report.evidence_excerpts.len(), 2);
    assert_eq!(report.top_trigger_scenes[0].heading, FULL_SCRIPT_HEADING);
}

fn violence_of(scene: &str) -> f64 {
    topic_analyzer(vec!["testimony", "horror"])
        .analyze_text("scene.txt", scene)
        .unwrap()
        .aggregated_scores
        .violence
        .value()
}

#[test]
fn archetype_context_scales_violence_end_to_end() {
    // One match in 400 words: neutral density 0.25.
    let plain = format!("Later They kill him. {}", filler(396));
    let testimony = format!("Testimony: They kill him. {}", filler(396));
    let horror = format!("Horror: They kill him. {}", filler(396));
    for text in [&plain, &testimony, &horror] {
        assert_eq!(text.split_whitespace().count(), 400);
    }

    assert!((violence_of(&plain) - 0.25).abs() < 1e-3);
    // Narrated violence is dampened by 0.3.
    assert!((violence_of(&testimony) - 0.075).abs() < 1e-3);
    // Horror context amplifies by 1.2.
    assert!((violence_of(&horror) - 0.3).abs() < 1e-3);
}

#[test]
fn five_clean_scenes_rate_zero_plus() {
    let text = (1..=5)
        .map(|i| format!("INT. HOUSE {i} - DAY\n{}\n", filler(30)))
        .collect::<String>();

    let report = neutral_analyzer().analyze_text("calm.txt", &text).unwrap();

    assert_eq!(report.total_scenes, 5);
    assert_eq!(report.predicted_rating, Rating::ZeroPlus);
    for category in Category::ALL {
        assert_eq!(report.aggregated_scores.get(category).value(), 0.0);
    }
    assert!(report.top_trigger_scenes.is_empty());
    assert!(report.evidence_excerpts.is_empty());
}

#[test]
fn figurative_kill_does_not_raise_the_rating() {
    let text = format!("{} I will finish this report if it kills me.", filler(20));
    let report = neutral_analyzer().analyze_text("memo.txt", &text).unwrap();
    assert_eq!(report.aggregated_scores.violence.value(), 0.0);
    assert_eq!(report.predicted_rating, Rating::ZeroPlus);
}

#[test]
fn russian_screenplay_is_segmented_and_scored() {
    let text = indoc! {"
        ИНТ. КВАРТИРА - НОЧЬ
        Анна наливает чай и смотрит в окно на тихую улицу.

        ЭКСТ. ПЕРЕУЛОК - НОЧЬ
        Бандит достаёт пистолет и стреляет. Охранник падает, кровь на асфальте.

        ИНТ. КАФЕ - УТРО
        Друзья завтракают и обсуждают поездку к морю.
    "};

    let report = neutral_analyzer().analyze_text("ночь.txt", text).unwrap();

    assert_eq!(report.total_scenes, 3);
    assert!(report.aggregated_scores.violence.value() > 0.0);
    assert!(report.aggregated_scores.gore.value() > 0.0);
    assert!(report.predicted_rating >= Rating::TwelvePlus);
    let top = &report.top_trigger_scenes[0];
    assert_eq!(top.scene_id, 1);
    assert!(top.heading.starts_with("ЭКСТ. ПЕРЕУЛОК"));
    assert!(top.sample_text.ends_with("..."));
}

#[test]
fn evidence_never_exceeds_five_excerpts() {
    let text = std::iter::repeat("The soldier kills the guard with a knife and a gun.")
        .take(30)
        .collect::<Vec<_>>()
        .join(" ");
    let report = neutral_analyzer().analyze_text("war.txt", &text).unwrap();
    assert!(report.evidence_excerpts.len() <= 5);
    assert!(report.predicted_rating >= Rating::SixteenPlus);
}

#[test]
fn analysis_is_deterministic_with_the_hashing_backend() {
    let text = indoc! {"
        INT. WAREHOUSE - NIGHT
        The thugs beat the hostage. Blood drips onto the concrete floor.

        EXT. DOCKS - DAWN
        Two men smoke cigarettes and argue about the drugs in the van.

        INT. BEDROOM - MORNING
        A child sleeps while the radio plays quietly in the corner.
    "};
    let analyzer = hashing_analyzer();
    let first = analyzer.analyze_text("docks.txt", text).unwrap();
    let second = analyzer.analyze_text("docks.txt", text).unwrap();
    assert_eq!(first, second);
    for category in Category::ALL {
        let score = first.aggregated_scores.get(category).value();
        assert!((0.0..=1.0).contains(&score));
    }
}

#[test]
fn empty_document_is_a_single_clean_scene() {
    let report = neutral_analyzer().analyze_text("empty.txt", "").unwrap();
    assert_eq!(report.total_scenes, 1);
    assert_eq!(report.predicted_rating, Rating::ZeroPlus);
}
