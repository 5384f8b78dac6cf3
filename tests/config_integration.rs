use indoc::indoc;
use scriptrate::config::{load_config, CONFIG_FILE_NAME};
use scriptrate::{Error, ScriptAnalyzer, ScriptRateConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn explicit_config_overrides_ranking() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        indoc! {r#"
            [ranking]
            top_scenes = 2
            min_weight = 0.2

            [embedding]
            backend = "hashing"
            dimensions = 64
        "#},
    )
    .unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.ranking.top_scenes, 2);
    assert_eq!(config.embedding.dimensions, 64);
    assert_eq!(config.lexicon, ScriptRateConfig::default().lexicon);

    let analyzer = ScriptAnalyzer::new(config).unwrap();
    assert_eq!(analyzer.context().index().dimensions(), 64);
}

#[test]
fn weights_that_do_not_sum_to_one_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(
        &path,
        indoc! {"
            [aggregation.intensity]
            max_weight = 0.9
            percentile_weight = 0.3
            percentile = 95.0
        "},
    )
    .unwrap();

    let err = load_config(Some(&path)).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_config(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}
