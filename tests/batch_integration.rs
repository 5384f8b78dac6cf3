//! Batch runs isolate per-document failures.

mod common;

use common::{filler, neutral_analyzer, write_files};
use pretty_assertions::assert_eq;
use scriptrate::pipeline::{BatchStatus, DocumentSource};
use scriptrate::Rating;

#[test]
fn failures_are_recorded_without_aborting_the_batch() {
    let quiet = filler(40);
    let violent = format!("The gunman shoots the guard. {}", filler(10));
    let (dir, paths) = write_files(&[
        ("quiet.txt", quiet.as_bytes()),
        ("draft.pdf", b"%PDF-1.7"),
        ("violent.txt", violent.as_bytes()),
    ]);
    let missing = dir.path().join("missing.txt");

    let sources = vec![
        DocumentSource::Path(paths[0].clone()),
        DocumentSource::Path(paths[1].clone()),
        DocumentSource::Path(missing),
        DocumentSource::Path(paths[2].clone()),
    ];
    let batch = neutral_analyzer().analyze_batch(&sources);

    assert_eq!(batch.entries.len(), 4);
    assert_eq!(batch.succeeded, 2);
    assert_eq!(batch.failed, 2);
    assert!(!batch.all_succeeded());

    let statuses: Vec<BatchStatus> = batch.entries.iter().map(|e| e.status).collect();
    assert_eq!(
        statuses,
        vec![
            BatchStatus::Success,
            BatchStatus::Failed,
            BatchStatus::Failed,
            BatchStatus::Success,
        ]
    );

    let files: Vec<&str> = batch.entries.iter().map(|e| e.file.as_str()).collect();
    assert_eq!(files, vec!["quiet.txt", "draft.pdf", "missing.txt", "violent.txt"]);

    let pdf = &batch.entries[1];
    assert_eq!(pdf.error_kind.as_deref(), Some("extraction"));
    assert!(pdf.error.as_deref().unwrap().contains("PDF"));
    assert!(pdf.report.is_none());

    let ratings: Vec<Rating> = batch.reports().map(|r| r.predicted_rating).collect();
    assert_eq!(ratings[0], Rating::ZeroPlus);
    assert!(ratings[1] >= Rating::SixteenPlus);
}

#[test]
fn text_sources_mix_with_paths() {
    let (_dir, paths) = write_files(&[("a.txt", filler(12).as_bytes())]);
    let sources = vec![
        DocumentSource::Path(paths[0].clone()),
        DocumentSource::Text {
            name: "inline".into(),
            text: filler(12),
        },
    ];
    let batch = neutral_analyzer().analyze_batch(&sources);
    assert!(batch.all_succeeded());
    assert_eq!(batch.entries[0].file, "a.txt");
    assert_eq!(batch.entries[1].file, "inline");
}

#[test]
fn batch_report_serializes_counts() {
    let batch = neutral_analyzer().analyze_batch(&[DocumentSource::Path("nope.txt".into())]);
    let json = serde_json::to_value(&batch).unwrap();
    assert_eq!(json["succeeded"], 0);
    assert_eq!(json["failed"], 1);
    assert_eq!(json["entries"][0]["status"], "failed");
}
