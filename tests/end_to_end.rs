//! End-to-end flow: CSV in, pipeline, scripted review, CSV out.

use std::cell::RefCell;
use std::io::Write;

use termharvest::io::{read_texts, write_glossary};
use termharvest::pipeline::{HarvestPipeline, NoopObserver};
use termharvest::review::{ChatMessage, ChatTransport, TermReviewer};
use termharvest::types::HarvestConfig;

/// Replays canned answers; `None` once the script runs out.
struct ScriptedTransport {
    answers: RefCell<Vec<Option<String>>>,
}

impl ScriptedTransport {
    fn new(answers: Vec<Option<&str>>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().map(|a| a.map(str::to_string)).collect()),
        }
    }
}

impl ChatTransport for ScriptedTransport {
    fn complete(&self, _messages: &[ChatMessage]) -> Option<String> {
        let mut answers = self.answers.borrow_mut();
        if answers.is_empty() {
            None
        } else {
            answers.remove(0)
        }
    }
}

fn write_input(rows: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "id,text_en").expect("header");
    for (i, row) in rows.iter().enumerate() {
        writeln!(file, "{},{}", i, row).expect("row");
    }
    file
}

#[test]
fn test_csv_to_glossary_without_review() {
    let input = write_input(&[
        "Ancient Temple",
        "Ancient Temple",
        "enter the Ancient Temple now",
        "Iron Key",
        "Iron Key",
    ]);
    let texts = read_texts(input.path()).expect("read input");
    assert_eq!(texts.len(), 5);

    let pipeline = HarvestPipeline::new();
    let output = pipeline.run(&texts, &mut NoopObserver);

    let terms: Vec<&str> = output.rows.iter().map(|r| r.term.as_str()).collect();
    assert!(terms.contains(&"Ancient Temple"));
    assert!(terms.contains(&"Iron Key"));
    assert!(output.protected.contains("Ancient Temple"));
    assert!(output.protected.contains("Iron Key"));

    let dir = tempfile::tempdir().expect("temp dir");
    let out_path = dir.path().join("glossary.csv");
    write_glossary(&out_path, &output.rows).expect("write output");

    let bytes = std::fs::read(&out_path).expect("read back");
    assert!(bytes.starts_with(b"\xef\xbb\xbf"));
    let body = String::from_utf8(bytes[3..].to_vec()).expect("utf-8");
    assert!(body.starts_with("term,freq,context"));
    assert!(body.contains("Ancient Temple"));
}

#[test]
fn test_review_keeps_locked_and_tagged_terms() {
    // "Ancient Temple" recurs as a full segment so it is locked and skips
    // review; "Mystic Sigil" never stands alone and goes to the rounds.
    let texts: Vec<String> = [
        "Ancient Temple",
        "Ancient Temple",
        "the Mystic Sigil glows",
        "a Mystic Sigil protects the gate",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let pipeline = HarvestPipeline::new();
    let output = pipeline.run(&texts, &mut NoopObserver);
    let candidates: Vec<&str> = output
        .rows
        .iter()
        .filter(|r| !r.must_keep)
        .map(|r| r.term.as_str())
        .collect();
    assert!(candidates.contains(&"Mystic Sigil"));

    let transport = ScriptedTransport::new(vec![
        Some(r#"[{"term":"Mystic Sigil","tag":"Keep"}]"#),
        Some(r#"[{"term":"Mystic Sigil","tag":"Keep"}]"#),
    ]);
    let reviewer = TermReviewer::new(transport, 20);
    let reviewed = reviewer.review(output.rows);

    let terms: Vec<&str> = reviewed.iter().map(|r| r.term.as_str()).collect();
    assert!(terms.contains(&"Ancient Temple"));
    assert!(terms.contains(&"Mystic Sigil"));
    // Locked rows come first.
    assert!(reviewed[0].must_keep);
}

#[test]
fn test_review_transport_failure_drops_unconfirmed_candidates() {
    let texts: Vec<String> = [
        "Ancient Temple",
        "Ancient Temple",
        "the Mystic Sigil glows",
        "a Mystic Sigil protects the gate",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let output = HarvestPipeline::new().run(&texts, &mut NoopObserver);
    let reviewer = TermReviewer::new(ScriptedTransport::new(vec![None]), 20);
    let reviewed = reviewer.review(output.rows);

    // Round 1 defaults everything to Need Recheck, so only locked rows
    // survive; the pipeline itself must not fail.
    assert!(reviewed.iter().all(|r| r.must_keep));
    assert!(reviewed.iter().any(|r| r.term == "Ancient Temple"));
}

#[test]
fn test_config_relaxations_flow_through() {
    let texts: Vec<String> = vec!["the Mystic Sigil glows".to_string()];

    // A single occurrence falls below the default frequency gate.
    let strict = HarvestPipeline::new().run(&texts, &mut NoopObserver);
    assert!(strict.rows.is_empty());

    let relaxed = HarvestPipeline::with_config(HarvestConfig::default().with_min_freq(1))
        .run(&texts, &mut NoopObserver);
    let terms: Vec<&str> = relaxed.rows.iter().map(|r| r.term.as_str()).collect();
    // The longest run survives; its sub-grams are pruned as children.
    assert_eq!(terms, vec!["Mystic Sigil glows"]);
}
