use std::path::PathBuf;

use arivu_text::{Abbreviations, Pipeline, PipelineOptions};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("abbreviations.txt")
}

#[test]
fn loads_rules_over_defaults() {
    let abbr = Abbreviations::load(fixture_path()).expect("load fixture");
    assert_eq!(abbr.get("dr"), Some(&["drive".to_string()][..]));
    assert_eq!(abbr.get("fyi").map(<[String]>::len), Some(3));
    // Built-ins not mentioned in the file survive.
    assert!(abbr.get("ttyl").is_some());
    assert_eq!(
        abbr.expand(&["ASAP", "mr"]),
        vec!["as", "soon", "as", "possible", "mister"]
    );
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Abbreviations::load(dir.path().join("nope.txt")).unwrap_err();
    assert!(format!("{err:#}").contains("nope.txt"));
}

#[test]
fn rule_without_expansion_reports_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("abbr.txt");
    std::fs::write(&path, "ok okay\nbroken\n").unwrap();
    let err = Abbreviations::load(&path).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains(":2"), "{msg}");
    assert!(msg.contains("broken"), "{msg}");
}

#[test]
fn pipeline_uses_loaded_rules() {
    let abbr = Abbreviations::load(fixture_path()).unwrap();
    let options = PipelineOptions {
        stem: false,
        ..PipelineOptions::default()
    };
    let pipeline = Pipeline::new(options, abbr);
    assert_eq!(pipeline.process("Turn on Dr."), vec!["turn", "drive"]);
}
