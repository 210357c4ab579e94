// End-to-end smoke test for the checker library.
//
// Drives `parse_args` + `run_action` the way `main.rs` does, against real
// files in a `tempfile` directory: check a poem file, export it as a
// session, then re-check that session file and confirm the verdicts
// survive the trip.

use std::fs;

use verse_cli::{CliAction, parse_args, run_action};
use verse_prosody::PoetrySession;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_file_to_session_and_back() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    let poem = dir.join("pond.txt");
    fs::write(
        &poem,
        "An old silent pond...\nA frog jumps into the pond,\nsplash! Silence again.\n",
    )
    .unwrap();

    let poem_arg = poem.to_string_lossy().to_string();
    let dir_arg = dir.to_string_lossy().to_string();
    let action = parse_args(&args(&[&poem_arg, "--form", "haiku", "--export-session", &dir_arg]))
        .unwrap();
    let outcome = run_action(&action, &mut "".as_bytes(), 1_700_000_000_000).unwrap();

    assert!(!outcome.flagged);
    // Trailing newline leaves an empty fourth line, which is not "Extra".
    assert!(outcome.output.contains("4 lines (form expects 3), 17 syllables, 0 flagged"));

    let exported = outcome.exported.expect("session path");
    assert_eq!(
        exported.file_name().unwrap().to_string_lossy(),
        "versecraft-session-2023-11-14.json"
    );

    let session = PoetrySession::from_json(&fs::read_to_string(&exported).unwrap()).unwrap();
    assert_eq!(session.form_id, "haiku");
    assert_eq!(session.timestamp, 1_700_000_000_000);

    let exported_arg = exported.to_string_lossy().to_string();
    let action = parse_args(&args(&["--session", &exported_arg, "--json"])).unwrap();
    let outcome = run_action(&action, &mut "".as_bytes(), 0).unwrap();
    let value: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();
    assert_eq!(value["report"]["formId"], "haiku");
    assert_eq!(value["report"]["errorCount"], 0);
}

#[test]
fn test_invalid_session_file_is_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("bad.json");
    fs::write(&path, r#"{"poemText": "no form here"}"#).unwrap();

    let path_arg = path.to_string_lossy().to_string();
    let action = parse_args(&args(&["--session", &path_arg])).unwrap();
    let err = run_action(&action, &mut "".as_bytes(), 0).unwrap_err();
    assert!(err.to_string().contains("invalid session file"));
}

#[test]
fn test_missing_file_is_io_error() {
    let action = parse_args(&args(&["/definitely/not/here.txt"])).unwrap();
    assert!(matches!(action, CliAction::Check(_)));
    let err = run_action(&action, &mut "".as_bytes(), 0).unwrap_err();
    assert!(matches!(err, verse_cli::CliError::Io(_)));
}
