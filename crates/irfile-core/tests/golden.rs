use std::fs;
use std::path::{Path, PathBuf};

use irfile_core::{SignalLibrary, parse, serialize};

fn golden_dir(dir: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(dir)
}

fn load_input(dir: &str) -> Vec<u8> {
    fs::read(golden_dir(dir).join("input.ir")).expect("read input.ir")
}

fn load_expected_library(dir: &str) -> SignalLibrary {
    let expected_path = golden_dir(dir).join("expected.json");
    let expected_json = fs::read_to_string(&expected_path).expect("read expected.json");
    serde_json::from_str(&expected_json).expect("parse expected library")
}

fn run_golden(dir: &str) -> SignalLibrary {
    let input = load_input(dir);
    let expected = load_expected_library(dir);

    let actual = parse(&input).expect("parse input.ir");

    let actual_value = serde_json::to_value(&actual).expect("serialize actual");
    let expected_value = serde_json::to_value(&expected).expect("serialize expected");
    assert_eq!(actual_value, expected_value, "golden mismatch in {dir}");

    let written = serialize(&actual);
    let reparsed = parse(&written).expect("reparse serialized output");
    assert_eq!(serialize(&reparsed), written, "unstable output in {dir}");
    actual
}

fn run_canonical_golden(dir: &str) {
    let actual = run_golden(dir);
    let input = load_input(dir);
    assert_eq!(
        String::from_utf8(serialize(&actual)).expect("utf-8 output"),
        String::from_utf8(input).expect("utf-8 input"),
        "canonical text mismatch in {dir}"
    );
}

#[test]
fn golden_tv_signals() {
    run_canonical_golden("tests/golden/tv_signals");
}

#[test]
fn golden_universal_library() {
    run_canonical_golden("tests/golden/universal_library");
}

#[test]
fn golden_permissive() {
    run_golden("tests/golden/permissive");
}

#[test]
fn golden_universal_library_is_library() {
    let library = load_expected_library("tests/golden/universal_library");
    assert!(library.is_library());
    assert!(library.signals.iter().all(|s| s.name == "POWER" || s.name == "VOL+"));
}

#[test]
fn golden_permissive_keeps_unknown_kind() {
    let library = load_expected_library("tests/golden/permissive");
    let light = &library.signals[1];
    assert_eq!(light.kind.as_str(), "pulse");
    assert_eq!(light.frequency, 40000);
}
