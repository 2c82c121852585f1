use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use irfile_core::{parse, serialize};

const INPUT_FILE: &str = "input.ir";
const EXPECTED_FILE: &str = "expected.json";

/// A golden case directory holding `input.ir` and `expected.json`.
struct Fixture {
    dir: PathBuf,
}

impl Fixture {
    fn input(&self) -> PathBuf {
        self.dir.join(INPUT_FILE)
    }

    fn expected(&self) -> PathBuf {
        self.dir.join(EXPECTED_FILE)
    }
}

fn main() -> ExitCode {
    match run(Path::new("tests").join("golden").as_path()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn run(root: &Path) -> Result<(), String> {
    let fixtures = find_fixtures(root)?;
    if fixtures.is_empty() {
        return Err(format!("no {INPUT_FILE} fixtures under {}", root.display()));
    }
    for fixture in &fixtures {
        let canonical = regenerate_one(fixture)?;
        let note = if canonical { "canonical" } else { "normalized on write" };
        println!("{}: {note}", fixture.dir.display());
    }
    Ok(())
}

fn find_fixtures(root: &Path) -> Result<Vec<Fixture>, String> {
    let entries =
        fs::read_dir(root).map_err(|err| format!("failed to read {}: {err}", root.display()))?;
    let mut fixtures = Vec::new();
    for entry in entries {
        let dir = entry
            .map_err(|err| format!("failed to read entry: {err}"))?
            .path();
        if dir.join(INPUT_FILE).is_file() {
            fixtures.push(Fixture { dir });
        }
    }
    fixtures.sort_by(|a, b| a.dir.cmp(&b.dir));
    Ok(fixtures)
}

/// Rewrite `expected.json`; returns whether `input.ir` is already in
/// serializer form.
fn regenerate_one(fixture: &Fixture) -> Result<bool, String> {
    let input = fixture.input();
    let bytes = fs::read(&input).map_err(|err| format!("failed to read {}: {err}", input.display()))?;
    let library =
        parse(&bytes).map_err(|err| format!("parse failed for {}: {err}", input.display()))?;

    let written = serialize(&library);
    let reparsed = parse(&written)
        .map_err(|err| format!("serialized {} does not parse: {err}", input.display()))?;
    if serialize(&reparsed) != written {
        return Err(format!("unstable serialization for {}", input.display()));
    }

    let mut json = serde_json::to_string_pretty(&library)
        .map_err(|err| format!("JSON serialization failed: {err}"))?;
    json.push('\n');
    let output = fixture.expected();
    fs::write(&output, json).map_err(|err| format!("failed to write {}: {err}", output.display()))?;
    Ok(written == bytes)
}
