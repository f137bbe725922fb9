//! Developer utility to write the bundled pre-fitted artifact pair to disk.

use std::path::{Path, PathBuf};

use iriser::artifacts::{MODEL_FILE, SCALER_FILE};
use iriser::ml::{SoftmaxClassifier, StandardScaler};

const USAGE: &str = "Usage: iriser-artifacts [--out <dir>] [--force]\n\
Writes scaler.json and model.json (default out dir: models)";

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let options = parse_args(std::env::args().skip(1).collect())?;

    let scaler = StandardScaler::bundled();
    let classifier = SoftmaxClassifier::bundled();
    scaler.validate()?;
    classifier.validate()?;

    std::fs::create_dir_all(&options.out_dir).map_err(|err| {
        format!(
            "Failed to create output dir {}: {err}",
            options.out_dir.display()
        )
    })?;

    let scaler_path = options.out_dir.join(SCALER_FILE);
    let model_path = options.out_dir.join(MODEL_FILE);
    if !options.force && (scaler_path.exists() || model_path.exists()) {
        return Err(format!(
            "Artifacts already exist in {}; pass --force to overwrite",
            options.out_dir.display()
        ));
    }

    write_json(&scaler_path, &scaler)?;
    write_json(&model_path, &classifier)?;
    println!(
        "Wrote {SCALER_FILE} and {MODEL_FILE} to {}",
        options.out_dir.display()
    );
    Ok(())
}

struct Options {
    out_dir: PathBuf,
    force: bool,
}

fn parse_args(args: Vec<String>) -> Result<Options, String> {
    let mut out_dir = PathBuf::from("models");
    let mut force = false;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--out" => {
                out_dir = PathBuf::from(iter.next().ok_or("--out requires a path")?);
            }
            "--force" => force = true,
            "--help" | "-h" => return Err(USAGE.to_string()),
            other => return Err(format!("Unknown argument: {other}\n{USAGE}")),
        }
    }
    Ok(Options { out_dir, force })
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| format!("Failed to serialize {}: {err}", path.display()))?;
    std::fs::write(path, text).map_err(|err| format!("Failed to write {}: {err}", path.display()))
}
