//! Integration coverage for the artifact search and fallback behavior.

use std::fs;
use std::path::Path;

use iriser::artifacts::{self, LoadOutcome, MODEL_FILE, SCALER_FILE};
use iriser::ml::{SoftmaxClassifier, StandardScaler};
use tempfile::tempdir;

fn write_valid_pair(dir: &Path) {
    fs::write(
        dir.join(SCALER_FILE),
        serde_json::to_string(&StandardScaler::bundled()).unwrap(),
    )
    .unwrap();
    fs::write(
        dir.join(MODEL_FILE),
        serde_json::to_string(&SoftmaxClassifier::bundled()).unwrap(),
    )
    .unwrap();
}

#[test]
fn loads_from_the_models_subdir_when_the_working_dir_is_empty() {
    let root = tempdir().unwrap();
    let models = root.path().join("models");
    fs::create_dir(&models).unwrap();
    write_valid_pair(&models);

    let outcome = artifacts::load_pair(&[root.path().to_path_buf(), models.clone()]);
    let LoadOutcome::Ready(loaded) = outcome else {
        panic!("expected a loaded pair");
    };
    assert_eq!(loaded.source_dir, models);
    assert!(loaded.prior_failures.is_empty());
}

#[test]
fn first_candidate_wins_when_both_hold_a_valid_pair() {
    let root = tempdir().unwrap();
    let models = root.path().join("models");
    fs::create_dir(&models).unwrap();
    write_valid_pair(root.path());
    write_valid_pair(&models);

    let outcome = artifacts::load_pair(&[root.path().to_path_buf(), models]);
    let LoadOutcome::Ready(loaded) = outcome else {
        panic!("expected a loaded pair");
    };
    assert_eq!(loaded.source_dir, root.path());
}

#[test]
fn falls_back_past_a_corrupt_working_dir_copy() {
    let root = tempdir().unwrap();
    let models = root.path().join("models");
    fs::create_dir(&models).unwrap();
    // Both files present so the candidate is attempted, but the scaler is
    // not valid JSON.
    fs::write(root.path().join(SCALER_FILE), "not json").unwrap();
    fs::write(
        root.path().join(MODEL_FILE),
        serde_json::to_string(&SoftmaxClassifier::bundled()).unwrap(),
    )
    .unwrap();
    write_valid_pair(&models);

    let outcome = artifacts::load_pair(&[root.path().to_path_buf(), models.clone()]);
    let LoadOutcome::Ready(loaded) = outcome else {
        panic!("expected the fallback copy to load");
    };
    assert_eq!(loaded.source_dir, models);
    assert_eq!(loaded.prior_failures, vec![root.path().to_path_buf()]);
}

#[test]
fn a_partial_pair_is_skipped_without_being_reported() {
    let root = tempdir().unwrap();
    let models = root.path().join("models");
    fs::create_dir(&models).unwrap();
    // Only one of the two files in the working directory: not a candidate.
    fs::write(
        root.path().join(MODEL_FILE),
        serde_json::to_string(&SoftmaxClassifier::bundled()).unwrap(),
    )
    .unwrap();
    write_valid_pair(&models);

    let outcome = artifacts::load_pair(&[root.path().to_path_buf(), models]);
    let LoadOutcome::Ready(loaded) = outcome else {
        panic!("expected the models copy to load");
    };
    assert!(loaded.prior_failures.is_empty());
}

#[test]
fn dimension_mismatches_are_rejected_per_directory() {
    let root = tempdir().unwrap();
    let mut scaler = StandardScaler::bundled();
    scaler.scale.pop();
    fs::write(
        root.path().join(SCALER_FILE),
        serde_json::to_string(&scaler).unwrap(),
    )
    .unwrap();
    fs::write(
        root.path().join(MODEL_FILE),
        serde_json::to_string(&SoftmaxClassifier::bundled()).unwrap(),
    )
    .unwrap();

    let outcome = artifacts::load_pair(&[root.path().to_path_buf()]);
    let LoadOutcome::Unready(report) = outcome else {
        panic!("expected an unready outcome");
    };
    assert_eq!(report.failures.len(), 1);
    let rendered = report.failures[0].error.to_string();
    assert!(rendered.contains("Rejected"), "got: {rendered}");
}

#[test]
fn exhausted_search_reports_files_and_locations() {
    let root = tempdir().unwrap();
    let models = root.path().join("models");

    let outcome = artifacts::load_pair(&[root.path().to_path_buf(), models.clone()]);
    let LoadOutcome::Unready(report) = outcome else {
        panic!("expected an unready outcome");
    };
    let message = report.message();
    assert!(message.contains(SCALER_FILE));
    assert!(message.contains(MODEL_FILE));
    assert!(message.contains(&root.path().display().to_string()));
    assert!(message.contains(&models.display().to_string()));
}
