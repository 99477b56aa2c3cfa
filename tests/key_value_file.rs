//! Key/value file integration tests
//!
//! Exercises the full pipeline, from configuration to the file on disk,
//! inside a scratch directory.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the Veracruz root directory for
//! information on licensing and copyright.

use key_value_generator::{
    write_key_value_file, write_key_value_file_with_rng, GeneratorConfig, GeneratorError,
    RangeMode, DEFAULT_OUTPUT_FILENAME,
};
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;
use std::fs;
use tempfile::TempDir;

const PAIR_PATTERN: &'static str = r"^[01]{16} [01]{16}$";

fn seeded(count: u64) -> GeneratorConfig {
    GeneratorConfig {
        count,
        seed: Some(42),
        progress_interval: 0,
        ..GeneratorConfig::default()
    }
}

fn scratch() -> TempDir {
    tempfile::tempdir().expect("Failed to create scratch directory.")
}

#[test]
fn three_pairs_match_the_line_pattern() {
    let dir = scratch();
    let path = dir.path().join(DEFAULT_OUTPUT_FILENAME);

    let report = write_key_value_file(&path, &seeded(3)).unwrap();
    let contents = fs::read_to_string(&path).unwrap();

    let pattern = Regex::new(PAIR_PATTERN).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| pattern.is_match(line)));
    assert_eq!(contents.matches('\n').count(), 3);
    assert_eq!(report.pairs, 3);
    assert_eq!(report.bytes_written, fs::metadata(&path).unwrap().len());
}

#[test]
fn line_count_equals_pair_count() {
    let dir = scratch();
    let path = dir.path().join(DEFAULT_OUTPUT_FILENAME);

    write_key_value_file(&path, &seeded(1_000)).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1_000);
    assert!(contents
        .lines()
        .all(|line| line.split(' ').count() == 2));
}

#[test]
fn zero_pairs_leaves_an_empty_file() {
    let dir = scratch();
    let path = dir.path().join(DEFAULT_OUTPUT_FILENAME);

    let report = write_key_value_file(&path, &seeded(0)).unwrap();

    assert!(path.exists());
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    assert_eq!(report.pairs, 0);
}

#[test]
fn rerunning_overwrites_the_file() {
    let dir = scratch();
    let path = dir.path().join(DEFAULT_OUTPUT_FILENAME);

    write_key_value_file(&path, &seeded(100)).unwrap();
    let first = fs::metadata(&path).unwrap().len();
    write_key_value_file(&path, &seeded(100)).unwrap();
    let second = fs::metadata(&path).unwrap().len();
    write_key_value_file(&path, &seeded(10)).unwrap();
    let third = fs::metadata(&path).unwrap().len();

    assert_eq!(first, second);
    assert_eq!(third, 10 * 34);
}

#[test]
fn existing_contents_are_truncated() {
    let dir = scratch();
    let path = dir.path().join(DEFAULT_OUTPUT_FILENAME);
    fs::write(&path, "x".repeat(10_000)).unwrap();

    write_key_value_file(&path, &seeded(2)).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.len(), 2 * 34);
    assert!(!contents.contains('x'));
}

#[test]
fn seeded_runs_are_reproducible() {
    let dir = scratch();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");

    write_key_value_file(&first, &seeded(200)).unwrap();
    write_key_value_file(&second, &seeded(200)).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn elapsed_time_is_non_negative() {
    let dir = scratch();
    let path = dir.path().join(DEFAULT_OUTPUT_FILENAME);

    let report = write_key_value_file(&path, &seeded(10)).unwrap();

    assert!(report.elapsed_secs() >= 0.0);
}

#[test]
fn inclusive_range_emits_the_wide_boundary_value() {
    let dir = scratch();
    let path = dir.path().join(DEFAULT_OUTPUT_FILENAME);
    // At width 1 the inclusive range is {0, 1, 2}, so "10" shows up quickly.
    let config = GeneratorConfig {
        width: 1,
        range: RangeMode::Inclusive,
        ..seeded(200)
    };

    write_key_value_file(&path, &config).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let tokens: Vec<&str> = contents.split_whitespace().collect();
    assert_eq!(tokens.len(), 400);
    assert!(tokens.iter().all(|t| ["0", "1", "10"].contains(t)));
    assert!(tokens.contains(&"10"));
}

#[test]
fn inclusive_sixteen_bit_lines_are_sixteen_or_seventeen_digits() {
    let dir = scratch();
    let path = dir.path().join(DEFAULT_OUTPUT_FILENAME);
    let config = GeneratorConfig {
        range: RangeMode::Inclusive,
        ..seeded(1_000)
    };

    write_key_value_file(&path, &config).unwrap();

    let pattern = Regex::new(r"^(?:[01]{16}|10{16}) (?:[01]{16}|10{16})$").unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.lines().all(|line| pattern.is_match(line)));
}

#[test]
fn unwritable_path_is_an_open_error() {
    let dir = scratch();
    let path = dir.path().join("missing").join(DEFAULT_OUTPUT_FILENAME);
    let mut rng = StdRng::seed_from_u64(42);

    match write_key_value_file_with_rng(&path, &seeded(3), &mut rng) {
        Err(GeneratorError::OpenError(failed, _)) => assert_eq!(failed, path),
        other => panic!("expected OpenError, got {:?}", other),
    }
    assert!(!path.exists());
}

#[test]
fn invalid_width_does_not_create_the_file() {
    let dir = scratch();
    let path = dir.path().join(DEFAULT_OUTPUT_FILENAME);
    let config = GeneratorConfig {
        width: 64,
        ..seeded(3)
    };

    assert!(matches!(
        write_key_value_file(&path, &config),
        Err(GeneratorError::InvalidWidth(64, _))
    ));
    assert!(!path.exists());
}
