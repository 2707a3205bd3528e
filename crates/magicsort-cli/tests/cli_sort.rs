use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn magicsort(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("magicsort").unwrap();
    cmd.current_dir(dir)
        .env_remove("MAGICSORT_CACHE")
        .env_remove("MAGICSORT_CONFIG")
        .env("RUST_LOG", "warn");
    cmd
}

fn sort_json(dir: &Path, args: &[&str]) -> Value {
    let out = magicsort(dir)
        .args(["sort", "--format", "json"])
        .args(args)
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    serde_json::from_slice(&out.stdout).expect("sort --format json must print JSON")
}

#[test]
fn sort_prints_and_caches() {
    let dir = tempdir().unwrap();

    magicsort(dir.path())
        .args(["sort", "3", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Original array: [3, 1, 2]"))
        .stdout(predicate::str::contains("Sorted array with seed "))
        .stdout(predicate::str::contains(": [1, 2, 3]"));

    let cache = fs::read_to_string(dir.path().join("cache.txt")).unwrap();
    assert!(cache.starts_with("3,1,2|"), "cache: {cache:?}");
    assert_eq!(cache.lines().count(), 1);
}

#[test]
fn second_run_is_a_cache_hit() {
    let dir = tempdir().unwrap();

    let first = sort_json(dir.path(), &["3", "1", "2"]);
    assert_eq!(first["source"], "search");
    assert_eq!(first["sorted"], serde_json::json!([1, 2, 3]));
    let seed = first["seed"].as_u64().unwrap();

    let second = sort_json(dir.path(), &["3", "1", "2"]);
    assert_eq!(second["source"], "cache");
    assert_eq!(second["trials"], 0);
    assert_eq!(second["seed"].as_u64(), Some(seed));
    assert_eq!(second["sorted"], serde_json::json!([1, 2, 3]));

    let cache = fs::read_to_string(dir.path().join("cache.txt")).unwrap();
    assert_eq!(cache, format!("3,1,2|{seed}\n"));
}

#[test]
fn no_cache_leaves_no_file() {
    let dir = tempdir().unwrap();
    let report = sort_json(dir.path(), &["2", "1", "--no-cache"]);
    assert_eq!(report["source"], "search");
    assert!(!dir.path().join("cache.txt").exists());
}

#[test]
fn custom_cache_path() {
    let dir = tempdir().unwrap();
    magicsort(dir.path())
        .args(["--cache", "seeds.txt", "sort", "2", "1"])
        .assert()
        .success();

    assert!(dir.path().join("seeds.txt").exists());
    assert!(!dir.path().join("cache.txt").exists());
}

#[test]
fn cache_path_from_env() {
    let dir = tempdir().unwrap();
    magicsort(dir.path())
        .env("MAGICSORT_CACHE", "env-seeds.txt")
        .args(["sort", "2", "1"])
        .assert()
        .success();
    assert!(dir.path().join("env-seeds.txt").exists());
}

#[test]
fn negative_values_and_input_list() {
    let dir = tempdir().unwrap();

    let report = sort_json(dir.path(), &["-3", "5", "-1"]);
    assert_eq!(report["sorted"], serde_json::json!([-3, -1, 5]));

    let report = sort_json(dir.path(), &["--input", "4, 2, 3"]);
    assert_eq!(report["original"], serde_json::json!([4, 2, 3]));
    assert_eq!(report["sorted"], serde_json::json!([2, 3, 4]));
}

#[test]
fn bad_input_is_a_config_error() {
    let dir = tempdir().unwrap();
    magicsort(dir.path())
        .args(["sort", "--input", "1,x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid input"));
}

#[test]
fn empty_array_sorts_at_seed_zero() {
    let dir = tempdir().unwrap();
    let report = sort_json(dir.path(), &[]);
    assert_eq!(report["seed"], 0);
    assert_eq!(report["sorted"], serde_json::json!([]));
}

#[test]
fn max_trials_limit_exits_one() {
    let dir = tempdir().unwrap();
    magicsort(dir.path())
        .args(["--max-trials", "0", "sort", "2", "1"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("search exhausted"));

    assert!(!dir.path().join("cache.txt").exists());
}

#[test]
fn timeout_exits_one() {
    let dir = tempdir().unwrap();
    magicsort(dir.path())
        .args(["--timeout", "20ms", "sort"])
        .args(["3", "1", "4", "2", "92", "5", "7", "6", "11", "9", "9", "10"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("timed out"));
}

#[test]
fn corrupt_cache_entry_is_corrected() {
    let dir = tempdir().unwrap();
    // magic seed for 3,1,2 is 3, so seed 0 leaves it unsorted
    fs::write(dir.path().join("cache.txt"), "3,1,2|0\n").unwrap();

    let report = sort_json(dir.path(), &["3", "1", "2"]);
    assert_eq!(report["sorted"], serde_json::json!([1, 2, 3]));
    assert_eq!(report["source"], "search");
    assert_eq!(report["seed"], 3);
    assert_eq!(report["trials"], 4);

    let cache = fs::read_to_string(dir.path().join("cache.txt")).unwrap();
    assert_eq!(cache, "3,1,2|0\n3,1,2|3\n");

    let report = sort_json(dir.path(), &["3", "1", "2"]);
    assert_eq!(report["source"], "cache");
    assert_eq!(report["seed"], 3);
}

#[test]
fn cache_lookup_and_list() {
    let dir = tempdir().unwrap();

    magicsort(dir.path())
        .args(["cache", "lookup", "3", "1", "2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no cached seed"));

    let seed = sort_json(dir.path(), &["3", "1", "2"])["seed"]
        .as_u64()
        .unwrap();

    magicsort(dir.path())
        .args(["cache", "lookup", "3", "1", "2"])
        .assert()
        .success()
        .stdout(format!("{seed}\n"));

    magicsort(dir.path())
        .args(["cache", "list"])
        .assert()
        .success()
        .stdout(format!("3,1,2|{seed}\n"));

    let out = magicsort(dir.path())
        .args(["cache", "list", "--format", "json"])
        .output()
        .unwrap();
    let records: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(records[0]["key"], "3,1,2");
    assert_eq!(records[0]["seed"].as_u64(), Some(seed));
}

#[test]
fn config_file_sets_cache_path() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("magicsort.yaml"),
        "cache:\n  path: from-config.txt\n",
    )
    .unwrap();

    magicsort(dir.path())
        .args(["--config", "magicsort.yaml", "sort", "2", "1"])
        .assert()
        .success();
    assert!(dir.path().join("from-config.txt").exists());
}

#[test]
fn invalid_config_is_fatal() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("magicsort.yaml"), "cache:\n  bogus: 1\n").unwrap();

    magicsort(dir.path())
        .args(["--config", "magicsort.yaml", "sort", "2", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("fatal"));
}

#[test]
fn bare_invocation_runs_demo() {
    let dir = tempdir().unwrap();
    magicsort(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Magic Bogosort Demo ==="))
        .stdout(predicate::str::contains("Original array: [3, 1, 4, 2, 92, 5, 7]"))
        .stdout(predicate::str::contains(": [1, 2, 3, 4, 5, 7, 92]"));

    let cache = fs::read_to_string(dir.path().join("cache.txt")).unwrap();
    assert!(cache.starts_with("3,1,4,2,92,5,7|"));
}

#[test]
fn demo_accepts_custom_values() {
    let dir = tempdir().unwrap();
    magicsort(dir.path())
        .args(["demo", "--values", "9,8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Original array: [9, 8]"))
        .stdout(predicate::str::contains(": [8, 9]"));
}

#[test]
fn version_prints_package_version() {
    let dir = tempdir().unwrap();
    magicsort(dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(format!("{}\n", env!("CARGO_PKG_VERSION")));
}
