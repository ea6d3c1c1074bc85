use pipelog::{CleanupOptions, ManualClock, cleanup};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn seed(dir: &Path) {
    fs::write(dir.join("app_Debug.log"), "active\n").unwrap();
    fs::write(dir.join("app_Debug.log.2024-05-01"), "old\n").unwrap();
    fs::write(dir.join("app_Debug.log.2024-05-09"), "recent\n").unwrap();
}

#[test]
fn expires_backups_past_the_age_limit() {
    let tmp = TempDir::new().unwrap();
    seed(tmp.path());
    let clock = ManualClock::at(2024, 5, 10, 12, 0, 0);

    let result = cleanup(tmp.path(), &CleanupOptions::new().max_age_days(7), &clock).unwrap();

    assert_eq!(result.deleted.len(), 1);
    assert!(result.deleted[0].ends_with("app_Debug.log.2024-05-01"));
    assert!(!tmp.path().join("app_Debug.log.2024-05-01").exists());
    assert!(tmp.path().join("app_Debug.log.2024-05-09").exists());
    assert!(tmp.path().join("app_Debug.log").exists());
}

#[test]
fn no_filters_means_nothing_is_touched() {
    let tmp = TempDir::new().unwrap();
    seed(tmp.path());
    let clock = ManualClock::at(2024, 5, 10, 12, 0, 0);

    let result = cleanup(tmp.path(), &CleanupOptions::new(), &clock).unwrap();

    assert!(result.is_empty());
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 3);
}

#[test]
fn keep_last_protects_the_newest_backups() {
    let tmp = TempDir::new().unwrap();
    seed(tmp.path());
    let clock = ManualClock::at(2024, 5, 10, 12, 0, 0);

    let options = CleanupOptions::new().max_age_days(0).keep_last(1);
    let result = cleanup(tmp.path(), &options, &clock).unwrap();

    assert_eq!(result.deleted.len(), 1);
    assert!(!tmp.path().join("app_Debug.log.2024-05-01").exists());
    assert!(tmp.path().join("app_Debug.log.2024-05-09").exists());
}

#[test]
fn dry_run_previews_without_touching_files() {
    let tmp = TempDir::new().unwrap();
    seed(tmp.path());
    let clock = ManualClock::at(2024, 5, 10, 12, 0, 0);

    let options = CleanupOptions::new().max_age_days(7).dry_run(true);
    let result = cleanup(tmp.path(), &options, &clock).unwrap();

    assert_eq!(result.would_delete.len(), 1);
    assert!(result.deleted.is_empty());
    assert!(tmp.path().join("app_Debug.log.2024-05-01").exists());
}

#[test]
fn compress_gzips_in_place() {
    let tmp = TempDir::new().unwrap();
    seed(tmp.path());
    let clock = ManualClock::at(2024, 5, 10, 12, 0, 0);

    let options = CleanupOptions::new().max_age_days(7).compress(true);
    let result = cleanup(tmp.path(), &options, &clock).unwrap();

    assert_eq!(result.compressed.len(), 1);
    assert!(!tmp.path().join("app_Debug.log.2024-05-01").exists());
    assert!(tmp.path().join("app_Debug.log.2024-05-01.gz").exists());
}

#[test]
fn malformed_suffixes_are_not_backups() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app_Debug.log.notadate"), "x\n").unwrap();
    let clock = ManualClock::at(2024, 5, 10, 12, 0, 0);

    let result = cleanup(tmp.path(), &CleanupOptions::new().max_age_days(0), &clock).unwrap();

    assert!(result.is_empty());
    assert!(tmp.path().join("app_Debug.log.notadate").exists());
}

#[test]
fn keep_last_counts_per_base_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app_Debug.log.2024-05-01"), "a\n").unwrap();
    fs::write(tmp.path().join("app_Transaction.log.2024-05-01"), "b\n").unwrap();
    let clock = ManualClock::at(2024, 5, 10, 12, 0, 0);

    let options = CleanupOptions::new().max_age_days(0).keep_last(1);
    let result = cleanup(tmp.path(), &options, &clock).unwrap();

    // Each base file's newest backup survives independently
    assert!(result.is_empty());
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 2);
}

#[test]
fn missing_directory_is_a_clean_no_op() {
    let clock = ManualClock::at(2024, 5, 10, 12, 0, 0);

    let result = cleanup(
        Path::new("/nonexistent/pipelog-test"),
        &CleanupOptions::new().max_age_days(1),
        &clock,
    )
    .unwrap();

    assert!(result.is_empty());
}
