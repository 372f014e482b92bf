//! Integration tests for collection, filter, and sorting behavior.

mod helpers;

use curseapi::{FileCollection, FileComparator, FileFilter, FileId, FilesError, ReleaseType};

use helpers::{PROJECT, StaticSource, group_1_12};

async fn fetch_files() -> FileCollection {
    FileCollection::fetch(&StaticSource::new(), PROJECT)
        .await
        .expect("fixture project should load")
}

#[tokio::test]
async fn test_fetch_binds_project() {
    let files = fetch_files().await;
    assert_eq!(files.len(), 6);
    assert_eq!(files.project_id(), Some(PROJECT));
}

#[tokio::test]
async fn test_fetch_propagates_source_error() {
    let err = FileCollection::fetch(&StaticSource::new(), curseapi::ProjectId::new(1))
        .await
        .unwrap_err();
    match err {
        FilesError::App(inner) => assert!(inner.is_fetch()),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_clone_equals_original() {
    let files = fetch_files().await;
    assert_eq!(files.clone(), files);
}

#[tokio::test]
async fn test_filter_matches_observed_behavior() {
    let files = fetch_files().await;

    let filter = FileFilter::new()
        .game_version_groups_array(&[group_1_12()])
        .between(FileId::new(2522102), FileId::new(2831330))
        .minimum_stability(ReleaseType::Beta)
        .clone();

    let mut filtered = files.clone();
    filter.apply(&mut filtered);

    assert!(filtered.file_with_id(FileId::new(2522102)).is_none());
    assert!(filtered.file_with_id(FileId::new(2634354)).is_some());
    assert!(filtered.file_with_id(FileId::new(2831330)).is_none());

    for file in &filtered {
        assert!(file.game_versions.contains("1.12.2"));
        assert!(file.release_type.matches_minimum_stability(ReleaseType::Beta));
    }

    let mut filtered2 = files.clone();
    filtered2.filter(&filter);
    assert_eq!(filtered2, filtered);
    assert_eq!(files.len(), 6);
}

#[tokio::test]
async fn test_filter_is_a_pure_narrowing() {
    let files = fetch_files().await;
    let mut filter = FileFilter::new();
    filter
        .minimum_stability(ReleaseType::Release)
        .newer_than(FileId::new(2522102))
        .exclude_ids([FileId::new(2831330)]);

    let mut kept = files.clone();
    filter.apply(&mut kept);

    assert_eq!(kept.ids(), vec![FileId::new(2581245), FileId::new(2700000)]);
    for file in &files {
        assert_eq!(kept.contains(file.id), filter.accepts(file));
    }
}

#[tokio::test]
async fn test_sorting() {
    let files = fetch_files().await;

    let oldest = files.with_comparator(FileComparator::SORT_BY_OLDEST);
    assert_eq!(oldest.first().unwrap().id, FileId::new(2522102));

    let newest = files.with_comparator(FileComparator::SORT_BY_NEWEST);
    assert_eq!(newest.first().unwrap().id, FileId::new(2831330));

    let by_time = files.with_comparator(FileComparator::by_upload_time().reversed());
    assert_eq!(by_time.ids(), newest.ids());
}

#[tokio::test]
async fn test_lookup_after_filter_returns_none() {
    let mut files = fetch_files().await;
    let mut filter = FileFilter::new();
    filter.include_ids([FileId::new(2634354)]);
    assert!(files.filter(&filter));

    assert!(files.file_with_id(FileId::new(2581245)).is_none());
    assert_eq!(files.first().unwrap().id, FileId::new(2634354));
}

#[tokio::test]
async fn test_empty_after_filter() {
    let mut files = fetch_files().await;
    let mut filter = FileFilter::new();
    filter.older_than(FileId::new(1));
    assert!(files.filter(&filter));
    assert!(files.is_empty());
    assert!(matches!(files.first(), Err(FilesError::EmptyCollection)));
}
