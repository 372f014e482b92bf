//! Integration tests for parallel text extraction.

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use curseapi::curseapi_core::config::TextCacheConfig;
use curseapi::{
    CachedTextFetcher, ClientConfig, File, FileCollection, FileFilter, FileId, FilesError,
    ParallelMapper, TextFetcher, TextKind,
};

use helpers::{FakeTextFetcher, PROJECT, StaticSource};

async fn fetch_files() -> FileCollection {
    FileCollection::fetch(&StaticSource::new(), PROJECT)
        .await
        .expect("fixture project should load")
}

#[tokio::test]
async fn test_parallel_map_has_same_size() {
    let mut smaller = fetch_files().await;
    FileFilter::new()
        .older_than(FileId::new(2581245))
        .apply(&mut smaller);
    assert_eq!(smaller.len(), 2);

    let fetcher = Arc::new(FakeTextFetcher::default());
    let (names, changelogs) = (Arc::clone(&fetcher), Arc::clone(&fetcher));
    let pairs = smaller
        .parallel_map(
            move |file: Arc<File>| {
                let fetcher = Arc::clone(&names);
                async move { fetcher.fetch_text(&file, TextKind::DisplayName).await }
            },
            move |file: Arc<File>| {
                let fetcher = Arc::clone(&changelogs);
                async move { fetcher.fetch_text(&file, TextKind::ChangelogPlainText).await }
            },
        )
        .await
        .unwrap();

    assert_eq!(pairs.len(), smaller.len());
    assert_eq!(
        pairs[0],
        (
            "RandomPatches 2522102".to_string(),
            "Changes in 2522102".to_string()
        )
    );
    assert_eq!(fetcher.calls(), 4);
}

#[tokio::test]
async fn test_fetch_texts_preserves_order() {
    let files = fetch_files().await;
    let fetcher = Arc::new(FakeTextFetcher {
        delay: Duration::from_millis(5),
        ..FakeTextFetcher::default()
    });

    let mapper = ParallelMapper::new(ClientConfig::default().parallel);
    let rows = mapper
        .fetch_texts(
            &files,
            fetcher.clone(),
            &[TextKind::DisplayName, TextKind::Changelog],
        )
        .await
        .unwrap();

    assert_eq!(rows.len(), files.len());
    for (row, file) in rows.iter().zip(&files) {
        assert_eq!(row[0], file.display_name);
        assert_eq!(row[1], format!("<p>Changes in {}</p>", file.id));
    }
    assert_eq!(fetcher.calls(), files.len() * 2);
}

#[tokio::test]
async fn test_failure_surfaces_extraction_error() {
    let files = fetch_files().await;
    let fetcher = Arc::new(FakeTextFetcher::failing_on([FileId::new(2634354)]));

    let err = ParallelMapper::with_concurrency(2)
        .fetch_texts(&files, fetcher, &[TextKind::Changelog])
        .await
        .unwrap_err();

    match err {
        FilesError::Extraction { file_id, source } => {
            assert_eq!(file_id, FileId::new(2634354));
            assert!(source.is_fetch());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_failure_abandons_slow_fetches() {
    let files = fetch_files().await;
    let fetcher = Arc::new(
        FakeTextFetcher::failing_on([FileId::new(2634354)]).with_delay(Duration::from_millis(200)),
    );

    let err = ParallelMapper::with_concurrency(files.len() * 2)
        .fetch_texts(
            &files,
            fetcher.clone(),
            &[TextKind::DisplayName, TextKind::Changelog],
        )
        .await
        .unwrap_err();
    assert_eq!(err.file_id(), Some(FileId::new(2634354)));

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(fetcher.completed(), 0);
}

#[tokio::test]
async fn test_cached_fetcher_in_parallel_pass() {
    let files = fetch_files().await;
    let inner = Arc::new(FakeTextFetcher::default());
    let cached: Arc<dyn TextFetcher> =
        Arc::new(CachedTextFetcher::new(inner.clone(), &TextCacheConfig::default()));

    let mapper = ParallelMapper::with_concurrency(4);
    let first = mapper
        .fetch_texts(&files, Arc::clone(&cached), &[TextKind::Changelog])
        .await
        .unwrap();
    let second = mapper
        .fetch_texts(&files, Arc::clone(&cached), &[TextKind::Changelog])
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(inner.calls(), files.len());
}
