//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use curseapi::{AppError, AppResult, File, FileId, FileSource, ProjectId, ReleaseType};
use curseapi::{TextFetcher, TextKind, VersionGroup};

/// Project used by every fixture.
pub const PROJECT: ProjectId = ProjectId::new(285612);

/// Upload-ordered fixture listing: (id, release type, versions, day of month).
const LISTING: &[(u32, ReleaseType, &[&str], u32)] = &[
    (2522102, ReleaseType::Alpha, &["1.12.2", "Forge"], 1),
    (2547163, ReleaseType::Beta, &["1.12.2", "Forge"], 3),
    (2581245, ReleaseType::Release, &["1.12.2", "Forge"], 6),
    (2634354, ReleaseType::Beta, &["1.12.2", "Forge"], 9),
    (2700000, ReleaseType::Release, &["1.14.4", "Forge"], 12),
    (2831330, ReleaseType::Release, &["1.12.2", "Forge"], 15),
];

/// Files of the fixture project, deliberately out of order.
pub fn project_files() -> Vec<File> {
    let mut files: Vec<File> = LISTING
        .iter()
        .map(|&(id, release, versions, day)| {
            File::new(PROJECT, FileId::new(id))
                .with_display_name(format!("RandomPatches {id}"))
                .with_file_name(format!("randompatches-{id}.jar"))
                .with_release_type(release)
                .with_game_versions(versions.iter().copied())
                .with_upload_time(Utc.with_ymd_and_hms(2019, 6, day, 12, 0, 0).unwrap())
        })
        .collect();
    files.reverse();
    files
}

/// The version group containing 1.12.2.
pub fn group_1_12() -> VersionGroup {
    VersionGroup::new("1.12", ["1.12", "1.12.1", "1.12.2"])
}

/// A file source serving a fixed listing for one project.
#[derive(Debug)]
pub struct StaticSource {
    pub files: Vec<File>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self {
            files: project_files(),
        }
    }
}

#[async_trait]
impl FileSource for StaticSource {
    async fn fetch_file_list(&self, project_id: ProjectId) -> AppResult<Vec<File>> {
        if project_id != PROJECT {
            return Err(AppError::fetch(format!("Project {project_id} not found")));
        }
        Ok(self.files.clone())
    }
}

/// A text fetcher that fabricates text, optionally failing for chosen files.
#[derive(Debug, Default)]
pub struct FakeTextFetcher {
    pub failing: HashSet<FileId>,
    pub delay: Duration,
    pub calls: AtomicUsize,
    pub completed: AtomicUsize,
    pub seen: Mutex<Vec<(FileId, TextKind)>>,
}

impl FakeTextFetcher {
    pub fn failing_on(ids: impl IntoIterator<Item = FileId>) -> Self {
        Self {
            failing: ids.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextFetcher for FakeTextFetcher {
    async fn fetch_text(&self, file: &File, kind: TextKind) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut seen) = self.seen.lock() {
            seen.push((file.id, kind));
        }
        if self.failing.contains(&file.id) {
            return Err(AppError::fetch(format!("{kind} of file {} unavailable", file.id)));
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.completed.fetch_add(1, Ordering::SeqCst);
        Ok(match kind {
            TextKind::DisplayName => file.display_name.clone(),
            TextKind::Changelog => format!("<p>Changes in {}</p>", file.id),
            TextKind::ChangelogPlainText => format!("Changes in {}", file.id),
        })
    }
}
