//! Bulk concurrent extraction over a [`FileCollection`].
//!
//! Every element gets its own task; each extractor invocation inside a task
//! holds one semaphore permit, so at most `concurrency` invocations run at
//! once across the whole pass. Results come back in the collection's
//! iteration order at call start, never in completion order.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use futures::FutureExt;
use futures::future::{BoxFuture, try_join_all};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use curseapi_core::config::ParallelConfig;
use curseapi_core::error::AppError;
use curseapi_core::result::AppResult;
use curseapi_entity::{File, TextKind};

use crate::collection::FileCollection;
use crate::error::FilesError;
use crate::source::TextFetcher;

/// A type-erased extractor, for passing a homogeneous list to [`ParallelMapper::map_all`].
pub type Extractor<T> = Arc<dyn Fn(Arc<File>) -> BoxFuture<'static, AppResult<T>> + Send + Sync>;

/// Erase an async closure into an [`Extractor`].
pub fn extractor<T, F, Fut>(extract: F) -> Extractor<T>
where
    F: Fn(Arc<File>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = AppResult<T>> + Send + 'static,
{
    Arc::new(move |file: Arc<File>| extract(file).boxed())
}

/// Runs extractors over every element of a collection with bounded concurrency.
///
/// The first failing invocation aborts the remaining tasks and is returned
/// as [`FilesError::Extraction`]. Nothing is retried and partial results
/// are discarded.
#[derive(Debug, Clone, Default)]
pub struct ParallelMapper {
    /// Concurrency settings.
    config: ParallelConfig,
}

impl ParallelMapper {
    /// Create a mapper from configuration.
    pub fn new(config: ParallelConfig) -> Self {
        Self { config }
    }

    /// Create a mapper allowing `concurrency` simultaneous invocations.
    pub fn with_concurrency(concurrency: usize) -> Self {
        Self::new(ParallelConfig::with_concurrency(concurrency))
    }

    /// Maximum number of extractor invocations in flight.
    pub fn concurrency(&self) -> usize {
        self.config.effective_concurrency()
    }

    /// Apply one extractor to every element.
    pub async fn map<A, F, Fut>(
        &self,
        files: &FileCollection,
        extract: F,
    ) -> Result<Vec<A>, FilesError>
    where
        F: Fn(Arc<File>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = AppResult<A>> + Send + 'static,
        A: Send + 'static,
    {
        let extract = Arc::new(extract);
        self.run(files, move |file, permits| {
            let extract = Arc::clone(&extract);
            async move { limited(&permits, extract(file)).await }
        })
        .await
    }

    /// Apply two extractors to every element, returning one tuple per element.
    ///
    /// Both extractors of an element may run at the same time.
    pub async fn map2<A, B, F1, Fut1, F2, Fut2>(
        &self,
        files: &FileCollection,
        first: F1,
        second: F2,
    ) -> Result<Vec<(A, B)>, FilesError>
    where
        F1: Fn(Arc<File>) -> Fut1 + Send + Sync + 'static,
        Fut1: Future<Output = AppResult<A>> + Send + 'static,
        A: Send + 'static,
        F2: Fn(Arc<File>) -> Fut2 + Send + Sync + 'static,
        Fut2: Future<Output = AppResult<B>> + Send + 'static,
        B: Send + 'static,
    {
        let first = Arc::new(first);
        let second = Arc::new(second);
        self.run(files, move |file, permits| {
            let first = Arc::clone(&first);
            let second = Arc::clone(&second);
            async move {
                tokio::try_join!(
                    limited(&permits, first(Arc::clone(&file))),
                    limited(&permits, second(file)),
                )
            }
        })
        .await
    }

    /// Apply every extractor in `extractors` to every element.
    ///
    /// Result `i` holds one value per extractor, in the order given.
    pub async fn map_all<T>(
        &self,
        files: &FileCollection,
        extractors: &[Extractor<T>],
    ) -> Result<Vec<Vec<T>>, FilesError>
    where
        T: Send + 'static,
    {
        let extractors: Arc<[Extractor<T>]> = extractors.to_vec().into();
        self.run(files, move |file, permits| {
            let extractors = Arc::clone(&extractors);
            async move {
                try_join_all(
                    extractors
                        .iter()
                        .map(|extract| limited(&permits, extract(Arc::clone(&file)))),
                )
                .await
            }
        })
        .await
    }

    /// Fetch the given text kinds for every element through `fetcher`.
    pub async fn fetch_texts(
        &self,
        files: &FileCollection,
        fetcher: Arc<dyn TextFetcher>,
        kinds: &[TextKind],
    ) -> Result<Vec<Vec<String>>, FilesError> {
        let extractors: Vec<Extractor<String>> = kinds
            .iter()
            .map(|&kind| {
                let fetcher = Arc::clone(&fetcher);
                extractor(move |file: Arc<File>| {
                    let fetcher = Arc::clone(&fetcher);
                    async move { fetcher.fetch_text(&file, kind).await }
                })
            })
            .collect();

        self.map_all(files, &extractors).await
    }

    /// Spawn one task per element and gather results by position.
    async fn run<R, F, Fut>(
        &self,
        files: &FileCollection,
        per_file: F,
    ) -> Result<Vec<R>, FilesError>
    where
        F: Fn(Arc<File>, Arc<Semaphore>) -> Fut,
        Fut: Future<Output = AppResult<R>> + Send + 'static,
        R: Send + 'static,
    {
        let snapshot: Vec<Arc<File>> = files.files().to_vec();
        let total = snapshot.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        let started = Instant::now();
        info!(
            files = total,
            concurrency = self.concurrency(),
            "Starting parallel extraction"
        );

        let permits = Arc::new(Semaphore::new(self.concurrency()));
        let mut tasks = JoinSet::new();

        for (pos, file) in snapshot.into_iter().enumerate() {
            let file_id = file.id;
            let work = per_file(file, Arc::clone(&permits));
            tasks.spawn(async move {
                let outcome = match AssertUnwindSafe(work).catch_unwind().await {
                    Ok(result) => result,
                    Err(_) => Err(AppError::internal("Extractor panicked")),
                };
                (pos, file_id, outcome)
            });
        }

        let mut slots: Vec<Option<R>> = std::iter::repeat_with(|| None).take(total).collect();

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((pos, _, Ok(value))) => slots[pos] = Some(value),
                Ok((_, file_id, Err(source))) => {
                    warn!(%file_id, error = %source, "Extraction failed, cancelling remaining tasks");
                    tasks.shutdown().await;
                    return Err(FilesError::Extraction { file_id, source });
                }
                Err(join_err) => {
                    warn!(error = %join_err, "Extraction task did not complete");
                    tasks.shutdown().await;
                    return Err(AppError::internal(format!(
                        "Extraction task did not complete: {join_err}"
                    ))
                    .into());
                }
            }
        }

        debug!(
            files = total,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Parallel extraction complete"
        );

        slots
            .into_iter()
            .collect::<Option<Vec<R>>>()
            .ok_or_else(|| AppError::internal("Extraction finished with a missing result").into())
    }
}

/// Run `work` while holding one permit.
async fn limited<T>(
    permits: &Semaphore,
    work: impl Future<Output = AppResult<T>>,
) -> AppResult<T> {
    let _permit = permits
        .acquire()
        .await
        .map_err(|_| AppError::internal("Extraction semaphore closed"))?;
    work.await
}

impl FileCollection {
    /// Apply two extractors to every element with a default-configured [`ParallelMapper`].
    pub async fn parallel_map<A, B, F1, Fut1, F2, Fut2>(
        &self,
        first: F1,
        second: F2,
    ) -> Result<Vec<(A, B)>, FilesError>
    where
        F1: Fn(Arc<File>) -> Fut1 + Send + Sync + 'static,
        Fut1: Future<Output = AppResult<A>> + Send + 'static,
        A: Send + 'static,
        F2: Fn(Arc<File>) -> Fut2 + Send + Sync + 'static,
        Fut2: Future<Output = AppResult<B>> + Send + 'static,
        B: Send + 'static,
    {
        ParallelMapper::default().map2(self, first, second).await
    }
}
