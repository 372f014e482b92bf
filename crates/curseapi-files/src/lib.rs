//! Versioned file collection engine for CurseAPI.
//!
//! This crate provides:
//! - [`FileCollection`], an ordered, id-keyed set of project files
//! - [`FileComparator`] orderings, including `SORT_BY_OLDEST` and `SORT_BY_NEWEST`
//! - [`FileFilter`], composable stability/version/range/id predicates
//! - [`ParallelMapper`], bounded concurrent extraction over a collection
//! - [`FileSource`] and [`TextFetcher`], the collaborator seams for remote data
//! - [`CachedTextFetcher`], a moka-backed memoizing text fetcher

pub mod cache;
pub mod collection;
pub mod comparator;
pub mod error;
pub mod filter;
pub mod parallel;
pub mod source;

pub use cache::CachedTextFetcher;
pub use collection::FileCollection;
pub use comparator::FileComparator;
pub use error::FilesError;
pub use filter::FileFilter;
pub use parallel::{Extractor, ParallelMapper, extractor};
pub use source::{FileSource, TextFetcher};
