//! # Annotation-Boundary Chunking
//!
//! Re-chunks a content block's flat annotated characters at annotation
//! changes, producing a [`ChunkedText`].
//!
//! ## Algorithm
//!
//! 1. Consecutive characters with structurally equal annotation lists are
//!    grouped into runs (`runs`).
//! 2. The longest ordered prefix shared by every run's list becomes
//!    `common_annotations` (`prefix`).
//! 3. Each run carrying more annotations than that prefix is emitted as a
//!    [`Chunk`] at its character offset (`builder`).
//!
//! ## Modules
//!
//! - **`types`**: `AnnotationId`, `AnnotatedChar`, `LinearItem`, `Chunk`, `ChunkedText`
//! - **`runs`**: `Run` and the `RunBuilder` grouping pass
//! - **`prefix`**: `common_prefix_len()` over any number of sequences
//! - **`builder`**: `ChunkedTextBuilder`, `build_chunked()`, `chunk_linear_data()`
//! - **`error`**: `InvalidInputError` for linear data that isn't characters

pub mod builder;
pub mod error;
pub mod prefix;
pub mod runs;
pub mod types;

pub use builder::{ChunkedTextBuilder, build_chunked, chunk_linear_data};
pub use error::{InvalidInputError, InvalidItem};
pub use prefix::common_prefix_len;
pub use runs::{Run, collect_runs};
pub use types::{AnnotatedChar, AnnotationId, Chunk, ChunkedText, LinearItem};
