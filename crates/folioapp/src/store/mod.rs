//! # Storage Layer
//!
//! This module defines the content store abstraction for folio. The
//! [`ContentStore`] trait gives every view the same four operations over a
//! content type, whatever persists the records:
//!
//! | operation   | contract |
//! |-------------|----------|
//! | `fetch_all` | every record, in the requested [`OrderKey`]; failures are `StoreUnavailable` |
//! | `insert`    | stores a draft, returns it with its assigned id; failures are `WriteFailure` |
//! | `update`    | rewrites the whole record with that id; a missing id is a `WriteFailure` |
//! | `delete`    | removes the record; a missing id is a no-op |
//!
//! Stores never validate drafts. Required fields are checked by the form
//! controller before a store is called.
//!
//! ## Implementations
//!
//! There are two bindings. A deployment picks one at startup and hands it to
//! [`crate::api::FolioApi`]; nothing downstream branches on which one it got.
//!
//! - [`local_store::LocalStore`]: a serialized list per content type in a
//!   persistent key-value store ([`backend::StorageBackend`]).
//!   - [`fs_backend::FsBackend`]: one JSON file per key, atomic writes.
//!   - [`mem_backend::MemBackend`]: in memory, with error simulation for tests.
//!   - Ids are `max(existing) + 1`, or `1` for an empty list.
//!
//! - [`remote_store::RemoteStore`]: rows in the `skills` and `blog_posts` tables
//!   of a remote table service ([`table::TableApi`]).
//!   - [`http_table::HttpTableApi`]: PostgREST-style HTTP client.
//!   - [`mem_table::MemTable`]: in-memory table service for tests.
//!   - Ids and timestamps are assigned by the service.
//!
//! ## Storage Layout (local)
//!
//! ```text
//! <data dir>/
//! ├── portfolio-skills.json       # JSON array of skills
//! └── portfolio-blog-posts.json   # JSON array of posts (client shape, "readTime")
//! ```

use crate::error::{FolioError, Result};
use crate::model::{ContentKind, OrderKey, Record, RecordId};

pub mod backend;
pub mod fs_backend;
pub mod http_table;
pub mod local_store;
pub mod mem_backend;
pub mod mem_table;
pub mod remote_store;
pub mod table;

/// Uniform persistence interface for one content type.
pub trait ContentStore<T: Record> {
    /// Every record of the type, ordered by `order`.
    fn fetch_all(&self, order: OrderKey) -> Result<Vec<T>>;

    /// Persist a new record. The returned copy carries the assigned id.
    fn insert(&mut self, draft: &T) -> Result<T>;

    /// Replace the record stored under `id` with `record`.
    fn update(&mut self, id: RecordId, record: &T) -> Result<()>;

    /// Remove the record stored under `id`, if any.
    fn delete(&mut self, id: RecordId) -> Result<()>;

    /// True when `fetch_all` answers with sample content that was never
    /// written to the store.
    fn serves_samples(&self) -> Result<bool> {
        Ok(false)
    }
}

pub(crate) fn unavailable(kind: ContentKind, err: FolioError) -> FolioError {
    match err {
        FolioError::StoreUnavailable(_) => err,
        other => FolioError::StoreUnavailable(format!("could not load {}: {}", kind.plural(), other)),
    }
}

pub(crate) fn write_failure(kind: ContentKind, err: FolioError) -> FolioError {
    match err {
        FolioError::WriteFailure(_) => err,
        other => FolioError::WriteFailure(format!("could not save {}: {}", kind.plural(), other)),
    }
}

pub(crate) fn missing_for_update(kind: ContentKind, id: RecordId) -> FolioError {
    FolioError::WriteFailure(format!("{} {} does not exist", kind, id))
}
