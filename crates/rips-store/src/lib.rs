//! Storage collaborator for RIPS validation.
//!
//! Validators see only the [`RecordStore`] capability: keyed fetch and
//! count-by-key. [`SqliteStore`] is the production implementation,
//! [`MemoryStore`] backs tests and demos.

pub mod browse;
pub mod error;
pub mod memory;
pub mod sqlite;
pub mod store;

pub use browse::{BrowseQuery, DEFAULT_PAGE_SIZE, Page};
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use store::{RecordStore, StoreConfig};
