//! Common library for the student roster application
//!
//! This crate provides the persistence layer shared by the roster service:
//! whole-document JSON storage behind the [`store::DocumentStore`] trait and
//! the typed [`store::Documents`] gateway used by repositories.

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{DocumentStore, Documents, JsonFileStore, MemoryDocumentStore};
