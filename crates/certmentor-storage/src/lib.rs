//! certmentor-storage — blob-store backends for transcripts.
//!
//! Implements the `BlobStore` trait for S3-compatible HTTP endpoints and
//! the local filesystem, plus an in-memory store for tests.

pub mod config;
pub mod error;
pub mod local;
pub mod memory;
pub mod s3;

pub use config::{create_store, StoreConfig};
pub use error::StorageError;
pub use local::LocalStore;
pub use memory::MemoryStore;
pub use s3::S3Store;
