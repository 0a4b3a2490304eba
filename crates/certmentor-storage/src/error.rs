//! Storage error types.
//!
//! The enum lives in `certmentor-core` so the session can classify
//! failures; re-exported here for store implementations.

pub use certmentor_core::error::StorageError;
