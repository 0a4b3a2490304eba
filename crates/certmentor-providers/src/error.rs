//! Provider error types.
//!
//! The enum lives in `certmentor-core` so the session can classify
//! failures; re-exported here for provider implementations.

pub use certmentor_core::error::GenerationError;
