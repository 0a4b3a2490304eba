//! certmentor-core — session model, quiz parsing, and scoring.
//!
//! This crate defines the data model, the collaborator traits, and the
//! text-processing logic that the rest of certmentor builds on.

pub mod error;
pub mod model;
pub mod prompts;
pub mod quiz;
pub mod scorer;
pub mod session;
pub mod traits;
pub mod transcript;
