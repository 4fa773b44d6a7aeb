//! N-gram-based predictive text library.
//!
//! This crate provides the prediction engine behind a typing assistant:
//! - Completion of a partially typed word from corpus frequencies
//! - Next-word prediction from word n-grams
//! - Multi-word continuations combining both
//! - Corpus loading and engine configuration
//!
//! The engine is built once from a fixed corpus and is read-only afterwards.
//! Presentation concerns (filtering, deduplication, rendering) belong to the
//! caller.

/// Core models and the suggestion engine.
pub mod model;

/// Corpus loading (JSON or plain text).
pub mod io;

/// Engine construction parameters.
pub mod config;

/// Error type of the fallible boundaries.
pub mod error;

pub use config::EngineConfig;
pub use error::SuggestError;
pub use model::suggestion_engine::SuggestionEngine;
pub use model::suggestion_request::{Suggestion, SuggestionRequest};
pub use model::{Corpus, Text};
