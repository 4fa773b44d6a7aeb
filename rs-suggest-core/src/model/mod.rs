//! Top-level module for the prediction engine.
//!
//! This module provides the building blocks of next-word suggestion:
//! - Character trie over the vocabulary (`PrefixIndex`)
//! - Unigram word completion (`WordCompletor`)
//! - Word-level n-gram prediction (`ContextModel`)
//! - The orchestrating interface (`SuggestionEngine`)

/// A tokenized text: an ordered sequence of words.
pub type Text = Vec<String>;

/// The training collection: an ordered sequence of texts.
pub type Corpus = Vec<Text>;

/// Character trie mapping a prefix to the vocabulary words extending it.
///
/// Arena backed, deterministic enumeration order.
pub mod prefix_index;

/// Unigram probabilities over the vocabulary, queried by prefix.
pub mod word_completor;

/// Word n-gram model (contexts of 1 to `n` words).
///
/// Handles corpus ingestion, next-word probabilities and model merging.
pub mod context_model;

/// Next-word counts observed after a single context.
pub mod followers;

/// Query parameters and the suggestion value returned by the engine.
pub mod suggestion_request;

/// High-level interface composing completion and n-gram prediction.
///
/// Exposes prefix completion and multi-word continuation.
pub mod suggestion_engine;

/// Chunked, multi-threaded corpus counting shared by the models.
///
/// This module is not exposed publicly.
mod training;
