use std::io;
use std::path::PathBuf;

/// Errors raised at the fallible boundaries of the engine.
///
/// Queries never fail: an unknown prefix or context simply yields an empty
/// result. Only model construction and corpus loading can go wrong.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
	/// A context model needs at least one word of context.
	#[error("window size must be >= 1, got {0}")]
	InvalidWindowSize(usize),

	/// Two context models with different window sizes cannot be merged.
	#[error("window size mismatch: self={left}, other={right}")]
	WindowMismatch { left: usize, right: usize },

	/// The corpus file could not be read.
	#[error("failed to read corpus {}: {source}", path.display())]
	CorpusIo {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The corpus file is not a JSON array of arrays of strings.
	#[error("failed to parse corpus {}: {source}", path.display())]
	CorpusFormat {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}
