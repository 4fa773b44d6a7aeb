use serde::Deserialize;

/// Default maximum context length, in words.
pub const DEFAULT_WINDOW_SIZE: usize = 4;

/// Construction parameters for a [`SuggestionEngine`](crate::model::suggestion_engine::SuggestionEngine).
///
/// Every field has a default so a partial TOML table (or none at all)
/// deserializes into a usable configuration. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
	/// Maximum number of preceding words the context model looks at (`N`).
	#[serde(default = "default_window_size")]
	pub window_size: usize,

	/// Worker threads used while counting the corpus.
	///
	/// `0` means one per logical CPU, `1` builds sequentially.
	#[serde(default)]
	pub threads: usize,
}

fn default_window_size() -> usize {
	DEFAULT_WINDOW_SIZE
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self { window_size: DEFAULT_WINDOW_SIZE, threads: 0 }
	}
}

impl EngineConfig {
	/// Resolves `threads` into an actual worker count (always >= 1).
	pub fn worker_count(&self) -> usize {
		if self.threads == 0 { num_cpus::get().max(1) } else { self.threads }
	}
}
