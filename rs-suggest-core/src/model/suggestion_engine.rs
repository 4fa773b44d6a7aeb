use super::context_model::ContextModel;
use super::suggestion_request::{Suggestion, SuggestionRequest};
use super::word_completor::WordCompletor;
use super::Text;
use crate::config::EngineConfig;
use crate::error::SuggestError;

/// High-level suggestion interface combining word completion and next-word
/// prediction.
///
/// # Responsibilities
/// - Rank completions of a partially typed word
/// - Optionally correct the last word of a text before predicting
/// - Extend a text by one or more words, as several ranked alternatives
///
/// The engine is immutable once built: every query is a pure read, so a
/// single instance can be shared by reference (or behind an `Arc`) between
/// any number of threads.
#[derive(Clone, Debug)]
pub struct SuggestionEngine {
	word_completor: WordCompletor,
	context_model: ContextModel,
}

impl SuggestionEngine {
	/// Assembles an engine from already built models.
	pub fn new(word_completor: WordCompletor, context_model: ContextModel) -> Self {
		Self { word_completor, context_model }
	}

	/// Builds both models from `corpus`.
	///
	/// # Errors
	/// Returns an error if `config.window_size` is 0.
	pub fn from_corpus(corpus: &[Text], config: &EngineConfig) -> Result<Self, SuggestError> {
		let workers = config.worker_count();
		log::debug!("Building engine from {} texts on {} workers", corpus.len(), workers);

		let word_completor = WordCompletor::with_workers(corpus, workers)?;
		let context_model = ContextModel::with_workers(corpus, config.window_size, workers)?;
		Ok(Self::new(word_completor, context_model))
	}

	pub fn word_completor(&self) -> &WordCompletor {
		&self.word_completor
	}

	pub fn context_model(&self) -> &ContextModel {
		&self.context_model
	}

	/// Returns up to `top_n` words completing `prefix`, most probable first.
	///
	/// Equal probabilities are ordered by descending word so the result never
	/// depends on hash map iteration order. An empty prefix gives no result.
	pub fn complete_prefix(&self, prefix: &str, top_n: usize) -> Vec<String> {
		if prefix.is_empty() || top_n == 0 {
			return Vec::new();
		}
		let (words, probs) = self.word_completor.get_words_and_probs(prefix);
		let completions = top_n_words(words, probs, top_n);
		log::debug!("prefix: {prefix:?} completions: {completions:?}");
		completions
	}

	/// Positional shorthand for [`suggest`](Self::suggest).
	pub fn suggest_continuation<S: AsRef<str>>(
		&self,
		words: &[S],
		words_per_suggestion: usize,
		apply_correction: bool,
		num_suggestions: usize,
	) -> Vec<Suggestion> {
		self.suggest(words, &SuggestionRequest::new(words_per_suggestion, apply_correction, num_suggestions))
	}

	/// Proposes continuations of `words`.
	///
	/// # Behavior
	/// - With `apply_correction`, the last word is replaced by its most probable
	///   completion, if it has one.
	/// - The `num_suggestions` most probable next words start one branch each.
	/// - Each branch is then extended greedily, one most probable word at a
	///   time, over a window sliding along the words chosen so far.
	///
	/// Every returned suggestion holds `1 + words_per_suggestion` positions,
	/// starting with the (corrected) last word. A branch that runs out of
	/// known continuations is padded with `None` rather than shortened.
	///
	/// # Returns
	/// An empty vector when `words` is empty, when the request asks for zero
	/// words or zero suggestions, or when the context was never observed.
	pub fn suggest<S: AsRef<str>>(&self, words: &[S], request: &SuggestionRequest) -> Vec<Suggestion> {
		if words.is_empty() || !request.is_satisfiable() {
			return Vec::new();
		}

		let mut text: Text = words.iter().map(|word| word.as_ref().to_owned()).collect();
		if request.apply_correction {
			if let Some(last) = text.last_mut() {
				if let Some(completion) = self.best_completion(last) {
					*last = completion;
				}
			}
		}
		let Some(last_word) = text.last().cloned() else {
			return Vec::new();
		};

		let (next_words, probs) = self.context_model.get_next_words_and_probs(&text);
		let next_words = top_n_words(next_words, probs, request.num_suggestions);
		log::debug!("words: {text:?} next words: {next_words:?}");
		if next_words.is_empty() {
			return Vec::new();
		}

		next_words
			.into_iter()
			.map(|next_word| self.extend(&text, last_word.clone(), next_word, request.suggestion_len()))
			.collect()
	}

	/// Most probable completion of `prefix`; the first one wins on ties.
	fn best_completion(&self, prefix: &str) -> Option<String> {
		if prefix.is_empty() {
			return None;
		}
		let (words, probs) = self.word_completor.get_words_and_probs(prefix);
		top_word(words, probs)
	}

	/// Grows one suggestion branch to `len` positions.
	fn extend(&self, text: &[String], last_word: String, next_word: String, len: usize) -> Suggestion {
		let n = self.context_model.window_size();
		let start = text.len().saturating_sub(n);
		let mut window: Text = text[start..].to_vec();
		push_sliding(&mut window, next_word.clone(), n);

		let mut words = Vec::with_capacity(len);
		words.push(Some(last_word));
		words.push(Some(next_word));

		while words.len() < len {
			let (candidates, probs) = self.context_model.get_next_words_and_probs(&window);
			match top_word(candidates, probs) {
				Some(word) => {
					push_sliding(&mut window, word.clone(), n);
					words.push(Some(word));
				}
				None => words.resize(len, None),
			}
		}
		Suggestion::new(words)
	}
}

/// Appends `word` to `window`, dropping the oldest word past `n` words.
fn push_sliding(window: &mut Text, word: String, n: usize) {
	window.push(word);
	if window.len() > n {
		let excess = window.len() - n;
		window.drain(..excess);
	}
}

/// Keeps the `n` most probable words, ties ordered by descending word.
fn top_n_words(words: Vec<String>, probs: Vec<f64>, n: usize) -> Vec<String> {
	let mut scored: Vec<(String, f64)> = words.into_iter().zip(probs).collect();
	scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
	scored.truncate(n);
	scored.into_iter().map(|(word, _)| word).collect()
}

/// The first word with the strictly highest positive probability.
fn top_word(words: Vec<String>, probs: Vec<f64>) -> Option<String> {
	let mut best: Option<String> = None;
	let mut max_prob = 0.0;
	for (word, prob) in words.into_iter().zip(probs) {
		if prob > max_prob {
			max_prob = prob;
			best = Some(word);
		}
	}
	best
}
