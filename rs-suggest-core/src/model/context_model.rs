use std::collections::HashMap;

use super::followers::Followers;
use super::training::{accumulate, Accumulator};
use super::Text;
use crate::error::SuggestError;

/// Word-level n-gram model predicting the next word from the preceding ones.
///
/// For every position in every text, contexts of each length from 1 up to the
/// window size `n` are recorded together with the word that follows them.
/// Lookups always use the longest available suffix of the query (at most `n`
/// words) and do not back off to shorter contexts on a miss.
///
/// # Responsibilities
/// - Build the context table from a tokenized corpus
/// - Turn the counts of a context into next-word probabilities
/// - Merge with another model of the same window size
///
/// # Invariants
/// - `n` is always >= 1
/// - Every key of `contexts` has between 1 and `n` words
/// - For every context, `Followers::total` equals the sum of its counts
#[derive(Clone, Debug)]
pub struct ContextModel {
	/// Maximum context length, in words.
	n: usize,

	/// Mapping from a context to the words observed right after it.
	contexts: HashMap<Vec<String>, Followers>,
}

impl ContextModel {
	/// Creates an empty model with a window of `n` words.
	///
	/// # Errors
	/// Returns an error if `n < 1`.
	pub fn new(n: usize) -> Result<Self, SuggestError> {
		if n < 1 {
			return Err(SuggestError::InvalidWindowSize(n));
		}
		Ok(Self { n, contexts: HashMap::new() })
	}

	/// Builds a model of window `n` from a corpus on the current thread.
	pub fn from_corpus(corpus: &[Text], n: usize) -> Result<Self, SuggestError> {
		let mut model = Self::new(n)?;
		for text in corpus {
			model.add_text(text);
		}
		model.log_built();
		Ok(model)
	}

	/// Builds a model of window `n`, counting the corpus on `workers` threads.
	pub fn with_workers(corpus: &[Text], n: usize, workers: usize) -> Result<Self, SuggestError> {
		let model = accumulate(Self::new(n)?, corpus, workers)?;
		model.log_built();
		Ok(model)
	}

	fn log_built(&self) {
		log::info!("ContextModel built: window {}, {} contexts", self.n, self.contexts.len());
	}

	/// Records every context of length 1..=n found in `text`.
	///
	/// Texts of fewer than two words carry no transition and are ignored.
	pub fn add_text(&mut self, text: &[String]) {
		for i in 0..text.len() {
			let end = text.len().min(i + self.n + 1);
			for j in i + 1..end {
				let context = &text[i..j];
				match self.contexts.get_mut(context) {
					Some(followers) => followers.add(&text[j]),
					None => {
						let mut followers = Followers::default();
						followers.add(&text[j]);
						self.contexts.insert(context.to_vec(), followers);
					}
				}
			}
		}
	}

	/// Returns the words seen after the last `n` words of `prefix`, paired by
	/// position with their relative frequencies.
	///
	/// The context is the whole of `prefix` when it is shorter than `n`. Both
	/// vectors are empty when that exact context was never observed.
	pub fn get_next_words_and_probs<S: AsRef<str>>(&self, prefix: &[S]) -> (Vec<String>, Vec<f64>) {
		match self.followers(prefix) {
			Some(followers) => followers.probabilities(),
			None => (Vec::new(), Vec::new()),
		}
	}

	/// Number of times the context (truncated to its last `n` words) was seen.
	pub fn context_total<S: AsRef<str>>(&self, context: &[S]) -> Option<usize> {
		self.followers(context).map(Followers::total)
	}

	/// Number of times `word` followed the context.
	pub fn count<S: AsRef<str>>(&self, context: &[S], word: &str) -> usize {
		self.followers(context).map_or(0, |followers| followers.count(word))
	}

	/// Iterates over every recorded context and its followers.
	pub fn contexts(&self) -> impl Iterator<Item = (&[String], &Followers)> {
		self.contexts.iter().map(|(context, followers)| (context.as_slice(), followers))
	}

	/// Maximum context length `n`.
	pub fn window_size(&self) -> usize {
		self.n
	}

	fn followers<S: AsRef<str>>(&self, prefix: &[S]) -> Option<&Followers> {
		let start = prefix.len().saturating_sub(self.n);
		let context: Vec<String> = prefix[start..].iter().map(|word| word.as_ref().to_owned()).collect();
		self.contexts.get(&context)
	}

	/// Merges another context model into this one.
	///
	/// # Notes
	/// - Both models must have the same window size `n`.
	/// - Counts of matching contexts are summed.
	///
	/// # Errors
	/// Returns an error if the window sizes do not match.
	pub fn merge(&mut self, other: &Self) -> Result<(), SuggestError> {
		if self.n != other.n {
			return Err(SuggestError::WindowMismatch { left: self.n, right: other.n });
		}

		for (context, followers) in &other.contexts {
			if let Some(existing) = self.contexts.get_mut(context) {
				existing.merge(followers);
			} else {
				self.contexts.insert(context.clone(), followers.clone());
			}
		}

		Ok(())
	}
}

impl Accumulator for ContextModel {
	fn fresh(&self) -> Self {
		Self { n: self.n, contexts: HashMap::new() }
	}

	fn add_text(&mut self, text: &[String]) {
		ContextModel::add_text(self, text);
	}

	fn merge(&mut self, other: &Self) -> Result<(), SuggestError> {
		ContextModel::merge(self, other)
	}
}
