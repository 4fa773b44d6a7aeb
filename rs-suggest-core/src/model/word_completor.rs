use std::collections::HashMap;

use super::prefix_index::PrefixIndex;
use super::training::{accumulate, Accumulator};
use super::Text;
use crate::error::SuggestError;

/// Raw unigram counts, the part of a [`WordCompletor`] learned from the corpus.
#[derive(Clone, Debug, Default)]
struct UnigramCounts {
	counts: HashMap<String, usize>,
	total: usize,
}

impl Accumulator for UnigramCounts {
	fn fresh(&self) -> Self {
		Self::default()
	}

	fn add_text(&mut self, text: &[String]) {
		for word in text {
			*self.counts.entry(word.clone()).or_insert(0) += 1;
		}
		self.total += text.len();
	}

	fn merge(&mut self, other: &Self) -> Result<(), SuggestError> {
		for (word, count) in &other.counts {
			*self.counts.entry(word.clone()).or_insert(0) += count;
		}
		self.total += other.total;
		Ok(())
	}
}

/// Completes a partially typed word using corpus frequencies.
///
/// Every distinct corpus token is indexed in a [`PrefixIndex`] and carries its
/// unigram probability: occurrences of the word divided by the total number
/// of tokens in the corpus.
///
/// # Invariants
/// - The words of `probs` and the words of `index` are the same set
/// - The probabilities sum to 1.0 unless the corpus had no tokens, in which
///   case the table is empty
#[derive(Clone, Debug, Default)]
pub struct WordCompletor {
	probs: HashMap<String, f64>,
	index: PrefixIndex,
	total_tokens: usize,
}

impl WordCompletor {
	/// Builds the completor from a corpus on the current thread.
	pub fn new(corpus: &[Text]) -> Self {
		let mut counts = UnigramCounts::default();
		for text in corpus {
			counts.add_text(text);
		}
		Self::from_counts(counts)
	}

	/// Builds the completor, counting the corpus on `workers` threads.
	pub fn with_workers(corpus: &[Text], workers: usize) -> Result<Self, SuggestError> {
		let counts = accumulate(UnigramCounts::default(), corpus, workers)?;
		Ok(Self::from_counts(counts))
	}

	fn from_counts(counts: UnigramCounts) -> Self {
		let UnigramCounts { counts, total } = counts;
		// No tokens means no words, so there is nothing to divide
		let probs: HashMap<String, f64> = if total == 0 {
			HashMap::new()
		} else {
			counts.into_iter().map(|(word, count)| (word, count as f64 / total as f64)).collect()
		};
		let index: PrefixIndex = probs.keys().collect();

		log::info!("WordCompletor built: {} words, {} tokens", index.len(), total);
		Self { probs, index, total_tokens: total }
	}

	/// Returns the words completing `prefix`, paired by position with their
	/// unigram probabilities.
	///
	/// Both vectors are empty when no word starts with `prefix`.
	pub fn get_words_and_probs(&self, prefix: &str) -> (Vec<String>, Vec<f64>) {
		let words = self.index.search_prefix(prefix);
		let probs = words.iter().map(|word| self.probs.get(word).copied().unwrap_or(0.0)).collect();
		(words, probs)
	}

	/// Unigram probability of `word`, if it belongs to the vocabulary.
	pub fn probability(&self, word: &str) -> Option<f64> {
		self.probs.get(word).copied()
	}

	/// Number of distinct words.
	pub fn vocabulary_size(&self) -> usize {
		self.probs.len()
	}

	/// Number of tokens counted over the whole corpus.
	pub fn total_tokens(&self) -> usize {
		self.total_tokens
	}

	/// Iterates over `(word, probability)` in no particular order.
	pub fn probabilities(&self) -> impl Iterator<Item = (&str, f64)> {
		self.probs.iter().map(|(word, prob)| (word.as_str(), *prob))
	}
}
