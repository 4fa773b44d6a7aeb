use std::collections::BTreeMap;

/// Words observed right after one context, with their occurrence counts.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges are
/// weighted by their number of observations.
///
/// ## Invariants
/// - `total` equals the sum of all counts
/// - Each count is strictly positive
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Followers {
	/// Next word -> number of times it followed the context.
	/// Example: { "sat" => 42, "ran" => 3 }
	counts: BTreeMap<String, usize>,
	total: usize,
}

impl Followers {
	/// Records one occurrence of `word` after the context.
	pub fn add(&mut self, word: &str) {
		match self.counts.get_mut(word) {
			Some(count) => *count += 1,
			None => {
				self.counts.insert(word.to_owned(), 1);
			}
		}
		self.total += 1;
	}

	/// Number of times the context itself was observed.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Occurrences of `word` after the context (0 if never seen).
	pub fn count(&self, word: &str) -> usize {
		self.counts.get(word).copied().unwrap_or(0)
	}

	/// Iterates over `(word, count)` in word order.
	pub fn counts(&self) -> impl Iterator<Item = (&str, usize)> {
		self.counts.iter().map(|(word, count)| (word.as_str(), *count))
	}

	/// Converts counts to relative frequencies, paired by position.
	///
	/// Returns empty vectors when nothing was recorded.
	pub fn probabilities(&self) -> (Vec<String>, Vec<f64>) {
		if self.total == 0 {
			return (Vec::new(), Vec::new());
		}
		let total = self.total as f64;
		self.counts.iter().map(|(word, count)| (word.clone(), *count as f64 / total)).unzip()
	}

	/// Sums the counts of `other` into this one.
	///
	/// Used to combine partial tables counted on separate threads.
	pub fn merge(&mut self, other: &Self) {
		for (word, count) in &other.counts {
			*self.counts.entry(word.clone()).or_insert(0) += count;
		}
		self.total += other.total;
	}
}
