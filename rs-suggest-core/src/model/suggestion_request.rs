/// Parameters of a multi-word continuation query.
///
/// # Responsibilities
/// - Track how many words each suggestion adds after the (corrected) last word
/// - Track whether the last word is first completed by the word completor
/// - Track how many alternative suggestions are requested
///
/// Zero values are accepted and make the engine return no suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuggestionRequest {
	/// Number of words appended after the last input word.
	pub words_per_suggestion: usize,

	/// Whether the last input word is replaced by its best completion first.
	pub apply_correction: bool,

	/// Number of suggestion branches to return, at most.
	pub num_suggestions: usize,
}

impl Default for SuggestionRequest {
	/// One next word, one suggestion, with correction of the last word.
	fn default() -> Self {
		Self { words_per_suggestion: 1, apply_correction: true, num_suggestions: 1 }
	}
}

impl SuggestionRequest {
	/// Builds a request; zero counts are kept as is (see [`is_satisfiable`](Self::is_satisfiable)).
	pub fn new(words_per_suggestion: usize, apply_correction: bool, num_suggestions: usize) -> Self {
		Self { words_per_suggestion, apply_correction, num_suggestions }
	}

	/// Length of every suggestion produced for this request.
	pub fn suggestion_len(&self) -> usize {
		self.words_per_suggestion + 1
	}

	/// A request the engine can answer with at least one word.
	pub fn is_satisfiable(&self) -> bool {
		self.words_per_suggestion > 0 && self.num_suggestions > 0
	}
}

/// One proposed continuation of the user's text.
///
/// The first word is the (possibly corrected) last input word; the following
/// ones are predicted. A `None` marks a position where no continuation was
/// known: once a word is missing, every later position is missing too.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
	words: Vec<Option<String>>,
}

impl Suggestion {
	pub(crate) fn new(words: Vec<Option<String>>) -> Self {
		Self { words }
	}

	/// Every position, `None` where no word was predicted.
	pub fn words(&self) -> &[Option<String>] {
		&self.words
	}

	/// Number of positions, missing ones included.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// True when the suggestion has no position at all.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// True when no position is missing.
	pub fn is_complete(&self) -> bool {
		self.words.iter().all(Option::is_some)
	}

	/// The words joined by single spaces, or `None` if the suggestion is incomplete.
	pub fn to_text(&self) -> Option<String> {
		let words: Option<Vec<&str>> = self.words.iter().map(Option::as_deref).collect();
		words.map(|words| words.join(" "))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_request_asks_for_one_corrected_word() {
		let request = SuggestionRequest::default();
		assert_eq!(request.suggestion_len(), 2);
		assert!(request.apply_correction);
		assert!(request.is_satisfiable());
		assert!(!SuggestionRequest::new(0, false, 3).is_satisfiable());
		assert!(!SuggestionRequest::new(2, false, 0).is_satisfiable());
	}

	#[test]
	fn incomplete_suggestion_has_no_text() {
		let complete = Suggestion::new(vec![Some("the".into()), Some("cat".into())]);
		assert!(complete.is_complete());
		assert_eq!(complete.to_text().as_deref(), Some("the cat"));

		let incomplete = Suggestion::new(vec![Some("the".into()), Some("cat".into()), None]);
		assert!(!incomplete.is_complete());
		assert_eq!(incomplete.len(), 3);
		assert_eq!(incomplete.to_text(), None);
	}
}
