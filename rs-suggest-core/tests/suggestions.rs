use rs_suggest_core::model::context_model::ContextModel;
use rs_suggest_core::model::prefix_index::PrefixIndex;
use rs_suggest_core::model::word_completor::WordCompletor;
use rs_suggest_core::{EngineConfig, Suggestion, SuggestionEngine, SuggestionRequest, Text};

fn text(words: &str) -> Text {
	words.split_whitespace().map(str::to_owned).collect()
}

fn cat_corpus() -> Vec<Text> {
	vec![text("the cat sat"), text("the cat ran")]
}

fn cat_engine() -> SuggestionEngine {
	SuggestionEngine::from_corpus(&cat_corpus(), &EngineConfig { window_size: 2, threads: 1 }).unwrap()
}

fn words_of(suggestions: &[Suggestion]) -> Vec<Vec<Option<String>>> {
	suggestions.iter().map(|suggestion| suggestion.words().to_vec()).collect()
}

fn some(words: &[&str]) -> Vec<Option<String>> {
	words.iter().map(|word| Some((*word).to_owned())).collect()
}

/// A small corpus with repeated words, several sentence shapes and punctuation.
fn story_corpus() -> Vec<Text> {
	[
		"once upon a time there was a cat",
		"the cat sat on the mat",
		"the cat ran after the dog",
		"the dog sat on the cat",
		"a dog and a cat , once more",
		"",
		"there was a time",
	]
	.iter()
	.map(|line| text(line))
	.collect()
}

#[test]
fn completes_a_prefix() {
	assert_eq!(cat_engine().complete_prefix("ca", 5), vec!["cat"]);
}

#[test]
fn continues_with_both_observed_words() {
	let suggestions = cat_engine().suggest_continuation(&["the", "cat"], 1, false, 2);
	assert_eq!(words_of(&suggestions), vec![some(&["cat", "sat"]), some(&["cat", "ran"])]);
}

#[test]
fn unseen_context_gives_nothing() {
	let engine = cat_engine();
	let (words, probs) = engine.context_model().get_next_words_and_probs(&["dog"]);
	assert!(words.is_empty());
	assert!(probs.is_empty());
	assert!(engine.suggest_continuation(&["dog"], 1, false, 2).is_empty());
}

#[test]
fn correction_completes_the_last_word_first() {
	let suggestions = cat_engine().suggest_continuation(&["the", "c"], 1, true, 2);
	assert_eq!(words_of(&suggestions), vec![some(&["cat", "sat"]), some(&["cat", "ran"])]);
}

#[test]
fn without_correction_the_last_word_is_kept() {
	let engine = SuggestionEngine::from_corpus(&story_corpus(), &EngineConfig { window_size: 3, threads: 1 }).unwrap();
	for input in [vec!["the"], vec!["the", "ca"], vec!["a"], vec!["on", "the"], vec!["was", "a"]] {
		for suggestion in engine.suggest_continuation(&input, 2, false, 3) {
			assert_eq!(suggestion.words()[0].as_deref(), input.last().copied());
		}
	}
	// "ca" is no context on its own
	assert!(engine.suggest_continuation(&["the", "ca"], 1, false, 3).is_empty());
	assert!(!engine.suggest_continuation(&["the", "ca"], 1, true, 3).is_empty());
}

#[test]
fn empty_input_gives_nothing() {
	let engine = cat_engine();
	let empty: [&str; 0] = [];
	assert!(engine.suggest(&empty, &SuggestionRequest::default()).is_empty());
	assert!(engine.complete_prefix("", 3).is_empty());
	assert!(engine.complete_prefix("zzz", 3).is_empty());
}

#[test]
fn empty_corpus_builds_an_empty_engine() {
	let engine = SuggestionEngine::from_corpus(&[vec![], vec![]], &EngineConfig::default()).unwrap();
	assert_eq!(engine.word_completor().vocabulary_size(), 0);
	assert!(engine.complete_prefix("a", 3).is_empty());
	assert!(engine.suggest_continuation(&["a"], 2, true, 3).is_empty());
}

#[test]
fn zero_window_size_is_a_construction_error() {
	let result = SuggestionEngine::from_corpus(&cat_corpus(), &EngineConfig { window_size: 0, threads: 1 });
	assert!(result.is_err());
}

#[test]
fn completions_are_bounded_and_sorted() {
	let corpus = story_corpus();
	let engine = SuggestionEngine::from_corpus(&corpus, &EngineConfig::default()).unwrap();
	let completor = engine.word_completor();
	for prefix in ["t", "th", "a", "o", "c", "d", ",", "x"] {
		for top_n in [1, 2, 3, 10] {
			let completions = engine.complete_prefix(prefix, top_n);
			assert!(completions.len() <= top_n);
			let probs: Vec<f64> = completions.iter().map(|word| completor.probability(word).unwrap()).collect();
			assert!(probs.windows(2).all(|pair| pair[0] >= pair[1]), "{prefix}: {completions:?}");
		}
	}
	assert_eq!(engine.complete_prefix("th", 2), vec!["the", "there"]);
}

#[test]
fn unigram_probabilities_sum_to_one() {
	let completor = WordCompletor::new(&story_corpus());
	let sum: f64 = completor.probabilities().map(|(_, prob)| prob).sum();
	assert!((sum - 1.0).abs() < 1e-9, "sum = {sum}");
}

#[test]
fn vocabulary_and_trie_agree() {
	let corpus = story_corpus();
	let completor = WordCompletor::new(&corpus);
	let index: PrefixIndex = corpus.iter().flatten().collect();
	assert_eq!(index.len(), completor.vocabulary_size());
	let (all_words, _) = completor.get_words_and_probs("");
	assert_eq!(all_words, index.search_prefix(""));
	for word in &all_words {
		assert!(completor.probability(word).is_some());
	}
}

#[test]
fn context_totals_match_counts() {
	let model = ContextModel::from_corpus(&story_corpus(), 4).unwrap();
	for (context, followers) in model.contexts() {
		assert!((1..=4).contains(&context.len()));
		let sum: usize = followers.counts().map(|(_, count)| count).sum();
		assert_eq!(sum, followers.total());
	}
}

#[test]
fn parallel_build_answers_like_sequential_build() {
	let corpus: Vec<Text> = story_corpus().into_iter().cycle().take(7_000).collect();
	let sequential = SuggestionEngine::from_corpus(&corpus, &EngineConfig { window_size: 3, threads: 1 }).unwrap();
	let parallel = SuggestionEngine::from_corpus(&corpus, &EngineConfig { window_size: 3, threads: 4 }).unwrap();

	for prefix in ["t", "c", "o", "a"] {
		assert_eq!(sequential.complete_prefix(prefix, 4), parallel.complete_prefix(prefix, 4));
	}
	for input in [vec!["the"], vec!["the", "c"], vec!["once", "upon"], vec!["sat", "on"]] {
		let request = SuggestionRequest::new(3, true, 3);
		assert_eq!(sequential.suggest(&input, &request), parallel.suggest(&input, &request));
	}
}

#[test]
fn queries_are_repeatable() {
	let engine = SuggestionEngine::from_corpus(&story_corpus(), &EngineConfig::default()).unwrap();
	let request = SuggestionRequest::new(2, true, 3);
	let first = engine.suggest(&["the", "c"], &request);
	assert!(!first.is_empty());
	for _ in 0..5 {
		assert_eq!(engine.suggest(&["the", "c"], &request), first);
		assert_eq!(engine.complete_prefix("t", 3), engine.complete_prefix("t", 3));
	}
}

#[test]
fn shared_engine_answers_concurrent_readers() {
	let engine = SuggestionEngine::from_corpus(&story_corpus(), &EngineConfig::default()).unwrap();
	let expected = engine.suggest_continuation(&["the"], 2, false, 2);
	std::thread::scope(|scope| {
		for _ in 0..4 {
			scope.spawn(|| {
				assert_eq!(engine.suggest_continuation(&["the"], 2, false, 2), expected);
			});
		}
	});
}
