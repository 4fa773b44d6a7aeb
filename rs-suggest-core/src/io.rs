use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::SuggestError;
use crate::model::{Corpus, Text};

/// Loads a tokenized corpus from disk.
///
/// The format is chosen from the file extension:
/// - `.json`: an array of texts, each text an array of word tokens
/// - anything else: plain text, one text per line, tokens split on whitespace
///
/// When `limit` is set, only the first `limit` texts are kept.
pub fn read_corpus<P: AsRef<Path>>(path: P, limit: Option<usize>) -> Result<Corpus, SuggestError> {
	let path = path.as_ref();
	let mut corpus = if is_json(path) { read_json_corpus(path)? } else { read_text_corpus(path)? };

	if let Some(limit) = limit {
		corpus.truncate(limit);
	}
	log::info!("Corpus loaded from {}: {} texts", path.display(), corpus.len());
	if let Some(first) = corpus.first() {
		log::debug!("Corpus example: {first:?}");
	}
	Ok(corpus)
}

/// Reads a JSON corpus (`[["the", "cat"], ["a", "dog"]]`).
pub fn read_json_corpus<P: AsRef<Path>>(path: P) -> Result<Corpus, SuggestError> {
	let path = path.as_ref();
	let file = File::open(path).map_err(|source| SuggestError::CorpusIo { path: path.to_owned(), source })?;
	serde_json::from_reader(BufReader::new(file))
		.map_err(|source| SuggestError::CorpusFormat { path: path.to_owned(), source })
}

/// Reads a plain text corpus: one text per line, whitespace separated tokens.
///
/// Blank lines become empty texts, which contribute nothing to the models.
pub fn read_text_corpus<P: AsRef<Path>>(path: P) -> Result<Corpus, SuggestError> {
	let path = path.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|source| SuggestError::CorpusIo { path: path.to_owned(), source })?;
	Ok(contents.lines().map(tokenize).collect())
}

/// Splits a line on whitespace into owned tokens.
pub fn tokenize(line: &str) -> Text {
	line.split_whitespace().map(str::to_owned).collect()
}

fn is_json(path: &Path) -> bool {
	path.extension()
		.is_some_and(|extension| extension.eq_ignore_ascii_case("json"))
}
