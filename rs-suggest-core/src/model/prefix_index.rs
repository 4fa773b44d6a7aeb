use std::collections::BTreeMap;

/// Handle of a node inside the arena.
type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Clone, Debug, Default)]
struct Node {
	/// Outgoing edges, ordered by character so enumeration is deterministic.
	children: BTreeMap<char, NodeId>,
	/// The path from the root to this node spells an indexed word.
	is_word: bool,
}

/// A character trie answering "which words start with this prefix".
///
/// Nodes live in a single arena (`Vec<Node>`) and refer to their children by
/// index, the root being the first slot. Every character, including digits,
/// punctuation and non-ASCII letters, is an ordinary edge: no normalization
/// takes place.
///
/// # Invariants
/// - `nodes` is never empty (the root always exists)
/// - `words` equals the number of nodes with `is_word == true`
#[derive(Clone, Debug)]
pub struct PrefixIndex {
	nodes: Vec<Node>,
	words: usize,
}

impl Default for PrefixIndex {
	fn default() -> Self {
		Self::new()
	}
}

impl PrefixIndex {
	/// Creates an empty index containing only the root.
	pub fn new() -> Self {
		Self { nodes: vec![Node::default()], words: 0 }
	}

	/// Adds a word, creating intermediate nodes as needed.
	///
	/// Inserting a word that is already present has no effect.
	pub fn insert(&mut self, word: &str) {
		let mut node = ROOT;
		for c in word.chars() {
			node = match self.nodes[node].children.get(&c) {
				Some(&child) => child,
				None => {
					let child = self.nodes.len();
					self.nodes.push(Node::default());
					self.nodes[node].children.insert(c, child);
					child
				}
			};
		}

		if !self.nodes[node].is_word {
			self.nodes[node].is_word = true;
			self.words += 1;
		}
	}

	/// Returns every indexed word starting with `prefix`.
	///
	/// `prefix` itself is included when it is a word. An unknown prefix gives
	/// an empty vector, the empty prefix gives the whole vocabulary. Words come
	/// out in depth-first, character-ordered sequence.
	pub fn search_prefix(&self, prefix: &str) -> Vec<String> {
		let mut result = Vec::new();
		if let Some(node) = self.find(prefix) {
			let mut path = prefix.to_owned();
			self.collect_words(node, &mut path, &mut result);
		}
		result
	}

	/// Checks whether `word` was inserted as a complete word.
	pub fn contains(&self, word: &str) -> bool {
		self.find(word).is_some_and(|node| self.nodes[node].is_word)
	}

	/// Number of distinct words in the index.
	pub fn len(&self) -> usize {
		self.words
	}

	/// True when no word was inserted.
	pub fn is_empty(&self) -> bool {
		self.words == 0
	}

	/// Walks down the trie along `prefix`.
	fn find(&self, prefix: &str) -> Option<NodeId> {
		let mut node = ROOT;
		for c in prefix.chars() {
			node = *self.nodes[node].children.get(&c)?;
		}
		Some(node)
	}

	fn collect_words(&self, node: NodeId, path: &mut String, result: &mut Vec<String>) {
		let node = &self.nodes[node];
		if node.is_word {
			result.push(path.clone());
		}
		for (&c, &child) in &node.children {
			path.push(c);
			self.collect_words(child, path, result);
			path.pop();
		}
	}
}

impl<S: AsRef<str>> FromIterator<S> for PrefixIndex {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		let mut index = Self::new();
		for word in iter {
			index.insert(word.as_ref());
		}
		index
	}
}
