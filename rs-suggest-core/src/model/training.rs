use std::sync::mpsc;
use std::thread;

use crate::error::SuggestError;
use crate::model::Text;

/// Number of chunks handed out per worker thread.
const CHUNKS_PER_WORKER: usize = 8;

/// Below this many texts per chunk the corpus is counted on the caller's thread.
const MIN_TEXTS_PER_CHUNK: usize = 64;

/// A count table that can be filled from texts and combined with another one.
///
/// Implementors are the counting halves of the models: partial tables are
/// built independently on worker threads and merged into the final one.
/// Workers share an empty template table to create their partial tables,
/// hence the `Sync` bound.
pub(crate) trait Accumulator: Send + Sync + Sized {
	/// Returns an empty table configured like `self`.
	fn fresh(&self) -> Self;

	/// Counts one text.
	fn add_text(&mut self, text: &[String]);

	/// Adds every count of `other` into `self`.
	fn merge(&mut self, other: &Self) -> Result<(), SuggestError>;
}

/// Counts `corpus` into `table`, spreading the work over `workers` threads.
///
/// # Behavior
/// - Splits the corpus into `workers * 8` chunks.
/// - Spawns `workers` scoped threads; each one counts every `workers`-th chunk
///   into a fresh partial table.
/// - Hands the partial tables over a rendezvous channel and merges them while
///   the other threads keep counting.
///
/// A worker only gives up its partial table once the merge loop takes it, so
/// at most one partial table per worker (plus the one being merged) is alive
/// at any time.
///
/// With a single worker, or when chunks would be too small to be worth a
/// thread, the corpus is counted sequentially. Both paths give the same counts.
///
/// # Errors
/// Returns the first merge error; the remaining workers stop at their next
/// hand-over.
pub(crate) fn accumulate<A: Accumulator>(mut table: A, corpus: &[Text], workers: usize) -> Result<A, SuggestError> {
	let chunks = workers.max(1) * CHUNKS_PER_WORKER;
	let chunk_size = corpus.len().div_ceil(chunks);

	if workers <= 1 || chunk_size < MIN_TEXTS_PER_CHUNK {
		for text in corpus {
			table.add_text(text);
		}
		return Ok(table);
	}

	let chunks: Vec<&[Text]> = corpus.chunks(chunk_size).collect();
	let template = table.fresh();

	let (tx, rx) = mpsc::sync_channel::<A>(0);
	thread::scope(|scope| {
		for worker in 0..workers {
			let tx = tx.clone();
			let chunks = &chunks;
			let template = &template;
			scope.spawn(move || {
				for chunk in chunks.iter().skip(worker).step_by(workers) {
					let mut partial = template.fresh();
					for text in *chunk {
						partial.add_text(text);
					}
					if tx.send(partial).is_err() {
						// The merge loop stopped on an error
						return;
					}
				}
			});
		}
		drop(tx);

		for partial in rx {
			table.merge(&partial)?;
		}
		Ok::<(), SuggestError>(())
	})?;

	log::debug!("Corpus counted on {} chunks of {} texts by {} workers", chunks.len(), chunk_size, workers);
	Ok(table)
}
