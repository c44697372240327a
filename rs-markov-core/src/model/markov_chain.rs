use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use rand::Rng;

use super::hasher;
use super::state::{State, StateId};
use crate::error::{ChainError, Result};

/// A variable-order Markov chain over an arbitrary token type.
///
/// The chain slides a window of `chain_size` tokens across its input,
/// deduplicates the windows into states, and accumulates weighted
/// transition counts between consecutive windows. Generation performs a
/// weighted random walk over that graph, emitting each visited state's
/// representative token.
///
/// # Responsibilities
/// - Own all states for its whole lifetime (append-only arena)
/// - Build the transition graph from one or more token sequences
/// - Drive generation with a caller-supplied random source
///
/// # Invariants
/// - `chain_size >= 1`
/// - One state per distinct window; lookups verify window equality on a
///   digest hit, so a digest collision is reported instead of silently
///   merging unrelated windows
/// - States are never removed or merged after creation; transition targets
///   (arena indices) therefore stay valid for the chain's whole lifetime
/// - Construction consumes no randomness: the graph built from a given
///   input is identical regardless of any seed
///
/// # Concurrency
/// Not synchronized. Either serialize all access through a single owner,
/// or finish construction first and share the chain read-only (`generate`
/// takes `&self`, so concurrent generation over a fully built chain is
/// safe as long as each caller brings its own random generator).
#[derive(Clone, Debug)]
pub struct MarkovChain<T> {
	/// Window length: the number of tokens identifying a state.
	chain_size: usize,
	/// All states, owned by the chain. A state's `StateId` is its slot here.
	states: Vec<State<T>>,
	/// Deduplication index from window digest to arena slot.
	index: HashMap<u64, StateId>,
}

impl<T: Clone + Eq + Hash> MarkovChain<T> {
	/// Creates an empty chain with the given window length.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `chain_size < 1`.
	pub fn new(chain_size: usize) -> Result<Self> {
		if chain_size < 1 {
			return Err(ChainError::InvalidConfiguration(chain_size));
		}
		Ok(Self {
			chain_size,
			states: Vec::new(),
			index: HashMap::new(),
		})
	}

	/// Returns the window length this chain was configured with.
	pub fn chain_size(&self) -> usize {
		self.chain_size
	}

	/// Returns the number of distinct windows observed so far.
	pub fn state_count(&self) -> usize {
		self.states.len()
	}

	/// Returns `true` if no data has been added yet.
	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Builds or extends the graph from an ordered token sequence.
	///
	/// Every contiguous window of `chain_size` tokens becomes a state
	/// (deduplicated against all previously observed windows, including
	/// those from earlier calls), and every consecutive window pair gets
	/// its transition count incremented. Feeding the same sequence twice
	/// doubles every transition count.
	///
	/// Each call is one independent sequence: no transition is recorded
	/// from the last window of one call to the first window of the next.
	///
	/// # Errors
	/// - `InsufficientData` if the sequence is shorter than `chain_size`.
	///   The chain is left untouched and stays usable.
	/// - `DigestCollision` if two distinct windows hash identically.
	pub fn add_data(&mut self, tokens: &[T]) -> Result<()> {
		if tokens.len() < self.chain_size {
			return Err(ChainError::InsufficientData {
				expected: self.chain_size,
				actual: tokens.len(),
			});
		}

		let mut previous: Option<StateId> = None;
		for window in tokens.windows(self.chain_size) {
			let id = self.find_or_create(window)?;
			if let Some(previous) = previous {
				self.states[previous].add_transition(id);
			}
			previous = Some(id);
		}

		Ok(())
	}

	/// Looks up the state for `window`, creating it on first sight.
	///
	/// A digest hit is verified against the stored window before being
	/// reused, so two distinct windows can never merge silently.
	fn find_or_create(&mut self, window: &[T]) -> Result<StateId> {
		let digest = hasher::digest(window);
		if let Some(&id) = self.index.get(&digest) {
			if self.states[id].all_tokens() != window {
				return Err(ChainError::DigestCollision { digest });
			}
			return Ok(id);
		}

		let id = self.states.len();
		self.states.push(State::new(window.to_vec()));
		self.index.insert(digest, id);
		Ok(id)
	}

	/// Generates a token sequence of at most `length` tokens.
	///
	/// Starts from a uniformly random state, emits its token, then walks
	/// the graph by weighted random draws, emitting one token per step.
	/// The walk stops early the first time it reaches a terminal state
	/// (one with no outgoing transitions); a short result is expected,
	/// valid behavior, not an error.
	///
	/// The generator is caller-supplied: pass `rand::rng()` for varied
	/// output or a seeded `StdRng` for reproducible output.
	///
	/// # Errors
	/// Returns `EmptyChain` if no data has been added yet.
	pub fn generate<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Result<Vec<T>> {
		if self.states.is_empty() {
			return Err(ChainError::EmptyChain);
		}

		let mut result = Vec::with_capacity(length);
		if length == 0 {
			return Ok(result);
		}

		let mut current = rng.random_range(0..self.states.len());
		result.push(self.states[current].emit().clone());

		for _ in 1..length {
			match self.states[current].next(rng) {
				Some(id) => {
					current = id;
					result.push(self.states[current].emit().clone());
				}
				None => break,
			}
		}

		Ok(result)
	}
}

impl<T: Clone + Eq + Hash + Display> MarkovChain<T> {
	/// Renders every state's window and transition table, one state per
	/// line, in creation order.
	///
	/// Diagnostic only: the format and ordering carry no semantic contract.
	pub fn debug_dump(&self) -> String {
		let mut result = String::new();
		for state in &self.states {
			result.push_str(&Self::format_window(state.all_tokens()));
			result.push_str("  :  [");
			for (&target, &occurrence) in state.transitions() {
				result.push_str(&format!(
					"{{{} : {}}},",
					Self::format_window(self.states[target].all_tokens()),
					occurrence
				));
			}
			result.push_str("]\n");
		}
		result
	}

	/// Renders a window as `("a","b","c")`.
	fn format_window(tokens: &[T]) -> String {
		let parts: Vec<String> = tokens.iter().map(|t| format!("\"{t}\"")).collect();
		format!("({})", parts.join(","))
	}
}
