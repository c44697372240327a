use std::collections::BTreeMap;

use rand::Rng;

/// Stable identifier of a state: its slot in the chain's state arena.
///
/// Identifiers are assigned at creation, never reused, and stay valid for
/// the whole lifetime of the owning chain (states are never removed).
pub(crate) type StateId = usize;

/// Represents a state in a Markov chain.
///
/// A `State` corresponds to one unique ordered window of tokens and stores
/// all observed transitions from this window to the windows that followed
/// it in the training data.
///
/// Conceptually, this is a node in the chain graph where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities
/// - Accumulate transition occurrences during construction
/// - Pick the next state using weighted random sampling
///
/// ## Invariants
/// - `window` holds at least one token (the chain validates its size >= 1)
/// - Each transition occurrence count is strictly positive
/// - Transition targets are slots in the same chain's arena
#[derive(Clone, Debug)]
pub(crate) struct State<T> {
	/// The ordered token window this state represents. Immutable after
	/// creation.
	window: Vec<T>,
	/// Outgoing transitions indexed by target state.
	/// The value represents how many times this transition was observed.
	/// A `BTreeMap` keeps iteration order stable, so sampling with a
	/// seeded generator is reproducible.
	transitions: BTreeMap<StateId, usize>,
}

impl<T> State<T> {
	/// Creates a new state for the given window, with no transitions yet.
	pub(crate) fn new(window: Vec<T>) -> Self {
		Self {
			window,
			transitions: BTreeMap::new(),
		}
	}

	/// Returns the token this state emits when visited during generation:
	/// the last token of its window.
	pub(crate) fn emit(&self) -> &T {
		// Should not panic, windows always hold at least one token
		self.window.last().unwrap()
	}

	/// Returns the full token window this state represents.
	pub(crate) fn all_tokens(&self) -> &[T] {
		&self.window
	}

	/// Returns the outgoing transition table (target -> occurrence count).
	pub(crate) fn transitions(&self) -> &BTreeMap<StateId, usize> {
		&self.transitions
	}

	/// Records an occurrence of a transition toward `target`.
	///
	/// - If the transition already exists, its occurrence count is increased.
	/// - Otherwise, a new transition is created with an initial count of 1.
	pub(crate) fn add_transition(&mut self, target: StateId) {
		*self.transitions.entry(target).or_insert(0) += 1;
	}

	/// Picks the next state using weighted random sampling.
	///
	/// The probability of selecting a target is proportional to its
	/// occurrence count: a draw over `[0, total]` is reduced by each
	/// count in turn and the transition that exhausts it is selected.
	///
	/// Returns `None` if the state has no transitions (terminal state,
	/// which ends generation early).
	pub(crate) fn next<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<StateId> {
		if self.transitions.is_empty() {
			return None;
		}

		// Strictly positive by invariant, so the draw range is never empty
		let total: usize = self.transitions.values().sum();

		let mut remaining = rng.random_range(0..=total) as i64;
		for (&target, &occurrence) in &self.transitions {
			remaining -= occurrence as i64;
			if remaining <= 0 {
				return Some(target);
			}
		}

		// Unreachable: the counts sum to `total`, so the loop always selects
		None
	}
}
