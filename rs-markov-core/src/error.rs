use thiserror::Error;

/// Convenient result type used throughout the crate.
pub type Result<T, E = ChainError> = std::result::Result<T, E>;

/// Domain-specific error describing failures during chain configuration,
/// construction, or generation.
///
/// Reaching a terminal state during generation is *not* an error: the walk
/// simply ends early and the shorter output is returned as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
	/// Chain was constructed with a window size below 1.
	#[error("chain size must be at least 1, got {0}")]
	InvalidConfiguration(usize),
	/// `add_data` was called with fewer tokens than the window size.
	/// Recoverable: the call contributes nothing and the chain stays usable.
	#[error("not enough tokens: need at least {expected}, got {actual}")]
	InsufficientData {
		/// Minimum number of tokens required (the chain size).
		expected: usize,
		/// Number of tokens actually supplied.
		actual: usize,
	},
	/// `generate` was called before any data was added.
	#[error("chain has no states, add data before generating")]
	EmptyChain,
	/// Two distinct windows produced the same digest. Effectively
	/// unreachable with a 64-bit digest on realistic corpora, but reported
	/// loudly rather than silently merging unrelated states.
	#[error("digest collision: distinct windows share digest {digest:#018x}")]
	DigestCollision {
		/// The digest value shared by both windows.
		digest: u64,
	},
}
