use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Computes an order-sensitive 64-bit digest over a token window.
///
/// Equal windows (same tokens, same order) always produce equal digests.
/// The digest is deterministic across runs and processes: `DefaultHasher`
/// uses fixed SipHash keys, unlike the per-process randomized keys of
/// `RandomState`.
///
/// The window length is folded in first so windows of different sizes
/// never share a digest by token content alone. The empty window is
/// well-defined (digest of the bare length prefix).
///
/// No uniqueness guarantee exists beyond "collision probability negligible
/// for realistic corpora"; lookups must verify window equality on a digest
/// hit (see `MarkovChain::find_or_create`).
pub(crate) fn digest<T: Hash>(window: &[T]) -> u64 {
	let mut hasher = DefaultHasher::new();
	hasher.write_usize(window.len());
	for token in window {
		token.hash(&mut hasher);
	}
	hasher.finish()
}
