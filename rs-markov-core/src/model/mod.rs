//! Top-level module for the Markov chain generation system.
//!
//! This module provides a variable-order Markov chain over token windows:
//! - The chain itself (`MarkovChain`): state ownership, construction,
//!   weighted random walks
//! - Internal state management (`State`)
//! - Internal window hashing (`hasher`)

/// Variable-order Markov chain over token windows.
///
/// Owns all states, builds the transition graph from token sequences,
/// and drives weighted random walk generation.
pub mod markov_chain;

/// Internal representation of a single chain state (token window).
///
/// Tracks outgoing transitions and supports weighted random sampling.
/// This module is not exposed publicly.
mod state;

/// Internal order-sensitive digest over token windows.
///
/// Used as the deduplication key for states. Not exposed publicly.
mod hasher;
