//! Variable-order Markov chain text generation library.
//!
//! This crate builds a weighted transition graph over fixed-size token
//! windows and generates new token sequences by weighted random walk:
//! - Deduplicated window states, keyed by digest
//! - Weighted transition count accumulation
//! - Seedable, reproducible generation
//! - Utilities for corpus loading and tokenization
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core chain model and generation logic.
///
/// This module exposes the high-level chain interface while keeping
/// internal state and hashing representations private.
pub mod model;

/// I/O utilities (corpus loading, tokenization).
pub mod io;

/// Error taxonomy shared across the crate.
pub mod error;

pub use error::{ChainError, Result};
