//! Text normalization
//!
//! Turns raw email text (possibly HTML, with links and addresses) into the
//! lowercase, punctuation-free form the vectorizer and the heuristic rules
//! were built against.

pub mod normalizer;

pub use normalizer::{normalize, normalize_opt, TextNormalizer};
