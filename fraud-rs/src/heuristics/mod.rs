//! Heuristic score adjustment
//!
//! Keyword rule passes applied on top of the base classifier's probability.
//! Boost categories push toward fraud and reduce categories push toward safe
//! before the final verdict is taken.

pub mod adjuster;
pub mod rules;
pub mod types;

pub use adjuster::HeuristicAdjuster;
pub use rules::{Category, CategoryKind, RuleSet, BOOST_CATEGORIES, REDUCE_CATEGORIES};
pub use types::{Adjustment, ScorePair, SignalMatch};
