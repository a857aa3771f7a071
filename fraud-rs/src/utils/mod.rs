//! Utility modules
//!
//! - [`round`]: decimal rounding of scores

pub mod round;

pub use round::round_to;
