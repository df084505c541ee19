//! Password generation core: charset building, sampling, strength scoring.

pub mod charset;
mod generate;
pub mod strength;

pub use generate::generate;
pub use strength::{score, StrengthTier};
