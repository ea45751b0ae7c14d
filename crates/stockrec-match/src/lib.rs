//! Code normalization, spelling variants, and catalog matching.

pub mod label;
pub mod matcher;
pub mod normalize;

pub use label::ParsedLabel;
pub use matcher::{MatchOutcome, resolve};
pub use normalize::{normalize, variants};
