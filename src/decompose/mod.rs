//! MIME payload decomposition: normalization, transfer decoding with safe
//! fallbacks, deterministic artifact naming, and the walk that ties them
//! together.

pub mod encoding;
pub mod naming;
pub mod normalize;
pub mod walker;

pub use walker::{decompose, DecompositionReport};
