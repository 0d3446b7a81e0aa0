//! Program view models derived from backend schemes.

mod confidence;
mod model;
mod normalizer;

pub use confidence::Confidence;
pub use model::Program;
pub use normalizer::{normalize, normalize_scheme};
