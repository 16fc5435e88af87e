//! Text normalization and feature composition.

mod compose;
mod normalize;

pub use compose::compose_document;
pub use normalize::normalize;
