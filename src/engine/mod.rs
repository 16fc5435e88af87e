//! The vector-space recommendation engine.
//!
//! Fits a TF-IDF model over composed item documents, derives an all-pairs
//! cosine similarity matrix, and resolves free-text queries to catalog
//! titles by approximate string matching.

mod resolve;
mod similarity;
mod tfidf;

pub use resolve::{resolve, ResolvedTitle, DEFAULT_THRESHOLD};
pub use similarity::SimilarityMatrix;
pub use tfidf::{SparseVec, VectorSpace};
