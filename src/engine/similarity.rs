//! All-pairs cosine similarity over the fitted vector space.

use rayon::prelude::*;
use serde::Serialize;

use super::{SparseVec, VectorSpace};

/// Dense N×N cosine similarity matrix, row-major.
///
/// Symmetric with `M[i][i] = 1.0` by convention (0.0 when item i's document
/// is entirely empty). Always rebuilt together with the vector space it was
/// derived from; never read against a different catalog.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute the full matrix from the fitted vectors.
    ///
    /// Rows are computed independently in parallel. Each pair is evaluated
    /// twice (once per row) rather than mirrored from a triangle; the
    /// merge-based dot product is argument-order symmetric, so the result
    /// is still exactly symmetric.
    pub fn compute(space: &VectorSpace) -> Self {
        let vectors = space.vectors();
        let n = vectors.len();
        if n == 0 {
            return Self { n, data: Vec::new() };
        }
        let norms: Vec<f32> = vectors.iter().map(SparseVec::norm).collect();

        let mut data = vec![0.0f32; n * n];
        data.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = cosine(&vectors[i], &vectors[j], norms[i], norms[j], i == j);
            }
        });

        tracing::info!(items = n, "similarity matrix computed");

        Self { n, data }
    }

    /// Number of items (rows).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Full similarity row for one item.
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Single entry.
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[i * self.n + j]
    }
}

/// Cosine similarity with the diagonal and zero-magnitude conventions.
fn cosine(a: &SparseVec, b: &SparseVec, norm_a: f32, norm_b: f32, diagonal: bool) -> f32 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    if diagonal {
        return 1.0;
    }
    // Non-negative weights keep cosine in [0, 1]; clamp rounding spill.
    (a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space(texts: &[&str]) -> VectorSpace {
        let docs: Vec<String> = texts.iter().map(|s| s.to_string()).collect();
        VectorSpace::fit(&docs)
    }

    #[test]
    fn test_empty_space() {
        let matrix = SimilarityMatrix::compute(&space(&[]));
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_diagonal_is_one() {
        let matrix = SimilarityMatrix::compute(&space(&["alpha beta", "beta gamma", "delta"]));
        for i in 0..matrix.len() {
            assert_eq!(matrix.get(i, i), 1.0);
        }
    }

    #[test]
    fn test_empty_document_diagonal_is_zero() {
        let matrix = SimilarityMatrix::compute(&space(&["alpha beta", ""]));
        assert_eq!(matrix.get(1, 1), 0.0);
        assert_eq!(matrix.get(0, 1), 0.0);
        assert_eq!(matrix.get(1, 0), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let matrix = SimilarityMatrix::compute(&space(&[
            "action hero armor suit",
            "action hero balloons",
            "animation family balloons",
        ]));
        for i in 0..matrix.len() {
            for j in 0..matrix.len() {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
    }

    #[test]
    fn test_entries_in_unit_interval() {
        let matrix = SimilarityMatrix::compute(&space(&[
            "alpha beta gamma",
            "beta gamma delta",
            "delta epsilon",
        ]));
        for i in 0..matrix.len() {
            for &v in matrix.row(i) {
                assert!((0.0..=1.0).contains(&v), "entry out of range: {v}");
            }
        }
    }

    #[test]
    fn test_identical_documents_similarity_one() {
        let matrix = SimilarityMatrix::compute(&space(&["alpha beta", "alpha beta"]));
        assert!((matrix.get(0, 1) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_disjoint_documents_similarity_zero() {
        let matrix = SimilarityMatrix::compute(&space(&["alpha beta", "gamma delta"]));
        assert_eq!(matrix.get(0, 1), 0.0);
    }

    #[test]
    fn test_overlap_between_zero_and_one() {
        let matrix = SimilarityMatrix::compute(&space(&["alpha beta", "beta gamma"]));
        let sim = matrix.get(0, 1);
        assert!(sim > 0.0 && sim < 1.0, "expected partial overlap, got {sim}");
    }

    #[test]
    fn test_row_access() {
        let matrix = SimilarityMatrix::compute(&space(&["alpha", "beta", "alpha"]));
        let row = matrix.row(0);
        assert_eq!(row.len(), 3);
        assert_eq!(row[0], 1.0);
        assert_eq!(row[1], 0.0);
        assert!((row[2] - 1.0).abs() < 1e-6);
    }
}
