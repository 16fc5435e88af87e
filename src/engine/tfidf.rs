//! TF-IDF vector space fitted over the composed catalog documents.
//!
//! Raw term frequency times smooth IDF (`ln((1+n)/(1+df)) + 1`), sparse
//! vectors over a sorted vocabulary. Vectors are left unnormalized here;
//! cosine normalization happens in the similarity engine.

use std::collections::{BTreeMap, HashMap};

/// Sparse vector: parallel arrays of column indices and values, indices
/// strictly ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVec {
    indices: Vec<u32>,
    values: Vec<f32>,
}

impl SparseVec {
    /// Dot product via merge over the sorted index arrays.
    ///
    /// The merge visits matching dimensions in the same order regardless of
    /// argument order, so `a.dot(b)` and `b.dot(a)` are bit-identical.
    pub fn dot(&self, other: &SparseVec) -> f32 {
        let mut sum = 0.0f32;
        let (mut i, mut j) = (0, 0);
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                std::cmp::Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
            }
        }
        sum
    }

    /// L2 magnitude.
    pub fn norm(&self) -> f32 {
        self.values.iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn nnz(&self) -> usize {
        self.indices.len()
    }
}

/// Fitted vocabulary plus one sparse TF-IDF vector per input document.
pub struct VectorSpace {
    vocab: HashMap<String, u32>,
    idf: Vec<f32>,
    vectors: Vec<SparseVec>,
}

impl VectorSpace {
    /// Fit a vector space over a corpus of pre-normalized documents.
    ///
    /// Tokenization is whitespace splitting; the vocabulary is every
    /// distinct token, dimension-indexed in sorted term order. The same
    /// corpus in the same order always yields the same vocabulary and
    /// weights, which the similarity matrix and recommender rely on for
    /// positional correspondence with the catalog.
    pub fn fit(documents: &[String]) -> Self {
        let n = documents.len() as f32;

        let tokenized: Vec<Vec<&str>> = documents
            .iter()
            .map(|doc| doc.split_whitespace().collect())
            .collect();

        // Document frequency per term; BTreeMap gives the sorted vocabulary.
        let mut df: BTreeMap<&str, u32> = BTreeMap::new();
        for tokens in &tokenized {
            let mut seen: Vec<&str> = tokens.clone();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        let vocab: HashMap<String, u32> = df
            .keys()
            .enumerate()
            .map(|(dim, term)| ((*term).to_string(), dim as u32))
            .collect();

        // Smooth IDF: ln((1 + n) / (1 + df)) + 1. Monotonically decreasing
        // in df and strictly positive even for terms in every document.
        let idf: Vec<f32> = df
            .values()
            .map(|&doc_freq| ((1.0 + n) / (1.0 + doc_freq as f32)).ln() + 1.0)
            .collect();

        let vectors: Vec<SparseVec> = tokenized
            .iter()
            .map(|tokens| build_vector(tokens, &vocab, &idf))
            .collect();

        tracing::info!(
            documents = documents.len(),
            vocabulary = vocab.len(),
            "vector space fitted"
        );

        Self { vocab, idf, vectors }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    pub fn vectors(&self) -> &[SparseVec] {
        &self.vectors
    }

    /// Dimension index of a term, if it was observed during fitting.
    pub fn dimension(&self, term: &str) -> Option<u32> {
        self.vocab.get(term).copied()
    }

    /// IDF weight for a fitted dimension.
    pub fn idf(&self, dimension: u32) -> Option<f32> {
        self.idf.get(dimension as usize).copied()
    }
}

/// Build one unnormalized TF-IDF vector: raw term count times IDF.
fn build_vector(tokens: &[&str], vocab: &HashMap<String, u32>, idf: &[f32]) -> SparseVec {
    let mut tf: HashMap<u32, u32> = HashMap::new();
    for token in tokens {
        if let Some(&dim) = vocab.get(*token) {
            *tf.entry(dim).or_insert(0) += 1;
        }
    }

    let mut indices: Vec<u32> = tf.keys().copied().collect();
    indices.sort_unstable();

    let values: Vec<f32> = indices
        .iter()
        .map(|&dim| tf[&dim] as f32 * idf[dim as usize])
        .collect();

    SparseVec { indices, values }
}
