//! Session lifecycle and ranked neighbor retrieval.
//!
//! A [`Session`] is built once from a catalog (two-phase lifecycle: build,
//! then pure read-only queries). There is no hidden global cache; callers
//! own the session and decide when to rebuild. Rebuilding means constructing
//! a fresh session and swapping it in, so no in-flight query ever observes a
//! matrix derived from a different catalog than the titles it indexes.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::core::{Error, Result};
use crate::engine::{resolve, ResolvedTitle, SimilarityMatrix, VectorSpace};
use crate::text::compose_document;

/// One ranked entry in a recommendation list.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// 1-based, contiguous rank.
    pub rank: usize,
    /// Title of the recommended item.
    pub title: String,
    /// Cosine similarity to the queried item, in [0, 1].
    pub score: f32,
}

/// Ordered recommendations for one query.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationList {
    /// The raw query text.
    pub query: String,
    /// The catalog title the query resolved to.
    pub matched_title: String,
    /// Similarity ratio of the fuzzy title match.
    pub match_score: f64,
    /// Ranked entries, best first. The queried item itself is not excluded;
    /// a self-match at rank 1 with score 1.0 is intended behavior.
    pub recommendations: Vec<Recommendation>,
}

/// Immutable recommendation state for one catalog: the catalog itself plus
/// the vector space and similarity matrix derived from it.
///
/// Queries are pure reads; a fully built session can be shared across
/// threads without locking.
pub struct Session {
    catalog: Catalog,
    space: VectorSpace,
    matrix: SimilarityMatrix,
    threshold: f64,
    top_n: usize,
}

impl Session {
    /// Compose, fit, and compute the similarity matrix for a catalog.
    pub fn build(catalog: Catalog, config: &Config) -> Self {
        let columns = catalog.columns();
        let documents: Vec<String> = catalog
            .items()
            .iter()
            .map(|item| compose_document(item, columns))
            .collect();
        let space = VectorSpace::fit(&documents);
        let matrix = SimilarityMatrix::compute(&space);
        Self {
            catalog,
            space,
            matrix,
            threshold: config.resolve.threshold,
            top_n: config.recommend.top_n,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn space(&self) -> &VectorSpace {
        &self.space
    }

    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    /// Resolve a free-text query to a catalog title without recommending.
    pub fn resolve_title(&self, query: &str) -> Result<ResolvedTitle> {
        resolve(query, self.catalog.titles(), self.threshold)
    }

    /// Resolve a query and return the ranked recommendation list.
    pub fn recommendations(&self, query: &str) -> Result<RecommendationList> {
        let resolved = self.resolve_title(query)?;
        // Catalog and matrix are built together, so this cannot fire unless
        // the session was constructed from mismatched parts.
        if resolved.index >= self.matrix.len() {
            return Err(Error::Lookup {
                index: resolved.index,
            });
        }
        let recommendations = self.recommend_for_index(resolved.index, self.top_n);
        Ok(RecommendationList {
            query: query.to_string(),
            matched_title: resolved.title,
            match_score: resolved.score,
            recommendations,
        })
    }

    /// Rank every catalog item by similarity to the item at `index`.
    ///
    /// Sorted descending by score, ties broken by ascending catalog position
    /// so equal-scored items keep their source order. Indices with no
    /// corresponding title row are skipped (and logged) rather than aborting
    /// the whole list; ranks are assigned after skipping, so they stay
    /// contiguous from 1.
    pub fn recommend_for_index(&self, index: usize, top_n: usize) -> Vec<Recommendation> {
        let row = self.matrix.row(index);
        let mut scored: Vec<(usize, f32)> = row.iter().copied().enumerate().collect();
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        scored
            .into_iter()
            .filter_map(|(position, score)| match self.catalog.title(position) {
                Some(title) => Some((title.to_string(), score)),
                None => {
                    tracing::warn!(position, "similarity row references a missing catalog entry");
                    None
                }
            })
            .take(top_n)
            .enumerate()
            .map(|(i, (title, score))| Recommendation {
                rank: i + 1,
                title,
                score,
            })
            .collect()
    }
}
