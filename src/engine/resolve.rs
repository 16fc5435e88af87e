//! Fuzzy resolution of a free-text query to a canonical catalog title.

use serde::Serialize;
use strsim::normalized_levenshtein;

use crate::core::{Error, Result};

/// Minimum similarity ratio a candidate must clear.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// The catalog title a query resolved to.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedTitle {
    /// The matched title, verbatim from the catalog.
    pub title: String,
    /// Position of the matched title in catalog order.
    pub index: usize,
    /// Similarity ratio of query vs. matched title, in [0, 1].
    pub score: f64,
}

/// Resolve a query against the ordered title list.
///
/// Titles are compared raw (no normalization); similarity is the normalized
/// Levenshtein ratio. The single best candidate above `threshold` wins; on
/// ties, and for duplicate titles, the first occurrence in catalog order is
/// chosen deterministically. Below-threshold queries return
/// [`Error::NoMatchFound`].
pub fn resolve<'a, I>(query: &str, titles: I, threshold: f64) -> Result<ResolvedTitle>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<ResolvedTitle> = None;
    for (index, title) in titles.into_iter().enumerate() {
        let score = normalized_levenshtein(query, title);
        tracing::debug!(title, score, "resolver candidate");
        // Strictly greater keeps the first occurrence on ties.
        if score >= threshold && best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(ResolvedTitle {
                title: title.to_string(),
                index,
                score,
            });
        }
    }
    best.ok_or_else(|| Error::no_match(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLES: [&str; 4] = ["Iron Man", "Iron Man 2", "Up", "The Dark Knight"];

    #[test]
    fn test_exact_match_scores_one() {
        let resolved = resolve("Iron Man", TITLES, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(resolved.title, "Iron Man");
        assert_eq!(resolved.index, 0);
        assert!((resolved.score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_typo_resolves() {
        let resolved = resolve("Iron Mam", TITLES, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(resolved.title, "Iron Man");
        assert!(resolved.score > DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_implausible_query_is_no_match() {
        let err = resolve("zzzzzzzzzzzzzzzz", TITLES, DEFAULT_THRESHOLD).unwrap_err();
        assert!(matches!(err, Error::NoMatchFound { .. }));
    }

    #[test]
    fn test_empty_title_list_is_no_match() {
        let err = resolve("Iron Man", [], DEFAULT_THRESHOLD).unwrap_err();
        assert!(matches!(err, Error::NoMatchFound { .. }));
    }

    #[test]
    fn test_duplicate_titles_pick_first_occurrence() {
        let titles = ["Up", "Iron Man", "Iron Man"];
        let resolved = resolve("Iron Man", titles, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(resolved.index, 1);
    }

    #[test]
    fn test_case_sensitive_comparison() {
        // Raw titles are compared; case differences cost edit distance but a
        // full-case mismatch of a short title still clears 0.6 only if close.
        let resolved = resolve("iron man", TITLES, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(resolved.title, "Iron Man");
        assert!(resolved.score < 1.0);
    }

    #[test]
    fn test_threshold_is_tunable() {
        assert!(resolve("Iron Mam", TITLES, 0.99).is_err());
        assert!(resolve("Iron Mam", TITLES, 0.5).is_ok());
    }

    #[test]
    fn test_prefers_closer_candidate() {
        let resolved = resolve("Iron Man 2", TITLES, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(resolved.title, "Iron Man 2");
        assert_eq!(resolved.index, 1);
    }
}
