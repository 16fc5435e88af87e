use proptest::prelude::*;

use cinematch::catalog::{Catalog, Columns, Item};
use cinematch::config::Config;
use cinematch::engine::{SimilarityMatrix, VectorSpace};
use cinematch::recommend::Session;
use cinematch::text::normalize;

fn item_from_text(id: u32, text: &str) -> Item {
    Item {
        id,
        title: format!("Title {id}"),
        genres: text.to_string(),
        keywords: String::new(),
        tagline: String::new(),
        cast: String::new(),
        director: String::new(),
        release_year: None,
        overview: None,
    }
}

// ---------------------------------------------------------------------------
// Normalizer properties
// ---------------------------------------------------------------------------

proptest! {
    /// Normalized output never contains punctuation or uppercase letters.
    #[test]
    fn normalize_output_charset(s in "[ -~\t\n]*") {
        let out = normalize(&s);
        for c in out.chars() {
            prop_assert!(
                c.is_whitespace() || c.is_alphanumeric() || c == '_',
                "unexpected char {c:?} in normalized output"
            );
            prop_assert!(!c.is_uppercase(), "uppercase {c:?} survived normalization");
        }
    }

    /// Normalization is idempotent.
    #[test]
    fn normalize_idempotent(s in "[ -~\t\n]*") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }
}

// ---------------------------------------------------------------------------
// Vector space and similarity matrix properties
// ---------------------------------------------------------------------------

proptest! {
    /// Fitting the same corpus twice yields identical vocabularies and
    /// weights: the matrix depends on positional correspondence.
    #[test]
    fn fit_is_deterministic(docs in prop::collection::vec("[a-f ]{0,30}", 1..10)) {
        let a = VectorSpace::fit(&docs);
        let b = VectorSpace::fit(&docs);
        prop_assert_eq!(a.vocab_size(), b.vocab_size());
        prop_assert_eq!(a.len(), b.len());
        prop_assert_eq!(a.vectors(), b.vectors());
    }

    /// Diagonal is 1.0 for non-empty documents, 0.0 for empty ones.
    #[test]
    fn matrix_diagonal(docs in prop::collection::vec("[a-f ]{0,30}", 1..10)) {
        let space = VectorSpace::fit(&docs);
        let matrix = SimilarityMatrix::compute(&space);
        for (i, doc) in docs.iter().enumerate() {
            if doc.split_whitespace().next().is_none() {
                prop_assert_eq!(matrix.get(i, i), 0.0);
            } else {
                prop_assert_eq!(matrix.get(i, i), 1.0);
            }
        }
    }

    /// The matrix is exactly symmetric and every entry lies in [0, 1].
    #[test]
    fn matrix_symmetric_and_bounded(docs in prop::collection::vec("[a-f ]{0,30}", 1..10)) {
        let space = VectorSpace::fit(&docs);
        let matrix = SimilarityMatrix::compute(&space);
        for i in 0..matrix.len() {
            for j in 0..matrix.len() {
                let v = matrix.get(i, j);
                prop_assert_eq!(v, matrix.get(j, i));
                prop_assert!((0.0..=1.0).contains(&v), "entry out of range: {}", v);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Recommender properties
// ---------------------------------------------------------------------------

proptest! {
    /// Ranks are contiguous from 1 and the list length is exactly
    /// min(top_n, N) for an intact catalog.
    #[test]
    fn ranks_contiguous_and_sized(
        texts in prop::collection::vec("[a-f ]{0,30}", 1..10),
        top_n in 1usize..15,
    ) {
        let items: Vec<Item> = texts
            .iter()
            .enumerate()
            .map(|(i, text)| item_from_text(i as u32, text))
            .collect();
        let n = items.len();
        let catalog = Catalog::from_items(items, Columns::default());
        let session = Session::build(catalog, &Config::default());

        let recs = session.recommend_for_index(0, top_n);
        prop_assert_eq!(recs.len(), top_n.min(n));
        for (i, rec) in recs.iter().enumerate() {
            prop_assert_eq!(rec.rank, i + 1);
        }
    }

    /// Scores are non-increasing down the list.
    #[test]
    fn scores_non_increasing(texts in prop::collection::vec("[a-f ]{1,30}", 2..10)) {
        let items: Vec<Item> = texts
            .iter()
            .enumerate()
            .map(|(i, text)| item_from_text(i as u32, text))
            .collect();
        let catalog = Catalog::from_items(items, Columns::default());
        let session = Session::build(catalog, &Config::default());

        let recs = session.recommend_for_index(0, 20);
        for pair in recs.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}
