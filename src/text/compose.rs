//! Feature composition: one weighted text blob per catalog item.

use crate::catalog::{Columns, Item};

use super::normalize;

/// Merge an item's metadata fields into a single normalized document.
///
/// Field order is fixed: genres, genres, keywords, tagline, cast, director,
/// then release_year and overview when the source table carries those
/// columns. Genres appear twice on purpose: the duplication doubles their
/// term frequency relative to single-occurrence fields, which boosts their
/// TF-IDF weight. Optional fields gate on column availability, not on the
/// row's value; a missing cell composes as an empty string so the field
/// sequence never shifts between items.
pub fn compose_document(item: &Item, columns: Columns) -> String {
    let mut fields: Vec<String> = vec![
        normalize(&item.genres),
        normalize(&item.genres),
        normalize(&item.keywords),
        normalize(&item.tagline),
        normalize(&item.cast),
        normalize(&item.director),
    ];
    if columns.release_year {
        fields.push(normalize(item.release_year.as_deref().unwrap_or("")));
    }
    if columns.overview {
        fields.push(normalize(item.overview.as_deref().unwrap_or("")));
    }
    fields.join(" ")
}
