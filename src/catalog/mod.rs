//! Catalog loading and validation.
//!
//! The catalog is the ordered, immutable corpus the whole pipeline runs on.
//! It is built once from a CSV table (optionally gzip-compressed) and never
//! mutated afterwards; the vector space and similarity matrix are always
//! derived from exactly one catalog instance.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use serde::Serialize;

use crate::core::{Error, Result};

/// Columns the source table must carry, by exact name.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "index",
    "title",
    "genres",
    "keywords",
    "tagline",
    "cast",
    "director",
];

/// Columns that enrich the feature text when present.
pub const OPTIONAL_COLUMNS: [&str; 2] = ["release_year", "overview"];

/// One catalog entry.
///
/// `id` comes straight from the table's `index` column; the pipeline never
/// re-derives it. Required text fields may be empty strings but are never
/// absent once a row is loaded.
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub genres: String,
    pub keywords: String,
    pub tagline: String,
    pub cast: String,
    pub director: String,
    pub release_year: Option<String>,
    pub overview: Option<String>,
}

/// Which optional columns the source table carried.
///
/// Field availability is decided per table, not per row: a present column
/// with a missing cell composes as an empty string so downstream field order
/// never shifts between rows.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Columns {
    pub release_year: bool,
    pub overview: bool,
}

/// Ordered, immutable collection of items, indexed 0..N-1 by position.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    columns: Columns,
}

impl Catalog {
    /// Load a catalog from a CSV file. Paths ending in `.gz` are
    /// transparently decompressed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        if path.extension().is_some_and(|ext| ext == "gz") {
            Self::from_reader(GzDecoder::new(file))
        } else {
            Self::from_reader(file)
        }
    }

    /// Load a catalog from any CSV byte stream.
    ///
    /// Fails with [`Error::Schema`] listing every missing required column
    /// before reading a single row; there is no partial load.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        let column_index = |name: &str| headers.iter().position(|h| h == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| column_index(name).is_none())
            .map(|name| (*name).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(Error::Schema { missing });
        }

        let required: Vec<usize> = REQUIRED_COLUMNS
            .iter()
            .map(|name| column_index(name).unwrap_or_default())
            .collect();
        let columns = Columns {
            release_year: column_index("release_year").is_some(),
            overview: column_index("overview").is_some(),
        };
        let release_year_col = column_index("release_year");
        let overview_col = column_index("overview");

        let mut items = Vec::new();
        for (row, record) in csv_reader.records().enumerate() {
            let record = record?;
            let field = |col: usize| record.get(col).unwrap_or("").to_string();
            let optional_field =
                |col: Option<usize>| col.map(|c| record.get(c).unwrap_or("").to_string());

            let raw_id = field(required[0]);
            let id = raw_id.parse::<u32>().map_err(|_| {
                Error::data(format!("row {}: invalid index value {raw_id:?}", row + 1))
            })?;

            items.push(Item {
                id,
                title: field(required[1]),
                genres: field(required[2]),
                keywords: field(required[3]),
                tagline: field(required[4]),
                cast: field(required[5]),
                director: field(required[6]),
                release_year: optional_field(release_year_col),
                overview: optional_field(overview_col),
            });
        }

        tracing::info!(
            items = items.len(),
            release_year = columns.release_year,
            overview = columns.overview,
            "catalog loaded"
        );

        Ok(Self { items, columns })
    }

    /// Build a catalog directly from items (used by tests and embedders).
    pub fn from_items(items: Vec<Item>, columns: Columns) -> Self {
        Self { items, columns }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn columns(&self) -> Columns {
        self.columns
    }

    /// Item at a given position, if it exists.
    pub fn get(&self, position: usize) -> Option<&Item> {
        self.items.get(position)
    }

    /// Title at a given position, if it exists.
    pub fn title(&self, position: usize) -> Option<&str> {
        self.items.get(position).map(|item| item.title.as_str())
    }

    /// All titles in catalog order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.title.as_str())
    }

    /// Position of the first item with exactly this title.
    ///
    /// Duplicate titles resolve to the first occurrence in catalog order.
    pub fn position_of_title(&self, title: &str) -> Option<usize> {
        self.items.iter().position(|item| item.title == title)
    }
}
