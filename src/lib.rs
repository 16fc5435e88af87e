//! Cinematch - content-based movie recommendations.
//!
//! Recommends catalog entries similar to a user-supplied (possibly
//! misspelled) title using textual metadata only: genres, keywords, cast,
//! director, tagline, and optionally release year and overview. The pipeline
//! normalizes and composes each item's metadata into one weighted document,
//! fits a TF-IDF vector space over the whole catalog, derives an all-pairs
//! cosine similarity matrix, and serves ranked neighbors for fuzzily
//! resolved queries.
//!
//! # Example
//!
//! ```no_run
//! use cinematch::catalog::Catalog;
//! use cinematch::config::Config;
//! use cinematch::recommend::Session;
//!
//! let catalog = Catalog::from_path("data/movies.csv.gz").unwrap();
//! let session = Session::build(catalog, &Config::default());
//! let list = session.recommendations("Iron Mam").unwrap();
//! for rec in &list.recommendations {
//!     println!("{:>3}. {}", rec.rank, rec.title);
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod output;
pub mod recommend;
pub mod text;

pub use core::{Error, Result};
pub use recommend::{RecommendationList, Session};
