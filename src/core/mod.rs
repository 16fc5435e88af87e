//! Core types shared across the recommendation pipeline.

mod error;

pub use error::{Error, Result};
