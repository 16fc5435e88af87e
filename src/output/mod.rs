//! Output rendering for recommendation results.

use std::io::Write;

use serde::Serialize;

use crate::core::Result;
use crate::engine::ResolvedTitle;
use crate::recommend::RecommendationList;

/// Output format enum.
#[derive(Clone, Copy, Debug, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
    Markdown,
}

impl Format {
    /// Render a recommendation list.
    pub fn recommendations<W: Write>(
        &self,
        list: &RecommendationList,
        writer: &mut W,
    ) -> Result<()> {
        match self {
            Format::Json => write_json(list, writer),
            Format::Markdown => {
                writeln!(
                    writer,
                    "## Recommendations for {} (matched \"{}\")\n",
                    list.query, list.matched_title
                )?;
                write_table(&list.recommendations, writer, true)
            }
            Format::Text => {
                writeln!(
                    writer,
                    "Recommendations for {} (matched \"{}\", score {:.2}):",
                    list.query, list.matched_title, list.match_score
                )?;
                write_table(&list.recommendations, writer, false)
            }
        }
    }

    /// Render a resolved title on its own.
    pub fn resolution<W: Write>(&self, resolved: &ResolvedTitle, writer: &mut W) -> Result<()> {
        match self {
            Format::Json => write_json(resolved, writer),
            Format::Markdown => {
                writeln!(
                    writer,
                    "**{}** (index {}, score {:.3})",
                    resolved.title, resolved.index, resolved.score
                )?;
                Ok(())
            }
            Format::Text => {
                writeln!(
                    writer,
                    "{} (index {}, score {:.3})",
                    resolved.title, resolved.index, resolved.score
                )?;
                Ok(())
            }
        }
    }

    /// Render the catalog summary produced by `check`.
    pub fn summary<W: Write>(&self, summary: &CatalogSummary, writer: &mut W) -> Result<()> {
        match self {
            Format::Json => write_json(summary, writer),
            Format::Markdown | Format::Text => {
                writeln!(writer, "items: {}", summary.items)?;
                writeln!(writer, "release_year column: {}", summary.release_year)?;
                writeln!(writer, "overview column: {}", summary.overview)?;
                Ok(())
            }
        }
    }
}

/// Catalog shape report for the `check` subcommand.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub items: usize,
    pub release_year: bool,
    pub overview: bool,
}

fn write_json<T: Serialize, W: Write>(data: &T, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, data)?;
    writeln!(writer)?;
    Ok(())
}

fn write_table<W: Write>(
    recommendations: &[crate::recommend::Recommendation],
    writer: &mut W,
    markdown: bool,
) -> Result<()> {
    if markdown {
        writeln!(writer, "| Rank | Title | Score |")?;
        writeln!(writer, "| --- | --- | --- |")?;
        for rec in recommendations {
            writeln!(writer, "| {} | {} | {:.4} |", rec.rank, rec.title, rec.score)?;
        }
    } else {
        for rec in recommendations {
            writeln!(writer, "{:>4}  {:<50} {:.4}", rec.rank, rec.title, rec.score)?;
        }
    }
    Ok(())
}
