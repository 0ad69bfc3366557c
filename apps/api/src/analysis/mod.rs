//! The curator-CSV → analysis-prompt pipeline.

pub mod handlers;
pub mod prompts;
pub mod roster;

use std::path::Path;

use tracing::debug;

use crate::analysis::roster::Roster;
use crate::errors::AppError;

/// Parses the curator CSV at `path` and renders the full analysis prompt.
///
/// `custom_date` replaces the report's "as of" line verbatim; otherwise the
/// current local time is used. Rendering is deterministic for a fixed CSV
/// and date; nothing is cached between calls.
pub fn build_prompt(path: &Path, custom_date: Option<&str>) -> Result<String, AppError> {
    let roster = Roster::from_path(path)?;
    debug!(
        "parsed roster: brand={:?}, {} influencers, {} competitors",
        roster.brand,
        roster.influencers.len(),
        roster.competitors.len()
    );

    let today = match custom_date {
        Some(date) => date.to_string(),
        None => chrono::Local::now()
            .format("%A, %B %d, %Y, %I:%M %p")
            .to_string(),
    };

    Ok(prompts::render_analysis_prompt(&roster, &today))
}
