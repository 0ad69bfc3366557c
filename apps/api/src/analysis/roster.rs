//! Curator CSV parsing.
//!
//! The uploaded CSV carries one row per monitored entity: the brand it
//! belongs to, the entity name, its role (`influencer` or `competitor`),
//! and up to five social links.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::errors::AppError;

/// Columns that must be present in the header row. The five link columns
/// are optional both in the header and per row.
const REQUIRED_COLUMNS: [&str; 3] = ["brand", "name", "type"];

/// One record of the curator CSV. Absent columns and absent values both
/// deserialize to empty strings, so a sparse row never fails the parse.
#[derive(Debug, Default, Deserialize)]
pub struct CuratorRow {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub role: String,
    #[serde(default)]
    pub youtube: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub reddit: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub linkedin: String,
}

impl CuratorRow {
    /// Non-empty links, in the fixed field order.
    fn links(&self) -> Vec<&str> {
        [
            &self.youtube,
            &self.instagram,
            &self.reddit,
            &self.twitter,
            &self.linkedin,
        ]
        .into_iter()
        .map(String::as_str)
        .filter(|link| !link.is_empty())
        .collect()
    }

    /// Display entry: trimmed name, a trailing space, then the parenthesized
    /// comma-joined link list when any link is present.
    fn display_entry(&self) -> String {
        let mut entry = format!("{} ", self.name.trim());
        let links = self.links();
        if !links.is_empty() {
            entry.push('(');
            entry.push_str(&links.join(", "));
            entry.push(')');
        }
        entry
    }
}

/// Role-partitioned view of the curator CSV.
///
/// The entry lists feed the prompt template; the bare-name lists preserve
/// role membership for callers that only need names. Rows are kept in input
/// order and duplicates are not collapsed.
#[derive(Debug, Default)]
pub struct Roster {
    /// First non-empty `brand` value in row order. Divergent values across
    /// rows are accepted silently; the first one wins.
    pub brand: Option<String>,
    pub influencers: Vec<String>,
    pub competitors: Vec<String>,
    pub influencer_entries: Vec<String>,
    pub competitor_entries: Vec<String>,
}

impl Roster {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| AppError::MalformedCsv(e.to_string()))?;
        Self::from_reader(reader)
    }

    fn from_reader<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, AppError> {
        let headers = reader
            .headers()
            .map_err(|e| AppError::MalformedCsv(e.to_string()))?
            .clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(AppError::MalformedCsv(format!(
                    "missing required column '{column}'"
                )));
            }
        }

        let mut roster = Roster::default();
        for record in reader.deserialize() {
            let row: CuratorRow = record.map_err(|e| AppError::MalformedCsv(e.to_string()))?;

            let brand = row.brand.trim();
            if roster.brand.is_none() && !brand.is_empty() {
                roster.brand = Some(brand.to_string());
            }

            // Rows with any other role value are skipped, not rejected.
            match row.role.trim().to_lowercase().as_str() {
                "influencer" => {
                    roster.influencers.push(row.name.trim().to_string());
                    roster.influencer_entries.push(row.display_entry());
                }
                "competitor" => {
                    roster.competitors.push(row.name.trim().to_string());
                    roster.competitor_entries.push(row.display_entry());
                }
                _ => {}
            }
        }

        Ok(roster)
    }
}
