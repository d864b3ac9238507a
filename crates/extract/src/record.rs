// ABOUTME: TransactionRecord, the raw date/title/amount triple scraped from one row.
// ABOUTME: Also renders and reads back the indented JSON array handed to the clipboard.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One transaction as displayed on the page. Values are the raw visible
/// text of each field and are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: String,
    pub title: String,
    pub amount: String,
}

impl TransactionRecord {
    pub fn new(
        date: impl Into<String>,
        title: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            title: title.into(),
            amount: amount.into(),
        }
    }
}

/// Renders records as a JSON array indented by two spaces.
///
/// An empty slice renders as `[]`. There is no trailing newline.
pub fn to_json(records: &[TransactionRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Reads back the output of [`to_json`].
pub fn from_json(text: &str) -> Result<Vec<TransactionRecord>> {
    Ok(serde_json::from_str(text)?)
}
