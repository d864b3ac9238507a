// ABOUTME: Configuration for the extractor: row/field selectors and the missing-field policy.
// ABOUTME: ExtractorBuilder provides a fluent API for constructing validated Extractor instances.

use crate::error::{Field, Result};
use crate::extractor::Extractor;

pub const DEFAULT_ROW_SELECTOR: &str = ".transaction-row";
pub const DEFAULT_DATE_SELECTOR: &str = "#transactionDate";
pub const DEFAULT_TITLE_SELECTOR: &str = "#transactionTitle";
pub const DEFAULT_AMOUNT_SELECTOR: &str = "#transactionAmount";

/// What to do with a row that lacks one of its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingFieldPolicy {
    /// Fail the whole run; nothing reaches the clipboard.
    #[default]
    Abort,
    /// Drop the incomplete row and keep going.
    SkipRow,
}

/// CSS selectors locating rows and the fields inside each row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    pub row: String,
    pub date: String,
    pub title: String,
    pub amount: String,
}

impl Selectors {
    /// The selector for one field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Title => &self.title,
            Field::Amount => &self.amount,
        }
    }

    /// Row selector followed by the field selectors.
    pub fn all(&self) -> [&str; 4] {
        [
            self.row.as_str(),
            self.date.as_str(),
            self.title.as_str(),
            self.amount.as_str(),
        ]
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            row: DEFAULT_ROW_SELECTOR.to_string(),
            date: DEFAULT_DATE_SELECTOR.to_string(),
            title: DEFAULT_TITLE_SELECTOR.to_string(),
            amount: DEFAULT_AMOUNT_SELECTOR.to_string(),
        }
    }
}

/// Configuration options for the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub selectors: Selectors,
    pub missing_field: MissingFieldPolicy,
}

/// Builder for constructing Extractor instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct ExtractorBuilder {
    opts: Options,
}

impl ExtractorBuilder {
    /// Create a new ExtractorBuilder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selector matching one transaction row.
    pub fn row_selector(mut self, css: impl Into<String>) -> Self {
        self.opts.selectors.row = css.into();
        self
    }

    /// Set the selector for the date field within a row.
    pub fn date_selector(mut self, css: impl Into<String>) -> Self {
        self.opts.selectors.date = css.into();
        self
    }

    /// Set the selector for the title field within a row.
    pub fn title_selector(mut self, css: impl Into<String>) -> Self {
        self.opts.selectors.title = css.into();
        self
    }

    /// Set the selector for the amount field within a row.
    pub fn amount_selector(mut self, css: impl Into<String>) -> Self {
        self.opts.selectors.amount = css.into();
        self
    }

    /// Set how rows with a missing field are handled.
    pub fn missing_field(mut self, policy: MissingFieldPolicy) -> Self {
        self.opts.missing_field = policy;
        self
    }

    /// Build the Extractor, rejecting selectors that do not parse.
    pub fn build(self) -> Result<Extractor> {
        Extractor::new(self.opts)
    }
}
