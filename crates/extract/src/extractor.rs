// ABOUTME: The Extractor: scans transaction rows, reads their three fields and copies the JSON.
// ABOUTME: Runs all-or-nothing; the clipboard is written once, after a complete scan.

//! Transaction extraction.
//!
//! Key behaviors:
//! - Rows are read once, in document order.
//! - Each row must yield all three fields; the first missing field aborts
//!   the run unless [`MissingFieldPolicy::SkipRow`] is configured.
//! - Field text is copied verbatim. Nothing is parsed or validated.

use crate::clipboard::ClipboardWriter;
use crate::compiled::precompile_selectors;
use crate::dom::{Document, Element};
use crate::error::{ExtractError, Field, Result};
use crate::options::{ExtractorBuilder, MissingFieldPolicy, Options};
use crate::record::{to_json, TransactionRecord};

/// Scrapes transaction rows out of a document.
#[derive(Debug, Clone)]
pub struct Extractor {
    opts: Options,
}

impl Extractor {
    /// Create an extractor, rejecting selectors that do not parse.
    pub fn new(opts: Options) -> Result<Self> {
        precompile_selectors(opts.selectors.all()).map_err(ExtractError::invalid_selector)?;
        Ok(Self { opts })
    }

    /// Create a new ExtractorBuilder.
    pub fn builder() -> ExtractorBuilder {
        ExtractorBuilder::new()
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Reads every row of `doc` into a record, in document order.
    pub fn extract<D: Document>(&self, doc: &D) -> Result<Vec<TransactionRecord>> {
        let rows = doc.query_selector_all(&self.opts.selectors.row);
        tracing::debug!(rows = rows.len(), selector = %self.opts.selectors.row, "matched rows");

        let mut records = Vec::with_capacity(rows.len());
        for (ix, row) in rows.iter().enumerate() {
            match self.read_row(row, ix + 1) {
                Ok(record) => records.push(record),
                Err(err) if self.opts.missing_field == MissingFieldPolicy::SkipRow => {
                    tracing::warn!("skipping incomplete row: {}", err);
                }
                Err(err) => return Err(err),
            }
        }
        Ok(records)
    }

    /// Extracts and renders the JSON text without touching a clipboard.
    pub fn render<D: Document>(&self, doc: &D) -> Result<String> {
        to_json(&self.extract(doc)?)
    }

    /// Extracts, renders and copies the JSON text to `clipboard`.
    ///
    /// Returns the number of records copied. On error the clipboard has not
    /// been written.
    pub fn run<D, C>(&self, doc: &D, clipboard: &mut C) -> Result<usize>
    where
        D: Document,
        C: ClipboardWriter + ?Sized,
    {
        let records = self.extract(doc)?;
        let json = to_json(&records)?;
        clipboard.write(&json)?;
        tracing::debug!(records = records.len(), bytes = json.len(), "copied transactions");
        Ok(records.len())
    }

    fn read_row<E: Element>(&self, row: &E, position: usize) -> Result<TransactionRecord> {
        let [date, title, amount] = Field::ALL.map(|field| self.read_field(row, position, field));
        Ok(TransactionRecord {
            date: date?,
            title: title?,
            amount: amount?,
        })
    }

    fn read_field<E: Element>(&self, row: &E, position: usize, field: Field) -> Result<String> {
        let selector = self.opts.selectors.field(field);
        row.query_selector(selector)
            .map(|el| el.text_content())
            .ok_or_else(|| ExtractError::missing_field(position, field, selector))
    }
}
