// ABOUTME: Library entry point for cardscrape, a credit card transaction scraper.
// ABOUTME: Re-exports the public API: Extractor, ExtractorBuilder, the DOM and clipboard traits and ExtractError.

//! cardscrape - copies credit card transactions out of a bank statement page.
//!
//! The statement page lists one `.transaction-row` element per transaction,
//! each holding a date, a title and an amount. The [`Extractor`] reads those
//! rows, renders them as an indented JSON array and hands the text to a
//! [`ClipboardWriter`].
//!
//! # Example
//!
//! ```
//! use cardscrape_extract::{Extractor, HtmlDocument, MemoryClipboard};
//!
//! let page = HtmlDocument::parse(r#"
//!     <div class="transaction-row">
//!       <span id="transactionDate">2024-03-15</span>
//!       <span id="transactionTitle">Refund</span>
//!       <span id="transactionAmount">12.00</span>
//!     </div>"#);
//!
//! let mut clipboard = MemoryClipboard::new();
//! let copied = Extractor::builder().build()?.run(&page, &mut clipboard)?;
//! assert_eq!(copied, 1);
//! # Ok::<(), cardscrape_extract::ExtractError>(())
//! ```

pub mod clipboard;
pub mod compiled;
pub mod decode;
pub mod dom;
pub mod error;
pub mod extractor;
pub mod options;
pub mod record;

pub use crate::clipboard::{ClipboardWriter, MemoryClipboard, SystemClipboard};
pub use crate::decode::decode_html;
pub use crate::dom::{Document, Element, HtmlDocument, HtmlElement};
pub use crate::error::{ExtractError, Field, Result};
pub use crate::extractor::Extractor;
pub use crate::options::{ExtractorBuilder, MissingFieldPolicy, Options, Selectors};
pub use crate::record::{from_json, to_json, TransactionRecord};
