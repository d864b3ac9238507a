// ABOUTME: Error type for transaction extraction, serialization and clipboard delivery.
// ABOUTME: Provides the ExtractError enum, the crate Result alias and boolean helpers.

use std::fmt;

use thiserror::Error;

/// One of the three sub-fields read from every transaction row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    Title,
    Amount,
}

impl Field {
    /// All fields in output order.
    pub const ALL: [Field; 3] = [Field::Date, Field::Title, Field::Amount];

    /// The JSON key this field is written under.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Title => "title",
            Field::Amount => "amount",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur while scraping transactions.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A matched row has no element for one of the required fields.
    /// `row` is the 1-based position of the row in document order.
    #[error("row {row}: missing {field} field (selector `{selector}`)")]
    MissingField {
        row: usize,
        field: Field,
        selector: String,
    },

    /// A configured CSS selector could not be parsed.
    #[error("invalid selector `{selector}`")]
    InvalidSelector { selector: String },

    /// Transaction JSON could not be written or read back.
    #[error("transaction JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The clipboard utility could not be run or reported failure.
    #[error("clipboard write via `{program}` failed: {message}")]
    Clipboard { program: String, message: String },
}

impl ExtractError {
    /// Create a MissingField error.
    pub fn missing_field(row: usize, field: Field, selector: impl Into<String>) -> Self {
        ExtractError::MissingField {
            row,
            field,
            selector: selector.into(),
        }
    }

    /// Create an InvalidSelector error.
    pub fn invalid_selector(selector: impl Into<String>) -> Self {
        ExtractError::InvalidSelector {
            selector: selector.into(),
        }
    }

    /// Create a Clipboard error from any displayable cause.
    pub fn clipboard(program: impl Into<String>, cause: impl fmt::Display) -> Self {
        ExtractError::Clipboard {
            program: program.into(),
            message: cause.to_string(),
        }
    }

    /// Returns true if this is a MissingField error.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, ExtractError::MissingField { .. })
    }

    /// Returns true if this is an InvalidSelector error.
    pub fn is_invalid_selector(&self) -> bool {
        matches!(self, ExtractError::InvalidSelector { .. })
    }

    /// Returns true if this is a Clipboard error.
    pub fn is_clipboard(&self) -> bool {
        matches!(self, ExtractError::Clipboard { .. })
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message_names_row_and_selector() {
        let err = ExtractError::missing_field(3, Field::Title, "#transactionTitle");
        assert_eq!(
            err.to_string(),
            "row 3: missing title field (selector `#transactionTitle`)"
        );
        assert!(err.is_missing_field());
        assert!(!err.is_clipboard());
    }

    #[test]
    fn clipboard_error_keeps_program_name() {
        let err = ExtractError::clipboard("xclip", "exit status: 1");
        assert_eq!(
            err.to_string(),
            "clipboard write via `xclip` failed: exit status: 1"
        );
        assert!(err.is_clipboard());
    }

    #[test]
    fn field_order_matches_output_keys() {
        let keys: Vec<_> = Field::ALL.iter().map(Field::as_str).collect();
        assert_eq!(keys, vec!["date", "title", "amount"]);
    }
}
