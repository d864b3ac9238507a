// ABOUTME: Integration tests running the extractor over HTML statement fixtures.
// ABOUTME: Covers empty pages, document order, idempotence, round trips and the missing-field abort.

use std::fs;

use cardscrape_extract::{
    from_json, ExtractError, Extractor, Field, HtmlDocument, MemoryClipboard, MissingFieldPolicy,
    TransactionRecord,
};
use pretty_assertions::assert_eq;

/// Load an HTML page from the fixtures directory.
fn load_fixture(name: &str) -> HtmlDocument {
    let path = format!(
        "{}/tests/fixtures/{}.html",
        env!("CARGO_MANIFEST_DIR"),
        name
    );
    let html = fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {path}: {e}"));
    HtmlDocument::parse(&html)
}

fn default_extractor() -> Extractor {
    Extractor::builder().build().unwrap()
}

#[test]
fn page_without_rows_copies_empty_array() {
    let doc = load_fixture("empty");
    let mut clip = MemoryClipboard::with_contents("previous");

    let copied = default_extractor().run(&doc, &mut clip).unwrap();

    assert_eq!(copied, 0);
    assert_eq!(clip.contents(), Some("[]"));
}

#[test]
fn statement_rows_come_out_in_document_order() {
    let doc = load_fixture("statement");

    let records = default_extractor().extract(&doc).unwrap();

    assert_eq!(
        records,
        vec![
            TransactionRecord::new("15.3.2024", "Hyvitys Verkkokauppa.com", "12,00"),
            TransactionRecord::new("14.3.2024", "Osto K-Market Töölö", "\u{2212}4,50"),
            TransactionRecord::new("14.3.2024", "Osto K-Market Töölö", "\u{2212}4,50"),
        ]
    );
}

#[test]
fn running_twice_gives_identical_text() {
    let doc = load_fixture("statement");
    let ex = default_extractor();
    let mut first = MemoryClipboard::new();
    let mut second = MemoryClipboard::new();

    ex.run(&doc, &mut first).unwrap();
    ex.run(&doc, &mut second).unwrap();

    assert!(first.contents().is_some());
    assert_eq!(first.contents(), second.contents());
}

#[test]
fn clipboard_text_parses_back_to_the_rows() {
    let doc = load_fixture("statement");
    let ex = default_extractor();
    let mut clip = MemoryClipboard::new();

    let copied = ex.run(&doc, &mut clip).unwrap();
    let parsed = from_json(clip.contents().unwrap()).unwrap();

    assert_eq!(parsed.len(), copied);
    assert_eq!(parsed, ex.extract(&doc).unwrap());
}

#[test]
fn missing_amount_leaves_clipboard_untouched() {
    let doc = load_fixture("broken");
    let mut clip = MemoryClipboard::with_contents("previous");

    let err = default_extractor().run(&doc, &mut clip).unwrap_err();

    assert!(err.is_missing_field());
    assert!(matches!(
        err,
        ExtractError::MissingField {
            row: 2,
            field: Field::Amount,
            ..
        }
    ));
    assert_eq!(clip.contents(), Some("previous"));
    assert_eq!(clip.writes(), 0);
}

#[test]
fn skip_incomplete_keeps_the_complete_rows() {
    let doc = load_fixture("broken");
    let ex = Extractor::builder()
        .missing_field(MissingFieldPolicy::SkipRow)
        .build()
        .unwrap();

    let records = ex.extract(&doc).unwrap();

    assert_eq!(
        records,
        vec![
            TransactionRecord::new("2.1.2024", "Osto Kahvila", "\u{2212}3,20"),
            TransactionRecord::new("4.1.2024", "Osto Kirjakauppa", "\u{2212}19,90"),
        ]
    );
}

#[test]
fn single_refund_row_is_copied_byte_for_byte() {
    let doc = HtmlDocument::parse(
        r#"<table><tr class="transaction-row">
             <td id="transactionDate">2024-03-15</td>
             <td id="transactionTitle">Refund</td>
             <td id="transactionAmount">12.00</td>
           </tr></table>"#,
    );
    let mut clip = MemoryClipboard::new();

    default_extractor().run(&doc, &mut clip).unwrap();

    let expected = r#"[
  {
    "date": "2024-03-15",
    "title": "Refund",
    "amount": "12.00"
  }
]"#;
    assert_eq!(clip.contents(), Some(expected));
}

#[test]
fn custom_selectors_read_other_markup() {
    let doc = HtmlDocument::parse(
        r#"<ul>
             <li class="txn"><time>2024-01-01</time><b class="t">Coffee Shop</b><i class="a">-4.50</i></li>
             <li class="txn"><time>2024-01-02</time><b class="t">Grocery Store</b><i class="a">-32.10</i></li>
           </ul>"#,
    );
    let ex = Extractor::builder()
        .row_selector("li.txn")
        .date_selector("time")
        .title_selector(".t")
        .amount_selector(".a")
        .build()
        .unwrap();

    let json = ex.render(&doc).unwrap();

    let expected = r#"[
  {
    "date": "2024-01-01",
    "title": "Coffee Shop",
    "amount": "-4.50"
  },
  {
    "date": "2024-01-02",
    "title": "Grocery Store",
    "amount": "-32.10"
  }
]"#;
    assert_eq!(json, expected);
}
