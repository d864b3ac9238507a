// ABOUTME: DOM capability traits (Document, Element) and their scraper-backed HTML adapter.
// ABOUTME: Lets extraction run against parsed HTML or any synthetic tree used in tests.

//! DOM access for the extractor.
//!
//! The extractor never touches a concrete HTML tree. It sees a [`Document`]
//! that can list rows and an [`Element`] that can find one descendant and
//! report its text. [`HtmlDocument`] implements both on top of `scraper`.

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node};

use crate::compiled::get_or_compile;
use crate::decode::decode_html;

/// Elements whose text is never rendered.
const HIDDEN_TAGS: &[&str] = &["script", "style", "template", "noscript", "head"];

/// Elements that start and end a line when rendered.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr",
    "li", "main", "nav", "ol", "p", "pre", "section", "table", "tbody", "td", "tfoot", "th",
    "thead", "tr", "ul",
];

/// A single element of a document tree.
pub trait Element: Sized {
    /// First descendant matching `selector`, in document order.
    fn query_selector(&self, selector: &str) -> Option<Self>;

    /// The visible text of this element.
    fn text_content(&self) -> String;
}

/// A whole document tree.
pub trait Document {
    type Element<'a>: Element
    where
        Self: 'a;

    /// Every element matching `selector`, in document order.
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element<'_>>;
}

/// A parsed HTML page.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parses a complete HTML document.
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// Parses page bytes in whatever charset the page was saved in.
    pub fn parse_bytes(bytes: &[u8]) -> Self {
        Self::parse(&decode_html(bytes))
    }
}

impl Document for HtmlDocument {
    type Element<'a> = HtmlElement<'a>;

    fn query_selector_all(&self, selector: &str) -> Vec<HtmlElement<'_>> {
        match get_or_compile(selector) {
            Some(sel) => self.html.select(&sel).map(HtmlElement).collect(),
            None => Vec::new(),
        }
    }
}

/// An element borrowed from an [`HtmlDocument`].
#[derive(Clone, Copy)]
pub struct HtmlElement<'a>(ElementRef<'a>);

impl<'a> Element for HtmlElement<'a> {
    fn query_selector(&self, selector: &str) -> Option<Self> {
        let sel = get_or_compile(selector)?;
        self.0.select(&sel).next().map(HtmlElement)
    }

    /// Approximates `innerText` without layout: hidden elements are skipped,
    /// `<br>` and block boundaries become `\n`, and other whitespace runs
    /// collapse to one space. Consecutive line breaks collapse into one, and
    /// table cells are separated by `\n` rather than `\t`.
    fn text_content(&self) -> String {
        let mut raw = String::new();
        collect_visible_text(*self.0, &mut raw);
        raw.split('\n')
            .map(normalize_whitespace)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Appends the text of every rendered descendant of `node` to `out`.
/// Only line breaks from markup are written as `\n`.
fn collect_visible_text(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.extend(
                text.chars()
                    .map(|c| if c.is_ascii_whitespace() { ' ' } else { c }),
            ),
            Node::Element(el) if HIDDEN_TAGS.contains(&el.name()) => {}
            Node::Element(el) => {
                let block = BLOCK_TAGS.contains(&el.name());
                if block {
                    out.push('\n');
                }
                collect_visible_text(child, out);
                if block {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

/// Collapses runs of HTML whitespace into single spaces and trims the ends.
/// Non-breaking spaces are content and survive, as they do in `innerText`.
fn normalize_whitespace(s: &str) -> String {
    s.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}
