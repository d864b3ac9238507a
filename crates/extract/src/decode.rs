// ABOUTME: Decodes saved HTML page bytes to text, honoring BOMs and <meta charset> declarations.
// ABOUTME: Falls back to chardetng detection when the page does not declare its encoding.

use encoding_rs::Encoding;

/// How far into the page a charset declaration is looked for.
const PRESCAN_BYTES: usize = 1024;

/// Decodes page bytes to a String.
///
/// A byte order mark wins, then a `<meta charset>` or `http-equiv` content
/// declaration near the top of the page, then chardetng's guess.
pub fn decode_html(bytes: &[u8]) -> String {
    let encoding = match declared_encoding(bytes) {
        Some(encoding) => encoding,
        None => {
            let mut detector = chardetng::EncodingDetector::new();
            detector.feed(bytes, true);
            detector.guess(None, true)
        }
    };
    // decode() sniffs a BOM before applying `encoding`.
    let (decoded, used, had_errors) = encoding.decode(bytes);
    tracing::debug!(encoding = used.name(), had_errors, "decoded page");
    decoded.into_owned()
}

/// The encoding named by a charset declaration in the first bytes of the page.
fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(PRESCAN_BYTES)];
    let lower = head.to_ascii_lowercase();
    let start = lower.windows(8).position(|w| w == b"charset=")? + 8;

    let label = &head[start..];
    let label = label
        .iter()
        .position(|b| !matches!(b, b'"' | b'\'' | b' '))
        .map(|skip| &label[skip..])?;
    let end = label
        .iter()
        .position(|b| matches!(b, b'"' | b'\'' | b';' | b'>' | b'/' | b' ' | b'\t' | b'\n' | b'\r'))
        .unwrap_or(label.len());

    // A page that claims UTF-16 in a meta tag is read as UTF-8.
    Encoding::for_label(&label[..end]).map(Encoding::output_encoding)
}
