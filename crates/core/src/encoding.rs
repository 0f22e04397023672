//! Character encoding detection for fetched pages.
//!
//! The encoding is taken from, in order: a byte order mark, the
//! `Content-Type` header charset, a `<meta charset>` or `http-equiv`
//! declaration in the first kilobyte of the page, and finally UTF-8.

use encoding_rs::{Encoding, UTF_8};

/// How far into the body a `<meta>` charset declaration is looked for.
pub const SNIFF_LIMIT: usize = 1024;

/// Decodes a page body into text.
///
/// Undecodable sequences become U+FFFD; decoding never fails.
pub fn decode_html(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = Encoding::for_bom(bytes)
        .map(|(encoding, _)| encoding)
        .or_else(|| content_type.and_then(charset_param).and_then(label_encoding))
        .or_else(|| sniff_meta_charset(bytes))
        .unwrap_or(UTF_8);

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::debug!(encoding = used.name(), "page contained undecodable bytes");
    }

    text.into_owned()
}

/// Extracts the `charset` parameter of a `Content-Type`-style value.
fn charset_param(value: &str) -> Option<&str> {
    value.split(';').skip(1).find_map(|param| {
        let (name, charset) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let charset = charset.trim().trim_matches(|c| c == '"' || c == '\'').trim();
        (!charset.is_empty()).then_some(charset)
    })
}

fn label_encoding(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.as_bytes())
}

/// Looks for a charset declared by a `<meta>` tag near the top of the page.
///
/// Both `<meta charset="gbk">` and
/// `<meta http-equiv="Content-Type" content="text/html; charset=gbk">` are
/// recognized.
fn sniff_meta_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(SNIFF_LIMIT)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();

    let mut rest = head.as_str();
    while let Some(start) = rest.find("<meta") {
        let tag = &rest[start..];
        let tag = &tag[..tag.find('>').unwrap_or(tag.len())];

        if let Some(encoding) = tag_charset(tag).and_then(label_encoding) {
            return Some(encoding);
        }
        rest = &rest[start + "<meta".len()..];
    }

    None
}

/// Returns the value following the first `charset` in a single meta tag.
fn tag_charset(tag: &str) -> Option<&str> {
    let after = &tag[tag.find("charset")? + "charset".len()..];
    let after = after.trim_start().strip_prefix('=')?.trim_start();
    let after = after.trim_start_matches(['"', '\'']);

    let end = after
        .find(|c: char| c == '"' || c == '\'' || c == ';' || c == '/' || c.is_ascii_whitespace())
        .unwrap_or(after.len());
    let charset = &after[..end];

    (!charset.is_empty()).then_some(charset)
}
