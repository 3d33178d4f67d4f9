//! Human-readable rendering of marshalled buffers for logs

use crate::domain::clipboard::ClipboardFormat;

use super::codec::RECORD_HEADER_LEN;
use super::integer::{read_u32, U32_LEN};

/// Longest text preview rendered per record, in characters
pub const MAX_TEXT_PREVIEW: usize = 256;

/// Render a marshalled buffer for diagnostics.
///
/// Best effort: never fails on malformed input and stops at the first record
/// header that does not fit. Only text payloads are shown, with line breaks
/// and tabs escaped and at most [`MAX_TEXT_PREVIEW`] characters kept.
pub fn dump(buf: &[u8]) -> String {
    if buf.len() < U32_LEN {
        return String::new();
    }

    let count = read_u32(buf);
    let mut pos = U32_LEN;
    let mut out = String::new();
    out.push_str(&format!("size={} formats={}\n", buf.len(), count));

    for _ in 0..count {
        if buf.len() - pos < RECORD_HEADER_LEN {
            break;
        }
        let id = read_u32(&buf[pos..]);
        let len = read_u32(&buf[pos + U32_LEN..]) as usize;
        pos += RECORD_HEADER_LEN;

        let available = len.min(buf.len() - pos);
        if id == ClipboardFormat::Text.id() {
            // One byte past the widest preview so overflow still shows
            let shown = available.min(MAX_TEXT_PREVIEW * 4 + 1);
            let text = String::from_utf8_lossy(&buf[pos..pos + shown]);
            out.push_str(&format!(" fmt={} len={} \"{}\"\n", id, len, preview(&text)));
        } else {
            out.push_str(&format!(" fmt={} len={}\n", id, len));
        }

        if available < len {
            break;
        }
        pos += len;
    }

    out
}

fn preview(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len().min(MAX_TEXT_PREVIEW * 2));
    let mut chars = text.chars();
    for c in chars.by_ref().take(MAX_TEXT_PREVIEW) {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    if chars.next().is_some() {
        escaped.push('…');
    }
    escaped
}
