//! Signature stamping for finished ASCII frames.
//!
//! A signature is written over the tail of the last row of a frame. Rows are
//! never padded and the signature is never truncated: when the last row is
//! shorter than the signature, the row is replaced by the signature.

/// Stamp `signature` onto the last row of `rows`.
///
/// Returns a new row sequence; the input is left untouched. All rows except
/// the last are copied unchanged. An empty input yields an empty output.
///
/// Lengths are counted in characters, so a multi-byte glyph in the row is
/// either kept or replaced whole.
///
/// ## Example
///
/// ```rust
/// use ascii_canvas_core::add_signature_to_output;
///
/// let rows = ["hello", "world"];
/// assert_eq!(add_signature_to_output(&rows, "XY"), vec!["hello", "worXY"]);
///
/// // The signature overflows a short last row
/// assert_eq!(add_signature_to_output(&["ab"], "XYZ"), vec!["XYZ"]);
/// ```
pub fn add_signature_to_output<S: AsRef<str>>(rows: &[S], signature: &str) -> Vec<String> {
    let mut stamped: Vec<String> = rows.iter().map(|r| r.as_ref().to_owned()).collect();
    if let Some(last) = stamped.last_mut() {
        *last = stamp_row(last.as_str(), signature);
    }
    stamped
}

/// Stamp `signature` onto the end of a single row.
///
/// If the row holds at least as many characters as the signature, its final
/// characters are replaced; otherwise the result is exactly the signature.
pub fn stamp_row(row: &str, signature: &str) -> String {
    let row_len = row.chars().count();
    let sig_len = signature.chars().count();

    if row_len < sig_len {
        tracing::trace!(target: "signature", row_len, sig_len, "signature_overflows_row");
        return signature.to_owned();
    }

    // Byte offset of the first character being overwritten
    let keep = row_len - sig_len;
    let split = row.char_indices().nth(keep).map(|(i, _)| i).unwrap_or(row.len());

    let mut out = String::with_capacity(split + signature.len());
    out.push_str(&row[..split]);
    out.push_str(signature);
    out
}

/// Stamp a newline-separated frame.
///
/// Only the last row is rewritten; everything before it, including `\n` or
/// `\r\n` line endings and a trailing terminator, is kept byte for byte.
/// Empty text is returned unchanged.
///
/// ```rust
/// use ascii_canvas_core::stamp_text;
///
/// assert_eq!(stamp_text("####\n####\n", "ab"), "####\n##ab\n");
/// assert_eq!(stamp_text("####\r\n####\r\n", "ab"), "####\r\n##ab\r\n");
/// ```
pub fn stamp_text(text: &str, signature: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let (body, terminator) = if let Some(body) = text.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = text.strip_suffix('\n') {
        (body, "\n")
    } else {
        (text, "")
    };

    let (head, last) = body.split_at(body.rfind('\n').map_or(0, |i| i + 1));

    let mut out = String::with_capacity(text.len() + signature.len());
    out.push_str(head);
    out.push_str(&stamp_row(last, signature));
    out.push_str(terminator);
    out
}
