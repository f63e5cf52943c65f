//! Checklist key normalization.

/// Convert a checklist item key to its canonical lookup form.
///
/// Lower-cases the input and replaces every run of whitespace with a single
/// `_`. Leading and trailing whitespace is not trimmed. The result contains no
/// whitespace, so normalizing twice changes nothing.
///
/// Whitespace is Unicode `White_Space` as reported by [`char::is_whitespace`]:
/// this includes U+0085 (NEL) and U+00A0 (no-break space), but not U+FEFF
/// (byte order mark) or U+200B (zero-width space). Callers that may receive a
/// BOM must strip it before normalizing.
pub fn normalize(item_key: &str) -> String {
    let lowered = item_key.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }

    out
}
