/// Extracts up to `chars` characters of context on each side of the byte span
/// `[start, end)`, trimmed, with an ellipsis marker on any side that was
/// truncated at a text boundary.
pub(crate) fn context_window(text: &str, start: usize, end: usize, chars: usize) -> String {
    let mut lo = start.saturating_sub(chars);
    while lo > 0 && !text.is_char_boundary(lo) {
        lo -= 1;
    }

    let mut hi = end.saturating_add(chars).min(text.len());
    while hi < text.len() && !text.is_char_boundary(hi) {
        hi += 1;
    }

    let mut context = text[lo..hi].trim().to_string();
    if lo > 0 {
        context = format!("...{context}");
    }
    if hi < text.len() {
        context = format!("{context}...");
    }
    context
}
