use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// Cut `text` down to `max_chars` grapheme clusters, appending `...` when
/// anything was removed. Never splits a cluster.
pub(in crate::tui) fn truncate_with_ellipsis(text: &str, max_chars: usize) -> Cow<'_, str> {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max_chars {
        return Cow::Borrowed(text);
    }
    let keep = max_chars.saturating_sub(3);
    let mut truncated: String = graphemes[..keep].concat();
    truncated.push_str("...");
    Cow::Owned(truncated)
}
