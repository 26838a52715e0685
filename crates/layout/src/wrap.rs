//! Greedy word wrapping against the static font metrics.

use crate::metrics::text_width;
use folio_style::{FontFamily, FontWeight};

/// Splits `text` into the minimum number of greedy lines whose measured
/// width stays within `max_width` layout units.
///
/// Words are never split; a single word wider than `max_width` occupies its
/// own line unmodified. Runs of whitespace collapse to single spaces, so
/// joining the result with `" "` reproduces the whitespace-normalised
/// input.
pub fn wrap_text(
    text: &str,
    family: FontFamily,
    weight: FontWeight,
    size: f32,
    max_width: f32,
) -> Vec<String> {
    let space_width = text_width(" ", family, weight, size);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0f32;

    for word in text.split_whitespace() {
        let word_width = text_width(word, family, weight, size);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + space_width + word_width > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += space_width + word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
