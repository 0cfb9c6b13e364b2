//! Text fitting helpers shared by all layouts.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme::icons::ELLIPSIS;

/// Display width in terminal columns.
pub fn width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Fit `text` into `limit` columns.
///
/// Text that fits is returned unchanged. Longer text keeps `limit - 1`
/// columns and gets one ellipsis glyph. A limit of 0 or 1 renders nothing.
pub fn truncate(text: &str, limit: usize) -> String {
    if width(text) <= limit {
        return text.to_string();
    }
    if limit <= 1 {
        return String::new();
    }

    let budget = limit - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(ELLIPSIS);
    out
}

/// Right-pad with spaces to exactly `columns` (text must already fit).
pub fn pad(text: &str, columns: usize) -> String {
    let w = width(text);
    if w >= columns {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(columns - w))
}

/// Word-wrap `text` to `limit` columns. Words longer than a line are
/// truncated. Blank input lines are kept as paragraph breaks.
pub fn wrap(text: &str, limit: usize) -> Vec<String> {
    if limit == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let word = truncate(word, limit);
            if current.is_empty() {
                current = word;
            } else if width(&current) + 1 + width(&word) <= limit {
                current.push(' ');
                current.push_str(&word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word;
            }
        }
        lines.push(current);
    }
    lines
}
