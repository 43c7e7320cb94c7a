use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Horizontal placement of text inside a fixed-width cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Number of terminal columns `text` occupies.
///
/// Wide (CJK, emoji) characters count as two columns and combining marks as
/// zero. If the string contains a character with no defined width (control
/// characters), the measurement is unreliable and the character count is
/// returned instead.
pub fn display_width(text: &str) -> usize {
    if text.chars().any(|ch| ch.width().is_none()) {
        return text.chars().count();
    }
    text.width()
}

/// Pad `text` with spaces so it occupies `width` columns.
///
/// Text already at or beyond `width` is returned unchanged.
pub fn pad_text(text: &str, width: usize, alignment: Alignment) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(text)));
    match alignment {
        Alignment::Left => format!("{text}{fill}"),
        Alignment::Right => format!("{fill}{text}"),
    }
}

/// Shorten `text` until it fits in `max_width` columns by repeatedly dropping
/// its last `step` characters and appending `...`.
///
/// Each pass removes whole characters regardless of their width, so the
/// result can land several columns under `max_width`. The loop is bounded by
/// the character count; if that bound is hit the text is cut by character
/// count instead.
pub fn truncate_coarse(text: &str, max_width: usize, step: usize) -> String {
    let mut current = text.to_string();
    let mut remaining = text.chars().count() + 1;

    while display_width(&current) > max_width {
        if remaining == 0 {
            return truncate_chars(text, max_width);
        }
        remaining -= 1;

        let keep = current.chars().count().saturating_sub(step);
        current = current.chars().take(keep).collect::<String>() + "...";
    }

    current
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if max_chars < 3 {
        return text.chars().take(max_chars).collect();
    }
    text.chars().take(max_chars - 3).collect::<String>() + "..."
}
