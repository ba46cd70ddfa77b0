use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// A column of at most `max_width` cells, centered in `r`.
#[must_use]
pub fn centered_column(max_width: u16, r: Rect) -> Rect {
    let width = max_width.min(r.width);
    Rect::new(r.x + (r.width - width) / 2, r.y, width, r.height)
}

/// Number of rows `text` occupies when wrapped at `width` columns.
#[must_use]
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines()
        .map(|line| line.width().max(1).div_ceil(width))
        .sum();
    u16::try_from(rows.max(1)).unwrap_or(u16::MAX)
}
