//! Row viewport over the rendered candidate list.
//!
//! Terminal rows are the unit: every candidate is one row high.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget};

use crate::style::{SURFACE_1, TEXT_MUTED};

/// Window of rows the list container shows.
///
/// # Example
///
/// ```rust
/// use lookahead_widget::scroll::ListViewport;
/// use ratatui::layout::Rect;
///
/// let mut viewport = ListViewport::new(Rect::new(0, 1, 20, 5), 12);
/// viewport.scroll_to(100);
/// assert_eq!(viewport.offset(), 7); // clamped to 12 - 5
/// assert_eq!(viewport.visible_range(), 7..12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListViewport {
    /// Area of the list container (inside its border)
    area: Rect,
    /// Number of rendered candidates
    total: usize,
    /// Index of the first visible candidate
    offset: usize,
}

impl ListViewport {
    /// Create a viewport scrolled to the top.
    pub fn new(area: Rect, total: usize) -> Self {
        Self {
            area,
            total,
            offset: 0,
        }
    }

    /// Container area.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Number of rendered candidates.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of rows that fit in the container.
    pub fn rows(&self) -> usize {
        self.area.height as usize
    }

    /// Current scroll offset in rows.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Move the container and update the rendered count, keeping the offset
    /// inside the new bounds.
    pub fn relayout(&mut self, area: Rect, total: usize) {
        self.area = area;
        self.total = total;
        self.clamp_offset();
    }

    /// Set the scroll offset.
    pub fn scroll_to(&mut self, offset: usize) {
        self.offset = offset;
        self.clamp_offset();
    }

    /// Top row of a candidate relative to the screen. Negative when it is
    /// scrolled above the container.
    pub fn item_top(&self, index: usize) -> i64 {
        self.area.y as i64 + index as i64 - self.offset as i64
    }

    /// Candidate shown at a screen row, if any.
    pub fn item_at_row(&self, row: u16) -> Option<usize> {
        if row < self.area.y || row >= self.area.bottom() {
            return None;
        }
        let index = self.offset + (row - self.area.y) as usize;
        (index < self.total).then_some(index)
    }

    /// Whether a candidate is inside the container.
    pub fn is_visible(&self, index: usize) -> bool {
        index >= self.offset && index < self.offset + self.rows()
    }

    /// Whether the rendered list is taller than the container.
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.rows()
    }

    /// Range of candidates inside the container.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let end = (self.offset + self.rows()).min(self.total);
        self.offset..end
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.total.saturating_sub(self.rows()));
    }
}

/// Render a vertical scrollbar for the viewport.
pub fn render_scrollbar(area: Rect, buf: &mut Buffer, viewport: &ListViewport) {
    if !viewport.needs_scrollbar() || area.width == 0 || area.height == 0 {
        return;
    }

    let scrollable_range = viewport.total.saturating_sub(viewport.rows());
    let mut scrollbar_state = ScrollbarState::new(scrollable_range).position(viewport.offset);

    Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .track_symbol(Some("│"))
        .track_style(Style::default().fg(SURFACE_1))
        .thumb_symbol("█")
        .thumb_style(Style::default().fg(TEXT_MUTED))
        .render(area, buf, &mut scrollbar_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_clamped() {
        let mut viewport = ListViewport::new(Rect::new(0, 0, 10, 4), 10);
        viewport.scroll_to(9);
        assert_eq!(viewport.offset(), 6);

        viewport.relayout(Rect::new(0, 0, 10, 4), 3);
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn test_item_top_follows_offset() {
        let mut viewport = ListViewport::new(Rect::new(0, 2, 10, 4), 10);
        assert_eq!(viewport.item_top(0), 2);
        viewport.scroll_to(3);
        assert_eq!(viewport.item_top(0), -1);
        assert_eq!(viewport.item_top(3), 2);
    }

    #[test]
    fn test_item_at_row() {
        let mut viewport = ListViewport::new(Rect::new(0, 2, 10, 3), 4);
        viewport.scroll_to(1);
        assert_eq!(viewport.item_at_row(1), None);
        assert_eq!(viewport.item_at_row(2), Some(1));
        assert_eq!(viewport.item_at_row(4), Some(3));
        assert_eq!(viewport.item_at_row(5), None);
    }

    #[test]
    fn test_visibility() {
        let mut viewport = ListViewport::new(Rect::new(0, 0, 10, 3), 8);
        assert!(viewport.needs_scrollbar());
        viewport.scroll_to(2);
        assert!(!viewport.is_visible(1));
        assert!(viewport.is_visible(4));
        assert!(!viewport.is_visible(5));
        assert_eq!(viewport.visible_range(), 2..5);
    }

    #[test]
    fn test_short_list_has_no_scrollbar() {
        let viewport = ListViewport::new(Rect::new(0, 0, 10, 5), 2);
        assert!(!viewport.needs_scrollbar());
        assert_eq!(viewport.visible_range(), 0..2);
    }
}
