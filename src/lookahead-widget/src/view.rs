//! Terminal rendering of an autocomplete widget.
//!
//! Row 0 holds the input line (icon, term or placeholder, search button). The
//! dropdown list is drawn below it while the controller reports it visible.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Widget};
use unicode_width::UnicodeWidthStr;

use crate::controller::AutocompleteController;
use crate::input::TermInput;
use crate::scroll::render_scrollbar;
use crate::style::{self, ACCENT, ROUNDED_BORDER, SURFACE_1, SURFACE_2, TEXT_DIM};
use crate::terminal_host::TerminalHost;

/// Icon drawn before the input when `show_icon` is set.
pub const SEARCH_ICON: &str = "⌕";

/// Label of the search button drawn when `show_search_button` is set.
pub const SEARCH_BUTTON: &str = "[Search]";

/// Marker in front of the active candidate.
const ACTIVE_MARKER: char = '>';

/// Borrowed view over a widget's state.
pub struct AutocompleteView<'a> {
    controller: &'a AutocompleteController,
    input: &'a TermInput,
    host: &'a TerminalHost,
    focused: bool,
}

impl<'a> AutocompleteView<'a> {
    /// Create a view. The host records the layout of every rendered frame.
    pub fn new(
        controller: &'a AutocompleteController,
        input: &'a TermInput,
        host: &'a TerminalHost,
    ) -> Self {
        Self {
            controller,
            input,
            host,
            focused: true,
        }
    }

    /// Set whether the widget has focus.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Total height needed to show the input and the full dropdown.
    pub fn desired_height(&self) -> u16 {
        if !self.controller.is_list_visible() {
            return 1;
        }
        rows(self.rendered_count()).saturating_add(3)
    }

    fn rendered_count(&self) -> usize {
        if !self.controller.is_list_visible() {
            return 0;
        }
        self.controller
            .candidates()
            .len()
            .min(self.controller.config().max_list_length)
    }

    /// Draw the input line and return the search button area, if drawn.
    fn render_input(&self, row: Rect, buf: &mut Buffer) -> Option<Rect> {
        let config = self.controller.config();
        let button_width = SEARCH_BUTTON.width() as u16;
        let button = (config.show_search_button && row.width > button_width + 5)
            .then(|| Rect::new(row.right() - button_width, row.y, button_width, 1));
        let field_right = button.map_or(row.right(), |b| b.x.saturating_sub(1));

        for x in row.x..field_right {
            if let Some(cell) = buf.cell_mut((x, row.y)) {
                cell.set_style(Style::default().bg(SURFACE_1));
            }
        }

        let mut x = row.x;
        if config.show_icon {
            buf.set_string(x, row.y, SEARCH_ICON, Style::default().fg(ACCENT).bg(SURFACE_1));
            x += SEARCH_ICON.width() as u16 + 1;
        }

        let field_width = field_right.saturating_sub(x) as usize;
        if self.input.value().is_empty() {
            buf.set_stringn(x, row.y, &config.placeholder, field_width, style::placeholder());
        } else {
            buf.set_stringn(x, row.y, self.input.value(), field_width, style::term());
        }

        // Cursor stays on the input while no candidate holds focus
        if self.focused && self.host.focused().is_none() {
            let cursor_x = x + self.input.cursor_column() as u16;
            if cursor_x < field_right {
                if let Some(cell) = buf.cell_mut((cursor_x, row.y)) {
                    cell.set_bg(ACCENT).set_fg(SURFACE_1);
                }
            }
        }

        if let Some(button) = button {
            buf.set_string(button.x, button.y, SEARCH_BUTTON, Style::default().fg(TEXT_DIM));
        }
        button
    }

    fn render_candidate(&self, text: &str, active: bool, area: Rect, buf: &mut Buffer) {
        let style = style::candidate(active);
        if active {
            for x in area.x..area.right() {
                if let Some(cell) = buf.cell_mut((x, area.y)) {
                    cell.set_bg(SURFACE_2);
                }
            }
            if let Some(cell) = buf.cell_mut((area.x, area.y)) {
                cell.set_char(ACTIVE_MARKER).set_style(style);
            }
        }
        let width = area.width.saturating_sub(2) as usize;
        buf.set_stringn(area.x + 2, area.y, text, width, style);
    }
}

/// Row count saturated to the terminal coordinate range.
fn rows(count: usize) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX)
}

impl Widget for AutocompleteView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 5 {
            return;
        }

        let input_row = Rect::new(area.x, area.y, area.width, 1);
        let button = self.render_input(input_row, buf);

        let rendered = self.rendered_count();
        let below_height = area.height - 1;
        if rendered == 0 || below_height < 3 {
            self.host.layout(area, Rect::default(), 0, button);
            return;
        }

        let list_height = rows(rendered).min(below_height - 2) + 2;
        let popup = Rect::new(area.x, area.y + 1, area.width, list_height);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDER)
            .border_style(style::border(self.focused));
        let inner = block.inner(popup);
        block.render(popup, buf);

        self.host.layout(area, inner, rendered, button);
        let viewport = self.host.viewport();

        let item_width = if viewport.needs_scrollbar() {
            inner.width.saturating_sub(1)
        } else {
            inner.width
        };
        let active = self.controller.active_index();
        let candidates = self.controller.candidates();
        for (row, index) in viewport.visible_range().enumerate() {
            let item_area = Rect::new(inner.x, inner.y + row as u16, item_width, 1);
            self.render_candidate(&candidates[index], index == active, item_area, buf);
        }

        if viewport.needs_scrollbar() {
            let scrollbar_area =
                Rect::new(inner.right().saturating_sub(1), inner.y, 1, inner.height);
            render_scrollbar(scrollbar_area, buf, &viewport);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AutocompleteConfig;
    use crate::registry::InstanceRegistry;
    use pretty_assertions::assert_eq;

    fn row_text(buf: &Buffer, y: u16) -> String {
        let area = buf.area;
        (area.x..area.right())
            .map(|x| buf.cell((x, y)).map_or(" ", |c| c.symbol()))
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn render(
        controller: &AutocompleteController,
        input: &TermInput,
        host: &TerminalHost,
        area: Rect,
    ) -> Buffer {
        let mut buf = Buffer::empty(area);
        AutocompleteView::new(controller, input, host).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_placeholder_when_empty() {
        let registry = InstanceRegistry::new();
        let controller = AutocompleteController::with_registry(
            AutocompleteConfig::new().with_icon(false),
            &registry,
        );
        let input = TermInput::new();
        let host = TerminalHost::new();
        let buf = render(&controller, &input, &host, Rect::new(0, 0, 30, 5));

        assert_eq!(row_text(&buf, 0), "Enter search term");
        assert_eq!(row_text(&buf, 1), "");
    }

    #[test]
    fn test_list_shown_after_min_filter_length() {
        let registry = InstanceRegistry::new();
        let config = AutocompleteConfig::new()
            .with_icon(false)
            .with_min_filter_length(2)
            .with_items(["Berlin", "Bern"]);
        let mut controller = AutocompleteController::with_registry(config, &registry);
        let mut input = TermInput::new();
        let host = TerminalHost::new();
        let area = Rect::new(0, 0, 20, 6);

        input.set_value("B");
        controller.on_term_change(input.value());
        let buf = render(&controller, &input, &host, area);
        assert_eq!(row_text(&buf, 1), "");

        input.set_value("Be");
        controller.on_term_change(input.value());
        let buf = render(&controller, &input, &host, area);
        assert_eq!(row_text(&buf, 0), "Be");
        assert_eq!(row_text(&buf, 1), "╭──────────────────╮");
        assert_eq!(row_text(&buf, 2), "│> Berlin          │");
        assert_eq!(row_text(&buf, 3), "│  Bern            │");
        assert_eq!(row_text(&buf, 4), "╰──────────────────╯");
    }

    #[test]
    fn test_max_list_length_caps_rendered_rows() {
        let registry = InstanceRegistry::new();
        let config = AutocompleteConfig::new()
            .with_max_list_length(2)
            .with_items(["a1", "a2", "a3", "a4"]);
        let mut controller = AutocompleteController::with_registry(config, &registry);
        let input = TermInput::new();
        let host = TerminalHost::new();
        controller.on_term_change("a");

        let view = AutocompleteView::new(&controller, &input, &host);
        assert_eq!(view.desired_height(), 5);

        render(&controller, &input, &host, Rect::new(0, 0, 20, 10));
        assert_eq!(host.viewport().total(), 2);
    }

    #[test]
    fn test_icon_and_search_button() {
        let registry = InstanceRegistry::new();
        let config = AutocompleteConfig::new()
            .with_placeholder("City")
            .with_search_button(true);
        let controller = AutocompleteController::with_registry(config, &registry);
        let input = TermInput::new();
        let host = TerminalHost::new();
        let buf = render(&controller, &input, &host, Rect::new(0, 0, 24, 1));

        assert_eq!(row_text(&buf, 0), "⌕ City          [Search]");
    }

    #[test]
    fn test_huge_list_saturates_height() {
        let registry = InstanceRegistry::new();
        let items: Vec<String> = (0..70_000).map(|i| format!("a{i}")).collect();
        let config = AutocompleteConfig::new()
            .with_max_list_length(usize::MAX)
            .with_items(items);
        let mut controller = AutocompleteController::with_registry(config, &registry);
        let input = TermInput::new();
        let host = TerminalHost::new();
        controller.on_term_change("a");

        let view = AutocompleteView::new(&controller, &input, &host);
        assert_eq!(view.desired_height(), u16::MAX);

        render(&controller, &input, &host, Rect::new(0, 0, 20, 6));
        assert_eq!(host.viewport().rows(), 3);
        assert_eq!(host.viewport().total(), 70_000);
    }
}
