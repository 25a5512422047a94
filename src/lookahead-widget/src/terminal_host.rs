//! [`RenderHost`] over terminal rows.
//!
//! The view records where it drew the wrapper, the list container and the
//! search button on every frame; the controller then queries and scrolls
//! that layout between frames.

use std::cell::Cell;

use ratatui::layout::{Position, Rect};
use tracing::trace;

use crate::host::{BoundingBox, ElementRef, RenderHost};
use crate::scroll::ListViewport;

/// Terminal layout of one widget instance.
#[derive(Debug, Default)]
pub struct TerminalHost {
    wrapper: Cell<Rect>,
    viewport: Cell<ListViewport>,
    button: Cell<Option<Rect>>,
    focused: Option<usize>,
}

impl TerminalHost {
    /// Create a host with nothing laid out yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the layout of the frame being drawn.
    pub fn layout(&self, wrapper: Rect, list: Rect, rendered: usize, button: Option<Rect>) {
        let mut viewport = self.viewport.get();
        viewport.relayout(list, rendered);
        self.viewport.set(viewport);
        self.wrapper.set(wrapper);
        self.button.set(button);
    }

    /// Current list viewport.
    pub fn viewport(&self) -> ListViewport {
        self.viewport.get()
    }

    /// Candidate holding keyboard focus, if any.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Return focus to the input and scroll the list back to the top.
    pub fn reset(&mut self) {
        self.focused = None;
        let mut viewport = self.viewport.get();
        viewport.scroll_to(0);
        self.viewport.set(viewport);
    }

    /// Candidate drawn at a screen position.
    pub fn item_at(&self, position: Position) -> Option<usize> {
        let viewport = self.viewport.get();
        if !viewport.area().contains(position) {
            return None;
        }
        viewport.item_at_row(position.y)
    }

    /// Whether a screen position hits the search button.
    pub fn hits_button(&self, position: Position) -> bool {
        self.button
            .get()
            .is_some_and(|button| button.contains(position))
    }
}

impl RenderHost for TerminalHost {
    fn bounding_box(&self, element: ElementRef) -> Option<BoundingBox> {
        let viewport = self.viewport.get();
        match element {
            ElementRef::Container => {
                let area = viewport.area();
                (area.height > 0).then(|| BoundingBox::new(area.y as f64, area.height as f64))
            }
            ElementRef::Wrapper => {
                let area = self.wrapper.get();
                (area.height > 0).then(|| BoundingBox::new(area.y as f64, area.height as f64))
            }
            ElementRef::Item(index) if index < viewport.total() => {
                Some(BoundingBox::new(viewport.item_top(index) as f64, 1.0))
            }
            ElementRef::Item(_) => None,
        }
    }

    fn set_scroll_offset(&mut self, container: ElementRef, value: f64) {
        if container != ElementRef::Container {
            return;
        }
        let mut viewport = self.viewport.get();
        viewport.scroll_to(value.max(0.0).round() as usize);
        trace!(requested = value, offset = viewport.offset(), "list scrolled");
        self.viewport.set(viewport);
    }

    fn focus(&mut self, element: ElementRef) {
        if let ElementRef::Item(index) = element {
            self.focused = Some(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AutocompleteConfig;
    use crate::controller::AutocompleteController;
    use crate::key::NavKey;
    use crate::registry::InstanceRegistry;

    fn host(rows: u16, rendered: usize) -> TerminalHost {
        let host = TerminalHost::new();
        host.layout(
            Rect::new(0, 0, 30, rows + 3),
            Rect::new(1, 2, 28, rows),
            rendered,
            None,
        );
        host
    }

    #[test]
    fn test_item_boxes_are_rows() {
        let host = host(3, 5);
        assert_eq!(
            host.bounding_box(ElementRef::Item(1)),
            Some(BoundingBox::new(3.0, 1.0))
        );
        assert_eq!(
            host.bounding_box(ElementRef::Container),
            Some(BoundingBox::new(2.0, 3.0))
        );
        assert_eq!(host.bounding_box(ElementRef::Item(5)), None);
    }

    #[test]
    fn test_negative_offset_clamps_to_top() {
        let mut host = host(3, 5);
        host.set_scroll_offset(ElementRef::Container, 2.0);
        assert_eq!(host.viewport().offset(), 2);
        host.set_scroll_offset(ElementRef::Container, -4.0);
        assert_eq!(host.viewport().offset(), 0);
    }

    #[test]
    fn test_controller_keeps_active_row_visible() {
        let registry = InstanceRegistry::new();
        let config = AutocompleteConfig::new().with_items((0..8).map(|i| format!("c{i}")));
        let mut controller = AutocompleteController::with_registry(config, &registry);
        let mut host = host(3, 8);

        for expected in 1..8 {
            controller.on_key_down(NavKey::Down, &mut host);
            assert_eq!(controller.active_index(), expected);
            assert!(host.viewport().is_visible(expected));
            assert_eq!(host.focused(), Some(expected));
        }

        // Wrap to the top
        controller.on_key_down(NavKey::Down, &mut host);
        assert_eq!(host.viewport().offset(), 0);

        // Wrap to the bottom
        controller.on_key_down(NavKey::Up, &mut host);
        assert_eq!(host.viewport().offset(), 5);
        assert!(host.viewport().is_visible(7));
    }

    #[test]
    fn test_hit_testing() {
        let host = TerminalHost::new();
        host.layout(
            Rect::new(0, 0, 30, 6),
            Rect::new(1, 2, 20, 3),
            2,
            Some(Rect::new(22, 0, 8, 1)),
        );
        assert_eq!(host.item_at(Position::new(5, 2)), Some(0));
        assert_eq!(host.item_at(Position::new(5, 3)), Some(1));
        assert_eq!(host.item_at(Position::new(5, 4)), None);
        assert_eq!(host.item_at(Position::new(25, 2)), None);
        assert!(host.hits_button(Position::new(23, 0)));
        assert!(!host.hits_button(Position::new(5, 0)));
    }

    #[test]
    fn test_reset_returns_to_top() {
        let mut host = host(3, 8);
        host.set_scroll_offset(ElementRef::Container, 4.0);
        host.focus(ElementRef::Item(4));
        host.reset();
        assert_eq!(host.viewport().offset(), 0);
        assert_eq!(host.focused(), None);
    }
}
