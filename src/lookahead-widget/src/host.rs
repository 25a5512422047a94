//! Rendering capability consumed by the interaction controller.
//!
//! The controller never touches a concrete surface. Scroll-into-view and focus
//! movement go through [`RenderHost`], which a terminal surface, a test double
//! or any other renderer can implement.

/// Handle to a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRef {
    /// The scrollable list container
    Container,
    /// The outer wrapper around input and list
    Wrapper,
    /// The rendered candidate at this index
    Item(usize),
}

/// Vertical extent of a rendered element in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Top edge
    pub top: f64,
    /// Bottom edge
    pub bottom: f64,
}

impl BoundingBox {
    /// Create a box from its top edge and height.
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Capability interface over the rendering surface.
pub trait RenderHost {
    /// Current bounding box of an element, or `None` if it is not rendered.
    fn bounding_box(&self, element: ElementRef) -> Option<BoundingBox>;

    /// Set the scroll offset of a scrollable element.
    fn set_scroll_offset(&mut self, container: ElementRef, value: f64);

    /// Move keyboard focus to an element.
    fn focus(&mut self, element: ElementRef);
}

/// Host with nothing rendered. Scroll and focus requests are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl RenderHost for NullHost {
    fn bounding_box(&self, _element: ElementRef) -> Option<BoundingBox> {
        None
    }

    fn set_scroll_offset(&mut self, _container: ElementRef, _value: f64) {}

    fn focus(&mut self, _element: ElementRef) {}
}
