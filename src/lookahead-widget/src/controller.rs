//! Interaction controller.
//!
//! Owns the typed term and the active candidate index, and turns key and
//! pointer events into state transitions and notifications. The candidate
//! list belongs to the caller; the controller only reads it.
//!
//! # Example
//!
//! ```rust
//! use lookahead_widget::prelude::*;
//!
//! let registry = InstanceRegistry::new();
//! let mut controller = AutocompleteController::with_registry(AutocompleteConfig::new(), &registry);
//! controller.set_candidates(vec!["apple".into(), "apricot".into()]);
//!
//! let mut host = NullHost;
//! controller.on_key_down(NavKey::Down, &mut host);
//! assert_eq!(controller.active_index(), 1);
//!
//! let outcome = controller.on_key_down(NavKey::Enter, &mut host);
//! assert_eq!(outcome.event, Some(AutocompleteEvent::ValueSelected("apple".into())));
//! ```

use tracing::{debug, trace};

use crate::config::AutocompleteConfig;
use crate::event::AutocompleteEvent;
use crate::host::{ElementRef, RenderHost};
use crate::key::{KeyOutcome, NavKey};
use crate::registry::InstanceRegistry;

/// Logical state of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    /// No list shown; the active index is meaningless
    Idle,
    /// List shown; the active index is valid
    Navigating,
}

/// Interaction state machine of an autocomplete widget.
#[derive(Debug, Clone)]
pub struct AutocompleteController {
    config: AutocompleteConfig,
    identity: u64,
    input_id: Option<String>,
    term: String,
    /// Raw index; clamped against the current list on every read.
    active_index: usize,
    list_open: bool,
}

impl AutocompleteController {
    /// Create a controller whose identity comes from the process-wide registry.
    pub fn new(config: AutocompleteConfig) -> Self {
        Self::with_registry(config, InstanceRegistry::global())
    }

    /// Create a controller whose identity comes from `registry`.
    pub fn with_registry(config: AutocompleteConfig, registry: &InstanceRegistry) -> Self {
        let identity = registry.next_identity();
        trace!(identity, "autocomplete instance created");
        Self {
            config,
            identity,
            input_id: None,
            term: String::new(),
            active_index: 0,
            list_open: false,
        }
    }

    /// Resolve the element identifier on first activation.
    ///
    /// Uses the explicit identifier when it is set and non-empty, otherwise
    /// `autocomplete-input-<identity>`. Later calls return the first result.
    pub fn activate(&mut self) -> &str {
        if self.input_id.is_none() {
            let id = match self.config.explicit_input_id() {
                Some(id) => id.to_string(),
                None => InstanceRegistry::default_input_id(self.identity),
            };
            debug!(input_id = %id, "autocomplete activated");
            self.input_id = Some(id);
        }
        self.input_id.as_deref().unwrap_or_default()
    }

    /// Element identifier, if [`activate`](Self::activate) has run.
    pub fn input_id(&self) -> Option<&str> {
        self.input_id.as_deref()
    }

    /// Instance identity taken at construction.
    pub fn identity(&self) -> u64 {
        self.identity
    }

    /// The configuration this controller was built with.
    pub fn config(&self) -> &AutocompleteConfig {
        &self.config
    }

    /// Current term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Current candidate list.
    pub fn candidates(&self) -> &[String] {
        &self.config.filtered_items
    }

    /// Replace the candidate list. The active index is left as is and clamped
    /// on read.
    pub fn set_candidates(&mut self, items: Vec<String>) {
        trace!(count = items.len(), "candidates replaced");
        self.config.filtered_items = items;
    }

    /// Active index, clamped to the current list. Zero when the list is empty.
    pub fn active_index(&self) -> usize {
        self.active_index
            .min(self.candidates().len().saturating_sub(1))
    }

    /// The highlighted candidate.
    pub fn active_candidate(&self) -> Option<&str> {
        self.candidates()
            .get(self.active_index())
            .map(String::as_str)
    }

    /// Whether the rendering layer should show the list.
    pub fn is_list_visible(&self) -> bool {
        self.list_open
            && !self.candidates().is_empty()
            && self.term.chars().count() >= self.config.min_filter_length
    }

    /// Logical state derived from list visibility.
    pub fn state(&self) -> InteractionState {
        if self.is_list_visible() {
            InteractionState::Navigating
        } else {
            InteractionState::Idle
        }
    }

    /// Set the term, reset the active index and emit a term-changed
    /// notification.
    pub fn on_term_change(&mut self, term: impl Into<String>) -> AutocompleteEvent {
        self.term = term.into();
        self.active_index = 0;
        self.list_open = true;
        debug!(term = %self.term, "term changed");
        AutocompleteEvent::TermChanged(self.term.clone())
    }

    /// Dispatch a key.
    pub fn on_key_down<H>(&mut self, key: NavKey, host: &mut H) -> KeyOutcome
    where
        H: RenderHost + ?Sized,
    {
        match key {
            NavKey::Up => {
                self.move_up();
                self.update_scroll_position(host);
                self.focus_active(host);
                KeyOutcome::navigated()
            }
            NavKey::Down => {
                self.move_down();
                self.update_scroll_position(host);
                self.focus_active(host);
                KeyOutcome::navigated()
            }
            NavKey::Enter => KeyOutcome::emitted(self.select(None)),
            NavKey::Escape => KeyOutcome::emitted(Some(self.reset())),
            NavKey::Other => KeyOutcome::ignored(),
        }
    }

    /// Select a candidate.
    ///
    /// Emits `value` when it is given and non-empty, otherwise the first
    /// candidate, regardless of the active index. Does nothing when the list
    /// is empty.
    pub fn select(&mut self, value: Option<&str>) -> Option<AutocompleteEvent> {
        let first = self.config.filtered_items.first()?;
        let selected = match value {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => first.clone(),
        };
        self.list_open = false;
        debug!(value = %selected, "value selected");
        Some(AutocompleteEvent::ValueSelected(selected))
    }

    /// Clear the term.
    fn reset(&mut self) -> AutocompleteEvent {
        let event = self.on_term_change(String::new());
        self.list_open = false;
        event
    }

    fn move_up(&mut self) {
        let len = self.candidates().len();
        if len == 0 {
            return;
        }
        let current = self.active_index();
        self.active_index = if current == 0 { len - 1 } else { current - 1 };
        trace!(active_index = self.active_index, "moved up");
    }

    fn move_down(&mut self) {
        let len = self.candidates().len();
        if len == 0 {
            return;
        }
        self.active_index = (self.active_index() + 1) % len;
        trace!(active_index = self.active_index, "moved down");
    }

    /// Scroll the container so the active candidate is inside it.
    fn update_scroll_position<H>(&self, host: &mut H)
    where
        H: RenderHost + ?Sized,
    {
        if self.candidates().is_empty() {
            return;
        }
        let index = self.active_index();
        let (Some(item), Some(container)) = (
            host.bounding_box(ElementRef::Item(index)),
            host.bounding_box(ElementRef::Container),
        ) else {
            return;
        };

        let item_height = item.height();
        let aligned_top = item_height * index as f64;

        if item.top < container.top {
            trace!(offset = aligned_top, "scroll active item to top");
            host.set_scroll_offset(ElementRef::Container, aligned_top);
        }

        if item.bottom > container.bottom {
            let last_rendered = host.bounding_box(ElementRef::Item(index + 1)).is_none();
            let offset = if last_rendered {
                aligned_top
            } else {
                aligned_top - container.height() + item_height
            };
            trace!(offset, "scroll active item to bottom");
            host.set_scroll_offset(ElementRef::Container, offset);
        }
    }

    fn focus_active<H>(&self, host: &mut H)
    where
        H: RenderHost + ?Sized,
    {
        if self.candidates().is_empty() {
            return;
        }
        let element = ElementRef::Item(self.active_index());
        if host.bounding_box(element).is_some() {
            host.focus(element);
        }
    }
}
