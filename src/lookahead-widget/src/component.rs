//! Component trait and the interactive autocomplete component.
//!
//! [`AutocompleteComponent`] wires crossterm events to the interaction
//! controller: navigation keys go to the controller, editing keys go to the
//! input line and come back as term changes, left clicks on a candidate select
//! it explicitly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::Widget;
use tracing::debug;

use crate::config::AutocompleteConfig;
use crate::controller::AutocompleteController;
use crate::event::AutocompleteEvent;
use crate::input::TermInput;
use crate::key::NavKey;
use crate::registry::InstanceRegistry;
use crate::terminal_host::TerminalHost;
use crate::view::AutocompleteView;

/// Result of handling an event in a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentResult<T = ()> {
    /// Component handled the event
    Handled,
    /// Component did not handle the event, propagate to parent
    NotHandled,
    /// Component handled the event and emitted a notification
    Emit(T),
}

impl<T> ComponentResult<T> {
    /// Returns true if the component handled the event.
    pub fn is_handled(&self) -> bool {
        !matches!(self, ComponentResult::NotHandled)
    }

    /// The emitted notification, if any.
    pub fn emitted(&self) -> Option<&T> {
        match self {
            ComponentResult::Emit(v) => Some(v),
            _ => None,
        }
    }

    /// Maps the emitted value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ComponentResult<U> {
        match self {
            ComponentResult::Handled => ComponentResult::Handled,
            ComponentResult::NotHandled => ComponentResult::NotHandled,
            ComponentResult::Emit(v) => ComponentResult::Emit(f(v)),
        }
    }
}

/// Where keyboard focus sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// Component is not focused
    #[default]
    Unfocused,
    /// The input line has focus
    Input,
    /// The candidate at this index has focus
    Candidate(usize),
}

impl FocusState {
    /// Returns true if the component has any form of focus.
    pub fn has_focus(&self) -> bool {
        !matches!(self, FocusState::Unfocused)
    }
}

/// Interface shared by interactive terminal components.
pub trait Component {
    /// Notification type the component emits.
    type Output;

    /// Render the component to the buffer.
    fn render(&self, area: Rect, buf: &mut Buffer);

    /// Handle a key event.
    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<Self::Output>;

    /// Handle a mouse event. Default implementation ignores it.
    fn handle_mouse(&mut self, _mouse: MouseEvent) -> ComponentResult<Self::Output> {
        ComponentResult::NotHandled
    }

    /// Handle pasted text. Default implementation ignores it.
    fn handle_paste(&mut self, _text: &str) -> ComponentResult<Self::Output> {
        ComponentResult::NotHandled
    }

    /// Current focus state.
    fn focus_state(&self) -> FocusState;

    /// Give or take focus.
    fn set_focus(&mut self, focused: bool);

    /// Key hints as (key_label, description).
    fn key_hints(&self) -> Vec<(&'static str, &'static str)>;

    /// Called when the component is about to be shown.
    fn on_show(&mut self) {}
}

/// Autocomplete input with a dropdown candidate list.
#[derive(Debug)]
pub struct AutocompleteComponent {
    controller: AutocompleteController,
    input: TermInput,
    host: TerminalHost,
    focused: bool,
}

impl AutocompleteComponent {
    /// Create a component whose identity comes from the process-wide registry.
    pub fn new(config: AutocompleteConfig) -> Self {
        Self::with_registry(config, InstanceRegistry::global())
    }

    /// Create a component whose identity comes from `registry`.
    pub fn with_registry(config: AutocompleteConfig, registry: &InstanceRegistry) -> Self {
        Self {
            controller: AutocompleteController::with_registry(config, registry),
            input: TermInput::new(),
            host: TerminalHost::new(),
            focused: true,
        }
    }

    /// The interaction controller.
    pub fn controller(&self) -> &AutocompleteController {
        &self.controller
    }

    /// Element identifier, once shown.
    pub fn input_id(&self) -> Option<&str> {
        self.controller.input_id()
    }

    /// Current term.
    pub fn term(&self) -> &str {
        self.controller.term()
    }

    /// Terminal layout of the last frame.
    pub fn host(&self) -> &TerminalHost {
        &self.host
    }

    /// Replace the candidate list.
    pub fn set_candidates(&mut self, items: Vec<String>) {
        self.controller.set_candidates(items);
    }

    /// Set the term programmatically. Emits only if the text changed.
    pub fn set_term(&mut self, term: impl Into<String>) -> Option<AutocompleteEvent> {
        if !self.input.set_value(term) {
            return None;
        }
        self.term_changed().emitted().cloned()
    }

    /// Height needed to show the input and the whole dropdown.
    pub fn desired_height(&self) -> u16 {
        AutocompleteView::new(&self.controller, &self.input, &self.host).desired_height()
    }

    fn term_changed(&mut self) -> ComponentResult<AutocompleteEvent> {
        self.host.reset();
        ComponentResult::Emit(self.controller.on_term_change(self.input.value()))
    }

    fn edited(&mut self, changed: bool) -> ComponentResult<AutocompleteEvent> {
        if changed {
            self.term_changed()
        } else {
            ComponentResult::Handled
        }
    }

    fn navigate(&mut self, key: NavKey) -> ComponentResult<AutocompleteEvent> {
        let outcome = self.controller.on_key_down(key, &mut self.host);
        match outcome.event {
            Some(AutocompleteEvent::TermChanged(_)) => {
                // Escape: the controller already emitted the reset
                self.input.clear();
                self.host.reset();
            }
            Some(AutocompleteEvent::ValueSelected(_)) => self.host.reset(),
            None => {}
        }
        match outcome.event {
            Some(event) => ComponentResult::Emit(event),
            None if outcome.prevent_default => ComponentResult::Handled,
            None => ComponentResult::NotHandled,
        }
    }

    fn select(&mut self, value: Option<String>) -> ComponentResult<AutocompleteEvent> {
        match self.controller.select(value.as_deref()) {
            Some(event) => {
                self.host.reset();
                ComponentResult::Emit(event)
            }
            None => ComponentResult::Handled,
        }
    }
}

impl Component for AutocompleteComponent {
    type Output = AutocompleteEvent;

    fn render(&self, area: Rect, buf: &mut Buffer) {
        AutocompleteView::new(&self.controller, &self.input, &self.host)
            .focused(self.focused)
            .render(area, buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<Self::Output> {
        if !self.focused {
            return ComponentResult::NotHandled;
        }
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Enter | KeyCode::Esc => {
                self.navigate(NavKey::from(&key))
            }
            KeyCode::Backspace => {
                let changed = self.input.backspace();
                self.edited(changed)
            }
            KeyCode::Delete => {
                let changed = self.input.delete();
                self.edited(changed)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let changed = self.input.delete_to_start();
                self.edited(changed)
            }
            KeyCode::Char(c) if plain => {
                let changed = self.input.insert(c);
                self.edited(changed)
            }
            KeyCode::Left => {
                self.input.move_left();
                ComponentResult::Handled
            }
            KeyCode::Right => {
                self.input.move_right();
                ComponentResult::Handled
            }
            KeyCode::Home => {
                self.input.move_home();
                ComponentResult::Handled
            }
            KeyCode::End => {
                self.input.move_end();
                ComponentResult::Handled
            }
            _ => ComponentResult::NotHandled,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> ComponentResult<Self::Output> {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return ComponentResult::NotHandled;
        }
        let position = Position::new(mouse.column, mouse.row);
        if self.host.hits_button(position) {
            debug!("search button clicked");
            return self.select(None);
        }
        let Some(index) = self.host.item_at(position) else {
            return ComponentResult::NotHandled;
        };
        let value = self.controller.candidates().get(index).cloned();
        debug!(index, "candidate clicked");
        self.select(value)
    }

    fn handle_paste(&mut self, text: &str) -> ComponentResult<Self::Output> {
        let changed = self.input.insert_str(text);
        self.edited(changed)
    }

    fn focus_state(&self) -> FocusState {
        if !self.focused {
            return FocusState::Unfocused;
        }
        self.host
            .focused()
            .map_or(FocusState::Input, FocusState::Candidate)
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![("↑↓", "Navigate"), ("Enter", "Select"), ("Esc", "Clear")]
    }

    fn on_show(&mut self) {
        self.controller.activate();
    }
}
