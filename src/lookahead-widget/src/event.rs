//! Outbound notifications.

/// A notification emitted by the interaction controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutocompleteEvent {
    /// The term changed, by typing or by a reset
    TermChanged(String),
    /// A candidate was selected
    ValueSelected(String),
}

impl AutocompleteEvent {
    /// The string carried by the notification.
    pub fn value(&self) -> &str {
        match self {
            AutocompleteEvent::TermChanged(v) | AutocompleteEvent::ValueSelected(v) => v,
        }
    }

    /// Returns true for a value-selected notification.
    pub fn is_selection(&self) -> bool {
        matches!(self, AutocompleteEvent::ValueSelected(_))
    }
}
