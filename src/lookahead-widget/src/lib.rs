//! # Lookahead Widget
//!
//! A keyboard-navigable autocomplete input for terminal UIs.
//!
//! The caller owns the candidate list and the filtering; the widget tracks the
//! typed term and the active candidate, and reports two notifications back:
//! the term changed, or a value was selected.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lookahead_widget::prelude::*;
//!
//! let mut widget = AutocompleteComponent::new(
//!     AutocompleteConfig::new().with_placeholder("Find a city"),
//! );
//! widget.on_show();
//!
//! match widget.handle_key(key_event) {
//!     ComponentResult::Emit(AutocompleteEvent::TermChanged(term)) => {
//!         widget.set_candidates(search(&term));
//!     }
//!     ComponentResult::Emit(AutocompleteEvent::ValueSelected(value)) => { /* done */ }
//!     _ => {}
//! }
//!
//! widget.render(area, frame.buffer_mut());
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     AutocompleteComponent                    │
//! │   crossterm keys / mouse / paste  ──▶  TermInput (editing)   │
//! │                 │                                            │
//! │  ┌──────────────▼──────────────┐    ┌────────────────────┐   │
//! │  │   AutocompleteController    │───▶│  RenderHost trait  │   │
//! │  │  term | active index | ids  │    │ bounding_box       │   │
//! │  └──────────────┬──────────────┘    │ set_scroll_offset  │   │
//! │                 │                   │ focus              │   │
//! │       AutocompleteEvent             └─────────▲──────────┘   │
//! │   TermChanged | ValueSelected                 │              │
//! │                                   TerminalHost (ratatui)     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The controller only sees [`host::RenderHost`], so it runs headless with
//! [`host::NullHost`] or under a test double with synthetic geometry.

pub mod component;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod host;
pub mod input;
pub mod key;
pub mod registry;
pub mod scroll;
pub mod style;
pub mod terminal_host;
pub mod view;

/// Commonly used types and traits for quick imports.
///
/// ```rust
/// use lookahead_widget::prelude::*;
/// ```
pub mod prelude {
    pub use crate::component::{AutocompleteComponent, Component, ComponentResult, FocusState};
    pub use crate::config::AutocompleteConfig;
    pub use crate::controller::{AutocompleteController, InteractionState};
    pub use crate::error::ConfigError;
    pub use crate::event::AutocompleteEvent;
    pub use crate::host::{BoundingBox, ElementRef, NullHost, RenderHost};
    pub use crate::input::TermInput;
    pub use crate::key::{KeyOutcome, NavKey};
    pub use crate::registry::InstanceRegistry;
    pub use crate::scroll::ListViewport;
    pub use crate::terminal_host::TerminalHost;
    pub use crate::view::AutocompleteView;
}

/// Lookahead widget version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
