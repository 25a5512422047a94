//! Widget configuration.
//!
//! Every option the widget recognizes lives in [`AutocompleteConfig`]. Only
//! `filtered_items` and `custom_input_id` feed the interaction controller;
//! the rest are read by the terminal surface.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default cap on rendered candidates.
pub const DEFAULT_MAX_LIST_LENGTH: usize = 15;

/// Default minimum term length before the list is shown.
pub const DEFAULT_MIN_FILTER_LENGTH: usize = 1;

/// Default placeholder shown while the term is empty.
pub const DEFAULT_PLACEHOLDER: &str = "Enter search term";

/// Configuration for an autocomplete widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    /// Candidate list supplied by the caller.
    pub filtered_items: Vec<String>,

    /// Maximum number of candidates rendered in the dropdown.
    pub max_list_length: usize,

    /// Minimum term length (in characters) before the dropdown is shown.
    pub min_filter_length: usize,

    /// Placeholder text for an empty input.
    pub placeholder: String,

    /// Reserved. Enter already selects the first candidate.
    pub force_first_result: bool,

    /// Render a `[Search]` button after the input.
    pub show_search_button: bool,

    /// Render a search icon before the input.
    pub show_icon: bool,

    /// Explicit element identifier; an empty string counts as absent.
    pub custom_input_id: Option<String>,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            filtered_items: Vec::new(),
            max_list_length: DEFAULT_MAX_LIST_LENGTH,
            min_filter_length: DEFAULT_MIN_FILTER_LENGTH,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            force_first_result: false,
            show_search_button: false,
            show_icon: true,
            custom_input_id: None,
        }
    }
}

impl AutocompleteConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot be rendered.
    pub fn validate(&self) -> Result<()> {
        if self.max_list_length == 0 {
            return Err(ConfigError::Invalid(
                "max_list_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Explicit identifier, if one was given and is non-empty.
    pub fn explicit_input_id(&self) -> Option<&str> {
        self.custom_input_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Builder: set the candidate list.
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filtered_items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set the display cap.
    pub fn with_max_list_length(mut self, max: usize) -> Self {
        self.max_list_length = max;
        self
    }

    /// Builder: set the minimum term length.
    pub fn with_min_filter_length(mut self, min: usize) -> Self {
        self.min_filter_length = min;
        self
    }

    /// Builder: set the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Builder: set the explicit element identifier.
    pub fn with_custom_input_id(mut self, id: impl Into<String>) -> Self {
        self.custom_input_id = Some(id.into());
        self
    }

    /// Builder: toggle the search button.
    pub fn with_search_button(mut self, show: bool) -> Self {
        self.show_search_button = show;
        self
    }

    /// Builder: toggle the search icon.
    pub fn with_icon(mut self, show: bool) -> Self {
        self.show_icon = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AutocompleteConfig::default();
        assert!(config.filtered_items.is_empty());
        assert_eq!(config.max_list_length, 15);
        assert_eq!(config.min_filter_length, 1);
        assert_eq!(config.placeholder, "Enter search term");
        assert!(!config.force_first_result);
        assert!(!config.show_search_button);
        assert!(config.show_icon);
        assert_eq!(config.custom_input_id, None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AutocompleteConfig::from_toml_str(
            r#"
            placeholder = "Find a city"
            filtered_items = ["Berlin", "Bern"]
            "#,
        )
        .unwrap();

        assert_eq!(config.placeholder, "Find a city");
        assert_eq!(config.filtered_items, vec!["Berlin", "Bern"]);
        assert_eq!(config.max_list_length, 15);
        assert!(config.show_icon);
    }

    #[test]
    fn test_zero_max_list_length_rejected() {
        let err = AutocompleteConfig::from_toml_str("max_list_length = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_mistyped_field_is_parse_error() {
        let err = AutocompleteConfig::from_toml_str("show_icon = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "custom_input_id = \"city-search\"").unwrap();
        writeln!(file, "show_search_button = true").unwrap();

        let config = AutocompleteConfig::load(file.path()).unwrap();
        assert_eq!(config.explicit_input_id(), Some("city-search"));
        assert!(config.show_search_button);
    }

    #[test]
    fn test_load_missing_file() {
        let err = AutocompleteConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_empty_custom_id_counts_as_absent() {
        let config = AutocompleteConfig::new().with_custom_input_id("");
        assert_eq!(config.explicit_input_id(), None);
    }
}
