//! Demo host configuration.

use std::path::{Path, PathBuf};

use anyhow::Context;
use lookahead_widget::config::AutocompleteConfig;
use serde::{Deserialize, Serialize};

/// Configuration file of the demo host.
///
/// ```toml
/// words = "cities.txt"
/// log_level = "debug"
///
/// [widget]
/// placeholder = "Find a city"
/// max_list_length = 8
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Word list, one candidate per line.
    pub words: Option<PathBuf>,

    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: Option<String>,

    /// Widget options.
    pub widget: AutocompleteConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.widget.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_load_nested_widget_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
words = "cities.txt"

[widget]
placeholder = "Find a city"
max_list_length = 8
"#
        )
        .unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.words, Some(PathBuf::from("cities.txt")));
        assert_eq!(config.log_level, None);
        assert_eq!(config.widget.placeholder, "Find a city");
        assert_eq!(config.widget.max_list_length, 8);
        assert!(config.widget.show_icon);
    }

    #[test]
    fn test_invalid_widget_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[widget]\nmax_list_length = 0\n").unwrap();
        assert!(CliConfig::load(file.path()).is_err());
    }
}
