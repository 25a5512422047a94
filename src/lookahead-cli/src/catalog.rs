//! Word list and the host-side filtering fed to the widget.

use std::path::Path;

use anyhow::Context;

/// Used when no word list is given.
const BUILTIN_WORDS: &[&str] = &[
    "Amsterdam",
    "Athens",
    "Barcelona",
    "Berlin",
    "Bern",
    "Bratislava",
    "Brussels",
    "Bucharest",
    "Budapest",
    "Copenhagen",
    "Dublin",
    "Edinburgh",
    "Helsinki",
    "Lisbon",
    "Ljubljana",
    "London",
    "Luxembourg",
    "Madrid",
    "Milan",
    "Munich",
    "Oslo",
    "Paris",
    "Prague",
    "Reykjavik",
    "Riga",
    "Rome",
    "Rotterdam",
    "Sofia",
    "Stockholm",
    "Tallinn",
    "Valletta",
    "Vienna",
    "Vilnius",
    "Warsaw",
    "Zagreb",
    "Zurich",
];

/// Candidate source of the demo host.
#[derive(Debug, Clone)]
pub struct Catalog {
    words: Vec<String>,
}

impl Catalog {
    /// The built-in city list.
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN_WORDS.iter().map(|w| w.to_string()))
    }

    /// Load a word list, one word per line. Blank lines are skipped.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?;
        Ok(Self::from_words(content.lines().map(str::to_string)))
    }

    fn from_words(words: impl IntoIterator<Item = String>) -> Self {
        let words = words
            .into_iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Words containing `term`, case-insensitively, in list order. An empty
    /// term matches nothing.
    pub fn filter(&self, term: &str) -> Vec<String> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.words
            .iter()
            .filter(|w| w.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.filter("BER"), vec!["Berlin", "Bern"]);
        assert_eq!(catalog.filter("dam"), vec!["Amsterdam", "Rotterdam"]);
    }

    #[test]
    fn test_empty_term_matches_nothing() {
        assert!(Catalog::builtin().filter("  ").is_empty());
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha\n\n  beta  \n").unwrap();
        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.filter("b"), vec!["beta"]);
    }
}
