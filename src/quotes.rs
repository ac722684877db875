//! Motivational quote catalog.
//!
//! The catalog is loaded once at startup and is read-only afterwards. It is
//! never empty: every constructor rejects an empty list, so picking a quote
//! cannot fail.
//!
//! The default catalog is compiled into the binary from `assets/quotes.json`.
//! A user-provided JSON file with the same shape can replace it:
//!
//! ```json
//! [{ "quote": "Lost time is never found again.", "author": "Benjamin Franklin" }]
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

const EMBEDDED_QUOTES: &str = include_str!("../assets/quotes.json");

/// A single quote and its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

impl Quote {
    pub fn new(quote: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" -{}", self.quote, self.author)
    }
}

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("quote catalog is empty")]
    Empty,
    #[error("failed to read quote catalog `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed quote catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Non-empty, immutable list of quotes.
#[derive(Debug, Clone)]
pub struct QuoteCatalog {
    quotes: Vec<Quote>,
}

impl QuoteCatalog {
    /// Builds a catalog from a list of quotes.
    ///
    /// # Errors
    /// Returns [`CatalogError::Empty`] when `quotes` is empty.
    pub fn new(quotes: Vec<Quote>) -> Result<Self, CatalogError> {
        if quotes.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { quotes })
    }

    /// Parses a JSON array of `{quote, author}` records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let quotes: Vec<Quote> = serde_json::from_str(json)?;
        Self::new(quotes)
    }

    /// Reads and parses a JSON catalog file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The catalog shipped with the application.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_QUOTES)
    }

    /// Loads the catalog at `path` if given, falling back to the embedded one.
    ///
    /// A broken override is logged and ignored. Only a broken embedded catalog
    /// is returned as an error.
    pub fn load_or_embedded(path: Option<&Path>) -> Result<Self, CatalogError> {
        if let Some(path) = path {
            match Self::from_path(path) {
                Ok(catalog) => {
                    tracing::info!(path = %path.display(), count = catalog.len(), "loaded quote catalog");
                    return Ok(catalog);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring quote catalog, using built-in quotes");
                }
            }
        }
        Self::embedded()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Quote> {
        self.quotes.get(index)
    }

    /// Returns the quote at `index`, wrapping around the catalog length.
    pub fn quote_at(&self, index: usize) -> &Quote {
        &self.quotes[index % self.quotes.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.iter()
    }

    /// Returns a uniformly random index in `[0, len)`.
    ///
    /// Consecutive picks may repeat.
    pub fn pick_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.quotes.len())
    }

    /// Returns a uniformly random quote.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Quote {
        &self.quotes[self.pick_index(rng)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn two_quotes() -> QuoteCatalog {
        QuoteCatalog::new(vec![Quote::new("A", "X"), Quote::new("B", "Y")]).unwrap()
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(QuoteCatalog::new(Vec::new()), Err(CatalogError::Empty)));
        assert!(matches!(QuoteCatalog::from_json("[]"), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = QuoteCatalog::from_json("{\"quote\": \"A\"}");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = QuoteCatalog::embedded().unwrap();
        assert!(catalog.len() > 1);
        assert!(catalog.iter().all(|q| !q.quote.is_empty() && !q.author.is_empty()));
    }

    #[test]
    fn test_picks_only_from_catalog() {
        let catalog = two_quotes();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let q = catalog.pick_random(&mut rng);
            assert!(q.quote == "A" || q.quote == "B");
        }
    }

    #[test]
    fn test_pick_distribution_is_roughly_uniform() {
        let catalog = QuoteCatalog::new(
            (0..5).map(|i| Quote::new(format!("q{}", i), "anon")).collect(),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0usize; 5];
        let samples = 50_000;
        for _ in 0..samples {
            let i = catalog.pick_index(&mut rng);
            assert!(i < 5);
            counts[i] += 1;
        }
        let expected = samples as f64 / 5.0;
        for count in counts {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "bucket count {} too far from {}", count, expected);
        }
    }

    #[test]
    fn test_missing_override_falls_back() {
        let catalog = QuoteCatalog::load_or_embedded(Some(Path::new("/nonexistent/quotes.json"))).unwrap();
        assert_eq!(catalog.len(), QuoteCatalog::embedded().unwrap().len());
    }

    #[test]
    fn test_quote_display() {
        assert_eq!(Quote::new("A", "X").to_string(), "\"A\" -X");
    }
}
