//! Product taxonomy: a static main-category to subcategory lookup table.
//!
//! The taxonomy constrains the candidate answers presented to the completion
//! service. It is loaded once at startup and never mutated afterwards.

use std::path::Path;

use serde::Deserialize;

/// One record of the taxonomy document.
#[derive(Debug, Deserialize)]
struct TaxonomyRecord {
    categories: Option<String>,
    #[serde(default)]
    subcategories: Vec<String>,
}

/// Immutable category table preserving the document's record order.
///
/// Backed by a vector of entries rather than a map so that iteration order
/// always matches the source document. Duplicate category labels keep the
/// position of the first occurrence and the subcategories of the last one.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    entries: Vec<(String, Vec<String>)>,
}

impl Taxonomy {
    /// Load a taxonomy from a JSON document.
    ///
    /// The document is an array of records with a `categories` field (the
    /// main-category label) and a `subcategories` field (its candidate
    /// subcategories). A missing or unparseable file is not an error: a
    /// diagnostic is logged and an empty taxonomy is returned, which callers
    /// must treat as "no taxonomy available".
    pub fn load<P: AsRef<Path>>(path: P) -> Taxonomy {
        let path = path.as_ref();

        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Taxonomy file {} was not found: {}", path.display(), e);
                return Taxonomy::default();
            }
        };

        let records: Vec<TaxonomyRecord> = match serde_json::from_str(&data) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    "Taxonomy file {} contains invalid JSON: {}",
                    path.display(),
                    e
                );
                return Taxonomy::default();
            }
        };

        let mut taxonomy = Taxonomy::default();
        for record in records {
            // A record without a category label carries no usable candidate.
            let Some(category) = record.categories else {
                continue;
            };
            taxonomy.insert(category, record.subcategories);
        }
        taxonomy
    }

    /// Build a taxonomy from in-memory entries, applying the same duplicate
    /// policy as [`Taxonomy::load`].
    pub fn from_entries<I>(entries: I) -> Taxonomy
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut taxonomy = Taxonomy::default();
        for (category, subcategories) in entries {
            taxonomy.insert(category, subcategories);
        }
        taxonomy
    }

    // Last write wins on a duplicate label; the entry stays at the position
    // of its first occurrence.
    fn insert(&mut self, category: String, subcategories: Vec<String>) {
        match self.entries.iter_mut().find(|(name, _)| *name == category) {
            Some((_, existing)) => *existing = subcategories,
            None => self.entries.push((category, subcategories)),
        }
    }

    /// Main-category labels in document order.
    pub fn main_categories(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Subcategory candidates for a main category; empty when unknown.
    pub fn subcategories(&self, main_category: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(name, _)| name == main_category)
            .map(|(_, subcategories)| subcategories.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
