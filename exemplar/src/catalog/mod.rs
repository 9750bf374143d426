//! Example catalog enumeration.
//!
//! Walks every category directory and produces a grouped listing of example
//! names (file stems, extension stripped). Like the resolver, enumeration
//! considers files in extension-list order then traversal order, so the
//! catalog is deterministic for a given tree.

use std::collections::HashSet;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::category::Category;
use crate::config::ResourceConfig;
use crate::resolver::walk_sorted;
use crate::EXAMPLE_EXTENSIONS;

/// Example names for a single category, in enumeration order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryListing {
    pub category: Category,
    pub examples: Vec<String>,
}

/// The full example catalog: one listing per category, in category
/// declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub categories: Vec<CategoryListing>,
}

impl Catalog {
    /// Example names for a category, empty when the category is absent from
    /// this catalog.
    pub fn examples(&self, category: Category) -> &[String] {
        self.categories
            .iter()
            .find(|listing| listing.category == category)
            .map(|listing| listing.examples.as_slice())
            .unwrap_or(&[])
    }

    /// True when no category has any examples.
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|listing| listing.examples.is_empty())
    }

    /// Plain-text rendering, one line per category.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.categories.len());
        for listing in &self.categories {
            if listing.examples.is_empty() {
                lines.push(format!("{}: (none)", listing.category));
            } else {
                lines.push(format!(
                    "{}: {}",
                    listing.category,
                    listing.examples.join(", ")
                ));
            }
        }
        lines.join("\n")
    }
}

// Serialized as a map of category name to example names. Entries are written
// in declaration order, which a derived map-backed Serialize would not
// preserve.
impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for listing in &self.categories {
            map.serialize_entry(listing.category.name(), &listing.examples)?;
        }
        map.end()
    }
}

/// Builds the example catalog by walking category directories.
pub struct CatalogBuilder<'a> {
    config: &'a ResourceConfig,
}

impl<'a> CatalogBuilder<'a> {
    /// Create a builder over the given resource tree.
    pub fn new(config: &'a ResourceConfig) -> Self {
        Self { config }
    }

    /// Enumerate every category.
    ///
    /// Never fails: a missing or unreadable category directory degrades to
    /// an empty listing for that category.
    pub fn build(&self) -> Catalog {
        let categories = Category::ALL
            .iter()
            .map(|&category| self.build_category(category))
            .collect();
        Catalog { categories }
    }

    /// Enumerate a single category.
    pub fn build_category(&self, category: Category) -> CategoryListing {
        CategoryListing {
            category,
            examples: self.list_examples(category),
        }
    }

    fn list_examples(&self, category: Category) -> Vec<String> {
        let dir = self.config.category_dir(category);
        if !dir.is_dir() {
            tracing::warn!(
                "Category directory missing, listing {} as empty: {}",
                category,
                dir.display()
            );
            return Vec::new();
        }

        // Duplicate stems (same name under two subdirectories, or a .ts and
        // .tsx pair) are listed once, first occurrence wins.
        let mut seen = HashSet::new();
        let mut examples = Vec::new();
        for ext in EXAMPLE_EXTENSIONS {
            for entry in walk_sorted(&dir) {
                let Some(file_name) = entry.file_name().to_str() else {
                    continue;
                };
                let Some(stem) = file_name.strip_suffix(ext) else {
                    continue;
                };
                if seen.insert(stem.to_string()) {
                    examples.push(stem.to_string());
                }
            }
        }
        examples
    }
}
