//! Example file resolution.
//!
//! Maps a caller-supplied name to a single file under a category's
//! directory subtree. Three strategies are tried in order, first hit wins:
//!
//! 1. Exact filename match (extension included if the caller passed one)
//! 2. Name plus each recognized extension, in extension-list order
//! 3. Case-insensitive substring match against file stems, in
//!    extension-list order then traversal order
//!
//! Traversal is depth-first with lexicographically sorted directory
//! entries, so resolution is reproducible for a given tree.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::category::Category;
use crate::config::ResourceConfig;
use crate::error::{Error, Result};
use crate::EXAMPLE_EXTENSIONS;

/// A successfully resolved example.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// File contents, read as UTF-8 text.
    pub content: String,
    /// Path relative to the base directory, for display only.
    pub relative_path: String,
}

/// Resolves example names to files under category directories.
///
/// Stateless between calls: every resolution re-walks the category subtree.
/// The dataset is small and read-only within a process lifetime, so no index
/// is built.
pub struct Resolver<'a> {
    config: &'a ResourceConfig,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over the given resource tree.
    pub fn new(config: &'a ResourceConfig) -> Self {
        Self { config }
    }

    /// Resolve `name` within `category`.
    ///
    /// Returns [`Error::ExampleNotFound`] when no strategy matches,
    /// [`Error::DirectoryMissing`] when the category directory does not
    /// exist, and [`Error::ReadFailure`] when a matched file cannot be read.
    pub fn resolve(&self, category: Category, name: &str) -> Result<Resolved> {
        let dir = self.config.category_dir(category);
        if !dir.is_dir() {
            return Err(Error::DirectoryMissing(dir));
        }

        // An empty query would substring-match every stem.
        if name.is_empty() {
            return Err(Error::ExampleNotFound {
                category,
                name: name.to_string(),
            });
        }

        if let Some(path) = find_exact(&dir, name) {
            return self.read(path);
        }

        for ext in EXAMPLE_EXTENSIONS {
            let file_name = format!("{name}{ext}");
            if let Some(path) = find_exact(&dir, &file_name) {
                return self.read(path);
            }
        }

        if let Some(path) = find_fuzzy(&dir, name) {
            return self.read(path);
        }

        Err(Error::ExampleNotFound {
            category,
            name: name.to_string(),
        })
    }

    fn read(&self, path: PathBuf) -> Result<Resolved> {
        let content = fs::read_to_string(&path).map_err(|source| {
            tracing::error!("Located {} but failed to read it: {}", path.display(), source);
            Error::ReadFailure { path: path.clone(), source }
        })?;

        let relative_path = self.config.display_path(&path);
        tracing::debug!("Resolved example: {}", relative_path);

        Ok(Resolved {
            content,
            relative_path,
        })
    }
}

/// Walk a directory tree depth-first with lexicographically sorted entries,
/// yielding files only. Unreadable entries are skipped.
pub(crate) fn walk_sorted(dir: &Path) -> impl Iterator<Item = DirEntry> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
}

/// First file in traversal order whose full filename equals `file_name`.
fn find_exact(dir: &Path, file_name: &str) -> Option<PathBuf> {
    walk_sorted(dir)
        .find(|entry| entry.file_name().to_str() == Some(file_name))
        .map(DirEntry::into_path)
}

/// First file whose stem contains `query`, case-insensitively. Files are
/// considered in extension-list order, then traversal order within each
/// extension; no ranking beyond that.
fn find_fuzzy(dir: &Path, query: &str) -> Option<PathBuf> {
    let query = query.to_lowercase();
    for ext in EXAMPLE_EXTENSIONS {
        for entry in walk_sorted(dir) {
            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };
            let Some(stem) = file_name.strip_suffix(ext) else {
                continue;
            };
            if stem.to_lowercase().contains(&query) {
                return Some(entry.into_path());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        File::create(path)
            .unwrap()
            .write_all(content.as_bytes())
            .unwrap();
    }

    fn fixture() -> (TempDir, ResourceConfig) {
        let dir = TempDir::new().unwrap();
        let config = ResourceConfig::new(dir.path());
        fs::create_dir_all(config.category_dir(Category::Components)).unwrap();
        (dir, config)
    }

    #[test]
    fn test_exact_match_with_extension() {
        let (_dir, config) = fixture();
        let root = config.category_dir(Category::Components);
        write_file(&root, "Button.tsx", "export const Button = () => null;");

        let resolver = Resolver::new(&config);
        let resolved = resolver.resolve(Category::Components, "Button.tsx").unwrap();
        assert_eq!(resolved.content, "export const Button = () => null;");
        assert!(resolved
            .relative_path
            .ends_with("components/Button.tsx"));
    }

    #[test]
    fn test_extension_qualified_match() {
        let (_dir, config) = fixture();
        let root = config.category_dir(Category::Components);
        write_file(&root, "Button.tsx", "button source");

        let resolver = Resolver::new(&config);
        let resolved = resolver.resolve(Category::Components, "Button").unwrap();
        assert_eq!(resolved.content, "button source");
    }

    #[test]
    fn test_extension_order_tie_break() {
        let (_dir, config) = fixture();
        let root = config.category_dir(Category::Components);
        write_file(&root, "Card.js", "js card");
        write_file(&root, "Card.tsx", "tsx card");

        // .js precedes .tsx in the recognized extension list.
        let resolver = Resolver::new(&config);
        let resolved = resolver.resolve(Category::Components, "Card").unwrap();
        assert_eq!(resolved.content, "js card");
    }

    #[test]
    fn test_match_in_nested_subdirectory() {
        let (_dir, config) = fixture();
        let root = config.category_dir(Category::Components);
        write_file(&root, "forms/TextField.tsx", "text field");

        let resolver = Resolver::new(&config);
        let resolved = resolver.resolve(Category::Components, "TextField").unwrap();
        assert_eq!(resolved.content, "text field");
        assert!(resolved
            .relative_path
            .ends_with("components/forms/TextField.tsx"));
    }

    #[test]
    fn test_fuzzy_substring_match() {
        let (_dir, config) = fixture();
        let root = config.category_dir(Category::Components);
        write_file(&root, "Button.tsx", "button source");

        let resolver = Resolver::new(&config);
        let resolved = resolver.resolve(Category::Components, "Butt").unwrap();
        assert_eq!(resolved.content, "button source");
    }

    #[test]
    fn test_fuzzy_is_case_insensitive() {
        let (_dir, config) = fixture();
        let root = config.category_dir(Category::Components);
        write_file(&root, "Button.tsx", "button source");

        let resolver = Resolver::new(&config);
        let resolved = resolver.resolve(Category::Components, "button").unwrap();
        assert_eq!(resolved.content, "button source");
    }

    #[test]
    fn test_fuzzy_first_hit_in_traversal_order_wins() {
        let (_dir, config) = fixture();
        let root = config.category_dir(Category::Components);
        write_file(&root, "IconButton.tsx", "icon button");
        write_file(&root, "SubmitButton.tsx", "submit button");

        // No ranking by match quality: IconButton sorts first.
        let resolver = Resolver::new(&config);
        let resolved = resolver.resolve(Category::Components, "Button").unwrap();
        assert_eq!(resolved.content, "icon button");
    }

    #[test]
    fn test_qualified_match_beats_fuzzy() {
        let (_dir, config) = fixture();
        let root = config.category_dir(Category::Components);
        write_file(&root, "AButton.tsx", "a button");
        write_file(&root, "Button.tsx", "the button");

        let resolver = Resolver::new(&config);
        let resolved = resolver.resolve(Category::Components, "Button").unwrap();
        assert_eq!(resolved.content, "the button");
    }

    #[test]
    fn test_not_found() {
        let (_dir, config) = fixture();
        let root = config.category_dir(Category::Components);
        write_file(&root, "Button.tsx", "button source");

        let resolver = Resolver::new(&config);
        let err = resolver
            .resolve(Category::Components, "NoSuchThing")
            .unwrap_err();
        assert!(matches!(err, Error::ExampleNotFound { .. }));
        assert_eq!(
            err.to_string(),
            "Example not found in components: NoSuchThing"
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let (_dir, config) = fixture();
        let root = config.category_dir(Category::Components);
        write_file(&root, "Button.tsx", "button source");

        let resolver = Resolver::new(&config);
        let err = resolver.resolve(Category::Components, "").unwrap_err();
        assert!(matches!(err, Error::ExampleNotFound { .. }));
    }

    #[test]
    fn test_directory_missing() {
        let (_dir, config) = fixture();

        // Only the components directory exists in the fixture.
        let resolver = Resolver::new(&config);
        let err = resolver.resolve(Category::Hooks, "useForm").unwrap_err();
        assert!(matches!(err, Error::DirectoryMissing(_)));
    }

    #[test]
    fn test_unrecognized_extension_ignored_by_fuzzy() {
        let (_dir, config) = fixture();
        let root = config.category_dir(Category::Components);
        write_file(&root, "Button.md", "not code");

        let resolver = Resolver::new(&config);
        let err = resolver.resolve(Category::Components, "Butt").unwrap_err();
        assert!(matches!(err, Error::ExampleNotFound { .. }));
    }

    #[test]
    fn test_exact_match_content_is_verbatim() {
        let (_dir, config) = fixture();
        let root = config.category_dir(Category::Components);
        let content = "line one\n\tline two\nline three\n";
        write_file(&root, "Spacer.tsx", content);

        let resolver = Resolver::new(&config);
        let resolved = resolver.resolve(Category::Components, "Spacer.tsx").unwrap();
        assert_eq!(resolved.content, content);
    }
}
