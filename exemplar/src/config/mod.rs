//! Resource tree layout and startup validation.

use std::path::{Path, PathBuf};

use crate::category::Category;

/// Directory under the resource root holding standards documents.
const STANDARDS_DIR: &str = "standards";

/// Directory under the resource root holding code examples.
const CODE_EXAMPLES_DIR: &str = "code-examples";

/// Platform subdirectory under the code examples root.
const PLATFORM_DIR: &str = "react-native";

/// Layout of the resource tree served by exemplar.
///
/// The tree is read-only input: examples and standards are added or removed
/// by editing the filesystem outside the server. `ResourceConfig` is built
/// once at process start and shared immutably for the life of the process.
///
/// Expected layout, relative to the base directory:
///
/// ```text
/// resources/standards/*.md
/// resources/code-examples/react-native/<category>/**/*.{js,jsx,ts,tsx}
/// ```
#[derive(Debug, Clone)]
pub struct ResourceConfig {
    base_dir: PathBuf,
}

impl ResourceConfig {
    /// Create a config rooted at the given base directory (the directory
    /// containing `resources/`).
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Base directory, as given at construction.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding standards documents.
    pub fn standards_dir(&self) -> PathBuf {
        self.base_dir.join("resources").join(STANDARDS_DIR)
    }

    /// Platform root holding all category directories.
    pub fn examples_dir(&self) -> PathBuf {
        self.base_dir
            .join("resources")
            .join(CODE_EXAMPLES_DIR)
            .join(PLATFORM_DIR)
    }

    /// Directory backing a single category.
    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.examples_dir().join(category.dir_name())
    }

    /// Path relative to the base directory, with forward slashes, for
    /// display in tool output. Falls back to the full path if the file is
    /// outside the base directory.
    pub fn display_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.base_dir) {
            Ok(relative) => relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
            Err(_) => path.display().to_string(),
        }
    }

    /// Best-effort startup check: report expected directories that are
    /// missing so operators get an early warning. Individual requests do not
    /// depend on this having run.
    pub fn verify(&self) -> Vec<PathBuf> {
        let mut missing = Vec::new();

        let standards = self.standards_dir();
        if !standards.is_dir() {
            missing.push(standards);
        }

        for category in Category::ALL {
            let dir = self.category_dir(category);
            if !dir.is_dir() {
                missing.push(dir);
            }
        }

        for dir in &missing {
            tracing::warn!("Expected resource directory missing: {}", dir.display());
        }

        missing
    }
}
