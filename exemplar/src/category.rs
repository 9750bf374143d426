//! Example categories and their on-disk directories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A category of code examples.
///
/// Each category is backed by exactly one directory under the platform
/// examples root. The mapping is fixed at startup and never changes at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Components,
    Hooks,
    Services,
    Screens,
    Themes,
}

impl Category {
    /// All categories, in declaration order. Catalog output follows this
    /// order.
    pub const ALL: [Category; 5] = [
        Category::Components,
        Category::Hooks,
        Category::Services,
        Category::Screens,
        Category::Themes,
    ];

    /// Canonical category name, as used in tool output and listings.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Components => "components",
            Category::Hooks => "hooks",
            Category::Services => "services",
            Category::Screens => "screens",
            Category::Themes => "themes",
        }
    }

    /// Directory name backing this category under the platform root.
    ///
    /// Identical to [`Category::name`] for every category; earlier server
    /// variants disagreed on `services` vs `helper` and `themes` vs `theme`,
    /// so the mapping is kept as an explicit table.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Components => "components",
            Category::Hooks => "hooks",
            Category::Services => "services",
            Category::Screens => "screens",
            Category::Themes => "themes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Parse a category name, case-insensitively. Singular forms are
    /// accepted because the tool names use them ("component", "hook", ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "components" | "component" => Ok(Category::Components),
            "hooks" | "hook" => Ok(Category::Hooks),
            "services" | "service" => Ok(Category::Services),
            "screens" | "screen" => Ok(Category::Screens),
            "themes" | "theme" => Ok(Category::Themes),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec!["components", "hooks", "services", "screens", "themes"]
        );
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Components".parse::<Category>().unwrap(), Category::Components);
        assert_eq!("HOOKS".parse::<Category>().unwrap(), Category::Hooks);
    }

    #[test]
    fn test_parse_singular() {
        assert_eq!("screen".parse::<Category>().unwrap(), Category::Screens);
        assert_eq!("theme".parse::<Category>().unwrap(), Category::Themes);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "widgets".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown category: widgets");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::Screens).unwrap();
        assert_eq!(json, "\"screens\"");
    }
}
