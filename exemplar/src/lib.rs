//! # Exemplar
//!
//! A coding standards and code example server for React Native teams.
//!
//! Exemplar serves a fixed catalog of standards documents and source-code
//! examples (components, hooks, services, screens, themes) to tool-calling
//! clients over the Model Context Protocol:
//!
//! - **Resolver**: maps a logical name to a file under a category subtree,
//!   falling back from exact to extension-qualified to substring matching
//! - **Catalog**: enumerates every example, grouped by category
//! - **Standards**: fixed markdown documents served verbatim
//! - **MCP server**: JSON-RPC 2.0 over stdio
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use exemplar::{Category, ResourceConfig, Resolver};
//!
//! let config = ResourceConfig::new("/srv/exemplar");
//!
//! // Resolve an example by name
//! let resolved = Resolver::new(&config)
//!     .resolve(Category::Components, "Button")
//!     .unwrap();
//! println!("{}", resolved.content);
//!
//! // List everything
//! let catalog = exemplar::catalog::CatalogBuilder::new(&config).build();
//! println!("{}", catalog.to_text());
//! ```
//!
//! The resource tree is read-only input, laid out as
//! `resources/standards/*.md` and
//! `resources/code-examples/react-native/<category>/**`.

pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod mcp;
pub mod resolver;
pub mod standards;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogBuilder, CategoryListing};
pub use category::Category;
pub use config::ResourceConfig;
pub use error::{Error, Result};
pub use resolver::{Resolved, Resolver};
pub use standards::Standard;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File extensions recognized as code examples, in lookup order. The first
/// extension yielding a match wins during fallback search.
pub const EXAMPLE_EXTENSIONS: [&str; 4] = [".js", ".jsx", ".ts", ".tsx"];
