//! Exemplar CLI - inspect the standards and example catalog locally
//!
//! The same resolution and catalog code the MCP server runs, without the
//! protocol: handy for checking what a tree serves before wiring it into an
//! agent.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use exemplar::catalog::CatalogBuilder;
use exemplar::config::ResourceConfig;
use exemplar::standards;
use exemplar::{Category, Resolver, Standard};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "exemplar")]
#[command(
    author,
    version,
    about = "Exemplar - coding standards and code example catalog"
)]
#[command(propagate_version = true)]
struct Cli {
    /// Base directory containing the resources/ tree
    #[arg(long, short = 'r', env = "EXEMPLAR_ROOT", global = true)]
    root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available examples by category
    List {
        /// Restrict the listing to one category
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Output format (text, json)
        #[arg(long, short = 'o', default_value = "text")]
        format: String,
    },

    /// Resolve and print one example
    Get {
        /// Category (components, hooks, services, screens, themes)
        category: String,

        /// Example name; partial names match by substring
        name: String,
    },

    /// Print a standards document
    Standard {
        /// Standard identifier (project_structure, api_communication,
        /// component_design, state_management)
        id: String,
    },

    /// List the known standard identifiers
    Standards,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let config = ResourceConfig::new(root);

    match cli.command {
        Commands::List { category, format } => {
            let builder = CatalogBuilder::new(&config);
            let catalog = match category {
                Some(raw) => {
                    let category: Category = raw.parse()?;
                    exemplar::Catalog {
                        categories: vec![builder.build_category(category)],
                    }
                }
                None => builder.build(),
            };

            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&catalog)?),
                _ => println!("{}", catalog.to_text()),
            }
        }

        Commands::Get { category, name } => {
            let category: Category = category.parse()?;
            let resolved = Resolver::new(&config).resolve(category, &name)?;
            eprintln!("{}", resolved.relative_path);
            print!("{}", resolved.content);
        }

        Commands::Standard { id } => {
            let standard: Standard = id.parse()?;
            let content = standards::load(&config, standard)?;
            print!("{}", content);
        }

        Commands::Standards => {
            for standard in Standard::ALL {
                println!("{}", standard.id());
            }
        }
    }

    Ok(())
}
