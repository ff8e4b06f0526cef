//! CLI entry point for mdx-corpus

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mdx_corpus::commands::related::{Limit, RelatedOptions};

#[derive(Parser)]
#[command(name = "mdx-corpus")]
#[command(version)]
#[command(about = "Load MDX content and select related posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List content items
    #[command(alias = "ls")]
    List {
        /// Section to list (all sections when omitted)
        section: Option<String>,
    },

    /// List tags with usage counts
    Tags {
        /// Section to count (all sections when omitted)
        section: Option<String>,
    },

    /// Show the items related to one item
    Related {
        /// Slug of the item (its path without .md/.mdx)
        slug: String,

        /// Section to look in (first match across sections when omitted)
        #[arg(short, long)]
        section: Option<String>,

        /// Show at most this many items
        #[arg(short = 'n', long, conflicts_with = "sidebar")]
        limit: Option<usize>,

        /// Use the sidebar limit from the configuration
        #[arg(long)]
        sidebar: bool,

        /// Print the related links as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report duplicate titles, bad dates and unreadable files
    Check {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "mdx_corpus=debug,info"
    } else {
        "mdx_corpus=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { section } => {
            let site = mdx_corpus::Site::new(&base_dir)?;
            mdx_corpus::commands::list::run(&site, section.as_deref())?;
        }

        Commands::Tags { section } => {
            let site = mdx_corpus::Site::new(&base_dir)?;
            mdx_corpus::commands::tags::run(&site, section.as_deref())?;
        }

        Commands::Related {
            slug,
            section,
            limit,
            sidebar,
            json,
        } => {
            let site = mdx_corpus::Site::new(&base_dir)?;
            let limit = match (limit, sidebar) {
                (Some(n), _) => Limit::Exactly(n),
                (None, true) => Limit::Sidebar,
                (None, false) => Limit::Panel,
            };
            let opts = RelatedOptions {
                slug: &slug,
                section: section.as_deref(),
                limit,
                json,
            };
            mdx_corpus::commands::related::run(&site, &opts)?;
        }

        Commands::Check { json } => {
            let site = mdx_corpus::Site::new(&base_dir)?;
            tracing::info!("Checking content in {:?}", site.content_dir);
            mdx_corpus::commands::check::run(&site, json)?;
        }

        Commands::Version => {
            println!("mdx-corpus version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
