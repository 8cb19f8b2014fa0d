//! Sprig CLI - Command-line interface for Sprig
//!
//! Loads graphs and genealogy data from JSON files and runs traversals,
//! path searches and ancestor lookups on them.

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "sprig")]
#[command(author = "Sprig Contributors")]
#[command(version)]
#[command(about = "Traverse and search small directed graphs", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every algorithm on the built-in example graph
    Demo,

    /// Print a graph's adjacency sets
    Show {
        /// Graph file ({"vertices": [...], "edges": [[from, to], ...]})
        file: PathBuf,

        /// Fail on edges with unknown endpoints instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// Traverse every vertex reachable from a start vertex
    Traverse {
        /// Graph file
        file: PathBuf,

        /// Vertex to start from
        #[arg(short, long, allow_negative_numbers = true)]
        start: i64,

        /// Traversal order
        #[arg(short, long, value_enum, default_value = "bft")]
        order: Order,

        /// Fail on edges with unknown endpoints instead of skipping them
        #[arg(long)]
        strict: bool,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Find a path between two vertices
    Path {
        /// Graph file
        file: PathBuf,

        /// Start vertex
        #[arg(allow_negative_numbers = true)]
        from: i64,

        /// Target vertex
        #[arg(allow_negative_numbers = true)]
        to: i64,

        /// Search strategy
        #[arg(short, long, value_enum, default_value = "bfs")]
        strategy: Strategy,

        /// Fail on edges with unknown endpoints instead of skipping them
        #[arg(long)]
        strict: bool,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Find the earliest known ancestor of a person
    Ancestor {
        /// Ancestry file ({"pairs": [[parent, child], ...]})
        file: PathBuf,

        /// Person to start from
        #[arg(allow_negative_numbers = true)]
        start: i64,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

/// Order in which `traverse` reports vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Order {
    /// Breadth-first
    Bft,
    /// Depth-first, iterative
    Dft,
    /// Depth-first, recursive
    DftRecursive,
}

/// How `path` searches for the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Breadth-first; always a shortest path
    Bfs,
    /// Depth-first, iterative
    Dfs,
    /// Depth-first, recursive
    DfsRecursive,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.command {
        Commands::Demo => commands::demo(),
        Commands::Show { file, strict } => commands::show(&file, strict),
        Commands::Traverse {
            file,
            start,
            order,
            strict,
            json,
        } => commands::traverse(&file, start, order, strict, json),
        Commands::Path {
            file,
            from,
            to,
            strategy,
            strict,
            json,
        } => commands::path(&file, from, to, strategy, strict, json),
        Commands::Ancestor { file, start, json } => commands::ancestor(&file, start, json),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
