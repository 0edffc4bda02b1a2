//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{
    check::CheckCommand, clean::CleanCommand, collect::CollectCommand, dist::DistCommand,
    index::IndexCommand, java::JavaCommand, sync::SyncCommand, viz::VizCommand,
};

/// nlbundle - native shared-library bundling tool
///
/// Resolves the transitive shared-library dependencies of the project's
/// entry binaries and assembles them into distributable bundles.
#[derive(Parser, Debug)]
#[command(name = "nlbundle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the dependency-first load order
    Collect(CollectCommand),

    /// Print the dependency graph in Graphviz DOT format
    Viz(VizCommand),

    /// Write the index.txt load-order files
    Index(IndexCommand),

    /// Copy resolved libraries into the resource tree
    Sync(SyncCommand),

    /// Create distributable ZIP packages
    Dist(DistCommand),

    /// Print the Java loader snippet
    Java(JavaCommand),

    /// Check platform, tool, and project configuration
    Check(CheckCommand),

    /// Remove staged packages and archives
    Clean(CleanCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        match self.command {
            Commands::Collect(cmd) => cmd.execute(self.verbose),
            Commands::Viz(cmd) => cmd.execute(self.verbose),
            Commands::Index(cmd) => cmd.execute(self.verbose),
            Commands::Sync(cmd) => cmd.execute(self.verbose),
            Commands::Dist(cmd) => cmd.execute(self.verbose),
            Commands::Java(cmd) => cmd.execute(self.verbose),
            Commands::Check(cmd) => cmd.execute(self.verbose),
            Commands::Clean(cmd) => cmd.execute(self.verbose),
        }
    }
}
