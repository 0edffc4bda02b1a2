//! nlbundle CLI - native shared-library bundling tool
//!
//! Resolves the transitive shared-library dependency graph of the project's
//! entry binaries via the platform inspection tool, computes a deterministic
//! dependency-first load order, and assembles the distributable bundle.
//!
//! ## Architecture
//!
//! ```text
//! CLI -> graph (probe via ldd/otool/Dependencies.exe) -> load order -> bundle
//! ```

mod bundle;
mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod graph;
mod platform;
mod probe;
mod utils;

use clap::Parser;

use cli::Cli;
use error::BundleError;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.execute() {
        match err.downcast_ref::<BundleError>() {
            Some(bundle_err) => bundle_err.display_with_hints(),
            None => utils::terminal::print_error(&format!("{:#}", err)),
        }
        std::process::exit(1);
    }
}
