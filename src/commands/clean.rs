//! Clean command implementation

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use walkdir::WalkDir;

use crate::commands::project_context;
use crate::utils::paths::format_size;
use crate::utils::terminal::{print_info, print_success};

/// Remove staged packages and archives
#[derive(Args, Debug)]
pub struct CleanCommand {
    /// Show what would be deleted
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn execute(self, _verbose: bool) -> Result<()> {
        let ctx = project_context()?;
        let dist_dir = ctx.dist_dir();

        if !dist_dir.exists() {
            print_info("nothing to clean");
            return Ok(());
        }

        let size = dir_size(&dist_dir);
        if self.dry_run {
            print_info(&format!(
                "would remove {} ({})",
                dist_dir.display(),
                format_size(size)
            ));
            return Ok(());
        }

        std::fs::remove_dir_all(&dist_dir)
            .with_context(|| format!("Failed to remove {}", dist_dir.display()))?;
        print_success(&format!(
            "removed {} ({})",
            dist_dir.display(),
            format_size(size)
        ));
        Ok(())
    }
}

fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter_map(|e| e.metadata().ok())
        .filter(|m| m.is_file())
        .map(|m| m.len())
        .sum()
}
