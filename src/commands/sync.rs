//! Sync command implementation

use anyhow::Result;
use clap::Args;

use crate::bundle::write_index;
use crate::commands::{parse_entry_selection, project_context};
use crate::error::BundleError;
use crate::utils::paths::ensure_dir;
use crate::utils::terminal::{create_progress_bar, print_info, print_success};

/// Copy the resolved libraries into the resource tree
#[derive(Args, Debug)]
pub struct SyncCommand {
    /// Entry to sync (all, full, base)
    #[arg(default_value = "all")]
    pub entry: String,
}

impl SyncCommand {
    pub fn execute(self, verbose: bool) -> Result<()> {
        let ctx = project_context()?;
        let resolver = ctx.resolver();

        for kind in parse_entry_selection(&self.entry)? {
            let order = resolver.load_order(&ctx.prober, kind)?;
            let target_dir = ctx.variant_dir(kind);
            ensure_dir(&target_dir)?;

            let pb = create_progress_bar(order.len() as u64, &format!("syncing {}", kind.label()));
            let mut copied = 0usize;
            let mut skipped = 0usize;
            for name in &order {
                let target = target_dir.join(name);
                if target.exists() {
                    skipped += 1;
                    if verbose {
                        print_info(&format!("{} already present", name));
                    }
                    pb.inc(1);
                    continue;
                }

                let source = resolver.source_path(name)?;
                if !source.is_file() {
                    pb.finish_and_clear();
                    return Err(BundleError::config_error(format!(
                        "library source does not exist: {}",
                        source.display()
                    ))
                    .into());
                }
                std::fs::copy(&source, &target)?;
                copied += 1;
                pb.inc(1);
            }
            pb.finish_and_clear();

            write_index(&target_dir, &order)?;
            print_success(&format!(
                "{}: {} copied, {} already present -> {}",
                kind.label(),
                copied,
                skipped,
                target_dir.display()
            ));
        }
        Ok(())
    }
}
