//! Index command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::bundle::write_index;
use crate::commands::{parse_entry_selection, project_context};
use crate::utils::terminal::print_success;

/// Write the index.txt load-order file for the entry binaries
#[derive(Args, Debug)]
pub struct IndexCommand {
    /// Entry to index (all, full, base)
    #[arg(default_value = "all")]
    pub entry: String,

    /// Output directory (defaults to {resources}/{variant}/{platform})
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

impl IndexCommand {
    pub fn execute(self, verbose: bool) -> Result<()> {
        let ctx = project_context()?;
        let resolver = ctx.resolver();
        let kinds = parse_entry_selection(&self.entry)?;
        let single = kinds.len() == 1;

        for kind in kinds {
            let order = resolver.load_order(&ctx.prober, kind)?;
            let dir = match &self.out {
                Some(out) if single => out.clone(),
                Some(out) => out.join(kind.label()),
                None => ctx.variant_dir(kind),
            };
            let path = write_index(&dir, &order)?;
            if verbose {
                for name in &order {
                    println!("{}", name);
                }
            }
            print_success(&format!(
                "wrote {} ({} libraries)",
                path.display(),
                order.len()
            ));
        }
        Ok(())
    }
}
