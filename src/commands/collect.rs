//! Collect command implementation

use anyhow::Result;
use clap::Args;

use crate::commands::{parse_entry, project_context};
use crate::utils::terminal::print_info;

/// Print the dependency-first load order
#[derive(Args, Debug)]
pub struct CollectCommand {
    /// Entry to resolve (merged, full, base)
    #[arg(long, default_value = "merged")]
    pub entry: String,
}

impl CollectCommand {
    pub fn execute(self, verbose: bool) -> Result<()> {
        let ctx = project_context()?;
        let resolver = ctx.resolver();

        let order = match self.entry.as_str() {
            "merged" => resolver.merged_order(&ctx.prober)?,
            other => resolver.load_order(&ctx.prober, parse_entry(other)?)?,
        };

        if verbose {
            print_info(&format!(
                "{} libraries in load order ({})",
                order.len(),
                ctx.platform
            ));
        }
        for name in &order {
            println!("{}", name);
        }
        Ok(())
    }
}
