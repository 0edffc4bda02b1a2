//! Dist command implementation

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;

use crate::bundle::archive::{create_archive, BundleInfo};
use crate::bundle::write_index;
use crate::commands::{parse_entry_selection, project_context};
use crate::error::BundleError;
use crate::utils::paths::ensure_dir;
use crate::utils::terminal::{create_spinner, print_success};

/// Create distributable ZIP packages
#[derive(Args, Debug)]
pub struct DistCommand {
    /// Variant to package (all, full, base)
    #[arg(default_value = "all")]
    pub entry: String,
}

impl DistCommand {
    pub fn execute(self, _verbose: bool) -> Result<()> {
        let ctx = project_context()?;
        let resolver = ctx.resolver();
        let dist_dir = ctx.dist_dir();
        ensure_dir(&dist_dir)?;

        let date = Local::now().format("%Y-%m-%d");

        for kind in parse_entry_selection(&self.entry)? {
            let order = resolver.load_order(&ctx.prober, kind)?;

            // Stage the variant's libraries in load order
            let stage = dist_dir.join(kind.label());
            if stage.exists() {
                std::fs::remove_dir_all(&stage)
                    .with_context(|| format!("Failed to clear {}", stage.display()))?;
            }
            ensure_dir(&stage)?;

            let spinner = create_spinner(&format!("staging {} package", kind.label()));
            for name in &order {
                let source = resolver.source_path(name)?;
                if !source.is_file() {
                    spinner.finish_and_clear();
                    return Err(BundleError::config_error(format!(
                        "library source does not exist: {}",
                        source.display()
                    ))
                    .into());
                }
                std::fs::copy(&source, stage.join(name))?;
            }

            write_index(&stage, &order)?;
            BundleInfo::new(
                &ctx.config.bundle.name,
                &ctx.config.bundle.version,
                kind.label(),
                ctx.platform.id(),
                order.clone(),
            )
            .write_to(&stage)?;

            let license = ctx.root.join("LICENSE.md");
            if license.is_file() {
                std::fs::copy(&license, stage.join("LICENSE.md"))?;
            }

            let zip_name = format!(
                "{}_{}_{}_{}_{}.zip",
                ctx.config.bundle.name,
                kind.label(),
                ctx.config.bundle.version,
                ctx.platform.id(),
                date
            );
            let archive_path = dist_dir.join(&zip_name);
            create_archive(&stage, &archive_path)?;
            spinner.finish_and_clear();

            print_success(&format!(
                "created {} ({} libraries)",
                archive_path.display(),
                order.len()
            ));
        }
        Ok(())
    }
}
