//! Command implementations

pub mod check;
pub mod clean;
pub mod collect;
pub mod dist;
pub mod index;
pub mod java;
pub mod sync;
pub mod viz;

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::bundle::{EntryKind, Resolver};
use crate::config::{self, BundleConfig};
use crate::platform::Platform;
use crate::probe::ToolProber;

/// Everything a command needs to resolve load orders
pub(crate) struct ProjectContext {
    pub root: PathBuf,
    pub config: BundleConfig,
    pub platform: Platform,
    pub prober: ToolProber,
}

impl ProjectContext {
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.root, &self.config, self.platform)
    }

    /// Resource directory of one variant:
    /// `{resources}/{variant}/{platform}/`
    pub fn variant_dir(&self, kind: EntryKind) -> PathBuf {
        self.root
            .join(&self.config.output.resources)
            .join(kind.label())
            .join(self.platform.id())
    }

    /// Dist directory of the project
    pub fn dist_dir(&self) -> PathBuf {
        self.root.join(&self.config.output.dist)
    }
}

/// Locate the project, load its configuration, and wire up the platform
/// prober
pub(crate) fn project_context() -> Result<ProjectContext> {
    let (root, config) = config::load_project()?;
    let platform = Platform::detect()?;
    let prober = ToolProber::new(platform.inspect_tool());
    Ok(ProjectContext {
        root,
        config,
        platform,
        prober,
    })
}

/// Parse an `--entry full|base` argument
pub(crate) fn parse_entry(value: &str) -> Result<EntryKind> {
    match value {
        "full" => Ok(EntryKind::Full),
        "base" => Ok(EntryKind::Base),
        other => bail!("unknown entry '{}': expected 'full' or 'base'", other),
    }
}

/// Parse an entry selector that also accepts `all`
pub(crate) fn parse_entry_selection(value: &str) -> Result<Vec<EntryKind>> {
    match value {
        "all" => Ok(vec![EntryKind::Full, EntryKind::Base]),
        other => Ok(vec![parse_entry(other)?]),
    }
}
