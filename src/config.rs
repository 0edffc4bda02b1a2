//! NLBUNDLE.toml configuration parsing
//!
//! A bundle project is defined by an `NLBUNDLE.toml` at its root:
//!
//! ```toml
//! [bundle]
//! name = "olcar"
//! version = "1.1.0"
//!
//! [entries]
//! full = "olcar_withumf"
//! base = "olcar"
//!
//! [libdirs]
//! linux-x86_64 = "/opt/julia/lib"
//! macos-arm64 = "/usr/local/julia/lib"
//! ```
//!
//! `[entries]` names the two entry binaries (without platform prefix or
//! extension): the full-featured build and the base build. `[libdirs]` maps
//! a platform identifier to the search directory whose contents are the
//! dependency match candidates.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::BundleError;
use crate::platform::Platform;

pub const CONFIG_FILE: &str = "NLBUNDLE.toml";

/// Root configuration from NLBUNDLE.toml
#[derive(Debug, Clone, Deserialize)]
pub struct BundleConfig {
    pub bundle: BundleSection,
    pub entries: EntriesSection,

    /// Platform identifier -> native library search directory
    #[serde(default)]
    pub libdirs: HashMap<String, PathBuf>,

    /// Output locations, all relative to the project root unless absolute
    #[serde(default)]
    pub output: OutputSection,
}

/// `[bundle]` metadata
#[derive(Debug, Clone, Deserialize)]
pub struct BundleSection {
    pub name: String,
    pub version: String,
}

/// `[entries]` entry binary base names
#[derive(Debug, Clone, Deserialize)]
pub struct EntriesSection {
    /// Full-featured entry binary (base name, no prefix/extension)
    pub full: String,

    /// Base entry binary without the optional features
    pub base: String,

    /// Directory containing the entry binaries
    #[serde(default = "default_bin_dir")]
    pub bin_dir: PathBuf,
}

/// `[output]` directory layout
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    /// Resource tree the `sync` command copies libraries into
    #[serde(default = "default_resources_dir")]
    pub resources: PathBuf,

    /// Staging and package directory for the `dist` command
    #[serde(default = "default_dist_dir")]
    pub dist: PathBuf,
}

fn default_bin_dir() -> PathBuf {
    PathBuf::from("bin")
}

fn default_resources_dir() -> PathBuf {
    PathBuf::from("resources")
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            resources: default_resources_dir(),
            dist: default_dist_dir(),
        }
    }
}

impl BundleConfig {
    /// Parse a configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse NLBUNDLE.toml")
    }

    /// Load the configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content)
    }

    /// The library search directory for a platform
    ///
    /// A missing key or a key pointing at a non-directory is a
    /// configuration fault.
    pub fn lib_dir(&self, platform: Platform) -> Result<&Path> {
        let dir = self.libdirs.get(platform.id()).ok_or_else(|| {
            BundleError::config_error_with_hint(
                format!("no library directory configured for {}", platform),
                None,
                format!(
                    "add `{} = \"/path/to/libs\"` to the [libdirs] section of {}",
                    platform.id(),
                    CONFIG_FILE
                ),
            )
        })?;
        if !dir.is_dir() {
            return Err(BundleError::config_error(format!(
                "library directory does not exist: {}",
                dir.display()
            ))
            .into());
        }
        Ok(dir)
    }

    /// Path of an entry binary for a platform, rooted at the project dir
    pub fn entry_path(&self, project_root: &Path, entry_base: &str, platform: Platform) -> PathBuf {
        project_root
            .join(&self.entries.bin_dir)
            .join(platform.lib_name(entry_base))
    }
}

/// Find the project root by looking for NLBUNDLE.toml in the current
/// directory or any parent
pub fn find_project_root() -> Result<PathBuf> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    find_project_root_from(&current_dir)
}

/// Find the project root starting from a specific directory
pub fn find_project_root_from(start: &Path) -> Result<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(CONFIG_FILE).exists() {
            return Ok(dir.to_path_buf());
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => {
                return Err(BundleError::config_error_with_hint(
                    format!(
                        "could not find {} in {} or any parent directory",
                        CONFIG_FILE,
                        start.display()
                    ),
                    None,
                    "run nlbundle from inside a bundle project",
                )
                .into())
            }
        }
    }
}

/// Load the configuration of the project containing the current directory
pub fn load_project() -> Result<(PathBuf, BundleConfig)> {
    let root = find_project_root()?;
    let config = BundleConfig::load(&root.join(CONFIG_FILE))?;
    Ok((root, config))
}
