//! Bundle assembly on top of the resolved load order
//!
//! Everything downstream of the graph (index files, resource sync, zip
//! packages, the Java loader snippet) consumes the merged dependency-first
//! name list produced here.

pub mod archive;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::BundleConfig;
use crate::error::BundleError;
use crate::graph::{topo_sort, GraphBuilder, Node};
use crate::platform::Platform;
use crate::probe::DependencyProber;

pub const INDEX_FILE: &str = "index.txt";

/// Which entry binary a resolution starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// The full-featured build
    Full,
    /// The base build without the optional features
    Base,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Full => "full",
            EntryKind::Base => "base",
        }
    }
}

/// Resolves load orders for the entry binaries of one project
pub struct Resolver<'a> {
    project_root: &'a Path,
    config: &'a BundleConfig,
    platform: Platform,
}

impl<'a> Resolver<'a> {
    pub fn new(project_root: &'a Path, config: &'a BundleConfig, platform: Platform) -> Self {
        Self {
            project_root,
            config,
            platform,
        }
    }

    /// The library search directory for the current platform
    pub fn lib_dir(&self) -> Result<&Path> {
        self.config.lib_dir(self.platform)
    }

    /// Sorted filename listing of the search directory, used as match
    /// candidates for every probe of one traversal
    pub fn candidates(&self) -> Result<Vec<String>> {
        let dir = self.lib_dir()?;
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to list {}", dir.display()))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        Ok(names)
    }

    /// Path of an entry binary; missing binaries are a configuration fault
    pub fn entry_path(&self, kind: EntryKind) -> Result<PathBuf> {
        let base = match kind {
            EntryKind::Full => &self.config.entries.full,
            EntryKind::Base => &self.config.entries.base,
        };
        let path = self.config.entry_path(self.project_root, base, self.platform);
        if !path.is_file() {
            return Err(BundleError::config_error_with_hint(
                format!("entry binary does not exist: {}", path.display()),
                None,
                "build the native binaries before bundling them",
            )
            .into());
        }
        Ok(path)
    }

    /// Build the dependency graph of one entry binary
    pub fn graph(&self, prober: &dyn DependencyProber, kind: EntryKind) -> Result<Node> {
        let entry = self.entry_path(kind)?;
        let candidates = self.candidates()?;
        let builder = GraphBuilder::new(prober, self.lib_dir()?, candidates);
        builder.build_graph(&entry)
    }

    /// Dependency-first load order of one entry binary
    pub fn load_order(&self, prober: &dyn DependencyProber, kind: EntryKind) -> Result<Vec<String>> {
        let root = self.graph(prober, kind)?;
        topo_sort(&root)
    }

    /// Where a library of the load order is copied from: entry binaries
    /// come from the project's bin directory, everything else from the
    /// search directory
    pub fn source_path(&self, name: &str) -> Result<PathBuf> {
        for base in [&self.config.entries.full, &self.config.entries.base] {
            if name == self.platform.lib_name(base) {
                return Ok(self.config.entry_path(self.project_root, base, self.platform));
            }
        }
        Ok(self.lib_dir()?.join(name))
    }

    /// Merged load order of the full entry followed by base-only names
    pub fn merged_order(&self, prober: &dyn DependencyProber) -> Result<Vec<String>> {
        let full = self.load_order(prober, EntryKind::Full)?;
        let base = self.load_order(prober, EntryKind::Base)?;
        Ok(merge_load_orders(&full, &base))
    }
}

/// Merge two load orders into one deduplicated list
///
/// The first list's order is preserved in full; names from the second list
/// not already present are appended in their own relative order.
pub fn merge_load_orders(full: &[String], base: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = full.to_vec();
    for name in base {
        if !merged.contains(name) {
            merged.push(name.clone());
        }
    }
    merged
}

/// Write the plain-text load-order index: one library filename per line,
/// dependency-first. This is the bit-exact contract downstream tooling
/// reads.
pub fn write_index(dir: &Path, names: &[String]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    let path = dir.join(INDEX_FILE);
    let mut content = String::new();
    for name in names {
        content.push_str(name);
        content.push('\n');
    }
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_merge_keeps_first_order_and_appends_new_names() {
        let full = names(&["B", "D", "A"]);
        let base = names(&["C", "D", "E"]);
        assert_eq!(merge_load_orders(&full, &base), names(&["B", "D", "A", "C", "E"]));
    }

    #[test]
    fn test_merge_with_empty_base() {
        let full = names(&["A", "B"]);
        assert_eq!(merge_load_orders(&full, &[]), names(&["A", "B"]));
    }

    #[test]
    fn test_merge_with_empty_full() {
        let base = names(&["A", "B"]);
        assert_eq!(merge_load_orders(&[], &base), names(&["A", "B"]));
    }

    #[test]
    fn test_write_index_one_name_per_line() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_index(tmp.path(), &names(&["libamd.so", "libumf.so"])).unwrap();

        assert_eq!(path.file_name().unwrap(), INDEX_FILE);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "libamd.so\nlibumf.so\n");
    }

    #[test]
    fn test_entry_kind_labels() {
        assert_eq!(EntryKind::Full.label(), "full");
        assert_eq!(EntryKind::Base.label(), "base");
    }
}
