//! Dependency probing
//!
//! Translates the textual output of the platform inspection tool (`ldd`,
//! `otool -L`, `Dependencies.exe -imports`) into the subset of candidate
//! library names a binary actually references.
//!
//! The [`DependencyProber`] trait is the seam between the graph algorithms
//! and the external tool: graph construction is tested against a scripted
//! prober, the real one spawns one process per probe.

mod matcher;

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;

pub use matcher::match_output;

use crate::error::BundleError;
use crate::exec::subprocess::run_command;
use crate::platform::InspectTool;

/// Resolves the direct dependencies of one binary against a candidate set
pub trait DependencyProber {
    /// Return the candidate names the binary at `library_path` references
    ///
    /// An empty set is a valid result ("no dependencies"), not a failure.
    fn probe(&self, library_path: &Path, candidates: &[String]) -> Result<BTreeSet<String>>;
}

/// Prober backed by the platform inspection tool
pub struct ToolProber {
    tool: InspectTool,
}

impl ToolProber {
    pub fn new(tool: InspectTool) -> Self {
        Self { tool }
    }
}

impl DependencyProber for ToolProber {
    fn probe(&self, library_path: &Path, candidates: &[String]) -> Result<BTreeSet<String>> {
        let args = self.tool.args_for(library_path);
        let result = run_command(&self.tool.program, &args).map_err(|source| {
            BundleError::missing_tool(
                self.tool.program.clone(),
                format!("probing dependencies of {}", library_path.display()),
                format!("install {} and make sure it is on PATH ({})", self.tool.program, source),
            )
        })?;

        // The tool reports to stdout or, failing that, stderr. ldd exits
        // non-zero on non-dynamic files, so the exit code is ignored; only
        // the text matters.
        let output = if !result.stdout.trim().is_empty() {
            result.stdout
        } else {
            result.stderr
        };
        if output.trim().is_empty() {
            return Ok(BTreeSet::new());
        }

        let own_name = library_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| library_path.display().to_string());

        Ok(match_output(&output, &own_name, candidates))
    }
}
