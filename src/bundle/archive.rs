//! ZIP package creation and bundle_info.json generation
//!
//! A distribution package contains the libraries of one variant in load
//! order plus the index, license, and a small metadata file:
//!
//! ```text
//! {name}_{variant}_{version}_{platform}_{yyyy-mm-dd}.zip
//! ├── lib*.so / *.dll           # bundled libraries
//! ├── index.txt                 # dependency-first load order
//! ├── bundle_info.json          # package metadata
//! └── LICENSE.md                # if the project carries one
//! ```

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const BUNDLE_INFO_FILE: &str = "bundle_info.json";

/// Package metadata written next to the bundled libraries
#[derive(Debug, Serialize, Deserialize)]
pub struct BundleInfo {
    pub name: String,
    pub version: String,
    pub variant: String,
    pub platform: String,
    pub created_at: String,
    /// Library filenames in dependency-first load order
    pub libraries: Vec<String>,
}

impl BundleInfo {
    pub fn new(
        name: &str,
        version: &str,
        variant: &str,
        platform: &str,
        libraries: Vec<String>,
    ) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            variant: variant.to_string(),
            platform: platform.to_string(),
            created_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            libraries,
        }
    }

    /// Write the metadata as pretty-printed JSON into `dir`
    pub fn write_to(&self, dir: &Path) -> Result<()> {
        let path = dir.join(BUNDLE_INFO_FILE);
        let json = serde_json::to_string_pretty(self).context("Failed to serialize bundle info")?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

/// Create a ZIP archive from a directory
pub fn create_archive(source_dir: &Path, archive_path: &Path) -> Result<()> {
    let file = File::create(archive_path)
        .with_context(|| format!("Failed to create archive: {}", archive_path.display()))?;

    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for entry in WalkDir::new(source_dir) {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        let relative_path = path
            .strip_prefix(source_dir)
            .context("Failed to get relative path")?;

        // Skip the root directory
        if relative_path.as_os_str().is_empty() {
            continue;
        }

        let path_str = relative_path.to_string_lossy().replace('\\', "/");

        if path.is_dir() {
            zip.add_directory(&path_str, options)
                .with_context(|| format!("Failed to add directory to archive: {}", path_str))?;
        } else {
            zip.start_file(&path_str, options)
                .with_context(|| format!("Failed to start file in archive: {}", path_str))?;

            let mut file = File::open(path)
                .with_context(|| format!("Failed to open file: {}", path.display()))?;
            let mut buffer = Vec::new();
            file.read_to_end(&mut buffer)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            zip.write_all(&buffer)
                .with_context(|| format!("Failed to write file to archive: {}", path_str))?;
        }
    }

    zip.finish().context("Failed to finish ZIP archive")?;
    Ok(())
}
