//! Platform model: supported targets, shared-library naming conventions,
//! and the per-platform dependency inspection tool.
//!
//! Everything here is resolved from the compile-time target once and then
//! passed around as explicit values; no code below this module reads ambient
//! process state to decide platform behavior.

use std::fmt;
use std::path::Path;

use anyhow::Result;

use crate::error::BundleError;

/// Supported target platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    LinuxX86_64,
    MacosArm64,
    MacosX86_64,
    WindowsX86_64,
}

impl Platform {
    /// Detect the current platform from the compile-time target
    pub fn detect() -> Result<Self> {
        if cfg!(all(target_os = "linux", target_arch = "x86_64")) {
            Ok(Platform::LinuxX86_64)
        } else if cfg!(all(target_os = "macos", target_arch = "aarch64")) {
            Ok(Platform::MacosArm64)
        } else if cfg!(all(target_os = "macos", target_arch = "x86_64")) {
            Ok(Platform::MacosX86_64)
        } else if cfg!(all(target_os = "windows", target_arch = "x86_64")) {
            Ok(Platform::WindowsX86_64)
        } else {
            Err(BundleError::config_error_with_hint(
                format!(
                    "unsupported platform: {}-{}",
                    std::env::consts::OS,
                    std::env::consts::ARCH
                ),
                None,
                "supported platforms: linux-x86_64, macos-arm64, macos-x86_64, windows-x86_64",
            )
            .into())
        }
    }

    /// Stable platform identifier, used as config key and in package names
    pub fn id(&self) -> &'static str {
        match self {
            Platform::LinuxX86_64 => "linux-x86_64",
            Platform::MacosArm64 => "macos-arm64",
            Platform::MacosX86_64 => "macos-x86_64",
            Platform::WindowsX86_64 => "windows-x86_64",
        }
    }

    /// Shared library file extension, including the dot
    pub fn lib_ext(&self) -> &'static str {
        match self {
            Platform::LinuxX86_64 => ".so",
            Platform::MacosArm64 | Platform::MacosX86_64 => ".dylib",
            Platform::WindowsX86_64 => ".dll",
        }
    }

    /// Turn a bare library base name into the platform's shared library
    /// filename (`umf` -> `libumf.so` on Linux, `umf.dll` on Windows)
    pub fn lib_name(&self, base: &str) -> String {
        let prefix = if *self == Platform::WindowsX86_64 || base.starts_with("lib") {
            ""
        } else {
            "lib"
        };
        format!("{}{}{}", prefix, base, self.lib_ext())
    }

    /// The external inspection tool that prints a binary's linked
    /// dependencies on this platform
    pub fn inspect_tool(&self) -> InspectTool {
        match self {
            Platform::LinuxX86_64 => InspectTool::new("ldd", &[]),
            Platform::MacosArm64 | Platform::MacosX86_64 => InspectTool::new("otool", &["-L"]),
            Platform::WindowsX86_64 => InspectTool::new("Dependencies.exe", &["-imports"]),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// An explicit command template for the dependency inspection tool.
///
/// The probed file path is appended as the final argument.
#[derive(Debug, Clone)]
pub struct InspectTool {
    pub program: String,
    pub args: Vec<String>,
}

impl InspectTool {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Full argument vector for probing one file
    pub fn args_for(&self, path: &Path) -> Vec<String> {
        let mut args = self.args.clone();
        args.push(path.display().to_string());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lib_name_adds_prefix_and_extension() {
        assert_eq!(Platform::LinuxX86_64.lib_name("umf"), "libumf.so");
        assert_eq!(Platform::MacosArm64.lib_name("umf"), "libumf.dylib");
        assert_eq!(Platform::WindowsX86_64.lib_name("umf"), "umf.dll");
    }

    #[test]
    fn test_lib_name_keeps_existing_prefix() {
        assert_eq!(Platform::LinuxX86_64.lib_name("libumf"), "libumf.so");
        assert_eq!(Platform::WindowsX86_64.lib_name("libumf"), "libumf.dll");
    }

    #[test]
    fn test_inspect_tool_args_include_path() {
        let tool = Platform::MacosX86_64.inspect_tool();
        let args = tool.args_for(Path::new("bin/libfoo.dylib"));
        assert_eq!(tool.program, "otool");
        assert_eq!(args, vec!["-L".to_string(), "bin/libfoo.dylib".to_string()]);
    }

    #[test]
    fn test_platform_ids_are_stable() {
        assert_eq!(Platform::LinuxX86_64.id(), "linux-x86_64");
        assert_eq!(Platform::MacosArm64.id(), "macos-arm64");
        assert_eq!(Platform::WindowsX86_64.to_string(), "windows-x86_64");
    }
}
