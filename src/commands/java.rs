//! Java command implementation
//!
//! Emits the `String[]` literals consumed by the Java-side native library
//! loader, one branch per link option, in dependency-first load order.

use anyhow::Result;
use clap::Args;

use crate::bundle::EntryKind;
use crate::commands::project_context;
use crate::platform::Platform;

/// Print the Java loader snippet for the current platform
#[derive(Args, Debug)]
pub struct JavaCommand {}

impl JavaCommand {
    pub fn execute(self, _verbose: bool) -> Result<()> {
        let ctx = project_context()?;
        let resolver = ctx.resolver();

        let full = resolver.load_order(&ctx.prober, EntryKind::Full)?;
        let base = resolver.load_order(&ctx.prober, EntryKind::Base)?;

        println!("if (os == {}) {{", java_os_name(ctx.platform));
        println!("  if (opt == LinkOption.ALL) {{");
        println!("    return new String[] {{");
        for lib in &full {
            println!("      \"{}\",", lib);
        }
        println!("    }};");
        println!("  }} else {{");
        println!("    return new String[] {{");
        for lib in &base {
            println!("      \"{}\",", lib);
        }
        println!("    }};");
        println!("  }}");
        println!("}}");
        Ok(())
    }
}

fn java_os_name(platform: Platform) -> &'static str {
    match platform {
        Platform::LinuxX86_64 => "OS.LINUX",
        Platform::MacosArm64 => "OS.MACOS_ARM",
        Platform::MacosX86_64 => "OS.MACOS_X86_64",
        Platform::WindowsX86_64 => "OS.WINDOWS",
    }
}
