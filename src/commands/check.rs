//! Check command implementation

use anyhow::Result;
use clap::Args;
use console::style;

use crate::bundle::EntryKind;
use crate::commands::project_context;
use crate::error::BundleError;
use crate::exec::subprocess::command_exists;

/// Check that the bundling environment is configured
#[derive(Args, Debug)]
pub struct CheckCommand {}

impl CheckCommand {
    pub fn execute(self, _verbose: bool) -> Result<()> {
        let ctx = project_context()?;
        let resolver = ctx.resolver();
        let mut problems = Vec::new();

        println!("platform: {}", ctx.platform);

        let tool = ctx.platform.inspect_tool();
        report(
            &format!("inspection tool ({})", tool.program),
            command_exists(&tool.program),
            &mut problems,
        );

        match resolver.lib_dir() {
            Ok(dir) => report(&format!("library directory ({})", dir.display()), true, &mut problems),
            Err(err) => report(&format!("library directory: {}", err), false, &mut problems),
        }

        for kind in [EntryKind::Full, EntryKind::Base] {
            match resolver.entry_path(kind) {
                Ok(path) => report(
                    &format!("{} entry ({})", kind.label(), path.display()),
                    true,
                    &mut problems,
                ),
                Err(err) => report(&format!("{} entry: {}", kind.label(), err), false, &mut problems),
            }
        }

        if problems.is_empty() {
            println!("\n{}", style("environment is ready").green().bold());
            Ok(())
        } else {
            Err(BundleError::config_error(format!(
                "{} problem(s) found; fix them before bundling",
                problems.len()
            ))
            .into())
        }
    }
}

fn report(what: &str, ok: bool, problems: &mut Vec<String>) {
    if ok {
        println!("  {} {}", style("✓").green(), what);
    } else {
        println!("  {} {}", style("✗").red(), what);
        problems.push(what.to_string());
    }
}
