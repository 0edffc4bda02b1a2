//! Viz command implementation

use std::collections::VecDeque;

use anyhow::Result;
use clap::Args;

use crate::commands::{parse_entry, project_context};
use crate::graph::Node;

/// Print the dependency graph in Graphviz DOT format
#[derive(Args, Debug)]
pub struct VizCommand {
    /// Entry whose graph is printed (full, base)
    #[arg(long, default_value = "full")]
    pub entry: String,
}

impl VizCommand {
    pub fn execute(self, _verbose: bool) -> Result<()> {
        let ctx = project_context()?;
        let kind = parse_entry(&self.entry)?;
        let root = ctx.resolver().graph(&ctx.prober, kind)?;

        println!("digraph g {{");
        let mut queue: VecDeque<&Node> = VecDeque::new();
        queue.push_back(&root);
        while let Some(node) = queue.pop_front() {
            for dep in &node.dependencies {
                println!("  \"{}\" -> \"{}\";", node.name, dep.name);
                queue.push_back(dep);
            }
        }
        println!("}}");
        Ok(())
    }
}
