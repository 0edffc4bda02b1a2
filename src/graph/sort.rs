//! Topological sorting of the dependency graph
//!
//! Produces the dependency-first load order: a library appears in the output
//! after everything it depends on. The reduction is Kahn-style over per-name
//! counters rebuilt from the node tree, so duplicate Node objects for the
//! same name merge into one counting entity while every edge is still
//! counted once.

use std::collections::{HashMap, VecDeque};

use anyhow::Result;

use crate::error::BundleError;

use super::Node;

/// Compute the dependency-first load order of the graph rooted at `root`
///
/// Ties between simultaneously ready names break deterministically: the name
/// first seen during the breadth-first counting traversal is emitted first.
/// Fails with a cycle fault if no full ordering exists; never returns a
/// partial order.
pub fn topo_sort(root: &Node) -> Result<Vec<String>> {
    // `in_degree` counts a name's unresolved dependencies; `dependents`
    // records who is waiting on it. Every Node object is visited, but each
    // name's dependency list lives on exactly one object, so each edge is
    // counted once.
    let mut in_degree: HashMap<String, usize> = HashMap::new();
    let mut dependents: HashMap<String, Vec<String>> = HashMap::new();
    let mut seen_order: Vec<String> = Vec::new();

    let mut queue: VecDeque<&Node> = VecDeque::new();
    queue.push_back(root);
    register(&mut in_degree, &mut seen_order, &root.name);

    while let Some(node) = queue.pop_front() {
        for dep in &node.dependencies {
            queue.push_back(dep);
            register(&mut in_degree, &mut seen_order, &dep.name);
            dependents
                .entry(dep.name.clone())
                .or_default()
                .push(node.name.clone());
            *in_degree.entry(node.name.clone()).or_insert(0) += 1;
        }
    }

    let mut ordered = Vec::with_capacity(seen_order.len());
    while !in_degree.is_empty() {
        let ready = seen_order
            .iter()
            .find(|name| in_degree.get(*name) == Some(&0))
            .cloned();

        let name = match ready {
            Some(name) => name,
            None => {
                return Err(BundleError::cycle(format!(
                    "could not compute a load order; the {} remaining libraries depend on each other",
                    in_degree.len()
                ))
                .into())
            }
        };

        in_degree.remove(&name);
        for dependent in dependents.remove(&name).unwrap_or_default() {
            if let Some(count) = in_degree.get_mut(&dependent) {
                *count -= 1;
            }
        }
        ordered.push(name);
    }

    Ok(ordered)
}

fn register(in_degree: &mut HashMap<String, usize>, seen_order: &mut Vec<String>, name: &str) {
    if !in_degree.contains_key(name) {
        in_degree.insert(name.to_string(), 0);
        seen_order.push(name.to_string());
    }
}
