//! Dependency graph construction and load-order computation
//!
//! The graph is rooted at one entry binary and discovered breadth-first by
//! probing each library against the filename listing of the search
//! directory. Sorting linearizes it into a dependency-first load order.

mod builder;
mod sort;

use std::path::PathBuf;

pub use builder::GraphBuilder;
pub use sort::topo_sort;

/// A node in the dependency graph
///
/// `name` (the base filename) is the only identity: the same library
/// reached through several parents appears as multiple `Node` objects, but
/// only the one created at first discovery carries its dependencies; later
/// occurrences are leaf duplicates.
#[derive(Debug, Clone)]
pub struct Node {
    /// Filesystem location used to probe this library
    pub path: PathBuf,

    /// Base filename, the graph's identity key
    pub name: String,

    /// Direct dependencies discovered for this node
    pub dependencies: Vec<Node>,
}

impl Node {
    pub fn new(path: PathBuf, name: String) -> Self {
        Self {
            path,
            name,
            dependencies: Vec::new(),
        }
    }
}
