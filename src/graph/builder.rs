//! Breadth-first dependency graph construction

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::BundleError;
use crate::probe::DependencyProber;

use super::Node;

/// Builds the rooted dependency graph of an entry binary
///
/// Each library name is probed exactly once (first discovery wins), so the
/// traversal terminates even if the probed binaries reference each other in
/// a loop; such a loop is reported later by the sorter, not here.
pub struct GraphBuilder<'a, P: DependencyProber + ?Sized> {
    prober: &'a P,
    search_dir: &'a Path,
    candidates: Vec<String>,
}

impl<'a, P: DependencyProber + ?Sized> GraphBuilder<'a, P> {
    pub fn new(prober: &'a P, search_dir: &'a Path, candidates: Vec<String>) -> Self {
        Self {
            prober,
            search_dir,
            candidates,
        }
    }

    /// Build the dependency graph rooted at `entry_path`
    pub fn build_graph(&self, entry_path: &Path) -> Result<Node> {
        let root_name = entry_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| {
                BundleError::config_error(format!(
                    "entry path has no file name: {}",
                    entry_path.display()
                ))
            })?;

        // Direct dependencies per name, filled once per name in FIFO
        // discovery order.
        let mut direct: HashMap<String, Vec<String>> = HashMap::new();
        let mut discovered: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<(String, PathBuf)> = VecDeque::new();

        discovered.insert(root_name.clone());
        queue.push_back((root_name.clone(), entry_path.to_path_buf()));

        while let Some((name, path)) = queue.pop_front() {
            let deps = self.prober.probe(&path, &self.candidates)?;
            let mut children = Vec::with_capacity(deps.len());
            for dep in deps {
                if discovered.insert(dep.clone()) {
                    queue.push_back((dep.clone(), self.search_dir.join(&dep)));
                }
                children.push(dep);
            }
            direct.insert(name, children);
        }

        let mut expanded = HashSet::new();
        Ok(self.materialize(&root_name, entry_path.to_path_buf(), &direct, &mut expanded))
    }

    /// Turn the per-name adjacency into the rooted node tree
    ///
    /// The first occurrence of a name gets its children; every later
    /// occurrence becomes a leaf duplicate, which keeps the recursion finite
    /// even when the probed binaries form a loop.
    fn materialize(
        &self,
        name: &str,
        path: PathBuf,
        direct: &HashMap<String, Vec<String>>,
        expanded: &mut HashSet<String>,
    ) -> Node {
        let mut node = Node::new(path, name.to_string());
        if !expanded.insert(name.to_string()) {
            return node;
        }
        if let Some(children) = direct.get(name) {
            for child in children {
                node.dependencies.push(self.materialize(
                    child,
                    self.search_dir.join(child),
                    direct,
                    expanded,
                ));
            }
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::BTreeSet;

    use super::*;

    /// Scripted prober: maps a base filename to its dependency names
    struct FakeProber {
        deps: HashMap<String, Vec<String>>,
        probed: RefCell<Vec<String>>,
    }

    impl FakeProber {
        fn new(edges: &[(&str, &[&str])]) -> Self {
            let deps = edges
                .iter()
                .map(|(name, children)| {
                    (
                        name.to_string(),
                        children.iter().map(|c| c.to_string()).collect(),
                    )
                })
                .collect();
            Self {
                deps,
                probed: RefCell::new(Vec::new()),
            }
        }
    }

    impl DependencyProber for FakeProber {
        fn probe(&self, library_path: &Path, _candidates: &[String]) -> Result<BTreeSet<String>> {
            let name = library_path.file_name().unwrap().to_string_lossy().to_string();
            self.probed.borrow_mut().push(name.clone());
            Ok(self
                .deps
                .get(&name)
                .map(|d| d.iter().cloned().collect())
                .unwrap_or_default())
        }
    }

    fn build(prober: &FakeProber, entry: &str) -> Node {
        let candidates: Vec<String> = prober.deps.keys().cloned().collect();
        let builder = GraphBuilder::new(prober, Path::new("/libs"), candidates);
        builder.build_graph(Path::new(entry)).unwrap()
    }

    fn child<'a>(node: &'a Node, name: &str) -> &'a Node {
        node.dependencies
            .iter()
            .find(|n| n.name == name)
            .unwrap_or_else(|| panic!("{} has no child {}", node.name, name))
    }

    #[test]
    fn test_linear_chain() {
        let prober = FakeProber::new(&[("a", &["b"]), ("b", &["c"]), ("c", &[])]);
        let root = build(&prober, "/bin/a");

        assert_eq!(root.name, "a");
        assert_eq!(root.dependencies.len(), 1);
        let b = child(&root, "b");
        assert_eq!(b.path, PathBuf::from("/libs/b"));
        assert_eq!(child(b, "c").dependencies.len(), 0);
    }

    #[test]
    fn test_diamond_creates_duplicate_leaf_nodes() {
        let prober = FakeProber::new(&[
            ("a", &["b", "c"]),
            ("b", &["d"]),
            ("c", &["d"]),
            ("d", &[]),
        ]);
        let root = build(&prober, "/bin/a");

        // d appears under both b and c, but only one occurrence is expanded
        let d_under_b = child(child(&root, "b"), "d");
        let d_under_c = child(child(&root, "c"), "d");
        assert_eq!(d_under_b.name, "d");
        assert_eq!(d_under_c.name, "d");

        // each name probed exactly once
        let probed = prober.probed.borrow();
        assert_eq!(probed.len(), 4);
    }

    #[test]
    fn test_cycle_does_not_loop_forever() {
        let prober = FakeProber::new(&[("a", &["b"]), ("b", &["a"])]);
        let root = build(&prober, "/bin/a");

        // the back-edge to a becomes a leaf duplicate under b
        let b = child(&root, "b");
        let a_dup = child(b, "a");
        assert!(a_dup.dependencies.is_empty());
    }

    #[test]
    fn test_no_dependencies() {
        let prober = FakeProber::new(&[("a", &[])]);
        let root = build(&prober, "/bin/a");
        assert!(root.dependencies.is_empty());
    }
}
