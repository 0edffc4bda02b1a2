//! Candidate matching against inspection tool output
//!
//! Library filenames can be substrings of one another (`libcamd.so` vs
//! `libcamd.so.2`), so a raw substring hit on a line is only provisional:
//! it is promoted to the longest overlapping candidate that also appears
//! literally in the same line, repeated to a fixpoint so chains of
//! overlapping suffixes resolve transitively.

use std::collections::BTreeSet;

/// Match candidate names against the full inspection output
///
/// `own_name` is the base filename of the probed binary; it is never
/// reported as its own dependency.
pub fn match_output(output: &str, own_name: &str, candidates: &[String]) -> BTreeSet<String> {
    let mut matched = BTreeSet::new();
    for line in output.lines() {
        for candidate in candidates {
            if candidate == own_name {
                continue;
            }
            if !line.contains(candidate.as_str()) {
                continue;
            }
            if let Some(resolved) = disambiguate(line, candidate, own_name, candidates) {
                matched.insert(resolved);
            }
        }
    }
    matched
}

/// Promote a provisional match to the most specific candidate on the line
///
/// Returns `None` when the hit resolves to the probed binary itself (e.g.
/// the self-reference line otool prints first).
fn disambiguate(
    line: &str,
    provisional: &str,
    own_name: &str,
    candidates: &[String],
) -> Option<String> {
    let mut best = provisional.to_string();
    loop {
        let promoted = candidates
            .iter()
            .filter(|other| {
                other.len() > best.len() && other.contains(&best) && line.contains(other.as_str())
            })
            .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        match promoted {
            Some(longer) => best = longer.clone(),
            None => break,
        }
    }
    if best == own_name {
        None
    } else {
        Some(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_simple_match() {
        let libs = candidates(&["libamd.so", "libcolamd.so"]);
        let out = "\tlibamd.so => /opt/julia/lib/libamd.so (0x00007f)\n";
        let matched = match_output(out, "libumf.so", &libs);
        assert_eq!(matched, BTreeSet::from(["libamd.so".to_string()]));
    }

    #[test]
    fn test_prefers_longer_overlapping_candidate() {
        let libs = candidates(&["libfoo.so", "libfoo.so.2"]);
        let out = "\tlibfoo.so.2 => /opt/julia/lib/libfoo.so.2\n";
        let matched = match_output(out, "libbar.so", &libs);
        assert_eq!(matched, BTreeSet::from(["libfoo.so.2".to_string()]));
    }

    #[test]
    fn test_disambiguation_is_transitive() {
        let libs = candidates(&["libfoo.so", "libfoo.so.2", "libfoo.so.2.1"]);
        let out = "\tlibfoo.so.2.1 => /opt/julia/lib/libfoo.so.2.1\n";
        let matched = match_output(out, "libbar.so", &libs);
        assert_eq!(matched, BTreeSet::from(["libfoo.so.2.1".to_string()]));
    }

    #[test]
    fn test_never_reports_self() {
        let libs = candidates(&["libfoo.so", "libbar.so"]);
        let out = "libfoo.so:\n\tlibbar.so => /opt/julia/lib/libbar.so\n";
        let matched = match_output(out, "libfoo.so", &libs);
        assert_eq!(matched, BTreeSet::from(["libbar.so".to_string()]));
    }

    #[test]
    fn test_hit_promoting_to_own_name_is_dropped() {
        // otool prints the probed library's own install name on the first
        // line; a shorter candidate hitting that line must not survive as a
        // phantom dependency.
        let libs = candidates(&["libfoo.so", "libfoo.so.2"]);
        let out = "/opt/julia/lib/libfoo.so.2:\n";
        let matched = match_output(out, "libfoo.so.2", &libs);
        assert!(matched.is_empty());
    }

    #[test]
    fn test_matches_are_deduplicated_across_lines() {
        let libs = candidates(&["libamd.so"]);
        let out = "\tlibamd.so => a\n\tlibamd.so => b\n";
        let matched = match_output(out, "libumf.so", &libs);
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_empty_output_yields_empty_set() {
        let libs = candidates(&["libamd.so"]);
        assert!(match_output("", "libumf.so", &libs).is_empty());
    }
}
