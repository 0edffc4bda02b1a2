//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn nlbundle() -> Command {
    Command::cargo_bin("nlbundle").unwrap()
}

#[test]
fn test_help_lists_commands() {
    nlbundle()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("collect"))
        .stdout(predicate::str::contains("dist"))
        .stdout(predicate::str::contains("viz"));
}

#[test]
fn test_collect_outside_project_fails() {
    let tmp = tempfile::tempdir().unwrap();
    nlbundle()
        .arg("collect")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("NLBUNDLE.toml"));
}

/// Lay out a minimal project: config, empty search dir, and two entry
/// "binaries" that are plain files. The real inspection tool finds no
/// candidate names in its output for them, so each entry resolves to a
/// one-element load order.
fn write_project(root: &std::path::Path) {
    let libdir = root.join("libs");
    std::fs::create_dir_all(&libdir).unwrap();
    std::fs::create_dir_all(root.join("bin")).unwrap();

    let config = format!(
        r#"
[bundle]
name = "olcar"
version = "1.1.0"

[entries]
full = "olcar_withumf"
base = "olcar"

[libdirs]
linux-x86_64 = "{libdir}"
macos-arm64 = "{libdir}"
macos-x86_64 = "{libdir}"
windows-x86_64 = "{libdir}"
"#,
        libdir = libdir.display()
    );
    std::fs::write(root.join("NLBUNDLE.toml"), config).unwrap();
}

#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
mod linux {
    use super::*;

    #[test]
    fn test_collect_rejects_unknown_entry() {
        let tmp = tempfile::tempdir().unwrap();
        write_project(tmp.path());
        write_entries(tmp.path());
        nlbundle()
            .args(["collect", "--entry", "bogus"])
            .current_dir(tmp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown entry"));
    }

    fn write_entries(root: &std::path::Path) {
        std::fs::write(root.join("bin/libolcar_withumf.so"), b"not a real library").unwrap();
        std::fs::write(root.join("bin/libolcar.so"), b"not a real library").unwrap();
    }

    #[test]
    fn test_collect_merges_both_entries() {
        let tmp = tempfile::tempdir().unwrap();
        write_project(tmp.path());
        write_entries(tmp.path());

        nlbundle()
            .arg("collect")
            .current_dir(tmp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("libolcar_withumf.so"))
            .stdout(predicate::str::contains("libolcar.so"));
    }

    #[test]
    fn test_index_writes_load_order_file() {
        let tmp = tempfile::tempdir().unwrap();
        write_project(tmp.path());
        write_entries(tmp.path());

        nlbundle()
            .args(["index", "full"])
            .current_dir(tmp.path())
            .assert()
            .success();

        let index = tmp
            .path()
            .join("resources/full/linux-x86_64/index.txt");
        let content = std::fs::read_to_string(index).unwrap();
        assert_eq!(content, "libolcar_withumf.so\n");
    }

    #[test]
    fn test_collect_fails_when_entry_binary_is_missing() {
        let tmp = tempfile::tempdir().unwrap();
        write_project(tmp.path());

        nlbundle()
            .arg("collect")
            .current_dir(tmp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("does not exist"));
    }

    #[test]
    fn test_viz_prints_digraph() {
        let tmp = tempfile::tempdir().unwrap();
        write_project(tmp.path());
        write_entries(tmp.path());

        nlbundle()
            .arg("viz")
            .current_dir(tmp.path())
            .assert()
            .success()
            .stdout(predicate::str::starts_with("digraph g {"));
    }
}
