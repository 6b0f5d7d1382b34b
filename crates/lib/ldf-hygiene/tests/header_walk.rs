use std::fs;
use std::path::{Path, PathBuf};

use ldf_hygiene::apply::process_root;
use ldf_hygiene::rules::{HEADER_HASH, HEADER_SLASH};
use tempfile::{TempDir, tempdir};

fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directories");
    }
    fs::write(&path, content).expect("write fixture file");
    path
}

fn read_back(path: &Path) -> String {
    fs::read_to_string(path).expect("read fixture file back")
}

fn build_tree() -> TempDir {
    let dir = tempdir().expect("create scratch tree");
    let root = dir.path();
    write_file(root, "services/registry/main.go", "package registry\n");
    write_file(root, "scripts/deploy.sh", "set -e\n");
    write_file(
        root,
        "scripts/seed.py",
        &format!("{HEADER_HASH}import os\n"),
    );
    write_file(root, "deployment/Dockerfile", "FROM alpine:3.20\n");
    write_file(root, "docs/README.md", "# platform\n");
    dir
}

#[test]
fn walk_adds_headers_across_a_nested_tree() {
    let dir = build_tree();
    let root = dir.path();

    let summary = process_root(root, false);

    assert_eq!(summary.added, 3);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.would_add, 0);
    assert_eq!(summary.errors, 0);

    let go = read_back(&root.join("services/registry/main.go"));
    assert!(go.starts_with(HEADER_SLASH));
    assert!(go.ends_with("package registry\n"));

    let sh = read_back(&root.join("scripts/deploy.sh"));
    assert!(sh.starts_with(HEADER_HASH));

    let dockerfile = read_back(&root.join("deployment/Dockerfile"));
    assert!(dockerfile.starts_with(HEADER_HASH));
    assert!(dockerfile.contains("FROM alpine:3.20"));

    // Untouched: already licensed, and not covered by any rule.
    assert_eq!(
        read_back(&root.join("scripts/seed.py")),
        format!("{HEADER_HASH}import os\n")
    );
    assert_eq!(read_back(&root.join("docs/README.md")), "# platform\n");
}

#[test]
fn walk_is_idempotent() {
    let dir = build_tree();
    let root = dir.path();

    let _ = process_root(root, false);
    let snapshot = read_back(&root.join("services/registry/main.go"));

    let second = process_root(root, false);

    assert_eq!(second.added, 0);
    assert_eq!(second.skipped, 4);
    assert_eq!(read_back(&root.join("services/registry/main.go")), snapshot);
}

#[test]
fn dry_run_walk_mutates_nothing() {
    let dir = build_tree();
    let root = dir.path();

    let summary = process_root(root, true);

    assert_eq!(summary.would_add, 3);
    assert_eq!(summary.added, 0);
    assert_eq!(summary.skipped, 1);

    assert_eq!(
        read_back(&root.join("services/registry/main.go")),
        "package registry\n"
    );
    assert_eq!(read_back(&root.join("scripts/deploy.sh")), "set -e\n");
    assert_eq!(
        read_back(&root.join("deployment/Dockerfile")),
        "FROM alpine:3.20\n"
    );
}
