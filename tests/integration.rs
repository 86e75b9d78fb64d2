//! Integration tests for collate


use std::fs::{self, File};
use std::io::Read;

use assert_cmd::Command;
use harness::{OUTPUT, TestTree, block_body, collate_output, file_headers, run_collate, scratch};
use predicates::prelude::*;

#[test]
fn test_basic_collection() {
    let tree = TestTree::new();
    tree.add_file("main.rs", "fn main() {}");
    tree.add_file("src/lib.rs", "pub mod foo;");

    let output = collate_output(tree.path(), &[]);
    let headers = file_headers(&output);
    assert!(headers.contains(&"main.rs".to_string()), "{:?}", headers);
    assert!(headers.contains(&"src/lib.rs".to_string()), "{:?}", headers);
    assert_eq!(block_body(&output, "main.rs").as_deref(), Some("fn main() {}"));
}

#[test]
fn test_default_ignore_fixture_has_single_block() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "hello");
    tree.add_file("b/secret.txt", "top secret");

    let output = collate_output(tree.path(), &[]);
    assert_eq!(file_headers(&output), vec!["a.txt"]);
    assert_eq!(block_body(&output, "a.txt").as_deref(), Some("hello"));
    assert!(!output.contains("top secret"));
}

#[test]
fn test_preamble() {
    let tree = TestTree::new();
    let output = collate_output(tree.path(), &[]);
    let root = dunce::canonicalize(tree.path()).unwrap();
    assert!(output.starts_with(&format!(
        "# Aggregated contents of {}\n# Created by collate\n\n",
        root.display()
    )));
}

#[test]
fn test_completion_message_names_output() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "hello");

    let (stdout, _stderr, success) = run_collate(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("Done."), "{}", stdout);
    assert!(
        stdout.contains(&format!("Result: {}", dunce::canonicalize(tree.path()).unwrap().join(OUTPUT).display())),
        "{}",
        stdout
    );
}

#[test]
fn test_default_folders_are_pruned() {
    let tree = TestTree::new();
    tree.add_file("keep.py", "print('hi')");
    tree.add_file("node_modules/pkg/index.js", "module.exports = 1;");
    tree.add_file(".git/config", "[core]");
    tree.add_file("src/build/generated.rs", "// generated");
    tree.add_file("venv/lib/site.py", "# venv");

    let output = collate_output(tree.path(), &[]);
    assert_eq!(file_headers(&output), vec!["keep.py"]);
}

#[test]
fn test_ignore_folder_name_and_path() {
    let tree = TestTree::new();
    tree.add_file("docs/guide.md", "guide");
    tree.add_file("docs/internal/plan.md", "plan");
    tree.add_file("vendor/x.c", "int x;");
    tree.add_file("src/vendor/y.c", "int y;");

    let output = collate_output(tree.path(), &["-F", "docs/internal", "--ignore-folder", "vendor"]);
    let headers = file_headers(&output);
    assert_eq!(headers, vec!["docs/guide.md"]);
}

#[test]
fn test_ignore_file_name_and_path() {
    let tree = TestTree::new();
    tree.add_file("notes.txt", "root notes");
    tree.add_file("a/notes.txt", "a notes");
    tree.add_file("a/keep.txt", "keep");
    tree.add_file("b/config.toml", "x = 1");
    tree.add_file("config.toml", "y = 2");

    let output = collate_output(tree.path(), &["-f", "notes.txt", "--ignore-file", "b/config.toml"]);
    let mut headers = file_headers(&output);
    headers.sort();
    assert_eq!(headers, vec!["a/keep.txt", "config.toml"]);
}

#[test]
fn test_ignore_glob_uses_relative_path() {
    let tree = TestTree::new();
    tree.add_file("gen/a.txt", "generated");
    tree.add_file("src/gen/b.txt", "nested generated");
    tree.add_file("c.txt", "plain");

    let output = collate_output(tree.path(), &["-g", "gen/*"]);
    let mut headers = file_headers(&output);
    headers.sort();
    assert_eq!(headers, vec!["c.txt", "src/gen/b.txt"]);
}

#[test]
fn test_default_pycache_glob_is_anchored() {
    let tree = TestTree::new();
    tree.add_file("pkg/mod.py", "x = 1");
    tree.add_file("pkg/mod.pyc", "bytecode");

    let output = collate_output(tree.path(), &[]);
    assert_eq!(file_headers(&output), vec!["pkg/mod.py"]);
}

#[test]
fn test_only_ext_filter() {
    let tree = TestTree::new();
    tree.add_file("main.py", "print(1)");
    tree.add_file("layout.XML", "<a/>");
    tree.add_file("notes.txt", "notes");
    tree.add_file("Makefile", "all:");

    let output = collate_output(tree.path(), &["-e", "py", "--only-ext", ".xml"]);
    let mut headers = file_headers(&output);
    headers.sort();
    assert_eq!(headers, vec!["layout.XML", "main.py"]);
}

#[test]
fn test_only_ext_does_not_override_ignores() {
    let tree = TestTree::new();
    tree.add_file("keep.py", "1");
    tree.add_file("skip.py", "2");

    let output = collate_output(tree.path(), &["-e", "py", "-f", "skip.py"]);
    assert_eq!(file_headers(&output), vec!["keep.py"]);
}

#[test]
fn test_custom_output_name_is_excluded() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "hello");

    let (_stdout, _stderr, success) = run_collate(tree.path(), &["-o", "dump.md"]);
    assert!(success);
    let first = fs::read_to_string(tree.path().join("dump.md")).unwrap();
    assert_eq!(file_headers(&first), vec!["a.txt"]);

    let (_stdout, _stderr, success) = run_collate(tree.path(), &["-o", "dump.md"]);
    assert!(success);
    let second = fs::read_to_string(tree.path().join("dump.md")).unwrap();
    assert_eq!(first, second, "rerun should produce identical output");
}

#[test]
fn test_scan_explicit_root() {
    let tree = TestTree::new();
    tree.add_file("project/a.txt", "hello");
    let (_scratch_dir, cwd) = scratch();

    let root = tree.path().join("project");
    let (_stdout, stderr, success) = run_collate(&cwd, &[root.to_str().unwrap()]);
    assert!(success, "{}", stderr);
    assert!(root.join(OUTPUT).exists());
    assert!(!cwd.join(OUTPUT).exists());
}

#[test]
fn test_zip_archive() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "hello");
    tree.add_file("src/b.rs", "fn b() {}");

    let (stdout, stderr, success) = run_collate(tree.path(), &["--zip"]);
    assert!(success, "{}", stderr);

    let archive_path = tree.path().join(format!("{}.zip", OUTPUT));
    assert!(stdout.contains(&format!("{}.zip", OUTPUT)), "{}", stdout);

    let plain = fs::read_to_string(tree.path().join(OUTPUT)).unwrap();
    let mut archive = zip::ZipArchive::new(File::open(&archive_path).unwrap()).unwrap();
    assert_eq!(archive.len(), 1);

    let mut entry = archive.by_index(0).unwrap();
    assert_eq!(entry.name(), OUTPUT);
    let mut extracted = String::new();
    entry.read_to_string(&mut extracted).unwrap();
    assert_eq!(extracted, plain);
}

#[test]
fn test_json_summary() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "hello");
    tree.add_file("b.log", "log");

    let (stdout, stderr, success) = run_collate(tree.path(), &["--json"]);
    assert!(success, "{}", stderr);

    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["files_included"], 1);
    // b.log and the output file itself
    assert_eq!(summary["files_skipped"], 2);
    assert!(summary.get("archive").is_none());
}

#[test]
fn test_verbose_logs_decisions_to_stderr() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "hello");
    tree.add_file("node_modules/x.js", "x");
    tree.add_file("debug.log", "log");

    let (stdout, stderr, success) = run_collate(tree.path(), &["-v"]);
    assert!(success);
    assert!(stderr.contains("skipping descending into"), "{}", stderr);
    assert!(stderr.contains("node_modules"), "{}", stderr);
    assert!(stderr.contains("pattern *.log"), "{}", stderr);
    assert!(stderr.contains("including file"), "{}", stderr);
    assert!(!stdout.contains("skipping"), "diagnostics belong on stderr");
}

#[test]
fn test_verbose_logs_extension_filter() {
    let tree = TestTree::new();
    tree.add_file("main.rs", "fn main() {}");

    let (_stdout, stderr, success) = run_collate(tree.path(), &["-v", "-e", "RS", "-e", "py"]);
    assert!(success);
    assert!(stderr.contains("restricting to extensions"), "{}", stderr);
    assert!(stderr.contains(".rs .py"), "{}", stderr);
}

#[test]
fn test_quiet_by_default() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "hello");
    tree.add_file("debug.log", "log");

    let (_stdout, stderr, success) = run_collate(tree.path(), &[]);
    assert!(success);
    assert!(!stderr.contains("skipping"), "{}", stderr);
}

#[test]
fn test_duplicate_ignores_log_once() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "hello");
    tree.add_file("build/out.bin", "x");

    let (_stdout, stderr, success) =
        run_collate(tree.path(), &["-v", "-F", "build", "-F", "build"]);
    assert!(success);
    assert_eq!(stderr.matches("skipping descending into").count(), 1, "{}", stderr);
}

#[test]
fn test_missing_root_fails() {
    Command::cargo_bin("collate")
        .unwrap()
        .arg("/nonexistent/collate/root")
        .assert()
        .failure()
        .stderr(predicate::str::contains("collate: cannot access"));
}

#[test]
fn test_unclosed_bracket_glob_is_literal() {
    let tree = TestTree::new();
    tree.add_file("[oops].txt", "bracketed");
    tree.add_file("plain.txt", "plain");

    let output = collate_output(tree.path(), &["-g", "[oops*"]);
    assert_eq!(file_headers(&output), vec!["plain.txt"]);
}

#[test]
fn test_double_star_glob_is_not_recursive() {
    let tree = TestTree::new();
    tree.add_file("main.rs", "fn main() {}");
    tree.add_file("src/util.rs", "pub fn util() {}");
    tree.add_file("src/notes.txt", "notes");

    let output = collate_output(tree.path(), &["-g", "**/*.rs"]);
    let mut headers = file_headers(&output);
    headers.sort();
    assert_eq!(headers, vec!["main.rs", "src/notes.txt"]);
}

#[test]
fn test_help_lists_options() {
    Command::cargo_bin("collate")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--ignore-folder"))
        .stdout(predicate::str::contains("--only-ext"))
        .stdout(predicate::str::contains("--zip"));
}
