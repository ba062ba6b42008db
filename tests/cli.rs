//! Runs the compiled `pagerank` binary against small corpora.

use std::process::{Command, Output};
use tempfile::TempDir;

fn pagerank(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pagerank"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to execute pagerank")
}

fn corpus() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    let pages = [
        ("1.html", r#"<a href="2.html">2</a>"#),
        ("2.html", r#"<a href="1.html">1</a><a href="3.html">3</a>"#),
        ("3.html", r#"<a href="2.html">2</a>"#),
    ];
    for (name, body) in pages {
        std::fs::write(dir.path().join(name), body).expect("failed to write page");
    }
    dir
}

#[test]
fn no_argument_is_a_usage_error() {
    let out = pagerank(&[]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage"), "{stderr}");
    assert!(out.stdout.is_empty());
}

#[test]
fn second_argument_is_a_usage_error() {
    let dir = corpus();
    let path = dir.path().to_str().unwrap();
    let out = pagerank(&[path, "b"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unexpected argument 'b'"), "{stderr}");
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_directory_fails_without_repeating_itself() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let absent = dir.path().join("absent");
    let out = pagerank(&[absent.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("error: cannot read corpus"), "{stderr}");
    assert_eq!(stderr.matches("cannot walk corpus directory").count(), 1, "{stderr}");
}

#[test]
fn prints_both_estimates() {
    let dir = corpus();
    let out = pagerank(&[dir.path().to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 8, "{stdout}");
    assert_eq!(lines[0], "PageRank Results from Sampling (n = 10000)");
    assert_eq!(lines[4], "PageRank Results from Iteration");
    for (i, page) in ["1.html", "2.html", "3.html"].iter().enumerate() {
        assert!(lines[1 + i].starts_with(&format!("  {page}: ")), "{stdout}");
        assert!(lines[5 + i].starts_with(&format!("  {page}: ")), "{stdout}");
    }
}
