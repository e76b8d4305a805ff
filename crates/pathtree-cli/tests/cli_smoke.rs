use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture(name: &str) -> PathBuf {
    let path = repo_root().join("fixtures").join(name);
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

#[test]
fn cli_writes_dot_into_working_directory() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let exe = assert_cmd::cargo_bin!("pathtree");
    let output = Command::new(exe)
        .current_dir(tmp.path())
        .arg(fixture("two_levels.tsv"))
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DOT file generated:"), "{stdout}");
    assert!(stdout.contains("dot -Tpng"), "{stdout}");

    let dot = fs::read_to_string(tmp.path().join("query_plan.dot")).expect("read dot");
    assert!(dot.starts_with("digraph query_plan {"));
    assert!(dot.contains("  P1 -> P2;\n"));
    assert_eq!(dot.matches(" -> ").count(), 1);
    assert!(!tmp.path().join("query_plan.html").exists());
}

#[test]
fn cli_writes_html_companion_on_request() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out_dir = tmp.path().join("out");
    fs::create_dir(&out_dir).expect("mkdir");

    let exe = assert_cmd::cargo_bin!("pathtree");
    Command::new(exe)
        .args([
            "render",
            "--html",
            "--cluster",
            "--out-dir",
            out_dir.to_string_lossy().as_ref(),
            fixture("three_way_join.tsv").to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let dot = fs::read_to_string(out_dir.join("query_plan.dot")).expect("read dot");
    assert!(dot.contains("subgraph cluster_level_2 {"));

    let html = fs::read_to_string(out_dir.join("query_plan.html")).expect("read html");
    assert!(html.contains("const levels = [0,1,2];"));
    assert!(html.contains(r#"src="query_plan.png""#));
}

#[test]
fn cli_applies_json_config() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = tmp.path().join("pathtree.json");
    fs::write(
        &config,
        r#"{"graphName":"plan","fillColor":"white","joinLabels":true}"#,
    )
    .expect("write config");

    let exe = assert_cmd::cargo_bin!("pathtree");
    Command::new(exe)
        .current_dir(tmp.path())
        .args([
            "--config",
            config.to_string_lossy().as_ref(),
            fixture("three_way_join.tsv").to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let dot = fs::read_to_string(tmp.path().join("query_plan.dot")).expect("read dot");
    assert!(dot.starts_with("digraph plan {"));
    assert!(dot.contains(r#"fillcolor="white"];"#));
    assert!(dot.contains("join_abc(join_ab⋈scan_c)"));
}

#[test]
fn cli_parse_prints_records_as_json() {
    let exe = assert_cmd::cargo_bin!("pathtree");
    let output = Command::new(exe)
        .args(["parse", fixture("two_levels.tsv").to_string_lossy().as_ref()])
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(r#"[{"level":0,"name":"P1","pathType":"SeqScan","children":null"#));
}

#[test]
fn cli_wrong_argument_count_prints_usage() {
    let exe = assert_cmd::cargo_bin!("pathtree");
    let output = Command::new(exe).assert().code(1).get_output().clone();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Usage: pathtree"), "{stdout}");

    let exe = assert_cmd::cargo_bin!("pathtree");
    Command::new(exe).args(["a.tsv", "b.tsv"]).assert().code(1);
}

#[test]
fn cli_reports_malformed_rows_without_writing_output() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("bad.tsv");
    fs::write(&input, "0\tP1\tSeqScan\n").expect("write input");

    let exe = assert_cmd::cargo_bin!("pathtree");
    let output = Command::new(exe)
        .current_dir(tmp.path())
        .arg(&input)
        .assert()
        .code(1)
        .get_output()
        .clone();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("line 1: expected 8 tab-separated fields, found 3"),
        "{stderr}"
    );
    assert!(!tmp.path().join("query_plan.dot").exists());
}

#[test]
fn cli_rejects_duplicates_in_strict_mode() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("dup.tsv");
    fs::write(
        &input,
        "0\tP1\tSeqScan\t\\N\t0\t1\t1\tf\n1\tP1\tSort\t\\N\t0\t1\t1\tf\n",
    )
    .expect("write input");

    let exe = assert_cmd::cargo_bin!("pathtree");
    Command::new(exe)
        .current_dir(tmp.path())
        .args(["--strict-names", input.to_string_lossy().as_ref()])
        .assert()
        .code(1);

    let exe = assert_cmd::cargo_bin!("pathtree");
    Command::new(exe)
        .current_dir(tmp.path())
        .arg(&input)
        .assert()
        .success();
}
