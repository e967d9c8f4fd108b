use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn cli(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_post-gen-setup"))
        .args(args)
        .arg("--dir")
        .arg(dir)
        .env_remove("POST_GEN_PROJECT_SLUG")
        .env_remove("POST_GEN_NODE_VERSION")
        .output()
        .unwrap()
}

#[test]
fn test_git_subcommand_rejects_skip_git() {
    let tmp = tempfile::tempdir().unwrap();

    let out = cli(tmp.path(), &["git", "--skip-git"]);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("--skip-git"));
    assert!(!tmp.path().join(".git").exists());
}

#[test]
fn test_pin_subcommand_writes_only_the_pin() {
    let tmp = tempfile::tempdir().unwrap();

    let out = cli(tmp.path(), &["pin", "--node-version", "20.9.0"]);

    assert!(out.status.success());
    assert_eq!(fs::read_to_string(tmp.path().join(".nvmrc")).unwrap(), "20.9.0");
    assert!(String::from_utf8_lossy(&out.stdout).contains("Node.js v20.9.0"));
    assert!(!tmp.path().join(".git").exists());
}

#[test]
fn test_json_report_with_skip_git() {
    let tmp = tempfile::tempdir().unwrap();

    let out = cli(tmp.path(), &["--skip-git", "--json", "--project-slug", "demo-app"]);

    assert!(out.status.success());
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["project_slug"], "demo-app");
    assert_eq!(report["git"]["status"], "skipped");
    assert!(!tmp.path().join(".git").exists());
}
