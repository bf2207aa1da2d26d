//! CLI integration tests for ghostkit.
//!
//! Drives the built binary against temporary project directories with a
//! pre-generated typed client, so no external generator is needed.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const CLIENT: &str = "export class GhostofavmClient {}\nexport class GhostofavmFactory {}\n";

fn run_ghostkit(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ghostkit"))
        .args(args)
        .current_dir(cwd)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute ghostkit")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn spec(readonly: bool) -> String {
    format!(
        r#"{{
            "name": "Ghostofavm",
            "methods": [
                {{
                    "name": "blkTimestamp",
                    "args": [{{ "type": "uint64", "name": "firstRound" }}, {{ "type": "uint64", "name": "lastRound" }}],
                    "returns": {{ "type": "uint64" }},
                    "actions": {{ "create": ["NoOp"], "call": [] }},
                    "readonly": true
                }},
                {{
                    "name": "getBlkData",
                    "args": [{{ "type": "uint64", "name": "firstRound" }}, {{ "type": "uint64", "name": "lastRound" }}],
                    "returns": {{ "type": "(uint64,uint64,uint64,address)", "struct": "BlkData" }},
                    "actions": {{ "create": ["NoOp"], "call": [] }},
                    "readonly": {readonly}
                }}
            ]
        }}"#
    )
}

/// Write `<dir>/<sub>/Ghostofavm.arc56.json` and its typed client.
fn write_project(root: &Path, sub: &str, readonly: bool) -> PathBuf {
    let dir = root.join(sub);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("GhostofavmClient.ts"), CLIENT).unwrap();
    let spec_path = dir.join("Ghostofavm.arc56.json");
    std::fs::write(&spec_path, spec(readonly)).unwrap();
    spec_path
}

// ==================== Usage ====================

#[test]
fn test_no_args_prints_usage_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_ghostkit(&[], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("ghostkit build a.arc56.json [b.arc56.json]"));
}

#[test]
fn test_help_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_ghostkit(&["help"], dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Supported commands"));
}

#[test]
fn test_help_with_extra_args_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    for args in [&["help", "extra"][..], &["help", "build", "--weird"][..]] {
        let output = run_ghostkit(args, dir.path());
        assert_eq!(output.status.code(), Some(0), "args: {args:?}");
        assert!(stderr(&output).contains("Supported commands"));
    }
}

#[test]
fn test_unknown_command_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_ghostkit(&["deploy"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Supported commands"));
}

#[test]
fn test_build_without_specs_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_ghostkit(&["build"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Supported commands"));
}

#[test]
fn test_version() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_ghostkit(&["--version"], dir.path());
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("ghostkit"));
}

// ==================== Build ====================

#[test]
fn test_build_single_spec() {
    let dir = tempfile::tempdir().unwrap();
    let spec_path = write_project(dir.path(), "app", true);

    let output = run_ghostkit(&["build", spec_path.to_str().unwrap()], dir.path());
    assert!(output.status.success());

    let err = stderr(&output);
    assert!(err.contains("Building"));
    assert!(err.contains("OK"));

    let out = dir.path().join("app/GhostofavmSDK.ts");
    assert!(err.contains(&out.display().to_string()));

    let doc = std::fs::read_to_string(out).unwrap();
    assert!(doc.starts_with("class GhostofavmClient {}\nclass GhostofavmFactory {}\n"));
    assert!(doc.contains("export class GhostofavmSDK"));
    assert!(doc.contains("'blkTimestamp(uint64,uint64)uint64'"));
    assert!(doc.contains("'getBlkData(uint64,uint64)(uint64,uint64,uint64,address)'"));
    for token in ["{{ARC56_NAME}}", "{{METHODS}}", "{{METHOD_NAME}}", "{{METHOD_SIGNATURE}}"] {
        assert!(!doc.contains(token), "{token} left in output");
    }
}

#[test]
fn test_batch_continues_after_invalid_spec() {
    let dir = tempfile::tempdir().unwrap();
    let bad = write_project(dir.path(), "bad", false);
    let good = write_project(dir.path(), "good", true);

    let output = run_ghostkit(
        &["build", bad.to_str().unwrap(), good.to_str().unwrap()],
        dir.path(),
    );
    assert_eq!(output.status.code(), Some(0));

    let err = stderr(&output);
    assert!(err.contains("ERR"));
    assert!(err.contains("Method getBlkData is not readonly"));
    assert!(err.contains("OK"));
    assert!(!dir.path().join("bad/GhostofavmSDK.ts").exists());
    assert!(dir.path().join("good/GhostofavmSDK.ts").exists());
}

#[test]
fn test_missing_spec_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_ghostkit(&["build", "missing.arc56.json"], dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("contract spec not found"));
}

#[test]
fn test_build_twice_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let spec_path = write_project(dir.path(), "app", true);
    let out = dir.path().join("app/GhostofavmSDK.ts");

    run_ghostkit(&["build", spec_path.to_str().unwrap()], dir.path());
    let first = std::fs::read(&out).unwrap();
    run_ghostkit(&["build", spec_path.to_str().unwrap()], dir.path());
    assert_eq!(std::fs::read(&out).unwrap(), first);
}

#[test]
fn test_custom_templates_dir() {
    let dir = tempfile::tempdir().unwrap();
    let spec_path = write_project(dir.path(), "app", true);
    let tpl = dir.path().join("tpl");
    std::fs::create_dir_all(&tpl).unwrap();
    std::fs::write(tpl.join("index.ts.template"), "export const {{ARC56_NAME}} = [\n{{METHODS}}\n]\n").unwrap();
    std::fs::write(tpl.join("method.ts.template"), "  '{{METHOD_SIGNATURE}}',").unwrap();

    let output = run_ghostkit(
        &["build", "--templates-dir", tpl.to_str().unwrap(), spec_path.to_str().unwrap()],
        dir.path(),
    );
    assert!(output.status.success());

    let doc = std::fs::read_to_string(dir.path().join("app/GhostofavmSDK.ts")).unwrap();
    assert!(doc.ends_with(
        "export const Ghostofavm = [\n  'blkTimestamp(uint64,uint64)uint64',\n  'getBlkData(uint64,uint64)(uint64,uint64,uint64,address)',\n]\n"
    ));
}

#[test]
fn test_config_file_output_naming() {
    let dir = tempfile::tempdir().unwrap();
    let spec_path = write_project(dir.path(), "app", true);
    std::fs::write(
        dir.path().join("ghostkit.config.json"),
        r#"{ "client": { "source": "artifact" }, "output": { "suffix": "Reader", "extension": "mts" } }"#,
    )
    .unwrap();

    let output = run_ghostkit(&["build", spec_path.to_str().unwrap()], dir.path());
    assert!(output.status.success());
    assert!(dir.path().join("app/GhostofavmReader.mts").exists());
}

#[test]
fn test_client_file_override() {
    let dir = tempfile::tempdir().unwrap();
    let spec_path = write_project(dir.path(), "app", true);
    std::fs::remove_file(dir.path().join("app/GhostofavmClient.ts")).unwrap();
    let client = dir.path().join("generated.ts");
    std::fs::write(&client, CLIENT).unwrap();

    let output = run_ghostkit(
        &["build", "--client-file", client.to_str().unwrap(), spec_path.to_str().unwrap()],
        dir.path(),
    );
    assert!(output.status.success());
    assert!(stderr(&output).contains("OK"));
    assert!(dir.path().join("app/GhostofavmSDK.ts").exists());
}

#[test]
fn test_invalid_config_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let spec_path = write_project(dir.path(), "app", true);
    std::fs::write(dir.path().join("ghostkit.config.json"), "{ nope").unwrap();

    let output = run_ghostkit(&["build", spec_path.to_str().unwrap()], dir.path());
    assert!(!output.status.success());
    assert!(!dir.path().join("app/GhostofavmSDK.ts").exists());
}

#[test]
fn test_auto_fallback_warns_at_default_verbosity() {
    let dir = tempfile::tempdir().unwrap();
    let spec_path = write_project(dir.path(), "app", true);
    std::fs::remove_file(dir.path().join("app/GhostofavmClient.ts")).unwrap();
    std::fs::write(
        dir.path().join("ghostkit.config.json"),
        r#"{ "client": { "source": "auto", "generator": ["ghostkit-no-such-generator"] } }"#,
    )
    .unwrap();

    let output = run_ghostkit(&["build", spec_path.to_str().unwrap()], dir.path());
    assert_eq!(output.status.code(), Some(0));

    let err = stderr(&output);
    assert!(err.contains("falling back to generator"));
    assert!(err.contains("ERR"));
    assert!(!dir.path().join("app/GhostofavmSDK.ts").exists());
}
