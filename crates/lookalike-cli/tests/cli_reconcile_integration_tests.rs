//! CLI reconcile integration tests
//!
//! These tests run the `lookalike` binary inside a scratch project using the
//! default `cypress/screenshots` and `cypress/snapshots` roots.

use image::{ImageFormat, Rgba, RgbaImage};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const SHOT: &str = "cypress/screenshots/login.cy.ts/capture.png";
const BASELINE: &str = "cypress/snapshots/login.cy.ts/login - form.png";

fn lookalike(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lookalike"));
    cmd.current_dir(dir)
        .env_remove("LOOKALIKE_UPDATE_SNAPSHOTS")
        .env_remove("LOOKALIKE_CONTINUE_WHEN_LOOKS_DIFFERENT")
        .env_remove("RUST_LOG");
    cmd
}

fn write_png(dir: &Path, rel: &str, colour: [u8; 3]) -> PathBuf {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    RgbaImage::from_pixel(4, 4, Rgba([colour[0], colour[1], colour[2], 255]))
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();
    path
}

fn reconcile_args(extra: &[&str]) -> Vec<String> {
    let mut args: Vec<String> = ["reconcile", "--spec", "login", "--name", "form", "--screenshot", SHOT]
        .iter()
        .map(|s| s.to_string())
        .collect();
    args.extend(extra.iter().map(|s| s.to_string()));
    args
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({}): {}\nstderr: {}",
            e,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

#[test]
fn test_cli_reconcile_adopts_first_screenshot() {
    // Scenario: no baseline exists
    // When: `lookalike reconcile --spec login --name form --screenshot <shot>`
    // Then: the screenshot becomes the baseline and the JSON reports an update
    let temp_dir = TempDir::new().unwrap();
    write_png(temp_dir.path(), SHOT, [255, 255, 255]);

    let output = lookalike(temp_dir.path())
        .args(reconcile_args(&[]))
        .output()
        .expect("Failed to execute CLI");

    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json = stdout_json(&output);
    assert_eq!(json["imagesMatch"], true);
    assert_eq!(json["snapshotUpdated"], true);
    assert!(json["snapshot"].as_str().unwrap().ends_with("login - form.png"));
    assert!(temp_dir.path().join(BASELINE).exists());
    assert!(!temp_dir.path().join(SHOT).exists());
}

#[test]
fn test_cli_assert_fails_on_mismatch() {
    // Scenario: baseline exists and the new capture differs
    // When: `lookalike reconcile ... --assert --highlight-color #00ff00`
    // Then: exit code 1, message on stderr, actual/diff in the JSON
    let temp_dir = TempDir::new().unwrap();
    write_png(temp_dir.path(), BASELINE, [255, 255, 255]);
    write_png(temp_dir.path(), SHOT, [0, 0, 0]);

    let output = lookalike(temp_dir.path())
        .args(reconcile_args(&["--assert", "--highlight-color", "#00ff00"]))
        .output()
        .expect("Failed to execute CLI");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'form' image looks different"), "stderr: {}", stderr);

    let json = stdout_json(&output);
    assert_eq!(json["imagesMatch"], false);
    assert_eq!(json["snapshotUpdated"], false);
    let diff = PathBuf::from(json["diff"].as_str().unwrap());
    assert!(diff.is_absolute());
    let rendered = image::open(&diff).unwrap().to_rgba8();
    assert_eq!(rendered.get_pixel(0, 0), &Rgba([0, 255, 0, 255]));
    assert!(PathBuf::from(json["actual"].as_str().unwrap()).exists());
}

#[test]
fn test_cli_continue_on_mismatch_exits_zero() {
    // Scenario: same mismatch, but continuing is allowed
    let temp_dir = TempDir::new().unwrap();
    write_png(temp_dir.path(), BASELINE, [255, 255, 255]);
    write_png(temp_dir.path(), SHOT, [0, 0, 0]);

    let output = lookalike(temp_dir.path())
        .args(reconcile_args(&["--assert", "--continue-on-mismatch"]))
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("image looks different"));
    assert_eq!(stdout_json(&output)["imagesMatch"], false);
}

#[test]
fn test_cli_update_mode_from_environment() {
    // Scenario: LOOKALIKE_UPDATE_SNAPSHOTS=1 with a differing capture
    // Then: the baseline is replaced and the mismatch is still reported
    let temp_dir = TempDir::new().unwrap();
    write_png(temp_dir.path(), BASELINE, [255, 255, 255]);
    let shot = write_png(temp_dir.path(), SHOT, [0, 0, 0]);
    let shot_bytes = fs::read(&shot).unwrap();

    let output = lookalike(temp_dir.path())
        .env("LOOKALIKE_UPDATE_SNAPSHOTS", "1")
        .args(reconcile_args(&["--assert"]))
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["imagesMatch"], false);
    assert_eq!(json["snapshotUpdated"], true);
    assert!(json.get("actual").is_none());
    assert_eq!(fs::read(temp_dir.path().join(BASELINE)).unwrap(), shot_bytes);
}

#[test]
fn test_cli_task_reads_request_from_stdin() {
    // Scenario: runner glue pipes a JSON request into `lookalike task`
    let temp_dir = TempDir::new().unwrap();
    write_png(temp_dir.path(), BASELINE, [255, 255, 255]);
    write_png(temp_dir.path(), SHOT, [255, 255, 255]);

    let mut child = lookalike(temp_dir.path())
        .arg("task")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(
            format!(
                r#"{{"spec":"login","name":"form","screenshotPath":"{}","strict":true}}"#,
                SHOT
            )
            .as_bytes(),
        )
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json = stdout_json(&output);
    assert_eq!(json["imagesMatch"], true);
    assert_eq!(json["snapshotUpdated"], false);
    assert!(!temp_dir.path().join(SHOT).exists());
}

#[test]
fn test_cli_policy_strips_tolerance_in_strict_mode() {
    // Scenario: `lookalike policy --tolerance 0 --pixel-ratio 2`
    // Then: strict is on, tolerance is absent, pixelRatio is forwarded
    let temp_dir = TempDir::new().unwrap();

    let output = lookalike(temp_dir.path())
        .args(["policy", "--tolerance", "0", "--pixel-ratio", "2"])
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["strict"], true);
    assert!(json.get("tolerance").is_none());
    assert_eq!(json["pixelRatio"], 2.0);
    assert_eq!(json["ignoreCaret"], true);
    assert_eq!(json["highlightColor"], "#ff00ff");
}

#[test]
fn test_cli_config_file_supplies_roots_and_defaults() {
    // Scenario: a settings file moves both roots and sets a default colour
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("visual.toml"),
        "snapshotsDir = \"baselines\"\nscreenshotsDir = \"shots\"\n\n[defaults]\nhighlightColor = \"#0000ff\"\n",
    )
    .unwrap();

    let policy = lookalike(temp_dir.path())
        .args(["--config", "visual.toml", "policy"])
        .output()
        .expect("Failed to execute CLI");
    assert!(policy.status.success());
    assert_eq!(stdout_json(&policy)["highlightColor"], "#0000ff");

    write_png(temp_dir.path(), "shots/a/capture.png", [1, 2, 3]);
    let output = lookalike(temp_dir.path())
        .args([
            "--config",
            "visual.toml",
            "reconcile",
            "--spec",
            "s",
            "--name",
            "n",
            "--screenshot",
            "shots/a/capture.png",
        ])
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    assert!(temp_dir.path().join("baselines/a/s - n.png").exists());
}

#[test]
fn test_cli_missing_screenshot_is_an_error() {
    let temp_dir = TempDir::new().unwrap();

    let output = lookalike(temp_dir.path())
        .args(reconcile_args(&[]))
        .output()
        .expect("Failed to execute CLI");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_MISSING_SCREENSHOT"), "stderr: {}", stderr);
    assert!(!temp_dir.path().join("cypress/snapshots").exists());
}
