mod common;

use std::process::Command;

use common::{ramp_rgb, write_png};

fn graymill() -> Command {
    Command::new(env!("CARGO_BIN_EXE_graymill"))
}

#[test]
fn converts_with_short_flags() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.bmp");
    write_png(&ramp_rgb(), &input);

    let status = graymill()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    assert!(output.exists());
}

#[test]
fn unsupported_format_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.xyz");
    write_png(&ramp_rgb(), &input);

    let result = graymill()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.starts_with("Error: "), "stderr was: {stderr}");
    assert!(!output.exists());
}

#[test]
fn missing_input_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();

    let result = graymill()
        .args(["-i", "does-not-exist.png", "-o"])
        .arg(dir.path().join("out.png"))
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Error: "));
}

#[test]
fn missing_required_flag_exits_with_one() {
    let result = graymill().args(["-i", "in.png"]).output().unwrap();

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.starts_with("Error: "), "stderr was: {stderr}");
    assert_eq!(stderr.lines().count(), 1, "stderr was: {stderr}");
    assert!(stderr.contains("--output"), "stderr was: {stderr}");
}

#[test]
fn help_and_version_exit_with_zero() {
    for flag in ["--help", "--version"] {
        let result = graymill().arg(flag).output().unwrap();

        assert_eq!(result.status.code(), Some(0), "{flag}");
        assert!(!result.stdout.is_empty(), "{flag}");
    }
}
