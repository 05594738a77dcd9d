//! door-cli 命令行测试

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn door_cli() -> Command {
    let mut cmd = Command::cargo_bin("door-cli").unwrap();
    cmd.env_remove("GAZEBO_DOOR_MODEL_DIRECTION")
        .env_remove("GAZEBO_DOOR_MODEL_SELFCLOSE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_profiles_lists_all_tables() {
    door_cli()
        .arg("profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("No Force"))
        .stdout(predicate::str::contains("Wind Ramp"))
        .stdout(predicate::str::contains("CCW"));
}

#[test]
fn test_profiles_json() {
    let output = door_cli().args(["profiles", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 8);
}

#[test]
fn test_force_constant() {
    door_cli()
        .args(["force", "--profile", "Constant Force", "--side", "CW", "--angle", "45"])
        .assert()
        .success()
        .stdout("-15.000\n");
}

#[test]
fn test_force_negative_angle() {
    door_cli()
        .args(["force", "--profile", "Constant Force", "--angle", "-45"])
        .assert()
        .success()
        .stdout("15.000\n");
}

#[test]
fn test_sweep_json() {
    let output = door_cli()
        .args([
            "sweep", "--profile", "Sudden Force", "--side", "CW", "--from", "20", "--to", "30",
            "--step", "5", "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let points: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    let forces: Vec<f64> = points.iter().map(|p| p["force"].as_f64().unwrap()).collect();
    assert_eq!(forces, vec![0.0, -40.0, -40.0]);
}

#[test]
fn test_sweep_bad_step() {
    door_cli()
        .args(["sweep", "--step", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("步长"));
}

#[test]
fn test_replay_and_inspect() {
    let dir = tempfile::tempdir().unwrap();
    let angles = dir.path().join("angles.txt");
    let params = dir.path().join("params.json");
    let trace = dir.path().join("trace.bin");
    let config = dir.path().join("config.toml");

    fs::write(&angles, "# door opening\n0 10 20 30 40 50\n").unwrap();
    fs::write(
        &params,
        r#"{"benchmark_type": "Sudden Force", "door_opening_side": "CW", "robot_approach_side": "Push"}"#,
    )
    .unwrap();
    fs::write(&config, "[joint]\ndirection = \"push\"\n").unwrap();

    door_cli()
        .arg("--config")
        .arg(&config)
        .arg("replay")
        .arg("--angles")
        .arg(&angles)
        .arg("--params")
        .arg(&params)
        .arg("--output")
        .arg(&trace)
        .assert()
        .success()
        .stdout(predicate::str::contains("周期数: 6"))
        .stdout(predicate::str::contains("峰值阻力: -40.000 N"))
        .stdout(predicate::str::contains("关节限位"));

    door_cli()
        .args(["inspect", "-n", "6", "--input"])
        .arg(&trace)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Sudden Force\""))
        .stdout(predicate::str::contains("-40.000"));
}

#[test]
fn test_replay_requires_param_source() {
    let dir = tempfile::tempdir().unwrap();
    let angles = dir.path().join("angles.txt");
    let config = dir.path().join("config.toml");
    fs::write(&angles, "1 2 3").unwrap();
    fs::write(&config, "").unwrap();

    door_cli()
        .arg("--config")
        .arg(&config)
        .arg("replay")
        .arg("--angles")
        .arg(&angles)
        .assert()
        .failure();
}

#[test]
fn test_inspect_rejects_foreign_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not_a_trace.bin");
    fs::write(&path, b"hello world").unwrap();

    door_cli().arg("inspect").arg("--input").arg(&path).assert().failure();
}

#[test]
fn test_config_init_and_show() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("door").join("config.toml");

    door_cli().arg("--config").arg(&config).args(["config", "init"]).assert().success();
    assert!(config.exists());

    door_cli()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure();

    door_cli()
        .arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("frequency_hz = 1000.0"));
}

#[test]
fn test_realtime_replay_rejects_tiny_frequency() {
    let dir = tempfile::tempdir().unwrap();
    let angles = dir.path().join("angles.txt");
    let config = dir.path().join("config.toml");
    fs::write(&angles, "10 20 30").unwrap();
    fs::write(&config, "[control]\nfrequency_hz = 1e-300\n").unwrap();

    door_cli()
        .arg("--config")
        .arg(&config)
        .args(["replay", "--profile", "Constant Force", "--realtime", "--angles"])
        .arg(&angles)
        .assert()
        .failure()
        .stderr(predicate::str::contains("frequency_hz"));
}
