use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const MB: u64 = 1024 * 1024;

#[allow(deprecated)]
fn get_chrome_usage_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("chrome-usage")
}

fn command(data_dir: &Path) -> Command {
    let mut cmd = Command::new(get_chrome_usage_bin());
    cmd.env_remove("CHROME_USER_DATA_DIR")
        .arg("--chrome-data-dir")
        .arg(data_dir);
    cmd
}

fn sparse_file(path: &Path, len: u64) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::File::create(path).unwrap().set_len(len).unwrap();
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// `Default` ("Work", ~80 MB, one 60 MB extension with two versions) and
/// `Profile 1` ("Personal" via Local State, ~30 MB).
fn chrome_data_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    write(&root.join("Default/Preferences"), r#"{"profile":{"name":"Work"}}"#);
    sparse_file(&root.join("Default/History"), 20 * MB);

    let ext = root.join("Default/Extensions/abcdefg");
    write(&ext.join("1.0/manifest.json"), r#"{"name":"Old Docs"}"#);
    sparse_file(&ext.join("1.0/blob.bin"), 20 * MB);
    write(
        &ext.join("2.0/manifest.json"),
        r#"{"name":"__MSG_appName__","default_locale":"en"}"#,
    );
    write(
        &ext.join("2.0/_locales/en/messages.json"),
        r#"{"appName":{"message":"Docs Offline"}}"#,
    );
    sparse_file(&ext.join("2.0/blob.bin"), 40 * MB);

    write(&root.join("Profile 1/Preferences"), "{}");
    sparse_file(&root.join("Profile 1/Cookies"), 30 * MB);

    write(
        &root.join("Local State"),
        r#"{"profile":{"info_cache":{"Profile 1":{"name":"Personal"}}}}"#,
    );

    sparse_file(&root.join("Crash Reports/dump.dmp"), 90 * MB);

    temp
}

#[test]
fn test_scan_help() {
    let mut cmd = Command::new(get_chrome_usage_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--chrome-data-dir"))
        .stdout(predicate::str::contains("--min-size-mb"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--csv"))
        .stdout(predicate::str::contains("--log-level"))
        .stdout(predicate::str::contains("--debug"));
}

#[test]
fn test_scan_pretty_default_threshold() {
    let data = chrome_data_dir();

    command(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Chrome Profiles (sorted by size) ==="))
        .stdout(predicate::str::contains("- Work ["))
        .stdout(predicate::str::contains("Docs Offline: 60.00 MB"))
        .stdout(predicate::str::contains("Personal").not())
        .stdout(predicate::str::contains("Crash Reports").not())
        .stdout(predicate::str::contains("Total profiles displayed: 1"));
}

#[test]
fn test_scan_zero_threshold_orders_by_size() {
    let data = chrome_data_dir();

    let output = command(data.path())
        .arg("--min-size-mb")
        .arg("0")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let work = stdout.find("- Work [").expect("Work listed");
    let personal = stdout.find("- Personal [").expect("Personal listed");
    assert!(work < personal);
    assert!(stdout.contains("Total profiles displayed: 2"));
    assert!(stdout.contains("Docs Offline: 60.00 MB (Profile: Work)"));
}

#[test]
fn test_scan_json_output() {
    let data = chrome_data_dir();

    let output = command(data.path())
        .arg("--json")
        .arg("--min-size-mb")
        .arg("0")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let profiles = value.as_array().unwrap();

    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0]["profile_name"], "Work");
    assert_eq!(profiles[1]["profile_name"], "Personal");

    let extension = &profiles[0]["extensions"][0];
    assert_eq!(extension["extension_name"], "Docs Offline");
    let size = extension["extension_size_bytes"].as_u64().unwrap();
    assert!(size >= 60 * MB && size < 61 * MB);
    assert_eq!(extension["profile_name"], "Work");
    assert!(
        extension["extension_dir"]
            .as_str()
            .unwrap()
            .ends_with("abcdefg")
    );
}

#[test]
fn test_scan_csv_output() {
    let data = chrome_data_dir();

    command(data.path())
        .arg("--csv")
        .arg("--min-size-mb")
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "profile_name,profile_dir,profile_size_mb,extension_name,extension_dir,extension_size_mb",
        ))
        .stdout(predicate::str::contains("Docs Offline"))
        .stdout(predicate::str::is_match(r"Personal,[^,\n]*Profile 1,30\.00,,,\r?\n").unwrap());
}

#[test]
fn test_json_and_csv_conflict() {
    let data = chrome_data_dir();

    command(data.path())
        .arg("--json")
        .arg("--csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_missing_data_dir_fails() {
    let mut cmd = Command::new(get_chrome_usage_bin());
    cmd.env_remove("CHROME_USER_DATA_DIR")
        .arg("--chrome-data-dir")
        .arg("/nonexistent/chrome-data-12345");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not found"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_empty_data_dir_succeeds() {
    let data = TempDir::new().unwrap();

    command(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No profiles found or none above the specified threshold.",
        ));
}

#[test]
fn test_data_dir_from_environment() {
    let data = chrome_data_dir();

    let mut cmd = Command::new(get_chrome_usage_bin());
    cmd.env("CHROME_USER_DATA_DIR", data.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"profile_name\": \"Work\""));
}

#[test]
fn test_logs_stay_off_stdout() {
    let data = chrome_data_dir();

    let output = command(data.path())
        .arg("--json")
        .arg("--debug")
        .output()
        .unwrap();

    assert!(output.status.success());
    serde_json::from_slice::<serde_json::Value>(&output.stdout)
        .expect("stdout should be pure JSON even with debug logging");
    assert!(!output.stderr.is_empty());
}
