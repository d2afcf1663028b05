//! Integration tests for the tzfinder binary
//!
//! Every case here runs without network access: no API key is configured,
//! so the provider is never contacted.

use std::process::{Command, Output};

fn tzfinder(args: &[&str]) -> Output {
    let workdir = tempfile::tempdir().unwrap();

    let mut command = Command::new(env!("CARGO_BIN_EXE_tzfinder"));
    command.args(args).current_dir(workdir.path()).env("RUST_LOG", "off");
    for (key, _) in std::env::vars() {
        if key.starts_with("TZFINDER_") {
            command.env_remove(key);
        }
    }

    command.output().expect("Failed to execute tzfinder")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("stdout should be valid JSON")
}

fn stderr_json(output: &Output) -> serde_json::Value {
    let stderr = String::from_utf8_lossy(&output.stderr);
    serde_json::from_str(&stderr).expect("stderr should be valid JSON")
}

#[test]
fn test_time_json_output() {
    let output = tzfinder(&["time", "UTC", "--json"]);
    assert!(output.status.success());

    let parsed = stdout_json(&output);
    assert_eq!(parsed["status"], "success");
    assert_eq!(parsed["data"]["zone"], "UTC");
    let local_time = parsed["data"]["local_time"].as_str().unwrap();
    assert!(local_time.ends_with(" UTC"), "unexpected time: {}", local_time);
    assert!(local_time.contains(" at "));
}

#[test]
fn test_time_rejects_unknown_zone() {
    let output = tzfinder(&["time", "Mars/Olympus_Mons", "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let parsed = stderr_json(&output);
    assert_eq!(parsed["status"], "error");
    assert_eq!(parsed["kind"], "FORMAT_ERROR");
}

#[test]
fn test_short_address_is_rejected() {
    let output = tzfinder(&["search", "NY", "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let parsed = stderr_json(&output);
    assert_eq!(parsed["kind"], "VALIDATION_ERROR");
    assert_eq!(parsed["message"], "Please enter at least 3 characters for the address.");
}

#[test]
fn test_search_without_key_reports_missing_credential() {
    let output = tzfinder(&["search", "Lisbon", "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let parsed = stderr_json(&output);
    assert_eq!(parsed["kind"], "CONFIG_ERROR");
    assert!(parsed["message"].as_str().unwrap().starts_with("API key not configured"));
}

#[test]
fn test_placeholder_key_counts_as_missing() {
    let output =
        tzfinder(&["search", "Lisbon", "--json", "--api-key", "YOUR_GEOAPIFY_API_KEY_HERE"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr_json(&output)["kind"], "CONFIG_ERROR");
}

#[test]
fn test_current_without_position_is_unsupported() {
    let output = tzfinder(&["current", "--json"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr_json(&output)["kind"], "GEOLOCATION_UNSUPPORTED");
}

#[test]
fn test_current_with_reported_error() {
    let output = tzfinder(&["current", "--position-error", "permission-denied", "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let parsed = stderr_json(&output);
    assert_eq!(parsed["kind"], "GEOLOCATION_DENIED");
    assert!(parsed["message"].as_str().unwrap().starts_with("Location access was denied"));
}

#[test]
fn test_current_without_key_uses_local_timezone() {
    let output = tzfinder(&["current", "--lat", "-33.8688", "--lon", "151.2093", "--json"]);
    assert!(output.status.success());

    let data = &stdout_json(&output)["data"];
    assert_eq!(data["state"], "DEGRADED_FALLBACK");
    assert_eq!(data["status"]["message"], "Location detected (using local timezone)");
    assert_eq!(data["record"]["source"], "FALLBACK");
    assert_eq!(data["record"]["timezone"]["offset_daylight"], "Detected locally");
    assert_eq!(data["record"]["place"]["coordinates"]["latitude"], -33.8688);
}

#[test]
fn test_config_lists_sources() {
    let output = tzfinder(&["config", "--json", "--timeout-ms", "2500"]);
    assert!(output.status.success());

    let data = &stdout_json(&output)["data"];
    assert_eq!(data["credential_configured"], false);

    let entries = data["entries"].as_array().unwrap();
    let find = |key: &str| entries.iter().find(|e| e["key"] == key).unwrap().clone();

    assert_eq!(find("api_key")["value"], "(not configured)");
    assert_eq!(find("request_timeout_ms")["value"], "2500");
    assert_eq!(find("request_timeout_ms")["source"], "Cli");
    assert_eq!(find("min_address_length")["source"], "Default");
}

#[test]
fn test_config_key_is_masked() {
    let output = tzfinder(&["config", "--json", "--api-key", "abcdef123456"]);
    assert!(output.status.success());

    let rendered = String::from_utf8_lossy(&output.stdout);
    assert!(!rendered.contains("abcdef123456"));
    assert_eq!(stdout_json(&output)["data"]["credential_configured"], true);
}
