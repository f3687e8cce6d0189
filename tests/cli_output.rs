// tests/cli_output.rs
//
// Runs the `pcipher` binary with an isolated config directory.

use std::process::{Command, Output};

fn pcipher(args: &[&str]) -> Output {
    let home = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_pcipher"))
        .args(args)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("PCIPHER_CATALOG")
        .output()
        .unwrap()
}

#[test]
fn test_encrypt_json_with_steps_keeps_stdout_parseable() {
    let out = pcipher(&["encrypt", "AB?", "--steps", "--json"]);
    assert!(out.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(doc["result"], "02010216?");

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Input text: AB?"));
    assert!(stderr.contains("Result: 02010216?"));
}

#[test]
fn test_decrypt_json_with_steps_keeps_stdout_parseable() {
    let out = pcipher(&["decrypt", "0201x", "--steps", "--json"]);
    assert!(out.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(doc["result"], "Ax");
    assert_eq!(doc["alternatives"].as_array().map(Vec::len), Some(1));

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Result: Ax"));
}

#[test]
fn test_plain_steps_stay_on_stdout() {
    let out = pcipher(&["encrypt", "AB?", "--steps"]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Input text: AB?"));
    assert_eq!(stdout.lines().last(), Some("02010216?"));
}
