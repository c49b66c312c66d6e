//! CLI behavior tests: argument handling must fail before any connection
//! attempt is made.

use assert_cmd::Command;

#[test]
fn no_arguments_prints_usage_and_exits_nonzero() {
    let assert = Command::cargo_bin("hotelsql")
        .unwrap()
        .assert()
        .failure()
        .code(2);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("Usage: hotelsql <dbname> <port> <user>"));
}

#[test]
fn too_many_arguments_prints_usage() {
    let assert = Command::cargo_bin("hotelsql")
        .unwrap()
        .args(["hotel", "5432", "postgres", "extra"])
        .assert()
        .failure()
        .code(2);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("Usage"));
}

#[test]
fn unparseable_port_prints_usage() {
    let assert = Command::cargo_bin("hotelsql")
        .unwrap()
        .args(["hotel", "not-a-port", "postgres"])
        .assert()
        .failure()
        .code(2);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("invalid port"));
    assert!(stderr.contains("Usage"));
}

#[test]
fn unreachable_server_exits_nonzero_before_menu() {
    // Port 1 is never a postgres listener.
    let assert = Command::cargo_bin("hotelsql")
        .unwrap()
        .args(["hotel", "1", "postgres"])
        .assert()
        .failure()
        .code(1);
    let output = assert.get_output();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(stderr.contains("Unable to Connect"));
    assert!(!stdout.contains("MAIN MENU"));
}
