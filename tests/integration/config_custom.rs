//! Integration tests for the TOML config file layer.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn usbtint() -> Command {
    let mut cmd = Command::cargo_bin("usbtint").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/usbtint-test-no-config");
    cmd
}

#[test]
fn config_file_selects_dialect() {
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    config_file
        .write_all(b"dialect = \"usbmon\"\n")
        .unwrap();

    let input = "f2bc5c00 269733556 S Bo:2:005:2 -115 31\n";
    usbtint()
        .arg("--color=never")
        .arg(format!("--config={}", config_file.path().display()))
        .write_stdin(input)
        .assert()
        .success()
        .stdout("f2bc5c00 269733556 S Bo:2:005:2 -115 31\n");
}

#[test]
fn cli_flag_overrides_config_file() {
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    config_file
        .write_all(b"dialect = \"usbmon\"\n")
        .unwrap();

    // --proxy wins: the usbmon line is dropped, the marker line passes.
    let input = "f2bc5c00 269733556 S Bo:2:005:2 -115 31\nProxy Gadget: connected\n";
    usbtint()
        .arg("--proxy")
        .arg("--color=never")
        .arg(format!("--config={}", config_file.path().display()))
        .write_stdin(input)
        .assert()
        .success()
        .stdout("Proxy Gadget: connected\n");
}

#[test]
fn unknown_dialect_in_config_is_fatal() {
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    config_file
        .write_all(b"dialect = \"syslog\"\n")
        .unwrap();

    usbtint()
        .arg(format!("--config={}", config_file.path().display()))
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown dialect"));
}

#[test]
fn malformed_config_file_is_fatal() {
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    config_file.write_all(b"dialect = [not toml\n").unwrap();

    usbtint()
        .arg(format!("--config={}", config_file.path().display()))
        .write_stdin("")
        .assert()
        .code(1);
}

#[test]
fn missing_config_file_uses_defaults() {
    let input = format!(
        "{:<50}[ 15] GADGET  starting up\n",
        "4.039648 beagle-xm ttyO2 115200"
    );
    usbtint()
        .arg("--color=never")
        .arg("--config=/nonexistent/usbtint.toml")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("starting up\n");
}
