//! Integration tests for device-log edge cases: garbled input, fallback
//! keywords, severity table coverage.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn usbtint() -> Command {
    let mut cmd = Command::cargo_bin("usbtint").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/usbtint-test-no-config");
    cmd
}

fn beagle_line(rest: &str) -> String {
    format!("{:<50}{rest}", "4.039648 beagle-xm ttyO2 115200")
}

#[test]
fn garbled_bracket_line_dropped_silently() {
    // Bracket characters at the expected columns but no digit level: the
    // line classifies, fails extraction, and is dropped without error.
    let input = beagle_line("[a5b] junk trailing content here\n");
    usbtint()
        .arg("--color=never")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn b64_fallback_renders_purple_sentinel() {
    let input = beagle_line("B64 frame dropped\n");
    usbtint()
        .arg("--color=always")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("\x1b[38;5;126mMUSB B64 frame dropped\x1b[0m\n");
}

#[test]
fn assert_severity_renders_bold_red() {
    let input = beagle_line("[255] CORE assertion failed in ep0 handler\n");
    usbtint()
        .arg("--color=always")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1b[1m\x1b[38;5;160m"))
        .stdout(predicate::str::contains("CORE assertion failed in ep0 handler"));
}

#[test]
fn info_severity_without_master_entry_renders_yellow() {
    let input = beagle_line("[ 16] PROBE attached to port 1\n");
    usbtint()
        .arg("--color=always")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("\x1b[38;5;220mPROBE attached to port 1\x1b[0m\n");
}

#[test]
fn invalid_utf8_bytes_tolerated() {
    let mut input = beagle_line("[ 15] GADGET  starting").into_bytes();
    input.extend_from_slice(&[0xff, 0xfe]);
    input.push(b'\n');
    usbtint()
        .arg("--color=never")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("starting"));
}

#[test]
fn very_long_line_no_crash() {
    let payload = "x".repeat(1_100_000);
    let input = beagle_line(&format!("[ 15] GADGET  {payload}\n"));
    usbtint()
        .arg("--color=never")
        .write_stdin(input)
        .assert()
        .success();
}

#[test]
fn line_at_length_boundary_dropped() {
    // Classification requires strictly more than 53 bytes; a line this
    // short cannot carry a bracketed header at column 50.
    let input = "12345678901234567890123456789012345678901234567890[ 1\n";
    usbtint()
        .arg("--color=never")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("");
}
