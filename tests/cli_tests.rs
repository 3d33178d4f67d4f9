//! CLI integration tests

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

/// `hi` as a text-only marshalled buffer
const TEXT_HI: &[u8] = &[0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, b'h', b'i'];

fn clipwire_bin(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("clipwire").expect("binary is built");
    cmd.env("HOME", config_home)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("CLIPWIRE_ENCODING")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_output() {
    let home = tempfile::tempdir().unwrap();
    clipwire_bin(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("encode"))
        .stdout(predicate::str::contains("decode"))
        .stdout(predicate::str::contains("dump"))
        .stdout(predicate::str::contains("--encoding"));
}

#[test]
fn version_output() {
    let home = tempfile::tempdir().unwrap();
    clipwire_bin(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("clipwire"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let home = tempfile::tempdir().unwrap();
    clipwire_bin(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clipwire"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_help() {
    let home = tempfile::tempdir().unwrap();
    clipwire_bin(home.path())
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn config_set_then_get() {
    let home = tempfile::tempdir().unwrap();
    clipwire_bin(home.path())
        .args(["config", "set", "encoding", "base64"])
        .assert()
        .success();

    clipwire_bin(home.path())
        .args(["config", "get", "encoding"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base64"));
}

#[test]
fn config_list_with_no_file() {
    let home = tempfile::tempdir().unwrap();
    clipwire_bin(home.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not set"));
}

#[test]
fn dump_raw_file() {
    let home = tempfile::tempdir().unwrap();
    let buffer = home.path().join("hi.bin");
    fs::write(&buffer, TEXT_HI).unwrap();

    clipwire_bin(home.path())
        .arg("dump")
        .arg(&buffer)
        .assert()
        .success()
        .stdout("size=14 formats=1\n fmt=0 len=2 \"hi\"\n");
}

#[test]
fn dump_base64_stdin() {
    let home = tempfile::tempdir().unwrap();
    clipwire_bin(home.path())
        .args(["--encoding", "base64", "dump", "-"])
        .write_stdin("AAAAAQAAAAAAAAACaGk=\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("fmt=0 len=2 \"hi\""));
}

#[test]
fn encoding_from_environment() {
    let home = tempfile::tempdir().unwrap();
    clipwire_bin(home.path())
        .env("CLIPWIRE_ENCODING", "base64")
        .arg("dump")
        .write_stdin("AAAAAQAAAAAAAAACaGk=")
        .assert()
        .success()
        .stdout(predicate::str::contains("formats=1"));
}

#[test]
fn dump_short_buffer_warns() {
    let home = tempfile::tempdir().unwrap();
    clipwire_bin(home.path())
        .arg("dump")
        .write_stdin(&[0u8, 0][..])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("too short"));
}
