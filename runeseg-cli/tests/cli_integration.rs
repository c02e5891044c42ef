//! Integration tests for the runeseg CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn runeseg() -> Command {
    Command::cargo_bin("runeseg").unwrap()
}

fn write_fixture(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_segment_graphemes() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(temp_dir.path(), "accent.txt", "A\u{301}B".as_bytes());

    runeseg()
        .arg("segment")
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout("A\u{301}\nB\n");
}

#[test]
fn test_segment_words_only() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(temp_dir.path(), "hello.txt", b"Hello, world!");

    runeseg()
        .args(["segment", "--words-only", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout("Hello\nworld\n");
}

#[test]
fn test_segment_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(temp_dir.path(), "words.txt", b"can't stop");

    runeseg()
        .args(["segment", "-m", "word", "-f", "json", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\": \"can't\""))
        .stdout(predicate::str::contains("\"word_like\": true"))
        .stdout(predicate::str::contains("\"word_like\": false"));
}

#[test]
fn test_segment_stdin() {
    runeseg()
        .args(["segment", "-i", "-"])
        .write_stdin("\u{1F1EF}\u{1F1F5}\u{1F1EB}")
        .assert()
        .success()
        .stdout("\u{1F1EF}\u{1F1F5}\n\u{1F1EB}\n");
}

#[test]
fn test_segment_replaces_ill_formed_bytes() {
    runeseg()
        .args(["segment", "-m", "code-point", "-i", "-"])
        .write_stdin(&b"a\xE0\xA0b"[..])
        .assert()
        .success()
        .stdout("a\n\u{FFFD}\nb\n");
}

#[test]
fn test_segment_glob_with_headers() {
    let temp_dir = TempDir::new().unwrap();
    write_fixture(temp_dir.path(), "one.txt", b"x");
    write_fixture(temp_dir.path(), "two.txt", b"y");
    let pattern = temp_dir.path().join("*.txt");

    runeseg()
        .args(["segment", "-i"])
        .arg(pattern.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("one.txt <==\nx\n"))
        .stdout(predicate::str::contains("two.txt <==\ny\n"));
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(temp_dir.path(), "text.txt", b"one, two");
    let config = write_fixture(
        temp_dir.path(),
        "runeseg.toml",
        b"[processing]\nmode = \"word\"\nwords_only = true\n\n[output]\ninclude_metadata = true\n",
    );

    runeseg()
        .args(["segment", "-c"])
        .arg(&config)
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout("one\ntwo\n# 2 word segments, 8 code points, 0 replacements\n");
}

#[test]
fn test_convert_to_utf16le() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(temp_dir.path(), "in.txt", "h\u{1F600}".as_bytes());
    let output = temp_dir.path().join("out.bin");

    runeseg()
        .args(["convert", "--to", "utf-16le", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        fs::read(&output).unwrap(),
        vec![0x68, 0x00, 0x3D, 0xD8, 0x00, 0xDE]
    );
}

#[test]
fn test_convert_round_trip_through_stdout() {
    runeseg()
        .args(["convert", "--from", "utf-32be", "--to", "utf-8", "-i", "-"])
        .write_stdin(vec![0x00, 0x00, 0x00, 0x41, 0x00, 0x00, 0xD8, 0x00])
        .assert()
        .success()
        .stdout("A\u{FFFD}");
}

#[test]
fn test_convert_strict_failure() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(temp_dir.path(), "bad.txt", b"ok\xC0!");

    runeseg()
        .args(["convert", "--strict", "--to", "utf-16be", "-i"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("ill-formed input at code unit 2"));
}

#[test]
fn test_validate() {
    let temp_dir = TempDir::new().unwrap();
    let good = write_fixture(temp_dir.path(), "good.txt", "caf\u{E9}".as_bytes());
    let bad = write_fixture(temp_dir.path(), "bad.txt", b"\xED\xA0\x80");

    runeseg()
        .args(["validate", "-i"])
        .arg(&good)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"));

    runeseg()
        .args(["validate", "-i"])
        .arg(&good)
        .arg("-i")
        .arg(&bad)
        .assert()
        .failure()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains("bad.txt: ill-formed input at code unit 0"));
}

#[test]
fn test_validate_utf16_encoding() {
    runeseg()
        .args(["validate", "-e", "utf-16le", "-i", "-"])
        .write_stdin(vec![0x41, 0x00, 0x00, 0xDC])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ill-formed input at code unit 1"));
}

#[test]
fn test_count() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(temp_dir.path(), "count.txt", "e\u{301} fox".as_bytes());

    runeseg()
        .args(["count", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "code_points=6 graphemes=5 words=2 replacements=0",
        ));
}

#[test]
fn test_count_json() {
    runeseg()
        .args(["count", "-f", "json", "-i", "-"])
        .write_stdin(&b"\x80\x81"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"replacements\": 2"))
        .stdout(predicate::str::contains("\"source\": \"<stdin>\""));
}

#[test]
fn test_no_matching_files() {
    let temp_dir = TempDir::new().unwrap();
    let pattern = temp_dir.path().join("*.missing");

    runeseg()
        .args(["segment", "-i"])
        .arg(pattern.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_unknown_encoding() {
    runeseg()
        .args(["convert", "--to", "latin1", "-i", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown encoding"));
}

#[test]
fn test_help() {
    runeseg()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("segment"))
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("count"));
}
