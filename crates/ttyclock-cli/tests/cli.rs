//! Argument handling. Every case here exits before the terminal is touched.

use assert_cmd::Command;
use predicates::prelude::*;

fn ttyclock() -> Command {
    Command::cargo_bin("ttyclock").unwrap()
}

#[test]
fn help_exits_zero() {
    ttyclock()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("timer"));
}

#[test]
fn short_version_flag_exits_zero() {
    ttyclock()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_flag_prints_authors_and_exits_zero() {
    ttyclock()
        .arg("-i")
        .assert()
        .success()
        .stdout(predicate::str::contains("Martin Duquesnoy"));
}

#[test]
fn missing_subcommand_is_an_error() {
    ttyclock().assert().failure().code(2);
}

#[test]
fn timer_help_lists_display_flags() {
    ttyclock()
        .args(["timer", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--color"))
        .stdout(predicate::str::contains("--box"));
}

#[test]
fn timer_requires_a_time() {
    ttyclock().arg("timer").assert().failure();
}

#[test]
fn timer_rejects_invalid_character() {
    ttyclock()
        .args(["timer", "1a:30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character"));
}

#[test]
fn timer_rejects_too_many_digits() {
    ttyclock()
        .args(["timer", "12:345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too many digits"));
}

#[test]
fn timer_rejects_zero() {
    ttyclock()
        .args(["timer", "00:00:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("time argument is zero"));
}

#[test]
fn clock_rejects_bad_date_format() {
    ttyclock()
        .args(["clock", "--format", "%Q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date format"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    ttyclock().args(["clock", "--nope"]).assert().failure();
}
