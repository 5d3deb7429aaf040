use assert_cmd::Command;
use predicates::prelude::*;

fn ntype() -> Command {
    Command::cargo_bin("ntype").unwrap()
}

#[test]
fn dry_run_prints_actions() {
    ntype()
        .args(["--dry-run", "--delay", "0", "--noise-prob", "0", "--seed", "42"])
        .args(["--text", "hi there"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Typing 8 characters at ~10.0 chars/sec after 0.0s delay. Noise prob: 0.00.",
        ))
        .stdout(predicate::str::contains(
            "type \"hi\" @100ms\npause 100ms\npress space\npause 100ms\n\
             type \"there\" @100ms\npause 100ms\npress space\npause 100ms\npress enter\n",
        ));
}

#[test]
fn dry_run_presses_enter_per_line() {
    let output = ntype()
        .args(["--dry-run", "--delay", "0", "--text", "a\nb\n"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("press enter").count(), 3);
}

#[test]
fn zero_speed_is_usage_error() {
    ntype()
        .args(["--dry-run", "--text", "hello", "--cps", "0"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("press").not())
        .stderr(predicate::str::contains("--cps must be greater than zero."));
}

#[test]
fn negative_delay_is_usage_error() {
    ntype()
        .args(["--dry-run", "--text", "hello", "--delay", "-2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--delay must be zero or positive."));
}

#[test]
fn noise_probability_out_of_range_is_usage_error() {
    ntype()
        .args(["--dry-run", "--text", "hello", "--noise-prob", "1.2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--noise-prob must be between 0 and 1."));
}

#[test]
fn save_config_writes_resolved_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.json");

    ntype()
        .args(["--cps", "15", "--seed", "9", "--save-config"])
        .arg(&path)
        .assert()
        .success();

    let saved = noisy_typer::Config::from_file(path.to_str().unwrap()).unwrap();
    assert_eq!(saved.chars_per_second, 15.0);
    assert_eq!(saved.random_seed, Some(9));
    assert_eq!(saved.start_delay, 5.0);
}

#[test]
fn dry_run_long_delay_is_a_single_pause() {
    let output = ntype()
        .args(["--dry-run", "--delay", "100000", "--noise-prob", "0", "-t", "hi"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 7);
    assert!(stdout.contains("pause 100000s\n"));
}

#[test]
fn dry_run_shows_sub_millisecond_pacing() {
    ntype()
        .args(["--dry-run", "--delay", "0", "--noise-prob", "0"])
        .args(["--cps", "100000", "-t", "hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("type \"hi\" @10µs"))
        .stdout(predicate::str::contains("pause 10µs"));
}
