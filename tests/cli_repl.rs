mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn evaluates_piped_lines_in_order() {
    let ctx = TestContext::new();

    ctx.cli()
        .write_stdin("1 + 2 * 3\nx = 4\nx ** 2\n")
        .assert()
        .success()
        .stdout("7\n4\n16\n")
        .stderr("");
}

#[test]
fn symbols_persist_across_lines() {
    let ctx = TestContext::new();

    ctx.cli()
        .write_stdin("a = b = 5\na + b\nc = a\nc * 2\n")
        .assert()
        .success()
        .stdout("5\n10\n5\n10\n");
}

#[test]
fn bad_lines_are_reported_and_skipped() {
    let ctx = TestContext::new();

    ctx.cli()
        .write_stdin("y\n3 / 0\n1 $ 2\ny = 2\ny + 1\n")
        .assert()
        .success()
        .stdout("2\n3\n")
        .stderr(predicate::str::contains("Error: y is not defined"))
        .stderr(predicate::str::contains("Error: division by zero"))
        .stderr(predicate::str::contains("unexpected character '$'"));
}

#[test]
fn blank_lines_produce_no_output() {
    let ctx = TestContext::new();

    ctx.cli().write_stdin("\n   \n42\n\n").assert().success().stdout("42\n");
}

#[test]
fn last_line_without_newline_is_evaluated() {
    let ctx = TestContext::new();

    ctx.cli().write_stdin("6 * 7").assert().success().stdout("42\n");
}

#[test]
fn empty_input_exits_cleanly() {
    let ctx = TestContext::new();

    ctx.cli().write_stdin("").assert().success().stdout("");
}

#[test]
fn invalid_assignment_target_is_explained() {
    let ctx = TestContext::new();

    ctx.cli()
        .write_stdin("1 = 2\n")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("1 is not a valid symbol name"));
}

#[test]
fn piped_sessions_do_not_write_history() {
    let ctx = TestContext::new();

    ctx.cli().write_stdin("1 + 1\n").assert().success();

    assert!(!ctx.history_path().exists());
}

#[test]
fn deeply_nested_line_is_rejected_and_session_continues() {
    let ctx = TestContext::new();
    let deep = format!("{}1\n", "-".repeat(200_000));
    let parens = format!("{}1{}\n", "(".repeat(100_000), ")".repeat(100_000));

    ctx.cli()
        .write_stdin(format!("{deep}{parens}2 + 2\n"))
        .assert()
        .success()
        .stdout("4\n")
        .stderr(predicate::str::contains("nested too deeply").count(2));
}

#[test]
fn no_history_flag_runs_piped_session() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--no-history")
        .write_stdin("x = 3\nx * x\n")
        .assert()
        .success()
        .stdout("3\n9\n");

    assert!(!ctx.history_path().exists());
}
