//! scripted runs of the interactive menu
use std::io::Cursor;

use piecewise::analysis::extrema::ExtremaCfg;
use piecewise::menu::{Choice, Menu};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn run_script(script: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut menu = Menu::new(Cursor::new(script.as_bytes()), Vec::new());
    menu.run()?;
    Ok(String::from_utf8(menu.into_output())?)
}

#[test]
fn selectors() {
    assert_eq!(Choice::from_selector(1), Some(Choice::Evaluate));
    assert_eq!(Choice::from_selector(2), Some(Choice::Tabulate));
    assert_eq!(Choice::from_selector(3), Some(Choice::Extrema));
    assert_eq!(Choice::from_selector(4), Some(Choice::Solve));
    assert_eq!(Choice::from_selector(5), Some(Choice::Derivative));
    assert_eq!(Choice::from_selector(0), Some(Choice::Exit));
    assert_eq!(Choice::from_selector(6), None);
    assert_eq!(Choice::from_selector(-1), None);
}

#[test]
fn evaluates_and_exits() -> TestResult {
    let out = run_script("1\n1\n0\n")?;

    assert!(out.starts_with("=== Console menu ==="));
    assert!(out.contains("f(1.000000) = 1.07003223"));
    assert!(out.trim_end().ends_with("exiting."));
    Ok(())
}

#[test]
fn reprompts_on_bad_input() -> TestResult {
    let out = run_script("abc\n1\nxyz\n2\n0\n")?;

    assert!(out.contains("invalid input."));
    assert!(out.contains("invalid input, try again: "));
    assert!(out.contains("f(2.000000) = 0.42705684"));
    Ok(())
}

#[test]
fn end_of_input_exits() -> TestResult {
    assert!(run_script("")?.contains("exiting."));
    // input ends in the middle of a prompt
    assert!(run_script("4\n2\n")?.contains("exiting."));
    Ok(())
}

#[test]
fn unknown_selection() -> TestResult {
    let out = run_script("9\n0\n")?;
    assert!(out.contains("unknown selection, try again."));
    Ok(())
}

#[test]
fn tabulate_validates_interval_and_step() -> TestResult {
    let out = run_script("2\n1\n0\n0.5\n2\n0\n1\n0\n0\n")?;
    assert_eq!(out.matches("error: invalid interval or step.").count(), 2);
    Ok(())
}

#[test]
fn tabulates() -> TestResult {
    let out = run_script("2\n-1\n1\n0.5\n0\n")?;
    assert!(out.contains("|    -1.0000 |"));
    assert!(out.contains("|     1.0000 |"));
    Ok(())
}

#[test]
fn table_domain_error_keeps_menu_running() -> TestResult {
    let out = run_script("2\n-1e200\n-1e199\n1e199\n1\n1\n0\n")?;
    assert!(out.contains("| error: f(x) non-finite"));
    assert!(out.contains("f(1.000000) = 1.07003223"));
    assert!(out.trim_end().ends_with("exiting."));
    Ok(())
}

#[test]
fn exit_selection_ignores_remaining_input() -> TestResult {
    let out = run_script("0\n1\n1\n")?;
    assert!(!out.contains("enter x: "));
    assert!(out.trim_end().ends_with("exiting."));
    Ok(())
}

#[test]
fn extrema_option() -> TestResult {
    let out = run_script("3\n0\n5\n0\n")?;
    assert!(out.contains("minimum: f(0.000000) = 0.000000"));
    assert!(out.contains("maximum: f("));

    let out = run_script("3\n5\n0\n0\n")?;
    assert!(out.contains("error: a must be less than b."));
    Ok(())
}

#[test]
fn extrema_option_uses_configured_resolution() -> TestResult {
    let cfg  = ExtremaCfg::new().set_steps(10)?;
    let mut menu = Menu::new(Cursor::new("3\n0\n5\n0\n".as_bytes()), Vec::new()).with_extrema_cfg(cfg);
    menu.run()?;
    let out = String::from_utf8(menu.into_output())?;

    // the 10-step grid peaks at x = 1
    assert!(out.contains("maximum: f(1.000000) = 1.070032"));
    Ok(())
}

#[test]
fn solve_option() -> TestResult {
    let out = run_script("4\n2\n3\n0.3\n0\n")?;
    assert!(out.contains("x ≈ "));
    assert!(!out.contains("warning"));

    let out = run_script("4\n2\n3\n10\n0\n")?;
    assert!(out.contains("warning: not converged"));
    Ok(())
}

#[test]
fn derivative_option() -> TestResult {
    let out = run_script("5\n2\n0\n")?;
    assert!(out.contains("f'(2.000000) ≈ "));
    Ok(())
}
