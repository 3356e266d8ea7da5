//! tests for the bisection inverse search
use piecewise::analysis::errors::ConfigError;
use piecewise::analysis::inverse::{solve_for, solve_for_with, SolveCfg, SolveError};
use piecewise::analysis::report::Outcome;
use piecewise::function::{evaluate, DomainError};

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Straight bisection loop re-evaluating f(a) every step, no bookkeeping.
fn reference_bisection(mut a: f64, mut b: f64, y: f64) -> Result<f64, DomainError> {
    let mut mid = a;
    for _ in 0..100 {
        mid = (a + b) / 2.0;
        let fm = evaluate(mid)?;
        if (fm - y).abs() < 1e-6 {
            break;
        }
        if (evaluate(a)? - y) * (fm - y) < 0.0 {
            b = mid;
        } else {
            a = mid;
        }
    }
    Ok(mid)
}

#[test]
fn converges_on_bracketed_target() -> TestResult {
    let y = 0.5 * (evaluate(2.0)? + evaluate(3.0)?);
    let res = solve_for(2.0, 3.0, y)?;

    assert_eq!(res.outcome, Outcome::Converged);
    assert!(res.converged());
    assert!(res.bracketed);
    assert!((evaluate(res.x)? - y).abs() < 1e-5);
    assert!(res.residual() < 1e-6);
    assert!((2.0..=3.0).contains(&res.x));
    assert!(res.iterations > 0 && res.iterations <= 100);
    assert_eq!(res.evaluations, res.iterations + 2);
    assert_eq!(res.algorithm_name, "bisection");
    Ok(())
}

#[test]
fn converges_in_series_branch() -> TestResult {
    let res = solve_for(6.0, 7.0, -20.0)?;

    assert_eq!(res.outcome, Outcome::Converged);
    assert!((evaluate(res.x)? + 20.0).abs() < 1e-5);
    Ok(())
}

#[test]
fn converges_in_negative_branch() -> TestResult {
    // f(-2) < 0 < f(-1.5)
    let res = solve_for(-2.0, -1.5, 0.0)?;

    assert_eq!(res.outcome, Outcome::Converged);
    assert!(evaluate(res.x)?.abs() < 1e-5);
    // sin(x²) = 0 at x = -sqrt(π)
    assert!((res.x + std::f64::consts::PI.sqrt()).abs() < 1e-5);
    Ok(())
}

#[test]
fn matches_plain_bisection() -> TestResult {
    for (a, b, y) in [(2.0, 3.0, 0.3), (6.0, 7.0, -20.0), (-2.0, -1.5, 0.1), (0.0, 5.0, 0.9), (2.0, 3.0, 9.0)] {
        let res = solve_for(a, b, y)?;
        assert_eq!(res.x, reference_bisection(a, b, y)?, "[{a}, {b}] Y={y}");
    }
    Ok(())
}

#[test]
fn target_above_range_not_converged() -> TestResult {
    let res = solve_for(2.0, 3.0, 10.0)?;

    assert_eq!(res.outcome, Outcome::NotConverged);
    assert!(!res.converged());
    assert!(!res.bracketed);
    assert_eq!(res.iterations, 100);
    assert!(res.residual() > 1.0);
    Ok(())
}

#[test]
fn target_below_range_not_converged() -> TestResult {
    let res = solve_for(0.5, 1.0, -5.0)?;

    assert_eq!(res.outcome, Outcome::NotConverged);
    assert!(!res.bracketed);
    Ok(())
}

#[test]
fn iteration_cap_reported() -> TestResult {
    let cfg = SolveCfg::new()
        .set_tolerance(1e-15)?
        .set_max_iter(5)?;
    let res = solve_for_with(2.0, 3.0, 0.3, &cfg)?;

    assert_eq!(res.outcome, Outcome::NotConverged);
    assert!(res.bracketed);
    assert_eq!(res.iterations, 5);
    assert!((res.right - res.left - 1.0 / 32.0).abs() < 1e-15);
    Ok(())
}

#[test]
fn loose_tolerance_stops_early() -> TestResult {
    let cfg = SolveCfg::new().set_tolerance(1.0)?;
    let res = solve_for_with(2.0, 3.0, 0.3, &cfg)?;

    assert_eq!(res.outcome, Outcome::Converged);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.x, 2.5);
    Ok(())
}

#[test]
fn defaults() {
    let cfg = SolveCfg::default();
    assert_eq!(cfg.tolerance(), 1e-6);
    assert_eq!(cfg.max_iter(), 100);
}

#[test]
fn rejects_invalid_bounds() {
    let err = solve_for(3.0, 2.0, 0.3).unwrap_err();
    assert!(matches!(err, SolveError::InvalidBounds { a, b } if a == 3.0 && b == 2.0));

    let err = solve_for(f64::NAN, 2.0, 0.3).unwrap_err();
    assert!(matches!(err, SolveError::InvalidBounds { .. }));
}

#[test]
fn domain_error_at_endpoint() {
    let err = solve_for(0.0, 1e300, 0.0).unwrap_err();
    assert!(matches!(err, SolveError::Domain { iteration: 0, source } if source.x() == 1e300));

    let err = solve_for(-1e200, 0.0, 0.0).unwrap_err();
    assert!(matches!(err, SolveError::Domain { iteration: 0, source } if source.x() == -1e200));
}

#[test]
fn rejects_non_finite_target() {
    let err = solve_for(2.0, 3.0, f64::INFINITY).unwrap_err();
    assert!(matches!(err, SolveError::InvalidTarget { .. }));
}

#[test]
fn rejects_invalid_cfg() {
    assert!(matches!(
        SolveCfg::new().set_max_iter(0).unwrap_err(),
        ConfigError::InvalidMaxIter { got: 0 }
    ));
    assert!(matches!(
        SolveCfg::new().set_tolerance(0.0).unwrap_err(),
        ConfigError::InvalidTolerance { .. }
    ));
    assert!(matches!(
        SolveCfg::new().set_tolerance(f64::NAN).unwrap_err(),
        ConfigError::InvalidTolerance { .. }
    ));
}
