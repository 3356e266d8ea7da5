//! Text rendering of analysis results for the menu and the CLI.

use std::io::{self, Write};

use crate::analysis::report::{ExtremaReport, Outcome, SolveReport};
use crate::analysis::table::Table;
use crate::function::DomainError;
use thiserror::Error;

const RULE: &str = "=============================================";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// `f(x) = y`
pub fn render_value(x: f64, y: f64) -> String {
    format!("f({x:.6}) = {y:.8}")
}

/// `f'(x) ≈ d`
pub fn render_derivative(x: f64, d: f64) -> String {
    format!("f'({x:.6}) ≈ {d:.8}")
}

/// Two lines, minimum then maximum.
pub fn render_extrema(report: &ExtremaReport) -> String {
    format!(
        "minimum: f({:.6}) = {:.6}\nmaximum: f({:.6}) = {:.6}",
        report.x_min, report.f_min, report.x_max, report.f_max
    )
}

/// `x ≈ …, f(x) = …`, plus a warning line when the search did not converge.
pub fn render_solve(report: &SolveReport) -> String {
    let mut s = format!("x ≈ {:.6}, f(x) = {:.8}", report.x, report.fx);
    if report.outcome == Outcome::NotConverged {
        let why = if report.bracketed {
            "iteration limit reached"
        } else {
            "f(x) - Y does not change sign on the interval"
        };
        s.push_str(&format!(
            "\nwarning: not converged after {} iterations ({why}); |f(x) - Y| = {:.3e}",
            report.iterations,
            report.residual()
        ));
    }
    s
}

/// Streams a boxed table of `x | f(x)` rows.
///
/// An evaluation error ends the table early: it is written as a final row,
/// the closing rule follows, and the error is returned as
/// [`RenderError::Domain`].
pub fn write_table<W: Write>(out: &mut W, table: Table) -> Result<(), RenderError> {
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "|     x      |         f(x)                 |")?;
    writeln!(out, "{RULE}")?;
    let mut failure = None;
    for row in table {
        match row {
            Ok(s)  => writeln!(out, "| {:>10.4} | {:>25.8}    |", s.x, s.y)?,
            Err(e) => {
                writeln!(out, "| error: {e}")?;
                failure = Some(e);
            }
        }
    }
    writeln!(out, "{RULE}")?;
    match failure {
        Some(e) => Err(e.into()),
        None    => Ok(()),
    }
}
