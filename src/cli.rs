use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use crate::analysis::derivative::{derivative_with, DerivativeCfg};
use crate::analysis::extrema::{extrema_with, ExtremaCfg};
use crate::analysis::inverse::{solve_for_with, SolveCfg};
use crate::analysis::table::tabulate;
use crate::function::{evaluate, Branch};
use crate::menu::Menu;
use crate::render;

#[derive(Debug, Parser)]
#[command(
    name = "piecewise",
    about = "Evaluate and analyse the piecewise function f(x)",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct PiecewiseCli {
    /// Global: more log output on stderr (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive menu (default when no subcommand is given)
    Menu {
        /// Grid resolution used by the extrema option
        #[arg(long = "steps", default_value_t = ExtremaCfg::DEFAULT_STEPS)]
        steps: usize,
    },

    /// f(x) at a point
    #[command(allow_negative_numbers = true)]
    Eval {
        #[arg(value_name = "X")]
        x: f64,
    },

    /// Table of f on [A, B]
    ///
    /// Example:
    ///   piecewise table -1 1 0.25
    #[command(allow_negative_numbers = true)]
    Table {
        #[arg(value_name = "A")]
        a: f64,
        #[arg(value_name = "B")]
        b: f64,
        #[arg(value_name = "STEP")]
        step: f64,
    },

    /// Grid minimum and maximum of f on [A, B]
    #[command(allow_negative_numbers = true)]
    Extrema {
        #[arg(value_name = "A")]
        a: f64,
        #[arg(value_name = "B")]
        b: f64,
        /// Number of equal sub-intervals sampled
        #[arg(long = "steps", default_value_t = ExtremaCfg::DEFAULT_STEPS)]
        steps: usize,
    },

    /// Find x in [A, B] with f(x) ≈ Y
    #[command(allow_negative_numbers = true)]
    Solve {
        #[arg(value_name = "A")]
        a: f64,
        #[arg(value_name = "B")]
        b: f64,
        #[arg(value_name = "Y")]
        y: f64,
        /// Stop once |f(x) - Y| is below this
        #[arg(long = "tolerance", default_value_t = SolveCfg::DEFAULT_TOLERANCE)]
        tolerance: f64,
        /// Bisection steps before giving up
        #[arg(long = "max-iter", default_value_t = SolveCfg::DEFAULT_MAX_ITER)]
        max_iter: usize,
    },

    /// Central-difference estimate of f'(x)
    #[command(allow_negative_numbers = true)]
    Derivative {
        #[arg(value_name = "X")]
        x: f64,
        /// Half-width of the difference stencil
        #[arg(long = "step", default_value_t = DerivativeCfg::DEFAULT_STEP)]
        h: f64,
    },
}

impl PiecewiseCli {
    /// Log level implied by the `-v` count.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

/// Runs one command, writing its output to `out`. With no subcommand the
/// interactive menu runs on stdin.
pub fn execute<W: Write>(cmd: Option<Command>, out: &mut W) -> Result<()> {
    match cmd.unwrap_or(Command::Menu { steps: ExtremaCfg::DEFAULT_STEPS }) {
        Command::Menu { steps } => {
            let cfg = ExtremaCfg::new().set_steps(steps)?;
            let stdin = io::stdin();
            let mut menu = Menu::new(stdin.lock(), out).with_extrema_cfg(cfg);
            menu.run().context("menu I/O failed")?;
        }
        Command::Eval { x } => {
            let y = evaluate(x)?;
            tracing::debug!(x, branch = %Branch::of(x), "evaluated");
            writeln!(out, "{}", render::render_value(x, y))?;
        }
        Command::Table { a, b, step } => {
            let table = tabulate(a, b, step)?;
            render::write_table(out, table)?;
        }
        Command::Extrema { a, b, steps } => {
            let cfg = ExtremaCfg::new().set_steps(steps)?;
            let report = extrema_with(a, b, &cfg)?;
            writeln!(out, "{}", render::render_extrema(&report))?;
        }
        Command::Solve { a, b, y, tolerance, max_iter } => {
            let cfg = SolveCfg::new()
                .set_tolerance(tolerance)?
                .set_max_iter(max_iter)?;
            let report = solve_for_with(a, b, y, &cfg)?;
            writeln!(out, "{}", render::render_solve(&report))?;
        }
        Command::Derivative { x, h } => {
            let cfg = DerivativeCfg::new().set_step(h)?;
            let d = derivative_with(x, &cfg)?;
            writeln!(out, "{}", render::render_derivative(x, d))?;
        }
    }
    Ok(())
}
