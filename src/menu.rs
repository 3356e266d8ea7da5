//! Interactive console menu.
//!
//! Reads selections and numbers line by line from any [`BufRead`] and writes
//! prompts and results to any [`Write`], so the loop runs the same against a
//! terminal or a scripted buffer. End of input behaves like selecting `0`.
//!
//! ┌ 1 : f(x) at a point
//! ├ 2 : table on [a, b] with a step
//! ├ 3 : minimum and maximum on [a, b]
//! ├ 4 : x with f(x) ≈ Y on [a, b]
//! ├ 5 : f'(x) at a point
//! └ 0 : exit

use std::io::{self, BufRead, Write};

use crate::analysis::derivative::{derivative_with, DerivativeCfg};
use crate::analysis::extrema::{extrema_with, ExtremaCfg};
use crate::analysis::inverse::{solve_for_with, SolveCfg};
use crate::analysis::table::tabulate;
use crate::function::evaluate;
use crate::render::{self, RenderError};

const MENU: &str = "\
Select an operation:
1 - value of f(x) at a point
2 - table of values on an interval
3 - minimum and maximum on a segment
4 - find x where f(x) ≈ Y
5 - derivative f'(x) at a point
0 - exit";

/// Menu selections.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Choice {
    Evaluate,
    Tabulate,
    Extrema,
    Solve,
    Derivative,
    Exit,
}

impl Choice {
    pub fn from_selector(n: i64) -> Option<Self> {
        match n {
            1 => Some(Choice::Evaluate),
            2 => Some(Choice::Tabulate),
            3 => Some(Choice::Extrema),
            4 => Some(Choice::Solve),
            5 => Some(Choice::Derivative),
            0 => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// Menu loop state: the I/O pair and the analysis configs it runs with.
pub struct Menu<R, W> {
    input:      R,
    out:        W,
    extrema:    ExtremaCfg,
    solve:      SolveCfg,
    derivative: DerivativeCfg,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            extrema:    ExtremaCfg::default(),
            solve:      SolveCfg::default(),
            derivative: DerivativeCfg::default(),
        }
    }

    pub fn with_extrema_cfg(mut self, cfg: ExtremaCfg) -> Self { self.extrema = cfg; self }
    pub fn with_solve_cfg(mut self, cfg: SolveCfg) -> Self { self.solve = cfg; self }
    pub fn with_derivative_cfg(mut self, cfg: DerivativeCfg) -> Self { self.derivative = cfg; self }

    /// Hands back the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs until `0` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "=== Console menu ===")?;
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "{MENU}")?;
            write!(self.out, "> ")?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else { break };
            let choice = match line.trim().parse::<i64>() {
                Ok(n)  => Choice::from_selector(n),
                Err(_) => {
                    writeln!(self.out, "invalid input.")?;
                    continue;
                }
            };

            let keep_going = match choice {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    writeln!(self.out, "unknown selection, try again.")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        writeln!(self.out, "exiting.")?;
        self.out.flush()
    }

    /// Runs one selection. `Ok(false)` ends the loop: exit was chosen or
    /// input ran out mid-prompt.
    fn dispatch(&mut self, choice: Choice) -> io::Result<bool> {
        tracing::debug!(?choice, "menu selection");
        match choice {
            Choice::Evaluate => {
                let Some(x) = self.read_number("enter x: ")? else { return Ok(false) };
                match evaluate(x) {
                    Ok(y)  => writeln!(self.out, "{}", render::render_value(x, y))?,
                    Err(e) => writeln!(self.out, "error: {e}")?,
                }
            }
            Choice::Tabulate => {
                let Some(a)    = self.read_number("enter interval start a: ")? else { return Ok(false) };
                let Some(b)    = self.read_number("enter interval end b: ")? else { return Ok(false) };
                let Some(step) = self.read_number("enter step: ")? else { return Ok(false) };
                if step <= 0.0 || a >= b {
                    writeln!(self.out, "error: invalid interval or step.")?;
                    return Ok(true);
                }
                match tabulate(a, b, step) {
                    // a domain error is already shown as the table's last row
                    Ok(table) => {
                        if let Err(RenderError::Io(e)) = render::write_table(&mut self.out, table) {
                            return Err(e);
                        }
                    }
                    Err(e) => writeln!(self.out, "error: {e}")?,
                }
            }
            Choice::Extrema => {
                let Some(a) = self.read_number("enter segment start a: ")? else { return Ok(false) };
                let Some(b) = self.read_number("enter segment end b: ")? else { return Ok(false) };
                if a >= b {
                    writeln!(self.out, "error: a must be less than b.")?;
                    return Ok(true);
                }
                match extrema_with(a, b, &self.extrema) {
                    Ok(report) => writeln!(self.out, "{}", render::render_extrema(&report))?,
                    Err(e)     => writeln!(self.out, "error: {e}")?,
                }
            }
            Choice::Solve => {
                let Some(a) = self.read_number("enter interval start a: ")? else { return Ok(false) };
                let Some(b) = self.read_number("enter interval end b: ")? else { return Ok(false) };
                let Some(y) = self.read_number("enter value Y: ")? else { return Ok(false) };
                if a >= b {
                    writeln!(self.out, "error: a must be less than b.")?;
                    return Ok(true);
                }
                match solve_for_with(a, b, y, &self.solve) {
                    Ok(report) => writeln!(self.out, "{}", render::render_solve(&report))?,
                    Err(e)     => writeln!(self.out, "error: {e}")?,
                }
            }
            Choice::Derivative => {
                let Some(x) = self.read_number("enter x: ")? else { return Ok(false) };
                match derivative_with(x, &self.derivative) {
                    Ok(d)  => writeln!(self.out, "{}", render::render_derivative(x, d))?,
                    Err(e) => writeln!(self.out, "error: {e}")?,
                }
            }
            Choice::Exit => return Ok(false),
        }
        Ok(true)
    }

    /// Prompts until a line parses as a finite number. `None` on end of input.
    fn read_number(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        loop {
            let Some(line) = self.read_line()? else { return Ok(None) };
            match line.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => return Ok(Some(v)),
                _ => {
                    write!(self.out, "invalid input, try again: ")?;
                    self.out.flush()?;
                }
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
