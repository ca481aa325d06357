//! Rendering of the program output: the fixed banner followed by one line per
//! arithmetic helper.

use std::io::Write;

use anyhow::Context;

use crate::functions::{add, subtract};

/// Lines printed before the results
pub const BANNER: [&str; 2] = [
    "This program tests the availability of cargo and rustc.",
    "If you can see this message, both cargo and rustc are working!",
];

/// The operands fed to the arithmetic helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub lhs: i32,
    pub rhs: i32,
}

impl Default for Report {
    fn default() -> Self {
        Self { lhs: 10, rhs: 5 }
    }
}

impl Report {
    /// `Testing add function: <lhs> + <rhs> = <sum>`
    pub fn add_line(&self) -> String {
        let Self { lhs, rhs } = *self;
        format!("Testing add function: {lhs} + {rhs} = {}", add(lhs, rhs))
    }

    /// `Testing subtract function: <lhs> - <rhs> = <difference>`
    pub fn subtract_line(&self) -> String {
        let Self { lhs, rhs } = *self;
        format!(
            "Testing subtract function: {lhs} - {rhs} = {}",
            subtract(lhs, rhs)
        )
    }

    /// Write the banner, a blank separator and both result lines, then flush
    pub fn write_to<W: Write>(&self, mut out: W) -> anyhow::Result<()> {
        log::debug!("writing report for {self:?}");
        for line in BANNER {
            writeln!(out, "{line}").context("failed to write banner")?;
        }
        writeln!(out).context("failed to write banner")?;
        writeln!(out, "{}", self.add_line()).context("failed to write add result")?;
        writeln!(out, "{}", self.subtract_line()).context("failed to write subtract result")?;
        out.flush().context("failed to flush output")?;
        log::trace!("report written");
        Ok(())
    }
}

pub fn error_message(message: impl std::fmt::Display) {
    eprintln!("\x1b[1;31m[toolchain-probe]\x1b[0m {message}");
}
