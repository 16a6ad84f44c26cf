//! Terminal output formatting with colors
//!
//! Respects `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE` automatically.

use std::{
    fmt::Display,
    io::{
        self,
        Write,
    },
};

use colored::Colorize;

/// Print success status (green checkmark)
pub fn success<W>(out: &mut W, msg: &(impl Display + ?Sized)) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "{} {msg}", "✓".green())
}

/// Print warning (yellow "warning:" prefix)
pub fn warning<W>(out: &mut W, msg: &(impl Display + ?Sized)) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "{}: {msg}", "warning".yellow())
}

/// Print error (red bold "error:" prefix)
pub fn error<W>(out: &mut W, msg: &(impl Display + ?Sized)) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "{}: {msg}", "error".red().bold())
}

/// Print section header (cyan bold)
pub fn header<W>(out: &mut W, msg: &(impl Display + ?Sized)) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "{}", msg.to_string().cyan().bold())
}

/// Print plain output (no color)
pub fn info<W>(out: &mut W, msg: &(impl Display + ?Sized)) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "{msg}")
}

/// Print prompt without newline (cyan)
pub fn prompt<W>(out: &mut W, msg: &(impl Display + ?Sized)) -> io::Result<()>
where
    W: Write,
{
    write!(out, "{} ", msg.to_string().cyan())?;
    out.flush()
}
