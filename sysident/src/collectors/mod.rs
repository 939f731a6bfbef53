pub mod cpu;
pub mod os;
pub mod rtc;

use std::fs;
use std::io::{self, Write};

use tracing::debug;

use crate::error::IdentError;

/// One recognized line prefix: which whitespace-delimited token to pull
/// out of a matching line and the literal text printed around it.
pub(crate) struct ScanField {
    pub prefix: &'static str,
    pub token: usize,
    pub before: &'static str,
    pub after: &'static str,
}

/// Runs the full report in its fixed order. Any open failure aborts the
/// sequence; output already written stays on stdout.
pub fn run_report<W: Write>(out: &mut W) -> Result<(), IdentError> {
    os::report_hostname(out)?;
    os::report_ostype(out)?;
    os::report_osrelease(out)?;
    cpu::report(out)?;
    rtc::report(out)?;
    Ok(())
}

pub(crate) fn read_proc(path: &'static str) -> Result<String, IdentError> {
    debug!(path, "reading");
    fs::read_to_string(path).map_err(|source| IdentError::Open { path, source })
}

pub(crate) fn nth_token(line: &str, index: usize) -> Option<&str> {
    line.split_whitespace().nth(index)
}

/// Scans `content` top to bottom and prints the phrase for the first
/// field whose prefix matches each line. Output order mirrors file
/// order; lines missing the wanted token are skipped.
pub(crate) fn emit_matches<W: Write>(
    out: &mut W,
    content: &str,
    fields: &[ScanField],
) -> io::Result<()> {
    for line in content.lines() {
        let Some(field) = fields.iter().find(|f| line.starts_with(f.prefix)) else {
            continue;
        };
        let Some(token) = nth_token(line, field.token) else {
            continue;
        };
        write!(out, "{}{}{}", field.before, token, field.after)?;
    }
    Ok(())
}
