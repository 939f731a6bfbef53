use std::io::{self, Write};

use super::{nth_token, read_proc};
use crate::error::IdentError;

pub const HOSTNAME_PATH: &str = "/proc/sys/kernel/hostname";
pub const OSTYPE_PATH: &str = "/proc/sys/kernel/ostype";
pub const OSRELEASE_PATH: &str = "/proc/sys/kernel/osrelease";

/// Kernel series, judged from the first three characters of the first
/// osrelease line. Only the two legacy series have a known RTC path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelSeries {
    V2_2,
    V2_3,
    Other,
    Unreadable,
}

pub fn classify_release(content: &str) -> KernelSeries {
    match content.lines().next() {
        None => KernelSeries::Unreadable,
        Some(line) if line.starts_with("2.2") => KernelSeries::V2_2,
        Some(line) if line.starts_with("2.3") => KernelSeries::V2_3,
        Some(_) => KernelSeries::Other,
    }
}

pub(crate) fn kernel_series() -> Result<KernelSeries, IdentError> {
    Ok(classify_release(&read_proc(OSRELEASE_PATH)?))
}

pub fn report_hostname<W: Write>(out: &mut W) -> Result<(), IdentError> {
    let content = read_proc(HOSTNAME_PATH)?;
    emit_hostname(out, &content)?;
    Ok(())
}

pub fn report_ostype<W: Write>(out: &mut W) -> Result<(), IdentError> {
    let content = read_proc(OSTYPE_PATH)?;
    emit_ostype(out, &content)?;
    Ok(())
}

pub fn report_osrelease<W: Write>(out: &mut W) -> Result<(), IdentError> {
    let content = read_proc(OSRELEASE_PATH)?;
    emit_osrelease(out, &content)?;
    Ok(())
}

fn emit_hostname<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    for line in content.lines() {
        if let Some(name) = nth_token(line, 0) {
            writeln!(out, "Processor Information for {name}")?;
        }
    }
    Ok(())
}

// ostype and osrelease print two halves of one line: "OS: <type> version <release>"
fn emit_ostype<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    for line in content.lines() {
        if let Some(ostype) = nth_token(line, 0) {
            write!(out, "OS: {ostype}")?;
        }
    }
    Ok(())
}

fn emit_osrelease<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    for line in content.lines() {
        if let Some(release) = nth_token(line, 0) {
            writeln!(out, " version {release}")?;
        }
    }
    Ok(())
}
