use std::io::{self, Write};

use crate::meminfo::{MemSnapshot, FIELD_COUNT};

pub const HEADER_FIELDS: [&str; FIELD_COUNT] =
    ["total", "free", "shared", "buffer", "cached", "swap", "sfree"];

/// Display scale for one run: every printed value is divided by
/// `divisor`, and `unit` names the result in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub divisor: u64,
    pub unit: &'static str,
}

impl Scale {
    /// Picks the divisor/unit bracket for a run from the total-memory
    /// value, in kB. The two MB brackets are distinct on purpose; do
    /// not merge them.
    pub fn select(total_kb: u64, human: bool) -> Scale {
        if !human {
            return Scale { divisor: 1, unit: "kB" };
        }
        if total_kb <= 999 {
            Scale { divisor: 1, unit: "kB" }
        } else if total_kb <= 999_999 {
            Scale { divisor: 1_000, unit: "MB" }
        } else if total_kb <= 99_999_999 {
            // second MB bracket
            Scale { divisor: 1_000, unit: "MB" }
        } else if total_kb <= 999_999_999 {
            Scale { divisor: 1_000_000, unit: "GB" }
        } else {
            Scale { divisor: 1_000_000_000, unit: "TB" }
        }
    }
}

/// Column width for the current print, from the already-scaled total.
/// Recomputed every row so growing values widen the columns instead of
/// colliding.
pub fn column_width(scaled_total: u64) -> usize {
    if scaled_total <= 100_000 {
        8
    } else if scaled_total <= 100_000_000 {
        11
    } else {
        14
    }
}

pub fn print_header<W: Write>(
    out: &mut W,
    snapshot: &MemSnapshot,
    scale: Scale,
    columns: usize,
) -> io::Result<()> {
    writeln!(out, "Memory Usage in: {}", scale.unit)?;
    let width = column_width(snapshot.total() / scale.divisor);
    for name in &HEADER_FIELDS[..columns] {
        write!(out, "{name:<width$}")?;
    }
    writeln!(out)
}

pub fn print_row<W: Write>(
    out: &mut W,
    snapshot: &MemSnapshot,
    scale: Scale,
    columns: usize,
) -> io::Result<()> {
    let width = column_width(snapshot.total() / scale.divisor);
    for value in &snapshot.values[..columns] {
        let scaled = value / scale.divisor;
        write!(out, "{scaled:<width$}")?;
    }
    writeln!(out)
}
