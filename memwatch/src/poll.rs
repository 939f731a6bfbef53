use std::io::Write;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::config::PollOptions;
use crate::error::MemError;
use crate::meminfo::{self, MemSnapshot};
use crate::render::{self, Scale};

/// Runs the configured number of polls against /proc/meminfo.
pub fn run<W: Write>(opts: &PollOptions, out: &mut W) -> Result<(), MemError> {
    poll_with(opts, out, |_| {
        meminfo::collect(meminfo::MEMINFO_PATH, opts.include_swap)
    })
}

/// The poll loop itself: header on the first round only, one row per
/// round, sleep between rounds but not after the last. The display
/// scale is latched from the first snapshot's total and reused for the
/// whole run.
fn poll_with<W, F>(opts: &PollOptions, out: &mut W, mut read_snapshot: F) -> Result<(), MemError>
where
    W: Write,
    F: FnMut(u64) -> Result<MemSnapshot, MemError>,
{
    let columns = opts.columns();
    let interval = Duration::from_secs(opts.interval_secs);
    debug!(polls = opts.polls, interval_secs = opts.interval_secs, "polling");

    let mut scale: Option<Scale> = None;
    for round in 0..opts.polls {
        let snapshot = read_snapshot(round)?;
        let scale = *scale.get_or_insert_with(|| Scale::select(snapshot.total(), opts.human));
        if round == 0 {
            render::print_header(out, &snapshot, scale, columns)?;
        }
        render::print_row(out, &snapshot, scale, columns)?;
        out.flush()?;
        if round + 1 < opts.polls {
            thread::sleep(interval);
        }
    }
    Ok(())
}
