use std::fs;

use tracing::debug;

use crate::error::MemError;

pub const MEMINFO_PATH: &str = "/proc/meminfo";

pub const FIELD_COUNT: usize = 7;
pub const BASE_FIELDS: usize = 5;

struct FieldSpec {
    prefix: &'static str,
    slot: usize,
}

/// Recognized /proc/meminfo prefixes, checked in this order per line.
/// The swap entries match on the bare key, without the colon.
const FIELDS: [FieldSpec; FIELD_COUNT] = [
    FieldSpec { prefix: "MemTotal:", slot: 0 },
    FieldSpec { prefix: "MemFree:", slot: 1 },
    FieldSpec { prefix: "MemShared:", slot: 2 },
    FieldSpec { prefix: "Buffers:", slot: 3 },
    FieldSpec { prefix: "Cached:", slot: 4 },
    FieldSpec { prefix: "SwapTotal", slot: 5 },
    FieldSpec { prefix: "SwapFree", slot: 6 },
];

/// One poll's worth of values, in kB as reported by the kernel. Fields
/// absent from the input stay zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemSnapshot {
    pub values: [u64; FIELD_COUNT],
}

impl MemSnapshot {
    pub fn total(&self) -> u64 {
        self.values[0]
    }
}

pub fn collect(path: &str, include_swap: bool) -> Result<MemSnapshot, MemError> {
    debug!(path, "reading meminfo");
    let content = fs::read_to_string(path).map_err(|source| MemError::Open {
        path: path.to_string(),
        source,
    })?;
    Ok(parse(&content, include_swap))
}

pub fn parse(content: &str, include_swap: bool) -> MemSnapshot {
    let mut snapshot = MemSnapshot::default();
    for line in content.lines() {
        let Some(spec) = FIELDS.iter().find(|f| line.starts_with(f.prefix)) else {
            continue;
        };
        if spec.slot >= BASE_FIELDS && !include_swap {
            continue;
        }
        if let Some(value) = parse_kb_value(&line[spec.prefix.len()..]) {
            snapshot.values[spec.slot] = value;
        }
    }
    snapshot
}

fn parse_kb_value(rest: &str) -> Option<u64> {
    rest.trim_start_matches(':')
        .split_whitespace()
        .next()?
        .parse()
        .ok()
}
