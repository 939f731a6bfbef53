use crate::meminfo::{BASE_FIELDS, FIELD_COUNT};

/// Options for one run, built once from the command line and read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct PollOptions {
    pub polls: u64,
    pub interval_secs: u64,
    pub human: bool,
    pub include_swap: bool,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            polls: 5,
            interval_secs: 5,
            human: false,
            include_swap: false,
        }
    }
}

impl PollOptions {
    /// Number of visible output columns: 5 base fields, 7 with swap.
    pub fn columns(&self) -> usize {
        if self.include_swap {
            FIELD_COUNT
        } else {
            BASE_FIELDS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_five_polls_every_five_seconds() {
        let opts = PollOptions::default();
        assert_eq!(opts.polls, 5);
        assert_eq!(opts.interval_secs, 5);
        assert!(!opts.human);
        assert!(!opts.include_swap);
        assert_eq!(opts.columns(), 5);
    }

    #[test]
    fn swap_widens_to_seven_columns() {
        let opts = PollOptions {
            include_swap: true,
            ..Default::default()
        };
        assert_eq!(opts.columns(), 7);
    }
}
