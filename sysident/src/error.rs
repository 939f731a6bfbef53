use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentError {
    #[error("{path}: {source}")]
    Open {
        path: &'static str,
        source: io::Error,
    },
    /// The running kernel release is neither a 2.2 nor a 2.3 series,
    /// so no RTC path can be selected.
    #[error("unknown")]
    UnknownKernelSeries,
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl IdentError {
    pub fn exit_code(&self) -> i32 {
        match self {
            IdentError::UnknownKernelSeries => 2,
            _ => 1,
        }
    }
}
