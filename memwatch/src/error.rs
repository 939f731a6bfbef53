use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemError {
    #[error("could not open file {path}: {source}")]
    Open { path: String, source: io::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_failure_names_the_file() {
        let err = MemError::Open {
            path: "/proc/meminfo".into(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().starts_with("could not open file /proc/meminfo: "));
    }
}
