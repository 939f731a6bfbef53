pub mod collectors;
pub mod error;
pub mod logging;
