use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::notify::NotificationSink;
use crate::options::FormatOptions;
use crate::validate::{validate, ConfigError};

/// Anything that can go wrong while loading a standalone config file:
/// unreadable or non-UTF-8 bytes, malformed JSON, or a record the validator
/// rejects.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Read, parse and validate a standalone JSON config file, propagating
/// whichever step fails.
pub fn read_config_file(
    path: &Path,
    sink: &dyn NotificationSink,
) -> Result<FormatOptions, ConfigFileError> {
    let text = fs::read_to_string(path)?;
    let options: FormatOptions = serde_json::from_str(&text)?;
    validate(&options, sink)?;
    Ok(options)
}

/// Host-facing load: any failure is reported through `sink` and swallowed.
///
/// `None` means "no usable config file"; callers fall back to the
/// settings-derived configuration rather than treating it as a hard failure.
pub fn load_config_file(path: &Path, sink: &dyn NotificationSink) -> Option<FormatOptions> {
    match read_config_file(path, sink) {
        Ok(options) => {
            debug!("Loaded format config from {}", path.display());
            Some(options)
        }
        Err(e) => {
            sink.error(&format!(
                "Unable to read config file from path {}:\n{e}",
                path.display()
            ));
            None
        }
    }
}
