use serde_json::Value;
use thiserror::Error;

use crate::notify::NotificationSink;
use crate::options::FormatOptions;

/// Option names that were once supported and are now rejected outright, in
/// the order they are checked.
pub const RETIRED_OPTIONS: [&str; 6] = [
    "multilineLists",
    "newlineBeforeOpenParen",
    "newlineBeforeCloseParen",
    "aliasAs",
    "commaPosition",
    "tabulateAlias",
];

const PARAMS_WARNING: &str = "all parameter values should be strings";

/// The one error kind the validator raises. Message texts are part of the
/// compatibility contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} config is no more supported.")]
    RetiredOption { name: String },
    #[error("expressionWidth config must be positive number. Received {value} instead.")]
    NonPositiveExpressionWidth { value: i64 },
    #[error("Empty regex given in custom paramTypes. That would result in matching infinite amount of parameters.")]
    EmptyCustomRegex,
}

/// Gatekeep an options record before it reaches the formatting engine.
///
/// Checks run in a fixed order and the first fatal violation wins:
/// 1. presence of any retired option name, whatever its value;
/// 2. a non-positive `expressionWidth`;
/// 3. non-string `params` values — non-fatal, emits one warning through
///    `sink` and accepts the record;
/// 4. an empty `regex` in `paramTypes.custom`, which would match unboundedly
///    many placeholder occurrences.
///
/// Never rewrites the record; on success the input is usable as-is.
pub fn validate(options: &FormatOptions, sink: &dyn NotificationSink) -> Result<(), ConfigError> {
    for name in RETIRED_OPTIONS {
        if options.extra.contains_key(name) {
            return Err(ConfigError::RetiredOption {
                name: name.to_string(),
            });
        }
    }

    if let Some(value) = options.expression_width {
        if value <= 0 {
            return Err(ConfigError::NonPositiveExpressionWidth { value });
        }
    }

    if let Some(params) = &options.params {
        if !params.values().all(Value::is_string) {
            sink.warn(PARAMS_WARNING);
        }
    }

    if let Some(param_types) = &options.param_types {
        if let Some(custom) = &param_types.custom {
            if custom.iter().any(|entry| entry.regex.is_empty()) {
                return Err(ConfigError::EmptyCustomRegex);
            }
        }
    }

    Ok(())
}
