//! Configuration plumbing for a SQL formatting engine embedded in an editor.
//!
//! Translates host settings (key/value lookups plus ambient indentation
//! preferences) and optional standalone JSON config files into one validated
//! [`FormatOptions`] record. The formatting engine itself is an external
//! collaborator: it receives the record and the source text, this crate only
//! decides what the record contains and whether it is acceptable.

mod assemble;
mod loader;
mod notify;
mod options;
mod settings;
mod validate;

pub use assemble::{assemble, assemble_validated, resolve_indentation, AUTO_DETECT_DIALECT};
pub use loader::{load_config_file, read_config_file, ConfigFileError};
pub use notify::{LogSink, NotificationSink};
pub use options::{
    CustomParamType, FormatOptions, IndentationConfig, ParamTypesConfig, ParamsConfig,
};
pub use settings::{EditorIndentation, JsonSettings, SettingsSource};
pub use validate::{validate, ConfigError, RETIRED_OPTIONS};
