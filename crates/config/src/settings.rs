use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Key/value lookup over the host's formatter settings.
///
/// Every lookup is independently optional: absence is a normal outcome, not
/// an error. Implementations are expected to hand back whatever the host
/// stored under the key, untyped.
pub trait SettingsSource {
    fn get(&self, key: &str) -> Option<Value>;
}

/// Ambient editor indentation preferences, independent of this crate's own
/// settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorIndentation {
    pub tab_size: u32,
    pub insert_spaces: bool,
}

/// Settings backed by a JSON object, as handed over by an editor host after
/// a configuration round-trip.
#[derive(Debug, Clone, Default)]
pub struct JsonSettings {
    entries: Map<String, Value>,
}

impl JsonSettings {
    pub const fn new(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

impl From<Map<String, Value>> for JsonSettings {
    fn from(entries: Map<String, Value>) -> Self {
        Self::new(entries)
    }
}

impl SettingsSource for JsonSettings {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }
}

/// Look up `key` and deserialize it into `T`. A value of the wrong shape is
/// treated the same as an absent one; the engine owns defaulting either way.
pub(crate) fn lookup<T: DeserializeOwned>(settings: &dyn SettingsSource, key: &str) -> Option<T> {
    let value = settings.get(key)?;
    match serde_json::from_value(value) {
        Ok(typed) => Some(typed),
        Err(e) => {
            tracing::debug!("Ignoring setting {key} with unexpected shape: {e}");
            None
        }
    }
}
