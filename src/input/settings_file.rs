use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tracing::warn;

use crate::input::{StoreError, open_maybe_gz};
use crate::model::settings::Settings;

// Only an unreadable file is an error; bad content yields defaults.
pub fn load_settings(path: &Path) -> Result<Settings, StoreError> {
    let mut reader = open_maybe_gz(path)?;
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value = match serde_json::from_slice::<Value>(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "settings file is not valid JSON; using defaults");
            Value::Null
        }
    };
    Ok(Settings::from_value(&value))
}
