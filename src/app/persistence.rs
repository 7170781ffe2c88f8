use crate::domain::error::StoreError;
use crate::domain::history::HistoryLog;
use crate::domain::store::KeyValueStore;
use std::path::PathBuf;

pub const DARK_MODE_KEY: &str = "darkMode";
pub const HISTORY_KEY: &str = "queryHistory";

pub fn get_config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("sqlviz");
        path
    })
}

/// Reads and decodes `key`. Absent, unreadable and malformed blobs all come
/// back as `None`; only the last two are worth a warning.
fn load_json<T: serde::de::DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(error = %e, "could not read persisted value");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(source) => {
            let e = StoreError::Malformed {
                key: key.to_string(),
                source,
            };
            tracing::warn!(error = %e, "ignoring persisted value");
            None
        }
    }
}

fn save_json<T: serde::Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    let encoded = match serde_json::to_string(value) {
        Ok(encoded) => encoded,
        Err(e) => {
            tracing::warn!(key, error = %e, "could not encode value for persistence");
            return;
        }
    };
    if let Err(e) = store.set(key, &encoded) {
        tracing::warn!(error = %e, "could not persist value");
    }
}

pub fn load_dark_mode(store: &dyn KeyValueStore) -> bool {
    load_json(store, DARK_MODE_KEY).unwrap_or(false)
}

pub fn save_dark_mode(store: &dyn KeyValueStore, dark_mode: bool) {
    save_json(store, DARK_MODE_KEY, &dark_mode);
}

pub fn load_history(store: &dyn KeyValueStore) -> HistoryLog {
    load_json(store, HISTORY_KEY).unwrap_or_default()
}

pub fn save_history(store: &dyn KeyValueStore, history: &HistoryLog) {
    save_json(store, HISTORY_KEY, history);
}
