// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::path::Path;

use serde_json::Map;

use crate::config::Config;
use crate::error::ConfigError;

/// Renders the store as `path = value` lines, in the order options were
/// first declared.
///
/// The output is meant for diagnostics; it is not guaranteed to parse back
/// into the same store.
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (path, value) in &self.read().options {
            writeln!(f, "{} = {}", path, value)?;
        }
        Ok(())
    }
}

/// The same text as `config.to_string()`.
pub fn dump(config: &Config) -> String {
    config.to_string()
}

/// Export the store as a pretty-printed JSON object keyed by option path.
///
/// Dates become RFC 3339 strings; arrays become JSON arrays.
///
/// # Examples
/// ```
/// use sectcfg::{Config, export};
///
/// let config = Config::from_str("[server]\nport = 8080\n")?;
/// let json = export::to_json(&config)?;
/// assert!(json.contains("\"server.port\": 8080"));
/// # Ok::<(), sectcfg::ConfigError>(())
/// ```
pub fn to_json(config: &Config) -> Result<String, ConfigError> {
    let store = config.read();
    let mut object = Map::new();
    for (path, value) in &store.options {
        object.insert(path.clone(), serde_json::to_value(value)?);
    }
    Ok(serde_json::to_string_pretty(&serde_json::Value::Object(object))?)
}

/// Load a configuration file and export it straight to JSON.
///
/// # Errors
/// Returns an error if the file cannot be read or does not parse. A missing
/// file exports as an empty object.
pub fn file_to_json<P: AsRef<Path>>(path: P) -> Result<String, ConfigError> {
    let config = Config::from_file(path)?;
    to_json(&config)
}
