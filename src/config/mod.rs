// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::io;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

use crate::error::{ConfigError, STRING_SOURCE};
use crate::parser::Parser;
use crate::value::Value;

mod access;
mod conversion;
mod helpers;

pub use conversion::FromValue;
pub(crate) use helpers::option_path;

/// Options keyed by lower-cased full path, plus the set of known sections.
///
/// Both indices keep first-insertion order; the dump relies on it.
#[derive(Debug, Default)]
pub(crate) struct Store {
    pub(crate) options: IndexMap<String, Value>,
    sections: IndexSet<String>,
}

/// A thread-safe configuration store.
///
/// Readers share the lock; every write takes it exclusively for that single
/// write only, so a parse in progress is observable option by option.
#[derive(Debug, Default)]
pub struct Config {
    store: RwLock<Store>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration text into a fresh store.
    ///
    /// # Example
    /// ```
    /// # use sectcfg::Config;
    /// let config = Config::from_str("[server]\nport = 8080\n")?;
    /// assert_eq!(config.get_int("server.port")?, 8080);
    /// # Ok::<(), sectcfg::ConfigError>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config = Self::new();
        config.load_str(content)?;
        Ok(config)
    }

    /// Load a configuration file into a fresh store. A missing file yields an
    /// empty store.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Self::new();
        config.load_file(path)?;
        Ok(config)
    }

    /// Parse `content` on top of whatever the store already holds.
    ///
    /// Errors name the source `:string:`. On failure, options parsed before
    /// the error remain set.
    pub fn load_str(&self, content: &str) -> Result<(), ConfigError> {
        Parser::new(STRING_SOURCE, content).parse(self)
    }

    /// Read and parse a file on top of the current contents.
    ///
    /// A leading `~/` is expanded to the home directory. A file that does not
    /// exist is not an error: it simply contributes nothing. Other I/O
    /// failures are returned as [`ConfigError::Io`].
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = helpers::expand_home(path.as_ref());
        let source_name = path.display().to_string();

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %source_name, "configuration file not found, nothing loaded");
                return Ok(());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: source_name,
                    source,
                });
            }
        };

        debug!(path = %source_name, bytes = content.len(), "loading configuration file");
        Parser::new(source_name, &content).parse(self)
    }

    /// Store `value` under `path`, replacing any previous value whatever its
    /// type. The path is lower-cased and its section registered.
    pub fn set(&self, path: &str, value: impl Into<Value>) {
        let path = helpers::normalize(path);
        let value = value.into();
        trace!(path = %path, value = %value, "set option");

        let mut store = self.write();
        store.sections.insert(helpers::section_of(&path).to_string());
        store.options.insert(path, value);
    }

    /// Case-insensitive lookup. `None` means the option was never set.
    pub fn get(&self, path: &str) -> Option<Value> {
        self.read().options.get(&helpers::normalize(path)).cloned()
    }

    pub fn has_option(&self, path: &str) -> bool {
        self.read().options.contains_key(&helpers::normalize(path))
    }

    /// Whether any option was declared in `section`. The empty name stands
    /// for the global section.
    pub fn is_section(&self, section: &str) -> bool {
        self.read().sections.contains(&helpers::normalize(section))
    }

    /// All section names, sorted. Includes `""` when global options exist.
    pub fn sections(&self) -> Vec<String> {
        let mut sections: Vec<String> = self.read().sections.iter().cloned().collect();
        sections.sort();
        sections
    }

    /// Full paths of the options declared directly in `section`, sorted.
    /// Pass `""` to list global options only.
    pub fn options(&self, section: &str) -> Vec<String> {
        let section = helpers::normalize(section);
        let mut paths: Vec<String> = self
            .read()
            .options
            .keys()
            .filter(|path| helpers::section_of(path) == section)
            .cloned()
            .collect();
        paths.sort();
        paths
    }

    /// Number of stored options.
    pub fn len(&self) -> usize {
        self.read().options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().options.is_empty()
    }

    // The store stays consistent across a panicking writer: each write is a
    // pair of inserts, so a poisoned lock is simply taken over.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests;
