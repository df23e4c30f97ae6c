use chrono::{DateTime, Utc};

use super::*;

impl Config {
    /// Read option `path` as `T`.
    ///
    /// # Errors
    /// [`ConfigError::UnknownOption`] if the option was never set, and
    /// [`ConfigError::NotA`] if it holds a value of another type.
    ///
    /// # Examples
    /// ```
    /// # use sectcfg::Config;
    /// let config = Config::from_str("[server]\nhosts = [\"a\", \"b\"]\n")?;
    /// let hosts: Vec<String> = config.get_as("server.hosts")?;
    /// assert_eq!(hosts, ["a", "b"]);
    /// assert!(config.get_as::<i64>("server.hosts").is_err());
    /// # Ok::<(), sectcfg::ConfigError>(())
    /// ```
    pub fn get_as<T: FromValue>(&self, path: &str) -> Result<T, ConfigError> {
        let store = self.read();
        let value = store
            .options
            .get(&helpers::normalize(path))
            .ok_or_else(|| ConfigError::UnknownOption {
                path: path.to_string(),
            })?;
        T::from_value(value).ok_or_else(|| ConfigError::NotA {
            path: path.to_string(),
            expected: T::TYPE,
        })
    }

    /// Like [`Config::get_as`], but any failure yields `fallback`.
    pub fn get_as_or<T: FromValue>(&self, path: &str, fallback: T) -> T {
        self.get_as(path).unwrap_or(fallback)
    }

    pub fn get_bool(&self, path: &str) -> Result<bool, ConfigError> {
        self.get_as(path)
    }

    pub fn get_bool_or(&self, path: &str, fallback: bool) -> bool {
        self.get_as_or(path, fallback)
    }

    pub fn get_int(&self, path: &str) -> Result<i64, ConfigError> {
        self.get_as(path)
    }

    pub fn get_int_or(&self, path: &str, fallback: i64) -> i64 {
        self.get_as_or(path, fallback)
    }

    /// Integers are not promoted: an integer option is not a float.
    pub fn get_float(&self, path: &str) -> Result<f64, ConfigError> {
        self.get_as(path)
    }

    pub fn get_float_or(&self, path: &str, fallback: f64) -> f64 {
        self.get_as_or(path, fallback)
    }

    pub fn get_date(&self, path: &str) -> Result<DateTime<Utc>, ConfigError> {
        self.get_as(path)
    }

    pub fn get_date_or(&self, path: &str, fallback: DateTime<Utc>) -> DateTime<Utc> {
        self.get_as_or(path, fallback)
    }

    pub fn get_string(&self, path: &str) -> Result<String, ConfigError> {
        self.get_as(path)
    }

    pub fn get_string_or(&self, path: &str, fallback: impl Into<String>) -> String {
        self.get_as(path).unwrap_or_else(|_| fallback.into())
    }

    pub fn get_bool_array(&self, path: &str) -> Result<Vec<bool>, ConfigError> {
        self.get_as(path)
    }

    pub fn get_bool_array_or(&self, path: &str, fallback: Vec<bool>) -> Vec<bool> {
        self.get_as_or(path, fallback)
    }

    pub fn get_int_array(&self, path: &str) -> Result<Vec<i64>, ConfigError> {
        self.get_as(path)
    }

    pub fn get_int_array_or(&self, path: &str, fallback: Vec<i64>) -> Vec<i64> {
        self.get_as_or(path, fallback)
    }

    pub fn get_float_array(&self, path: &str) -> Result<Vec<f64>, ConfigError> {
        self.get_as(path)
    }

    pub fn get_float_array_or(&self, path: &str, fallback: Vec<f64>) -> Vec<f64> {
        self.get_as_or(path, fallback)
    }

    pub fn get_date_array(&self, path: &str) -> Result<Vec<DateTime<Utc>>, ConfigError> {
        self.get_as(path)
    }

    pub fn get_date_array_or(
        &self,
        path: &str,
        fallback: Vec<DateTime<Utc>>,
    ) -> Vec<DateTime<Utc>> {
        self.get_as_or(path, fallback)
    }

    pub fn get_string_array(&self, path: &str) -> Result<Vec<String>, ConfigError> {
        self.get_as(path)
    }

    pub fn get_string_array_or(&self, path: &str, fallback: Vec<String>) -> Vec<String> {
        self.get_as_or(path, fallback)
    }
}
