// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use std::sync::Arc;
use std::thread;

use chrono::{TimeZone, Utc};

use crate::value::{Kind, ValueType};

const CONTENTS: &str = r#"
# Global options.
boolean = true

[values]
    boolean = false
    integer = 12
    fp = 3.1415
    date = 2013-10-25T16:22:00Z
    string = "Hello World!"

[arrays]
    booleans = [true, false]
    integers = [12, 34]
    fps = [3.1415, 5.1413]
    dates = [2013-10-25T16:22:00Z, 2012-10-25T16:22:00Z]
    strings = ["Hello", "World"]

[w]
    string = "w"
    date = 1979-05-27T07:32:00Z
"#;

fn sample() -> Config {
    Config::from_str(CONTENTS).expect("Failed to parse config")
}

#[test]
fn test_typed_getters() {
    let config = sample();
    let date = Utc.with_ymd_and_hms(2013, 10, 25, 16, 22, 0).unwrap();
    let older = Utc.with_ymd_and_hms(2012, 10, 25, 16, 22, 0).unwrap();

    assert!(config.get_bool("boolean").unwrap());
    assert!(!config.get_bool("values.boolean").unwrap());
    assert_eq!(config.get_int("values.integer").unwrap(), 12);
    assert_eq!(config.get_float("values.fp").unwrap(), 3.1415);
    assert_eq!(config.get_date("values.date").unwrap(), date);
    assert_eq!(config.get_string("values.string").unwrap(), "Hello World!");

    assert_eq!(config.get_bool_array("arrays.booleans").unwrap(), vec![true, false]);
    assert_eq!(config.get_int_array("arrays.integers").unwrap(), vec![12, 34]);
    assert_eq!(config.get_float_array("arrays.fps").unwrap(), vec![3.1415, 5.1413]);
    assert_eq!(config.get_date_array("arrays.dates").unwrap(), vec![date, older]);
    assert_eq!(config.get_string_array("arrays.strings").unwrap(), vec!["Hello", "World"]);
}

#[test]
fn test_getter_errors() {
    let config = sample();

    let err = config.get_int("values.missing").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownOption { ref path } if path == "values.missing"));
    assert_eq!(err.to_string(), "'values.missing': unknown option");

    let err = config.get_int("values.fp").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::NotA { expected, .. } if expected == ValueType::scalar(Kind::Int)
    ));
    assert_eq!(err.to_string(), "'values.fp': not an integer");

    // No numeric promotion on access.
    let err = config.get_float("values.integer").unwrap_err();
    assert_eq!(err.to_string(), "'values.integer': not a floating-point number");

    let err = config.get_int_array("values.integer").unwrap_err();
    assert_eq!(err.to_string(), "'values.integer': not an array of integers");

    let err = config.get_bool_array("arrays.strings").unwrap_err();
    assert_eq!(err.to_string(), "'arrays.strings': not an array of booleans");
}

#[test]
fn test_default_getters() {
    let config = sample();
    let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();

    // Present with the right type: stored value wins.
    assert_eq!(config.get_int_or("values.integer", 99), 12);
    assert_eq!(config.get_string_or("values.string", "nope"), "Hello World!");

    // Absent or mismatched: fallback.
    assert_eq!(config.get_int_or("values.nope", 99), 99);
    assert!(config.get_bool_or("values.integer", true));
    assert_eq!(config.get_float_or("values.integer", 1.5), 1.5);
    assert_eq!(config.get_date_or("values.string", epoch), epoch);
    assert_eq!(config.get_string_or("values.fp", "fallback"), "fallback");
    assert_eq!(config.get_bool_array_or("nope", vec![true]), vec![true]);
    assert_eq!(config.get_int_array_or("version", vec![0, 0, 1]), vec![0, 0, 1]);
    assert_eq!(config.get_float_array_or("arrays.integers", vec![]), Vec::<f64>::new());
    assert_eq!(config.get_date_array_or("arrays.dates", vec![]).len(), 2);
    assert_eq!(config.get_string_array_or("values.string", vec!["x".into()]), vec!["x"]);
}

#[test]
fn test_generic_getter() {
    let config = sample();
    let fps: Vec<f64> = config.get_as("arrays.fps").unwrap();
    assert_eq!(fps, vec![3.1415, 5.1413]);
    assert_eq!(config.get_as_or::<i64>("values.fp", -1), -1);
}

#[test]
fn test_case_insensitive_access() {
    let config = sample();
    assert!(config.has_option("values.boolean"));
    assert!(config.has_option("VALUES.BOOLean"));
    assert_eq!(config.get_int("Values.Integer").unwrap(), 12);
    assert!(config.is_section("ARRAYS"));
    assert!(!config.is_section("nope"));
}

#[test]
fn test_sections_and_options() {
    let config = sample();
    assert_eq!(config.sections(), vec!["", "arrays", "values", "w"]);
    assert_eq!(config.options("W"), vec!["w.date", "w.string"]);
    assert_eq!(config.options(""), vec!["boolean"]);
    assert!(config.options("missing").is_empty());
    assert_eq!(config.len(), 13);
}

#[test]
fn test_empty_store() {
    let config = Config::new();
    assert!(config.is_empty());
    assert_eq!(config.len(), 0);
    assert!(config.sections().is_empty());
    assert!(config.options("").is_empty());
    assert!(!config.is_section(""));
    assert_eq!(config.get("anything"), None);
    assert!(matches!(
        config.get_string("anything"),
        Err(ConfigError::UnknownOption { .. })
    ));
}

#[test]
fn test_set_overwrites_any_type() {
    let config = Config::new();
    config.set("A.b", 1i64);
    config.set("a.B", "x");
    assert_eq!(config.len(), 1);
    assert_eq!(config.get("a.b"), Some(Value::String("x".into())));
    assert_eq!(config.sections(), vec!["a"]);
}

#[test]
fn test_set_accepts_native_values() {
    let config = Config::new();
    config.set("flags", vec![true, false]);
    config.set("ratio", 0.5);
    config.set("name", String::from("svc"));
    assert_eq!(config.get_bool_array("flags").unwrap(), vec![true, false]);
    assert_eq!(config.get_float("ratio").unwrap(), 0.5);
    assert_eq!(config.get_string("name").unwrap(), "svc");
    assert!(config.is_section(""));
}

#[test]
fn test_layered_loading() {
    let config = Config::new();
    config.load_str("version = [1, 0, 0]\n[server]\nurl = \"a\"\n").unwrap();
    config.load_str("[server]\nurl = \"b\"\nport = 8080\n").unwrap();

    assert_eq!(config.get_string("server.url").unwrap(), "b");
    assert_eq!(config.get_int("server.port").unwrap(), 8080);
    assert_eq!(config.get_int_array("version").unwrap(), vec![1, 0, 0]);
    assert_eq!(config.len(), 3);
}

#[test]
fn test_string_source_name() {
    let err = Config::from_str("a = ").unwrap_err();
    assert_eq!(err.to_string(), ":string::1:5: unexpected end-of-file");
}

#[test]
fn test_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.conf");
    std::fs::write(&path, "[server]\nport = 8080\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.get_int("server.port").unwrap(), 8080);
}

#[test]
fn test_missing_file_is_empty_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::from_file(dir.path().join("absent.conf")).unwrap();
    assert!(config.is_empty());
}

#[test]
fn test_unreadable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path()).unwrap_err();
    match err {
        ConfigError::Io { path, .. } => assert_eq!(path, dir.path().display().to_string()),
        other => panic!("expected an I/O error, got {:?}", other),
    }
}

#[test]
fn test_file_errors_name_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.conf");
    std::fs::write(&path, "[a]\n[b]\nx = 1\n").unwrap();

    let err = Config::from_file(&path).unwrap_err();
    let expected = format!("{}:1:3: empty section a", path.display());
    assert_eq!(err.to_string(), expected);
}

#[test]
fn test_override_file_layers_on_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("debug.conf");
    std::fs::write(&path, "[server]\nport = 9090\n").unwrap();

    let config = Config::from_str("[server]\nurl = \"x\"\nport = 80\n").unwrap();
    config.load_file(&path).unwrap();
    config.load_file(dir.path().join("missing.conf")).unwrap();

    assert_eq!(config.get_int("server.port").unwrap(), 9090);
    assert_eq!(config.get_string("server.url").unwrap(), "x");
}

#[test]
fn test_concurrent_readers_and_writer() {
    let config = Arc::new(sample());
    let writer = {
        let config = Arc::clone(&config);
        thread::spawn(move || {
            for i in 0..100 {
                config.set(&format!("extra.k{}", i), i as i64);
            }
        })
    };
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let config = Arc::clone(&config);
            thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(config.get_int("values.integer").unwrap(), 12);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(config.options("extra").len(), 100);
}
