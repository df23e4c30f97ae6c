// Author: Dustin Pilgrim
// License: MIT

//! Typed getters over layered configuration: defaults from a string, an
//! optional override file named on the command line, then each value read
//! with either a strict getter or an `_or` fallback.
//!
//! ```text
//! cargo run --example getters -- debug.conf
//! ```

use std::env;
use std::process;

use sectcfg::{Config, ConfigError};

const DEFAULTS: &str = r#"
version = [1, 0, 0]

[server]
    URL = "www.myurl.com"

[database]
    dbname = "mydb"
    user = "foo"
    password = "bar"
"#;

fn run() -> Result<(), ConfigError> {
    let config = Config::from_str(DEFAULTS)?;

    match env::args().nth(1) {
        Some(path) => {
            println!("DEBUG MODE ({})", path);
            config.load_file(&path)?;
        }
        None => println!("PRODUCTION MODE"),
    }

    let version = config.get_int_array_or("version", vec![0, 0, 1]);

    // Paths are case-insensitive: `URL` was declared upper-case.
    let server = config.get_string_or("server.url", "www.myurl.com");
    let port = config.get_int_or("server.port", 80);

    let dbname = config.get_string_or("database.dbname", "mydb");
    let user = config
        .get_string("database.user")
        .inspect_err(|_| eprintln!("error: {}: database: missing user name", dbname))?;
    let password = config
        .get_string("database.password")
        .inspect_err(|_| eprintln!("error: {}: missing password", dbname))?;

    let version: Vec<String> = version.iter().map(i64::to_string).collect();
    println!("version  = {}", version.join("."));
    println!("server   = '{}'", server);
    println!("port     = {}", port);
    println!("dbname   = '{}'", dbname);
    println!("user     = '{}'", user);
    println!("password = '{}'", password);

    if config.has_option("server.port") {
        println!("port overridden");
    }
    for section in config.sections() {
        let name = if section.is_empty() { "(global)" } else { section.as_str() };
        println!("[{}] {}", name, config.options(&section).join(", "));
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
