// Author: Dustin Pilgrim
// License: MIT

//! Layered configuration: built-in defaults, optionally overridden by a file
//! named on the command line, then decoded into plain structs.
//!
//! ```text
//! cargo run --example decode -- debug.conf
//! ```

use std::env;
use std::process;

use sectcfg::{Config, ConfigError, decodable};

const DEFAULTS: &str = r#"
version = [1, 0, 0]

[server]
    url = "www.myurl.com"

[database]
    dbname = "mydb"
    user = "foo"
    password = "bar"
"#;

#[derive(Debug)]
struct Server {
    url: String,
    port: i64,
}

decodable!(Server { url: String, port: i64 });

#[derive(Debug, Default)]
struct Database {
    name: String,
    user: String,
    password: String,
}

decodable!(Database {
    name: String as "dbname",
    user: String,
    password: String,
});

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

    let mut server = Server {
        url: String::new(),
        port: 80,
    };
    config.decode("server", &mut server)?;

    let mut db = Database::default();
    config.decode("database", &mut db)?;

    let version: Vec<String> = version.iter().map(i64::to_string).collect();
    println!("version    = {}", version.join("."));
    println!("server     = '{}'", server.url);
    println!("port       = {}", server.port);
    println!("dbname     = '{}'", db.name);
    println!("user       = '{}'", db.user);
    println!("password   = '{}'", db.password);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
