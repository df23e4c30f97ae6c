// Author: Dustin Pilgrim
// License: MIT

//! A small sectioned configuration language.
//!
//! ```text
//! foo = "bar"
//! [values]
//!     integer = 12
//!     date = 2013-10-25T16:22:00Z
//! [arrays]
//!     integers = [12, 34]
//! ```
//!
//! Text is parsed into a thread-safe [`Config`] store keyed by
//! case-insensitive `section.option` paths. Values are read back through
//! typed getters or decoded into structs described with [`decodable!`].

pub mod config;
pub mod decode;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod value;

pub use config::{Config, FromValue};
pub use decode::{Decode, Field};
pub use error::{ConfigError, STRING_SOURCE};
pub use value::{Kind, Value, ValueType};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
