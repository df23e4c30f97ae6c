// Author: Dustin Pilgrim
// License: MIT

use std::any::type_name;

use tracing::debug;

use crate::config::{Config, option_path};
use crate::error::ConfigError;

mod field;

pub use field::Field;
use field::Slot;

/// A struct that can be filled from one configuration section.
///
/// The field table is usually generated with [`decodable!`](crate::decodable);
/// it is built once per type and reused by every decode.
pub trait Decode: Sized + 'static {
    fn fields() -> &'static [Field<Self>];
}

impl Config {
    /// Fill `dst` from the options of `section` (`""` for global options).
    ///
    /// Fields without a matching option keep their current value. Fields are
    /// visited in declaration order and decoding stops at the first error;
    /// fields assigned before it keep their new values.
    ///
    /// # Example
    /// ```
    /// use sectcfg::{decodable, Config};
    ///
    /// #[derive(Default)]
    /// struct Database {
    ///     name: String,
    ///     user: String,
    /// }
    ///
    /// decodable!(Database {
    ///     name: String as "dbname",
    ///     user: String,
    /// });
    ///
    /// let config = Config::from_str("[database]\ndbname = \"mydb\"\nuser = \"foo\"\n")?;
    /// let mut db = Database::default();
    /// config.decode("database", &mut db)?;
    /// assert_eq!(db.name, "mydb");
    /// # Ok::<(), sectcfg::ConfigError>(())
    /// ```
    pub fn decode<T: Decode>(&self, section: &str, dst: &mut T) -> Result<(), ConfigError> {
        if !self.is_section(section) {
            return Err(ConfigError::UnknownSection {
                section: section.to_string(),
            });
        }
        debug!(section, ty = type_name::<T>(), "decoding section");
        decode_fields(self, section, dst)
    }
}

fn decode_fields<T: Decode>(config: &Config, section: &str, dst: &mut T) -> Result<(), ConfigError> {
    for field in T::fields() {
        match &field.slot {
            Slot::Embedded(embed) => {
                embed(dst, config, section)?;
                continue;
            }
            Slot::EmbeddedPointer => {
                return Err(ConfigError::EmbeddedPointer {
                    field: field.name.to_string(),
                });
            }
            _ => {}
        }

        let path = option_path(section, field.option_name());
        let Some(value) = config.get(&path) else {
            continue;
        };

        match &field.slot {
            Slot::Assign { expected, assign } => {
                let actual = value.value_type();
                if actual != *expected {
                    return Err(ConfigError::TypeMismatch {
                        path,
                        expected: *expected,
                        actual,
                    });
                }
                assign(dst, &value);
            }
            Slot::ReadOnly => {
                return Err(ConfigError::UnwritableField {
                    field: field.name.to_string(),
                });
            }
            Slot::Unsupported(type_name) => {
                return Err(ConfigError::UnsupportedFieldType {
                    path,
                    field: field.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }
            Slot::Embedded(_) | Slot::EmbeddedPointer => {}
        }
    }
    Ok(())
}

/// Implements [`Decode`] for a struct from a list of its fields.
///
/// Each entry is one of:
/// - `name: Type`: option `name`, of a supported type
/// - `name: Type as "option"`: read from `option` instead
/// - `embed name: Type`: struct embedded by value, decoded from the same section
/// - `embed_box name: Type`: struct embedded behind a `Box`; always an error
/// - `private name: Type`: not settable; an error if the option is present
/// - `opaque name: Type`: a type no option can hold; an error if present
///
/// ```
/// use sectcfg::decodable;
///
/// #[derive(Default)]
/// struct Server {
///     url: String,
///     port: i64,
/// }
///
/// decodable!(Server { url: String, port: i64 });
/// ```
#[macro_export]
macro_rules! decodable {
    (@field $ty:ty, $fields:ident;) => {};

    (@field $ty:ty, $fields:ident; embed $name:ident : $fty:ty $(, $($rest:tt)*)?) => {
        $fields.push($crate::Field::<$ty>::embedded::<$fty>(
            ::std::stringify!($name),
            |dst| &mut dst.$name,
        ));
        $crate::decodable!(@field $ty, $fields; $($($rest)*)?);
    };

    (@field $ty:ty, $fields:ident; embed_box $name:ident : $fty:ty $(, $($rest:tt)*)?) => {
        $fields.push($crate::Field::<$ty>::embedded_pointer(::std::stringify!($name)));
        $crate::decodable!(@field $ty, $fields; $($($rest)*)?);
    };

    (@field $ty:ty, $fields:ident; private $name:ident : $fty:ty $(, $($rest:tt)*)?) => {
        $fields.push($crate::Field::<$ty>::read_only(::std::stringify!($name)));
        $crate::decodable!(@field $ty, $fields; $($($rest)*)?);
    };

    (@field $ty:ty, $fields:ident; opaque $name:ident : $fty:ty $(, $($rest:tt)*)?) => {
        $fields.push($crate::Field::<$ty>::unsupported(
            ::std::stringify!($name),
            ::std::stringify!($fty),
        ));
        $crate::decodable!(@field $ty, $fields; $($($rest)*)?);
    };

    (@field $ty:ty, $fields:ident; $name:ident : $fty:ty as $option:literal $(, $($rest:tt)*)?) => {
        $fields.push(
            $crate::Field::<$ty>::new::<$fty, _>(::std::stringify!($name), |dst, v| dst.$name = v)
                .rename($option),
        );
        $crate::decodable!(@field $ty, $fields; $($($rest)*)?);
    };

    (@field $ty:ty, $fields:ident; $name:ident : $fty:ty $(, $($rest:tt)*)?) => {
        $fields.push($crate::Field::<$ty>::new::<$fty, _>(
            ::std::stringify!($name),
            |dst, v| dst.$name = v,
        ));
        $crate::decodable!(@field $ty, $fields; $($($rest)*)?);
    };

    ($ty:ty { $($body:tt)* }) => {
        impl $crate::Decode for $ty {
            fn fields() -> &'static [$crate::Field<Self>] {
                static FIELDS: $crate::__private::Lazy<::std::vec::Vec<$crate::Field<$ty>>> =
                    $crate::__private::Lazy::new(|| {
                        let mut fields = ::std::vec::Vec::new();
                        $crate::decodable!(@field $ty, fields; $($body)*);
                        fields
                    });
                FIELDS.as_slice()
            }
        }
    };
}
