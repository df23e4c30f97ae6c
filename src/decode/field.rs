use std::fmt;

use super::*;
use crate::config::FromValue;
use crate::value::{Value, ValueType};

type Assign<T> = Box<dyn Fn(&mut T, &Value) + Send + Sync>;
type Embed<T> = Box<dyn Fn(&mut T, &Config, &str) -> Result<(), ConfigError> + Send + Sync>;

/// Describes one field of a decodable struct: its name, the option it reads
/// and how a value reaches it.
pub struct Field<T> {
    pub(crate) name: &'static str,
    pub(crate) rename: Option<&'static str>,
    pub(crate) slot: Slot<T>,
}

pub(crate) enum Slot<T> {
    /// Writable field of one of the supported types.
    Assign { expected: ValueType, assign: Assign<T> },
    /// Private field; decoding fails if the store holds a value for it.
    ReadOnly,
    /// Struct embedded by value; decoded against the same section.
    Embedded(Embed<T>),
    /// Struct embedded behind a pointer; never decodable.
    EmbeddedPointer,
    /// Field whose type cannot hold a configuration value.
    Unsupported(&'static str),
}

impl<T: 'static> Field<T> {
    /// A field of type `V`, written through `set`.
    pub fn new<V, F>(name: &'static str, set: F) -> Self
    where
        V: FromValue + 'static,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        let assign = move |dst: &mut T, value: &Value| {
            if let Some(v) = V::from_value(value) {
                set(dst, v);
            }
        };
        Self::with_slot(
            name,
            Slot::Assign {
                expected: V::TYPE,
                assign: Box::new(assign),
            },
        )
    }

    /// Read the field from `option` instead of from its own name.
    pub fn rename(mut self, option: &'static str) -> Self {
        self.rename = Some(option);
        self
    }

    pub fn read_only(name: &'static str) -> Self {
        Self::with_slot(name, Slot::ReadOnly)
    }

    /// An embedded struct, reached through `project`. Its fields are looked
    /// up in the section being decoded, as if they belonged to `T`.
    pub fn embedded<E: Decode>(name: &'static str, project: fn(&mut T) -> &mut E) -> Self {
        let embed = move |dst: &mut T, config: &Config, section: &str| {
            decode_fields(config, section, project(dst))
        };
        Self::with_slot(name, Slot::Embedded(Box::new(embed)))
    }

    pub fn embedded_pointer(name: &'static str) -> Self {
        Self::with_slot(name, Slot::EmbeddedPointer)
    }

    pub fn unsupported(name: &'static str, type_name: &'static str) -> Self {
        Self::with_slot(name, Slot::Unsupported(type_name))
    }

    fn with_slot(name: &'static str, slot: Slot<T>) -> Self {
        Field {
            name,
            rename: None,
            slot,
        }
    }
}

impl<T> Field<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name of the option this field reads.
    pub fn option_name(&self) -> &'static str {
        self.rename.unwrap_or(self.name)
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = match &self.slot {
            Slot::Assign { expected, .. } => expected.to_string(),
            Slot::ReadOnly => "read-only".to_string(),
            Slot::Embedded(_) => "embedded".to_string(),
            Slot::EmbeddedPointer => "embedded pointer".to_string(),
            Slot::Unsupported(type_name) => format!("unsupported {}", type_name),
        };
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("option", &self.option_name())
            .field("slot", &slot)
            .finish()
    }
}
