use crate::Value;
use thiserror::Error;

/// The host-side representation a scalar's values take.
///
/// The five builtin scalars each have their own [`HostType`]; a custom scalar
/// (e.g. `DateTime`) must be mapped onto one of these when building a
/// [`TypeRegistry`](crate::types::TypeRegistry).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostType {
    Boolean,
    Float,
    ID,
    Int,
    String,
}
impl HostType {
    /// Indicates whether `value` is an instance of this host type.
    ///
    /// `Float` also takes `Int` values, and `ID` also takes `String` and `Int`
    /// values, matching GraphQL's input coercion rules for those scalars.
    pub fn accepts(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::Boolean, Value::Boolean(_))
            | (Self::Float, Value::Float(_) | Value::Int(_))
            | (Self::ID, Value::ID(_) | Value::String(_) | Value::Int(_))
            | (Self::Int, Value::Int(_))
            | (Self::String, Value::String(_))
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::String => "String",
        }
    }
}
impl std::str::FromStr for HostType {
    type Err = ParseHostTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Boolean" | "bool" => Ok(Self::Boolean),
            "Float" | "float" => Ok(Self::Float),
            "ID" | "id" => Ok(Self::ID),
            "Int" | "int" => Ok(Self::Int),
            "String" | "string" => Ok(Self::String),
            other => Err(ParseHostTypeError(other.to_string())),
        }
    }
}
impl std::fmt::Display for HostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error(
    "`{0}` is not a host type (expected one of Boolean, Float, ID, Int, or \
    String)"
)]
pub struct ParseHostTypeError(String);
