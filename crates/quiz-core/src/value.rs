use indexmap::IndexMap;
use std::hash::Hash;
use std::hash::Hasher;

/// A host-side argument value that can be attached to a field selection.
///
/// Which GraphQL types a given variant is accepted for is decided by the
/// validator (see [`crate::types::RuntimeType::accepts()`]); which variants
/// can be written out as GraphQL text is decided by
/// [`crate::render::argument_to_graphql()`].
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    ID(String),
    Enum(EnumMember),
    List(Vec<Value>),
    InputObject(InputObjectValue),
}
impl Value {
    /// A short, human-readable name for the kind of this value.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "Boolean",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::String(_) => "String",
            Self::ID(_) => "ID",
            Self::Enum(_) => "Enum",
            Self::List(_) => "List",
            Self::InputObject(_) => "InputObject",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            // Bitwise, so that equality stays reflexive for NaN.
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::ID(a), Self::ID(b)) => a == b,
            (Self::Enum(a), Self::Enum(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::InputObject(a), Self::InputObject(b)) => a == b,
            _ => false,
        }
    }
}
impl Eq for Value {}
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => (),
            Self::Boolean(b) => b.hash(state),
            Self::Int(i) => i.hash(state),
            Self::Float(f) => f.to_bits().hash(state),
            Self::String(s) | Self::ID(s) => s.hash(state),
            Self::Enum(member) => member.hash(state),
            Self::List(items) => items.hash(state),
            Self::InputObject(obj) => obj.hash(state),
        }
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl std::convert::From<EnumMember> for Value {
    fn from(value: EnumMember) -> Self {
        Self::Enum(value)
    }
}
impl std::convert::From<InputObjectValue> for Value {
    fn from(value: InputObjectValue) -> Self {
        Self::InputObject(value)
    }
}
impl<T: Into<Value>> std::convert::From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
impl<T: Into<Value>> std::convert::From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

/// A member of some [`EnumType`](crate::types::EnumType), usable as an
/// argument value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumMember {
    pub(crate) enum_name: String,
    pub(crate) value: String,
}
impl EnumMember {
    pub fn new(enum_name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        Self {
            enum_name: enum_name.as_ref().to_string(),
            value: value.as_ref().to_string(),
        }
    }

    /// The name of the enum type this member belongs to.
    pub fn enum_name(&self) -> &str {
        self.enum_name.as_str()
    }

    /// The declared name of this member (which is also how it is written in
    /// GraphQL text).
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

/// An instance of some [`InputObjectType`](crate::types::InputObjectType).
///
/// Input object fields are not modeled by the type registry, so only the type
/// name takes part in validation.
#[derive(Clone, Debug)]
pub struct InputObjectValue {
    pub(crate) type_name: String,
    pub(crate) fields: IndexMap<String, Value>,
}
impl InputObjectValue {
    pub fn new(type_name: impl AsRef<str>) -> Self {
        Self {
            type_name: type_name.as_ref().to_string(),
            fields: IndexMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl AsRef<str>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.as_ref().to_string(), value.into());
        self
    }

    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
impl PartialEq for InputObjectValue {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
            && self.fields.iter().eq(other.fields.iter())
    }
}
impl Eq for InputObjectValue {}
impl Hash for InputObjectValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_name.hash(state);
        for entry in &self.fields {
            entry.hash(state);
        }
    }
}
