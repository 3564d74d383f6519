use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::HostType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeRegistry;
use crate::types::UnionType;
use crate::Value;
use indexmap::IndexMap;

/// One entry of a [`TypeRegistry`].
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(Box<EnumType>),
    Float,
    ID,
    InputObject(Box<InputObjectType>),
    Int,
    Interface(Box<InterfaceType>),
    Object(Box<ObjectType>),
    Scalar(Box<ScalarType>),
    String,
    Union(Box<UnionType>),
}
impl GraphQLType {
    /// Indicates whether `value` is an instance of this type, when this type
    /// is used as (the innermost type of) an argument's type.
    ///
    /// Object, interface, and union types never accept argument values.
    pub fn accepts(&self, value: &Value) -> bool {
        if let Some(host_type) = self.host_type() {
            return host_type.accepts(value);
        }

        match (self, value) {
            (Self::Enum(enum_type), Value::Enum(member)) =>
                member.enum_name() == enum_type.name()
                    && enum_type.values().contains_key(member.value()),

            (Self::InputObject(input_type), Value::InputObject(input_value)) =>
                input_value.type_name() == input_type.name(),

            _ => false,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// The description of this type as given by the schema. Builtin scalars
    /// have no description.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Bool
            | Self::Float
            | Self::ID
            | Self::Int
            | Self::String
                => None,
            Self::Enum(t) => t.description(),
            Self::InputObject(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Scalar(t) => t.description(),
            Self::Union(t) => t.description(),
        }
    }

    /// The fields selectable on this type, if it is an object or interface
    /// type.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            Self::Interface(t) => Some(t.fields()),
            Self::Object(t) => Some(t.fields()),
            _ => None,
        }
    }

    /// The [`HostType`] of this type's values if it is a (builtin or custom)
    /// scalar.
    pub fn host_type(&self) -> Option<HostType> {
        match self {
            Self::Bool => Some(HostType::Boolean),
            Self::Float => Some(HostType::Float),
            Self::ID => Some(HostType::ID),
            Self::Int => Some(HostType::Int),
            Self::String => Some(HostType::String),
            Self::Scalar(t) => Some(t.host_type()),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum(t) => t.name(),
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject(t) => t.name(),
            Self::Int => "Int",
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::String => "String",
            Self::Union(t) => t.name(),
        }
    }

    pub fn type_kind(&self) -> GraphQLTypeKind {
        self.into()
    }
}
impl DerefByName for GraphQLType {
    type Source = TypeRegistry;

    fn deref_name<'a>(
        registry: &'a TypeRegistry,
        name: &str,
    ) -> Result<&'a GraphQLType, DerefByNameError> {
        registry.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string())
        )
    }
}
