use crate::schema_model::TypeRef;
use serde::Deserialize;
use serde::Deserializer;

/// One type definition from a schema, tagged by its introspection `kind`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeDef {
    Scalar(ScalarDef),
    Object(ObjectDef),
    Interface(InterfaceDef),
    Union(UnionDef),
    Enum(EnumDef),
    InputObject(InputObjectDef),
}
impl TypeDef {
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(def) => def.name.as_str(),
            Self::Object(def) => def.name.as_str(),
            Self::Interface(def) => def.name.as_str(),
            Self::Union(def) => def.name.as_str(),
            Self::Enum(def) => def.name.as_str(),
            Self::InputObject(def) => def.name.as_str(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ScalarDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ObjectDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fields: Vec<FieldDef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub interfaces: Vec<NamedTypeDef>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InterfaceDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fields: Vec<FieldDef>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub possible_types: Vec<NamedTypeDef>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub enum_values: Vec<EnumValueDef>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InputObjectDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A field declared on an object or interface type.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub args: Vec<InputValueDef>,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

/// An argument declared on a field.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InputValueDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValueDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

/// A by-name mention of another type (e.g. an implemented interface or a
/// union member).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NamedTypeDef {
    pub name: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
