//! A plain description of a GraphQL schema, as returned by an introspection
//! query. This is the input to
//! [`TypeRegistryBuilder`](crate::types::TypeRegistryBuilder).

mod introspection_query;
#[allow(clippy::module_inception)]
mod schema_model;
mod type_def;
mod type_ref;

pub use introspection_query::INTROSPECTION_QUERY;
pub use schema_model::SchemaModel;
pub use schema_model::SchemaModelError;
pub use type_def::EnumDef;
pub use type_def::EnumValueDef;
pub use type_def::FieldDef;
pub use type_def::InputObjectDef;
pub use type_def::InputValueDef;
pub use type_def::InterfaceDef;
pub use type_def::NamedTypeDef;
pub use type_def::ObjectDef;
pub use type_def::ScalarDef;
pub use type_def::TypeDef;
pub use type_def::UnionDef;
pub use type_ref::TypeRef;
pub use type_ref::TypeRefDecodeError;
