//! Runtime representations of the types declared in a schema, and the
//! [`TypeRegistryBuilder`] that produces them from a
//! [`SchemaModel`](crate::schema_model::SchemaModel).

mod deprecation_state;
mod enum_type;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod host_type;
mod input_object_type;
mod interface_type;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_type;
mod parameter;
mod runtime_type;
mod scalar_type;
mod schema_build_error;
mod type_registry;
mod type_registry_builder;
mod union_type;

pub use deprecation_state::DeprecationState;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use host_type::HostType;
pub use host_type::ParseHostTypeError;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub(crate) use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
pub use object_type::ObjectType;
pub use parameter::Parameter;
pub use runtime_type::NamedGraphQLTypeRef;
pub use runtime_type::RuntimeType;
pub use scalar_type::ScalarType;
pub use schema_build_error::SchemaBuildError;
pub use type_registry::TypeRegistry;
pub use type_registry_builder::BUILTIN_SCALAR_NAMES;
pub use type_registry_builder::TypeRegistryBuilder;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
