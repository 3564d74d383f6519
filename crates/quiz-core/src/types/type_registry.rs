use crate::operation::OperationKind;
use crate::schema_model::SchemaModel;
use crate::types::GraphQLType;
use crate::types::HostType;
use crate::types::SchemaBuildError;
use crate::types::TypeRegistryBuilder;
use indexmap::IndexMap;

/// The complete set of runtime types for a schema, keyed by type name.
///
/// Built once by [`TypeRegistryBuilder`] and read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeRegistry {
    pub(super) mutation_type: Option<String>,
    pub(super) query_type: Option<String>,
    pub(super) subscription_type: Option<String>,
    pub(super) types: IndexMap<String, GraphQLType>,
}
impl TypeRegistry {
    /// Convenience wrapper around [`TypeRegistryBuilder`] that also records
    /// the model's root operation types.
    pub fn from_schema_model(
        schema_model: &SchemaModel,
        custom_scalars: IndexMap<String, HostType>,
    ) -> Result<Self, SchemaBuildError> {
        TypeRegistryBuilder::new()
            .custom_scalars(custom_scalars)
            .build_schema_model(schema_model)
    }

    pub fn get(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.root_type(OperationKind::Mutation)
    }

    pub fn query_type(&self) -> Option<&GraphQLType> {
        self.root_type(OperationKind::Query)
    }

    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.root_type(OperationKind::Subscription)
    }

    /// The root type operations of the given kind select from.
    pub fn root_type(&self, kind: OperationKind) -> Option<&GraphQLType> {
        self.root_type_name(kind).and_then(|name| self.get(name))
    }

    pub fn root_type_name(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Query => self.query_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }

    /// All types in the registry: custom scalars first, then builtin scalars,
    /// interfaces, enums, objects, unions, and input objects.
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }
}
