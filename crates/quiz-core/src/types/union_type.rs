use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypeRegistry;
use indexmap::IndexMap;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`TypeRegistry`].
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(super) description: Option<String>,
    pub(super) members: IndexMap<String, NamedGraphQLTypeRef>,
    pub(super) name: String,
}
impl UnionType {
    /// The description of this [`UnionType`] as defined in the schema.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn has_member(&self, type_name: &str) -> bool {
        self.members.contains_key(type_name)
    }

    /// An ordered list of the names of each object type defined as a member
    /// of this union.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    /// An ordered list of the [`GraphQLType`]s defined as members of this
    /// union.
    pub fn member_types<'registry>(
        &self,
        registry: &'registry TypeRegistry,
    ) -> Vec<&'registry GraphQLType> {
        self.members.values()
            .filter_map(|type_ref| type_ref.deref(registry).ok())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
