use crate::types::DeprecationState;
use crate::EnumMember;
use indexmap::IndexMap;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`TypeRegistry`](crate::types::TypeRegistry).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Produce an [`EnumMember`] argument value for the value named `name`,
    /// if this enum defines one.
    pub fn member(&self, name: &str) -> Option<EnumMember> {
        self.values.get(name).map(|value| value.to_member())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The values of this enum, in the order they were declared in the
    /// schema.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }
}

/// One declared value of an [`EnumType`].
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(super) deprecation_reason: Option<String>,
    pub(super) description: Option<String>,
    pub(super) enum_name: String,
    pub(super) is_deprecated: bool,
    pub(super) name: String,
}
impl EnumValue {
    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        DeprecationState::new(self.is_deprecated, self.deprecation_reason.as_deref())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn to_member(&self) -> EnumMember {
        EnumMember::new(self.enum_name.as_str(), self.name.as_str())
    }
}
