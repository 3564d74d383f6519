use crate::types::DeprecationState;
use crate::types::NamedGraphQLTypeRef;
use crate::types::Parameter;
use crate::types::RuntimeType;
use indexmap::IndexMap;

/// Represents a field defined on an
/// [`ObjectType`](crate::types::ObjectType) or
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(super) deprecation_reason: Option<String>,
    pub(super) description: Option<String>,
    pub(super) is_deprecated: bool,
    pub(super) name: String,
    pub(super) parameters: IndexMap<String, Parameter>,
    pub(super) parent_type: NamedGraphQLTypeRef,
    pub(super) return_type: RuntimeType,
}
impl Field {
    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        DeprecationState::new(self.is_deprecated, self.deprecation_reason.as_deref())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The arguments declared for this field, in the order they were declared
    /// in the schema.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    /// A reference to the object or interface type this field is defined on.
    pub fn parent_type(&self) -> &NamedGraphQLTypeRef {
        &self.parent_type
    }

    pub fn return_type(&self) -> &RuntimeType {
        &self.return_type
    }
}
