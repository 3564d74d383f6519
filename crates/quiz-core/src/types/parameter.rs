use crate::types::RuntimeType;

/// An argument declared on a [`Field`](crate::types::Field).
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) type_annotation: RuntimeType,
}
impl Parameter {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// A parameter must be given a value in every selection of its field
    /// unless its type is optional.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.is_optional()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &RuntimeType {
        &self.type_annotation
    }
}
