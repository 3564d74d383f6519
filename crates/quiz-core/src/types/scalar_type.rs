use crate::types::HostType;

/// A custom scalar type, mapped onto a [`HostType`] by the caller of
/// [`TypeRegistryBuilder`](crate::types::TypeRegistryBuilder).
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(super) description: Option<String>,
    pub(super) host_type: HostType,
    pub(super) name: String,
}
impl ScalarType {
    /// The description of this [`ScalarType`] as defined in the schema.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The [`HostType`] that values of this scalar are represented as.
    pub fn host_type(&self) -> HostType {
        self.host_type
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
