/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
///
/// Input fields are not modeled; an input object type only serves as a
/// nominal type that [`InputObjectValue`](crate::InputObjectValue)s are
/// checked against.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(super) description: Option<String>,
    pub(super) name: String,
}
impl InputObjectType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
