use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, Field>,
    pub(super) name: String,
}
impl ObjectOrInterfaceTypeData {
    // Fields are populated in a second pass once every type is known.
    pub(super) fn shell(name: &str, description: Option<&str>) -> Self {
        Self {
            description: description.map(str::to_string),
            fields: IndexMap::new(),
            name: name.to_string(),
        }
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
