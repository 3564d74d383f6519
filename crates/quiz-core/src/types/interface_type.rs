use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::ObjectType;
use crate::types::TypeRegistry;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`TypeRegistry`].
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType(pub(super) ObjectOrInterfaceTypeData);
impl InterfaceType {
    /// Every [`ObjectType`] in `registry` that implements this interface.
    pub fn implementations<'registry>(
        &self,
        registry: &'registry TypeRegistry,
    ) -> Vec<&'registry ObjectType> {
        registry.types()
            .values()
            .filter_map(|type_| type_.as_object())
            .filter(|obj_type| obj_type.implements_interface(self.name()))
            .collect()
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    /// The description of this [`InterfaceType`] as defined in the schema.
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.0.field(name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`InterfaceType`], in declaration order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}
