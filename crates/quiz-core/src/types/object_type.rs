use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::TypeRegistry;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`TypeRegistry`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType {
    pub(super) data: ObjectOrInterfaceTypeData,
    pub(super) interfaces: Vec<NamedGraphQLTypeRef>,
}
impl ObjectType {
    /// Indicates whether this type declares that it implements the interface
    /// named `interface_name`.
    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.interfaces
            .iter()
            .any(|iface_ref| iface_ref.name() == interface_name)
    }

    /// The [`InterfaceType`]s implemented by this [`ObjectType`], in the order
    /// they were declared in the schema.
    pub fn interfaces<'registry>(
        &self,
        registry: &'registry TypeRegistry,
    ) -> Vec<&'registry InterfaceType> {
        self.interfaces
            .iter()
            .filter_map(|iface_ref| iface_ref.deref(registry).ok())
            .filter_map(|type_| type_.as_interface())
            .collect()
    }

    /// The names of all interfaces implemented by this [`ObjectType`].
    ///
    /// This can be useful when the [`TypeRegistry`] is unavailable or
    /// inconvenient to access but the names are all that is needed.
    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_ref| iface_ref.name())
            .collect()
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// The description of this [`ObjectType`] as defined in the schema.
    pub fn description(&self) -> Option<&str> {
        self.data.description()
    }

    /// Look up a single field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.data.field(name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`ObjectType`].
    ///
    /// This returns an [`IndexMap`] so that entries retain the order the
    /// fields were declared in. The implicit `__typename` field is always
    /// first.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.data.fields()
    }

    pub fn name(&self) -> &str {
        self.data.name()
    }
}
