use crate::schema_model::EnumDef;
use crate::schema_model::FieldDef;
use crate::schema_model::InputObjectDef;
use crate::schema_model::InterfaceDef;
use crate::schema_model::ObjectDef;
use crate::schema_model::ScalarDef;
use crate::schema_model::SchemaModel;
use crate::schema_model::TypeDef;
use crate::schema_model::TypeRef;
use crate::schema_model::UnionDef;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::HostType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::RuntimeType;
use crate::types::ScalarType;
use crate::types::SchemaBuildError;
use crate::types::TypeRegistry;
use crate::types::UnionType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Names of the scalars every schema gets without declaring a host mapping.
pub const BUILTIN_SCALAR_NAMES: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

#[derive(Default)]
struct DefsByKind<'a> {
    enums: Vec<&'a EnumDef>,
    input_objects: Vec<&'a InputObjectDef>,
    interfaces: Vec<&'a InterfaceDef>,
    objects: Vec<&'a ObjectDef>,
    scalars: Vec<&'a ScalarDef>,
    unions: Vec<&'a UnionDef>,
}
impl<'a> DefsByKind<'a> {
    fn partition(type_defs: &'a [TypeDef]) -> Self {
        let mut defs = Self::default();
        for type_def in type_defs {
            match type_def {
                TypeDef::Enum(def) => defs.enums.push(def),
                TypeDef::InputObject(def) => defs.input_objects.push(def),
                TypeDef::Interface(def) => defs.interfaces.push(def),
                TypeDef::Object(def) => defs.objects.push(def),
                TypeDef::Scalar(def) => defs.scalars.push(def),
                TypeDef::Union(def) => defs.unions.push(def),
            }
        }
        defs
    }
}

/// Turns a set of schema [`TypeDef`]s into a [`TypeRegistry`].
///
/// Object and interface types are built in two passes: first as field-less
/// shells, then (once every type in the schema has a registry entry) their
/// fields are resolved. This is what allows a field to refer to the type it
/// is declared on, or to any sibling type.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistryBuilder {
    custom_scalars: IndexMap<String, HostType>,
    mutation_type: Option<String>,
    query_type: Option<String>,
    subscription_type: Option<String>,
}
impl TypeRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map the custom scalar named `name` onto a [`HostType`].
    ///
    /// A custom scalar that shares its name with a builtin scalar shadows the
    /// builtin.
    pub fn custom_scalar(mut self, name: impl AsRef<str>, host_type: HostType) -> Self {
        self.custom_scalars.insert(name.as_ref().to_string(), host_type);
        self
    }

    /// Add every entry of `custom_scalars` (see
    /// [`TypeRegistryBuilder::custom_scalar()`]).
    pub fn custom_scalars(mut self, custom_scalars: IndexMap<String, HostType>) -> Self {
        self.custom_scalars.extend(custom_scalars);
        self
    }

    /// Build a [`TypeRegistry`] from a bare list of type definitions.
    ///
    /// Root operation types default to the object types named `Query`,
    /// `Mutation`, and `Subscription` when those are defined.
    pub fn build(self, type_defs: &[TypeDef]) -> Result<TypeRegistry> {
        let defs = DefsByKind::partition(type_defs);
        tracing::debug!(
            "Building type registry from {} scalars, {} interfaces, {} enums, \
            {} objects, {} unions, {} input objects.",
            defs.scalars.len(),
            defs.interfaces.len(),
            defs.enums.len(),
            defs.objects.len(),
            defs.unions.len(),
            defs.input_objects.len(),
        );

        self.check_scalars(&defs.scalars)?;

        // Interfaces must exist before objects so objects can refer to them.
        let interfaces: IndexMap<String, GraphQLType> =
            defs.interfaces.iter()
                .map(|def| (
                    def.name.to_owned(),
                    GraphQLType::Interface(Box::new(InterfaceType(
                        ObjectOrInterfaceTypeData::shell(
                            def.name.as_str(),
                            def.description.as_deref(),
                        ),
                    ))),
                ))
                .collect();

        let enums: IndexMap<String, GraphQLType> =
            defs.enums.iter()
                .map(|def| (def.name.to_owned(), Self::enum_type(def)))
                .collect();

        let mut objects = IndexMap::new();
        for def in &defs.objects {
            objects.insert(def.name.to_owned(), Self::object_shell(def, &interfaces)?);
        }

        let mut unions = IndexMap::new();
        for def in &defs.unions {
            unions.insert(def.name.to_owned(), Self::union_type(def, &objects)?);
        }

        let input_objects: IndexMap<String, GraphQLType> =
            defs.input_objects.iter()
                .map(|def| (
                    def.name.to_owned(),
                    GraphQLType::InputObject(Box::new(InputObjectType {
                        description: def.description.to_owned(),
                        name: def.name.to_owned(),
                    })),
                ))
                .collect();

        let custom_scalars = self.custom_scalars.iter()
            .map(|(name, host_type)| {
                let description = defs.scalars.iter()
                    .find(|def| &def.name == name)
                    .and_then(|def| def.description.to_owned());
                (name.to_owned(), GraphQLType::Scalar(Box::new(ScalarType {
                    description,
                    host_type: *host_type,
                    name: name.to_owned(),
                })))
            });

        let builtin_scalars = [
            ("Boolean", GraphQLType::Bool),
            ("Float", GraphQLType::Float),
            ("ID", GraphQLType::ID),
            ("Int", GraphQLType::Int),
            ("String", GraphQLType::String),
        ].into_iter().map(|(name, type_)| (name.to_string(), type_));

        // Earlier layers shadow later ones.
        let mut types = IndexMap::<String, GraphQLType>::new();
        let layers = custom_scalars
            .chain(builtin_scalars)
            .chain(interfaces)
            .chain(enums)
            .chain(objects)
            .chain(unions)
            .chain(input_objects);
        for (name, type_) in layers {
            types.entry(name).or_insert(type_);
        }

        // Second pass: every type now has a registry entry, so field and
        // argument types can be resolved.
        let mut populated_fields = vec![];
        for (type_name, field_defs) in defs.interfaces.iter()
            .map(|def| (def.name.as_str(), &def.fields))
            .chain(defs.objects.iter().map(|def| (def.name.as_str(), &def.fields))) {
            populated_fields.push((
                type_name,
                Self::fields(type_name, field_defs, &types)?,
            ));
        }
        for (type_name, fields) in populated_fields {
            match types.get_mut(type_name) {
                Some(GraphQLType::Interface(iface_type)) => iface_type.0.fields = fields,
                Some(GraphQLType::Object(obj_type)) => obj_type.data.fields = fields,
                _ => tracing::trace!(
                    "`{type_name}` is shadowed by an earlier registry layer; \
                    skipping its fields."
                ),
            }
            tracing::trace!("Populated fields of `{type_name}`.");
        }

        let root_type_name = |explicit: Option<String>, conventional: &str| {
            explicit.or_else(|| {
                types.get(conventional)
                    .and_then(|type_| type_.as_object())
                    .map(|_| conventional.to_string())
            })
        };
        let query_type = root_type_name(self.query_type, "Query");
        let mutation_type = root_type_name(self.mutation_type, "Mutation");
        let subscription_type = root_type_name(self.subscription_type, "Subscription");

        tracing::debug!("Built type registry with {} types.", types.len());

        Ok(TypeRegistry {
            mutation_type,
            query_type,
            subscription_type,
            types,
        })
    }

    /// Build a [`TypeRegistry`] from a [`SchemaModel`], taking its root
    /// operation type names from the model.
    pub fn build_schema_model(mut self, schema_model: &SchemaModel) -> Result<TypeRegistry> {
        self.query_type = schema_model.query_type.to_owned();
        self.mutation_type = schema_model.mutation_type.to_owned();
        self.subscription_type = schema_model.subscription_type.to_owned();
        self.build(&schema_model.types)
    }

    fn check_scalars(&self, scalar_defs: &[&ScalarDef]) -> Result<()> {
        let mut undefined_scalars: Vec<String> =
            scalar_defs.iter()
                .map(|def| def.name.as_str())
                .filter(|name| {
                    !BUILTIN_SCALAR_NAMES.contains(name)
                        && !self.custom_scalars.contains_key(*name)
                })
                .map(str::to_string)
                .collect();
        undefined_scalars.sort();
        undefined_scalars.dedup();

        if !undefined_scalars.is_empty() {
            return Err(SchemaBuildError::UndefinedScalars {
                scalar_names: undefined_scalars,
            });
        }
        Ok(())
    }

    fn enum_type(def: &EnumDef) -> GraphQLType {
        GraphQLType::Enum(Box::new(EnumType {
            description: def.description.to_owned(),
            name: def.name.to_owned(),
            values: def.enum_values.iter()
                .map(|value_def| (value_def.name.to_owned(), EnumValue {
                    deprecation_reason: value_def.deprecation_reason.to_owned(),
                    description: value_def.description.to_owned(),
                    enum_name: def.name.to_owned(),
                    is_deprecated: value_def.is_deprecated,
                    name: value_def.name.to_owned(),
                }))
                .collect(),
        }))
    }

    fn object_shell(
        def: &ObjectDef,
        interfaces: &IndexMap<String, GraphQLType>,
    ) -> Result<GraphQLType> {
        let mut iface_refs = vec![];
        for iface in &def.interfaces {
            if !interfaces.contains_key(&iface.name) {
                return Err(SchemaBuildError::UndefinedTypeName {
                    referenced_by: def.name.to_owned(),
                    type_name: iface.name.to_owned(),
                });
            }
            iface_refs.push(NamedGraphQLTypeRef::new(iface.name.as_str()));
        }

        Ok(GraphQLType::Object(Box::new(ObjectType {
            data: ObjectOrInterfaceTypeData::shell(
                def.name.as_str(),
                def.description.as_deref(),
            ),
            interfaces: iface_refs,
        })))
    }

    fn union_type(
        def: &UnionDef,
        objects: &IndexMap<String, GraphQLType>,
    ) -> Result<GraphQLType> {
        let mut members = IndexMap::new();
        for member in &def.possible_types {
            if !objects.contains_key(&member.name) {
                return Err(SchemaBuildError::InvalidUnionMember {
                    member_name: member.name.to_owned(),
                    union_name: def.name.to_owned(),
                });
            }
            members.insert(
                member.name.to_owned(),
                NamedGraphQLTypeRef::new(member.name.as_str()),
            );
        }

        Ok(GraphQLType::Union(Box::new(UnionType {
            description: def.description.to_owned(),
            members,
            name: def.name.to_owned(),
        })))
    }

    fn fields(
        type_name: &str,
        field_defs: &[FieldDef],
        types: &IndexMap<String, GraphQLType>,
    ) -> Result<IndexMap<String, Field>> {
        let mut fields = IndexMap::from([
            ("__typename".to_string(), Field {
                deprecation_reason: None,
                description: None,
                is_deprecated: false,
                name: "__typename".to_string(),
                parameters: IndexMap::new(),
                parent_type: NamedGraphQLTypeRef::new(type_name),
                return_type: RuntimeType::resolve(
                    &TypeRef::non_null(TypeRef::named("String")),
                    types,
                    type_name,
                )?,
            }),
        ]);

        for field_def in field_defs {
            let field_path = format!("{type_name}.{}", field_def.name);

            let mut parameters = IndexMap::new();
            for arg_def in &field_def.args {
                parameters.insert(arg_def.name.to_owned(), Parameter {
                    description: arg_def.description.to_owned(),
                    name: arg_def.name.to_owned(),
                    type_annotation: RuntimeType::resolve(
                        &arg_def.type_ref,
                        types,
                        format!("{field_path}({}:)", arg_def.name).as_str(),
                    )?,
                });
            }

            fields.insert(field_def.name.to_owned(), Field {
                deprecation_reason: field_def.deprecation_reason.to_owned(),
                description: field_def.description.to_owned(),
                is_deprecated: field_def.is_deprecated,
                name: field_def.name.to_owned(),
                parameters,
                parent_type: NamedGraphQLTypeRef::new(type_name),
                return_type: RuntimeType::resolve(
                    &field_def.type_ref,
                    types,
                    field_path.as_str(),
                )?,
            });
        }

        Ok(fields)
    }
}
