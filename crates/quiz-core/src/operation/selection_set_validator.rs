use crate::operation::FieldSelection;
use crate::operation::InlineFragment;
use crate::operation::InvalidSelectionReason;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::ValidationError;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::TypeRegistry;

type Result<T> = std::result::Result<T, ValidationError>;

const TYPENAME_FIELD: &str = "__typename";

/// Checks [`SelectionSet`]s against the types in a [`TypeRegistry`].
///
/// Validation is fail-fast: the first problem found (in selection order,
/// depth-first) is returned.
#[derive(Clone, Copy, Debug)]
pub struct SelectionSetValidator<'registry> {
    registry: &'registry TypeRegistry,
}
impl<'registry> SelectionSetValidator<'registry> {
    pub fn new(registry: &'registry TypeRegistry) -> Self {
        Self { registry }
    }

    /// Validate `selection_set` as a selection made on the type named
    /// `type_name`.
    pub fn validate(
        &self,
        type_name: &str,
        selection_set: &SelectionSet,
    ) -> Result<()> {
        let type_ = self.lookup_type(type_name)?;
        self.validate_on(type_, selection_set)
    }

    pub(super) fn lookup_type(
        &self,
        type_name: &str,
    ) -> Result<&'registry GraphQLType> {
        self.registry.get(type_name).ok_or_else(|| {
            ValidationError::NoSuchType {
                type_name: type_name.to_string(),
            }
        })
    }

    pub(super) fn validate_on(
        &self,
        parent_type: &'registry GraphQLType,
        selection_set: &SelectionSet,
    ) -> Result<()> {
        for selection in selection_set {
            match selection {
                Selection::Field(field_selection) =>
                    self.validate_field(parent_type, field_selection)?,
                Selection::InlineFragment(fragment) =>
                    self.validate_fragment_applies(parent_type, fragment)?,
            }
        }
        Ok(())
    }

    fn validate_field(
        &self,
        parent_type: &'registry GraphQLType,
        field_selection: &FieldSelection,
    ) -> Result<()> {
        tracing::trace!(
            "Validating selection of `{}.{}`",
            parent_type.name(),
            field_selection.name(),
        );

        let field = match parent_type {
            GraphQLType::Interface(_) | GraphQLType::Object(_) => parent_type
                .fields()
                .and_then(|fields| fields.get(field_selection.name()))
                .ok_or_else(|| ValidationError::NoSuchField {
                    field: field_selection.name().to_string(),
                    on: parent_type.name().to_string(),
                })?,

            GraphQLType::Union(_) =>
                return self.validate_union_typename(parent_type, field_selection),

            _ => return Err(ValidationError::InvalidSelection {
                field: Some(field_selection.name().to_string()),
                on: parent_type.name().to_string(),
                reason: InvalidSelectionReason::SelectionOnLeafType {
                    kind: parent_type.type_kind(),
                },
            }),
        };

        self.validate_arguments(parent_type, field, field_selection)?;

        let nested = field_selection.selection_set();
        if nested.is_empty() {
            return Ok(());
        }

        let return_type_name = field.return_type().innermost_type_name();
        let return_type = self.lookup_type(return_type_name)?;
        if !return_type.type_kind().is_composite() {
            return Err(ValidationError::InvalidSelection {
                field: Some(field_selection.name().to_string()),
                on: parent_type.name().to_string(),
                reason: InvalidSelectionReason::SubselectionOnLeafField {
                    field: field_selection.name().to_string(),
                    type_name: return_type_name.to_string(),
                },
            });
        }

        self.validate_on(return_type, nested)
    }

    fn validate_arguments(
        &self,
        parent_type: &GraphQLType,
        field: &Field,
        field_selection: &FieldSelection,
    ) -> Result<()> {
        let parameters = field.parameters();
        if let Some(unknown) = field_selection
            .arguments()
            .keys()
            .find(|arg_name| !parameters.contains_key(arg_name.as_str()))
        {
            return Err(ValidationError::NoSuchArgument {
                argument: unknown.to_string(),
                field: field.name().to_string(),
                on: parent_type.name().to_string(),
            });
        }

        for param in parameters.values() {
            match field_selection.arguments().get(param.name()) {
                None if param.is_required() =>
                    return Err(ValidationError::MissingArgument {
                        argument: param.name().to_string(),
                        field: field.name().to_string(),
                        on: parent_type.name().to_string(),
                    }),

                Some(value)
                    if !param.type_annotation().accepts(self.registry, value) =>
                    return Err(ValidationError::InvalidArgumentType {
                        argument: param.name().to_string(),
                        expected: param.type_annotation().to_graphql_string(),
                        field: field.name().to_string(),
                        on: parent_type.name().to_string(),
                        value: value.clone(),
                    }),

                _ => (),
            }
        }

        Ok(())
    }

    fn validate_fragment_applies(
        &self,
        parent_type: &'registry GraphQLType,
        fragment: &InlineFragment,
    ) -> Result<()> {
        let fragment_type = self.lookup_type(fragment.type_condition())?;
        if !self.fragment_can_apply(parent_type, fragment_type) {
            return Err(ValidationError::InvalidSelection {
                field: None,
                on: parent_type.name().to_string(),
                reason: InvalidSelectionReason::FragmentNotApplicable {
                    fragment_type: fragment_type.name().to_string(),
                },
            });
        }

        // The fragment may have been built against a different registry.
        self.validate_on(fragment_type, fragment.selection_set())
    }

    fn fragment_can_apply(
        &self,
        parent_type: &GraphQLType,
        fragment_type: &GraphQLType,
    ) -> bool {
        if parent_type.name() == fragment_type.name() {
            return true;
        }

        match (parent_type, fragment_type) {
            (GraphQLType::Interface(iface), GraphQLType::Object(obj))
            | (GraphQLType::Object(obj), GraphQLType::Interface(iface)) =>
                obj.implements_interface(iface.name()),

            (GraphQLType::Union(union_type), GraphQLType::Object(obj)) =>
                union_type.has_member(obj.name()),

            (GraphQLType::Union(union_type), GraphQLType::Interface(iface)) =>
                union_type
                    .member_types(self.registry)
                    .into_iter()
                    .filter_map(|member| member.as_object())
                    .any(|obj| obj.implements_interface(iface.name())),

            (GraphQLType::Interface(parent), GraphQLType::Interface(iface)) =>
                parent
                    .implementations(self.registry)
                    .iter()
                    .any(|obj| obj.implements_interface(iface.name())),

            _ => false,
        }
    }

    // Unions declare no fields of their own, but `__typename` can be selected
    // on any composite type.
    fn validate_union_typename(
        &self,
        parent_type: &GraphQLType,
        field_selection: &FieldSelection,
    ) -> Result<()> {
        if field_selection.name() != TYPENAME_FIELD {
            return Err(ValidationError::InvalidSelection {
                field: Some(field_selection.name().to_string()),
                on: parent_type.name().to_string(),
                reason: InvalidSelectionReason::FieldOnUnion,
            });
        }
        if let Some(arg_name) = field_selection.arguments().keys().next() {
            return Err(ValidationError::NoSuchArgument {
                argument: arg_name.to_string(),
                field: TYPENAME_FIELD.to_string(),
                on: parent_type.name().to_string(),
            });
        }
        if !field_selection.selection_set().is_empty() {
            return Err(ValidationError::InvalidSelection {
                field: Some(TYPENAME_FIELD.to_string()),
                on: parent_type.name().to_string(),
                reason: InvalidSelectionReason::SubselectionOnLeafField {
                    field: TYPENAME_FIELD.to_string(),
                    type_name: "String".to_string(),
                },
            });
        }
        Ok(())
    }
}
