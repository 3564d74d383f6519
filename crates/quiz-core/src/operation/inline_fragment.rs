use crate::operation::InvalidSelectionReason;
use crate::operation::SelectionSet;
use crate::operation::SelectionSetValidator;
use crate::operation::ValidationError;
use crate::types::GraphQLType;
use crate::types::TypeRegistry;

/// A `... on TypeName { ... }` selection.
///
/// Its contents are validated against the target type when it is created,
/// and again (along with where it is placed) whenever the enclosing
/// [`SelectionSet`] is validated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InlineFragment {
    pub(super) selection_set: SelectionSet,
    pub(super) type_condition: String,
}
impl InlineFragment {
    pub fn new(
        registry: &TypeRegistry,
        type_name: impl AsRef<str>,
        selection_set: SelectionSet,
    ) -> Result<Self, ValidationError> {
        let type_name = type_name.as_ref();
        let validator = SelectionSetValidator::new(registry);
        let target_type = validator.lookup_type(type_name)?;

        match target_type {
            GraphQLType::Interface(_) | GraphQLType::Object(_) => (),
            _ => return Err(ValidationError::InvalidSelection {
                field: None,
                on: type_name.to_string(),
                reason: InvalidSelectionReason::FragmentOnNonObjectType {
                    kind: target_type.type_kind(),
                },
            }),
        }

        if selection_set.is_empty() {
            return Err(ValidationError::InvalidSelection {
                field: None,
                on: type_name.to_string(),
                reason: InvalidSelectionReason::EmptyFragment,
            });
        }

        validator.validate_on(target_type, &selection_set)?;

        Ok(Self {
            selection_set,
            type_condition: type_name.to_string(),
        })
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// The name of the type this fragment applies to.
    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
