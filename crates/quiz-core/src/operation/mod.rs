//! Building, validating, and wrapping selection sets into operations.

mod field_selection;
mod inline_fragment;
#[allow(clippy::module_inception)]
mod operation;
mod operation_kind;
mod selection;
mod selection_set;
mod selection_set_build_error;
mod selection_set_validator;
mod validation_error;

pub use field_selection::FieldArguments;
pub use field_selection::FieldSelection;
pub use inline_fragment::InlineFragment;
pub use operation::Operation;
pub use operation::OperationBuildError;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use selection_set_build_error::SelectionSetBuildError;
pub use selection_set_validator::SelectionSetValidator;
pub use validation_error::InvalidSelectionReason;
pub use validation_error::ValidationError;

#[cfg(test)]
mod tests;
