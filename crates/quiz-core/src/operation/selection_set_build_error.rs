use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SelectionSetBuildError {
    #[error("Arguments can only be given to a field selection, not an inline fragment")]
    ArgumentsOnInlineFragment,

    #[error("Attempted to select sub-fields with an empty selection set")]
    EmptyNestedSelectionSet,

    #[error("Cannot attach arguments or sub-selections to an empty selection set")]
    EmptySelectionSet,

    #[error(
        "Sub-selections can only be attached to a field selection, not an \
        inline fragment"
    )]
    NestedSelectionOnInlineFragment,
}
