use crate::types::GraphQLTypeKind;
use crate::Value;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error(
        "`{value:?}` is not a valid value for argument `{argument}` of \
        `{on}.{field}` (expected `{expected}`)"
    )]
    InvalidArgumentType {
        argument: String,
        expected: String,
        field: String,
        on: String,
        value: Value,
    },

    #[error("Invalid selection on `{on}`: {reason}")]
    InvalidSelection {
        field: Option<String>,
        on: String,
        reason: InvalidSelectionReason,
    },

    #[error("Missing required argument `{argument}` for `{on}.{field}`")]
    MissingArgument {
        argument: String,
        field: String,
        on: String,
    },

    #[error("`{on}.{field}` does not accept an argument named `{argument}`")]
    NoSuchArgument {
        argument: String,
        field: String,
        on: String,
    },

    #[error("`{on}` has no field named `{field}`")]
    NoSuchField {
        field: String,
        on: String,
    },

    #[error("No type named `{type_name}` is defined in the schema")]
    NoSuchType {
        type_name: String,
    },
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvalidSelectionReason {
    #[error("inline fragments must contain at least one selection")]
    EmptyFragment,

    #[error("only `__typename` can be selected directly on union types")]
    FieldOnUnion,

    #[error("`... on {fragment_type}` can never apply here")]
    FragmentNotApplicable {
        fragment_type: String,
    },

    #[error("inline fragments cannot target {kind} types")]
    FragmentOnNonObjectType {
        kind: GraphQLTypeKind,
    },

    #[error("{kind} types have no fields to select")]
    SelectionOnLeafType {
        kind: GraphQLTypeKind,
    },

    #[error("field `{field}` has type `{type_name}`, which has no sub-fields")]
    SubselectionOnLeafField {
        field: String,
        type_name: String,
    },
}
