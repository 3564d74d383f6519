use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "Union `{union_name}` lists `{member_name}` as a member, but \
        `{member_name}` is not an object type defined in the schema."
    )]
    InvalidUnionMember {
        member_name: String,
        union_name: String,
    },

    #[error("Undefined scalars: {scalar_names:?}")]
    UndefinedScalars {
        scalar_names: Vec<String>,
    },

    #[error(
        "`{referenced_by}` refers to a type named `{type_name}`, but no such \
        type is defined in the schema."
    )]
    UndefinedTypeName {
        referenced_by: String,
        type_name: String,
    },
}
