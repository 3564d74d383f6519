use crate::operation::OperationKind;
use crate::operation::SelectionSet;
use crate::operation::SelectionSetValidator;
use crate::operation::ValidationError;
use crate::render;
use crate::render::RenderError;
use crate::types::TypeRegistry;
use thiserror::Error;

type Result<T> = std::result::Result<T, OperationBuildError>;

/// A validated, top-level query, mutation, or subscription.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Operation {
    pub(super) kind: OperationKind,
    pub(super) selection_set: SelectionSet,
}
impl Operation {
    /// Validate `selection_set` against the type named `root_type_name` and
    /// wrap it in an [`Operation`] of the given kind.
    pub fn build(
        kind: OperationKind,
        registry: &TypeRegistry,
        root_type_name: &str,
        selection_set: SelectionSet,
    ) -> Result<Self> {
        SelectionSetValidator::new(registry)
            .validate(root_type_name, &selection_set)?;
        Ok(Self {
            kind,
            selection_set,
        })
    }

    pub fn mutation(
        registry: &TypeRegistry,
        selection_set: SelectionSet,
    ) -> Result<Self> {
        Self::build_for_root(OperationKind::Mutation, registry, selection_set)
    }

    pub fn query(
        registry: &TypeRegistry,
        selection_set: SelectionSet,
    ) -> Result<Self> {
        Self::build_for_root(OperationKind::Query, registry, selection_set)
    }

    pub fn subscription(
        registry: &TypeRegistry,
        selection_set: SelectionSet,
    ) -> Result<Self> {
        Self::build_for_root(OperationKind::Subscription, registry, selection_set)
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// Render this operation as GraphQL source text.
    ///
    /// An operation with an empty selection set renders as just its keyword
    /// and a trailing space (e.g. `"query "`), which is not a parseable
    /// GraphQL document.
    pub fn to_graphql_string(&self) -> std::result::Result<String, RenderError> {
        render::render_operation(self)
    }

    fn build_for_root(
        kind: OperationKind,
        registry: &TypeRegistry,
        selection_set: SelectionSet,
    ) -> Result<Self> {
        let root_type_name = registry
            .root_type_name(kind)
            .ok_or(OperationBuildError::NoRootType { kind })?;
        Self::build(kind, registry, root_type_name, selection_set)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum OperationBuildError {
    #[error("The schema does not define a root {kind} type")]
    NoRootType {
        kind: OperationKind,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
