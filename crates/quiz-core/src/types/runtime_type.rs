use crate::named_ref::NamedRef;
use crate::schema_model::TypeRef;
use crate::types::GraphQLType;
use crate::types::SchemaBuildError;
use crate::types::TypeRegistry;
use crate::Value;
use indexmap::IndexMap;

pub type NamedGraphQLTypeRef = NamedRef<TypeRegistry, GraphQLType>;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// The resolved type of a field or argument.
///
/// Unlike a schema [`TypeRef`], nullability is the wrapper here: a type is
/// non-null unless it is wrapped in [`RuntimeType::Optional`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuntimeType {
    Optional(Box<RuntimeType>),
    List(Box<RuntimeType>),
    Named(NamedGraphQLTypeRef),
}
impl RuntimeType {
    /// Indicates whether `value` is an instance of this type.
    ///
    /// `Null` is only an instance of an optional type. A list type takes a
    /// [`Value::List`] whose every item is an instance of the item type.
    pub fn accepts(&self, registry: &TypeRegistry, value: &Value) -> bool {
        match self {
            Self::Optional(inner) =>
                value.is_null() || inner.accepts(registry, value),

            Self::List(inner) => match value {
                Value::List(items) =>
                    items.iter().all(|item| inner.accepts(registry, item)),
                _ => false,
            },

            Self::Named(type_ref) => type_ref.deref(registry)
                .map(|type_| type_.accepts(value))
                .unwrap_or(false),
        }
    }

    /// Strip every `Optional`/`List` wrapper and return the named type
    /// reference at the bottom.
    pub fn innermost_named_type(&self) -> &NamedGraphQLTypeRef {
        match self {
            Self::Optional(inner) | Self::List(inner) =>
                inner.innermost_named_type(),
            Self::Named(type_ref) => type_ref,
        }
    }

    pub fn innermost_type_name(&self) -> &str {
        self.innermost_named_type().name()
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }

    /// Resolve a schema [`TypeRef`] against the (complete) set of types in a
    /// registry under construction. `referenced_by` names the field or
    /// argument being resolved, for error reporting.
    pub(super) fn resolve(
        type_ref: &TypeRef,
        types: &IndexMap<String, GraphQLType>,
        referenced_by: &str,
    ) -> Result<Self> {
        match type_ref {
            TypeRef::NonNull(inner) =>
                Self::resolve_non_null(inner, types, referenced_by),
            _ => Ok(Self::Optional(Box::new(
                Self::resolve_non_null(type_ref, types, referenced_by)?
            ))),
        }
    }

    fn resolve_non_null(
        type_ref: &TypeRef,
        types: &IndexMap<String, GraphQLType>,
        referenced_by: &str,
    ) -> Result<Self> {
        match type_ref {
            // A well-formed schema never nests NON_NULL directly.
            TypeRef::NonNull(inner) =>
                Self::resolve_non_null(inner, types, referenced_by),

            TypeRef::List(inner) => Ok(Self::List(Box::new(
                Self::resolve(inner, types, referenced_by)?
            ))),

            TypeRef::Named(name) => {
                if !types.contains_key(name) {
                    return Err(SchemaBuildError::UndefinedTypeName {
                        referenced_by: referenced_by.to_string(),
                        type_name: name.to_string(),
                    });
                }
                Ok(Self::Named(NamedGraphQLTypeRef::new(name)))
            },
        }
    }

    fn fmt_nullable(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Optional(inner) => inner.fmt_nullable(f),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(type_ref) => f.write_str(type_ref.name()),
        }
    }
}
impl std::fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Optional(inner) => inner.fmt_nullable(f),
            _ => {
                self.fmt_nullable(f)?;
                f.write_str("!")
            },
        }
    }
}
