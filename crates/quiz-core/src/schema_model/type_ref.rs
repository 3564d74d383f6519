use thiserror::Error;

/// A schema-level reference to a type, as found on fields and arguments.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "RawTypeRef")]
pub enum TypeRef {
    NonNull(Box<TypeRef>),
    List(Box<TypeRef>),
    Named(String),
}
impl TypeRef {
    pub fn named(name: impl AsRef<str>) -> Self {
        Self::Named(name.as_ref().to_string())
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// The name at the bottom of any `NON_NULL`/`LIST` wrappers.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::NonNull(inner) | Self::List(inner) => inner.innermost_name(),
            Self::Named(name) => name.as_str(),
        }
    }
}

// The shape of a type reference in introspection JSON:
// `{"kind": "NON_NULL", "name": null, "ofType": {...}}`.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTypeRef {
    kind: String,
    name: Option<String>,
    of_type: Option<Box<RawTypeRef>>,
}

impl std::convert::TryFrom<RawTypeRef> for TypeRef {
    type Error = TypeRefDecodeError;

    fn try_from(raw: RawTypeRef) -> Result<Self, Self::Error> {
        match raw.kind.as_str() {
            "NON_NULL" | "LIST" => {
                let of_type = raw.of_type.ok_or_else(
                    || TypeRefDecodeError::MissingOfType { kind: raw.kind.to_owned() }
                )?;
                let inner = Box::new(TypeRef::try_from(*of_type)?);
                Ok(if raw.kind == "NON_NULL" {
                    Self::NonNull(inner)
                } else {
                    Self::List(inner)
                })
            },

            _ => raw.name
                .map(Self::Named)
                .ok_or(TypeRefDecodeError::MissingName { kind: raw.kind }),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeRefDecodeError {
    #[error("A `{kind}` type reference has no `ofType`")]
    MissingOfType {
        kind: String,
    },

    #[error("A `{kind}` type reference has no `name`")]
    MissingName {
        kind: String,
    },
}
