use crate::schema_model::NamedTypeDef;
use crate::schema_model::TypeDef;
use serde::Deserialize;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaModelError>;

/// The full set of type definitions that make up a schema, plus the names of
/// its root operation types.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaModel {
    pub types: Vec<TypeDef>,
    pub query_type: Option<String>,
    pub mutation_type: Option<String>,
    pub subscription_type: Option<String>,
}
impl SchemaModel {
    pub fn new(types: Vec<TypeDef>) -> Self {
        Self {
            types,
            ..Default::default()
        }
    }

    pub fn with_query_type(mut self, name: impl AsRef<str>) -> Self {
        self.query_type = Some(name.as_ref().to_string());
        self
    }

    pub fn with_mutation_type(mut self, name: impl AsRef<str>) -> Self {
        self.mutation_type = Some(name.as_ref().to_string());
        self
    }

    pub fn with_subscription_type(mut self, name: impl AsRef<str>) -> Self {
        self.subscription_type = Some(name.as_ref().to_string());
        self
    }

    /// Decode the result of running
    /// [`INTROSPECTION_QUERY`](crate::schema_model::INTROSPECTION_QUERY).
    ///
    /// Accepts either the `data` payload (`{"__schema": ...}`) or a full
    /// response body (`{"data": {"__schema": ...}}`).
    pub fn from_introspection_json(json: &serde_json::Value) -> Result<Self> {
        let payload = json.get("data").unwrap_or(json);
        let schema_json = payload.get("__schema")
            .ok_or(SchemaModelError::MissingSchemaKey)?;
        let raw = RawSchema::deserialize(schema_json)
            .map_err(|err| SchemaModelError::Decode(Arc::new(err)))?;

        tracing::debug!(
            "Decoded introspection result with {} type definitions.",
            raw.types.len(),
        );

        Ok(Self {
            types: raw.types,
            query_type: raw.query_type.map(|t| t.name),
            mutation_type: raw.mutation_type.map(|t| t.name),
            subscription_type: raw.subscription_type.map(|t| t.name),
        })
    }

    /// Read a JSON file containing an introspection result from disk.
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = std::fs::read_to_string(file_path)
            .map_err(|err| SchemaModelError::FileReadError {
                file_path: file_path.to_path_buf(),
                err: Arc::new(err),
            })?;
        Self::from_json_str(content.as_str())
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(content)
            .map_err(|err| SchemaModelError::Decode(Arc::new(err)))?;
        Self::from_introspection_json(&json)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSchema {
    types: Vec<TypeDef>,
    #[serde(default)]
    query_type: Option<NamedTypeDef>,
    #[serde(default)]
    mutation_type: Option<NamedTypeDef>,
    #[serde(default)]
    subscription_type: Option<NamedTypeDef>,
}

#[derive(Clone, Debug, Error)]
pub enum SchemaModelError {
    #[error("Failed to decode introspection JSON: {0}")]
    Decode(Arc<serde_json::Error>),

    #[error("Failure while trying to read `{}`: {err}", file_path.display())]
    FileReadError {
        file_path: PathBuf,
        err: Arc<std::io::Error>,
    },

    #[error("Introspection JSON has no `__schema` key")]
    MissingSchemaKey,
}
