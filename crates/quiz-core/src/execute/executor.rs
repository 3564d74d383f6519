use crate::execute::decode_response;
use crate::execute::request_body;
use crate::execute::ExecuteError;
use crate::operation::Operation;
use crate::schema_model::SchemaModel;
use crate::schema_model::INTROSPECTION_QUERY;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ExecuteError>;

/// Sends operations to a single GraphQL endpoint.
///
/// Each call makes exactly one `POST` request. Timeouts, retries, and auth
/// headers are whatever the supplied [`reqwest::Client`] is configured with.
#[derive(Clone, Debug)]
pub struct Executor {
    client: reqwest::Client,
    url: String,
}
impl Executor {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Render `operation` and send it, returning the response's `data`.
    pub async fn execute(&self, operation: &Operation) -> Result<serde_json::Value> {
        let query_text = operation.to_graphql_string()?;
        self.execute_raw(query_text.as_str()).await
    }

    /// Send already-rendered GraphQL text, returning the response's `data`.
    pub async fn execute_raw(&self, query_text: &str) -> Result<serde_json::Value> {
        let body = request_body(query_text)?;
        tracing::debug!(url = %self.url, bytes = body.len(), "Sending GraphQL request");

        let response = self.client
            .post(self.url.as_str())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| self.http_error(err))?;
        let status = response.status();
        let bytes = response.bytes()
            .await
            .map_err(|err| self.http_error(err))?;
        tracing::debug!(%status, bytes = bytes.len(), "Received GraphQL response");

        decode_response(&bytes)
    }

    /// Run the standard introspection query and decode the result.
    pub async fn introspect(&self) -> Result<SchemaModel> {
        let data = self.execute_raw(INTROSPECTION_QUERY).await?;
        Ok(SchemaModel::from_introspection_json(&data)?)
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    fn http_error(&self, err: reqwest::Error) -> ExecuteError {
        ExecuteError::Http {
            url: self.url.clone(),
            err: Arc::new(err),
        }
    }
}
