use crate::execute::AsciiFormatter;
use crate::execute::ExecuteError;
use serde::Serialize;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ExecuteError>;

/// Encode `query_text` as a `{"query": ...}` request body in pure ASCII.
pub fn request_body(query_text: &str) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(
        &mut body,
        AsciiFormatter,
    );
    serde_json::json!({ "query": query_text })
        .serialize(&mut serializer)
        .map_err(|err| ExecuteError::Json(Arc::new(err)))?;
    Ok(body)
}

/// Decode a GraphQL response body and extract its `data`.
///
/// A response carrying an `errors` key fails with
/// [`ExecuteError::TransportFailure`] regardless of whether `data` is also
/// present. A response with neither yields [`serde_json::Value::Null`].
pub fn decode_response(bytes: &[u8]) -> Result<serde_json::Value> {
    let mut content: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|err| ExecuteError::Json(Arc::new(err)))?;

    let data = content
        .get_mut("data")
        .map(serde_json::Value::take)
        .unwrap_or_default();
    match content.get_mut("errors") {
        Some(errors) => Err(ExecuteError::TransportFailure {
            data,
            errors: errors.take(),
        }),
        None => Ok(data),
    }
}
