use crate::Value;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("{kind} values cannot be rendered as arguments (got `{value:?}`)")]
    UnsupportedArgumentType {
        kind: &'static str,
        value: Value,
    },
}
