//! Sending rendered operations to a GraphQL server over HTTP.

mod ascii_formatter;
mod execute_error;
mod executor;
mod request;

pub use ascii_formatter::AsciiFormatter;
pub use execute_error::ExecuteError;
pub use executor::Executor;
pub use request::decode_response;
pub use request::request_body;

#[cfg(test)]
mod tests;
