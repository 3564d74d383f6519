//! Build GraphQL query documents against an introspected schema, check them
//! against that schema, and render them as GraphQL query text.
//!
//! The pipeline is:
//!
//! 1. Load a [`SchemaModel`](schema_model::SchemaModel) (usually from an
//!    introspection response).
//! 2. Turn it into a [`TypeRegistry`](types::TypeRegistry) with
//!    [`TypeRegistryBuilder`](types::TypeRegistryBuilder).
//! 3. Build a [`SelectionSet`](operation::SelectionSet) and wrap it in an
//!    [`Operation`](operation::Operation), which validates it.
//! 4. Render the operation to text (or ship it with
//!    [`Executor`](execute::Executor) when the `http` feature is enabled).

#[cfg(feature = "http")]
pub mod execute;
mod named_ref;
pub mod operation;
pub mod render;
pub mod schema_model;
pub mod types;
mod value;

pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use value::EnumMember;
pub use value::InputObjectValue;
pub use value::Value;

#[cfg(test)]
pub(crate) mod test_utils;
