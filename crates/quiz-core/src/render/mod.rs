//! Rendering of operations and selection sets as GraphQL source text.
//!
//! Output uses two-space indentation with one selection per line:
//!
//! ```text
//! query {
//!   user(id: "1") {
//!     name
//!     ... on Admin {
//!       permissions
//!     }
//!   }
//! }
//! ```

mod render_error;

pub use render_error::RenderError;

use crate::operation::FieldSelection;
use crate::operation::InlineFragment;
use crate::operation::Operation;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::Value;

type Result<T> = std::result::Result<T, RenderError>;

pub const INDENT: &str = "  ";

/// Encode a single argument value as a GraphQL literal.
///
/// Strings and IDs are wrapped in double quotes as-is; their contents are
/// not escaped.
pub fn argument_to_graphql(value: &Value) -> Result<String> {
    Ok(match value {
        Value::Boolean(true) => "true".to_string(),
        Value::Boolean(false) => "false".to_string(),
        Value::Enum(member) => member.value().to_string(),
        Value::ID(text) | Value::String(text) => format!("\"{text}\""),
        Value::Int(int) => int.to_string(),
        Value::Null => "null".to_string(),
        Value::Float(_) | Value::InputObject(_) | Value::List(_) =>
            return Err(RenderError::UnsupportedArgumentType {
                kind: value.kind_name(),
                value: value.clone(),
            }),
    })
}

pub fn render_operation(operation: &Operation) -> Result<String> {
    Ok(format!(
        "{} {}",
        operation.kind().keyword(),
        render_selection_set(operation.selection_set())?,
    ))
}

/// Render a selection set as a `{ ... }` block. An empty set renders as an
/// empty string.
pub fn render_selection_set(selection_set: &SelectionSet) -> Result<String> {
    if selection_set.is_empty() {
        return Ok(String::new());
    }

    let mut block = String::from("{\n");
    for (idx, selection) in selection_set.iter().enumerate() {
        if idx > 0 {
            block.push('\n');
        }
        block.push_str(&indent(&render_selection(selection)?));
    }
    block.push_str("\n}");
    Ok(block)
}

pub fn render_selection(selection: &Selection) -> Result<String> {
    match selection {
        Selection::Field(field) => render_field(field),
        Selection::InlineFragment(fragment) => render_inline_fragment(fragment),
    }
}

fn render_field(field: &FieldSelection) -> Result<String> {
    let mut rendered = field.name().to_string();

    if !field.arguments().is_empty() {
        let arguments = field
            .arguments()
            .iter()
            .map(|(name, value)| {
                argument_to_graphql(value).map(|value| format!("{name}: {value}"))
            })
            .collect::<Result<Vec<_>>>()?;
        rendered.push('(');
        rendered.push_str(&arguments.join(", "));
        rendered.push(')');
    }

    if !field.selection_set().is_empty() {
        rendered.push(' ');
        rendered.push_str(&render_selection_set(field.selection_set())?);
    }

    Ok(rendered)
}

fn render_inline_fragment(fragment: &InlineFragment) -> Result<String> {
    Ok(format!(
        "... on {} {}",
        fragment.type_condition(),
        render_selection_set(fragment.selection_set())?,
    ))
}

// Prefixes every non-blank line.
fn indent(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{INDENT}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
