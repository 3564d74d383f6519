use crate::operation::SelectionSet;
use crate::Value;
use indexmap::IndexMap;
use std::hash::Hash;
use std::hash::Hasher;

/// Argument values keyed by argument name, in the order they were given.
pub type FieldArguments = IndexMap<String, Value>;

/// A selection of a single, named field.
///
/// Nothing about a [`FieldSelection`] ties it to a schema; it is checked
/// against one by
/// [`SelectionSetValidator`](crate::operation::SelectionSetValidator).
#[derive(Clone, Debug)]
pub struct FieldSelection {
    pub(super) arguments: FieldArguments,
    pub(super) name: String,
    pub(super) selection_set: SelectionSet,
}
impl FieldSelection {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            arguments: IndexMap::new(),
            name: name.as_ref().to_string(),
            selection_set: SelectionSet::new(),
        }
    }

    pub fn arguments(&self) -> &FieldArguments {
        &self.arguments
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The sub-selections of this field. Empty for leaf fields.
    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }
}
// Argument order is part of a selection's identity, since it is the order
// arguments are rendered in.
impl PartialEq for FieldSelection {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.arguments.iter().eq(other.arguments.iter())
            && self.selection_set == other.selection_set
    }
}
impl Eq for FieldSelection {}
impl Hash for FieldSelection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.arguments.len().hash(state);
        for entry in &self.arguments {
            entry.hash(state);
        }
        self.selection_set.hash(state);
    }
}
