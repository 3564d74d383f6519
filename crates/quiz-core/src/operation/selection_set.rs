use crate::operation::FieldArguments;
use crate::operation::FieldSelection;
use crate::operation::InlineFragment;
use crate::operation::Selection;
use crate::operation::SelectionSetBuildError;
use crate::Value;

type Result<T> = std::result::Result<T, SelectionSetBuildError>;

/// An ordered, immutable sequence of [`Selection`]s.
///
/// Every builder method returns a new [`SelectionSet`] and leaves `self`
/// untouched, so a partially-built set can be shared and extended in several
/// directions:
///
/// ```
/// # use quiz_core::operation::SelectionSet;
/// let base = SelectionSet::new().select("id");
/// let with_name = base.select("name");
/// let with_email = base.select("email");
///
/// assert_eq!(base.len(), 1);
/// assert_eq!(with_name.len(), 2);
/// assert_eq!(with_email.len(), 2);
/// ```
///
/// Appends and edits of the last selection share structure with the set
/// they were derived from, so neither copies the whole sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectionSet(im::Vector<Selection>);
impl SelectionSet {
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Append a selection of the field named `name`.
    pub fn select(&self, name: impl AsRef<str>) -> Self {
        self.with_appended(Selection::Field(FieldSelection::new(name)))
    }

    /// Append an already-validated [`InlineFragment`].
    pub fn with_fragment(&self, fragment: InlineFragment) -> Self {
        self.with_appended(Selection::InlineFragment(fragment))
    }

    /// Merge a single argument into the arguments of the last selected field.
    /// An argument that was already given is overwritten in place.
    pub fn with_argument(
        &self,
        name: impl AsRef<str>,
        value: impl Into<Value>,
    ) -> Result<Self> {
        let name = name.as_ref().to_string();
        let value = value.into();
        self.with_last_field(
            SelectionSetBuildError::ArgumentsOnInlineFragment,
            |field| {
                field.arguments.insert(name, value);
                Ok(())
            },
        )
    }

    /// Replace the arguments of the last selected field.
    ///
    /// ```
    /// # use quiz_core::operation::SelectionSet;
    /// # use quiz_core::Value;
    /// let selection_set = SelectionSet::new()
    ///     .select("user")
    ///     .with_arguments([("id", Value::from(7)), ("active", true.into())])
    ///     .unwrap();
    /// let user = selection_set.last().unwrap().as_field().unwrap();
    /// assert_eq!(user.arguments().len(), 2);
    /// ```
    pub fn with_arguments<TName, TValue>(
        &self,
        arguments: impl IntoIterator<Item = (TName, TValue)>,
    ) -> Result<Self>
    where
        TName: AsRef<str>,
        TValue: Into<Value>,
    {
        let arguments: FieldArguments = arguments
            .into_iter()
            .map(|(name, value)| (name.as_ref().to_string(), value.into()))
            .collect();
        self.with_last_field(
            SelectionSetBuildError::ArgumentsOnInlineFragment,
            |field| {
                field.arguments = arguments;
                Ok(())
            },
        )
    }

    /// Replace the sub-selections of the last selected field.
    pub fn with_selection(&self, nested: SelectionSet) -> Result<Self> {
        self.with_last_field(
            SelectionSetBuildError::NestedSelectionOnInlineFragment,
            |field| {
                if nested.is_empty() {
                    return Err(SelectionSetBuildError::EmptyNestedSelectionSet);
                }
                field.selection_set = nested;
                Ok(())
            },
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> im::vector::Iter<'_, Selection> {
        self.0.iter()
    }

    pub fn last(&self) -> Option<&Selection> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn with_appended(&self, selection: Selection) -> Self {
        let mut selections = self.0.clone();
        selections.push_back(selection);
        Self(selections)
    }

    fn with_last_field(
        &self,
        on_fragment_err: SelectionSetBuildError,
        edit: impl FnOnce(&mut FieldSelection) -> Result<()>,
    ) -> Result<Self> {
        let mut selections = self.0.clone();
        match selections.back_mut() {
            None => Err(SelectionSetBuildError::EmptySelectionSet),
            Some(Selection::InlineFragment(_)) => Err(on_fragment_err),
            Some(Selection::Field(field)) => {
                edit(field)?;
                Ok(Self(selections))
            },
        }
    }
}
impl std::iter::FromIterator<Selection> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = Selection>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
impl<'a> std::iter::IntoIterator for &'a SelectionSet {
    type IntoIter = im::vector::Iter<'a, Selection>;
    type Item = &'a Selection;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
