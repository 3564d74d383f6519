use crate::operation::FieldSelection;
use crate::operation::InlineFragment;

/// One entry of a [`SelectionSet`](crate::operation::SelectionSet).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selection {
    Field(FieldSelection),
    InlineFragment(InlineFragment),
}
impl Selection {
    pub fn as_field(&self) -> Option<&FieldSelection> {
        if let Self::Field(field) = self {
            Some(field)
        } else {
            None
        }
    }

    pub fn as_inline_fragment(&self) -> Option<&InlineFragment> {
        if let Self::InlineFragment(fragment) = self {
            Some(fragment)
        } else {
            None
        }
    }
}
impl std::convert::From<FieldSelection> for Selection {
    fn from(value: FieldSelection) -> Self {
        Self::Field(value)
    }
}
impl std::convert::From<InlineFragment> for Selection {
    fn from(value: InlineFragment) -> Self {
        Self::InlineFragment(value)
    }
}
