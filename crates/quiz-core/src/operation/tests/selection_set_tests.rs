use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::SelectionSetBuildError;
use crate::test_utils;
use crate::operation::InlineFragment;
use crate::Value;
use proptest::prelude::*;

fn field_names(selection_set: &SelectionSet) -> Vec<&str> {
    selection_set
        .iter()
        .filter_map(Selection::as_field)
        .map(|field| field.name())
        .collect()
}

#[test]
fn new_is_empty() {
    let selection_set = SelectionSet::new();
    assert!(selection_set.is_empty());
    assert_eq!(selection_set.len(), 0);
    assert_eq!(selection_set.last(), None);
    assert_eq!(selection_set, SelectionSet::default());
}

#[test]
fn select_appends_in_order() {
    let selection_set = SelectionSet::new().select("id").select("name");
    assert_eq!(field_names(&selection_set), vec!["id", "name"]);
}

#[test]
fn select_leaves_the_base_untouched() {
    let base = SelectionSet::new().select("id");
    let extended = base.select("name");
    let other = base.select("bestFriend");

    assert_eq!(field_names(&base), vec!["id"]);
    assert_eq!(field_names(&extended), vec!["id", "name"]);
    assert_eq!(field_names(&other), vec!["id", "bestFriend"]);
}

#[test]
fn with_arguments_replaces_arguments_of_the_last_field() {
    let selection_set = SelectionSet::new()
        .select("id")
        .select("friends")
        .with_arguments([("first", 10)])
        .unwrap()
        .with_arguments([("first", 20)])
        .unwrap();

    let id = selection_set.iter().next().and_then(Selection::as_field).unwrap();
    let friends = selection_set.last().and_then(Selection::as_field).unwrap();
    assert!(id.arguments().is_empty());
    assert_eq!(friends.arguments().len(), 1);
    assert_eq!(friends.arguments().get("first"), Some(&Value::Int(20)));
}

#[test]
fn with_arguments_does_not_modify_the_base() {
    let base = SelectionSet::new().select("friends");
    let with_args = base.with_arguments([("first", 1)]).unwrap();

    assert!(base.last().and_then(Selection::as_field).unwrap().arguments().is_empty());
    assert_ne!(base, with_args);
}

#[test]
fn with_argument_merges_into_existing_arguments() {
    let selection_set = SelectionSet::new()
        .select("search")
        .with_argument("term", "ada")
        .unwrap()
        .with_argument("limit", 3)
        .unwrap()
        .with_argument("term", "grace")
        .unwrap();

    let search = selection_set.last().and_then(Selection::as_field).unwrap();
    let arguments: Vec<_> = search.arguments().iter().collect();
    assert_eq!(arguments, vec![
        (&"term".to_string(), &Value::from("grace")),
        (&"limit".to_string(), &Value::Int(3)),
    ]);
}

#[test]
fn with_arguments_on_empty_set_fails() {
    assert_eq!(
        SelectionSet::new().with_arguments([("first", 1)]),
        Err(SelectionSetBuildError::EmptySelectionSet),
    );
    assert_eq!(
        SelectionSet::new().with_argument("first", 1),
        Err(SelectionSetBuildError::EmptySelectionSet),
    );
}

#[test]
fn with_selection_replaces_nested_set_of_the_last_field() {
    let nested = SelectionSet::new().select("name");
    let selection_set = SelectionSet::new()
        .select("user")
        .with_selection(nested.clone())
        .unwrap();

    let user = selection_set.last().and_then(Selection::as_field).unwrap();
    assert_eq!(user.selection_set(), &nested);
}

#[test]
fn with_selection_on_empty_set_fails() {
    assert_eq!(
        SelectionSet::new().with_selection(SelectionSet::new().select("id")),
        Err(SelectionSetBuildError::EmptySelectionSet),
    );
}

#[test]
fn with_empty_nested_selection_fails() {
    assert_eq!(
        SelectionSet::new().select("user").with_selection(SelectionSet::new()),
        Err(SelectionSetBuildError::EmptyNestedSelectionSet),
    );
}

#[test]
fn arguments_and_nested_selections_cannot_follow_a_fragment() {
    let registry = test_utils::example_registry();
    let fragment = InlineFragment::new(
        &registry,
        "User",
        SelectionSet::new().select("name"),
    ).unwrap();
    let selection_set = SelectionSet::new().select("id").with_fragment(fragment);

    assert_eq!(
        selection_set.with_argument("first", 1),
        Err(SelectionSetBuildError::ArgumentsOnInlineFragment),
    );
    assert_eq!(
        selection_set.with_selection(SelectionSet::new().select("id")),
        Err(SelectionSetBuildError::NestedSelectionOnInlineFragment),
    );
}

#[test]
fn equality_is_order_sensitive() {
    let a = SelectionSet::new().select("id").select("name");
    let b = SelectionSet::new().select("name").select("id");
    assert_ne!(a, b);
    assert_eq!(a, SelectionSet::new().select("id").select("name"));
}

#[test]
fn argument_order_is_part_of_equality() {
    let a = SelectionSet::new()
        .select("search")
        .with_arguments([("term", Value::from("x")), ("limit", 1.into())])
        .unwrap();
    let b = SelectionSet::new()
        .select("search")
        .with_arguments([("limit", Value::from(1)), ("term", "x".into())])
        .unwrap();
    assert_ne!(a, b);
}

#[test]
fn equal_sets_hash_equally() {
    use std::collections::HashSet;

    let build = || SelectionSet::new()
        .select("user")
        .with_argument("id", "1")
        .unwrap()
        .with_selection(SelectionSet::new().select("name"))
        .unwrap();

    let set: HashSet<SelectionSet> = [build(), build()].into_iter().collect();
    assert_eq!(set.len(), 1);
}

proptest! {
    #[test]
    fn deriving_never_mutates_the_base(
        base_names in prop::collection::vec("[a-z]{1,8}", 1..8),
        extra_name in "[a-z]{1,8}",
        arg_value in any::<i64>(),
    ) {
        let base = base_names
            .iter()
            .fold(SelectionSet::new(), |set, name| set.select(name));
        let snapshot = base.clone();

        let _ = base.select(&extra_name);
        let _ = base.with_argument("value", arg_value);
        let _ = base.with_selection(SelectionSet::new().select(&extra_name));

        prop_assert_eq!(&base, &snapshot);
        prop_assert_eq!(base.len(), base_names.len());
    }
}
