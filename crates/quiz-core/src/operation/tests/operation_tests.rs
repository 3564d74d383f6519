use crate::operation::Operation;
use crate::operation::OperationBuildError;
use crate::operation::OperationKind;
use crate::operation::SelectionSet;
use crate::operation::ValidationError;
use crate::test_utils;
use proptest::prelude::*;

fn user_name(id: &str) -> SelectionSet {
    SelectionSet::new()
        .select("user")
        .with_argument("id", id)
        .unwrap()
        .with_selection(SelectionSet::new().select("name"))
        .unwrap()
}

#[test]
fn query_validates_against_the_query_root() {
    let registry = test_utils::example_registry();
    let operation = Operation::query(&registry, user_name("1")).unwrap();

    assert_eq!(operation.kind(), OperationKind::Query);
    assert_eq!(operation.selection_set(), &user_name("1"));
}

#[test]
fn query_rejects_invalid_selections() {
    let registry = test_utils::example_registry();
    let result = Operation::query(&registry, SelectionSet::new().select("rename"));

    assert_eq!(result, Err(OperationBuildError::Validation(ValidationError::NoSuchField {
        field: "rename".to_string(),
        on: "Query".to_string(),
    })));
}

#[test]
fn mutation_validates_against_the_mutation_root() {
    let registry = test_utils::example_registry();
    let selection_set = SelectionSet::new()
        .select("rename")
        .with_arguments([("id", "1"), ("name", "Ada")])
        .unwrap()
        .with_selection(SelectionSet::new().select("name"))
        .unwrap();
    let operation = Operation::mutation(&registry, selection_set).unwrap();

    assert_eq!(operation.kind(), OperationKind::Mutation);
}

#[test]
fn subscription_without_a_root_type() {
    let registry = test_utils::example_registry();
    let result = Operation::subscription(&registry, SelectionSet::new().select("ping"));

    assert_eq!(result, Err(OperationBuildError::NoRootType {
        kind: OperationKind::Subscription,
    }));
}

#[test]
fn build_against_an_explicit_root() {
    let registry = test_utils::example_registry();
    let operation = Operation::build(
        OperationKind::Query,
        &registry,
        "User",
        SelectionSet::new().select("id").select("name"),
    ).unwrap();

    assert_eq!(operation.to_graphql_string().unwrap(), "query {\n  id\n  name\n}");
}

#[test]
fn empty_operation_renders_only_its_keyword() {
    let registry = test_utils::example_registry();
    let operation = Operation::query(&registry, SelectionSet::new()).unwrap();

    assert_eq!(operation.to_graphql_string().unwrap(), "query ");
}

#[test]
fn keywords() {
    assert_eq!(OperationKind::Query.keyword(), "query");
    assert_eq!(OperationKind::Mutation.to_string(), "mutation");
    assert_eq!(OperationKind::Subscription.keyword(), "subscription");
}

proptest! {
    #[test]
    fn rendering_is_deterministic(id in "[a-zA-Z0-9]{1,12}") {
        let registry = test_utils::example_registry();
        let operation = Operation::query(&registry, user_name(&id)).unwrap();

        let first = operation.to_graphql_string().unwrap();
        let second = operation.clone().to_graphql_string().unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            first,
            format!("query {{\n  user(id: \"{id}\") {{\n    name\n  }}\n}}"),
        );
    }
}
