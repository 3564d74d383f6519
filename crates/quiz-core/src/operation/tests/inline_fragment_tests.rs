use crate::operation::InlineFragment;
use crate::operation::InvalidSelectionReason;
use crate::operation::Operation;
use crate::operation::OperationBuildError;
use crate::operation::SelectionSet;
use crate::operation::ValidationError;
use crate::schema_model::SchemaModel;
use crate::test_utils;
use crate::types::GraphQLTypeKind;
use crate::types::TypeRegistry;
use indexmap::IndexMap;
use serde_json::json;

/// A schema whose `Query` only has a `ping: String` field.
fn ping_only_registry() -> TypeRegistry {
    let schema_model = SchemaModel::from_introspection_json(&json!({
        "__schema": {
            "queryType": { "name": "Query" },
            "types": [{
                "kind": "OBJECT",
                "name": "Query",
                "interfaces": [],
                "fields": [
                    test_utils::field("ping", json!([]), test_utils::named("SCALAR", "String")),
                ],
            }],
        },
    })).unwrap();
    TypeRegistry::from_schema_model(&schema_model, IndexMap::new()).unwrap()
}

#[test]
fn fragment_on_object() {
    let registry = test_utils::example_registry();
    let fragment = InlineFragment::new(
        &registry,
        "User",
        SelectionSet::new().select("name").select("joinedAt"),
    ).unwrap();

    assert_eq!(fragment.type_condition(), "User");
    assert_eq!(fragment.selection_set().len(), 2);
}

#[test]
fn fragment_on_unknown_type() {
    let registry = test_utils::example_registry();
    let result = InlineFragment::new(
        &registry,
        "Admin",
        SelectionSet::new().select("name"),
    );

    assert_eq!(result, Err(ValidationError::NoSuchType {
        type_name: "Admin".to_string(),
    }));
}

#[test]
fn fragment_on_union_or_scalar_is_rejected() {
    let registry = test_utils::example_registry();

    for (type_name, kind) in [
        ("SearchResult", GraphQLTypeKind::Union),
        ("DateTime", GraphQLTypeKind::Scalar),
        ("Color", GraphQLTypeKind::Enum),
    ] {
        let result = InlineFragment::new(
            &registry,
            type_name,
            SelectionSet::new().select("__typename"),
        );
        assert_eq!(result, Err(ValidationError::InvalidSelection {
            field: None,
            on: type_name.to_string(),
            reason: InvalidSelectionReason::FragmentOnNonObjectType { kind },
        }));
    }
}

#[test]
fn empty_fragment_is_rejected() {
    let registry = test_utils::example_registry();
    let result = InlineFragment::new(&registry, "Node", SelectionSet::new());

    assert_eq!(result, Err(ValidationError::InvalidSelection {
        field: None,
        on: "Node".to_string(),
        reason: InvalidSelectionReason::EmptyFragment,
    }));
}

#[test]
fn fragment_contents_are_validated_on_creation() {
    let registry = test_utils::example_registry();
    let result = InlineFragment::new(
        &registry,
        "Post",
        SelectionSet::new().select("title").select("body"),
    );

    assert_eq!(result, Err(ValidationError::NoSuchField {
        field: "body".to_string(),
        on: "Post".to_string(),
    }));
}

#[test]
fn fragment_arguments_are_validated_on_creation() {
    let registry = test_utils::example_registry();
    let result = InlineFragment::new(
        &registry,
        "User",
        SelectionSet::new()
            .select("posts")
            .with_selection(SelectionSet::new().select("title"))
            .unwrap(),
    );

    assert_eq!(result, Err(ValidationError::MissingArgument {
        argument: "published".to_string(),
        field: "posts".to_string(),
        on: "User".to_string(),
    }));
}

#[test]
fn fragment_contents_are_revalidated_against_the_operation_registry() {
    let registry = test_utils::example_registry();
    let as_query = InlineFragment::new(
        &registry,
        "Query",
        SelectionSet::new().select("version"),
    ).unwrap();
    let selection_set = SelectionSet::new().with_fragment(as_query);

    assert!(Operation::query(&registry, selection_set.clone()).is_ok());
    assert_eq!(
        Operation::query(&ping_only_registry(), selection_set),
        Err(OperationBuildError::Validation(ValidationError::NoSuchField {
            field: "version".to_string(),
            on: "Query".to_string(),
        })),
    );
}
