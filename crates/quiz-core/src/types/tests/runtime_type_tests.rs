use crate::test_utils;
use crate::types::HostType;
use crate::types::RuntimeType;
use crate::EnumMember;
use crate::InputObjectValue;
use crate::Value;

fn param_type(field_name: &str, param_name: &str) -> RuntimeType {
    let registry = test_utils::example_registry();
    registry.query_type()
        .and_then(|t| t.fields())
        .and_then(|fields| fields.get(field_name))
        .and_then(|field| field.parameters().get(param_name))
        .map(|param| param.type_annotation().to_owned())
        .expect("parameter is defined")
}

#[test]
fn display_uses_graphql_notation() {
    let registry = test_utils::example_registry();
    let user = registry.get("User").and_then(|t| t.as_object()).unwrap();

    assert_eq!(user.field("friends").unwrap().return_type().to_string(), "[User!]!");
    assert_eq!(user.field("posts").unwrap().return_type().to_string(), "[Post]");
    assert_eq!(user.field("id").unwrap().return_type().to_graphql_string(), "ID!");
}

#[test]
fn optional_accepts_null() {
    let registry = test_utils::example_registry();
    let limit = param_type("search", "limit");

    assert!(limit.accepts(&registry, &Value::Null));
    assert!(limit.accepts(&registry, &Value::Int(10)));
    assert!(!limit.accepts(&registry, &Value::String("10".to_string())));
}

#[test]
fn non_null_rejects_null() {
    let registry = test_utils::example_registry();
    let term = param_type("search", "term");

    assert!(!term.accepts(&registry, &Value::Null));
    assert!(term.accepts(&registry, &"hello".into()));
}

#[test]
fn id_accepts_strings_and_ints() {
    let registry = test_utils::example_registry();
    let id = param_type("user", "id");

    assert!(id.accepts(&registry, &Value::ID("u1".to_string())));
    assert!(id.accepts(&registry, &Value::String("u1".to_string())));
    assert!(id.accepts(&registry, &Value::Int(1)));
    assert!(!id.accepts(&registry, &Value::Boolean(true)));
}

#[test]
fn float_accepts_ints() {
    let registry = test_utils::example_registry();
    let min_score = param_type("feed", "minScore");

    assert!(min_score.accepts(&registry, &Value::Float(0.5)));
    assert!(min_score.accepts(&registry, &Value::Int(1)));
    assert!(!min_score.accepts(&registry, &Value::Boolean(false)));
}

#[test]
fn list_checks_every_item() {
    let registry = test_utils::example_registry();
    let ids = param_type("users", "ids");

    assert!(ids.accepts(&registry, &Value::from(vec!["a", "b"])));
    assert!(ids.accepts(&registry, &Value::List(vec![])));
    assert!(!ids.accepts(&registry, &Value::List(vec![Value::Null])));
    assert!(!ids.accepts(&registry, &Value::String("a".to_string())));
}

#[test]
fn enum_accepts_only_its_own_defined_members() {
    let registry = test_utils::example_registry();
    let color = param_type("users", "color");

    assert!(color.accepts(&registry, &EnumMember::new("Color", "RED").into()));
    assert!(!color.accepts(&registry, &EnumMember::new("Color", "PURPLE").into()));
    assert!(!color.accepts(&registry, &EnumMember::new("Shade", "RED").into()));
    assert!(!color.accepts(&registry, &"RED".into()));
}

#[test]
fn input_object_is_checked_by_type_name() {
    let registry = test_utils::example_registry();
    let filter = param_type("users", "filter");

    let value = InputObjectValue::new("UserFilter").with_field("nameContains", "al");
    assert!(filter.accepts(&registry, &value.into()));
    assert!(!filter.accepts(&registry, &InputObjectValue::new("PostFilter").into()));
}

#[test]
fn host_types_parse_from_names() {
    assert_eq!("String".parse::<HostType>(), Ok(HostType::String));
    assert_eq!("int".parse::<HostType>(), Ok(HostType::Int));
    assert!("Decimal".parse::<HostType>().is_err());
}
