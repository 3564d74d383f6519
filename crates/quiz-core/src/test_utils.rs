use crate::schema_model::SchemaModel;
use crate::types::HostType;
use crate::types::TypeRegistry;
use indexmap::IndexMap;
use serde_json::json;

pub(crate) fn named(kind: &str, name: &str) -> serde_json::Value {
    json!({ "kind": kind, "name": name, "ofType": null })
}

pub(crate) fn non_null(inner: serde_json::Value) -> serde_json::Value {
    json!({ "kind": "NON_NULL", "name": null, "ofType": inner })
}

pub(crate) fn list(inner: serde_json::Value) -> serde_json::Value {
    json!({ "kind": "LIST", "name": null, "ofType": inner })
}

pub(crate) fn field(
    name: &str,
    args: serde_json::Value,
    type_ref: serde_json::Value,
) -> serde_json::Value {
    json!({
        "name": name,
        "description": format!("The {name} field."),
        "args": args,
        "type": type_ref,
        "isDeprecated": false,
        "deprecationReason": null,
    })
}

pub(crate) fn arg(name: &str, type_ref: serde_json::Value) -> serde_json::Value {
    json!({
        "name": name,
        "description": null,
        "type": type_ref,
        "defaultValue": null,
    })
}

/// An introspection result for the following schema:
///
/// ```graphql
/// scalar DateTime
/// enum Color { RED GREEN BLUE @deprecated(reason: "Too sad") }
/// interface Node { id: ID! }
/// type User implements Node {
///   id: ID!
///   name: String
///   friends(first: Int): [User!]!
///   bestFriend: User
///   favoriteColor: Color
///   joinedAt: DateTime
///   posts(published: Boolean!): [Post]
/// }
/// type Post implements Node { id: ID! title: String! author: User! }
/// union SearchResult = User | Post
/// input UserFilter
/// type Query {
///   user(id: ID!): User
///   node(id: ID!): Node
///   search(term: String!, limit: Int): [SearchResult!]!
///   users(filter: UserFilter, color: Color, ids: [ID!]): [User!]!
///   version: String
///   feed(minScore: Float): [Post]
/// }
/// type Mutation { rename(id: ID!, name: String!): User }
/// ```
pub(crate) fn example_introspection_json() -> serde_json::Value {
    json!({
        "data": {
            "__schema": {
                "queryType": { "name": "Query" },
                "mutationType": { "name": "Mutation" },
                "subscriptionType": null,
                "types": [
                    { "kind": "SCALAR", "name": "ID", "description": "Builtin ID" },
                    { "kind": "SCALAR", "name": "String", "description": null },
                    { "kind": "SCALAR", "name": "Int", "description": null },
                    { "kind": "SCALAR", "name": "Float", "description": null },
                    { "kind": "SCALAR", "name": "Boolean", "description": null },
                    {
                        "kind": "SCALAR",
                        "name": "DateTime",
                        "description": "An ISO-8601 timestamp.",
                        "fields": null,
                    },
                    {
                        "kind": "ENUM",
                        "name": "Color",
                        "description": "A color.",
                        "enumValues": [
                            { "name": "RED", "description": "Red.", "isDeprecated": false, "deprecationReason": null },
                            { "name": "GREEN", "description": null, "isDeprecated": false, "deprecationReason": null },
                            { "name": "BLUE", "description": null, "isDeprecated": true, "deprecationReason": "Too sad" },
                        ],
                    },
                    {
                        "kind": "INTERFACE",
                        "name": "Node",
                        "description": "Something with an id.",
                        "fields": [
                            field("id", json!([]), non_null(named("SCALAR", "ID"))),
                        ],
                        "possibleTypes": [
                            named("OBJECT", "User"),
                            named("OBJECT", "Post"),
                        ],
                    },
                    {
                        "kind": "OBJECT",
                        "name": "User",
                        "description": "A user.",
                        "interfaces": [named("INTERFACE", "Node")],
                        "fields": [
                            field("id", json!([]), non_null(named("SCALAR", "ID"))),
                            field("name", json!([]), named("SCALAR", "String")),
                            field(
                                "friends",
                                json!([arg("first", named("SCALAR", "Int"))]),
                                non_null(list(non_null(named("OBJECT", "User")))),
                            ),
                            field("bestFriend", json!([]), named("OBJECT", "User")),
                            field("favoriteColor", json!([]), named("ENUM", "Color")),
                            field("joinedAt", json!([]), named("SCALAR", "DateTime")),
                            field(
                                "posts",
                                json!([arg("published", non_null(named("SCALAR", "Boolean")))]),
                                list(named("OBJECT", "Post")),
                            ),
                        ],
                    },
                    {
                        "kind": "OBJECT",
                        "name": "Post",
                        "description": null,
                        "interfaces": [named("INTERFACE", "Node")],
                        "fields": [
                            field("id", json!([]), non_null(named("SCALAR", "ID"))),
                            field("title", json!([]), non_null(named("SCALAR", "String"))),
                            field("author", json!([]), non_null(named("OBJECT", "User"))),
                        ],
                    },
                    {
                        "kind": "UNION",
                        "name": "SearchResult",
                        "description": null,
                        "possibleTypes": [
                            named("OBJECT", "User"),
                            named("OBJECT", "Post"),
                        ],
                    },
                    {
                        "kind": "INPUT_OBJECT",
                        "name": "UserFilter",
                        "description": "Filters users.",
                        "inputFields": [
                            arg("nameContains", named("SCALAR", "String")),
                        ],
                    },
                    {
                        "kind": "OBJECT",
                        "name": "Query",
                        "description": null,
                        "interfaces": [],
                        "fields": [
                            field(
                                "user",
                                json!([arg("id", non_null(named("SCALAR", "ID")))]),
                                named("OBJECT", "User"),
                            ),
                            field(
                                "node",
                                json!([arg("id", non_null(named("SCALAR", "ID")))]),
                                named("INTERFACE", "Node"),
                            ),
                            field(
                                "search",
                                json!([
                                    arg("term", non_null(named("SCALAR", "String"))),
                                    arg("limit", named("SCALAR", "Int")),
                                ]),
                                non_null(list(non_null(named("UNION", "SearchResult")))),
                            ),
                            field(
                                "users",
                                json!([
                                    arg("filter", named("INPUT_OBJECT", "UserFilter")),
                                    arg("color", named("ENUM", "Color")),
                                    arg("ids", list(non_null(named("SCALAR", "ID")))),
                                ]),
                                non_null(list(non_null(named("OBJECT", "User")))),
                            ),
                            field("version", json!([]), named("SCALAR", "String")),
                            field(
                                "feed",
                                json!([arg("minScore", named("SCALAR", "Float"))]),
                                list(named("OBJECT", "Post")),
                            ),
                        ],
                    },
                    {
                        "kind": "OBJECT",
                        "name": "Mutation",
                        "description": null,
                        "interfaces": [],
                        "fields": [
                            field(
                                "rename",
                                json!([
                                    arg("id", non_null(named("SCALAR", "ID"))),
                                    arg("name", non_null(named("SCALAR", "String"))),
                                ]),
                                named("OBJECT", "User"),
                            ),
                        ],
                    },
                ],
            },
        },
    })
}

pub(crate) fn example_schema_model() -> SchemaModel {
    SchemaModel::from_introspection_json(&example_introspection_json())
        .expect("example introspection JSON decodes")
}

pub(crate) fn example_registry() -> TypeRegistry {
    TypeRegistry::from_schema_model(
        &example_schema_model(),
        IndexMap::from([("DateTime".to_string(), HostType::String)]),
    ).expect("example schema builds")
}
