use crate::field;
use crate::named;
use crate::object;
use crate::operation::GraphQLRequest;
use crate::operation::Mutation;
use crate::operation::Query;
use crate::operation::RequestBuildError;
use crate::variable;
use serde_json::json;
use std::collections::BTreeMap;

fn user_query() -> Query {
    Query::new(
        named("MySuperQuery", [
            field("user")
                .with_argument("id", variable("id"))
                .with_selections([field("id"), field("name")]),
        ]).with_variable_declarations([("id", "INT!"), ("locale", "String")]),
    )
}

#[test]
fn unbound_request_omits_variables() {
    let body = user_query().into_request().to_request_body();
    assert_eq!(body.variables(), None);
    assert!(body.to_json().get("variables").is_none());
}

#[test]
fn bound_request_includes_variables() {
    let request = user_query().into_request().bind_variable("id", 12).unwrap();
    assert_eq!(request.variables()["id"], json!(12));
    assert_eq!(request.to_request_body().to_json()["variables"], json!({"id": 12}));
}

#[test]
fn bindings_keep_their_order_and_rebinding_replaces() {
    let request =
        user_query().into_request()
            .bind_variable("locale", "fr")
            .and_then(|req| req.bind_variable("$id", 1))
            .and_then(|req| req.bind_variable("locale", "de"))
            .unwrap();
    assert_eq!(
        request.to_request_body().to_json_string(),
        format!(
            r#"{{"query":{},"variables":{{"locale":"de","id":1}}}}"#,
            serde_json::to_string(&user_query().to_graphql_string()).unwrap(),
        ),
    );
}

#[test]
fn bind_variables_accepts_structured_values() {
    let mut filter = BTreeMap::new();
    filter.insert("active", true);

    let request =
        Query::new(
            named("Users", [field("users").with_argument("filter", variable("filter"))])
                .with_variable_declarations([("filter", "UserFilter")]),
        )
            .into_request()
            .bind_variables([("filter", filter)])
            .unwrap();
    assert_eq!(
        request.to_request_body().to_json()["variables"],
        json!({"filter": {"active": true}}),
    );
}

#[test]
fn binding_without_declarations_fails_fast() {
    let result =
        Query::new(named("Ping", [field("ping")]))
            .into_request()
            .bind_variable("id", 1);
    match result {
        Err(RequestBuildError::NoVariableDefinitions {
            operation_name,
            variable_name,
        }) => {
            assert_eq!(operation_name.as_deref(), Some("Ping"));
            assert_eq!(variable_name, "id");
        },
        other => panic!("Expected NoVariableDefinitions, got: {other:?}"),
    }
}

#[test]
fn empty_bulk_binding_without_declarations_fails_fast() {
    let result =
        Query::new(object([field("ping")]))
            .into_request()
            .bind_variables(Vec::<(&str, i32)>::new());
    assert!(matches!(
        result,
        Err(RequestBuildError::NoVariableDefinitions { operation_name: None, .. }),
    ));
}

#[test]
fn binding_an_undeclared_variable_fails_fast() {
    let result = user_query().into_request().bind_variable("userId", 1);
    match result {
        Err(err @ RequestBuildError::UndefinedVariable { .. }) => {
            assert_eq!(
                err.to_string(),
                "Variable `$userId` is not declared on this operation",
            );
        },
        other => panic!("Expected UndefinedVariable, got: {other:?}"),
    }
}

#[test]
fn unserializable_value_is_reported() {
    let mut bad_map = BTreeMap::new();
    bad_map.insert(vec![1_u8], "non-string key");

    let result = user_query().into_request().bind_variable("id", bad_map);
    assert!(matches!(
        result,
        Err(RequestBuildError::VariableSerializationError { ref variable_name, .. })
            if variable_name == "id",
    ));
}

#[test]
fn operation_name_is_opt_in() {
    let request = GraphQLRequest::new(Mutation::new(named("Ping", [field("ping")])));
    assert!(request.to_request_body().operation_name().is_none());

    let request = request.include_operation_name(true);
    assert_eq!(request.to_request_body().to_json()["operationName"], json!("Ping"));
}

#[test]
fn operation_name_is_absent_for_anonymous_operations() {
    let request =
        Query::new(object([field("ping")]))
            .into_request()
            .include_operation_name(true);
    assert!(request.to_request_body().to_json().get("operationName").is_none());
}

#[test]
fn include_operation_name_survives_binding() {
    let request =
        user_query().into_request()
            .include_operation_name(true)
            .bind_variable("id", 12)
            .unwrap();
    let body = request.to_request_body().to_json();
    assert_eq!(body["operationName"], json!("MySuperQuery"));
    assert_eq!(body["variables"], json!({"id": 12}));
    assert_eq!(request.operation().name(), Some("MySuperQuery"));
}
