//! Compositional builders for GraphQL `query` and `mutation` documents.
//!
//! Documents are assembled bottom-up out of [`SelectionNode`]s, wrapped in a
//! [`Query`](operation::Query) or [`Mutation`](operation::Mutation), and
//! rendered into GraphQL text. A rendered operation can be embedded in a
//! GraphQL-over-HTTP [`RequestBody`](operation::RequestBody) together with its
//! bound variables.
//!
//! ```
//! use libgraphql_query::field;
//! use libgraphql_query::named;
//! use libgraphql_query::operation::Query;
//! use libgraphql_query::variable;
//!
//! let root = named("MySuperQuery", [
//!     field("user")
//!         .with_argument("id", variable("id"))
//!         .with_selections([field("id"), field("name")]),
//! ]).with_variable_declarations([("id", "INT!")]);
//!
//! assert_eq!(
//!     Query::new(root).to_graphql_string(),
//!     "query MySuperQuery($id: INT!) {\nuser(id: $id) {\nid\nname\n}\n}",
//! );
//! ```
//!
//! This crate is a syntax layer only. Nothing is checked against a schema,
//! and string literals are written without escaping unless built with
//! [`ArgumentValue::escaped_string()`].

mod argument_value;
pub mod operation;
mod selection_node;
mod variable_definition;

pub use argument_value::ArgumentValue;
pub use selection_node::SelectionNode;
pub use variable_definition::VariableDefinition;

/// Shorthand for [`SelectionNode::field()`].
pub fn field(name: impl Into<String>) -> SelectionNode {
    SelectionNode::field(name)
}

/// Shorthand for [`SelectionNode::named()`].
pub fn named(
    name: impl Into<String>,
    children: impl IntoIterator<Item = SelectionNode>,
) -> SelectionNode {
    SelectionNode::named(name, children)
}

/// Shorthand for [`SelectionNode::object()`].
pub fn object(children: impl IntoIterator<Item = SelectionNode>) -> SelectionNode {
    SelectionNode::object(children)
}

/// Shorthand for [`ArgumentValue::type_token()`].
pub fn type_token(token: impl Into<String>) -> ArgumentValue {
    ArgumentValue::type_token(token)
}

/// Shorthand for [`ArgumentValue::variable()`].
pub fn variable(name: impl AsRef<str>) -> ArgumentValue {
    ArgumentValue::variable(name)
}
