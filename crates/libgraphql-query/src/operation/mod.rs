mod graphql_request;
mod mutation;
#[allow(clippy::module_inception)]
mod operation;
mod operation_data;
mod operation_kind;
mod operation_trait;
mod query;
mod request_body;

pub use graphql_request::Bound;
pub use graphql_request::GraphQLRequest;
pub use graphql_request::RequestBuildError;
pub use graphql_request::Unbound;
pub use graphql_request::VariablesState;
pub use mutation::Mutation;
pub use operation::Operation;
pub(crate) use operation_data::OperationData;
pub use operation_kind::OperationKind;
use operation_trait::OperationTrait;
pub use query::Query;
pub use request_body::RequestBody;

/// Concrete values for an operation's declared variables, keyed by variable
/// name (without `$`) in binding order.
pub type Variables = indexmap::IndexMap<String, serde_json::Value>;

#[cfg(test)]
mod tests;
