use crate::operation::GraphQLRequest;
use crate::operation::OperationData;
use crate::operation::OperationKind;
use crate::operation::OperationTrait;
use crate::operation::RequestBody;
use crate::operation::Variables;
use crate::SelectionNode;
use crate::VariableDefinition;
use inherent::inherent;

/// Represents a `query` operation rooted at a [`SelectionNode`].
#[derive(Clone, Debug, PartialEq)]
pub struct Query(pub(super) OperationData);
impl Query {
    /// Wrap `root` as a query. If `root` is named, its name becomes the
    /// operation name and its variable declarations form the header.
    pub fn new(root: SelectionNode) -> Self {
        Self(OperationData {
            name: None,
            root,
        })
    }

    /// Start a [`GraphQLRequest`] for this query with no variables bound.
    pub fn into_request(self) -> GraphQLRequest {
        GraphQLRequest::new(self)
    }

    /// Set an operation name independent of the root node's name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }
}

#[inherent]
impl OperationTrait for Query {
    pub fn kind(&self) -> OperationKind {
        OperationKind::Query
    }

    /// Access the name of this [`Query`] (if one was specified either on the
    /// operation or on its root node).
    pub fn name(&self) -> Option<&str> {
        self.0.operation_name()
    }

    pub fn root(&self) -> &SelectionNode {
        &self.0.root
    }

    pub fn to_graphql_string(&self) -> String {
        self.0.to_graphql_string(OperationKind::Query)
    }

    pub fn to_request_body(&self, variables: Option<Variables>) -> RequestBody {
        RequestBody::new(self.to_graphql_string(), variables)
    }

    /// Access the variables declared for this [`Query`].
    pub fn variable_definitions(&self) -> &[VariableDefinition] {
        self.0.root.variable_definitions()
    }
}
impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql_string())
    }
}
