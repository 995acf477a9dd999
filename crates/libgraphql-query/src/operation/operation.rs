use crate::operation::GraphQLRequest;
use crate::operation::Mutation;
use crate::operation::OperationKind;
use crate::operation::Query;
use crate::operation::RequestBody;
use crate::operation::Variables;
use crate::SelectionNode;
use crate::VariableDefinition;
use std::boxed::Box;

#[derive(Clone, Debug, PartialEq)]
pub enum Operation {
    Mutation(Box<Mutation>),
    Query(Box<Query>),
}
impl Operation {
    pub fn into_request(self) -> GraphQLRequest {
        GraphQLRequest::new(self)
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Mutation(op) => op.kind(),
            Self::Query(op) => op.kind(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Mutation(op) => op.name(),
            Self::Query(op) => op.name(),
        }
    }

    /// Wrap `root` as an operation of the given kind.
    pub fn new(kind: OperationKind, root: SelectionNode) -> Self {
        match kind {
            OperationKind::Mutation => Mutation::new(root).into(),
            OperationKind::Query => Query::new(root).into(),
        }
    }

    pub fn root(&self) -> &SelectionNode {
        match self {
            Self::Mutation(op) => op.root(),
            Self::Query(op) => op.root(),
        }
    }

    pub fn to_graphql_string(&self) -> String {
        match self {
            Self::Mutation(op) => op.to_graphql_string(),
            Self::Query(op) => op.to_graphql_string(),
        }
    }

    /// Produce the JSON body for a GraphQL-over-HTTP POST. The `variables`
    /// key is omitted entirely when `variables` is `None`.
    pub fn to_request_body(&self, variables: Option<Variables>) -> RequestBody {
        match self {
            Self::Mutation(op) => op.to_request_body(variables),
            Self::Query(op) => op.to_request_body(variables),
        }
    }

    pub fn variable_definitions(&self) -> &[VariableDefinition] {
        match self {
            Self::Mutation(op) => op.variable_definitions(),
            Self::Query(op) => op.variable_definitions(),
        }
    }
}
impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql_string())
    }
}
impl std::convert::From<Mutation> for Operation {
    fn from(value: Mutation) -> Self {
        Self::Mutation(Box::new(value))
    }
}
impl std::convert::From<Query> for Operation {
    fn from(value: Query) -> Self {
        Self::Query(Box::new(value))
    }
}
