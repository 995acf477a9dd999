use crate::operation::OperationKind;
use crate::operation::RequestBody;
use crate::operation::Variables;
use crate::SelectionNode;
use crate::VariableDefinition;

// Implements the set of things shared by each kind of operation.
pub(super) trait OperationTrait where Self: Sized {
    fn kind(&self) -> OperationKind;
    fn name(&self) -> Option<&str>;
    fn root(&self) -> &SelectionNode;
    fn to_graphql_string(&self) -> String;
    fn to_request_body(&self, variables: Option<Variables>) -> RequestBody;
    fn variable_definitions(&self) -> &[VariableDefinition];
}
