use crate::operation::OperationKind;
use crate::SelectionNode;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct OperationData {
    pub(crate) name: Option<String>,
    pub(crate) root: SelectionNode,
}
impl OperationData {
    /// The explicit operation name if one was set, otherwise the name of the
    /// root node.
    pub(crate) fn operation_name(&self) -> Option<&str> {
        self.name.as_deref().or_else(|| self.root.name())
    }

    pub(crate) fn to_graphql_string(&self, kind: OperationKind) -> String {
        let keyword = kind.keyword();
        let rendered = match (self.name.as_deref(), self.root.name()) {
            (Some(op_name), Some(root_name)) if op_name != root_name => format!(
                "{keyword} {op_name}{} {{\n{}\n}}",
                self.root.variable_definitions_string(),
                self.root.to_graphql_string(),
            ),

            (Some(op_name), None) => format!(
                "{keyword} {op_name}{} {}",
                self.root.variable_definitions_string(),
                self.root.selection_set_string(),
            ),

            // Either no explicit name was given or it matches the root's name,
            // so the root node supplies the operation header itself.
            (_, _) => format!(
                "{keyword} {}",
                self.root.to_operation_root_string(),
            ),
        };

        log::trace!(
            "Rendered {kind} operation `{}` ({} bytes).",
            self.operation_name().unwrap_or("<anonymous>"),
            rendered.len(),
        );
        rendered
    }
}
