use crate::ArgumentValue;
use crate::VariableDefinition;

#[derive(Clone, Copy, Debug, PartialEq)]
enum RenderPosition {
    Field,
    OperationRoot,
}

/// A GraphQL field selection, or the (possibly anonymous) root of an
/// operation.
///
/// Nodes are values: every `with_*` method consumes the node and returns the
/// modified one. Trees are composed bottom-up and rendered with
/// [`SelectionNode::to_graphql_string()`] or, once wrapped in an operation,
/// as part of the full document.
///
/// Nothing is validated. Arguments referencing undeclared variables, duplicate
/// argument names or declarations attached to a nested field all render as
/// written and are left for the server to reject.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SelectionNode {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: Vec<(String, ArgumentValue)>,
    pub(crate) children: Vec<SelectionNode>,
    pub(crate) name: Option<String>,
    pub(crate) variable_definitions: Vec<VariableDefinition>,
}
impl SelectionNode {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The arguments applied to this field, in the order they were added.
    pub fn arguments(&self) -> &[(String, ArgumentValue)] {
        &self.arguments
    }

    pub fn children(&self) -> &[SelectionNode] {
        &self.children
    }

    /// A leaf field with no alias, arguments or sub-selections.
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Whether this node renders without a braced sub-selection.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// A named root (or field) with the given sub-selections.
    pub fn named(
        name: impl Into<String>,
        children: impl IntoIterator<Item = SelectionNode>,
    ) -> Self {
        Self::field(name).with_selections(children)
    }

    /// An anonymous root grouping the given sub-selections.
    pub fn object(children: impl IntoIterator<Item = SelectionNode>) -> Self {
        Self::default().with_selections(children)
    }

    /// If an alias was specified for this selection, return the alias.
    /// Otherwise return the name of the field.
    pub fn selected_name(&self) -> Option<&str> {
        self.alias().or_else(|| self.name())
    }

    /// Render this node as a field selection.
    ///
    /// Anonymous nodes render their children joined by newlines with no
    /// surrounding braces.
    pub fn to_graphql_string(&self) -> String {
        self.render(RenderPosition::Field)
    }

    pub fn variable_definitions(&self) -> &[VariableDefinition] {
        &self.variable_definitions
    }

    /// Set (or replace) the alias for this field.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Add an argument after any previously added arguments.
    pub fn with_argument(
        mut self,
        name: impl Into<String>,
        value: impl Into<ArgumentValue>,
    ) -> Self {
        self.arguments.push((name.into(), value.into()));
        self
    }

    pub fn with_arguments<K, V>(
        mut self,
        arguments: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<ArgumentValue>,
    {
        self.arguments.extend(
            arguments.into_iter().map(|(name, value)| (name.into(), value.into())),
        );
        self
    }

    /// Add a sub-selection after any previously added sub-selections.
    pub fn with_selection(mut self, child: SelectionNode) -> Self {
        self.children.push(child);
        self
    }

    /// Add sub-selections after any previously added sub-selections.
    pub fn with_selections(
        mut self,
        children: impl IntoIterator<Item = SelectionNode>,
    ) -> Self {
        self.children.extend(children);
        self
    }

    /// Declare `$name: Type` variables for the operation rooted at this node.
    pub fn with_variable_declarations<N, T>(
        mut self,
        declarations: impl IntoIterator<Item = (N, T)>,
    ) -> Self
    where
        N: AsRef<str>,
        T: Into<String>,
    {
        self.variable_definitions.extend(
            declarations.into_iter().map(VariableDefinition::from),
        );
        self
    }

    pub fn with_variable_definition(
        mut self,
        definition: VariableDefinition,
    ) -> Self {
        self.variable_definitions.push(definition);
        self
    }

    /// Render this node as the root of an operation: the alias is dropped and
    /// declared variables take the place of call-site arguments.
    pub(crate) fn to_operation_root_string(&self) -> String {
        self.render(RenderPosition::OperationRoot)
    }

    pub(crate) fn variable_definitions_string(&self) -> String {
        if self.variable_definitions.is_empty() {
            return String::new();
        }

        format!(
            "({})",
            self.variable_definitions.iter()
                .map(VariableDefinition::to_graphql_string)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    pub(crate) fn selection_set_string(&self) -> String {
        format!("{{\n{}\n}}", self.children_string())
    }

    fn arguments_string(&self) -> String {
        if self.arguments.is_empty() {
            return String::new();
        }

        format!(
            "({})",
            self.arguments.iter()
                .map(|(name, value)| {
                    format!("{name}: {}", value.to_graphql_string())
                })
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    fn children_string(&self) -> String {
        self.children.iter()
            .map(|child| child.render(RenderPosition::Field))
            .filter(|rendered| !rendered.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(&self, position: RenderPosition) -> String {
        let Some(name) = self.name.as_deref() else {
            return match position {
                RenderPosition::Field => self.children_string(),
                RenderPosition::OperationRoot
                    if self.variable_definitions.is_empty()
                    => self.selection_set_string(),
                RenderPosition::OperationRoot => format!(
                    "{} {}",
                    self.variable_definitions_string(),
                    self.selection_set_string(),
                ),
            };
        };

        let mut rendered = String::new();
        if position == RenderPosition::Field
            && let Some(alias) = self.alias.as_deref() {
            rendered.push_str(alias);
            rendered.push(':');
        }
        rendered.push_str(name);

        let parameters =
            if position == RenderPosition::OperationRoot
                && !self.variable_definitions.is_empty() {
                self.variable_definitions_string()
            } else {
                self.arguments_string()
            };
        rendered.push_str(&parameters);

        if !self.children.is_empty() {
            rendered.push(' ');
            rendered.push_str(&self.selection_set_string());
        }

        rendered
    }
}
impl std::fmt::Display for SelectionNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql_string())
    }
}
