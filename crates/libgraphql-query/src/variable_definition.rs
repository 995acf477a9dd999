use crate::ArgumentValue;

/// A `$name: Type` declaration in an operation header.
///
/// The type annotation is kept as GraphQL type text (`ID!`, `[String!]`, ...)
/// and written out verbatim.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VariableDefinition {
    pub(crate) default_value: Option<ArgumentValue>,
    pub(crate) name: String,
    pub(crate) type_annotation: String,
}
impl VariableDefinition {
    pub fn default_value(&self) -> Option<&ArgumentValue> {
        self.default_value.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Any leading `$` on `name` is dropped; it is added back when rendering.
    pub fn new(
        name: impl AsRef<str>,
        type_annotation: impl Into<String>,
    ) -> Self {
        Self {
            default_value: None,
            name: name.as_ref().trim_start_matches('$').to_string(),
            type_annotation: type_annotation.into(),
        }
    }

    pub fn to_graphql_string(&self) -> String {
        match &self.default_value {
            Some(default_value) => format!(
                "${}: {} = {}",
                self.name,
                self.type_annotation,
                default_value.to_graphql_string(),
            ),
            None => format!("${}: {}", self.name, self.type_annotation),
        }
    }

    pub fn type_annotation(&self) -> &str {
        self.type_annotation.as_str()
    }

    pub fn with_default_value(
        mut self,
        default_value: impl Into<ArgumentValue>,
    ) -> Self {
        self.default_value = Some(default_value.into());
        self
    }
}
impl<N: AsRef<str>, T: Into<String>> std::convert::From<(N, T)> for VariableDefinition {
    fn from((name, type_annotation): (N, T)) -> Self {
        Self::new(name, type_annotation)
    }
}
