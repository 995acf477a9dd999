use crate::operation::Variables;

/// The JSON body of a GraphQL-over-HTTP POST request:
/// `{"query": ..., "variables": ...}`.
///
/// `variables` (and `operationName`) are omitted when absent rather than
/// serialized as `null`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RequestBody {
    pub(crate) query: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) variables: Option<Variables>,

    #[serde(default, rename = "operationName", skip_serializing_if = "Option::is_none")]
    pub(crate) operation_name: Option<String>,
}
impl RequestBody {
    pub fn new(query: impl Into<String>, variables: Option<Variables>) -> Self {
        Self {
            query: query.into(),
            variables,
            operation_name: None,
        }
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Build the body as a [`serde_json::Value`] object, keeping variables in
    /// the order they were bound.
    pub fn to_json(&self) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        body.insert(
            "query".to_string(),
            serde_json::Value::String(self.query.to_owned()),
        );

        if let Some(variables) = &self.variables {
            body.insert(
                "variables".to_string(),
                serde_json::Value::Object(
                    variables.iter()
                        .map(|(name, value)| (name.to_owned(), value.to_owned()))
                        .collect(),
                ),
            );
        }

        if let Some(operation_name) = &self.operation_name {
            body.insert(
                "operationName".to_string(),
                serde_json::Value::String(operation_name.to_owned()),
            );
        }

        log::trace!(
            "Built request body with {} bound variables.",
            self.variables.as_ref().map_or(0, |variables| variables.len()),
        );
        serde_json::Value::Object(body)
    }

    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    pub fn variables(&self) -> Option<&Variables> {
        self.variables.as_ref()
    }

    pub fn with_operation_name(mut self, operation_name: Option<String>) -> Self {
        self.operation_name = operation_name;
        self
    }
}
