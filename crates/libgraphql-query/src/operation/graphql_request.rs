use crate::operation::Operation;
use crate::operation::RequestBody;
use crate::operation::Variables;
use std::marker::PhantomData;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, RequestBuildError>;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Bound {}
    impl Sealed for super::Unbound {}
}

/// Marker for the variable-binding state of a [`GraphQLRequest`].
pub trait VariablesState: sealed::Sealed {}

/// A [`GraphQLRequest`] with at least one variable bound. Its request body
/// always carries a `variables` object.
#[derive(Clone, Debug, PartialEq)]
pub struct Bound;
impl VariablesState for Bound {}

/// A [`GraphQLRequest`] with no variables bound. Its request body never
/// carries a `variables` key.
#[derive(Clone, Debug, PartialEq)]
pub struct Unbound;
impl VariablesState for Unbound {}

/// An [`Operation`] paired with the variable values to transmit alongside it.
///
/// Binding a variable moves the request from [`Unbound`] to [`Bound`]. Each
/// binding is checked against the variables declared on the operation's root
/// and fails fast with a [`RequestBuildError`].
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLRequest<S: VariablesState = Unbound> {
    include_operation_name: bool,
    operation: Operation,
    state: PhantomData<S>,
    variables: Variables,
}
impl GraphQLRequest<Unbound> {
    pub fn new(operation: impl Into<Operation>) -> Self {
        Self {
            include_operation_name: false,
            operation: operation.into(),
            state: PhantomData,
            variables: Variables::new(),
        }
    }

    /// Produce a `{"query": ...}` body.
    pub fn to_request_body(&self) -> RequestBody {
        self.request_body(None)
    }
}
impl GraphQLRequest<Bound> {
    /// Produce a `{"query": ..., "variables": {...}}` body.
    pub fn to_request_body(&self) -> RequestBody {
        self.request_body(Some(self.variables.to_owned()))
    }

    /// The bound variable values, in the order they were bound.
    pub fn variables(&self) -> &Variables {
        &self.variables
    }
}
impl<S: VariablesState> GraphQLRequest<S> {
    /// Bind `value` to the declared variable `name`. A leading `$` on `name`
    /// is ignored. Re-binding a variable replaces its value in place.
    pub fn bind_variable(
        self,
        name: impl AsRef<str>,
        value: impl serde::Serialize,
    ) -> Result<GraphQLRequest<Bound>> {
        let variable_name = name.as_ref().trim_start_matches('$');
        self.check_declared(variable_name)?;

        let value = serde_json::to_value(value).map_err(|err| {
            RequestBuildError::VariableSerializationError {
                source: Arc::new(err),
                variable_name: variable_name.to_string(),
            }
        })?;

        let mut variables = self.variables;
        variables.insert(variable_name.to_string(), value);
        Ok(GraphQLRequest {
            include_operation_name: self.include_operation_name,
            operation: self.operation,
            state: PhantomData,
            variables,
        })
    }

    /// Bind several variables at once, in iteration order.
    ///
    /// The operation must declare variables even when `variables` is empty;
    /// an empty iterator yields a request whose body carries `"variables": {}`.
    pub fn bind_variables<K, V>(
        self,
        variables: impl IntoIterator<Item = (K, V)>,
    ) -> Result<GraphQLRequest<Bound>>
    where
        K: AsRef<str>,
        V: serde::Serialize,
    {
        let variables: Vec<(K, V)> = variables.into_iter().collect();
        if self.operation.variable_definitions().is_empty() {
            let variable_name =
                variables.first()
                    .map_or("", |(name, _)| name.as_ref())
                    .trim_start_matches('$');
            return Err(self.no_variable_definitions_error(variable_name));
        }

        let mut request = GraphQLRequest {
            include_operation_name: self.include_operation_name,
            operation: self.operation,
            state: PhantomData,
            variables: self.variables,
        };
        for (name, value) in variables {
            request = request.bind_variable(name, value)?;
        }
        Ok(request)
    }

    /// Emit an `operationName` key in the request body when the operation is
    /// named.
    pub fn include_operation_name(mut self, include: bool) -> Self {
        self.include_operation_name = include;
        self
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    fn check_declared(&self, variable_name: &str) -> Result<()> {
        let definitions = self.operation.variable_definitions();
        if definitions.is_empty() {
            return Err(self.no_variable_definitions_error(variable_name));
        }

        if !definitions.iter().any(|def| def.name() == variable_name) {
            log::debug!(
                "Rejected binding for undeclared variable `${variable_name}`.",
            );
            return Err(RequestBuildError::UndefinedVariable {
                operation_name: self.operation.name().map(str::to_string),
                variable_name: variable_name.to_string(),
            });
        }

        Ok(())
    }

    fn no_variable_definitions_error(
        &self,
        variable_name: &str,
    ) -> RequestBuildError {
        log::debug!(
            "Rejected variable binding on operation `{}`, which declares no \
            variables.",
            self.operation.name().unwrap_or("<anonymous>"),
        );
        RequestBuildError::NoVariableDefinitions {
            operation_name: self.operation.name().map(str::to_string),
            variable_name: variable_name.to_string(),
        }
    }

    fn request_body(&self, variables: Option<Variables>) -> RequestBody {
        let operation_name =
            if self.include_operation_name {
                self.operation.name().map(str::to_string)
            } else {
                None
            };

        self.operation
            .to_request_body(variables)
            .with_operation_name(operation_name)
    }
}

#[derive(Clone, Debug, Error)]
pub enum RequestBuildError {
    #[error(
        "Attempted to bind variable `{variable_name}` on an operation that \
        declares no variables",
    )]
    NoVariableDefinitions {
        operation_name: Option<String>,
        variable_name: String,
    },

    #[error("Variable `${variable_name}` is not declared on this operation")]
    UndefinedVariable {
        operation_name: Option<String>,
        variable_name: String,
    },

    #[error("Failure while serializing the value bound to `${variable_name}`: {source}")]
    VariableSerializationError {
        source: Arc<serde_json::Error>,
        variable_name: String,
    },
}
