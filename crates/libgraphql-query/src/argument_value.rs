/// A GraphQL input value in argument (or default-value) position.
///
/// Each variant renders to its GraphQL literal form through
/// [`ArgumentValue::to_graphql_string()`]. Rendering is a pure function of the
/// value: nothing is validated against a schema.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ArgumentValue {
    Bool(bool),
    Float(f64),
    Int(i64),
    List(Vec<ArgumentValue>),
    Null,
    /// Input object literal. Entries keep their insertion order and duplicate
    /// keys are rendered as given.
    Object(Vec<(String, ArgumentValue)>),
    /// String literal. The contents are written between double quotes
    /// verbatim; see [`ArgumentValue::escaped_string()`] for an escaping
    /// constructor.
    String(String),
    /// A bare token such as an enum value (`LOFT`) or a type (`INT!`).
    Type(String),
    /// A variable reference, stored without its leading `$`.
    VarRef(String),
}
impl ArgumentValue {
    /// Build a [`ArgumentValue::String`] whose contents are escaped according
    /// to the GraphQL `StringValue` grammar (quotes, backslashes and control
    /// characters).
    pub fn escaped_string(value: impl AsRef<str>) -> Self {
        Self::String(escape_string_contents(value.as_ref()))
    }

    pub fn list<T: Into<ArgumentValue>>(
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<ArgumentValue>,
    {
        Self::Object(
            entries.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Build a [`ArgumentValue::String`] without escaping its contents.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn to_graphql_string(&self) -> String {
        match self {
            Self::Bool(value) => value.to_string(),

            Self::Float(value) => float_to_graphql_string(*value),

            Self::Int(value) => value.to_string(),

            Self::List(values) => format!(
                "[{}]",
                values.iter()
                    .map(|value| value.to_graphql_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),

            Self::Null => "null".to_string(),

            Self::Object(entries) => format!(
                "{{{}}}",
                entries.iter()
                    .map(|(key, value)| {
                        format!("{key}: {}", value.to_graphql_string())
                    })
                    .collect::<Vec<_>>()
                    .join(", "),
            ),

            Self::String(value) => format!("\"{value}\""),

            Self::Type(token) => token.to_owned(),

            Self::VarRef(name) => format!("${name}"),
        }
    }

    pub fn type_token(token: impl Into<String>) -> Self {
        Self::Type(token.into())
    }

    /// Build a [`ArgumentValue::VarRef`]. Any leading `$` on `name` is
    /// dropped so the rendered reference always carries exactly one.
    pub fn variable(name: impl AsRef<str>) -> Self {
        Self::VarRef(name.as_ref().trim_start_matches('$').to_string())
    }
}
impl std::fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql_string())
    }
}

impl std::convert::From<bool> for ArgumentValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl std::convert::From<f64> for ArgumentValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<i32> for ArgumentValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for ArgumentValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<u32> for ArgumentValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for ArgumentValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl<T: Into<ArgumentValue>> std::convert::From<Option<T>> for ArgumentValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
impl<T: Into<ArgumentValue>> std::convert::From<Vec<T>> for ArgumentValue {
    fn from(values: Vec<T>) -> Self {
        Self::list(values)
    }
}

// Rust's `f64` formatting never switches to exponent notation and produces
// the shortest string that round-trips. GraphQL has no literal for NaN or the
// infinities.
fn float_to_graphql_string(value: f64) -> String {
    if !value.is_finite() {
        return "null".to_string();
    }

    let rendered = value.to_string();
    if rendered.contains('.') {
        rendered
    } else {
        format!("{rendered}.0")
    }
}

fn escape_string_contents(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\u{08}' => escaped.push_str("\\b"),
            '\u{0C}' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            ch if ch.is_control() =>
                escaped.push_str(&format!("\\u{:04X}", ch as u32)),
            ch => escaped.push(ch),
        }
    }
    escaped
}
