/// Similar to [`Operation`](crate::operation::Operation), except without the
/// corresponding document. Useful when representing a group or category of
/// [`Operation`](crate::operation::Operation)s.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum OperationKind {
    Mutation,
    Query,
}
impl OperationKind {
    /// The keyword that opens an operation of this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
