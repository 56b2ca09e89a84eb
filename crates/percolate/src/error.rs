use thiserror::Error as ThisError;

///
/// PercolateError
///
/// Validation failures raised while configuring or assembling a
/// percolate request. Every variant is raised synchronously at the
/// offending call; nothing is retried or recovered internally.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PercolateError {
    #[error("index must be a non-empty string")]
    EmptyIndex,

    #[error("only one filter is supported: '{0}' splits into multiple segments")]
    MultipleFilters(String),

    #[error("unknown option '{0}'; expected one of docs_json, docs, verbose, query")]
    UnknownOption(String),

    #[error("option '{key}' must be 0 or 1, got {value}")]
    InvalidOptionValue { key: String, value: i64 },

    #[error("no documents were set")]
    EmptyDocuments,

    #[error("documents shape does not fit the selected encoding mode")]
    DocumentsShapeMismatch,

    #[error("docs_json mode requires a record or a list of records")]
    NonAssociativeDocuments,

    #[error("insert mode requires a query text")]
    EmptyQuery,
}

///
/// ExecuteError
///
/// Failure surface of `Percolate::execute`: either the request could
/// not be assembled (validation), or the external statement executor
/// failed after dispatch. `E` is the executor's error type and stays
/// opaque to this crate.
///

#[derive(Debug, ThisError)]
pub enum ExecuteError<E> {
    #[error("{0}")]
    Build(#[from] PercolateError),

    #[error("statement execution failed: {0}")]
    Execute(E),
}
