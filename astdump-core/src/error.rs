use thiserror::Error;

/// Rejected node registration. The registry is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("node descriptor `{0}` is already registered")]
    DuplicateNode(String),
    #[error("node `{node}` declares field `{field}` with unknown type `{ty}`")]
    UnknownFieldType {
        node: String,
        field: String,
        ty: String,
    },
    #[error("node `{node}` declares field `{field}` more than once")]
    DuplicateField { node: String, field: String },
    #[error("node `{node}` declares a field with an empty name")]
    EmptyFieldName { node: String },
}

/// Fatal conditions raised while dumping a live tree.
///
/// Every variant other than `Io` means the schema and the node set have
/// drifted apart. Callers report and abort; nothing here is retried.
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("internal error: no printer branch for node tag `{0}`")]
    DispatchMismatch(String),
    #[error("internal error: node `{tag}` field `{field}`: expected {expected}")]
    FieldMismatch {
        tag: String,
        field: String,
        expected: String,
    },
    #[error("internal error: constant `{key}`: {message}")]
    FormatMismatch { key: String, message: String },
    #[error("failed to write diagnostic output: {0}")]
    Io(#[from] std::io::Error),
}

pub type DumpResult = Result<(), DumpError>;
