use crate::error::PercolateError;
use serde::Serialize;
use serde_json::{Map, Value};

/// JSON record with caller-ordered fields.
pub type Record = Map<String, Value>;

///
/// Docs
///
/// Document input for a CALL PQ request. The active shape is inferred
/// from the value's structure, never declared by the caller; see
/// `Docs::from_value`. Which shapes are legal depends on the encoding
/// mode chosen at render time (`docs_json` on or off).
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Docs {
    /// A single plain-text document.
    Text(String),
    /// A list of plain-text documents.
    TextList(Vec<String>),
    /// A single JSON record.
    Record(Record),
    /// A list of JSON records.
    RecordList(Vec<Record>),
}

impl Docs {
    /// Infer the document shape from an untyped JSON value.
    ///
    /// Scalars become `Text`, objects `Record`, arrays either
    /// `RecordList` (first element is an object) or `TextList`
    /// (all-scalar elements). Anything else has no percolate shape.
    pub fn from_value(value: Value) -> Result<Self, PercolateError> {
        match value {
            Value::String(text) => Ok(Self::Text(text)),
            Value::Number(num) => Ok(Self::Text(num.to_string())),
            Value::Bool(flag) => Ok(Self::Text(flag.to_string())),
            Value::Null => Err(PercolateError::DocumentsShapeMismatch),
            Value::Object(record) => Ok(Self::Record(record)),
            Value::Array(items) => Self::from_items(items),
        }
    }

    fn from_items(items: Vec<Value>) -> Result<Self, PercolateError> {
        // Only the first element decides between record-list and
        // plain-list classification.
        if matches!(items.first(), Some(Value::Object(_))) {
            let records = items
                .into_iter()
                .map(|item| match item {
                    Value::Object(record) => Ok(record),
                    _ => Err(PercolateError::DocumentsShapeMismatch),
                })
                .collect::<Result<Vec<_>, _>>()?;

            return Ok(Self::RecordList(records));
        }

        let texts = items
            .into_iter()
            .map(|item| match item {
                Value::String(text) => Ok(text),
                Value::Number(num) => Ok(num.to_string()),
                Value::Bool(flag) => Ok(flag.to_string()),
                Value::Null | Value::Array(_) | Value::Object(_) => {
                    Err(PercolateError::DocumentsShapeMismatch)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::TextList(texts))
    }

    /// Render the documents literal for the chosen encoding mode.
    ///
    /// JSON mode (`docs_json` on) requires a record or list of records
    /// and emits one single-quoted JSON literal. Plain mode emits a
    /// single-quoted scalar or a parenthesized quoted list; content is
    /// not escaped, the caller owns embedded-character safety.
    pub(crate) fn render(&self, docs_json: bool) -> Result<String, PercolateError> {
        if docs_json {
            return match self {
                Self::Text(_) => Err(PercolateError::DocumentsShapeMismatch),
                Self::TextList(_) => Err(PercolateError::NonAssociativeDocuments),
                Self::Record(record) => {
                    Ok(format!("'{}'", Value::Object(record.clone())))
                }
                Self::RecordList(records) => {
                    let array = Value::Array(
                        records.iter().cloned().map(Value::Object).collect(),
                    );
                    Ok(format!("'{array}'"))
                }
            };
        }

        match self {
            Self::Text(text) => Ok(format!("'{text}'")),
            Self::TextList(texts) => {
                let quoted: Vec<String> =
                    texts.iter().map(|text| format!("'{text}'")).collect();
                Ok(format!("({})", quoted.join(", ")))
            }
            Self::Record(_) | Self::RecordList(_) => {
                Err(PercolateError::DocumentsShapeMismatch)
            }
        }
    }
}

impl From<&str> for Docs {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Docs {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for Docs {
    fn from(texts: Vec<String>) -> Self {
        Self::TextList(texts)
    }
}

impl From<&[&str]> for Docs {
    fn from(texts: &[&str]) -> Self {
        Self::TextList(texts.iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Docs {
    fn from(texts: [&str; N]) -> Self {
        Self::TextList(texts.iter().map(ToString::to_string).collect())
    }
}

impl From<Record> for Docs {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<Vec<Record>> for Docs {
    fn from(records: Vec<Record>) -> Self {
        Self::RecordList(records)
    }
}
