use serde::Serialize;

///
/// InsertFields
///
/// Ordered field map for a stored-query INSERT. `tags` and `filters`
/// are omitted from the serialized map when unset.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct InsertFields {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<String>,
}

impl InsertFields {
    /// Field name/value pairs in wire order, skipping unset fields.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![("query", self.query.as_str())];

        if let Some(tags) = &self.tags {
            pairs.push(("tags", tags.as_str()));
        }
        if let Some(filters) = &self.filters {
            pairs.push(("filters", filters.as_str()));
        }

        pairs
    }
}

///
/// StatementBuilder
///
/// Narrow contract the percolate builder needs from the generic
/// statement executor. Implementations own connection lifecycle,
/// transport errors, and result decoding; all of that stays opaque
/// here.
///

pub trait StatementBuilder: Sized {
    type ResultSet;
    type Error;

    /// Begin an INSERT statement.
    #[must_use]
    fn insert(self) -> Self;

    /// Target index for the statement.
    #[must_use]
    fn into_index(self, index: &str) -> Self;

    /// Attach the field map of an INSERT statement.
    #[must_use]
    fn set(self, fields: InsertFields) -> Self;

    /// Use a literal command text instead of a structured statement.
    #[must_use]
    fn query(self, text: &str) -> Self;

    /// Send the statement and return the backend's result set.
    fn execute(self) -> Result<Self::ResultSet, Self::Error>;
}
