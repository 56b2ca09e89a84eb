
use crate::{
    docs::Docs,
    error::{ExecuteError, PercolateError},
    escape::escape,
    options::OptionSet,
    statement::{InsertFields, StatementBuilder},
};
use derive_more::Display;
use serde_json::Value;

///
/// Mode
///
/// Insert : register a stored query against the index
/// Call   : match documents against the stored queries (CALL PQ)
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum Mode {
    Insert,
    #[default]
    Call,
}

///
/// TagSpec
///
/// Tag input accepted by `set_tags`. A list is escaped per element and
/// joined with `,`; a single string is escaped as one unit, so commas
/// embedded in it are kept verbatim. The asymmetry is deliberate and
/// matches the wire protocol's historical behavior.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TagSpec {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for TagSpec {
    fn from(tags: &str) -> Self {
        Self::One(tags.to_string())
    }
}

impl From<String> for TagSpec {
    fn from(tags: String) -> Self {
        Self::One(tags)
    }
}

impl From<Vec<String>> for TagSpec {
    fn from(tags: Vec<String>) -> Self {
        Self::Many(tags)
    }
}

impl From<&[&str]> for TagSpec {
    fn from(tags: &[&str]) -> Self {
        Self::Many(tags.iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TagSpec {
    fn from(tags: [&str; N]) -> Self {
        Self::Many(tags.iter().map(ToString::to_string).collect())
    }
}

///
/// Percolate
///
/// Mutable request state for one percolate command. Configure, call
/// `execute` once, and the instance comes back reset for the next
/// unrelated request. Not safe for concurrent use; intended usage is
/// strictly sequential.
///
/// Assembly is split into two pure functions, `call_command` and
/// `insert_fields`, so the injection-relevant encoding stays testable
/// without a live connection.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Percolate {
    mode: Mode,
    index: String,
    query_text: Option<String>,
    tags: String,
    filter: Option<String>,
    docs: Option<Docs>,
    options: OptionSet,
}

impl Percolate {
    /// Fresh builder: call mode, `docs_json = 1`, everything else empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Target index. Rejects empty or blank names.
    pub fn set_index(&mut self, index: impl Into<String>) -> Result<(), PercolateError> {
        let index = index.into();
        if index.trim().is_empty() {
            return Err(PercolateError::EmptyIndex);
        }

        self.index = index;
        Ok(())
    }

    /// Switch to insert mode and store the query text, escaped unless
    /// `no_escape` is set.
    pub fn insert(&mut self, text: &str, no_escape: bool) {
        self.mode = Mode::Insert;
        self.query_text = Some(if no_escape {
            text.to_string()
        } else {
            escape(text)
        });
    }

    /// Switch to call mode (the default).
    pub fn call_pq(&mut self) {
        self.mode = Mode::Call;
    }

    /// Store tags, replacing any previous value. See `TagSpec` for the
    /// one-vs-many escaping asymmetry.
    pub fn set_tags(&mut self, tags: impl Into<TagSpec>) {
        self.tags = match tags.into() {
            TagSpec::One(tags) => escape(&tags),
            TagSpec::Many(tags) => {
                let escaped: Vec<String> = tags.iter().map(|tag| escape(tag)).collect();
                escaped.join(",")
            }
        };
    }

    /// Store the filter expression, replacing any previous value.
    ///
    /// A naive split on `,` guards against multiple expressions; the
    /// caller must supply a filter free of unescaped commas. An escaped
    /// comma still counts as a split point.
    pub fn set_filter(&mut self, filter: &str) -> Result<(), PercolateError> {
        let segments = filter
            .split(',')
            .filter(|segment| !segment.trim().is_empty())
            .count();
        if segments > 1 {
            return Err(PercolateError::MultipleFilters(filter.to_string()));
        }

        self.filter = Some(filter.to_string());
        Ok(())
    }

    /// Store documents from a typed shape.
    pub fn set_docs(&mut self, docs: impl Into<Docs>) {
        self.docs = Some(docs.into());
    }

    /// Store documents from an untyped JSON value, inferring the shape.
    pub fn set_docs_value(&mut self, value: Value) -> Result<(), PercolateError> {
        self.docs = Some(Docs::from_value(value)?);
        Ok(())
    }

    /// Validate and store one option.
    pub fn set_option(&mut self, key: &str, value: i64) -> Result<(), PercolateError> {
        self.options.set(key, value)
    }

    /// Apply `set_option` per entry, in iteration order.
    ///
    /// Not atomic: entries before a failing entry stay applied.
    pub fn set_options<'a, I>(&mut self, options: I) -> Result<(), PercolateError>
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        for (key, value) in options {
            self.set_option(key, value)?;
        }

        Ok(())
    }

    /// Render the documents literal for the active `docs_json` mode.
    pub fn render_documents(&self) -> Result<String, PercolateError> {
        let docs = self.docs.as_ref().ok_or(PercolateError::EmptyDocuments)?;

        docs.render(self.options.docs_json())
    }

    /// Assemble the call-mode command text.
    ///
    /// Grammar: `CALL PQ ('<index>', <documents>[, <value> <clause>]*)`.
    pub fn call_command(&self) -> Result<String, PercolateError> {
        if self.index.is_empty() {
            return Err(PercolateError::EmptyIndex);
        }
        let documents = self.render_documents()?;

        Ok(format!(
            "CALL PQ ('{}', {documents}{})",
            self.index,
            self.options.render_clauses()
        ))
    }

    /// Assemble the insert-mode field map.
    pub fn insert_fields(&self) -> Result<InsertFields, PercolateError> {
        if self.index.is_empty() {
            return Err(PercolateError::EmptyIndex);
        }
        let query = self
            .query_text
            .clone()
            .ok_or(PercolateError::EmptyQuery)?;

        Ok(InsertFields {
            query,
            tags: (!self.tags.is_empty()).then(|| self.tags.clone()),
            filters: self.filter.clone(),
        })
    }

    /// Assemble the request, dispatch it through the statement
    /// contract, and reset.
    ///
    /// The reset is unconditional with respect to the executor outcome:
    /// a failed remote call still clears state. A validation failure
    /// during assembly returns before dispatch and leaves state intact.
    pub fn execute<S: StatementBuilder>(
        &mut self,
        statement: S,
    ) -> Result<S::ResultSet, ExecuteError<S::Error>> {
        let outcome = match self.mode {
            Mode::Insert => {
                let fields = self.insert_fields()?;
                statement
                    .insert()
                    .into_index(&self.index)
                    .set(fields)
                    .execute()
            }
            Mode::Call => {
                let text = self.call_command()?;
                statement.query(&text).execute()
            }
        };

        self.reset();
        outcome.map_err(ExecuteError::Execute)
    }

    /// Restore the documented defaults: call mode, `docs_json = 1`,
    /// everything else cleared.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // state accessors

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn index(&self) -> &str {
        &self.index
    }

    #[must_use]
    pub fn query_text(&self) -> Option<&str> {
        self.query_text.as_deref()
    }

    #[must_use]
    pub fn tags(&self) -> &str {
        &self.tags
    }

    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    #[must_use]
    pub const fn docs(&self) -> Option<&Docs> {
        self.docs.as_ref()
    }

    #[must_use]
    pub const fn options(&self) -> &OptionSet {
        &self.options
    }
}
