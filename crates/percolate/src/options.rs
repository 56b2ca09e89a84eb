use crate::error::PercolateError;
use derive_more::Display;
use std::str::FromStr;

///
/// PqOption
///
/// The closed set of CALL PQ options. Display renders the caller-facing
/// key; `clause` renders the trailing command fragment.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum PqOption {
    #[display("docs_json")]
    DocsJson,
    #[display("docs")]
    Docs,
    #[display("verbose")]
    Verbose,
    #[display("query")]
    Query,
}

impl PqOption {
    /// Trailing clause fragment emitted after the option value.
    #[must_use]
    pub const fn clause(self) -> &'static str {
        match self {
            Self::DocsJson => "as docs_json",
            Self::Docs => "as docs",
            Self::Verbose => "as verbose",
            Self::Query => "as query",
        }
    }
}

impl FromStr for PqOption {
    type Err = PercolateError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "docs_json" => Ok(Self::DocsJson),
            "docs" => Ok(Self::Docs),
            "verbose" => Ok(Self::Verbose),
            "query" => Ok(Self::Query),
            other => Err(PercolateError::UnknownOption(other.to_string())),
        }
    }
}

///
/// OptionSet
///
/// Insertion-ordered option map for a CALL PQ request, seeded with
/// `docs_json = 1`. Overwriting a key keeps its original slot, so the
/// rendered clause order is first-set order.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionSet {
    entries: Vec<(PqOption, u8)>,
}

impl Default for OptionSet {
    fn default() -> Self {
        Self {
            entries: vec![(PqOption::DocsJson, 1)],
        }
    }
}

impl OptionSet {
    /// Validate and store one option.
    ///
    /// The value is checked before the key: an out-of-range value is
    /// reported as `InvalidOptionValue` even when the key is unknown.
    pub fn set(&mut self, key: &str, value: i64) -> Result<(), PercolateError> {
        let value: u8 = match value {
            0 => 0,
            1 => 1,
            other => {
                return Err(PercolateError::InvalidOptionValue {
                    key: key.to_string(),
                    value: other,
                });
            }
        };
        let option = key.parse::<PqOption>()?;

        match self.entries.iter_mut().find(|(known, _)| *known == option) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((option, value)),
        }

        Ok(())
    }

    /// Current value for an option, if set.
    #[must_use]
    pub fn get(&self, option: PqOption) -> Option<u8> {
        self.entries
            .iter()
            .find(|(known, _)| *known == option)
            .map(|(_, value)| *value)
    }

    /// Whether documents should be rendered as JSON records.
    #[must_use]
    pub fn docs_json(&self) -> bool {
        self.get(PqOption::DocsJson) != Some(0)
    }

    /// Render every entry as `, <value> <clause>` in stored order.
    pub(crate) fn render_clauses(&self) -> String {
        let mut out = String::new();

        for (option, value) in &self.entries {
            out.push_str(&format!(", {value} {}", option.clause()));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_seeded_with_docs_json() {
        let options = OptionSet::default();
        assert_eq!(options.get(PqOption::DocsJson), Some(1));
        assert!(options.docs_json());
        assert_eq!(options.render_clauses(), ", 1 as docs_json");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut options = OptionSet::default();
        assert_eq!(
            options.set("bogus", 1),
            Err(PercolateError::UnknownOption("bogus".to_string()))
        );
    }

    #[test]
    fn out_of_range_value_is_rejected_before_key_lookup() {
        let mut options = OptionSet::default();
        assert_eq!(
            options.set("as verbose", 2),
            Err(PercolateError::InvalidOptionValue {
                key: "as verbose".to_string(),
                value: 2,
            })
        );
    }

    #[test]
    fn overriding_the_seed_keeps_its_slot() {
        let mut options = OptionSet::default();
        options.set("verbose", 1).unwrap();
        options.set("docs_json", 0).unwrap();

        assert!(!options.docs_json());
        assert_eq!(
            options.render_clauses(),
            ", 0 as docs_json, 1 as verbose"
        );
    }

    #[test]
    fn clause_order_is_first_set_order() {
        let mut options = OptionSet::default();
        options.set("query", 1).unwrap();
        options.set("docs", 0).unwrap();

        assert_eq!(
            options.render_clauses(),
            ", 1 as docs_json, 1 as query, 0 as docs"
        );
    }
}
