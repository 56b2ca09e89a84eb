//! Percolate-query command builder: registers stored queries (INSERT)
//! and matches incoming documents against them (CALL PQ), validating,
//! escaping, and encoding caller input before anything reaches the
//! wire.
//!
//! The crate deliberately stops at the statement boundary: connection
//! lifecycle, transport, and result decoding live behind the
//! [`statement::StatementBuilder`] contract.

pub mod builder;
pub mod docs;
pub mod error;
pub mod escape;
pub mod options;
pub mod statement;

// re-exports
pub use builder::{Mode, Percolate, TagSpec};
pub use docs::{Docs, Record};
pub use error::{ExecuteError, PercolateError};
pub use options::{OptionSet, PqOption};
pub use statement::{InsertFields, StatementBuilder};

///
/// Prelude
///
/// Prelude contains only domain vocabulary; errors and the escaping
/// helpers are imported explicitly where needed.
///

pub mod prelude {
    pub use crate::{
        builder::{Percolate, TagSpec},
        docs::Docs,
        options::PqOption,
        statement::StatementBuilder,
    };
}
