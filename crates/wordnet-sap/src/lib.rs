//! Shortest ancestral path (SAP) queries over a WordNet digraph.
//!
//! Two surfaces:
//!
//! - [`Sap`]: the id-level engine. Borrows a [`wordnet_digraph::Digraph`]
//!   immutably for the duration of a query and answers `length` / `ancestor`
//!   for pairs of synset ids.
//! - [`WordNet`]: the noun-level facade. Owns the digraph plus a noun index
//!   and answers `distance` / `sap` for pairs of noun strings.
//!
//! After construction everything here is read-only: queries allocate only
//! per-call scratch and are safe to issue from any number of threads.

pub mod sap;
pub mod wordnet;

pub use sap::{Sap, Shortest};
pub use wordnet::WordNet;

/// Query-time failures. Build-time failures live in
/// [`wordnet_digraph::BuildError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// `length` / `ancestor` called with a negative id.
    #[error("vertex id must be non-negative, got {0}")]
    NegativeId(i64),

    /// `distance` / `sap` called with a string the noun index does not know.
    #[error("not a WordNet noun: {0:?}")]
    NotANoun(String),

    /// Two known nouns with no common ancestor. A rooted digraph cannot
    /// produce this for a single connected component; seeing it means the
    /// input violated the rootedness assumption beyond the weak check.
    #[error("no common ancestor for nouns {a:?} and {b:?} in a rooted digraph")]
    MissingAncestor { a: String, b: String },
}
