//! WordNet digraph store
//!
//! An immutable, id-indexed directed graph of synsets. Each vertex carries a
//! synset id, a synonym field (one atomic key; may contain whitespace-separated
//! surface forms), a dictionary definition, and an outgoing adjacency list of
//! hypernym edges. Edges point from the specific to the general: if X is a
//! hypernym of Y, the graph stores `Y -> X`.
//!
//! The graph is built once from two text files (`synsets`, `hypernyms`) and is
//! read-only afterwards. Construction validates that the result is *rooted*:
//! at least one vertex has no hypernyms. Vertices refer to their neighbors by
//! synset id, never by owning reference, so the structure contains no
//! ownership cycles.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use loader::{Diagnostic, DiagnosticSink};

// ============================================================================
// Records
// ============================================================================

/// A directed edge to a hypernym vertex.
///
/// Traversal cost is carried per edge but is always 1; the field exists so the
/// wire schema matches the stored schema, not to support weighted paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Synset id of the hypernym.
    pub dest: u32,
    /// Traverse cost to the hypernym. Always 1.
    pub cost: u32,
}

impl Edge {
    pub fn new(dest: u32) -> Self {
        Self { dest, cost: 1 }
    }
}

/// A synset vertex: id, synonym, definition, and its hypernym adjacency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    /// Synset id, unique within the graph.
    pub id: u32,
    /// Synonym field. Treated as one opaque key even when it contains
    /// whitespace-separated alternate forms.
    pub synonym: String,
    /// Dictionary definition, preserved verbatim (may contain commas).
    pub definition: String,
    /// Outgoing hypernym edges, in file order, deduplicated.
    pub adj: Vec<Edge>,
}

impl Vertex {
    fn new(id: u32, synonym: String, definition: String) -> Self {
        Self {
            id,
            synonym,
            definition,
            adj: Vec::new(),
        }
    }

    /// A root is maximally general: it has no hypernyms.
    pub fn is_root(&self) -> bool {
        self.adj.is_empty()
    }

    /// Append an edge unless it already exists. Self-loops are the caller's
    /// problem; the loader drops them before calling this.
    fn add_edge(&mut self, dest: u32) {
        if self.adj.iter().all(|e| e.dest != dest) {
            self.adj.push(Edge::new(dest));
        }
    }
}

// ============================================================================
// Digraph
// ============================================================================

/// Id-indexed vertex store. Immutable after `loader` hands it out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Digraph {
    vertices: HashMap<u32, Vertex>,
}

impl Digraph {
    /// Look up a vertex by synset id.
    pub fn get(&self, id: u32) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Total number of edges across all adjacency lists.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|v| v.adj.len()).sum()
    }

    /// Out-degree of a vertex, or `None` if the id is absent.
    pub fn out_degree(&self, id: u32) -> Option<usize> {
        self.vertices.get(&id).map(|v| v.adj.len())
    }

    /// Iterate over all vertices (unordered).
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Ids of all root vertices (empty adjacency).
    pub fn roots(&self) -> impl Iterator<Item = u32> + '_ {
        self.vertices
            .values()
            .filter(|v| v.is_root())
            .map(|v| v.id)
    }

    /// Weak rootedness check: some vertex has no hypernyms. Reachability of
    /// every vertex to a root is assumed of the input, not verified.
    pub fn is_rooted(&self) -> bool {
        self.vertices.values().any(|v| v.is_root())
    }

    pub(crate) fn insert_vertex(&mut self, id: u32, synonym: String, definition: String) {
        // Duplicate synset ids follow last-write-wins, matching the noun
        // index collision policy one layer up.
        self.vertices
            .insert(id, Vertex::new(id, synonym, definition));
    }

    pub(crate) fn add_edge(&mut self, source: u32, dest: u32) {
        if let Some(v) = self.vertices.get_mut(&source) {
            v.add_edge(dest);
        }
    }
}

// ============================================================================
// Build errors
// ============================================================================

/// Fatal construction failures. Malformed *synset* lines are not here: those
/// are recovered, reported to the [`DiagnosticSink`], and skipped.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to read {path}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A hypernym line referenced a synset id that the synsets file never
    /// defined. Reference integrity is a build invariant.
    #[error("hypernyms line {line}: unknown synset id {id}")]
    DanglingReference { line: usize, id: u32 },

    /// A hypernym token failed to parse as a decimal synset id.
    #[error("hypernyms line {line}: expected a decimal synset id, got {token:?}")]
    MalformedHypernym { line: usize, token: String },

    /// No vertex has an empty adjacency list.
    #[error("digraph is not rooted: every synset has at least one hypernym")]
    NotRooted,
}
