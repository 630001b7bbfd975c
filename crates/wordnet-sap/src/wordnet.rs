//! The WordNet facade: noun-keyed queries over the digraph + SAP engine.
//!
//! Owns the digraph and a `synonym -> synset id` index built in one pass at
//! construction. Duplicate synonyms follow last-write-wins; insertion runs in
//! ascending synset-id order so "last" is the largest id sharing the synonym,
//! which keeps the collision outcome deterministic.

use crate::sap::Sap;
use crate::QueryError;
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;
use wordnet_digraph::{BuildError, Digraph, DiagnosticSink, Vertex};

pub struct WordNet {
    graph: Digraph,
    nouns: HashMap<String, u32>,
}

impl WordNet {
    /// Wrap an already-built digraph. The loader has validated rootedness.
    pub fn new(graph: Digraph) -> Self {
        let nouns = noun_index(&graph);
        Self { graph, nouns }
    }

    /// Build from synsets and hypernyms files.
    pub fn from_files(
        synsets: impl AsRef<Path>,
        hypernyms: impl AsRef<Path>,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Self, BuildError> {
        Ok(Self::new(Digraph::from_files(synsets, hypernyms, sink)?))
    }

    /// Build from in-memory sources.
    pub fn from_readers(
        synsets: impl BufRead,
        hypernyms: impl BufRead,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Self, BuildError> {
        Ok(Self::new(Digraph::from_readers(synsets, hypernyms, sink)?))
    }

    /// Build from string literals.
    pub fn from_strs(
        synsets: &str,
        hypernyms: &str,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Self, BuildError> {
        Ok(Self::new(Digraph::from_strs(synsets, hypernyms, sink)?))
    }

    /// The underlying digraph.
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// All nouns in the index (unordered, restartable).
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.nouns.keys().map(String::as_str)
    }

    pub fn is_noun(&self, word: &str) -> bool {
        self.nouns.contains_key(word)
    }

    /// Synset id a noun resolves to, if it is in the index.
    pub fn id_of(&self, noun: &str) -> Option<u32> {
        self.nouns.get(noun).copied()
    }

    /// Dictionary definition of the synset a noun resolves to.
    pub fn definition_of(&self, noun: &str) -> Option<&str> {
        let id = self.id_of(noun)?;
        self.graph.get(id).map(|v| v.definition.as_str())
    }

    /// Shortest-ancestral-path distance between two nouns.
    pub fn distance(&self, noun_a: &str, noun_b: &str) -> Result<i64, QueryError> {
        let (a, b) = self.resolve_pair(noun_a, noun_b)?;
        Sap::new(&self.graph).length(i64::from(a), i64::from(b))
    }

    /// Synonym field of the lowest common ancestor of two nouns.
    pub fn sap(&self, noun_a: &str, noun_b: &str) -> Result<&str, QueryError> {
        let (a, b) = self.resolve_pair(noun_a, noun_b)?;
        let missing = || QueryError::MissingAncestor {
            a: noun_a.to_string(),
            b: noun_b.to_string(),
        };
        let shortest = Sap::new(&self.graph).shortest(a, b).ok_or_else(missing)?;
        self.graph
            .get(shortest.ancestor)
            .map(|v| v.synonym.as_str())
            .ok_or_else(missing)
    }

    fn resolve_pair(&self, noun_a: &str, noun_b: &str) -> Result<(u32, u32), QueryError> {
        let resolve = |noun: &str| {
            self.id_of(noun)
                .ok_or_else(|| QueryError::NotANoun(noun.to_string()))
        };
        Ok((resolve(noun_a)?, resolve(noun_b)?))
    }
}

fn noun_index(graph: &Digraph) -> HashMap<String, u32> {
    let mut ordered: Vec<&Vertex> = graph.vertices().collect();
    ordered.sort_by_key(|v| v.id);

    let mut nouns = HashMap::with_capacity(ordered.len());
    for vertex in ordered {
        nouns.insert(vertex.synonym.clone(), vertex.id);
    }
    nouns
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYNSETS: &str = "0,a,leaf\n1,b,mid\n2,c,root\n";
    const HYPERNYMS: &str = "0,1\n1,2\n2\n";

    fn wordnet() -> WordNet {
        WordNet::from_strs(SYNSETS, HYPERNYMS, &mut ()).unwrap()
    }

    #[test]
    fn noun_round_trip() {
        let wn = wordnet();
        for noun in ["a", "b", "c"] {
            assert!(wn.is_noun(noun));
        }
        assert_eq!(wn.id_of("b"), Some(1));
        assert!(!wn.is_noun("zebra"));
        assert_eq!(wn.id_of("zebra"), None);

        let mut all: Vec<&str> = wn.nouns().collect();
        all.sort_unstable();
        assert_eq!(all, vec!["a", "b", "c"]);
    }

    #[test]
    fn duplicate_synonym_last_write_wins() {
        let wn = WordNet::from_strs("0,same,x\n1,same,y\n2,root,z\n", "0,2\n1,2\n2\n", &mut ())
            .unwrap();
        assert_eq!(wn.id_of("same"), Some(1));
    }

    #[test]
    fn definition_lookup() {
        let wn = wordnet();
        assert_eq!(wn.definition_of("b"), Some("mid"));
        assert_eq!(wn.definition_of("zebra"), None);
    }

    #[test]
    fn unknown_noun_is_an_error() {
        let wn = wordnet();
        assert_eq!(
            wn.distance("a", "zebra"),
            Err(QueryError::NotANoun("zebra".to_string()))
        );
        assert_eq!(
            wn.sap("zebra", "a"),
            Err(QueryError::NotANoun("zebra".to_string()))
        );
    }

    #[test]
    fn facade_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WordNet>();
    }
}
