//! Integration tests for the complete WordNet SAP pipeline
//!
//! These tests verify end-to-end functionality across crates:
//! - input files → digraph loader → root validation
//! - digraph → SAP engine → length/ancestor
//! - digraph → noun index → facade queries
//!
//! Run with: cargo test --test integration_tests

use std::io::Write;
use tempfile::tempdir;
use wordnet_digraph::{BuildError, Diagnostic, Digraph};
use wordnet_sap::{QueryError, Sap, WordNet};

// A small but non-trivial taxonomy: two branches converging onto a single
// root, plus one noun whose definition carries embedded commas.
const SYNSETS: &str = "\
0,thing,anything at all
1,object,a physical thing
2,idea,a mental thing
3,artifact,an object made by hand
4,tool,an artifact, typically hand-held, used to make work easier
5,hammer,a tool for driving nails
6,plan,an idea for future action
";
const HYPERNYMS: &str = "\
1,0
2,0
3,1
4,3
5,4
6,2
0
";

fn write_inputs(dir: &std::path::Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let synsets = dir.join("synsets.txt");
    let hypernyms = dir.join("hypernyms.txt");
    std::fs::File::create(&synsets)
        .unwrap()
        .write_all(SYNSETS.as_bytes())
        .unwrap();
    std::fs::File::create(&hypernyms)
        .unwrap()
        .write_all(HYPERNYMS.as_bytes())
        .unwrap();
    (synsets, hypernyms)
}

// ============================================================================
// Files → digraph
// ============================================================================

#[test]
fn test_files_to_digraph() {
    let dir = tempdir().unwrap();
    let (synsets, hypernyms) = write_inputs(dir.path());

    let graph = Digraph::from_files(&synsets, &hypernyms, &mut ()).unwrap();
    assert_eq!(graph.len(), 7);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.roots().collect::<Vec<_>>(), vec![0]);
    assert_eq!(
        graph.get(4).unwrap().definition,
        "an artifact, typically hand-held, used to make work easier"
    );
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempdir().unwrap();
    let (synsets, _) = write_inputs(dir.path());
    let err = Digraph::from_files(&synsets, dir.path().join("absent.txt"), &mut ()).unwrap_err();
    assert!(matches!(err, BuildError::Io { .. }));
}

// ============================================================================
// Digraph → SAP engine
// ============================================================================

#[test]
fn test_sap_queries_across_the_taxonomy() {
    let graph = Digraph::from_strs(SYNSETS, HYPERNYMS, &mut ()).unwrap();
    let sap = Sap::new(&graph);

    // hammer -> tool -> artifact -> object -> thing; plan -> idea -> thing.
    assert_eq!(sap.length(5, 6).unwrap(), 6);
    assert_eq!(sap.ancestor(5, 6).unwrap(), 0);

    // artifact is an ancestor of hammer: the ancestor is artifact itself.
    assert_eq!(sap.length(5, 3).unwrap(), 2);
    assert_eq!(sap.ancestor(5, 3).unwrap(), 3);

    assert_eq!(sap.length(5, 5).unwrap(), 0);
    assert_eq!(sap.length(5, 404).unwrap(), -1);
}

// ============================================================================
// Digraph → facade
// ============================================================================

#[test]
fn test_facade_end_to_end() {
    let dir = tempdir().unwrap();
    let (synsets, hypernyms) = write_inputs(dir.path());

    let wordnet = WordNet::from_files(&synsets, &hypernyms, &mut ()).unwrap();
    assert_eq!(wordnet.nouns().count(), 7);
    assert!(wordnet.is_noun("hammer"));

    assert_eq!(wordnet.distance("hammer", "plan").unwrap(), 6);
    assert_eq!(wordnet.sap("hammer", "plan").unwrap(), "thing");
    assert_eq!(wordnet.sap("hammer", "tool").unwrap(), "tool");
    assert_eq!(
        wordnet.distance("hammer", "unobtainium"),
        Err(QueryError::NotANoun("unobtainium".to_string()))
    );
}

#[test]
fn test_malformed_synset_line_reaches_the_sink() {
    let synsets = format!("{SYNSETS}not-an-id,ghost,should be skipped\n");
    let mut diags: Vec<Diagnostic> = Vec::new();
    let wordnet = WordNet::from_strs(&synsets, HYPERNYMS, &mut diags).unwrap();

    assert!(!wordnet.is_noun("ghost"));
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].line, 8);
}
