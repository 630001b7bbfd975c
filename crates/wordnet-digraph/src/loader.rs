//! Two-file loader for the synset digraph.
//!
//! Input contract (both files UTF-8, one record per line, trailing newline
//! optional):
//!
//! - `synsets`: `<id>,<synonym>,<definition>` — only the first two commas are
//!   field separators, so definitions keep embedded commas verbatim.
//! - `hypernyms`: `<source_id>[,<hypernym_id>]*` — all tokens decimal
//!   integers. A single-token line declares a root candidate (no edges).
//!
//! Malformed synset lines are *recovered*: reported to the caller's
//! [`DiagnosticSink`] and skipped. Everything else that can go wrong at build
//! time (unreadable file, dangling reference, malformed hypernym token, no
//! root) is a fatal [`BuildError`].
//!
//! Diagnostics go through an explicit sink rather than a process-global
//! stream so tests can capture them deterministically; the loader also emits
//! `tracing` events for hosts that run a subscriber.

use crate::{BuildError, Digraph};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

// ============================================================================
// Diagnostics
// ============================================================================

/// A recovered parse problem: the offending line and why it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number in the synsets file.
    pub line: usize,
    /// The offending line, verbatim.
    pub text: String,
    pub reason: String,
}

/// Receiver for recovered parse problems during the build.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Discards diagnostics.
impl DiagnosticSink for () {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Collects diagnostics; the test-capture sink.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

// ============================================================================
// Loading
// ============================================================================

impl Digraph {
    /// Build a digraph from synsets and hypernyms files.
    pub fn from_files(
        synsets: impl AsRef<Path>,
        hypernyms: impl AsRef<Path>,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Self, BuildError> {
        let synsets = synsets.as_ref();
        let hypernyms = hypernyms.as_ref();

        let open = |path: &Path| -> Result<BufReader<File>, BuildError> {
            File::open(path).map(BufReader::new).map_err(|source| {
                BuildError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            })
        };

        tracing::debug!(synsets = %synsets.display(), hypernyms = %hypernyms.display(), "building digraph");
        Self::from_readers(open(synsets)?, open(hypernyms)?, sink)
    }

    /// Build a digraph from in-memory sources. Same contract as
    /// [`Digraph::from_files`]; I/O errors can still surface from the readers.
    pub fn from_readers(
        synsets: impl BufRead,
        hypernyms: impl BufRead,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Self, BuildError> {
        let mut graph = Digraph::default();
        read_synsets(&mut graph, synsets, sink)?;
        read_hypernyms(&mut graph, hypernyms)?;

        if !graph.is_rooted() {
            return Err(BuildError::NotRooted);
        }

        tracing::debug!(
            vertices = graph.len(),
            edges = graph.edge_count(),
            roots = graph.roots().count(),
            "digraph built"
        );
        Ok(graph)
    }

    /// Convenience over [`Digraph::from_readers`] for string literals.
    pub fn from_strs(
        synsets: &str,
        hypernyms: &str,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Self, BuildError> {
        Self::from_readers(Cursor::new(synsets), Cursor::new(hypernyms), sink)
    }
}

fn read_synsets(
    graph: &mut Digraph,
    reader: impl BufRead,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), BuildError> {
    for (line_no, line) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line.map_err(|source| BuildError::Io {
            path: "<synsets>".into(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        // Split on the first two commas only: the definition field may
        // itself contain commas and is preserved verbatim.
        let mut fields = line.splitn(3, ',');
        let (id, synonym, definition) = match (fields.next(), fields.next(), fields.next()) {
            (Some(id), Some(synonym), Some(definition)) => (id, synonym, definition),
            _ => {
                skip_synset_line(sink, line_no, &line, "fewer than three comma-separated fields");
                continue;
            }
        };

        let id: u32 = match id.parse() {
            Ok(id) => id,
            Err(_) => {
                skip_synset_line(sink, line_no, &line, "synset id is not a non-negative integer");
                continue;
            }
        };

        graph.insert_vertex(id, synonym.to_string(), definition.to_string());
    }
    Ok(())
}

fn skip_synset_line(sink: &mut dyn DiagnosticSink, line: usize, text: &str, reason: &str) {
    tracing::warn!(line, text, reason, "skipping malformed synset line");
    sink.report(Diagnostic {
        line,
        text: text.to_string(),
        reason: reason.to_string(),
    });
}

fn read_hypernyms(graph: &mut Digraph, reader: impl BufRead) -> Result<(), BuildError> {
    for (line_no, line) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line.map_err(|source| BuildError::Io {
            path: "<hypernyms>".into(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let mut tokens = line.split(',').map(|token| {
            token
                .parse::<u32>()
                .map_err(|_| BuildError::MalformedHypernym {
                    line: line_no,
                    token: token.to_string(),
                })
        });

        // A line always has at least one token; split(',') never yields zero.
        let source = tokens.next().unwrap_or(Err(BuildError::MalformedHypernym {
            line: line_no,
            token: String::new(),
        }))?;
        if !graph.contains(source) {
            return Err(BuildError::DanglingReference {
                line: line_no,
                id: source,
            });
        }

        for dest in tokens {
            let dest = dest?;
            if !graph.contains(dest) {
                return Err(BuildError::DanglingReference {
                    line: line_no,
                    id: dest,
                });
            }
            if dest == source {
                tracing::warn!(line = line_no, id = source, "dropping self-loop");
                continue;
            }
            graph.add_edge(source, dest);
        }
    }
    Ok(())
}
