//! The SAP engine: dual breadth-first search over hypernym edges.
//!
//! For a query `(v, w)` the engine expands one BFS frontier from each source
//! along *outgoing* edges, records `id -> distance` for everything reached,
//! intersects the two reached sets, and minimizes the summed distance over
//! the intersection. Unit edge costs make BFS exact in a single pass; ties at
//! the minimum break toward the smallest ancestor id, which falls out of
//! iterating the bitmap intersection in ascending order.

use crate::QueryError;
use roaring::RoaringBitmap;
use std::collections::{HashMap, VecDeque};
use wordnet_digraph::Digraph;

/// Result of a successful SAP query: the minimized summed distance and the
/// ancestor realizing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortest {
    /// Edges from `v` to the ancestor plus edges from `w` to the ancestor.
    pub length: u32,
    /// Synset id of the lowest common ancestor. Smallest id among ties.
    pub ancestor: u32,
}

/// Id-level SAP queries. Borrows the digraph immutably; no query state
/// outlives the call.
pub struct Sap<'a> {
    graph: &'a Digraph,
}

impl<'a> Sap<'a> {
    pub fn new(graph: &'a Digraph) -> Self {
        Self { graph }
    }

    /// Length of the shortest ancestral path between `v` and `w`, or -1 if
    /// they share no ancestor (including when either id is absent from the
    /// graph). Negative ids are a precondition violation.
    pub fn length(&self, v: i64, w: i64) -> Result<i64, QueryError> {
        let (Some(v), Some(w)) = (check_id(v)?, check_id(w)?) else {
            return Ok(-1);
        };
        Ok(self
            .shortest(v, w)
            .map(|s| i64::from(s.length))
            .unwrap_or(-1))
    }

    /// The common ancestor realizing the shortest ancestral path, or -1 if
    /// none exists. Ties at the minimal length break toward the smallest id.
    pub fn ancestor(&self, v: i64, w: i64) -> Result<i64, QueryError> {
        let (Some(v), Some(w)) = (check_id(v)?, check_id(w)?) else {
            return Ok(-1);
        };
        Ok(self
            .shortest(v, w)
            .map(|s| i64::from(s.ancestor))
            .unwrap_or(-1))
    }

    /// Combined query: both the length and the ancestor from one dual-BFS
    /// pass. `None` when either id is absent or no common ancestor exists.
    pub fn shortest(&self, v: u32, w: u32) -> Option<Shortest> {
        if !self.graph.contains(v) || !self.graph.contains(w) {
            return None;
        }

        let (dist_v, reached_v) = self.distances_from(v);
        let (dist_w, reached_w) = self.distances_from(w);
        let common = reached_v & reached_w;

        let mut best: Option<Shortest> = None;
        // Ascending id order; a strict `<` keeps the smallest id among ties.
        for ancestor in common.iter() {
            let (Some(&from_v), Some(&from_w)) = (dist_v.get(&ancestor), dist_w.get(&ancestor))
            else {
                continue;
            };
            let length = from_v + from_w;
            if best.map_or(true, |b| length < b.length) {
                best = Some(Shortest { length, ancestor });
            }
        }
        best
    }

    /// BFS from `source` along hypernym edges. Returns the distance map and
    /// the reached-id set. Every vertex is an ancestor of itself at distance
    /// zero.
    fn distances_from(&self, source: u32) -> (HashMap<u32, u32>, RoaringBitmap) {
        let mut dist: HashMap<u32, u32> = HashMap::new();
        let mut reached = RoaringBitmap::new();
        let mut frontier: VecDeque<u32> = VecDeque::new();

        dist.insert(source, 0);
        reached.insert(source);
        frontier.push_back(source);

        while let Some(current) = frontier.pop_front() {
            let Some(vertex) = self.graph.get(current) else {
                continue;
            };
            let Some(&here) = dist.get(&current) else {
                continue;
            };
            for edge in &vertex.adj {
                if dist.contains_key(&edge.dest) {
                    continue;
                }
                dist.insert(edge.dest, here + edge.cost);
                reached.insert(edge.dest);
                frontier.push_back(edge.dest);
            }
        }

        (dist, reached)
    }
}

fn check_id(id: i64) -> Result<Option<u32>, QueryError> {
    if id < 0 {
        return Err(QueryError::NegativeId(id));
    }
    // Non-negative but unrepresentable ids cannot be in the graph: treat as
    // absent, same as any other unknown id.
    Ok(u32::try_from(id).ok())
}
