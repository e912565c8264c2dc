//! Multi-source breadth-first search over the DAG store
//!
//! Seeds a FIFO frontier from every source at distance 0 and never re-visits
//! a marked vertex, so `dist_to` is the minimum hop count from the nearest
//! source. The visitation order is materialized so a later pass can re-scan
//! membership without recomputing the search.
//!
//! Results are per-call values: they borrow nothing from the store and carry
//! no shared scratch state, so concurrent queries never interfere.

use std::collections::VecDeque;

use crate::errors::{Result, TaxographError};
use crate::features::graph::dag::{validate_vertex, DagStore};

/// Outcome of one (multi-source) BFS
#[derive(Debug)]
pub struct BfsResult {
    marked: Vec<bool>,
    dist_to: Vec<usize>,
    edge_to: Vec<usize>,
    /// Vertices in the order they were marked
    order: Vec<usize>,
}

impl BfsResult {
    /// Shortest hop-distances from any vertex of `sources` to every
    /// reachable vertex.
    ///
    /// Fails with `InvalidSources` on an empty source set and `InvalidVertex`
    /// if any source is outside `[0, V)`. A single-source search is the
    /// singleton special case.
    pub fn search(dag: &DagStore, sources: &[usize]) -> Result<BfsResult> {
        if sources.is_empty() {
            return Err(TaxographError::InvalidSources);
        }
        let v_count = dag.vertex_count();
        for &s in sources {
            validate_vertex(s, v_count)?;
        }

        let mut marked = vec![false; v_count];
        let mut dist_to = vec![0usize; v_count];
        let mut edge_to = vec![0usize; v_count];
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        for &s in sources {
            if !marked[s] {
                marked[s] = true;
                queue.push_back(s);
                order.push(s);
            }
        }

        while let Some(v) = queue.pop_front() {
            for w in dag.hypernyms(v)? {
                if !marked[w] {
                    marked[w] = true;
                    dist_to[w] = dist_to[v] + 1;
                    edge_to[w] = v;
                    queue.push_back(w);
                    order.push(w);
                }
            }
        }

        Ok(BfsResult {
            marked,
            dist_to,
            edge_to,
            order,
        })
    }

    /// Is `v` reachable from any source?
    pub fn has_path_to(&self, v: usize) -> bool {
        self.marked.get(v).copied().unwrap_or(false)
    }

    /// Hop count from the nearest source, or `None` if unreached
    pub fn dist_to(&self, v: usize) -> Option<usize> {
        if self.has_path_to(v) {
            Some(self.dist_to[v])
        } else {
            None
        }
    }

    /// Shortest path from the nearest source to `v`, source first, or `None`
    /// if unreached. Materialized so callers can re-scan it.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        if !self.has_path_to(v) {
            return None;
        }
        let mut path = Vec::with_capacity(self.dist_to[v] + 1);
        let mut x = v;
        while self.dist_to[x] != 0 {
            path.push(x);
            x = self.edge_to[x];
        }
        path.push(x);
        path.reverse();
        Some(path)
    }

    /// Every reached vertex, in visitation order
    pub fn visited(&self) -> &[usize] {
        &self.order
    }
}
