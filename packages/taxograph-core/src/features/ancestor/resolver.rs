//! Shortest-common-ancestor resolution
//!
//! Two related operations over a rooted hypernym DAG:
//!
//! - **Pairwise** (`resolve_pair`): traces each vertex's shortest path to the
//!   root and reports the first vertex of the second chain already seen on
//!   the first. Known limitation, kept deliberately: it only inspects the two
//!   specific root paths, so on a DAG where a vertex has several hypernym
//!   parents merging before the root it can report a higher ancestor than the
//!   true minimum. Callers that need the exact minimum use the subset form
//!   with singleton sets.
//! - **Subset** (`resolve_subsets`): one multi-source BFS per side, then the
//!   true minimum of `dist_a[x] + dist_b[x]` over every vertex reached by
//!   both. Ties break to the vertex first marked by the A-side search.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TaxographError};
use crate::features::graph::{BfsResult, DagStore};

/// A common ancestor together with the total path length through it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonAncestor {
    pub vertex: usize,
    pub distance: usize,
}

/// Ancestor queries over a borrowed, immutable DAG store
pub struct AncestorResolver<'a> {
    dag: &'a DagStore,
}

impl<'a> AncestorResolver<'a> {
    pub fn new(dag: &'a DagStore) -> Self {
        Self { dag }
    }

    /// Root-path-intersection ancestor of two single vertices.
    ///
    /// See the module docs for why this is not always the closest common
    /// ancestor on multi-parent DAGs.
    pub fn resolve_pair(&self, v: usize, w: usize) -> Result<CommonAncestor> {
        let bv = BfsResult::search(self.dag, &[v])?;
        let bw = BfsResult::search(self.dag, &[w])?;
        let root = self.dag.root();

        let mut passed = vec![false; self.dag.vertex_count()];
        let v_chain = bv.path_to(root).ok_or(TaxographError::Disconnected)?;
        for x in v_chain {
            passed[x] = true;
        }

        let w_chain = bw.path_to(root).ok_or(TaxographError::Disconnected)?;
        for x in w_chain {
            if passed[x] {
                // both dist_to values exist: x lies on both root paths
                let distance = bv.dist_to(x).ok_or(TaxographError::Disconnected)?
                    + bw.dist_to(x).ok_or(TaxographError::Disconnected)?;
                return Ok(CommonAncestor { vertex: x, distance });
            }
        }

        // the root terminates both chains, so the loop always returns
        Err(TaxographError::Disconnected)
    }

    /// Shortest common ancestor of two single vertices (root-path variant)
    pub fn ancestor(&self, v: usize, w: usize) -> Result<usize> {
        Ok(self.resolve_pair(v, w)?.vertex)
    }

    /// Length of the ancestral path between two single vertices (root-path
    /// variant)
    pub fn length(&self, v: usize, w: usize) -> Result<usize> {
        Ok(self.resolve_pair(v, w)?.distance)
    }

    /// Minimum-sum common ancestor of two vertex subsets.
    ///
    /// Fails with `Disconnected` if no vertex is reachable from both sides;
    /// on a valid rooted DAG the root is always common, so that error marks a
    /// construction bug rather than a normal outcome.
    pub fn resolve_subsets(&self, subset_a: &[usize], subset_b: &[usize]) -> Result<CommonAncestor> {
        let ba = BfsResult::search(self.dag, subset_a)?;
        let bb = BfsResult::search(self.dag, subset_b)?;

        let mut best: Option<CommonAncestor> = None;
        for &x in ba.visited() {
            if let (Some(da), Some(db)) = (ba.dist_to(x), bb.dist_to(x)) {
                let total = da + db;
                // strict comparison keeps the first vertex in A's visitation
                // order on ties
                if best.map_or(true, |b| total < b.distance) {
                    best = Some(CommonAncestor {
                        vertex: x,
                        distance: total,
                    });
                }
            }
        }

        best.ok_or(TaxographError::Disconnected)
    }

    /// Shortest common ancestor of two vertex subsets (minimum-sum)
    pub fn ancestor_subset(&self, subset_a: &[usize], subset_b: &[usize]) -> Result<usize> {
        Ok(self.resolve_subsets(subset_a, subset_b)?.vertex)
    }

    /// Length of the shortest ancestral path between two vertex subsets
    pub fn length_subset(&self, subset_a: &[usize], subset_b: &[usize]) -> Result<usize> {
        Ok(self.resolve_subsets(subset_a, subset_b)?.distance)
    }
}
