//! Rooted-DAG store backed by petgraph
//!
//! Directed graph where:
//! - Nodes are concept vertices, numbered `[0, V)`
//! - Edges point from a concept to its hypernym (more general concept)
//!
//! Validated at construction: acyclic (Tarjan SCC), exactly one vertex with
//! out-degree 0 (the root). Immutable afterwards; every query borrows it
//! read-only.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use tracing::debug;

use crate::errors::{Result, TaxographError};

/// Immutable rooted DAG of hypernym edges
#[derive(Debug)]
pub struct DagStore {
    /// Directed graph: vertex → its hypernyms
    graph: DiGraph<usize, ()>,

    /// The unique vertex with no outgoing edges
    root: usize,
}

impl DagStore {
    /// Build and validate a rooted DAG over `vertex_count` vertices.
    ///
    /// Fails with `MalformedGraph` if the edge set contains a directed cycle
    /// or if the number of sink vertices is not exactly one, and with
    /// `InvalidVertex` if any edge endpoint is outside `[0, vertex_count)`.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        if vertex_count == 0 {
            return Err(TaxographError::malformed("graph has no vertices"));
        }

        let mut graph = DiGraph::with_capacity(vertex_count, edges.len());
        for v in 0..vertex_count {
            graph.add_node(v);
        }

        for &(from, to) in edges {
            validate_vertex(from, vertex_count)?;
            validate_vertex(to, vertex_count)?;
            if from == to {
                return Err(TaxographError::malformed(format!(
                    "self-loop at vertex {from}"
                )));
            }
            graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
        }

        // Tarjan SCC: any component with more than one vertex is a cycle.
        // Self-loops are rejected above, so size-1 components are fine.
        if let Some(scc) = tarjan_scc(&graph).into_iter().find(|scc| scc.len() > 1) {
            return Err(TaxographError::malformed(format!(
                "directed cycle through {} vertices (e.g. vertex {})",
                scc.len(),
                scc[0].index()
            )));
        }

        let mut root = None;
        for idx in graph.node_indices() {
            if graph.neighbors_directed(idx, Direction::Outgoing).count() == 0 {
                match root {
                    None => root = Some(idx.index()),
                    Some(first) => {
                        return Err(TaxographError::malformed(format!(
                            "multiple roots: vertices {} and {} both have out-degree 0",
                            first,
                            idx.index()
                        )))
                    }
                }
            }
        }
        let root = root.ok_or_else(|| TaxographError::malformed("no root: every vertex has a hypernym"))?;

        debug!(
            vertices = vertex_count,
            edges = graph.edge_count(),
            root,
            "rooted DAG validated"
        );

        Ok(Self { graph, root })
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of hypernym edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The unique vertex with no outgoing edges (most general concept)
    pub fn root(&self) -> usize {
        self.root
    }

    /// Hypernyms of `v` (out-neighbors), materialized so callers can re-scan
    pub fn hypernyms(&self, v: usize) -> Result<Vec<usize>> {
        validate_vertex(v, self.vertex_count())?;
        Ok(self
            .graph
            .neighbors_directed(NodeIndex::new(v), Direction::Outgoing)
            .map(|idx| idx.index())
            .collect())
    }
}

/// Bounds check shared by the store and the BFS engine
pub(crate) fn validate_vertex(v: usize, vertex_count: usize) -> Result<()> {
    if v >= vertex_count {
        return Err(TaxographError::InvalidVertex {
            vertex: v,
            max: vertex_count - 1,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_vertex_is_its_own_root() {
        let dag = DagStore::from_edges(1, &[]).unwrap();
        assert_eq!(dag.vertex_count(), 1);
        assert_eq!(dag.root(), 0);
        assert!(dag.hypernyms(0).unwrap().is_empty());
    }

    #[test]
    fn test_chain_root_is_sink() {
        // 0 → 1 → 2
        let dag = DagStore::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(dag.root(), 2);
        assert_eq!(dag.hypernyms(0).unwrap(), vec![1]);
        assert_eq!(dag.edge_count(), 2);
    }

    #[test]
    fn test_diamond_is_valid() {
        // 0 → 1 → 2, 0 → 3 → 2
        let dag = DagStore::from_edges(4, &[(0, 1), (1, 2), (0, 3), (3, 2)]).unwrap();
        assert_eq!(dag.root(), 2);
        let mut parents = dag.hypernyms(0).unwrap();
        parents.sort_unstable();
        assert_eq!(parents, vec![1, 3]);
    }

    #[test]
    fn test_cycle_is_rejected() {
        let err = DagStore::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap_err();
        assert!(matches!(err, TaxographError::MalformedGraph(_)));
    }

    #[test]
    fn test_self_loop_is_rejected() {
        let err = DagStore::from_edges(2, &[(0, 0), (0, 1)]).unwrap_err();
        assert!(matches!(err, TaxographError::MalformedGraph(_)));
    }

    #[test]
    fn test_two_sinks_rejected() {
        // 0 → 1, 0 → 2: both 1 and 2 have out-degree 0
        let err = DagStore::from_edges(3, &[(0, 1), (0, 2)]).unwrap_err();
        assert!(matches!(err, TaxographError::MalformedGraph(_)));
    }

    #[test]
    fn test_no_sink_rejected() {
        // acyclic is impossible without a sink, so this doubles as a cycle case
        let err = DagStore::from_edges(2, &[(0, 1), (1, 0)]).unwrap_err();
        assert!(matches!(err, TaxographError::MalformedGraph(_)));
    }

    #[test]
    fn test_edge_out_of_range_rejected() {
        let err = DagStore::from_edges(2, &[(0, 5)]).unwrap_err();
        assert!(matches!(
            err,
            TaxographError::InvalidVertex { vertex: 5, max: 1 }
        ));
    }

    #[test]
    fn test_empty_graph_rejected() {
        let err = DagStore::from_edges(0, &[]).unwrap_err();
        assert!(matches!(err, TaxographError::MalformedGraph(_)));
    }

    #[test]
    fn test_hypernyms_out_of_range() {
        let dag = DagStore::from_edges(2, &[(0, 1)]).unwrap();
        assert!(dag.hypernyms(2).is_err());
    }
}
