//! Taxograph - semantic-distance queries over a rooted hypernym DAG
//!
//! Feature-first layout:
//! - `features/graph`    : validated DAG store + multi-source BFS
//! - `features/ancestor` : pairwise and subset shortest-common-ancestor
//! - `features/lexicon`  : concept index, source-file parsing, taxonomy facade
//! - `features/outcast`  : outcast ranking
//!
//! The store and index are built once and shared read-only; every query
//! allocates its own BFS state, so queries may run on parallel threads
//! without locks.
//!
//! ```
//! use taxograph_core::{ConceptIndex, DagStore, OutcastRanker, Taxonomy};
//!
//! // 0 cat, 1 dog → 2 mammal → 3 organism ← 4 plant
//! let dag = DagStore::from_edges(5, &[(0, 2), (1, 2), (2, 3), (4, 3)])?;
//! let index = ConceptIndex::new(vec![
//!     vec!["cat".into()],
//!     vec!["dog".into()],
//!     vec!["mammal".into()],
//!     vec!["organism".into()],
//!     vec!["plant".into()],
//! ]);
//! let taxonomy = Taxonomy::from_parts(dag, index)?;
//!
//! assert_eq!(taxonomy.sca("cat", "dog")?, &["mammal"]);
//! assert_eq!(taxonomy.distance("cat", "plant")?, 3);
//!
//! let ranker = OutcastRanker::new(&taxonomy);
//! let outcast = ranker.outcast(&["cat".into(), "dog".into(), "plant".into()])?;
//! assert_eq!(outcast, "plant");
//! # Ok::<(), taxograph_core::TaxographError>(())
//! ```

pub mod errors;
pub mod features;

pub use errors::{Result, TaxographError};
pub use features::ancestor::{AncestorResolver, CommonAncestor};
pub use features::graph::{BfsResult, DagStore};
pub use features::lexicon::{parser, ConceptIndex, ParsedTaxonomy, Taxonomy};
pub use features::outcast::OutcastRanker;
