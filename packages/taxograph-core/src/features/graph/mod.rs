//! DAG store and multi-source BFS engine
//!
//! The store owns the validated hypernym graph; the BFS engine produces
//! transient per-query results over it.

mod bfs;
mod dag;

pub use bfs::BfsResult;
pub use dag::DagStore;
