//! Vertical feature slices
//!
//! - `graph`: DAG store + multi-source BFS engine
//! - `ancestor`: shortest-common-ancestor resolution
//! - `lexicon`: concept index, file parsing, taxonomy facade
//! - `outcast`: term ranking by total semantic distance

pub mod ancestor;
pub mod graph;
pub mod lexicon;
pub mod outcast;
