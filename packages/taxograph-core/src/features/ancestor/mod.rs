//! Ancestor resolution over the rooted hypernym DAG

mod resolver;

pub use resolver::{AncestorResolver, CommonAncestor};
