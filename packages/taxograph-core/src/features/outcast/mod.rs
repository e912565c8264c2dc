//! Outcast ranking over taxonomy distances

mod ranker;

pub use ranker::OutcastRanker;
