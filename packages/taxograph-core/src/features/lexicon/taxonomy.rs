//! Taxonomy facade
//!
//! Ties the validated DAG store, the concept index and the ancestor resolver
//! together and answers term-level queries. A term may name several concepts;
//! term-level queries therefore always use the subset (minimum-sum) resolver
//! over each term's full id set.

use std::path::Path;

use tracing::info;

use crate::errors::{Result, TaxographError};
use crate::features::ancestor::{AncestorResolver, CommonAncestor};
use crate::features::graph::DagStore;
use crate::features::lexicon::index::ConceptIndex;
use crate::features::lexicon::parser;

/// A rooted hypernym taxonomy with its term index
#[derive(Debug)]
pub struct Taxonomy {
    dag: DagStore,
    index: ConceptIndex,
}

impl Taxonomy {
    /// Load and validate a taxonomy from concept and hypernym files
    pub fn from_files(concepts: &Path, hypernyms: &Path) -> Result<Self> {
        let parsed = parser::load_files(concepts, hypernyms)?;
        let taxonomy = Self::from_parts(
            DagStore::from_edges(parsed.vertex_count, &parsed.edges)?,
            parsed.index,
        )?;
        info!(
            concepts = taxonomy.dag.vertex_count(),
            edges = taxonomy.dag.edge_count(),
            root = taxonomy.dag.root(),
            "taxonomy loaded"
        );
        Ok(taxonomy)
    }

    /// Assemble a taxonomy from an already-built store and index
    pub fn from_parts(dag: DagStore, index: ConceptIndex) -> Result<Self> {
        if dag.vertex_count() != index.concept_count() {
            return Err(TaxographError::malformed(format!(
                "index covers {} concepts but graph has {} vertices",
                index.concept_count(),
                dag.vertex_count()
            )));
        }
        Ok(Self { dag, index })
    }

    pub fn dag(&self) -> &DagStore {
        &self.dag
    }

    pub fn index(&self) -> &ConceptIndex {
        &self.index
    }

    /// Is `term` in the taxonomy?
    pub fn is_concept(&self, term: &str) -> bool {
        self.index.is_concept(term)
    }

    /// Shortest common ancestor of two terms, with its distance, over every
    /// sense of each term
    pub fn resolve(&self, term_a: &str, term_b: &str) -> Result<CommonAncestor> {
        let ids_a = self.index.ids_of(term_a)?;
        let ids_b = self.index.ids_of(term_b)?;
        AncestorResolver::new(&self.dag).resolve_subsets(ids_a, ids_b)
    }

    /// Terms of the shortest-common-ancestor concept of two terms
    pub fn sca(&self, term_a: &str, term_b: &str) -> Result<&[String]> {
        let hit = self.resolve(term_a, term_b)?;
        self.index.terms_of(hit.vertex)
    }

    /// Semantic distance between two terms
    pub fn distance(&self, term_a: &str, term_b: &str) -> Result<usize> {
        Ok(self.resolve(term_a, term_b)?.distance)
    }

    /// Every distinct term in the taxonomy
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.index.terms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Small animal taxonomy:
    ///
    /// ```text
    ///            4 organism
    ///           /          \
    ///        2 mammal    3 plant
    ///        /      \
    ///   0 cat      1 dog
    /// ```
    fn animals() -> Taxonomy {
        let dag = DagStore::from_edges(5, &[(0, 2), (1, 2), (2, 4), (3, 4)]).unwrap();
        let index = ConceptIndex::new(vec![
            vec!["cat".into(), "feline".into()],
            vec!["dog".into()],
            vec!["mammal".into()],
            vec!["plant".into()],
            vec!["organism".into()],
        ]);
        Taxonomy::from_parts(dag, index).unwrap()
    }

    #[test]
    fn test_is_concept() {
        let tax = animals();
        assert!(tax.is_concept("feline"));
        assert!(!tax.is_concept("rock"));
    }

    #[test]
    fn test_sca_terms_and_distance() {
        let tax = animals();
        assert_eq!(tax.sca("cat", "dog").unwrap(), &["mammal"]);
        assert_eq!(tax.distance("cat", "dog").unwrap(), 2);
        assert_eq!(tax.sca("cat", "plant").unwrap(), &["organism"]);
        assert_eq!(tax.distance("cat", "plant").unwrap(), 3);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let tax = animals();
        assert_eq!(tax.distance("dog", "dog").unwrap(), 0);
    }

    #[test]
    fn test_synonyms_share_concepts() {
        let tax = animals();
        assert_eq!(tax.distance("cat", "feline").unwrap(), 0);
        assert_eq!(tax.sca("cat", "feline").unwrap(), &["cat", "feline"]);
    }

    #[test]
    fn test_unknown_term_propagates() {
        let tax = animals();
        assert!(matches!(
            tax.distance("cat", "rock").unwrap_err(),
            TaxographError::UnknownTerm(_)
        ));
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let dag = DagStore::from_edges(2, &[(0, 1)]).unwrap();
        let index = ConceptIndex::new(vec![vec!["only".into()]]);
        assert!(matches!(
            Taxonomy::from_parts(dag, index).unwrap_err(),
            TaxographError::MalformedGraph(_)
        ));
    }
}
