//! Bidirectional concept index
//!
//! `vertex → ordered terms` and `term → sorted vertex ids`. A term may name
//! several concepts (word senses) and a concept may carry several terms
//! (synonyms). Built once by the parser, read-only afterwards.

use rustc_hash::FxHashMap;

use crate::errors::{Result, TaxographError};

/// Term ↔ vertex mapping for one taxonomy
#[derive(Debug)]
pub struct ConceptIndex {
    id_to_terms: Vec<Vec<String>>,
    term_to_ids: FxHashMap<String, Vec<usize>>,
}

impl ConceptIndex {
    /// Build from per-vertex term lists, indexed by vertex id
    pub fn new(id_to_terms: Vec<Vec<String>>) -> Self {
        let mut term_to_ids: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (id, terms) in id_to_terms.iter().enumerate() {
            for term in terms {
                term_to_ids.entry(term.clone()).or_default().push(id);
            }
        }
        // ids arrive in increasing order, so each entry is already sorted
        Self {
            id_to_terms,
            term_to_ids,
        }
    }

    /// Number of concepts (vertices)
    pub fn concept_count(&self) -> usize {
        self.id_to_terms.len()
    }

    /// Is `term` a known concept term?
    pub fn is_concept(&self, term: &str) -> bool {
        self.term_to_ids.contains_key(term)
    }

    /// Vertex ids of every concept named by `term`, in increasing order
    pub fn ids_of(&self, term: &str) -> Result<&[usize]> {
        self.term_to_ids
            .get(term)
            .map(Vec::as_slice)
            .ok_or_else(|| TaxographError::UnknownTerm(term.to_string()))
    }

    /// Terms of the concept at `vertex`, in source order
    pub fn terms_of(&self, vertex: usize) -> Result<&[String]> {
        self.id_to_terms
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(TaxographError::InvalidVertex {
                vertex,
                max: self.concept_count().saturating_sub(1),
            })
    }

    /// Every distinct term in the taxonomy (unordered)
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.term_to_ids.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_index() -> ConceptIndex {
        ConceptIndex::new(vec![
            vec!["jaguar".into(), "panther".into()],
            vec!["jaguar".into()], // second sense of "jaguar"
            vec!["feline".into()],
        ])
    }

    #[test]
    fn test_is_concept() {
        let index = sample_index();
        assert!(index.is_concept("jaguar"));
        assert!(index.is_concept("feline"));
        assert!(!index.is_concept("tractor"));
    }

    #[test]
    fn test_term_with_multiple_senses() {
        let index = sample_index();
        assert_eq!(index.ids_of("jaguar").unwrap(), &[0, 1]);
        assert_eq!(index.ids_of("feline").unwrap(), &[2]);
    }

    #[test]
    fn test_concept_with_multiple_terms_keeps_order() {
        let index = sample_index();
        assert_eq!(index.terms_of(0).unwrap(), &["jaguar", "panther"]);
    }

    #[test]
    fn test_unknown_term() {
        let index = sample_index();
        assert!(matches!(
            index.ids_of("tractor").unwrap_err(),
            TaxographError::UnknownTerm(_)
        ));
    }

    #[test]
    fn test_vertex_out_of_range() {
        let index = sample_index();
        assert!(matches!(
            index.terms_of(10).unwrap_err(),
            TaxographError::InvalidVertex { vertex: 10, max: 2 }
        ));
    }

    #[test]
    fn test_terms_iteration() {
        let index = sample_index();
        let mut all: Vec<_> = index.terms().collect();
        all.sort_unstable();
        assert_eq!(all, vec!["feline", "jaguar", "panther"]);
    }
}
