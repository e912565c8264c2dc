//! Concept and hypernym source-file parsing
//!
//! Concept file: one `id,term1 term2 ...,gloss` line per concept; the gloss
//! may itself contain commas. Hypernym file: `id,parent1,parent2,...`; a line
//! with no parents declares a root candidate. Vertex ids must be dense in
//! `[0, line count)`.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::{Result, TaxographError};
use crate::features::lexicon::index::ConceptIndex;

/// Parsed source files, ready for graph construction
pub struct ParsedTaxonomy {
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize)>,
    pub index: ConceptIndex,
}

/// Parse both source files from disk
pub fn load_files(concepts: &Path, hypernyms: &Path) -> Result<ParsedTaxonomy> {
    let concept_text = fs::read_to_string(concepts)?;
    let hypernym_text = fs::read_to_string(hypernyms)?;
    let index = parse_concepts(&concept_text)?;
    let edges = parse_hypernyms(&hypernym_text, index.concept_count())?;
    debug!(
        concepts = index.concept_count(),
        edges = edges.len(),
        "taxonomy source files parsed"
    );
    Ok(ParsedTaxonomy {
        vertex_count: index.concept_count(),
        edges,
        index,
    })
}

/// Parse concept lines into a `ConceptIndex`
pub fn parse_concepts(text: &str) -> Result<ConceptIndex> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let vertex_count = lines.len();
    let mut id_to_terms: Vec<Option<Vec<String>>> = vec![None; vertex_count];

    for (line_no, line) in lines.iter().enumerate() {
        let mut fields = line.splitn(3, ',');
        let id_field = fields
            .next()
            .ok_or_else(|| TaxographError::parse(format!("concept line {}: empty", line_no + 1)))?;
        let terms_field = fields.next().ok_or_else(|| {
            TaxographError::parse(format!("concept line {}: missing terms field", line_no + 1))
        })?;

        let id = parse_id(id_field, "concept", line_no)?;
        if id >= vertex_count {
            return Err(TaxographError::parse(format!(
                "concept line {}: id {} out of range for {} concepts",
                line_no + 1,
                id,
                vertex_count
            )));
        }
        if id_to_terms[id].is_some() {
            return Err(TaxographError::parse(format!(
                "concept line {}: duplicate id {}",
                line_no + 1,
                id
            )));
        }

        let terms: Vec<String> = terms_field.split(' ').map(str::to_string).collect();
        if terms.iter().any(String::is_empty) {
            return Err(TaxographError::parse(format!(
                "concept line {}: empty term",
                line_no + 1
            )));
        }
        id_to_terms[id] = Some(terms);
    }

    // dense ids plus uniqueness means every slot is filled
    let id_to_terms = id_to_terms
        .into_iter()
        .enumerate()
        .map(|(id, terms)| {
            terms.ok_or_else(|| TaxographError::parse(format!("no concept with id {id}")))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ConceptIndex::new(id_to_terms))
}

/// Parse hypernym lines into directed child→parent edges
pub fn parse_hypernyms(text: &str, vertex_count: usize) -> Result<Vec<(usize, usize)>> {
    let mut edges = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split(',');
        let id_field = fields.next().ok_or_else(|| {
            TaxographError::parse(format!("hypernym line {}: empty", line_no + 1))
        })?;
        let child = parse_id(id_field, "hypernym", line_no)?;
        check_id_range(child, vertex_count, line_no)?;
        for parent_field in fields {
            let parent = parse_id(parent_field, "hypernym", line_no)?;
            check_id_range(parent, vertex_count, line_no)?;
            edges.push((child, parent));
        }
    }
    Ok(edges)
}

fn check_id_range(id: usize, vertex_count: usize, line_no: usize) -> Result<()> {
    if id >= vertex_count {
        return Err(TaxographError::parse(format!(
            "hypernym line {}: id {} out of range for {} concepts",
            line_no + 1,
            id,
            vertex_count
        )));
    }
    Ok(())
}

fn parse_id(field: &str, file: &str, line_no: usize) -> Result<usize> {
    field.trim().parse::<usize>().map_err(|_| {
        TaxographError::parse(format!(
            "{} line {}: invalid id {:?}",
            file,
            line_no + 1,
            field
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CONCEPTS: &str = "\
0,cat feline,a small domesticated carnivore
1,dog,a common pet, loyal
2,animal,a living organism";

    #[test]
    fn test_parse_concepts() {
        let index = parse_concepts(CONCEPTS).unwrap();
        assert_eq!(index.concept_count(), 3);
        assert_eq!(index.terms_of(0).unwrap(), &["cat", "feline"]);
        assert_eq!(index.ids_of("dog").unwrap(), &[1]);
    }

    #[test]
    fn test_gloss_commas_are_kept_out_of_terms() {
        // line 1's gloss contains a comma; term field must not absorb it
        let index = parse_concepts(CONCEPTS).unwrap();
        assert_eq!(index.terms_of(1).unwrap(), &["dog"]);
        assert!(!index.is_concept("loyal"));
    }

    #[test]
    fn test_parse_hypernyms_with_root_line() {
        let edges = parse_hypernyms("0,2\n1,2\n2\n", 3).unwrap();
        assert_eq!(edges, vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn test_multiple_parents_per_line() {
        let edges = parse_hypernyms("0,1,2\n", 3).unwrap();
        assert_eq!(edges, vec![(0, 1), (0, 2)]);
    }

    #[test]
    fn test_non_integer_id_rejected() {
        assert!(matches!(
            parse_concepts("x,cat,gloss").unwrap_err(),
            TaxographError::Parse(_)
        ));
        assert!(matches!(
            parse_hypernyms("0,abc\n", 3).unwrap_err(),
            TaxographError::Parse(_)
        ));
    }

    #[test]
    fn test_duplicate_concept_id_rejected() {
        let err = parse_concepts("0,cat,gloss\n0,dog,gloss").unwrap_err();
        assert!(matches!(err, TaxographError::Parse(_)));
    }

    #[test]
    fn test_sparse_concept_ids_rejected() {
        let err = parse_concepts("0,cat,gloss\n5,dog,gloss").unwrap_err();
        assert!(matches!(err, TaxographError::Parse(_)));
    }

    #[test]
    fn test_missing_terms_field_rejected() {
        let err = parse_concepts("0").unwrap_err();
        assert!(matches!(err, TaxographError::Parse(_)));
    }

    #[test]
    fn test_hypernym_child_out_of_range_rejected() {
        let err = parse_hypernyms("9,0\n", 3).unwrap_err();
        assert!(matches!(err, TaxographError::Parse(_)));
    }

    #[test]
    fn test_hypernym_parent_out_of_range_rejected() {
        // the parent must fail here with line context, not later at graph
        // construction
        let err = parse_hypernyms("0,9\n", 3).unwrap_err();
        match err {
            TaxographError::Parse(msg) => {
                assert!(msg.contains("line 1"), "missing line context: {msg}");
                assert!(msg.contains("id 9"), "missing offending id: {msg}");
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }
}
