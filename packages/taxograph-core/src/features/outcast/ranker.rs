//! Outcast detection
//!
//! Scores each term by its total subset-based distance to every other term
//! in the list and reports the term with the maximum total. Per-term sums are
//! independent, so they run in parallel; the taxonomy is immutable and each
//! distance query allocates its own BFS state.

use rayon::prelude::*;
use tracing::debug;

use crate::errors::{Result, TaxographError};
use crate::features::lexicon::Taxonomy;

/// Ranks terms by total semantic distance over a borrowed taxonomy
pub struct OutcastRanker<'a> {
    taxonomy: &'a Taxonomy,
}

impl<'a> OutcastRanker<'a> {
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// The term of `terms` with the maximum total distance to all others.
    ///
    /// The self-distance contributes 0 to each sum. Ties resolve to the
    /// first term reaching the maximum in input order. Fails with
    /// `UnknownTerm` if any input term is absent from the index and with
    /// `EmptyTermList` on an empty list.
    pub fn outcast(&self, terms: &[String]) -> Result<String> {
        if terms.is_empty() {
            return Err(TaxographError::EmptyTermList);
        }
        for term in terms {
            self.taxonomy.index().ids_of(term)?;
        }

        let totals: Vec<usize> = terms
            .par_iter()
            .map(|a| {
                terms
                    .iter()
                    .map(|b| self.taxonomy.distance(a, b))
                    .sum::<Result<usize>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let mut best = 0;
        for (i, &total) in totals.iter().enumerate() {
            // strict comparison keeps the first maximum in input order
            if total > totals[best] {
                best = i;
            }
        }
        debug!(outcast = %terms[best], total = totals[best], "terms ranked");
        Ok(terms[best].clone())
    }
}
