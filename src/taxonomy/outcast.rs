// src/taxonomy/outcast.rs
//! Picks the least-related term from a list.

use super::Taxonomy;
use crate::error::{Result, TaxonetError};

/// Sums pairwise distances through a taxonomy and returns the arg-max.
pub struct OutcastSelector<'a> {
    taxonomy: &'a Taxonomy,
}

impl<'a> OutcastSelector<'a> {
    #[must_use]
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// The term with the greatest total distance to all the others.
    ///
    /// Only a strictly greater total displaces the current best, so the
    /// earliest term wins ties, and a list whose distances are all zero
    /// returns its first term.
    ///
    /// # Errors
    /// `EmptyTermList` for an empty input; term resolution and distance
    /// failures propagate from the taxonomy.
    pub fn outcast<'t>(&self, terms: &[&'t str]) -> Result<&'t str> {
        let first = *terms.first().ok_or(TaxonetError::EmptyTermList)?;
        let mut outcast = first;
        let mut max_distance = 0;

        for (i, &candidate) in terms.iter().enumerate() {
            let total = self.total_distance(i, terms)?;
            if total > max_distance {
                max_distance = total;
                outcast = candidate;
            }
        }

        Ok(outcast)
    }

    /// Total distance from `terms[i]` to every other term. Pairs with
    /// an identical term string contribute nothing.
    fn total_distance(&self, i: usize, terms: &[&str]) -> Result<usize> {
        let mut total = 0;
        for (j, &other) in terms.iter().enumerate() {
            if i == j || terms[i] == other {
                continue;
            }
            total += self.taxonomy.distance(terms[i], other)?;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{HypernymRecord, SynsetRecord};

    // A small taxonomy: {cat, lion, wolf} cluster under carnivore,
    // while fern sits on the plant side of the root.
    //
    //        entity(0)
    //        /      \
    //  organism(1)  object(6)
    //    /     \
    // animal(2) plant(5)
    //    |         |
    // carnivore(3) fern(7)
    //  /   |   \
    // cat lion wolf  (8, 9, 10)   mineral(4) -> object
    fn sample() -> Taxonomy {
        let names = [
            "entity",
            "organism",
            "animal",
            "carnivore",
            "mineral",
            "plant",
            "object",
            "fern",
            "cat",
            "lion",
            "wolf",
        ];
        let synsets: Vec<SynsetRecord> = names
            .iter()
            .enumerate()
            .map(|(id, name)| SynsetRecord::new(id, vec![(*name).to_string()]))
            .collect();
        let hypernyms = vec![
            HypernymRecord::new(1, vec![0]),
            HypernymRecord::new(6, vec![0]),
            HypernymRecord::new(2, vec![1]),
            HypernymRecord::new(5, vec![1]),
            HypernymRecord::new(3, vec![2]),
            HypernymRecord::new(4, vec![6]),
            HypernymRecord::new(7, vec![5]),
            HypernymRecord::new(8, vec![3]),
            HypernymRecord::new(9, vec![3]),
            HypernymRecord::new(10, vec![3]),
        ];
        Taxonomy::new(&synsets, &hypernyms).unwrap()
    }

    #[test]
    fn test_distant_term_is_outcast() {
        let taxonomy = sample();
        let selector = OutcastSelector::new(&taxonomy);
        let result = selector
            .outcast(&["fern", "cat", "lion", "wolf"])
            .unwrap();
        assert_eq!(result, "fern");
    }

    #[test]
    fn test_outcast_position_does_not_matter() {
        let taxonomy = sample();
        let selector = OutcastSelector::new(&taxonomy);
        let result = selector
            .outcast(&["cat", "lion", "fern", "wolf"])
            .unwrap();
        assert_eq!(result, "fern");
    }

    #[test]
    fn test_repeated_term_returns_first() {
        let taxonomy = sample();
        let selector = OutcastSelector::new(&taxonomy);
        assert_eq!(selector.outcast(&["cat", "cat", "cat"]).unwrap(), "cat");
    }

    #[test]
    fn test_empty_list() {
        let taxonomy = sample();
        let selector = OutcastSelector::new(&taxonomy);
        assert!(matches!(
            selector.outcast(&[]),
            Err(TaxonetError::EmptyTermList)
        ));
    }

    #[test]
    fn test_unknown_term_propagates() {
        let taxonomy = sample();
        let selector = OutcastSelector::new(&taxonomy);
        assert!(matches!(
            selector.outcast(&["cat", "unicorn"]),
            Err(TaxonetError::UnknownTerm(_))
        ));
    }
}
