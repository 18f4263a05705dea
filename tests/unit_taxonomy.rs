// tests/unit_taxonomy.rs
//! Term-level queries over an assembled taxonomy.

use taxonet_core::taxonomy::{HypernymRecord, OutcastSelector, SynsetRecord};
use taxonet_core::{Taxonomy, TaxonetError};

fn synset(id: usize, terms: &[&str]) -> SynsetRecord {
    SynsetRecord::new(id, terms.iter().map(ToString::to_string).collect())
}

// A miniature noun hierarchy. "jaguar" is polysemous: it names both the
// big cat (7) and the car make (9).
//
//                 entity(0)
//                    |
//           physical_entity(1)
//              /           \
//        object(2)    living_thing(3)
//            |              |
//        vehicle(8)    organism(4)
//            |              |
//    [car jaguar](9)    animal(5)
//                       /      \
//            [feline cat](6)  dog(10)
//                    |
//           [big_cat jaguar](7)
fn sample() -> Taxonomy {
    let synsets = vec![
        synset(0, &["entity"]),
        synset(1, &["physical_entity"]),
        synset(2, &["object"]),
        synset(3, &["living_thing"]),
        synset(4, &["organism"]),
        synset(5, &["animal"]),
        synset(6, &["feline", "cat"]),
        synset(7, &["big_cat", "jaguar"]),
        synset(8, &["vehicle"]),
        synset(9, &["car", "jaguar"]),
        synset(10, &["dog"]),
    ];
    let hypernyms = vec![
        HypernymRecord::new(1, vec![0]),
        HypernymRecord::new(2, vec![1]),
        HypernymRecord::new(3, vec![1]),
        HypernymRecord::new(4, vec![3]),
        HypernymRecord::new(5, vec![4]),
        HypernymRecord::new(6, vec![5]),
        HypernymRecord::new(7, vec![6]),
        HypernymRecord::new(8, vec![2]),
        HypernymRecord::new(9, vec![8]),
        HypernymRecord::new(10, vec![5]),
    ];
    Taxonomy::new(&synsets, &hypernyms).unwrap()
}

#[test]
fn test_distance_between_siblings() {
    let taxonomy = sample();
    assert_eq!(taxonomy.distance("cat", "dog").unwrap(), 2);
    assert_eq!(taxonomy.sca("cat", "dog").unwrap(), "animal");
}

#[test]
fn test_polysemous_term_uses_nearest_sense() {
    let taxonomy = sample();
    // The big-cat sense of "jaguar" sits one edge below "feline cat".
    assert_eq!(taxonomy.distance("jaguar", "cat").unwrap(), 1);
    // The car sense wins against "vehicle".
    assert_eq!(taxonomy.distance("jaguar", "vehicle").unwrap(), 1);
    assert_eq!(taxonomy.sca("jaguar", "vehicle").unwrap(), "vehicle");
}

#[test]
fn test_terms_sharing_a_synset_have_zero_distance() {
    let taxonomy = sample();
    assert_eq!(taxonomy.distance("car", "jaguar").unwrap(), 0);
    assert_eq!(taxonomy.sca("car", "jaguar").unwrap(), "car jaguar");
}

#[test]
fn test_distance_is_symmetric() {
    let taxonomy = sample();
    for (a, b) in [("cat", "dog"), ("jaguar", "vehicle"), ("dog", "entity")] {
        assert_eq!(
            taxonomy.distance(a, b).unwrap(),
            taxonomy.distance(b, a).unwrap()
        );
        assert_eq!(taxonomy.sca(a, b).unwrap(), taxonomy.sca(b, a).unwrap());
    }
}

#[test]
fn test_relate_combines_distance_and_ancestor() {
    let taxonomy = sample();
    let relatedness = taxonomy.relate("cat", "dog").unwrap();
    assert_eq!(relatedness.distance, 2);
    assert_eq!(relatedness.ancestor, "animal");
}

#[test]
fn test_unknown_term() {
    let taxonomy = sample();
    assert!(!taxonomy.index().is_term("unicorn"));
    assert!(matches!(
        taxonomy.distance("unicorn", "cat"),
        Err(TaxonetError::UnknownTerm(t)) if t == "unicorn"
    ));
}

#[test]
fn test_term_enumeration() {
    let taxonomy = sample();
    let mut terms: Vec<&str> = taxonomy.index().terms().collect();
    terms.sort_unstable();
    assert_eq!(terms.len(), 13);
    assert!(terms.contains(&"jaguar"));
    assert!(terms.contains(&"physical_entity"));
}

#[test]
fn test_outcast_prefers_most_distant_cluster_member() {
    let taxonomy = sample();
    let selector = OutcastSelector::new(&taxonomy);
    let outcast = selector.outcast(&["cat", "jaguar", "dog", "car"]).unwrap();
    assert_eq!(outcast, "car");
}

#[test]
fn test_cyclic_hypernym_relation_rejected() {
    let synsets = vec![synset(0, &["a"]), synset(1, &["b"])];
    let hypernyms = vec![
        HypernymRecord::new(0, vec![1]),
        HypernymRecord::new(1, vec![0]),
    ];
    assert!(matches!(
        Taxonomy::new(&synsets, &hypernyms),
        Err(TaxonetError::CycleDetected(_))
    ));
}
