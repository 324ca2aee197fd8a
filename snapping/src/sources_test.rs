use super::*;
use crate::layer::GeometryType;

fn source(id: &str) -> FeatureSource {
    FeatureSource::new(LayerCandidate {
        id: LayerId::from(id),
        title: id.to_uppercase(),
        geometry_type: GeometryType::Point,
    })
}

#[test]
fn new_set_is_empty() {
    let set = FeatureSourceSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}

#[test]
fn insert_adds_new_layer() {
    let mut set = FeatureSourceSet::new();
    assert!(set.insert(source("a")));
    assert!(set.contains(&LayerId::from("a")));
    assert_eq!(set.len(), 1);
}

#[test]
fn insert_same_layer_twice_keeps_one_entry() {
    let mut set = FeatureSourceSet::new();
    assert!(set.insert(source("a")));
    assert!(!set.insert(source("a")));
    assert_eq!(set.len(), 1);
}

#[test]
fn insert_then_remove_leaves_no_entry() {
    let mut set = FeatureSourceSet::new();
    set.insert(source("a"));
    set.insert(source("a"));
    let removed = set.remove(&LayerId::from("a"));
    assert_eq!(removed.map(|s| s.layer_id().clone()), Some(LayerId::from("a")));
    assert!(!set.contains(&LayerId::from("a")));
}

#[test]
fn remove_missing_layer_is_none() {
    let mut set = FeatureSourceSet::new();
    set.insert(source("a"));
    assert!(set.remove(&LayerId::from("missing")).is_none());
    assert_eq!(set.len(), 1);
}

#[test]
fn remove_keeps_order_of_remaining_sources() {
    let mut set = FeatureSourceSet::new();
    set.insert(source("a"));
    set.insert(source("b"));
    set.insert(source("c"));
    set.remove(&LayerId::from("b"));
    assert_eq!(set.layer_ids(), vec![LayerId::from("a"), LayerId::from("c")]);
}

#[test]
fn to_vec_matches_iteration_order() {
    let mut set = FeatureSourceSet::new();
    set.insert(source("b"));
    set.insert(source("a"));
    let ids: Vec<_> = set.to_vec().iter().map(|s| s.layer_id().clone()).collect();
    let iter_ids: Vec<_> = set.iter().map(|s| s.layer_id().clone()).collect();
    assert_eq!(ids, iter_ids);
    assert_eq!(ids, vec![LayerId::from("b"), LayerId::from("a")]);
}
