use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn empty_lookup_yields_defaults() {
    let cfg = SnappingConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, SnappingConfig::default());
    assert_eq!(cfg.view_timeout, Duration::from_secs(DEFAULT_VIEW_TIMEOUT_SECS));
    assert_eq!(cfg.load_timeout, Duration::from_secs(DEFAULT_LOAD_TIMEOUT_SECS));
    assert_eq!(cfg.initial_sources, InitialSources::All);
}

#[test]
fn parses_overrides() {
    let cfg = SnappingConfig::from_lookup(lookup_from(&[
        ("SNAPPING_VIEW_TIMEOUT_SECS", "5"),
        ("SNAPPING_LOAD_TIMEOUT_SECS", " 12 "),
        ("SNAPPING_INITIAL_SOURCES", "none"),
    ]))
    .unwrap();
    assert_eq!(cfg.view_timeout, Duration::from_secs(5));
    assert_eq!(cfg.load_timeout, Duration::from_secs(12));
    assert_eq!(cfg.initial_sources, InitialSources::None);
}

#[test]
fn unparsable_timeout_falls_back_to_default() {
    let cfg = SnappingConfig::from_lookup(lookup_from(&[("SNAPPING_LOAD_TIMEOUT_SECS", "soon")])).unwrap();
    assert_eq!(cfg.load_timeout, Duration::from_secs(DEFAULT_LOAD_TIMEOUT_SECS));
}

#[test]
fn unknown_initial_sources_errors() {
    let err = SnappingConfig::from_lookup(lookup_from(&[("SNAPPING_INITIAL_SOURCES", "some")]))
        .unwrap_err()
        .to_string();
    assert!(err.contains("SNAPPING_INITIAL_SOURCES"));
    assert!(err.contains("'some'"));
}

#[test]
fn config_error_converts_into_snapping_error() {
    let err = SnappingConfig::from_lookup(lookup_from(&[("SNAPPING_INITIAL_SOURCES", "few")])).unwrap_err();
    let message = err.to_string();
    let wrapped = crate::error::SnappingError::from(err);
    assert!(matches!(wrapped, crate::error::SnappingError::Config(_)));
    assert_eq!(wrapped.to_string(), message);
}
