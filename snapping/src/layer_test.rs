use super::*;

fn layer(id: &str, title: &str, geometry_type: Option<GeometryType>, visible: bool) -> LayerInfo {
    LayerInfo::new(id, title, geometry_type, visible)
}

// =============================================================
// GeometryType
// =============================================================

#[test]
fn only_point_polyline_polygon_support_feature_snapping() {
    assert!(GeometryType::Point.supports_feature_snapping());
    assert!(GeometryType::Polyline.supports_feature_snapping());
    assert!(GeometryType::Polygon.supports_feature_snapping());
    assert!(!GeometryType::Multipoint.supports_feature_snapping());
    assert!(!GeometryType::Multipatch.supports_feature_snapping());
    assert!(!GeometryType::Mesh.supports_feature_snapping());
}

#[test]
fn geometry_type_deserializes_from_lowercase_name() {
    let parsed: GeometryType = serde_json::from_str("\"polyline\"").unwrap();
    assert_eq!(parsed, GeometryType::Polyline);
    assert_eq!(parsed.to_string(), "polyline");
}

// =============================================================
// LayerCandidate
// =============================================================

#[test]
fn candidate_label_includes_title_and_geometry() {
    let info = layer("rec", "Recreation", Some(GeometryType::Point), true);
    let candidate = LayerCandidate::from_info(&info).unwrap();
    assert_eq!(candidate.label(), "Recreation (point)");
}

#[test]
fn hidden_layer_is_not_a_candidate() {
    let info = layer("trails", "Trails", Some(GeometryType::Polyline), false);
    assert!(!info.is_snapping_candidate());
    assert!(LayerCandidate::from_info(&info).is_none());
}

#[test]
fn layer_without_geometry_is_not_a_candidate() {
    let info = layer("basemap", "Topographic", None, true);
    assert!(!info.is_snapping_candidate());
    assert!(LayerCandidate::from_info(&info).is_none());
}

#[test]
fn mesh_layer_is_not_a_candidate() {
    let info = layer("buildings", "Buildings", Some(GeometryType::Mesh), true);
    assert!(LayerCandidate::from_info(&info).is_none());
}

// =============================================================
// discover_candidates
// =============================================================

#[test]
fn discover_keeps_visible_point_and_polygon_only() {
    let layers = vec![
        layer("a", "A", Some(GeometryType::Point), true),
        layer("b", "B", Some(GeometryType::Polygon), true),
        layer("c", "C", Some(GeometryType::Polyline), false),
    ];
    let ids: Vec<_> = discover_candidates(&layers).into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![LayerId::from("a"), LayerId::from("b")]);
}

#[test]
fn discover_preserves_provider_order() {
    let layers = vec![
        layer("z", "Zones", Some(GeometryType::Polygon), true),
        layer("a", "Anchors", Some(GeometryType::Point), true),
    ];
    let titles: Vec<_> = discover_candidates(&layers).into_iter().map(|c| c.title).collect();
    assert_eq!(titles, vec!["Zones", "Anchors"]);
}

#[test]
fn discover_drops_repeated_layer_ids() {
    let layers = vec![
        layer("a", "A", Some(GeometryType::Point), true),
        layer("a", "A again", Some(GeometryType::Point), true),
    ];
    let candidates = discover_candidates(&layers);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].title, "A");
}

#[test]
fn discover_on_empty_scene_is_empty() {
    assert!(discover_candidates(&[]).is_empty());
}

// =============================================================
// LayerId
// =============================================================

#[test]
fn generated_ids_are_unique() {
    assert_ne!(LayerId::generate(), LayerId::generate());
}

#[test]
fn layer_id_serializes_as_plain_string() {
    let json = serde_json::to_string(&LayerId::from("rec-1")).unwrap();
    assert_eq!(json, "\"rec-1\"");
}

#[test]
fn geometry_type_parses_from_name() {
    assert_eq!("polygon".parse::<GeometryType>(), Ok(GeometryType::Polygon));
    assert_eq!("Point".parse::<GeometryType>(), Ok(GeometryType::Point));
    assert_eq!("circle".parse::<GeometryType>(), Err(UnknownGeometryType("circle".into())));
}
