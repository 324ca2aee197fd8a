use super::*;

#[test]
fn default_state_is_unchecked_and_enabled() {
    assert_eq!(CheckboxState::default(), CheckboxState::ENABLED);
    assert!(!CheckboxState::ENABLED.disabled);
}

#[test]
fn disabled_constant_is_unchecked() {
    assert_eq!(CheckboxState::DISABLED, CheckboxState::new(false, true));
}

#[test]
fn mirroring_on_is_checked_and_actionable() {
    assert_eq!(CheckboxState::mirroring(true), CheckboxState::new(true, false));
}

#[test]
fn mirroring_off_is_unchecked_and_disabled() {
    assert_eq!(CheckboxState::mirroring(false), CheckboxState::DISABLED);
}

#[test]
fn fixed_checkboxes_have_option_labels() {
    assert_eq!(CheckboxId::Enabled.fixed_label(), Some("SnappingOptions.enabled"));
    assert_eq!(CheckboxId::SelfSnapping.fixed_label(), Some("SnappingOptions.selfEnabled"));
    assert_eq!(CheckboxId::FeatureSnapping.fixed_label(), Some("SnappingOptions.featureEnabled"));
    assert_eq!(CheckboxId::Layer(LayerId::from("a")).fixed_label(), None);
}

#[test]
fn checkbox_id_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&CheckboxId::SelfSnapping).unwrap(), "\"self_snapping\"");
    assert_eq!(
        serde_json::to_string(&CheckboxId::Layer(LayerId::from("a"))).unwrap(),
        "{\"layer\":\"a\"}"
    );
}
