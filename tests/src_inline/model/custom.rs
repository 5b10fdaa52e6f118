use super::*;

fn custom(key: &str, label: &str, shortcut: &str) -> CustomFlag {
    CustomFlag {
        key: key.to_string(),
        label: label.to_string(),
        shortcut: shortcut.to_string(),
    }
}

#[test]
fn test_flag_key_pattern() {
    assert!(is_valid_flag_key("flag_team_review"));
    assert!(is_valid_flag_key("flag_x"));
    assert!(is_valid_flag_key("flag_round_2_check"));

    assert!(!is_valid_flag_key("flag_"));
    assert!(!is_valid_flag_key("flag__double"));
    assert!(!is_valid_flag_key("flag_trailing_"));
    assert!(!is_valid_flag_key("flag_Upper"));
    assert!(!is_valid_flag_key("team_review"));
    assert!(!is_valid_flag_key(""));
}

#[test]
fn test_shortcut_pattern() {
    assert!(is_valid_shortcut("TR"));
    assert!(is_valid_shortcut("A2"));

    assert!(!is_valid_shortcut("2A"));
    assert!(!is_valid_shortcut("tr"));
    assert!(!is_valid_shortcut("T"));
    assert!(!is_valid_shortcut("TRX"));
    assert!(!is_valid_shortcut(""));
}

#[test]
fn test_register_and_lookup() {
    let mut registry = CustomFlagRegistry::new();
    registry
        .register(custom("flag_team_review", "Team review", "TV"))
        .unwrap();
    assert!(registry.contains_key("flag_team_review"));
    assert!(!registry.contains_key("flag_other"));
    assert_eq!(registry.all().len(), 1);
}

#[test]
fn test_register_rejects_invalid_fields() {
    let mut registry = CustomFlagRegistry::new();
    assert!(matches!(
        registry.register(custom("bad_key", "Label", "TV")),
        Err(RegistryError::InvalidKey(_))
    ));
    assert!(matches!(
        registry.register(custom(
            "flag_very_long_key_over_the_limit",
            "Label",
            "TV"
        )),
        Err(RegistryError::KeyTooLong(_))
    ));
    assert!(matches!(
        registry.register(custom("flag_a", "", "TV")),
        Err(RegistryError::InvalidLabel(_))
    ));
    assert!(matches!(
        registry.register(custom("flag_a", "Label", "2X")),
        Err(RegistryError::InvalidShortcut(_))
    ));
}

#[test]
fn test_register_rejects_duplicate_key() {
    let mut registry = CustomFlagRegistry::new();
    registry
        .register(custom("flag_team_review", "Team review", "TV"))
        .unwrap();
    assert!(matches!(
        registry.register(custom("flag_team_review", "Again", "U2")),
        Err(RegistryError::DuplicateKey(_))
    ));
}

#[test]
fn test_register_rejects_builtin_key() {
    let mut registry = CustomFlagRegistry::new();
    assert!(matches!(
        registry.register(custom("flag_rescue", "Rescue again", "U2")),
        Err(RegistryError::DuplicateKey(_))
    ));
}

#[test]
fn test_register_rejects_taken_shortcut() {
    let mut registry = CustomFlagRegistry::new();
    // NR belongs to the built-in no-read-data flag.
    assert!(matches!(
        registry.register(custom("flag_a", "Label", "NR")),
        Err(RegistryError::ShortcutInUse(_))
    ));

    registry.register(custom("flag_a", "Label", "U2")).unwrap();
    assert!(matches!(
        registry.register(custom("flag_b", "Label", "U2")),
        Err(RegistryError::ShortcutInUse(_))
    ));
}

#[test]
fn test_from_flags_validates_each_entry() {
    let registry = CustomFlagRegistry::from_flags(vec![
        custom("flag_a", "A", "U1"),
        custom("flag_b", "B", "U2"),
    ])
    .unwrap();
    assert_eq!(registry.all().len(), 2);

    assert!(
        CustomFlagRegistry::from_flags(vec![
            custom("flag_a", "A", "U1"),
            custom("flag_a", "A again", "U2"),
        ])
        .is_err()
    );
}
