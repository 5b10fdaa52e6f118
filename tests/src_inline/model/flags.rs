use super::*;

use crate::model::custom::is_valid_flag_key;

#[test]
fn test_catalogue_size() {
    assert_eq!(flag_order().len(), FLAG_COUNT);
}

#[test]
fn test_catalogue_has_no_duplicates() {
    let order = flag_order();
    for (i, flag) in order.iter().enumerate() {
        assert!(!order[i + 1..].contains(flag), "{:?} repeated", flag);
    }
}

#[test]
fn test_declaration_order_endpoints() {
    assert_eq!(flag_order()[0], Flag::NoReadData);
    assert_eq!(
        flag_order()[FLAG_COUNT - 1],
        Flag::SangerConfirmationRecommended
    );
}

#[test]
fn test_name_round_trip() {
    for flag in flag_order() {
        assert_eq!(Flag::from_name(flag.name()), Some(*flag));
    }
    assert_eq!(Flag::from_name("flag_unknown"), None);
    assert_eq!(Flag::from_name(""), None);
}

#[test]
fn test_names_match_flag_key_pattern() {
    for flag in flag_order() {
        assert!(is_valid_flag_key(flag.name()), "{}", flag.name());
    }
}

#[test]
fn test_shortcuts_are_unique() {
    let shortcuts = flag_order()
        .iter()
        .filter_map(|f| f.shortcut())
        .collect::<Vec<_>>();
    for (i, shortcut) in shortcuts.iter().enumerate() {
        assert!(!shortcuts[i + 1..].contains(shortcut), "{shortcut} repeated");
    }
}

#[test]
fn test_group_flags_have_no_shortcut() {
    for flag in [
        Flag::MappingError,
        Flag::DubiousReadAlignment,
        Flag::GenotypingError,
        Flag::InconsequentialTranscript,
        Flag::Rescue,
    ] {
        assert_eq!(flag.shortcut(), None, "{:?}", flag);
    }
}

#[test]
fn test_category_partition() {
    let count = |category: FlagCategory| {
        flag_order()
            .iter()
            .filter(|f| f.category() == category)
            .count()
    };
    assert_eq!(count(FlagCategory::Technical), 19);
    assert_eq!(count(FlagCategory::Impact), 16);
    assert_eq!(count(FlagCategory::Comment), 5);
}

#[test]
fn test_flag_state_defaults_to_unchecked() {
    let state = FlagState::new();
    assert!(!state.any_checked());
    for flag in flag_order() {
        assert!(!state.get(*flag));
    }
}

#[test]
fn test_flag_state_set_get() {
    let mut state = FlagState::new();
    state.set(Flag::StrandBias, true);
    assert!(state.get(Flag::StrandBias));
    assert!(state.any_checked());
    assert_eq!(state.checked().collect::<Vec<_>>(), vec![Flag::StrandBias]);

    state.set(Flag::StrandBias, false);
    assert!(!state.any_checked());
}

#[test]
fn test_flag_state_serializes_in_declaration_order() {
    let state = FlagState::new();
    let json = serde_json::to_string(&state).unwrap();
    assert!(json.starts_with("{\"flag_no_read_data\":false"));
    assert!(json.ends_with("\"flag_sanger_confirmation_recommended\":false}"));
}

#[test]
fn test_flag_state_serde_round_trip() {
    let mut state = FlagState::new();
    state.set(Flag::MismappedRead, true);
    state.set(Flag::FlowChartOverridden, true);
    let json = serde_json::to_string(&state).unwrap();
    let back = serde_json::from_str::<FlagState>(&json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn test_flag_state_accepts_partial_maps() {
    let state = serde_json::from_str::<FlagState>(r#"{"flag_rescue":true}"#).unwrap();
    assert!(state.get(Flag::Rescue));
    assert_eq!(state.checked().count(), 1);
}

#[test]
fn test_flag_state_rejects_unknown_keys() {
    assert!(serde_json::from_str::<FlagState>(r#"{"flag_bogus":true}"#).is_err());
}
