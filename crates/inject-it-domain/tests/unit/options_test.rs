//! Tests for the options record

use inject_it_domain::{OptionValue, OptionsRecord, ResolutionOption};

#[test]
fn test_record_keeps_first_occurrence_order() {
    let mut record = OptionsRecord::new();
    record.enable(ResolutionOption::SelfOnly);
    record.enable(ResolutionOption::Optional);
    record.enable(ResolutionOption::SelfOnly);

    assert_eq!(
        record.options(),
        &[ResolutionOption::SelfOnly, ResolutionOption::Optional]
    );
    assert_eq!(record.len(), 2);
}

#[test]
fn test_entries_are_all_true() {
    let record: OptionsRecord = [ResolutionOption::Host, ResolutionOption::SkipSelf]
        .into_iter()
        .collect();

    let entries: Vec<_> = record.entries().collect();
    assert_eq!(
        entries,
        vec![
            ("host", OptionValue::Bool(true)),
            ("skipSelf", OptionValue::Bool(true)),
        ]
    );
}

#[test]
fn test_keys_round_trip() {
    for option in [
        ResolutionOption::Optional,
        ResolutionOption::SelfOnly,
        ResolutionOption::SkipSelf,
        ResolutionOption::Host,
    ] {
        assert_eq!(ResolutionOption::from_key(option.key()), Some(option));
    }
    assert_eq!(ResolutionOption::from_key("skipself"), None);
}

#[test]
fn test_option_value_literals() {
    assert_eq!(OptionValue::Bool(true).to_string(), "true");
    assert_eq!(OptionValue::Number(3.0).to_string(), "3");
    assert_eq!(OptionValue::Str("it's".to_string()).to_string(), "'it\\'s'");
}
