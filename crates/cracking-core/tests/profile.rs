use cracking_core::error::CoreError;
use cracking_core::models::profile::{ProfileField, ProfileRecord, Stage};

#[test]
fn default_record_is_empty_and_early() {
    let record = ProfileRecord::default();
    assert_eq!(record.stage, Stage::Early);
    for field in ProfileField::ALL {
        if field == ProfileField::Stage {
            assert_eq!(record.field(field), "early");
        } else {
            assert_eq!(record.field(field), "", "{field} should start empty");
        }
        assert!(!record.is_provided(field));
    }
}

#[test]
fn name_then_stage_scenario() {
    let mut record = ProfileRecord::default();
    record.set_field(ProfileField::Name, "Robert").unwrap();
    record.set_field(ProfileField::Stage, "late").unwrap();

    let expected = ProfileRecord {
        name: "Robert".to_string(),
        stage: Stage::Late,
        ..ProfileRecord::default()
    };
    assert_eq!(record, expected);
}

#[test]
fn set_field_only_touches_one_field() {
    let base = ProfileRecord::default()
        .with_field(ProfileField::Name, "Robert")
        .unwrap()
        .with_field(ProfileField::Music, "Frank Sinatra")
        .unwrap();

    for target in ProfileField::ALL {
        let value = if target == ProfileField::Stage { "late" } else { "changed" };
        let updated = base.clone().with_field(target, value).unwrap();
        for other in ProfileField::ALL.into_iter().filter(|f| *f != target) {
            assert_eq!(updated.field(other), base.field(other), "{other} changed when setting {target}");
        }
        assert_eq!(updated.field(target), value);
    }
}

#[test]
fn set_field_is_idempotent() {
    let once = ProfileRecord::default()
        .with_field(ProfileField::Routines, "Tea at 3pm")
        .unwrap();
    let twice = once.clone().with_field(ProfileField::Routines, "Tea at 3pm").unwrap();
    assert_eq!(once, twice);
}

#[test]
fn empty_string_is_accepted_and_clears() {
    let mut record = ProfileRecord::default();
    record.set_field(ProfileField::Dislikes, "Loud noises").unwrap();
    assert!(record.is_provided(ProfileField::Dislikes));

    record.set_field(ProfileField::Dislikes, "").unwrap();
    assert_eq!(record.dislikes, "");
    assert!(!record.is_provided(ProfileField::Dislikes));
}

#[test]
fn invalid_stage_is_rejected_without_change() {
    let mut record = ProfileRecord::default()
        .with_field(ProfileField::Stage, "late")
        .unwrap();
    let before = record.clone();

    let err = record.set_field(ProfileField::Stage, "middle").unwrap_err();
    assert_eq!(err, CoreError::InvalidStage("middle".to_string()));
    assert_eq!(record, before);
}

#[test]
fn stage_provided_only_when_not_default() {
    let mut record = ProfileRecord::default();
    record.set_field(ProfileField::Stage, "Late").unwrap();
    assert!(record.is_provided(ProfileField::Stage));
    record.set_field(ProfileField::Stage, "early").unwrap();
    assert!(!record.is_provided(ProfileField::Stage));
}

#[test]
fn wishes_is_settable_directly() {
    let record = ProfileRecord::default()
        .with_field(ProfileField::Wishes, "To stay at home")
        .unwrap();
    assert_eq!(record.wishes, "To stay at home");
}

#[test]
fn field_names_parse() {
    assert_eq!("Communication".parse::<ProfileField>().unwrap(), ProfileField::Communication);
    assert!(matches!(
        "hobbies".parse::<ProfileField>(),
        Err(CoreError::UnknownField(_))
    ));
}

#[test]
fn record_serializes_with_snake_case_stage() {
    let record = ProfileRecord::default()
        .with_field(ProfileField::Stage, "late")
        .unwrap();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["stage"], "late");
    assert_eq!(json["wishes"], "");
}
