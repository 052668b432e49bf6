use cracking_core::models::profile::{ProfileField, ProfileRecord};
use cracking_portal::summary::{CarerSummary, NOT_YET_PROVIDED};

#[test]
fn fresh_profile_lists_every_field() {
    let summary = CarerSummary::from_profile(&ProfileRecord::default());
    assert_eq!(summary.total, 9);
    assert_eq!(summary.rows.len(), 9);
    let fields: Vec<_> = summary.rows.iter().map(|r| r.field).collect();
    assert_eq!(fields, ProfileField::ALL);
    assert_eq!(summary.title, "About your loved one");
}

#[test]
fn stage_always_has_a_value() {
    let summary = CarerSummary::from_profile(&ProfileRecord::default());
    let stage = summary.row(ProfileField::Stage).unwrap();
    assert_eq!(stage.value.as_deref(), Some("Early Stage"));
}

#[test]
fn fresh_profile_has_nothing_provided() {
    let summary = CarerSummary::from_profile(&ProfileRecord::default());
    assert_eq!(summary.provided, 0);
}

#[test]
fn stage_counts_once_it_leaves_the_default() {
    let late = ProfileRecord::default()
        .with_field(ProfileField::Stage, "late")
        .unwrap();
    assert_eq!(CarerSummary::from_profile(&late).provided, 1);

    let back = late.with_field(ProfileField::Stage, "early").unwrap();
    assert_eq!(CarerSummary::from_profile(&back).provided, 0);
}

#[test]
fn empty_fields_use_the_placeholder() {
    let profile = ProfileRecord::default()
        .with_field(ProfileField::Name, "Robert")
        .unwrap();
    let summary = CarerSummary::from_profile(&profile);

    assert_eq!(summary.title, "About Robert");
    let music = summary.row(ProfileField::Music).unwrap();
    assert_eq!(music.value, None);
    assert_eq!(music.display_value(&summary.placeholder), NOT_YET_PROVIDED);
    assert_eq!(
        summary.row(ProfileField::Name).unwrap().display_value(NOT_YET_PROVIDED),
        "Robert"
    );
}

#[test]
fn wishes_is_shown_even_though_no_question_asks_for_it() {
    let profile = ProfileRecord::default()
        .with_field(ProfileField::Wishes, "To stay at home")
        .unwrap();
    let summary = CarerSummary::from_profile(&profile);
    let wishes = summary.row(ProfileField::Wishes).unwrap();
    assert_eq!(wishes.value.as_deref(), Some("To stay at home"));
    assert_eq!(summary.provided, 1);
}

#[test]
fn custom_placeholder_replaces_default() {
    let summary = CarerSummary::from_profile(&ProfileRecord::default()).with_placeholder("—");
    assert_eq!(summary.placeholder, "—");
}
