use cracking_core::error::CoreError;
use cracking_core::models::profile::{ProfileField, ProfileRecord, Stage};
use cracking_questionnaire::error::QuestionnaireError;
use cracking_questionnaire::navigator::{Navigator, Position, Step};
use cracking_questionnaire::Catalog;

fn asking(category_id: &str, question_index: usize) -> Position {
    Position::Asking {
        category_id: category_id.to_string(),
        question_index,
    }
}

#[test]
fn starts_at_overview() {
    let nav = Navigator::new(Catalog::reference());
    assert_eq!(nav.position(), &Position::Overview);
    assert!(nav.current_question().is_none());
    assert_eq!(nav.progress_ratio(), None);
}

#[test]
fn history_walkthrough_scenario() {
    let mut nav = Navigator::new(Catalog::reference());
    nav.select_category("history").unwrap();
    assert_eq!(nav.position(), &asking("history", 0));

    assert_eq!(nav.next().unwrap(), Step::Advanced);
    assert_eq!(nav.position(), &asking("history", 1));

    assert_eq!(nav.next().unwrap(), Step::Completed);
    assert_eq!(nav.position(), &Position::Overview);
}

#[test]
fn every_category_completes_after_len_steps() {
    let catalog = Catalog::reference();
    let mut nav = Navigator::new(catalog);
    for category in catalog.categories() {
        let len = category.questions().len();
        nav.select_category(category.id()).unwrap();
        for _ in 0..len - 1 {
            assert_eq!(nav.next().unwrap(), Step::Advanced);
        }
        assert_eq!(nav.position(), &asking(category.id(), len - 1));
        assert!(nav.is_last_question());
        assert_eq!(nav.next().unwrap(), Step::Completed);
        assert_eq!(nav.position(), &Position::Overview);
    }
}

#[test]
fn back_steps_then_cancels() {
    let mut nav = Navigator::new(Catalog::reference());
    nav.select_category("daily").unwrap();
    nav.next().unwrap();

    assert_eq!(nav.back().unwrap(), Step::Retreated);
    assert_eq!(nav.position(), &asking("daily", 0));

    assert_eq!(nav.back().unwrap(), Step::Cancelled);
    assert_eq!(nav.position(), &Position::Overview);
}

#[test]
fn close_returns_to_overview_from_any_question() {
    let mut nav = Navigator::new(Catalog::reference());
    for index in 0..2 {
        nav.select_category("needs").unwrap();
        nav.go_to(index).unwrap();
        nav.close();
        assert_eq!(nav.position(), &Position::Overview);
    }
    nav.close();
    assert_eq!(nav.position(), &Position::Overview);
}

#[test]
fn unknown_category_is_rejected() {
    let mut nav = Navigator::new(Catalog::reference());
    let err = nav.select_category("hobbies").unwrap_err();
    assert_eq!(err, QuestionnaireError::UnknownCategory("hobbies".to_string()));
    assert_eq!(nav.position(), &Position::Overview);

    nav.select_category("basics").unwrap();
    nav.next().unwrap();
    assert!(nav.select_category("").is_err());
    assert_eq!(nav.position(), &asking("basics", 1));
}

#[test]
fn out_of_range_jump_is_rejected() {
    let mut nav = Navigator::new(Catalog::reference());
    nav.select_category("history").unwrap();
    let err = nav.go_to(2).unwrap_err();
    assert_eq!(
        err,
        QuestionnaireError::QuestionOutOfRange {
            category_id: "history".to_string(),
            index: 2,
            len: 2,
        }
    );
    assert_eq!(nav.position(), &asking("history", 0));
}

#[test]
fn transitions_from_overview_are_rejected() {
    let mut nav = Navigator::new(Catalog::reference());
    assert_eq!(nav.next().unwrap_err(), QuestionnaireError::NotAsking);
    assert_eq!(nav.back().unwrap_err(), QuestionnaireError::NotAsking);
    assert_eq!(nav.go_to(0).unwrap_err(), QuestionnaireError::NotAsking);
    assert_eq!(nav.position(), &Position::Overview);
}

#[test]
fn progress_ratio_runs_from_one_over_n_to_one() {
    let mut nav = Navigator::new(Catalog::reference());
    nav.select_category("basics").unwrap();
    assert_eq!(nav.progress_ratio(), Some(0.5));
    assert_eq!(nav.question_number(), Some((1, 2)));
    assert_eq!(nav.back_label(), Some("Cancel"));
    assert_eq!(nav.next_label(), Some("Next"));

    nav.next().unwrap();
    assert_eq!(nav.progress_ratio(), Some(1.0));
    assert_eq!(nav.back_label(), Some("Back"));
    assert_eq!(nav.next_label(), Some("Finish"));
}

#[test]
fn moving_between_questions_leaves_profile_alone() {
    let mut nav = Navigator::new(Catalog::reference());
    let mut profile = ProfileRecord::default();

    nav.select_category("basics").unwrap();
    assert_eq!(nav.update_field(&mut profile, "Robert").unwrap(), ProfileField::Name);
    let snapshot = profile.clone();

    nav.next().unwrap();
    nav.back().unwrap();
    nav.close();
    assert_eq!(profile, snapshot);
}

#[test]
fn answers_go_to_the_current_question_field() {
    let mut nav = Navigator::new(Catalog::reference());
    let mut profile = ProfileRecord::default();

    nav.select_category("basics").unwrap();
    nav.update_field(&mut profile, "Robert").unwrap();
    nav.next().unwrap();
    nav.update_field(&mut profile, "late").unwrap();

    assert_eq!(profile.name, "Robert");
    assert_eq!(profile.stage, Stage::Late);
    assert_eq!(nav.catalog().is_started("basics", &profile), Some(true));
}

#[test]
fn answer_without_open_question_is_rejected() {
    let nav = Navigator::new(Catalog::reference());
    let mut profile = ProfileRecord::default();
    assert_eq!(
        nav.update_field(&mut profile, "anything").unwrap_err(),
        QuestionnaireError::NotAsking
    );
    assert_eq!(profile, ProfileRecord::default());
}

#[test]
fn bad_stage_answer_surfaces_core_error() {
    let mut nav = Navigator::new(Catalog::reference());
    let mut profile = ProfileRecord::default();
    nav.select_category("basics").unwrap();
    nav.next().unwrap();

    let err = nav.update_field(&mut profile, "moderate").unwrap_err();
    assert_eq!(
        err,
        QuestionnaireError::Profile(CoreError::InvalidStage("moderate".to_string()))
    );
    assert_eq!(profile.stage, Stage::Early);
}

#[test]
fn position_serializes_with_state_tag() {
    let mut nav = Navigator::new(Catalog::reference());
    nav.select_category("daily").unwrap();
    let json = serde_json::to_value(nav.position()).unwrap();
    assert_eq!(json["state"], "asking");
    assert_eq!(json["category_id"], "daily");
    assert_eq!(json["question_index"], 0);
}
