use asesmen_cli::flow::{Flow, FlowError, Screen};
use asesmen_core::{AssessmentError, CATALOG_SIZE, ResultRoute};

#[test]
fn flow_starts_on_welcome_without_session() {
    let flow = Flow::new();
    assert_eq!(flow.screen(), Screen::Welcome);
    assert!(flow.session().is_none());
    assert!(!flow.can_request_results());
    assert!(flow.result_scores().is_none());
}

#[test]
fn answering_before_start_is_rejected() {
    let mut flow = Flow::new();
    assert!(matches!(flow.answer(0, true), Err(FlowError::NotStarted)));
    assert!(matches!(flow.request_results(), Err(FlowError::NotStarted)));
}

#[test]
fn results_are_gated_until_complete() {
    let mut flow = Flow::new();
    flow.start_assessment();
    assert_eq!(flow.screen(), Screen::Questionnaire);

    for index in 0..CATALOG_SIZE - 1 {
        flow.answer(index, false).unwrap();
    }
    match flow.request_results() {
        Err(FlowError::Incomplete { answered, total }) => {
            assert_eq!(answered, 53);
            assert_eq!(total, 54);
        }
        other => panic!("expected incomplete, got {other:?}"),
    }
    assert_eq!(flow.screen(), Screen::Questionnaire);

    let progress = flow.answer(CATALOG_SIZE - 1, true).unwrap();
    assert_eq!(progress.answered, 54);
    assert!(flow.can_request_results());

    let route = flow.request_results().unwrap();
    assert_eq!(
        route,
        ResultRoute {
            autism: 0,
            adhd: 0,
            intellectual_disability: 1
        }
    );
    assert_eq!(flow.screen(), Screen::Result(route));

    let scores = flow.result_scores().unwrap();
    assert_eq!(scores.intellectual_disability.percent, 5);
}

#[test]
fn out_of_range_answer_surfaces_core_error() {
    let mut flow = Flow::new();
    flow.start_assessment();
    let err = flow.answer(100, true).unwrap_err();
    assert!(matches!(
        err,
        FlowError::Assessment(AssessmentError::IndexOutOfRange { index: 100, .. })
    ));
}

#[test]
fn restart_discards_session() {
    let mut flow = Flow::new();
    let first_id = flow.start_assessment().id();
    flow.answer(0, true).unwrap();

    flow.restart();
    assert_eq!(flow.screen(), Screen::Welcome);
    assert!(flow.session().is_none());

    let second = flow.start_assessment();
    assert_ne!(second.id(), first_id);
    assert_eq!(second.answered_count(), 0);
}
