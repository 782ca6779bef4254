//! Tests for the add screen.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockDirectoryApi, MockNavigator, MockNotifier};
use crate::domain::test_doubles::{InMemoryDirectory, RecordingNavigator, RecordingNotifier};
use crate::domain::{DesignationId, EmployeeId, NewDesignation, NewEmployee};

struct Harness {
    directory: Arc<InMemoryDirectory>,
    notifier: Arc<RecordingNotifier>,
    navigator: Arc<RecordingNavigator>,
    screen: AddScreen,
}

#[fixture]
fn harness() -> Harness {
    let directory = Arc::new(InMemoryDirectory::new(
        vec![Employee::new(1, "A", "Dev")],
        vec![Designation::new(1, "Dev")],
    ));
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let screen = AddScreen::new(directory.clone(), notifier.clone(), navigator.clone());
    Harness {
        directory,
        notifier,
        navigator,
        screen,
    }
}

fn employee_draft(name: &str, designation: &str) -> EmployeeDraft {
    EmployeeDraft {
        name: name.to_owned(),
        designation: designation.to_owned(),
        manager: None,
    }
}

#[rstest]
#[tokio::test]
async fn activation_loads_designations_then_employees(harness: Harness) {
    harness.screen.activate().await.expect("reference data");

    assert_eq!(
        harness.directory.calls(),
        ["GET /designations", "GET /employees"]
    );
    let view = harness.screen.view();
    assert_eq!(view.designations[0].name, "Dev");
    assert_eq!(view.employees[0].name, "A");
}

#[rstest]
#[tokio::test]
async fn creating_an_employee_posts_once_and_opens_the_record(harness: Harness) {
    harness.screen.activate().await.expect("reference data");

    let route = harness
        .screen
        .add_employee(&employee_draft("B", "Dev"))
        .await
        .expect("created");

    assert_eq!(
        harness.directory.created_employees(),
        [NewEmployee {
            name: "B".to_owned(),
            job_title: "Dev".to_owned(),
            manager: None,
        }]
    );
    let posts = harness
        .directory
        .calls()
        .into_iter()
        .filter(|call| call == "POST /employees")
        .count();
    assert_eq!(posts, 1);
    assert_eq!(route, Route::employee(EmployeeId::new(2)));
    assert_eq!(harness.navigator.routes(), [route]);
    assert!(harness.notifier.messages().is_empty());
    assert_eq!(harness.screen.phase(), OperationPhase::Succeeded);
}

#[rstest]
#[case::empty_name("", "Dev", "Name cannot be empty")]
#[case::empty_name_and_designation("", "", "Name cannot be empty")]
#[case::empty_designation("B", "", "Designation cannot be empty")]
#[tokio::test]
async fn incomplete_employee_drafts_never_reach_the_api(
    #[case] name: &str,
    #[case] designation: &str,
    #[case] notice: &str,
) {
    let mut api = MockDirectoryApi::new();
    api.expect_create_employee().times(0);
    let mut navigator = MockNavigator::new();
    navigator.expect_navigate().times(0);
    let notifier = Arc::new(RecordingNotifier::default());
    let screen = AddScreen::new(Arc::new(api), notifier.clone(), Arc::new(navigator));

    let err = screen
        .add_employee(&employee_draft(name, designation))
        .await
        .expect_err("draft is incomplete");

    assert!(matches!(err, SubmitError::Invalid(_)));
    assert_eq!(notifier.messages(), [notice]);
}

#[rstest]
#[tokio::test]
async fn rejected_employee_shows_server_message(harness: Harness) {
    harness.directory.fail_next(DirectoryApiError::status(
        400_u16,
        "Manager with id 9 not found",
    ));
    let draft = EmployeeDraft {
        manager: Some(EmployeeId::new(9)),
        ..employee_draft("B", "Dev")
    };

    let err = harness
        .screen
        .add_employee(&draft)
        .await
        .expect_err("server rejects");

    assert!(matches!(err, SubmitError::Remote(_)));
    assert_eq!(harness.notifier.messages(), ["Manager with id 9 not found"]);
    assert!(harness.navigator.routes().is_empty());
    assert_eq!(harness.screen.phase(), OperationPhase::Failed);
}

#[rstest]
#[tokio::test]
async fn creating_a_designation_returns_home(harness: Harness) {
    let draft = DesignationDraft {
        name: "Lead".to_owned(),
        higher: Some(DesignationId::new(1)),
        equals: false,
    };

    let route = harness
        .screen
        .add_designation(&draft)
        .await
        .expect("created");

    assert_eq!(route, Route::Home);
    assert_eq!(harness.navigator.routes(), [Route::Home]);
    assert_eq!(
        harness.directory.created_designations(),
        [NewDesignation {
            name: "Lead".to_owned(),
            higher: Some(DesignationId::new(1)),
            equals: false,
        }]
    );
}

#[tokio::test]
async fn unnamed_designation_is_rejected_locally() {
    let mut api = MockDirectoryApi::new();
    api.expect_create_designation().times(0);
    let mut notifier = MockNotifier::new();
    notifier
        .expect_notify()
        .withf(|message: &str| message == "Name cannot be empty")
        .times(1)
        .return_const(());
    let screen = AddScreen::new(
        Arc::new(api),
        Arc::new(notifier),
        Arc::new(MockNavigator::new()),
    );

    let err = screen
        .add_designation(&DesignationDraft::default())
        .await
        .expect_err("name is required");

    assert_eq!(err, SubmitError::Invalid(DraftError::EmptyName));
}

#[tokio::test]
async fn failed_activation_is_reported() {
    let mut api = MockDirectoryApi::new();
    api.expect_list_designations()
        .times(1)
        .return_once(|| Err(DirectoryApiError::transport("connection refused")));
    api.expect_list_employees().times(0);
    let screen = AddScreen::new(
        Arc::new(api),
        Arc::new(MockNotifier::new()),
        Arc::new(MockNavigator::new()),
    );

    assert!(screen.activate().await.is_err());
    assert_eq!(*screen.view(), AddView::default());
}

#[tokio::test]
async fn activation_without_employees_keeps_the_designations() {
    let mut api = MockDirectoryApi::new();
    api.expect_list_designations()
        .times(1)
        .return_once(|| Ok(vec![Designation::new(1, "Director")]));
    api.expect_list_employees()
        .times(1)
        .return_once(|| Err(DirectoryApiError::status(404_u16, "No employees found")));
    let screen = AddScreen::new(
        Arc::new(api),
        Arc::new(MockNotifier::new()),
        Arc::new(MockNavigator::new()),
    );

    assert_eq!(screen.activate().await, Ok(FetchOutcome::Applied));
    let view = screen.view();
    assert_eq!(view.designations.len(), 1);
    assert!(view.employees.is_empty());
    assert_eq!(screen.phase(), OperationPhase::Succeeded);
}

#[tokio::test]
async fn first_designation_form_loads_from_an_empty_directory() {
    let directory = Arc::new(InMemoryDirectory::default());
    let screen = AddScreen::new(
        directory.clone(),
        Arc::new(RecordingNotifier::default()),
        Arc::new(RecordingNavigator::default()),
    );

    screen.activate().await.expect("empty directory loads");

    assert_eq!(directory.calls(), ["GET /designations", "GET /employees"]);
    assert_eq!(*screen.view(), AddView::default());
}
