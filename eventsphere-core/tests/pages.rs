mod common;

use common::{event_json, guest_json, task_json};
use eventsphere_core::model::Rsvp;
use eventsphere_core::pages::{
    DashboardPage, EventDetailsPage, LoadState, LoginPage, Notice, Outcome, RegisterPage,
    RsvpPage, RsvpState, SyncStrategy,
};
use eventsphere_core::routes::{Route, RsvpLink};
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn dashboard_empty_state() {
    let (mut server, app) = common::logged_in_backend().await;
    server
        .mock("GET", "/api/events")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let mut page = DashboardPage::new();
    assert!(page.state().is_loading());
    page.load(app.events()).await;

    assert_eq!(page.state(), &LoadState::Loaded(Vec::new()));
    assert_eq!(
        page.empty_message(),
        Some("No events yet. Click “Create Event” to get started.")
    );
}

#[tokio::test]
async fn dashboard_load_failure() {
    let (mut server, app) = common::logged_in_backend().await;
    server
        .mock("GET", "/api/events")
        .with_status(500)
        .create_async()
        .await;

    let mut page = DashboardPage::new();
    page.load(app.events()).await;

    assert_eq!(
        page.state(),
        &LoadState::Failed("Failed to load events. Please log in again.".into())
    );
    assert_eq!(page.empty_message(), None);
}

#[tokio::test]
async fn dashboard_create_refetches_list() {
    let (mut server, app) = common::logged_in_backend().await;
    let create = server
        .mock("POST", "/api/events")
        .match_body(Matcher::PartialJson(json!({ "dateTime": "2025-05-01T14:30:00" })))
        .with_status(200)
        .with_body(event_json(1, json!([]), json!([])).to_string())
        .create_async()
        .await;
    let list = server
        .mock("GET", "/api/events")
        .with_status(200)
        .with_body(json!([event_json(1, json!([]), json!([]))]).to_string())
        .create_async()
        .await;

    let mut page = DashboardPage::new();
    page.open_form();
    page.form.title = "Launch party".into();
    page.form.location = "Rooftop".into();
    page.form.date = "2025-05-01".into();
    page.form.time = "14:30".into();

    let outcome = page.create_event(app.events()).await;

    create.assert_async().await;
    list.assert_async().await;
    assert_eq!(outcome, Outcome::Synced(SyncStrategy::RefetchOnMutate));
    assert!(!page.is_form_open());
    assert_eq!(page.state().loaded().map(Vec::len), Some(1));
}

#[tokio::test]
async fn dashboard_rejects_missing_time_without_calling_backend() {
    let (mut server, app) = common::logged_in_backend().await;
    let create = server
        .mock("POST", "/api/events")
        .expect(0)
        .create_async()
        .await;

    let mut page = DashboardPage::new();
    page.open_form();
    page.form.title = "Launch party".into();
    page.form.location = "Rooftop".into();
    page.form.date = "2025-05-01".into();

    let outcome = page.create_event(app.events()).await;

    create.assert_async().await;
    assert_eq!(
        outcome,
        Outcome::Invalid("Please select both a date and a time.".into())
    );
    assert!(page.is_form_open());
    assert_eq!(page.form_error(), Some("Please select both a date and a time."));
}

#[tokio::test]
async fn details_not_found_is_distinct_from_loading() {
    let (mut server, app) = common::logged_in_backend().await;
    server
        .mock("GET", "/api/events/77")
        .with_status(404)
        .create_async()
        .await;

    let mut page = EventDetailsPage::new(77);
    assert_eq!(page.state(), &LoadState::Loading);

    page.load(app.events()).await;
    assert_eq!(page.state(), &LoadState::NotFound);
}

#[tokio::test]
async fn details_add_guest_refetches_event() {
    let (mut server, app) = common::logged_in_backend().await;
    let initial = server
        .mock("GET", "/api/events/5")
        .with_status(200)
        .with_body(event_json(5, json!([]), json!([])).to_string())
        .create_async()
        .await;

    let mut page = EventDetailsPage::new(5);
    page.load(app.events()).await;
    initial.remove_async().await;

    let post = server
        .mock("POST", "/api/events/5/guests")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let refetch = server
        .mock("GET", "/api/events/5")
        .with_status(200)
        .with_body(
            event_json(5, json!([guest_json(11, "A", "a@x.com", "Pending")]), json!([]))
                .to_string(),
        )
        .create_async()
        .await;

    page.guest_form.name = "A".into();
    page.guest_form.email = "a@x.com".into();
    let outcome = page.add_guest(app.events()).await;

    post.assert_async().await;
    refetch.assert_async().await;
    assert_eq!(outcome, Outcome::Synced(SyncStrategy::RefetchOnMutate));
    assert_eq!(page.event().unwrap().guests.len(), 1);
    assert!(page.guest_form.name.is_empty());
}

#[tokio::test]
async fn details_validation_happens_before_network() {
    let (mut server, app) = common::logged_in_backend().await;
    let post = server
        .mock("POST", "/api/events/5/tasks")
        .expect(0)
        .create_async()
        .await;

    let mut page = EventDetailsPage::new(5);
    page.task_title = "   ".into();
    let outcome = page.add_task(app.events()).await;

    post.assert_async().await;
    assert_eq!(outcome, Outcome::Invalid("Please enter a task name.".into()));
    assert_eq!(
        page.notice(),
        Some(&Notice::Error("Please enter a task name.".into()))
    );
}

#[tokio::test]
async fn details_toggle_sends_negated_status() {
    let (mut server, app) = common::logged_in_backend().await;
    server
        .mock("GET", "/api/events/5")
        .with_status(200)
        .with_body(event_json(5, json!([]), json!([task_json(3, "Book DJ", true)])).to_string())
        .create_async()
        .await;
    let put = server
        .mock("PUT", "/api/events/5/tasks/3")
        .match_body(Matcher::Json(json!({ "completed": false })))
        .with_status(200)
        .create_async()
        .await;

    let mut page = EventDetailsPage::new(5);
    page.load(app.events()).await;
    let outcome = page.toggle_task(app.events(), 3).await;

    put.assert_async().await;
    assert_eq!(outcome, Outcome::Synced(SyncStrategy::RefetchOnMutate));
}

#[tokio::test]
async fn details_failed_mutation_keeps_event() {
    let (mut server, app) = common::logged_in_backend().await;
    server
        .mock("GET", "/api/events/5")
        .with_status(200)
        .with_body(event_json(5, json!([]), json!([task_json(3, "Book DJ", false)])).to_string())
        .create_async()
        .await;
    server
        .mock("DELETE", "/api/events/5/tasks/3")
        .with_status(500)
        .create_async()
        .await;

    let mut page = EventDetailsPage::new(5);
    page.load(app.events()).await;
    let outcome = page.delete_task(app.events(), 3).await;

    assert_eq!(outcome, Outcome::Failed("Failed to delete task.".into()));
    assert_eq!(page.event().unwrap().tasks.len(), 1);
    assert!(!page.is_submitting());
}

#[tokio::test]
async fn details_delete_event_navigates_to_dashboard() {
    let (mut server, app) = common::logged_in_backend().await;
    let delete = server
        .mock("DELETE", "/api/events/5")
        .with_status(200)
        .create_async()
        .await;
    let refetch = server
        .mock("GET", "/api/events/5")
        .expect(0)
        .create_async()
        .await;

    let mut page = EventDetailsPage::new(5);
    let outcome = page.delete_event(app.events()).await;

    delete.assert_async().await;
    refetch.assert_async().await;
    assert_eq!(outcome, Outcome::Navigate(Route::Dashboard));
}

#[tokio::test]
async fn rsvp_page_applies_response_without_refetch() {
    let (mut server, app) = common::backend().await;
    let get_event = server
        .mock("GET", "/api/events/5")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(event_json(5, json!([]), json!([])).to_string())
        .expect(1)
        .create_async()
        .await;
    let get_guest = server
        .mock("GET", "/api/events/5/guests/11")
        .with_status(200)
        .with_body(guest_json(11, "A", "a@x.com", "Pending").to_string())
        .expect(1)
        .create_async()
        .await;
    let put = server
        .mock("PUT", "/api/events/5/guests/11")
        .match_body(Matcher::Json(json!({ "rsvp": "Accepted" })))
        .with_status(200)
        .create_async()
        .await;

    let mut page = RsvpPage::new(RsvpLink {
        event_id: Some(5),
        guest_id: Some(11),
    });
    page.load(app.events()).await;
    let outcome = page.respond(app.events(), Rsvp::Accepted).await;

    put.assert_async().await;
    get_event.assert_async().await;
    get_guest.assert_async().await;
    assert_eq!(outcome, Outcome::Synced(SyncStrategy::OptimisticApply));
    match page.state() {
        RsvpState::Ready { guest, .. } => assert_eq!(guest.rsvp, Rsvp::Accepted),
        other => panic!("unexpected state {other:?}"),
    }
    assert_eq!(
        page.notice(),
        Some(&Notice::Success("RSVP recorded: Accepted".into()))
    );
}

#[tokio::test]
async fn rsvp_page_missing_guest_id_is_invalid() {
    let (mut server, app) = common::backend().await;
    let any = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let mut page = RsvpPage::new(RsvpLink {
        event_id: Some(5),
        guest_id: None,
    });
    page.load(app.events()).await;

    any.assert_async().await;
    assert_eq!(page.state(), &RsvpState::Invalid);
}

#[tokio::test]
async fn rsvp_page_unknown_guest_is_invalid() {
    let (mut server, app) = common::backend().await;
    server
        .mock("GET", "/api/events/5")
        .with_status(200)
        .with_body(event_json(5, json!([]), json!([])).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/api/events/5/guests/99")
        .with_status(404)
        .create_async()
        .await;

    let mut page = RsvpPage::new(RsvpLink {
        event_id: Some(5),
        guest_id: Some(99),
    });
    page.load(app.events()).await;

    assert_eq!(page.state(), &RsvpState::Invalid);
}

#[tokio::test]
async fn login_page_navigates_on_token() {
    let (mut server, app) = common::backend().await;
    server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_body(json!({ "token": "jwt" }).to_string())
        .create_async()
        .await;

    let mut page = LoginPage::new();
    page.edit(|f| {
        f.email = "ada@example.com".into();
        f.password = "pw".into();
    });
    let outcome = page.submit(app.auth()).await;

    assert_eq!(outcome, Outcome::Navigate(Route::Dashboard));
    assert_eq!(page.message(), Some("Login successful! Redirecting..."));
    assert!(app.session().is_authenticated());
}

#[tokio::test]
async fn login_page_treats_missing_token_as_failure() {
    let (mut server, app) = common::backend().await;
    server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let mut page = LoginPage::new();
    page.form.email = "ada@example.com".into();
    page.form.password = "pw".into();
    let outcome = page.submit(app.auth()).await;

    assert_eq!(
        outcome,
        Outcome::Failed("Login failed. No token received.".into())
    );
    assert!(!app.session().is_authenticated());
}

#[tokio::test]
async fn register_page_navigates_to_login() {
    let (mut server, app) = common::backend().await;
    server
        .mock("POST", "/api/auth/register")
        .with_status(200)
        .with_body("User registered successfully!")
        .create_async()
        .await;

    let mut page = RegisterPage::new();
    page.edit(|f| {
        f.name = "Ada".into();
        f.email = "ada@example.com".into();
        f.password = "pw".into();
    });
    let outcome = page.submit(app.auth()).await;

    assert_eq!(outcome, Outcome::Navigate(Route::Login));
    assert_eq!(
        page.message(),
        Some("Registration successful! Redirecting to login...")
    );
}

#[tokio::test]
async fn register_page_shows_backend_error() {
    let (mut server, app) = common::backend().await;
    server
        .mock("POST", "/api/auth/register")
        .with_status(400)
        .with_body("Email already in use")
        .create_async()
        .await;

    let mut page = RegisterPage::new();
    page.form.name = "Ada".into();
    page.form.email = "ada@example.com".into();
    page.form.password = "pw".into();
    let outcome = page.submit(app.auth()).await;

    assert_eq!(outcome, Outcome::Failed("Email already in use".into()));
    assert_eq!(page.message(), Some("Email already in use"));
}
