use tracing::warn;

use crate::model::{Event, EventForm};
use crate::pages::{LoadState, Notice, Outcome, SyncStrategy};
use crate::services::EventService;

pub const EMPTY_MESSAGE: &str = "No events yet. Click “Create Event” to get started.";
const LOAD_FAILED: &str = "Failed to load events. Please log in again.";

/// The signed-in user's event list plus the create-event form.
pub struct DashboardPage {
    state: LoadState<Vec<Event>>,
    pub form: EventForm,
    form_open: bool,
    form_error: Option<String>,
    submitting: bool,
    notice: Option<Notice>,
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardPage {
    pub fn new() -> Self {
        DashboardPage {
            state: LoadState::Loading,
            form: EventForm::default(),
            form_open: false,
            form_error: None,
            submitting: false,
            notice: None,
        }
    }

    pub fn state(&self) -> &LoadState<Vec<Event>> {
        &self.state
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The empty-state text, when the list loaded and has nothing in it.
    pub fn empty_message(&self) -> Option<&'static str> {
        match &self.state {
            LoadState::Loaded(events) if events.is_empty() => Some(EMPTY_MESSAGE),
            _ => None,
        }
    }

    pub async fn load(&mut self, events: &EventService) {
        self.state = LoadState::Loading;

        self.state = match events.list_events().await {
            Ok(list) => LoadState::Loaded(list),
            Err(e) => {
                warn!(error = %e, "could not fetch events");
                LoadState::Failed(LOAD_FAILED.to_string())
            }
        };
    }

    pub fn open_form(&mut self) {
        self.form = EventForm::default();
        self.form_error = None;
        self.form_open = true;
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
        self.form_error = None;
    }

    /// Submit the create-event form, then re-fetch the list.
    pub async fn create_event(&mut self, events: &EventService) -> Outcome {
        self.form_error = None;

        let body = match self.form.submission() {
            Ok(body) => body,
            Err(e) => {
                let message = e.to_string();
                self.form_error = Some(message.clone());
                return Outcome::Invalid(message);
            }
        };

        self.submitting = true;
        let result = events.create_event(&body).await;
        self.submitting = false;

        match result {
            Ok(created) => {
                self.notice = Some(Notice::Success(format!(
                    "Created “{}”",
                    created.display_title()
                )));
                self.close_form();
                self.load(events).await;
                Outcome::Synced(SyncStrategy::RefetchOnMutate)
            }
            Err(e) => {
                warn!(error = %e, "could not create event");
                let message = e.user_message("Failed to create event.");
                self.form_error = Some(message.clone());
                Outcome::Failed(message)
            }
        }
    }
}
