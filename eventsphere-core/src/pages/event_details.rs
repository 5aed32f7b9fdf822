use tracing::warn;

use crate::error::{ClientError, ClientResult};
use crate::model::{task_submission, Event, EventId, GuestForm, GuestId, Rsvp, TaskId};
use crate::pages::{LoadState, Notice, Outcome, SyncStrategy};
use crate::routes::Route;
use crate::services::EventService;

const LOAD_FAILED: &str = "Failed to load event details. Please try again.";

/// One event with its guest list and task list.
///
/// Every successful mutation is followed by a full re-fetch of the event.
pub struct EventDetailsPage {
    event_id: EventId,
    state: LoadState<Event>,
    pub guest_form: GuestForm,
    pub task_title: String,
    submitting: bool,
    notice: Option<Notice>,
}

impl EventDetailsPage {
    pub fn new(event_id: EventId) -> Self {
        EventDetailsPage {
            event_id,
            state: LoadState::Loading,
            guest_form: GuestForm::default(),
            task_title: String::new(),
            submitting: false,
            notice: None,
        }
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn state(&self) -> &LoadState<Event> {
        &self.state
    }

    pub fn event(&self) -> Option<&Event> {
        self.state.loaded()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Fetch the event. A failed re-fetch keeps the last loaded copy on screen.
    pub async fn load(&mut self, events: &EventService) {
        match events.get_event(self.event_id).await {
            Ok(event) => self.state = LoadState::Loaded(event),
            Err(ClientError::NotFound(_)) => self.state = LoadState::NotFound,
            Err(e) => {
                warn!(event_id = self.event_id, error = %e, "could not fetch event");
                self.notice = Some(Notice::Error(LOAD_FAILED.to_string()));
                if self.state.loaded().is_none() {
                    self.state = LoadState::Failed(LOAD_FAILED.to_string());
                }
            }
        }
    }

    /// Run a mutation, then re-fetch on success.
    async fn mutate<T>(
        &mut self,
        events: &EventService,
        result: impl Future<Output = ClientResult<T>>,
        failure: &str,
    ) -> Outcome {
        self.submitting = true;
        let result = result.await;
        self.submitting = false;

        match result {
            Ok(_) => {
                self.load(events).await;
                Outcome::Synced(SyncStrategy::RefetchOnMutate)
            }
            Err(e) => {
                warn!(event_id = self.event_id, error = %e, "{failure}");
                self.notice = Some(Notice::Error(failure.to_string()));
                Outcome::Failed(failure.to_string())
            }
        }
    }

    fn reject(&mut self, err: ClientError) -> Outcome {
        let message = err.to_string();
        self.notice = Some(Notice::Error(message.clone()));
        Outcome::Invalid(message)
    }

    pub async fn add_guest(&mut self, events: &EventService) -> Outcome {
        let guest = match self.guest_form.submission() {
            Ok(guest) => guest,
            Err(e) => return self.reject(e),
        };

        let outcome = self
            .mutate(events, events.add_guest(self.event_id, &guest), "Failed to add guest.")
            .await;
        if matches!(outcome, Outcome::Synced(_)) {
            self.guest_form = GuestForm::default();
        }
        outcome
    }

    pub async fn add_task(&mut self, events: &EventService) -> Outcome {
        let task = match task_submission(&self.task_title) {
            Ok(task) => task,
            Err(e) => return self.reject(e),
        };

        let outcome = self
            .mutate(events, events.add_task(self.event_id, &task), "Failed to add task.")
            .await;
        if matches!(outcome, Outcome::Synced(_)) {
            self.task_title.clear();
        }
        outcome
    }

    /// Flip a task's completion relative to what the page last loaded.
    pub async fn toggle_task(&mut self, events: &EventService, task_id: TaskId) -> Outcome {
        let Some(completed) = self.event().and_then(|e| e.task(task_id)).map(|t| t.completed)
        else {
            return self.reject(ClientError::Validation(format!("No task with id {task_id}")));
        };

        self.mutate(
            events,
            events.update_task_status(self.event_id, task_id, !completed),
            "Failed to update task.",
        )
        .await
    }

    pub async fn delete_task(&mut self, events: &EventService, task_id: TaskId) -> Outcome {
        self.mutate(
            events,
            events.delete_task(self.event_id, task_id),
            "Failed to delete task.",
        )
        .await
    }

    pub async fn update_rsvp(&mut self, events: &EventService, guest_id: GuestId, rsvp: Rsvp) -> Outcome {
        self.mutate(
            events,
            events.update_guest_rsvp(self.event_id, guest_id, rsvp),
            "Failed to update RSVP.",
        )
        .await
    }

    pub async fn delete_guest(&mut self, events: &EventService, guest_id: GuestId) -> Outcome {
        self.mutate(
            events,
            events.delete_guest(self.event_id, guest_id),
            "Failed to delete guest.",
        )
        .await
    }

    /// Delete the whole event and leave the page.
    pub async fn delete_event(&mut self, events: &EventService) -> Outcome {
        self.submitting = true;
        let result = events.delete_event(self.event_id).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                self.notice = Some(Notice::Success("Event deleted successfully.".into()));
                Outcome::Navigate(Route::Dashboard)
            }
            Err(e) => {
                warn!(event_id = self.event_id, error = %e, "could not delete event");
                let message = "Failed to delete event.".to_string();
                self.notice = Some(Notice::Error(message.clone()));
                Outcome::Failed(message)
            }
        }
    }
}
