use reqwest::Method;

use crate::api::{Access, ApiClient};
use crate::error::ClientResult;
use crate::model::{
    Event, EventId, Guest, GuestId, NewEvent, NewGuest, NewTask, Rsvp, RsvpUpdate, TaskId,
    TaskStatusUpdate,
};
use crate::session::Session;

/// Event, guest and task operations.
///
/// Mutations return nothing the caller should merge: the view is expected to
/// re-fetch (or navigate away) afterwards. The `*_public` variants send no
/// credentials and back the invitation-link flow.
#[derive(Clone)]
pub struct EventService {
    api: ApiClient,
    session: Session,
}

impl EventService {
    pub fn new(api: ApiClient, session: Session) -> Self {
        EventService { api, session }
    }

    fn access(&self) -> Access<'_> {
        Access::Session(&self.session)
    }

    /// GET /events
    pub async fn list_events(&self) -> ClientResult<Vec<Event>> {
        self.api.get("/events", self.access()).await
    }

    /// POST /events
    pub async fn create_event(&self, event: &NewEvent) -> ClientResult<Event> {
        self.api.post("/events", event, self.access()).await
    }

    /// GET /events/:id
    pub async fn get_event(&self, event_id: EventId) -> ClientResult<Event> {
        self.api
            .get(&format!("/events/{event_id}"), self.access())
            .await
    }

    pub async fn get_event_public(&self, event_id: EventId) -> ClientResult<Event> {
        self.api
            .get(&format!("/events/{event_id}"), Access::Public)
            .await
    }

    /// DELETE /events/:id
    pub async fn delete_event(&self, event_id: EventId) -> ClientResult<()> {
        self.api
            .delete(&format!("/events/{event_id}"), self.access())
            .await
    }

    /// POST /events/:id/guests
    ///
    /// Returns the id of the event to re-fetch.
    pub async fn add_guest(&self, event_id: EventId, guest: &NewGuest) -> ClientResult<EventId> {
        self.api
            .send_json(
                Method::POST,
                &format!("/events/{event_id}/guests"),
                guest,
                self.access(),
            )
            .await?;
        Ok(event_id)
    }

    /// GET /events/:id/guests/:guestId, without credentials.
    pub async fn get_guest_public(&self, event_id: EventId, guest_id: GuestId) -> ClientResult<Guest> {
        self.api
            .get(&format!("/events/{event_id}/guests/{guest_id}"), Access::Public)
            .await
    }

    /// PUT /events/:id/guests/:guestId
    pub async fn update_guest_rsvp(&self, event_id: EventId, guest_id: GuestId, rsvp: Rsvp) -> ClientResult<()> {
        self.put_rsvp(event_id, guest_id, rsvp, self.access()).await
    }

    pub async fn update_guest_rsvp_public(&self, event_id: EventId, guest_id: GuestId, rsvp: Rsvp) -> ClientResult<()> {
        self.put_rsvp(event_id, guest_id, rsvp, Access::Public).await
    }

    async fn put_rsvp(&self, event_id: EventId, guest_id: GuestId, rsvp: Rsvp, access: Access<'_>) -> ClientResult<()> {
        self.api
            .send_json(
                Method::PUT,
                &format!("/events/{event_id}/guests/{guest_id}"),
                &RsvpUpdate { rsvp },
                access,
            )
            .await
    }

    /// DELETE /events/:id/guests/:guestId
    pub async fn delete_guest(&self, event_id: EventId, guest_id: GuestId) -> ClientResult<()> {
        self.api
            .delete(&format!("/events/{event_id}/guests/{guest_id}"), self.access())
            .await
    }

    /// POST /events/:id/tasks
    ///
    /// Returns the id of the event to re-fetch.
    pub async fn add_task(&self, event_id: EventId, task: &NewTask) -> ClientResult<EventId> {
        self.api
            .send_json(
                Method::POST,
                &format!("/events/{event_id}/tasks"),
                task,
                self.access(),
            )
            .await?;
        Ok(event_id)
    }

    /// PUT /events/:id/tasks/:taskId
    pub async fn update_task_status(&self, event_id: EventId, task_id: TaskId, completed: bool) -> ClientResult<()> {
        self.api
            .send_json(
                Method::PUT,
                &format!("/events/{event_id}/tasks/{task_id}"),
                &TaskStatusUpdate { completed },
                self.access(),
            )
            .await
    }

    /// DELETE /events/:id/tasks/:taskId
    pub async fn delete_task(&self, event_id: EventId, task_id: TaskId) -> ClientResult<()> {
        self.api
            .delete(&format!("/events/{event_id}/tasks/{task_id}"), self.access())
            .await
    }
}
