use tracing::warn;

use crate::model::{Event, Guest, Rsvp};
use crate::pages::{Notice, Outcome, SyncStrategy};
use crate::routes::RsvpLink;
use crate::services::EventService;

pub const INVALID_LINK: &str = "RSVP link invalid or expired.";

#[derive(Debug, Clone, PartialEq)]
pub enum RsvpState {
    Loading,
    Invalid,
    Ready { event: Event, guest: Guest },
}

/// The public invitation page. Needs no session.
pub struct RsvpPage {
    link: RsvpLink,
    state: RsvpState,
    submitting: bool,
    notice: Option<Notice>,
}

impl RsvpPage {
    pub fn new(link: RsvpLink) -> Self {
        RsvpPage {
            link,
            state: RsvpState::Loading,
            submitting: false,
            notice: None,
        }
    }

    pub fn state(&self) -> &RsvpState {
        &self.state
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub async fn load(&mut self, events: &EventService) {
        let (Some(event_id), Some(guest_id)) = (self.link.event_id, self.link.guest_id) else {
            self.state = RsvpState::Invalid;
            return;
        };

        let loaded = async {
            let event = events.get_event_public(event_id).await?;
            let guest = events.get_guest_public(event_id, guest_id).await?;
            Ok::<_, crate::error::ClientError>((event, guest))
        }
        .await;

        self.state = match loaded {
            Ok((event, guest)) => RsvpState::Ready { event, guest },
            Err(e) => {
                warn!(event_id, guest_id, error = %e, "invitation link did not resolve");
                self.notice = Some(Notice::Error("Invalid RSVP link.".into()));
                RsvpState::Invalid
            }
        };
    }

    /// Record the guest's answer and show it straight away.
    pub async fn respond(&mut self, events: &EventService, rsvp: Rsvp) -> Outcome {
        if rsvp == Rsvp::Pending {
            return Outcome::Invalid("Please choose Accepted or Declined.".into());
        }

        let (event_id, guest_id) = match &self.state {
            RsvpState::Ready { event, guest } => (event.id, guest.id),
            _ => return Outcome::Invalid(INVALID_LINK.to_string()),
        };

        self.submitting = true;
        let result = events
            .update_guest_rsvp_public(event_id, guest_id, rsvp)
            .await;
        self.submitting = false;

        match result {
            Ok(()) => {
                if let RsvpState::Ready { guest, .. } = &mut self.state {
                    guest.rsvp = rsvp;
                }
                self.notice = Some(Notice::Success(format!("RSVP recorded: {rsvp}")));
                Outcome::Synced(SyncStrategy::OptimisticApply)
            }
            Err(e) => {
                warn!(event_id, guest_id, error = %e, "could not record RSVP");
                let message = "Failed to update RSVP.".to_string();
                self.notice = Some(Notice::Error(message.clone()));
                Outcome::Failed(message)
            }
        }
    }
}
