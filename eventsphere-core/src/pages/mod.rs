//! Per-page view state.
//!
//! Each page owns its local state and talks to one service. After a mutation
//! a page either re-fetches what it shows or navigates away; only the public
//! RSVP page applies a confirmed change to its local copy, since it has no
//! parent list to resynchronise.

mod dashboard;
mod event_details;
mod login;
mod register;
mod rsvp;

pub use dashboard::DashboardPage;
pub use event_details::EventDetailsPage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use rsvp::{INVALID_LINK, RsvpPage, RsvpState};

use crate::routes::Route;

/// How a page brought its state back in line after a successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// Re-fetch the whole view from the backend.
    RefetchOnMutate,
    /// Apply the confirmed value to the local copy without a re-fetch.
    OptimisticApply,
}

/// Result of a user action on a page.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Synced(SyncStrategy),
    Navigate(Route),
    /// Rejected client-side; nothing was sent.
    Invalid(String),
    /// The backend call failed; the page shows the same message.
    Failed(String),
}

/// Transient message shown after an action (toast/alert).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    NotFound,
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}
