pub mod auth;
pub mod dashboard;
pub mod event;
pub mod open;
pub mod rsvp;

use anyhow::Result;
use eventsphere_core::App;
use eventsphere_core::pages::{Notice, Outcome};
use eventsphere_core::routes::{Guarded, Route};

use crate::render::Render;

/// Run a protected route past the guard.
pub fn require_login(app: &App, route: Route) -> Result<Route> {
    match app.guard().check(route) {
        Guarded::Render(route) => Ok(route),
        Guarded::Redirect(_) => anyhow::bail!(
            "You are not logged in.\n\n\
            Log in with:\n  \
            eventsphere login"
        ),
    }
}

/// Print a success notice, and turn a rejected or failed action into an error.
pub fn finish(notice: Option<&Notice>, outcome: Outcome) -> Result<()> {
    if let Some(notice @ Notice::Success(_)) = notice {
        println!("{}", notice.render());
    }

    match outcome {
        Outcome::Synced(_) | Outcome::Navigate(_) => Ok(()),
        Outcome::Invalid(message) | Outcome::Failed(message) => anyhow::bail!(message),
    }
}
