use anyhow::Result;
use dialoguer::Select;
use eventsphere_core::App;
use eventsphere_core::model::Rsvp;
use eventsphere_core::pages::{INVALID_LINK, RsvpPage, RsvpState};
use eventsphere_core::routes::RsvpLink;

use crate::commands::finish;
use crate::render::Render;
use crate::utils::tui;

/// The public invitation page. Works without logging in.
pub async fn run(app: &App, link: RsvpLink, response: Option<Rsvp>) -> Result<()> {
    let mut page = RsvpPage::new(link);
    tui::with_spinner("Loading invitation", page.load(app.events())).await;

    if !matches!(page.state(), RsvpState::Ready { .. }) {
        anyhow::bail!(INVALID_LINK);
    }

    println!("{}", page.render());

    let rsvp = match response {
        Some(rsvp) => rsvp,
        None => {
            let choices = ["Accept", "Decline"];
            let picked = Select::new()
                .with_prompt("Will you attend?")
                .items(&choices)
                .default(0)
                .interact()?;
            if picked == 0 { Rsvp::Accepted } else { Rsvp::Declined }
        }
    };

    let outcome = tui::with_spinner("Sending response", page.respond(app.events(), rsvp)).await;
    finish(page.notice(), outcome)
}
