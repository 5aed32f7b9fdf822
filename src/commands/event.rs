use anyhow::Result;
use dialoguer::Confirm;
use eventsphere_core::App;
use eventsphere_core::model::{EventId, GuestForm, GuestId, Rsvp, TaskId};
use eventsphere_core::pages::{EventDetailsPage, LoadState, Outcome};
use eventsphere_core::routes::Route;
use owo_colors::OwoColorize;

use crate::commands::{finish, require_login};
use crate::render::Render;
use crate::utils::tui;

/// Load the event page, failing when there is nothing to act on.
async fn open(app: &App, id: EventId) -> Result<EventDetailsPage> {
    require_login(app, Route::EventDetails(id))?;

    let mut page = EventDetailsPage::new(id);
    tui::with_spinner("Loading event", page.load(app.events())).await;

    if page.event().is_some() {
        return Ok(page);
    }

    match page.state() {
        LoadState::NotFound => anyhow::bail!("Event {id} not found"),
        LoadState::Failed(message) => anyhow::bail!(message.clone()),
        LoadState::Loaded(_) | LoadState::Loading => anyhow::bail!("Event {id} did not load"),
    }
}

fn confirm(prompt: &str, force: bool) -> Result<bool> {
    if force {
        return Ok(true);
    }
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

/// Report the outcome and redraw the page when it stayed on screen.
fn settle(page: &EventDetailsPage, outcome: Outcome) -> Result<()> {
    let synced = matches!(outcome, Outcome::Synced(_));
    finish(page.notice(), outcome)?;
    if synced {
        println!("{}", page.render());
    }
    Ok(())
}

pub async fn show(app: &App, id: EventId) -> Result<()> {
    let page = open(app, id).await?;
    println!("{}", page.render());
    Ok(())
}

pub async fn add_guest(app: &App, id: EventId, name: String, email: String) -> Result<()> {
    let mut page = open(app, id).await?;
    page.guest_form = GuestForm { name, email };

    let outcome = tui::with_spinner("Adding guest", page.add_guest(app.events())).await;
    settle(&page, outcome)
}

pub async fn add_task(app: &App, id: EventId, title: String) -> Result<()> {
    let mut page = open(app, id).await?;
    page.task_title = title;

    let outcome = tui::with_spinner("Adding task", page.add_task(app.events())).await;
    settle(&page, outcome)
}

pub async fn toggle_task(app: &App, id: EventId, task: TaskId) -> Result<()> {
    let mut page = open(app, id).await?;

    let outcome = tui::with_spinner("Updating task", page.toggle_task(app.events(), task)).await;
    settle(&page, outcome)
}

pub async fn delete_task(app: &App, id: EventId, task: TaskId, force: bool) -> Result<()> {
    let mut page = open(app, id).await?;

    if !confirm("Delete this task?", force)? {
        println!("{}", "Cancelled".dimmed());
        return Ok(());
    }

    let outcome = tui::with_spinner("Deleting task", page.delete_task(app.events(), task)).await;
    settle(&page, outcome)
}

pub async fn set_rsvp(app: &App, id: EventId, guest: GuestId, rsvp: Rsvp) -> Result<()> {
    let mut page = open(app, id).await?;

    let outcome =
        tui::with_spinner("Updating RSVP", page.update_rsvp(app.events(), guest, rsvp)).await;
    settle(&page, outcome)
}

pub async fn delete_guest(app: &App, id: EventId, guest: GuestId, force: bool) -> Result<()> {
    let mut page = open(app, id).await?;

    if !confirm("Delete this guest?", force)? {
        println!("{}", "Cancelled".dimmed());
        return Ok(());
    }

    let outcome =
        tui::with_spinner("Deleting guest", page.delete_guest(app.events(), guest)).await;
    settle(&page, outcome)
}

pub async fn delete_event(app: &App, id: EventId, force: bool) -> Result<()> {
    let mut page = open(app, id).await?;

    if !confirm("Are you sure you want to delete this event?", force)? {
        println!("{}", "Cancelled".dimmed());
        return Ok(());
    }

    let outcome = tui::with_spinner("Deleting event", page.delete_event(app.events())).await;
    settle(&page, outcome)
}
