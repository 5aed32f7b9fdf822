use anyhow::Result;
use dialoguer::Input;
use eventsphere_core::App;
use eventsphere_core::model::EventForm;
use eventsphere_core::pages::{DashboardPage, LoadState};
use eventsphere_core::routes::Route;

use crate::commands::{finish, require_login};
use crate::render::Render;
use crate::utils::tui;

pub struct CreateArgs {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

pub async fn show(app: &App) -> Result<()> {
    require_login(app, Route::Dashboard)?;

    let mut page = DashboardPage::new();
    tui::with_spinner("Loading events", page.load(app.events())).await;

    if let LoadState::Failed(message) = page.state() {
        anyhow::bail!(message.clone());
    }

    println!("{}", page.render());
    Ok(())
}

pub async fn create(app: &App, args: CreateArgs) -> Result<()> {
    require_login(app, Route::Dashboard)?;

    let interactive = args.title.is_none() || args.date.is_none() || args.time.is_none();

    let title = required(args.title, "Event title")?;
    let date = required(args.date, "Date (YYYY-MM-DD)")?;
    let time = required(args.time, "Time (HH:MM)")?;
    let location = required(args.location, "Where?")?;
    let description = match args.description {
        Some(d) => d,
        None if interactive => Input::new()
            .with_prompt("  Description (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?,
        None => String::new(),
    };

    if interactive {
        println!();
    }

    let mut page = DashboardPage::new();
    page.open_form();
    page.form = EventForm {
        title,
        description,
        location,
        date,
        time,
    };

    let outcome = tui::with_spinner("Creating event", page.create_event(app.events())).await;
    finish(page.notice(), outcome)?;

    println!();
    println!("{}", page.render());
    Ok(())
}

fn required(value: Option<String>, label: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new()
            .with_prompt(format!("  {label}"))
            .interact_text()?),
    }
}
