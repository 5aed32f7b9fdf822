use anyhow::Result;
use eventsphere_core::App;
use eventsphere_core::routes::{Guarded, Route};
use owo_colors::OwoColorize;

use crate::commands::{auth, dashboard, event, rsvp};

/// Open a page by path and follow the navigation it triggers.
pub async fn run(app: &App, path: &str) -> Result<()> {
    let mut guarded = app.navigate(path);

    loop {
        let route = match guarded {
            Guarded::Render(route) => route,
            Guarded::Redirect(to) => {
                println!("{}", format!("Redirecting to {}", to.path()).dimmed());
                to
            }
        };

        let next = match route {
            Route::Login => auth::login(app, None).await?,
            Route::Register => auth::register(app, None, None).await?,
            Route::Dashboard => return dashboard::show(app).await,
            Route::EventDetails(id) => return event::show(app, id).await,
            Route::MalformedEvent(segment) => anyhow::bail!("Event {segment} not found"),
            Route::Rsvp(link) => return rsvp::run(app, link, None).await,
            Route::NotFound(path) => {
                println!("{}", "404 Not Found".red().bold());
                println!("{}", format!("Nothing lives at {path}").dimmed());
                return Ok(());
            }
        };

        println!();
        guarded = app.guard().check(next);
    }
}
