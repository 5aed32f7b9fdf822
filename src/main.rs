mod commands;
mod render;
mod utils;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eventsphere_core::config::Config;
use eventsphere_core::model::{EventId, GuestId, Rsvp, TaskId};
use eventsphere_core::routes::RsvpLink;
use eventsphere_core::App;

#[derive(Parser)]
#[command(name = "eventsphere")]
#[command(about = "Plan events, invite guests and track RSVPs")]
struct Cli {
    /// Backend API URL (overrides the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Print request logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a page by path, e.g. "/", "/event/4" or "/rsvp?eventId=4&guestId=9"
    Open { path: String },
    Login {
        #[arg(long)]
        email: Option<String>,
    },
    Register {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },
    Logout,
    /// List your events
    #[command(visible_alias = "events")]
    Dashboard,
    CreateEvent {
        title: Option<String>,

        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Time (HH:MM)
        #[arg(short, long)]
        time: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },
    /// Show one event with its guests and tasks
    Event { id: EventId },
    AddGuest {
        event: EventId,
        name: String,
        email: String,
    },
    AddTask { event: EventId, title: String },
    /// Mark a task done (or not done)
    ToggleTask { event: EventId, task: TaskId },
    DeleteTask {
        event: EventId,
        task: TaskId,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Set a guest's RSVP as the organiser
    SetRsvp {
        event: EventId,
        guest: GuestId,
        rsvp: Rsvp,
    },
    DeleteGuest {
        event: EventId,
        guest: GuestId,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    DeleteEvent {
        event: EventId,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Answer an invitation (no login needed)
    Rsvp {
        event: EventId,
        guest: GuestId,

        /// accept or decline; asks when omitted
        response: Option<Rsvp>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    let app = App::from_config(&config)?;

    match cli.command {
        Commands::Open { path } => commands::open::run(&app, &path).await,
        Commands::Login { email } => commands::auth::login(&app, email).await.map(|_| ()),
        Commands::Register { name, email } => {
            commands::auth::register(&app, name, email).await?;
            println!("\nRun `eventsphere login` to sign in.");
            Ok(())
        }
        Commands::Logout => commands::auth::logout(&app),
        Commands::Dashboard => commands::dashboard::show(&app).await,
        Commands::CreateEvent {
            title,
            date,
            time,
            location,
            description,
        } => {
            commands::dashboard::create(
                &app,
                commands::dashboard::CreateArgs {
                    title,
                    date,
                    time,
                    location,
                    description,
                },
            )
            .await
        }
        Commands::Event { id } => commands::event::show(&app, id).await,
        Commands::AddGuest { event, name, email } => {
            commands::event::add_guest(&app, event, name, email).await
        }
        Commands::AddTask { event, title } => commands::event::add_task(&app, event, title).await,
        Commands::ToggleTask { event, task } => commands::event::toggle_task(&app, event, task).await,
        Commands::DeleteTask { event, task, force } => {
            commands::event::delete_task(&app, event, task, force).await
        }
        Commands::SetRsvp { event, guest, rsvp } => {
            commands::event::set_rsvp(&app, event, guest, rsvp).await
        }
        Commands::DeleteGuest { event, guest, force } => {
            commands::event::delete_guest(&app, event, guest, force).await
        }
        Commands::DeleteEvent { event, force } => {
            commands::event::delete_event(&app, event, force).await
        }
        Commands::Rsvp {
            event,
            guest,
            response,
        } => {
            let link = RsvpLink {
                event_id: Some(event),
                guest_id: Some(guest),
            };
            commands::rsvp::run(&app, link, response).await
        }
    }
}

/// Logs go to stderr so page output stays clean; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose {
        "eventsphere=debug,eventsphere_core=debug"
    } else {
        "error"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
