use anyhow::{Context, Result};
use dialoguer::Input;
use eventsphere_core::App;
use eventsphere_core::pages::{LoginPage, Outcome, RegisterPage};
use eventsphere_core::routes::Route;
use owo_colors::OwoColorize;

use crate::utils::tui;

fn prompt(label: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new()
            .with_prompt(format!("  {label}"))
            .interact_text()?),
    }
}

fn prompt_password() -> Result<String> {
    rpassword::prompt_password("  Password: ").context("Failed to read password")
}

/// Log in and return where the page navigates next.
pub async fn login(app: &App, email: Option<String>) -> Result<Route> {
    let mut page = LoginPage::new();
    let email = prompt("Email", email)?;
    let password = prompt_password()?;
    page.edit(|form| {
        form.email = email;
        form.password = password;
    });

    let outcome = tui::with_spinner("Logging in", page.submit(app.auth())).await;

    match outcome {
        Outcome::Navigate(route) => {
            if let Some(message) = page.message() {
                println!("{}", message.green());
            }
            Ok(route)
        }
        Outcome::Invalid(message) | Outcome::Failed(message) => anyhow::bail!(message),
        Outcome::Synced(_) => Ok(Route::Dashboard),
    }
}

pub async fn register(app: &App, name: Option<String>, email: Option<String>) -> Result<Route> {
    let mut page = RegisterPage::new();
    let name = prompt("Name", name)?;
    let email = prompt("Email", email)?;
    let password = prompt_password()?;
    page.edit(|form| {
        form.name = name;
        form.email = email;
        form.password = password;
    });

    let outcome = tui::with_spinner("Creating account", page.submit(app.auth())).await;

    match outcome {
        Outcome::Navigate(route) => {
            if let Some(message) = page.message() {
                println!("{}", message.green());
            }
            Ok(route)
        }
        Outcome::Invalid(message) | Outcome::Failed(message) => anyhow::bail!(message),
        Outcome::Synced(_) => Ok(Route::Login),
    }
}

pub fn logout(app: &App) -> Result<()> {
    app.auth().logout()?;
    println!("{}", "Logged out".dimmed());
    Ok(())
}
