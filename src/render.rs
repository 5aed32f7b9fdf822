//! Terminal rendering for EventSphere pages and entities.
//!
//! Pages in `eventsphere_core` only hold state; this module turns that state
//! into colored text with owo_colors.

use eventsphere_core::model::{Event, Guest, Rsvp, Task};
use eventsphere_core::pages::{
    DashboardPage, EventDetailsPage, INVALID_LINK, LoadState, Notice, RsvpPage, RsvpState,
};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

const CARD_DATE_FORMAT: &str = "%a %b %-d, %Y %H:%M";

fn render_date(event: &Event) -> Option<String> {
    event.date_time.map(|dt| dt.format(CARD_DATE_FORMAT).to_string())
}

impl Render for Rsvp {
    fn render(&self) -> String {
        match self {
            Rsvp::Accepted => self.as_str().green().to_string(),
            Rsvp::Declined => self.as_str().red().to_string(),
            Rsvp::Pending => self.as_str().yellow().to_string(),
        }
    }
}

impl Render for Notice {
    fn render(&self) -> String {
        match self {
            Notice::Success(message) => message.green().to_string(),
            Notice::Error(message) => message.red().to_string(),
        }
    }
}

/// A dashboard card.
impl Render for Event {
    fn render(&self) -> String {
        let location = match self.display_location() {
            Some(location) => location.to_string(),
            None => "No location specified".dimmed().to_string(),
        };
        let date = render_date(self).unwrap_or_else(|| "No date set".dimmed().to_string());
        let description = self
            .description_preview()
            .unwrap_or_else(|| "No description provided".dimmed().to_string());

        [
            format!("{} {}", format!("#{}", self.id).dimmed(), self.display_title().bold()),
            format!("   📍 {location}"),
            format!("   🗓  {date}"),
            format!("   {description}"),
        ]
        .join("\n")
    }
}

impl Render for Guest {
    fn render(&self) -> String {
        format!(
            "{} {} {} {}",
            format!("#{}", self.id).dimmed(),
            self.name,
            format!("<{}>", self.email).dimmed(),
            self.rsvp.render()
        )
    }
}

impl Render for Task {
    fn render(&self) -> String {
        let id = format!("#{}", self.id).dimmed().to_string();
        if self.completed {
            format!("{} {} {}", "[x]".green(), id, self.title.dimmed().strikethrough())
        } else {
            format!("[ ] {} {}", id, self.title)
        }
    }
}

impl Render for DashboardPage {
    fn render(&self) -> String {
        match self.state() {
            LoadState::Loading => "Loading events...".dimmed().to_string(),
            LoadState::Failed(message) => message.red().to_string(),
            LoadState::NotFound => "No events found".dimmed().to_string(),
            LoadState::Loaded(events) => {
                if let Some(empty) = self.empty_message() {
                    return empty.dimmed().to_string();
                }

                let mut lines = vec![format!("{}", "Your Events".bold()), String::new()];
                for event in events {
                    lines.push(event.render());
                    lines.push(String::new());
                }
                lines.pop();
                lines.join("\n")
            }
        }
    }
}

impl Render for EventDetailsPage {
    fn render(&self) -> String {
        let event = match self.state() {
            LoadState::Loaded(event) => event,
            LoadState::Loading => return "Loading event...".dimmed().to_string(),
            LoadState::NotFound => return format!("Event {} not found", self.event_id()).red().to_string(),
            LoadState::Failed(message) => return message.red().to_string(),
        };

        let mut lines = vec![event.render(), String::new()];

        lines.push(format!("{}", "Guests".bold()));
        if event.guests.is_empty() {
            lines.push(format!("   {}", "No guests yet.".dimmed()));
        }
        for guest in &event.guests {
            lines.push(format!("   {}", guest.render()));
        }

        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            "Tasks".bold(),
            format!("({}/{} done)", event.completed_tasks(), event.tasks.len()).dimmed()
        ));
        if event.tasks.is_empty() {
            lines.push(format!("   {}", "No tasks yet.".dimmed()));
        }
        for task in &event.tasks {
            lines.push(format!("   {}", task.render()));
        }

        lines.join("\n")
    }
}

impl Render for RsvpPage {
    fn render(&self) -> String {
        match self.state() {
            RsvpState::Loading => "Loading invitation...".dimmed().to_string(),
            RsvpState::Invalid => INVALID_LINK.red().to_string(),
            RsvpState::Ready { event, guest } => {
                let date = render_date(event).unwrap_or_else(|| "TBA".to_string());
                let location = event.display_location().unwrap_or("Location TBA");

                let mut lines = vec![
                    "You're invited to:".dimmed().to_string(),
                    event.display_title().bold().to_string(),
                    format!("   🗓  {date}"),
                    format!("   📍 {location}"),
                ];
                if let Some(description) = event.description_preview() {
                    lines.push(format!("   {description}"));
                }
                lines.push(String::new());
                lines.push(format!("Hi {}!", guest.name));
                lines.push(format!("Current response: {}", guest.rsvp.render()));
                lines.join("\n")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> Event {
        Event {
            id: 4,
            title: "Launch party".into(),
            description: None,
            location: Some("  ".into()),
            date_time: None,
            guests: vec![],
            tasks: vec![],
        }
    }

    #[test]
    fn card_falls_back_for_missing_fields() {
        let card = event().render();

        assert!(card.contains("Launch party"));
        assert!(card.contains("No location specified"));
        assert!(card.contains("No date set"));
        assert!(card.contains("No description provided"));
    }

    #[test]
    fn card_formats_date() {
        let mut event = event();
        event.date_time = chrono::NaiveDate::from_ymd_opt(2025, 3, 7)
            .and_then(|d| d.and_hms_opt(18, 30, 0));

        assert!(event.render().contains("Fri Mar 7, 2025 18:30"));
    }

    #[test]
    fn completed_task_is_checked() {
        let task = Task {
            id: 1,
            title: "Book venue".into(),
            completed: true,
        };

        assert!(task.render().contains("[x]"));
    }
}
