//! Wire types shared by the services and pages.
//!
//! The backend owns every entity; the client only ever holds a transient copy
//! of what the last response said. Field names follow the backend's camelCase
//! JSON, and any body that does not fit these types is rejected at the API
//! client as a contract failure.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ClientError, ClientResult};

pub type EventId = i64;
pub type GuestId = i64;
pub type TaskId = i64;

/// Combined timestamp format the backend parses (local time, seconds precision).
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const DESCRIPTION_PREVIEW_CHARS: usize = 60;

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read an ISO-8601 timestamp with or without seconds or a zone suffix.
/// Zoned values keep their wall-clock time.
fn lenient_date_time<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M"))
        .or_else(|_| DateTime::parse_from_rfc3339(&raw).map(|dt| dt.naive_local()))
        .map(Some)
        .map_err(|e| serde::de::Error::custom(format!("invalid dateTime '{raw}': {e}")))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_date_time")]
    pub date_time: Option<NaiveDateTime>,
    /// Empty in list responses that omit the nested collections.
    #[serde(default, deserialize_with = "null_as_default")]
    pub guests: Vec<Guest>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<Task>,
}

impl Event {
    pub fn display_title(&self) -> &str {
        non_blank(Some(&self.title)).unwrap_or("Untitled Event")
    }

    pub fn display_location(&self) -> Option<&str> {
        non_blank(self.location.as_ref())
    }

    /// Description cut to a card-sized preview.
    pub fn description_preview(&self) -> Option<String> {
        let description = non_blank(self.description.as_ref())?;

        if description.chars().count() > DESCRIPTION_PREVIEW_CHARS {
            let cut: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
            Some(format!("{cut}..."))
        } else {
            Some(description.to_string())
        }
    }

    pub fn guest(&self, guest_id: GuestId) -> Option<&Guest> {
        self.guests.iter().find(|g| g.id == guest_id)
    }

    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn completed_tasks(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    pub email: String,
    /// Defaulted by the backend when the guest is added.
    pub rsvp: Rsvp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// A guest's response to an invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rsvp {
    Pending,
    Accepted,
    Declined,
}

impl Rsvp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rsvp::Pending => "Pending",
            Rsvp::Accepted => "Accepted",
            Rsvp::Declined => "Declined",
        }
    }
}

impl fmt::Display for Rsvp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rsvp {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Rsvp::Pending),
            "accept" | "accepted" | "yes" => Ok(Rsvp::Accepted),
            "decline" | "declined" | "no" => Ok(Rsvp::Declined),
            other => Err(ClientError::Validation(format!(
                "Unknown RSVP '{other}', expected accept or decline"
            ))),
        }
    }
}

// ============================================================================
// Request bodies
// ============================================================================

/// Body of `POST /events`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub location: String,
    /// Always `YYYY-MM-DDTHH:MM:SS`.
    pub date_time: String,
}

/// Body of `POST /events/{id}/guests`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGuest {
    pub name: String,
    pub email: String,
}

/// Body of `POST /events/{id}/tasks`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct TaskStatusUpdate {
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct RsvpUpdate {
    pub rsvp: Rsvp,
}

// ============================================================================
// Forms
// ============================================================================

/// The create-event form, with date and time collected separately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub location: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
}

impl EventForm {
    /// Validate the form and build the request body.
    pub fn submission(&self) -> ClientResult<NewEvent> {
        if self.date.trim().is_empty() || self.time.trim().is_empty() {
            return Err(ClientError::Validation(
                "Please select both a date and a time.".into(),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(ClientError::Validation("Please enter an event title.".into()));
        }
        if self.location.trim().is_empty() {
            return Err(ClientError::Validation("Please enter a location.".into()));
        }

        let date_time = combine_date_time(&self.date, &self.time)?;

        Ok(NewEvent {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            date_time: date_time.format(DATE_TIME_FORMAT).to_string(),
        })
    }
}

/// Join a date input and a time input into one timestamp.
pub fn combine_date_time(date: &str, time: &str) -> ClientResult<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
        ClientError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", date.trim()))
    })?;

    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time.trim(), "%H:%M:%S"))
        .map_err(|_| {
            ClientError::Validation(format!("Invalid time '{}', expected HH:MM", time.trim()))
        })?;

    Ok(date.and_time(time))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestForm {
    pub name: String,
    pub email: String,
}

impl GuestForm {
    pub fn submission(&self) -> ClientResult<NewGuest> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(ClientError::Validation(
                "Please enter both name and email.".into(),
            ));
        }

        Ok(NewGuest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
        })
    }
}

pub fn task_submission(title: &str) -> ClientResult<NewTask> {
    if title.trim().is_empty() {
        return Err(ClientError::Validation("Please enter a task name.".into()));
    }

    Ok(NewTask {
        title: title.trim().to_string(),
    })
}
