#![allow(dead_code)]

use eventsphere_core::App;
use eventsphere_core::session::Session;
use mockito::{Server, ServerGuard};
use serde_json::{Value, json};

pub const TOKEN: &str = "test-token";

/// A mock backend plus an app pointed at it, with an in-memory session.
pub async fn backend() -> (ServerGuard, App) {
    let server = Server::new_async().await;
    let app = App::new(&format!("{}/api", server.url()), Session::in_memory()).unwrap();
    (server, app)
}

/// Same as [`backend`], already logged in.
pub async fn logged_in_backend() -> (ServerGuard, App) {
    let (server, app) = backend().await;
    app.session().set(TOKEN).unwrap();
    (server, app)
}

pub fn bearer() -> String {
    format!("Bearer {TOKEN}")
}

pub fn event_json(id: i64, guests: Value, tasks: Value) -> Value {
    json!({
        "id": id,
        "title": "Launch party",
        "description": "Cake and speeches",
        "location": "Rooftop",
        "dateTime": "2025-05-01T14:30:00",
        "guests": guests,
        "tasks": tasks
    })
}

pub fn guest_json(id: i64, name: &str, email: &str, rsvp: &str) -> Value {
    json!({ "id": id, "name": name, "email": email, "rsvp": rsvp })
}

pub fn task_json(id: i64, title: &str, completed: bool) -> Value {
    json!({ "id": id, "title": title, "completed": completed })
}
