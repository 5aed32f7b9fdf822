//! Backend operations built on [`ApiClient`](crate::api::ApiClient).

pub mod auth;
pub mod events;

pub use auth::{AuthService, Credentials, Registration};
pub use events::EventService;
