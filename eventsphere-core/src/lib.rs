//! Core of the EventSphere front end.
//!
//! This crate holds everything below the presentation layer:
//! - `session` / `api` / `services` for talking to the backend
//! - `routes` for path resolution and the login gate
//! - `pages` for per-page view state, independent of how it is drawn

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod model;
pub mod pages;
pub mod routes;
pub mod services;
pub mod session;

pub use app::App;
pub use error::{ClientError, ClientResult};
pub use model::*;
