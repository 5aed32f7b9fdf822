//! The process-wide context that owns the session.

use tracing::debug;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::ClientResult;
use crate::routes::{Guarded, Route, RouteGuard};
use crate::services::{AuthService, EventService};
use crate::session::Session;

/// Built once at start-up; pages and the guard borrow from it.
pub struct App {
    session: Session,
    auth: AuthService,
    events: EventService,
}

impl App {
    /// Use the configured API URL and the file-backed session.
    pub fn from_config(config: &Config) -> ClientResult<Self> {
        let session = Session::persistent(config.session_path()?);
        Self::new(&config.api_url, session)
    }

    pub fn new(api_url: &str, session: Session) -> ClientResult<Self> {
        let api = ApiClient::new(api_url)?;
        debug!(api_url = api.base_url(), "client ready");

        Ok(App {
            auth: AuthService::new(api.clone(), session.clone()),
            events: EventService::new(api, session.clone()),
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn events(&self) -> &EventService {
        &self.events
    }

    pub fn guard(&self) -> RouteGuard<'_> {
        RouteGuard::new(&self.session)
    }

    /// Resolve a path and run it past the guard.
    pub fn navigate(&self, path: &str) -> Guarded {
        let decision = self.guard().check(Route::parse(path));
        debug!(path, ?decision, "navigation");
        decision
    }
}
