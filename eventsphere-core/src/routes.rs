//! Page routing and the login gate.

use std::fmt;

use url::Url;

use crate::model::{EventId, GuestId};
use crate::session::Session;

// Only used to resolve relative paths; never contacted.
const ROUTER_ORIGIN: &str = "http://eventsphere.local/";

/// Identifiers carried by a public invitation link. Either may be missing or
/// malformed, which the RSVP page reports as an invalid link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RsvpLink {
    pub event_id: Option<EventId>,
    pub guest_id: Option<GuestId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    EventDetails(EventId),
    /// `/event/<segment>` where the segment is not an id. Still behind the
    /// login gate; the page reports the event as missing.
    MalformedEvent(String),
    Rsvp(RsvpLink),
    NotFound(String),
}

impl Route {
    /// Resolve a browser-style path such as `/event/4` or
    /// `/rsvp?eventId=4&guestId=9`.
    pub fn parse(path: &str) -> Route {
        let Ok(url) = Url::parse(ROUTER_ORIGIN).and_then(|base| base.join(path.trim())) else {
            return Route::NotFound(path.to_string());
        };

        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [] => Route::Dashboard,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["event", id] => match id.parse() {
                Ok(id) => Route::EventDetails(id),
                Err(_) => Route::MalformedEvent(id.to_string()),
            },
            ["rsvp"] => {
                let mut link = RsvpLink::default();
                for (key, value) in url.query_pairs() {
                    match key.as_ref() {
                        "eventId" => link.event_id = value.trim().parse().ok(),
                        "guestId" => link.guest_id = value.trim().parse().ok(),
                        _ => {}
                    }
                }
                Route::Rsvp(link)
            }
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Routes reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(
            self,
            Route::Login | Route::Register | Route::Rsvp(_) | Route::NotFound(_)
        )
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Dashboard => "/".to_string(),
            Route::EventDetails(id) => format!("/event/{id}"),
            Route::MalformedEvent(segment) => format!("/event/{segment}"),
            Route::Rsvp(link) => {
                let mut params = Vec::new();
                if let Some(event_id) = link.event_id {
                    params.push(format!("eventId={event_id}"));
                }
                if let Some(guest_id) = link.guest_id {
                    params.push(format!("guestId={guest_id}"));
                }
                if params.is_empty() {
                    "/rsvp".to_string()
                } else {
                    format!("/rsvp?{}", params.join("&"))
                }
            }
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// What the guard decided for a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded {
    Render(Route),
    /// Replace the current location with this route; the requested page is
    /// never built.
    Redirect(Route),
}

/// Keeps protected pages behind a token check.
///
/// The check is presence-only: an expired or revoked token still renders the
/// page, and the failure surfaces on the first data call.
pub struct RouteGuard<'a> {
    session: &'a Session,
}

impl<'a> RouteGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        RouteGuard { session }
    }

    pub fn check(&self, route: Route) -> Guarded {
        if route.is_public() || self.session.is_authenticated() {
            Guarded::Render(route)
        } else {
            Guarded::Redirect(Route::Login)
        }
    }
}
