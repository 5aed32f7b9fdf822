use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::{Access, ApiClient};
use crate::error::{ClientError, ClientResult};
use crate::session::Session;

const REGISTER_NETWORK_FAILURE: &str = "Registration failed due to network error.";
const LOGIN_NETWORK_FAILURE: &str = "Login failed due to network error.";

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    session: Session,
}

impl AuthService {
    pub fn new(api: ApiClient, session: Session) -> Self {
        AuthService { api, session }
    }

    /// Create an account. Returns the backend's confirmation message.
    pub async fn register(&self, registration: &Registration) -> ClientResult<String> {
        self.api
            .post_for_text("/auth/register", registration, Access::Public)
            .await
            .map_err(|e| network_message(e, REGISTER_NETWORK_FAILURE))
    }

    /// Exchange credentials for a token and persist it.
    ///
    /// `Ok(None)` means the backend accepted the request but sent no token;
    /// callers must treat that as a failed login.
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<Option<String>> {
        let response: LoginResponse = self
            .api
            .post("/auth/login", credentials, Access::Public)
            .await
            .map_err(|e| network_message(e, LOGIN_NETWORK_FAILURE))?;

        let token = response.token.filter(|t| !t.is_empty());

        if let Some(token) = &token {
            self.session.set(token)?;
            info!(email = %credentials.email, "logged in");
        }

        Ok(token)
    }

    /// Forget the token. Does not contact the backend.
    pub fn logout(&self) -> ClientResult<()> {
        self.session.clear()
    }

    pub fn current_token(&self) -> Option<String> {
        self.session.get()
    }
}

fn network_message(err: ClientError, message: &str) -> ClientError {
    match err {
        ClientError::Network(_) => ClientError::Network(message.to_string()),
        other => other,
    }
}
