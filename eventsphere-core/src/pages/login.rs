use tracing::warn;

use crate::pages::Outcome;
use crate::routes::Route;
use crate::services::{AuthService, Credentials};

pub struct LoginPage {
    pub form: Credentials,
    message: Option<String>,
    submitting: bool,
}

impl Default for LoginPage {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginPage {
    pub fn new() -> Self {
        LoginPage {
            form: Credentials::default(),
            message: None,
            submitting: false,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Editing a field clears the previous message.
    pub fn edit(&mut self, edit: impl FnOnce(&mut Credentials)) {
        edit(&mut self.form);
        self.message = None;
    }

    pub async fn submit(&mut self, auth: &AuthService) -> Outcome {
        if self.form.email.trim().is_empty() || self.form.password.is_empty() {
            let message = "Please enter your email and password.".to_string();
            self.message = Some(message.clone());
            return Outcome::Invalid(message);
        }

        self.submitting = true;
        let result = auth.login(&self.form).await;
        self.submitting = false;

        let message = match result {
            Ok(Some(_)) => {
                self.message = Some("Login successful! Redirecting...".into());
                return Outcome::Navigate(Route::Dashboard);
            }
            Ok(None) => "Login failed. No token received.".to_string(),
            Err(e) => {
                warn!(error = %e, "login failed");
                e.user_message("Login failed. Check email and password.")
            }
        };

        self.message = Some(message.clone());
        Outcome::Failed(message)
    }
}
