use tracing::warn;

use crate::pages::Outcome;
use crate::routes::Route;
use crate::services::{AuthService, Registration};

pub struct RegisterPage {
    pub form: Registration,
    message: Option<String>,
    submitting: bool,
}

impl Default for RegisterPage {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterPage {
    pub fn new() -> Self {
        RegisterPage {
            form: Registration::default(),
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

    pub fn edit(&mut self, edit: impl FnOnce(&mut Registration)) {
        edit(&mut self.form);
        self.message = None;
    }

    pub async fn submit(&mut self, auth: &AuthService) -> Outcome {
        let form = &self.form;
        if form.name.trim().is_empty() || form.email.trim().is_empty() || form.password.is_empty() {
            let message = "Please fill in name, email and password.".to_string();
            self.message = Some(message.clone());
            return Outcome::Invalid(message);
        }

        self.submitting = true;
        let result = auth.register(&self.form).await;
        self.submitting = false;

        match result {
            Ok(_) => {
                self.message = Some("Registration successful! Redirecting to login...".into());
                Outcome::Navigate(Route::Login)
            }
            Err(e) => {
                warn!(error = %e, "registration failed");
                let message = e.user_message("Registration failed.");
                self.message = Some(message.clone());
                Outcome::Failed(message)
            }
        }
    }
}
