use crate::messages::{SUBMIT_LABEL, SUBMITTING_LABEL};
use crate::{LoginApi, LoginError, LoginForm};

use club_session::{DEFAULT_PATH, LOGIN_PATH, SessionError, SessionProvider, SessionStorage};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{info, warn};

/// Where the login view is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginState {
    #[default]
    Idle,
    /// Request in flight; the submit control is disabled.
    Submitting,
    /// Signed in; navigate to `redirect_to`.
    Success { redirect_to: String },
    /// Request finished without a session; `message` is shown in the alert.
    Failed { message: String },
}

/// Drives one login view: validate, exchange credentials, hand off to the session.
pub struct LoginFlow<A: LoginApi> {
    api: A,
    min_password_length: usize,
    state: LoginState,
}

impl<A: LoginApi> LoginFlow<A> {
    pub fn new(api: A, min_password_length: usize) -> Self {
        Self {
            api,
            min_password_length,
            state: LoginState::Idle,
        }
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, LoginState::Submitting)
    }

    /// Label of the submit control for the current state.
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Return to `Idle`, e.g. after a dropped in-flight request.
    pub fn reset(&mut self) {
        self.state = LoginState::Idle;
    }

    /// Validate `form`, exchange it for a credential and sign in.
    ///
    /// On success returns the path to navigate to: `from` when the user was
    /// redirected here from a protected view, otherwise the home page.
    pub async fn submit<S: SessionStorage>(
        &mut self,
        form: &LoginForm,
        provider: &mut SessionProvider<S>,
        from: Option<&str>,
    ) -> Result<String, LoginError> {
        if self.is_submitting() {
            return Err(LoginError::AlreadySubmitting {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.state = LoginState::Idle;
        form.validate(self.min_password_length)
            .map_err(LoginError::Validation)?;

        self.state = LoginState::Submitting;

        let result = match self.api.login(form).await {
            Ok(response) => match provider.login(response.token, response.user) {
                Ok(()) => Ok(()),
                Err(SessionError::Storage { source, .. }) => {
                    warn!("Signed in, but the session was not persisted: {source}");
                    Ok(())
                }
                Err(e) => Err(LoginError::from(e)),
            },
            Err(e) => Err(LoginError::from(e)),
        };

        match result {
            Ok(()) => {
                let redirect_to = redirect_target(from);
                info!("Login succeeded, continuing to {redirect_to}");
                self.state = LoginState::Success {
                    redirect_to: redirect_to.clone(),
                };
                Ok(redirect_to)
            }
            Err(e) => {
                warn!("Login failed: {e}");
                self.state = LoginState::Failed {
                    message: e.user_message(),
                };
                Err(e)
            }
        }
    }
}

fn redirect_target(from: Option<&str>) -> String {
    match from {
        Some(path) if !path.is_empty() && path != LOGIN_PATH => path.to_string(),
        _ => DEFAULT_PATH.to_string(),
    }
}
