//! Login flow for the reading club: client-side form validation, the
//! credential exchange with the remote login endpoint, and the hand-off of
//! the issued credential to the session provider.

pub mod error;
pub mod login_client;
pub mod login_flow;
pub mod login_form;
pub mod messages;

pub use error::{ClientError, LoginError, Result as ClientResult};
pub use login_client::{HttpLoginClient, LoginApi, LoginRequest, LoginResponse};
pub use login_flow::{LoginFlow, LoginState};
pub use login_form::{LoginForm, ValidationErrors};

#[cfg(test)]
mod tests;
