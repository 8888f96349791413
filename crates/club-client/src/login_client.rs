use crate::{ClientError, ClientResult, LoginForm};

use club_core::User;

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};

/// Body sent to the login endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful login response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Exchanges credentials for a session credential.
#[async_trait]
pub trait LoginApi: Send + Sync {
    async fn login(&self, form: &LoginForm) -> ClientResult<LoginResponse>;
}

/// [`LoginApi`] over HTTP.
pub struct HttpLoginClient {
    pub login_url: String,
    client: ReqwestClient,
}

impl HttpLoginClient {
    /// Create a client posting to `base_url` + `login_path`.
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:3000")
    /// * `login_path` - Endpoint path (e.g., "/api/login")
    /// * `timeout` - Whole-request timeout
    pub fn new(base_url: &str, login_path: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            login_url: format!("{}{}", base_url.trim_end_matches('/'), login_path),
            client,
        })
    }
}

#[async_trait]
impl LoginApi for HttpLoginClient {
    async fn login(&self, form: &LoginForm) -> ClientResult<LoginResponse> {
        let body = LoginRequest {
            email: &form.email,
            password: &form.password,
        };

        debug!("POST {}", self.login_url);
        let response = self.client.post(&self.login_url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::rejected(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl<T: LoginApi + ?Sized> LoginApi for &T {
    async fn login(&self, form: &LoginForm) -> ClientResult<LoginResponse> {
        (**self).login(form).await
    }
}
