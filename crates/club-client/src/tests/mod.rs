
use crate::{ClientError, ClientResult, LoginApi, LoginForm, LoginResponse};

use club_auth::TokenValidator;
use club_core::{User, UserRole};
use club_session::{MemoryStorage, SessionProvider};

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

pub(crate) const KEY: &str = "auth";

pub(crate) fn member() -> User {
    User {
        id: "u-1".to_string(),
        name: "Ana Lectora".to_string(),
        email: "test@example.com".to_string(),
        role: UserRole::User,
    }
}

pub(crate) fn valid_form() -> LoginForm {
    LoginForm::new("test@example.com", "password123")
}

pub(crate) fn restored_provider(storage: &MemoryStorage) -> SessionProvider<MemoryStorage> {
    let mut provider = SessionProvider::new(storage.clone(), TokenValidator::unverified(), KEY);
    provider.restore();
    provider
}

/// Canned endpoint behaviour.
pub(crate) enum Reply {
    Success(LoginResponse),
    Status(u16),
    Malformed,
}

/// Login endpoint stand-in that records how often it was called.
pub(crate) struct FakeApi {
    reply: Mutex<Option<Reply>>,
    pub(crate) calls: AtomicUsize,
}

impl FakeApi {
    pub(crate) fn new(reply: Reply) -> Self {
        Self {
            reply: Mutex::new(Some(reply)),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LoginApi for FakeApi {
    async fn login(&self, _form: &LoginForm) -> ClientResult<LoginResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.reply.lock().unwrap().take();
        match reply {
            Some(Reply::Success(response)) => Ok(response),
            Some(Reply::Status(status)) => Err(ClientError::rejected(status)),
            Some(Reply::Malformed) | None => {
                let err = serde_json::from_str::<LoginResponse>("{}").unwrap_err();
                Err(ClientError::from_json(err))
            }
        }
    }
}
