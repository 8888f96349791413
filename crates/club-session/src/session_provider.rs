use crate::{RestoreOutcome, Result as SessionErrorResult, SessionStorage};

use club_auth::TokenValidator;
use club_core::{PersistedSession, Session, User};

use log::{debug, info, warn};

/// Single owner of the current [`Session`].
///
/// Every transition is applied to memory first and then mirrored to storage,
/// so the in-memory state is authoritative when the two disagree. All
/// mutations take `&mut self`; a guard check made after one returns always
/// sees the new state.
pub struct SessionProvider<S: SessionStorage> {
    storage: S,
    validator: TokenValidator,
    key: String,
    session: Session,
    revalidate_on_login: bool,
    outcome: Option<RestoreOutcome>,
}

impl<S: SessionStorage> SessionProvider<S> {
    /// Create a provider in the loading state. Call [`Self::restore`] next.
    pub fn new(storage: S, validator: TokenValidator, key: impl Into<String>) -> Self {
        Self {
            storage,
            validator,
            key: key.into(),
            session: Session::loading(),
            revalidate_on_login: false,
            outcome: None,
        }
    }

    /// Decode and expiry-check tokens passed to [`Self::login`].
    pub fn with_revalidate_on_login(mut self, enabled: bool) -> Self {
        self.revalidate_on_login = enabled;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Outcome of the initial restore, `None` until it has run.
    pub fn restore_outcome(&self) -> Option<RestoreOutcome> {
        self.outcome
    }

    /// Restore the session from durable storage using the current time.
    pub fn restore(&mut self) -> RestoreOutcome {
        self.restore_at(chrono::Utc::now().timestamp())
    }

    /// Restore the session from durable storage as of `now` (Unix seconds).
    ///
    /// Runs once. After the session has left the loading state, either through
    /// a previous restore or a login/logout, this is a no-op that reports the
    /// current state.
    pub fn restore_at(&mut self, now: i64) -> RestoreOutcome {
        if !self.session.is_loading {
            return self.outcome.unwrap_or(if self.session.is_authenticated {
                RestoreOutcome::Restored
            } else {
                RestoreOutcome::NoRecord
            });
        }

        let outcome = self.load_persisted(now);
        self.outcome = Some(outcome);
        outcome
    }

    fn load_persisted(&mut self, now: i64) -> RestoreOutcome {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("No persisted session under '{}'", self.key);
                self.session = Session::signed_out();
                return RestoreOutcome::NoRecord;
            }
            Err(e) if e.is_corrupt_record() => {
                warn!("Persisted session corrupted: {e}");
                self.purge();
                return RestoreOutcome::Corrupted;
            }
            Err(e) => {
                warn!("Persisted session unreadable, starting signed out: {e}");
                self.session = Session::signed_out();
                return RestoreOutcome::Unreadable;
            }
        };

        let record = match PersistedSession::parse(&raw) {
            Ok(record) => record,
            Err(e) => {
                warn!("Persisted session corrupted: {e}");
                self.purge();
                return RestoreOutcome::Corrupted;
            }
        };

        let claims = match self.validator.decode(&record.token) {
            Ok(claims) => claims,
            Err(e) => {
                warn!("Persisted credential undecodable: {e}");
                self.purge();
                return RestoreOutcome::Corrupted;
            }
        };

        if claims.is_expired_at(now) {
            info!(
                "Persisted credential for {} expired at {}",
                record.user.id, claims.exp
            );
            self.purge();
            return RestoreOutcome::Expired;
        }

        info!(
            "Restored session for {} ({})",
            record.user.id, record.user.role
        );
        self.session = Session::signed_in(record.token, record.user);
        RestoreOutcome::Restored
    }

    /// Drop the persisted record and fall back to signed out.
    fn purge(&mut self) {
        if let Err(e) = self.storage.remove(&self.key) {
            warn!("Failed to remove persisted session: {e}");
        }
        self.session = Session::signed_out();
    }

    /// Sign in with a freshly issued credential.
    pub fn login(&mut self, token: impl Into<String>, user: User) -> SessionErrorResult<()> {
        self.login_at(token, user, chrono::Utc::now().timestamp())
    }

    /// [`Self::login`] with an explicit clock, used when revalidation is on.
    pub fn login_at(
        &mut self,
        token: impl Into<String>,
        user: User,
        now: i64,
    ) -> SessionErrorResult<()> {
        let token = token.into();

        if self.revalidate_on_login {
            self.validator.decode_fresh(&token, now)?;
        }

        let json = PersistedSession::new(token.clone(), user.clone()).to_json()?;

        info!("Signed in as {} ({})", user.id, user.role);
        self.session = Session::signed_in(token, user);

        self.storage.set(&self.key, &json)?;
        Ok(())
    }

    /// Sign out. Safe to call without an active session.
    pub fn logout(&mut self) -> SessionErrorResult<()> {
        if let Some(user) = &self.session.user {
            info!("Signed out {}", user.id);
        }
        self.session = Session::signed_out();

        self.storage.remove(&self.key)?;
        Ok(())
    }

    /// Replace the current user, keeping the persisted credential.
    ///
    /// A persisted record is only rewritten when one exists; a signed-out
    /// session is never written back to storage.
    pub fn update_user(&mut self, user: User) -> SessionErrorResult<()> {
        self.session.user = Some(user.clone());

        let parsed = match self.storage.get(&self.key) {
            Ok(Some(raw)) => PersistedSession::parse(&raw).map_err(|e| e.to_string()),
            Ok(None) => {
                debug!("No persisted session, profile updated in memory only");
                return Ok(());
            }
            Err(e) if e.is_corrupt_record() => Err(e.to_string()),
            Err(e) => return Err(e.into()),
        };

        let token = match (parsed, &self.session.token) {
            (Ok(record), _) => record.token,
            (Err(e), Some(token)) => {
                warn!("Persisted session corrupted, rewriting from memory: {e}");
                token.clone()
            }
            (Err(e), None) => {
                warn!("Persisted session corrupted and no credential in memory, removing: {e}");
                self.storage.remove(&self.key)?;
                return Ok(());
            }
        };

        let json = PersistedSession::new(token, user).to_json()?;
        self.storage.set(&self.key, &json)?;

        debug!("Persisted profile update for '{}'", self.key);
        Ok(())
    }
}
