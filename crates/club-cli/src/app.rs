use crate::commands::Commands;
use crate::error::{CliError, Result as CliErrorResult};

use club_auth::TokenValidator;
use club_client::{HttpLoginClient, LoginFlow, LoginForm};
use club_config::Config;
use club_core::User;
use club_session::{
    Decision, FileStorage, LOGIN_PATH, Navigation, RouteTable, SessionProvider, SessionStorage,
};

use log::info;
use serde_json::{Value, json};

/// The signed-in state plus everything needed to act on it.
pub struct App<S: SessionStorage> {
    config: Config,
    provider: SessionProvider<S>,
    routes: RouteTable,
}

impl App<FileStorage> {
    /// Open the configured storage directory and restore the saved session.
    pub fn open(config: Config) -> CliErrorResult<Self> {
        let storage = FileStorage::open(config.storage_path()?)?;
        Ok(Self::with_storage(config, storage))
    }
}

impl<S: SessionStorage> App<S> {
    pub fn with_storage(config: Config, storage: S) -> Self {
        let validator = match &config.auth.jwt_secret {
            Some(secret) => TokenValidator::with_hs256(secret.as_bytes()),
            None => TokenValidator::unverified(),
        };
        info!("Token validation: {}", validator.mode());

        let mut provider = SessionProvider::new(storage, validator, &config.auth.storage_key)
            .with_revalidate_on_login(config.auth.revalidate_on_login);
        let outcome = provider.restore();
        info!("Session restore: {outcome:?}");

        Self {
            config,
            provider,
            routes: RouteTable::club_default(),
        }
    }

    pub fn provider(&self) -> &SessionProvider<S> {
        &self.provider
    }

    pub async fn execute(&mut self, command: Commands) -> CliErrorResult<Value> {
        match command {
            Commands::Login {
                email,
                password,
                from,
            } => self.login(LoginForm::new(email, password), from).await,
            Commands::Logout => self.logout(),
            Commands::Whoami => self.whoami(),
            Commands::Visit { path } => Ok(self.visit(&path)),
            Commands::Profile { name, email } => self.profile(name, email),
            Commands::Routes => Ok(self.routes()),
        }
    }

    async fn login(&mut self, form: LoginForm, from: Option<String>) -> CliErrorResult<Value> {
        let api = HttpLoginClient::new(
            &self.config.api.base_url,
            &self.config.api.login_path,
            self.config.api.timeout(),
        )?;
        let mut flow = LoginFlow::new(api, self.config.validation.min_password_length);

        let redirect_to = flow
            .submit(&form, &mut self.provider, from.as_deref())
            .await?;

        Ok(json!({
            "redirect_to": redirect_to,
            "user": self.provider.session().user,
        }))
    }

    fn logout(&mut self) -> CliErrorResult<Value> {
        self.provider.logout()?;
        Ok(json!({ "signed_out": true }))
    }

    fn whoami(&self) -> CliErrorResult<Value> {
        Ok(serde_json::to_value(self.provider.session())?)
    }

    fn visit(&self, path: &str) -> Value {
        match self.routes.check(self.provider.session(), path) {
            Navigation::NotFound => json!({
                "path": path,
                "decision": "not_found",
                "status": 404,
                "title": "Página no encontrada",
            }),
            Navigation::Guarded { route, decision } => {
                let mut value = json!({
                    "path": path,
                    "route": route.name,
                    "requirement": route.requirement.as_str(),
                    "decision": decision.as_str(),
                    "status": decision.status_code(),
                    "title": decision.title(),
                    "message": decision.message(),
                });
                if let Decision::RedirectToLogin { from } = &decision {
                    value["redirect"] = json!(LOGIN_PATH);
                    value["from"] = json!(from);
                }
                value
            }
        }
    }

    fn profile(&mut self, name: Option<String>, email: Option<String>) -> CliErrorResult<Value> {
        let session = self.provider.session();
        let current = match (&session.user, session.is_authenticated) {
            (Some(user), true) => user.clone(),
            _ => return Err(CliError::not_signed_in()),
        };

        let updated = User {
            name: name.unwrap_or(current.name),
            email: email.unwrap_or(current.email),
            ..current
        };
        self.provider.update_user(updated.clone())?;

        Ok(json!({ "user": updated }))
    }

    fn routes(&self) -> Value {
        let routes: Vec<Value> = self
            .routes
            .routes()
            .iter()
            .map(|r| {
                json!({
                    "path": r.path,
                    "name": r.name,
                    "requirement": r.requirement.as_str(),
                })
            })
            .collect();
        json!({ "routes": routes })
    }
}
