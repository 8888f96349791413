use club_core::Session;

use log::debug;

/// Access level a view declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RouteRequirement {
    /// Rendered for everyone, never consults the session
    #[default]
    Public,
    /// Any signed-in member
    Authenticated,
    /// Signed-in member with the admin role
    Admin,
}

impl RouteRequirement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Authenticated => "authenticated",
            Self::Admin => "admin",
        }
    }

    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Public)
    }
}

/// What to render for a requested view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The session is still being restored; show a neutral placeholder.
    Loading,
    /// Nobody is signed in; go to the login view and come back to `from` afterwards.
    RedirectToLogin { from: String },
    /// Known identity without the required role (403).
    Forbidden,
    /// Role required but no identity is known (401).
    Unauthorized,
    /// Render the requested view.
    Allow,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::RedirectToLogin { .. } => "redirect_to_login",
            Self::Forbidden => "forbidden",
            Self::Unauthorized => "unauthorized",
            Self::Allow => "allow",
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// HTTP-style status for the access-denied outcomes.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Forbidden => Some(403),
            Self::Unauthorized => Some(401),
            _ => None,
        }
    }

    /// Title shown to the user for non-allow outcomes.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some("Cargando..."),
            Self::Forbidden => Some("Acceso denegado"),
            Self::Unauthorized => Some("Acceso no autorizado"),
            Self::RedirectToLogin { .. } | Self::Allow => None,
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Forbidden => {
                Some("No tienes los permisos necesarios para acceder a esta página.")
            }
            Self::Unauthorized => Some("No tienes permisos para acceder a esta página."),
            _ => None,
        }
    }
}

/// Decide whether `requested` may be rendered for `session`.
///
/// Public routes are always allowed. Otherwise checks run in order:
/// loading, authentication, role.
pub fn guard(session: &Session, requirement: RouteRequirement, requested: &str) -> Decision {
    let decision = match requirement {
        RouteRequirement::Public => Decision::Allow,
        _ if session.is_loading => Decision::Loading,
        _ if !session.is_authenticated => Decision::RedirectToLogin {
            from: requested.to_string(),
        },
        RouteRequirement::Admin => match &session.user {
            Some(user) if user.is_admin() => Decision::Allow,
            Some(_) => Decision::Forbidden,
            None => Decision::Unauthorized,
        },
        RouteRequirement::Authenticated => Decision::Allow,
    };

    debug!("Guard {requested} ({requirement:?}) -> {decision:?}");
    decision
}
