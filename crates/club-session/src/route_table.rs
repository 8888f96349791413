use crate::{Decision, RouteRequirement, guard};

use club_core::Session;

/// Path of the login view.
pub const LOGIN_PATH: &str = "/login";
/// Where a successful login lands when no original location was requested.
pub const DEFAULT_PATH: &str = "/";

/// A view declared by the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub requirement: RouteRequirement,
}

/// Result of navigating to a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    NotFound,
    Guarded { route: Route, decision: Decision },
}

impl Navigation {
    pub fn decision(&self) -> Option<&Decision> {
        match self {
            Self::NotFound => None,
            Self::Guarded { decision, .. } => Some(decision),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The reading club site.
    pub fn club_default() -> Self {
        Self::new()
            .route("/", "home", RouteRequirement::Public)
            .route("/libro-del-mes", "book of the month", RouteRequirement::Public)
            .route("/calendario", "calendar", RouteRequirement::Public)
            .route("/biblioteca", "library", RouteRequirement::Authenticated)
            .route("/perfil", "profile", RouteRequirement::Authenticated)
            .route("/admin", "admin dashboard", RouteRequirement::Admin)
            .route(LOGIN_PATH, "login", RouteRequirement::Public)
    }

    pub fn route(
        mut self,
        path: &'static str,
        name: &'static str,
        requirement: RouteRequirement,
    ) -> Self {
        self.routes.retain(|r| r.path != path);
        self.routes.push(Route {
            path,
            name,
            requirement,
        });
        self
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find the route for `path`, ignoring a query string and trailing slashes.
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        let normalized = normalize(path);
        self.routes.iter().find(|r| r.path == normalized)
    }

    /// Resolve `path` and run the guard against `session`.
    pub fn check(&self, session: &Session, path: &str) -> Navigation {
        match self.resolve(path) {
            None => Navigation::NotFound,
            Some(route) => Navigation::Guarded {
                route: route.clone(),
                decision: guard(session, route.requirement, path),
            },
        }
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
