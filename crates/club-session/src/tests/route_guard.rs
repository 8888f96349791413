use crate::tests::{admin, member};
use crate::{Decision, RouteRequirement, guard};

use club_core::Session;

#[test]
fn given_loading_session_when_protected_route_then_loading_not_redirect() {
    let session = Session::loading();

    assert_eq!(
        guard(&session, RouteRequirement::Authenticated, "/perfil"),
        Decision::Loading
    );
    assert_eq!(
        guard(&session, RouteRequirement::Admin, "/admin"),
        Decision::Loading
    );
}

#[test]
fn given_signed_out_session_when_protected_route_then_redirect_carries_location() {
    let session = Session::signed_out();

    let decision = guard(&session, RouteRequirement::Authenticated, "/biblioteca");

    assert_eq!(
        decision,
        Decision::RedirectToLogin {
            from: "/biblioteca".to_string()
        }
    );
    assert_eq!(decision.status_code(), None);
}

#[test]
fn given_member_when_admin_route_then_forbidden_not_unauthorized() {
    let session = Session::signed_in("tok".to_string(), member());

    let decision = guard(&session, RouteRequirement::Admin, "/admin");

    assert_eq!(decision, Decision::Forbidden);
    assert_eq!(decision.status_code(), Some(403));
    assert_eq!(decision.title(), Some("Acceso denegado"));
}

#[test]
fn given_authenticated_without_user_when_admin_route_then_unauthorized() {
    let session = Session {
        user: None,
        token: Some("tok".to_string()),
        is_authenticated: true,
        is_loading: false,
    };

    let decision = guard(&session, RouteRequirement::Admin, "/admin");

    assert_eq!(decision, Decision::Unauthorized);
    assert_eq!(decision.status_code(), Some(401));
    assert!(decision.message().is_some());
}

#[test]
fn given_admin_when_admin_route_then_allow() {
    let session = Session::signed_in("tok".to_string(), admin());

    assert!(guard(&session, RouteRequirement::Admin, "/admin").is_allowed());
}

#[test]
fn given_member_when_authenticated_route_then_allow() {
    let session = Session::signed_in("tok".to_string(), member());

    assert_eq!(
        guard(&session, RouteRequirement::Authenticated, "/perfil"),
        Decision::Allow
    );
}

#[test]
fn given_any_session_when_public_route_then_allow() {
    for session in [
        Session::loading(),
        Session::signed_out(),
        Session::signed_in("tok".to_string(), member()),
    ] {
        assert_eq!(
            guard(&session, RouteRequirement::Public, "/calendario"),
            Decision::Allow
        );
    }
}

#[test]
fn test_route_requirement_is_protected() {
    assert!(!RouteRequirement::Public.is_protected());
    assert!(RouteRequirement::Authenticated.is_protected());
    assert!(RouteRequirement::Admin.is_protected());
    assert_eq!(RouteRequirement::default(), RouteRequirement::Public);
}

#[test]
fn test_labels() {
    assert_eq!(RouteRequirement::Admin.as_str(), "admin");
    assert_eq!(Decision::Forbidden.as_str(), "forbidden");
    assert_eq!(
        Decision::RedirectToLogin {
            from: "/perfil".to_string()
        }
        .as_str(),
        "redirect_to_login"
    );
}
