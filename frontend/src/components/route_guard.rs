//! Navigation interceptor: runs the guard decision before a page renders.

use chrono::Utc;
use yew::prelude::*;
use yew_router::prelude::*;

use shared::auth::{decide, GuardDecision};

use crate::router::Route;
use crate::services::credentials::CookieStore;

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub children: Children,
}

/// Wraps every routed page. Unprotected paths render unchanged; protected
/// paths render only when a non-expired session token is present, otherwise
/// the navigation is redirected to the login entry point.
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let location = use_location();
    let path = location
        .as_ref()
        .map(|l| l.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    // Fresh store read per navigation; the cookie may have been rewritten by
    // another navigation context since the last decision.
    let store = CookieStore::new();
    match decide(&path, &store, Utc::now()) {
        GuardDecision::Allow => html! { <>{ props.children.clone() }</> },
        GuardDecision::RedirectToLogin => {
            tracing::info!(%path, "unauthenticated navigation, redirecting to login");
            html! { <Redirect<Route> to={Route::EmailLogin} /> }
        }
    }
}
