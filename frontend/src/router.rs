use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::route_guard::RouteGuard;
use crate::pages::{
    dashboard::Dashboard, email::EmailLogin, not_found::NotFound, otp::OtpVerify,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/email")]
    EmailLogin,
    #[at("/otp")]
    OtpVerify,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query parameters carried from the login page to the verification page.
/// The email travels as a navigation parameter, not re-derived from storage.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct OtpQuery {
    pub email: String,
}

pub fn switch(routes: Route) -> Html {
    let page = match routes {
        Route::Home => html! { <Redirect<Route> to={Route::EmailLogin} /> },
        Route::EmailLogin => html! { <EmailLogin /> },
        Route::OtpVerify => html! { <OtpVerify /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::NotFound => html! { <NotFound /> },
    };

    // Every navigation passes through the guard before any page renders.
    html! { <RouteGuard>{ page }</RouteGuard> }
}
