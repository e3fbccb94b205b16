//! Login initiation: email in, temporary login token out.

use chrono::Utc;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use shared::auth::{temp_login_ttl, Credential, CredentialStore, TEMP_LOGIN_TOKEN};
use shared::validate;

use crate::components::error_alert::ErrorAlert;
use crate::router::{OtpQuery, Route};
use crate::services::api::ApiService;
use crate::services::credentials::CookieStore;

#[function_component(EmailLogin)]
pub fn email_login() -> Html {
    let email = use_state(String::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let navigator = use_navigator();

    let oninput = {
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            error.set(None);
        })
    };

    let on_submit = {
        let email = email.clone();
        let loading = loading.clone();
        let error = error.clone();
        let navigator = navigator.clone();

        Callback::from(move |_: ()| {
            if *loading {
                return;
            }
            error.set(None);

            // Local preconditions: no network call unless the shape passes.
            let address = email.trim().to_string();
            if address.is_empty() {
                error.set(Some("Please enter your email address".to_string()));
                return;
            }
            if validate::email_shape(&address).is_err() {
                error.set(Some("Please enter a valid email address".to_string()));
                return;
            }

            loading.set(true);
            let loading = loading.clone();
            let error = error.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::login_init(&address).await {
                    Ok(token) => {
                        // A new login attempt overwrites any stale temp token.
                        CookieStore::new().set(
                            TEMP_LOGIN_TOKEN,
                            &Credential::new(token, Utc::now()),
                            temp_login_ttl(),
                        );

                        if let Some(navigator) = navigator {
                            let query = OtpQuery { email: address };
                            if let Err(err) =
                                navigator.push_with_query(&Route::OtpVerify, &query)
                            {
                                tracing::error!(?err, "failed to navigate to verification");
                            }
                        }
                    }
                    Err(err) => {
                        tracing::error!("login init failed: {err:?}");
                        error.set(Some(err.to_string()));
                        loading.set(false);
                    }
                }
            });
        })
    };

    let onclick = {
        let on_submit = on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(()))
    };

    let onkeydown = {
        let on_submit = on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_submit.emit(());
            }
        })
    };

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{ "Welcome Back" }</h1>
                <p class="auth-subtitle">{ "Enter your email to receive a verification code" }</p>

                <label>{ "Email Address" }</label>
                <input
                    id="email"
                    type="email"
                    placeholder="you@example.com"
                    value={(*email).clone()}
                    disabled={*loading}
                    {oninput}
                    {onkeydown}
                />

                if let Some(message) = (*error).clone() {
                    <ErrorAlert {message} />
                }

                <button class="btn btn-primary" {onclick} disabled={*loading}>
                    if *loading {
                        { "Sending..." }
                    } else {
                        { "Send OTP" }
                    }
                </button>
            </div>
        </div>
    }
}
