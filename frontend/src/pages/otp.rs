//! OTP verification: code + temporary login token in, session token out.

use chrono::Utc;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use shared::api::VerifyOtpRequest;
use shared::auth::{
    session_ttl, Credential, CredentialStore, SESSION_TOKEN, TEMP_LOGIN_TOKEN,
};
use shared::validate;

use crate::components::error_alert::ErrorAlert;
use crate::router::{OtpQuery, Route};
use crate::services::api::ApiService;
use crate::services::credentials::CookieStore;

const INVALID_SESSION: &str = "Invalid session. Please go back and try again.";

#[function_component(OtpVerify)]
pub fn otp_verify() -> Html {
    let location = use_location();
    let email = location
        .as_ref()
        .and_then(|l| l.query::<OtpQuery>().ok())
        .map(|q| q.email)
        .unwrap_or_default();

    // Read once for the lifetime of this screen, not per attempt.
    let temp_token = use_state(|| {
        CookieStore::new()
            .get(TEMP_LOGIN_TOKEN)
            .map(|credential| credential.value)
    });

    let otp = use_state(String::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let navigator = use_navigator();

    // Direct navigation or an expired init step leaves nothing to verify
    // against; block before any input happens.
    let session_valid = !email.is_empty() && temp_token.is_some();
    {
        let error = error.clone();
        use_effect_with(session_valid, move |valid| {
            if !*valid {
                error.set(Some(INVALID_SESSION.to_string()));
            }
            || ()
        });
    }

    let oninput = {
        let otp = otp.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            otp.set(validate::normalize_otp(&input.value()));
            error.set(None);
        })
    };

    let on_submit = {
        let email = email.clone();
        let temp_token = temp_token.clone();
        let otp = otp.clone();
        let loading = loading.clone();
        let error = error.clone();
        let navigator = navigator.clone();

        Callback::from(move |_: ()| {
            if *loading {
                return;
            }
            error.set(None);

            let Some(token) = (*temp_token).clone() else {
                error.set(Some(INVALID_SESSION.to_string()));
                return;
            };
            if email.is_empty() {
                error.set(Some(INVALID_SESSION.to_string()));
                return;
            }

            let code = (*otp).clone();
            if validate::otp_shape(&code).is_err() {
                error.set(Some("OTP must be 6 digits.".to_string()));
                return;
            }

            loading.set(true);
            let request = VerifyOtpRequest {
                email: email.clone(),
                otp: code,
                token,
            };
            let loading = loading.clone();
            let error = error.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::verify_otp(&request).await {
                    Ok(session) => {
                        let store = CookieStore::new();
                        store.set(
                            SESSION_TOKEN,
                            &Credential::new(session, Utc::now()),
                            session_ttl(),
                        );
                        // The temp token is superseded; drop it instead of
                        // leaving it to expire on its own.
                        store.clear(TEMP_LOGIN_TOKEN);

                        gloo::dialogs::alert("OTP Verified Successfully!");
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(err) => {
                        tracing::error!("otp verification failed: {err:?}");
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
                <h1>{ "Verify OTP" }</h1>
                <p class="auth-subtitle">
                    { "Enter the OTP sent to " }<b>{ &email }</b>
                </p>

                <input
                    type="text"
                    inputmode="numeric"
                    maxlength="6"
                    placeholder="Enter 6-digit OTP"
                    value={(*otp).clone()}
                    disabled={*loading}
                    {oninput}
                    {onkeydown}
                />

                if let Some(message) = (*error).clone() {
                    <ErrorAlert {message} />
                }

                <button class="btn btn-primary" {onclick} disabled={*loading}>
                    if *loading {
                        { "Verifying..." }
                    } else {
                        { "Verify OTP" }
                    }
                </button>
            </div>
        </div>
    }
}
