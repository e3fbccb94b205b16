//! Cookie-backed credential store.
//!
//! Entries are written host-only with `Secure; SameSite=Strict`, matching
//! the restrictions the store contract requires: never sent over insecure
//! transport, never attached to cross-site requests.

use chrono::Duration;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use shared::auth::{Credential, CredentialStore};

#[derive(Default)]
pub struct CookieStore;

impl CookieStore {
    pub fn new() -> Self {
        Self
    }

    fn document() -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }

    fn raw_cookies() -> Option<String> {
        Self::document()?.cookie().ok()
    }

    fn write(cookie: &str) {
        match Self::document() {
            Some(document) => {
                if let Err(err) = document.set_cookie(cookie) {
                    tracing::warn!(?err, "failed to write cookie");
                }
            }
            None => tracing::warn!("no document available, cookie not written"),
        }
    }
}

impl CredentialStore for CookieStore {
    fn set(&self, name: &str, credential: &Credential, ttl: Duration) {
        let cookie = format!(
            "{}={}; Max-Age={}; Path=/; Secure; SameSite=Strict",
            name,
            credential.encode(),
            ttl.num_seconds(),
        );
        Self::write(&cookie);
    }

    fn get(&self, name: &str) -> Option<Credential> {
        let cookies = Self::raw_cookies()?;
        Credential::decode(&cookie_value(&cookies, name)?)
    }

    fn clear(&self, name: &str) {
        Self::write(&format!(
            "{name}=; Max-Age=0; Path=/; Secure; SameSite=Strict"
        ));
    }
}

/// Pull a single value out of a `document.cookie` string (`a=1; b=2`).
fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value_finds_named_entry() {
        let cookies = "tempLoginToken=1700000000:tmp123; authToken=1700000000:sess987";
        assert_eq!(
            cookie_value(cookies, "authToken").as_deref(),
            Some("1700000000:sess987")
        );
        assert_eq!(
            cookie_value(cookies, "tempLoginToken").as_deref(),
            Some("1700000000:tmp123")
        );
    }

    #[test]
    fn test_cookie_value_ignores_name_suffix_collisions() {
        let cookies = "authTokenShadow=1:x; authToken=2:y";
        assert_eq!(cookie_value(cookies, "authToken").as_deref(), Some("2:y"));
    }

    #[test]
    fn test_cookie_value_absent() {
        assert!(cookie_value("", "authToken").is_none());
        assert!(cookie_value("other=1", "authToken").is_none());
    }

    #[test]
    fn test_stored_entry_round_trips_through_cookie_format() {
        let now = chrono::Utc::now();
        let credential = Credential::new("sess987", now);
        let cookies = format!("authToken={}", credential.encode());

        let value = cookie_value(&cookies, "authToken").expect("present");
        let decoded = Credential::decode(&value).expect("decodes");
        assert_eq!(decoded.value, "sess987");
    }
}
