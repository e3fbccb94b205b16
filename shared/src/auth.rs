//! Authentication core: credential model, store contract, and the
//! route-guard decision.
//!
//! Tokens are opaque strings issued by the authentication service. The
//! client only tracks *when* it received one so expiry can be enforced
//! locally; it never inspects the value.

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

/// Store entry holding the temporary login token (init → verify hand-off).
pub const TEMP_LOGIN_TOKEN: &str = "tempLoginToken";

/// Store entry holding the session token (sole proof of authentication).
pub const SESSION_TOKEN: &str = "authToken";

pub const TEMP_LOGIN_TTL_DAYS: i64 = 1;
pub const SESSION_TTL_DAYS: i64 = 7;

pub fn temp_login_ttl() -> Duration {
    Duration::days(TEMP_LOGIN_TTL_DAYS)
}

pub fn session_ttl() -> Duration {
    Duration::days(SESSION_TTL_DAYS)
}

/// An opaque token value plus the instant the client received it.
#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    pub value: String,
    pub issued_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(value: impl Into<String>, issued_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            issued_at,
        }
    }

    /// Serialize as `<unix-seconds>:<value>` so the issue time survives a
    /// trip through persisted storage alongside the token itself.
    pub fn encode(&self) -> String {
        format!("{}:{}", self.issued_at.timestamp(), self.value)
    }

    /// Inverse of [`encode`](Self::encode). A value that does not carry a
    /// parseable issue time is treated as absent rather than trusted.
    pub fn decode(raw: &str) -> Option<Self> {
        let (ts, value) = raw.split_once(':')?;
        let issued_at = DateTime::from_timestamp(ts.parse::<i64>().ok()?, 0)?;
        if value.is_empty() {
            return None;
        }
        Some(Self::new(value, issued_at))
    }

    pub fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now >= self.issued_at + ttl
    }
}

/// Persisted, navigation-surviving storage for the two token entries.
///
/// Injected into every consumer rather than accessed as ambient state so
/// tests can substitute [`MemoryStore`]. Implementations apply their own
/// security attributes on write (the cookie store marks entries
/// secure-transport-only and cross-site restricted); this contract only
/// deals in names, values, and lifetimes.
pub trait CredentialStore {
    /// Write an entry, replacing any previous value under the same name.
    fn set(&self, name: &str, credential: &Credential, ttl: Duration);

    /// Read back an entry, or `None` if absent or unreadable.
    fn get(&self, name: &str) -> Option<Credential>;

    /// Drop an entry. Clearing an absent entry is a no-op.
    fn clear(&self, name: &str);
}

/// In-memory store used by tests and host-side code.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, Credential>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn set(&self, name: &str, credential: &Credential, _ttl: Duration) {
        self.entries
            .borrow_mut()
            .insert(name.to_string(), credential.clone());
    }

    fn get(&self, name: &str) -> Option<Credential> {
        self.entries.borrow().get(name).cloned()
    }

    fn clear(&self, name: &str) {
        self.entries.borrow_mut().remove(name);
    }
}

// ============================================================================
// Route Guard
// ============================================================================

/// Path prefixes that require a session token.
pub const PROTECTED_PREFIXES: &[&str] = &["/dashboard"];

/// Where unauthenticated requests for protected paths are sent.
pub const LOGIN_PATH: &str = "/email";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
}

/// Decide whether a navigation may proceed. Runs once per navigation, ahead
/// of any page rendering.
///
/// The session token is read from the store at decision time — never from a
/// cache — so a token written by another navigation context is honored on
/// the next navigation here. An expired-but-present token counts as absent.
pub fn decide(path: &str, store: &dyn CredentialStore, now: DateTime<Utc>) -> GuardDecision {
    if !PROTECTED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
    {
        return GuardDecision::Allow;
    }

    match store.get(SESSION_TOKEN) {
        Some(credential) if !credential.is_expired(session_ttl(), now) => GuardDecision::Allow,
        _ => GuardDecision::RedirectToLogin,
    }
}
