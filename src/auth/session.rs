//! Session registry for running several Gemini API keys side by side.
//!
//! Gemini issues API keys with a fixed role (trader or fund manager). A
//! process that needs both roles, or several accounts, registers each key
//! under a caller-chosen session identifier and binds an [`Account`] from it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::{Account, Credentials};
use crate::error::GeminiError;

/// Caller-chosen session identifier.
pub type SessionId = u32;

/// Role assigned to an API key when it is created on the venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May place and cancel orders
    Trader,
    /// May request deposit addresses and withdraw funds
    FundManager,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Trader => write!(f, "trader"),
            Role::FundManager => write!(f, "fundmanager"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trader" => Ok(Role::Trader),
            "fundmanager" => Ok(Role::FundManager),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// A registered credential set. Immutable once registered.
#[derive(Debug, Clone)]
pub struct Session {
    /// Identifier the session was registered under
    pub session_id: SessionId,
    /// API key and secret
    pub credentials: Credentials,
    /// Role of the API key
    pub role: Role,
    /// Whether the key was created with "requires heartbeat"
    pub requires_heartbeat: bool,
}

/// Registry of sessions keyed by identifier.
///
/// Every read and write goes through one registry-wide lock, so the
/// duplicate check and the insert in [`SessionRegistry::add_session`] are a
/// single atomic step.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<SessionId, Session>>,
}

static GLOBAL_REGISTRY: OnceLock<Arc<SessionRegistry>> = OnceLock::new();

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry, created on first use and never torn down.
    pub fn global() -> Arc<SessionRegistry> {
        GLOBAL_REGISTRY
            .get_or_init(|| Arc::new(SessionRegistry::new()))
            .clone()
    }

    // Entries are inserted whole, so a panic elsewhere cannot leave a
    // half-written session behind the poisoned lock.
    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, Session>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a new session.
    ///
    /// Fails with [`GeminiError::DuplicateSession`] if `session_id` is already
    /// in use; the existing registration is left untouched.
    pub fn add_session(
        &self,
        session_id: SessionId,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        role: Role,
        requires_heartbeat: bool,
    ) -> Result<(), GeminiError> {
        let mut sessions = self.lock();
        if sessions.contains_key(&session_id) {
            return Err(GeminiError::DuplicateSession(session_id));
        }

        let credentials = Credentials::new(api_key, api_secret);
        info!(
            session_id,
            api_key = %credentials.api_key,
            %role,
            requires_heartbeat,
            "registered Gemini session"
        );
        sessions.insert(
            session_id,
            Session {
                session_id,
                credentials,
                role,
                requires_heartbeat,
            },
        );
        Ok(())
    }

    /// Bind an account to a registered session.
    ///
    /// The account targets the production API; call [`Account::sandbox`] to
    /// divert it. Each call returns a new account instance with its own nonce
    /// counter.
    pub fn bind(self: &Arc<Self>, session_id: SessionId) -> Result<Account, GeminiError> {
        let credentials = self
            .lock()
            .get(&session_id)
            .map(|session| session.credentials.clone())
            .ok_or(GeminiError::UnknownSession(session_id))?;

        Ok(Account::new(credentials).with_session(session_id, Arc::clone(self)))
    }

    /// Get a copy of a registered session.
    pub fn session(&self, session_id: SessionId) -> Option<Session> {
        self.lock().get(&session_id).cloned()
    }

    /// Role registered for a session.
    pub fn role_of(&self, session_id: SessionId) -> Option<Role> {
        self.lock().get(&session_id).map(|session| session.role)
    }

    /// Identifiers of sessions registered with `requires_heartbeat`, sorted.
    pub fn heartbeat_sessions(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self
            .lock()
            .values()
            .filter(|session| session.requires_heartbeat)
            .map(|session| session.session_id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered sessions.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no session is registered.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
