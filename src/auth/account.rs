//! The identity bound to outgoing authenticated requests.

use std::sync::Arc;

use serde::Serialize;

use crate::auth::signature::params_to_object;
use crate::auth::{
    ClockSeededNonce, Credentials, CredentialsProvider, NonceProvider, RequestEnvelope, Role,
    SessionId, SessionRegistry, SignedHeaders, sign_envelope,
};
use crate::error::{GeminiError, PermissionError};
use crate::rest::endpoints::{GEMINI_BASE_URL, GEMINI_SANDBOX_URL};

/// An API key/secret pair, the base URL it talks to, and its nonce counter.
///
/// Clones share the nonce counter, so they act as the same account instance.
/// Accounts bound from a [`SessionRegistry`] also remember their session,
/// which is what role checks are resolved against.
#[derive(Clone)]
pub struct Account {
    credentials: Arc<dyn CredentialsProvider>,
    base_url: String,
    nonce_provider: Arc<dyn NonceProvider>,
    session: Option<(SessionId, Arc<SessionRegistry>)>,
}

impl Account {
    /// Create an account from credentials, targeting the production API.
    pub fn new(credentials: impl CredentialsProvider + 'static) -> Self {
        Self {
            credentials: Arc::new(credentials),
            base_url: GEMINI_BASE_URL.to_string(),
            nonce_provider: Arc::new(ClockSeededNonce::new()),
            session: None,
        }
    }

    pub(crate) fn with_session(
        mut self,
        session_id: SessionId,
        registry: Arc<SessionRegistry>,
    ) -> Self {
        self.session = Some((session_id, registry));
        self
    }

    /// Divert the account to the sandbox API.
    pub fn sandbox(mut self) -> Self {
        self.base_url = GEMINI_SANDBOX_URL.to_string();
        self
    }

    /// Point the account at a custom base URL (useful for a mock server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Replace the nonce provider.
    pub fn with_nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = provider;
        self
    }

    /// The account credentials.
    pub fn credentials(&self) -> &Credentials {
        self.credentials.get_credentials()
    }

    /// The public API key.
    pub fn api_key(&self) -> &str {
        &self.credentials().api_key
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Session this account was bound from.
    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|(id, _)| *id)
    }

    /// Role of the bound session, if any.
    pub fn role(&self) -> Option<Role> {
        self.session
            .as_ref()
            .and_then(|(id, registry)| registry.role_of(*id))
    }

    /// Check that the bound session holds exactly `required`.
    pub fn require_role(&self, required: Role) -> Result<(), PermissionError> {
        match self.role() {
            None => Err(PermissionError::NoSessionEstablished),
            Some(actual) if actual != required => {
                Err(PermissionError::RoleMismatch { required, actual })
            }
            Some(_) => Ok(()),
        }
    }

    /// Acquire the next nonce for this account.
    pub fn next_nonce(&self) -> i64 {
        self.nonce_provider.next_nonce()
    }

    /// Build and sign the envelope for `path` (e.g. `"order/new"`).
    ///
    /// Parameters are serialized before the nonce is taken, so a request that
    /// fails to encode does not advance the nonce sequence.
    pub fn sign<P>(&self, path: &str, params: &P) -> Result<SignedHeaders, GeminiError>
    where
        P: Serialize + ?Sized,
    {
        let params = params_to_object(params)?;
        let envelope = RequestEnvelope::new(path, self.next_nonce()).merge(params);
        sign_envelope(self.credentials(), &envelope)
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("credentials", self.credentials())
            .field("base_url", &self.base_url)
            .field("session_id", &self.session_id())
            .finish()
    }
}
