//! Gemini REST API client implementation.

use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use tracing::{debug, trace};

use crate::auth::{Account, Role};
use crate::error::GeminiError;
use crate::rest::classify::{ClassifiedResponse, classify, decode};
use crate::rest::endpoints::{API_VERSION, GEMINI_BASE_URL, GEMINI_SANDBOX_URL, headers};

/// The Gemini REST API client.
///
/// Public endpoints work without an account. Private endpoints sign each
/// request with the bound [`Account`]; the request data travels in the
/// signed payload header and the HTTP body is left empty.
///
/// The client does not retry and does not throttle. See
/// [`crate::rate_limit`] for the venue's advisory limits.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use gemini_api_client::auth::{Role, SessionRegistry};
/// use gemini_api_client::rest::GeminiRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let registry = Arc::new(SessionRegistry::new());
///     registry.add_session(1, "api_key", "api_secret", Role::Trader, false)?;
///
///     let client = GeminiRestClient::builder()
///         .account(registry.bind(1)?.sandbox())
///         .build();
///
///     let balances = client.get_balances().await?;
///     println!("Balances: {:?}", balances);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct GeminiRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    account: Option<Account>,
}

impl GeminiRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`GeminiRestClient::builder()`] to bind an account for private endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> GeminiRestClientBuilder {
        GeminiRestClientBuilder::new()
    }

    /// The bound account, if any.
    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    /// Base URL used for requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v{}/{}", self.base_url, API_VERSION, path)
    }

    /// Make a public GET request.
    pub(crate) async fn public_get<T>(&self, path: &str) -> Result<T, GeminiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.http_client.get(self.url(path)).send().await?;
        self.parse_response(response).await
    }

    /// Make a public GET request with query parameters.
    pub(crate) async fn public_get_with_params<T, Q>(
        &self,
        path: &str,
        params: &Q,
    ) -> Result<T, GeminiError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let query_string = serde_urlencoded::to_string(params)
            .map_err(|e| GeminiError::InvalidParams(e.to_string()))?;
        let url = if query_string.is_empty() {
            self.url(path)
        } else {
            format!("{}?{}", self.url(path), query_string)
        };
        let response = self.http_client.get(&url).send().await?;
        self.parse_response(response).await
    }

    /// Make an authenticated POST request.
    ///
    /// Checks run in order: credentials, then `required_role`, then the nonce
    /// is taken and the payload signed. A request rejected by either check
    /// never advances the account's nonce.
    pub(crate) async fn private_post<T, P>(
        &self,
        path: &str,
        params: &P,
        required_role: Option<Role>,
    ) -> Result<T, GeminiError>
    where
        T: serde::de::DeserializeOwned,
        P: serde::Serialize + ?Sized,
    {
        let account = self
            .account
            .as_ref()
            .filter(|account| account.credentials().is_configured())
            .ok_or(GeminiError::MissingCredentials)?;

        if let Some(role) = required_role {
            account.require_role(role)?;
        }

        let signed = account.sign(path, params)?;
        if let Some(payload) = signed.payload_json() {
            debug!(path, %payload, "signed Gemini request");
        }

        let response = self
            .http_client
            .post(self.url(path))
            .header(headers::API_KEY, &signed.api_key)
            .header(headers::PAYLOAD, &signed.payload_base64)
            .header(headers::SIGNATURE, &signed.signature_hex)
            .header(CONTENT_TYPE, "text/plain")
            .header(CACHE_CONTROL, "no-cache")
            .body("")
            .send()
            .await?;

        self.parse_response(response).await
    }

    /// Parse a response from the Gemini API.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, GeminiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;
        trace!(status = status.as_u16(), body = %body, "received Gemini response");

        if !status.is_success() {
            // Gemini reports most failures with a 4xx status and an error
            // envelope; anything else is a transport problem.
            return Err(match classify(&body) {
                ClassifiedResponse::ApplicationError(api_error) => GeminiError::Api(api_error),
                ClassifiedResponse::Success(_) => GeminiError::HttpStatus {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        decode(&body)
    }
}

impl Default for GeminiRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GeminiRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiRestClient")
            .field("base_url", &self.base_url)
            .field("account", &self.account)
            .finish()
    }
}

/// Builder for [`GeminiRestClient`].
pub struct GeminiRestClientBuilder {
    base_url: Option<String>,
    account: Option<Account>,
    user_agent: Option<String>,
    sandbox: bool,
}

impl GeminiRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            account: None,
            user_agent: None,
            sandbox: false,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    ///
    /// Takes precedence over the account's base URL and [`Self::sandbox`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Bind an account for authenticated requests.
    pub fn account(mut self, account: Account) -> Self {
        self.account = Some(account);
        self
    }

    /// Use the sandbox API.
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> GeminiRestClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("gemini-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("gemini-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let base_url = match (self.base_url, &self.account) {
            (Some(url), _) => url,
            (None, _) if self.sandbox => GEMINI_SANDBOX_URL.to_string(),
            (None, Some(account)) => account.base_url().to_string(),
            (None, None) => GEMINI_BASE_URL.to_string(),
        };

        GeminiRestClient {
            http_client: client,
            base_url: base_url.trim_end_matches('/').to_string(),
            account: self.account,
        }
    }
}

impl Default for GeminiRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
