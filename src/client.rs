//! Client construction: credentials, endpoint selection, transport setup.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::Mutex;

/// Base path of the managed-DNS resource tree, relative to the API root.
pub(crate) const DNS_MANAGED_PATH: &str = "dns/managed/";

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default whole-request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Which DNS Made Easy endpoint a client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrl {
    /// The sandbox environment. Accounts are separate from production and
    /// provisioned zones never go live, which makes it the target for
    /// integration tests.
    Sandbox,
    /// The production environment.
    Production,
}

impl BaseUrl {
    /// The API root for this endpoint, with a trailing slash.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sandbox => "https://api.sandbox.dnsmadeeasy.com/V2.0/",
            Self::Production => "https://api.dnsmadeeasy.com/V2.0/",
        }
    }
}

/// DNS Made Easy API client.
///
/// Holds the account credentials, the chosen endpoint, a pooled HTTP client,
/// and the per-instance domain-ID cache used by
/// [`id_for_domain`](Client::id_for_domain). The client is not `Clone`
/// because the cache is owned exclusively by one instance; share it behind an
/// `Arc` instead.
pub struct Client {
    pub(crate) http: reqwest::Client,
    pub(crate) api_token: String,
    pub(crate) api_secret: String,
    base_url: BaseUrl,
    pub(crate) domain_id_cache: Mutex<Option<HashMap<String, u64>>>,
}

impl Client {
    /// Create a client with default transport timeouts.
    pub fn new(api_token: String, api_secret: String, base_url: BaseUrl) -> Self {
        Self::builder(api_token, api_secret).base_url(base_url).build()
    }

    /// Start building a client. Defaults to [`BaseUrl::Production`].
    pub fn builder(api_token: String, api_secret: String) -> ClientBuilder {
        ClientBuilder::new(api_token, api_secret)
    }

    /// Which endpoint this client targets.
    #[must_use]
    pub fn base_url(&self) -> BaseUrl {
        self.base_url
    }

    /// Resolve a relative path (with optional query string) against the API root.
    pub(crate) fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url.as_str(), path_and_query)
    }
}

/// Builder for [`Client`].
pub struct ClientBuilder {
    api_token: String,
    api_secret: String,
    base_url: BaseUrl,
    connect_timeout: Duration,
    timeout: Duration,
}

impl ClientBuilder {
    fn new(api_token: String, api_secret: String) -> Self {
        Self {
            api_token,
            api_secret,
            base_url: BaseUrl::Production,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Select the endpoint to issue requests against.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the transport connect timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Override the whole-request timeout. An elapsed timeout surfaces as
    /// [`ClientError::Timeout`](crate::ClientError::Timeout).
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> Client {
        let http = reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Client {
            http,
            api_token: self.api_token,
            api_secret: self.api_secret,
            base_url: self.base_url,
            domain_id_cache: Mutex::new(None),
        }
    }
}
