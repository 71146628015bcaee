use serde::{Deserialize, Serialize};

/// Unified error type for all client operations.
///
/// The API reports failures in two different shapes: a JSON body carrying an
/// `error` array of strings (sometimes under HTTP 200), or a bare non-2xx
/// status with no structured body. Both are normalized into the variants
/// below before any operation returns. Transport-level failures from the HTTP
/// client are surfaced unmodified as [`Network`](Self::Network) or
/// [`Timeout`](Self::Timeout) and always take precedence over body inspection.
///
/// All variants are serializable for structured error reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, interrupted body read, etc.).
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    ///
    /// The client itself imposes no deadlines; this comes from the transport's
    /// connect/request timeouts configured at construction.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API reported one or more errors in its structured `error` array.
    ///
    /// A single entry becomes the message verbatim; multiple entries are
    /// joined line by line, each prefixed with its index.
    Api {
        /// Normalized error message.
        message: String,
    },

    /// The response had no structured error body but a non-2xx status code.
    HttpStatus {
        /// The HTTP status code returned.
        status: u16,
    },

    /// The requested domain name is not on the account.
    ///
    /// A lookup outcome, distinct from transport and HTTP failures: the
    /// name was absent even after the cache refreshed its enumeration.
    DomainNotFound {
        /// Domain name that was not found.
        domain: String,
    },

    /// Failed to decode a response body that passed error classification.
    Parse {
        /// Details about the decode failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ClientError {
    /// Whether this error is an expected outcome (API-reported rejection,
    /// unknown domain name) rather than an infrastructure failure, for log
    /// leveling: `warn` when `true`, `error` otherwise.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::DomainNotFound { .. })
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::Api { message } => write!(f, "{message}"),
            Self::HttpStatus { status } => {
                write!(f, "request returned http error code {status}")
            }
            Self::DomainNotFound { domain } => write!(f, "Domain '{domain}' not found"),
            Self::Parse { detail } => write!(f, "Parse error: {detail}"),
            Self::Serialization { detail } => write!(f, "Serialization error: {detail}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
