//! Per-request HMAC-SHA1 authentication headers.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::client::Client;

type HmacSha1 = Hmac<Sha1>;

pub(crate) const APIKEY_HEADER: &str = "X-Dnsme-Apikey";
pub(crate) const REQUEST_DATE_HEADER: &str = "X-Dnsme-Requestdate";
pub(crate) const HMAC_HEADER: &str = "X-Dnsme-Hmac";

/// The three authentication header values attached to every request.
#[derive(Debug, Clone)]
pub(crate) struct AuthHeaders {
    /// Raw API token, sent as `X-Dnsme-Apikey`.
    pub api_key: String,
    /// RFC 7231 formatted request time, sent as `X-Dnsme-Requestdate`.
    pub request_date: String,
    /// Hex HMAC-SHA1 of the request date keyed with the API secret,
    /// sent as `X-Dnsme-Hmac`.
    pub hmac: String,
}

impl Client {
    /// Compute the authentication headers for the current instant.
    ///
    /// The signature binds to the request date, which the API checks for
    /// freshness, so this is recomputed for every request.
    pub(crate) fn auth_headers(&self) -> AuthHeaders {
        self.auth_headers_at(Utc::now())
    }

    pub(crate) fn auth_headers_at(&self, now: DateTime<Utc>) -> AuthHeaders {
        let request_date = http_date(now);
        let digest = hmac_sha1(self.api_secret.as_bytes(), request_date.as_bytes());

        AuthHeaders {
            api_key: self.api_token.clone(),
            request_date,
            hmac: hex::encode(digest),
        }
    }
}

/// Format a UTC instant in the fixed HTTP date format (RFC 7231),
/// e.g. `Tue, 15 Nov 1994 08:12:31 GMT`.
fn http_date(t: DateTime<Utc>) -> String {
    t.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

fn hmac_sha1(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}
