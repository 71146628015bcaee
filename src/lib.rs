//! # dnsmadeeasy
//!
//! Client library for the [DNS Made Easy](https://dnsmadeeasy.com/) V2.0
//! HTTP API: managed zones, DNS records, and the provider's HMAC request
//! authentication.
//!
//! Every request is signed with the account's API secret (an HMAC-SHA1 over
//! the request date, recomputed per request), and every response is
//! normalized through a single classifier that understands both of the API's
//! failure shapes: a structured `error` array, possibly under HTTP 200, or a
//! bare non-2xx status. Domain name→ID lookups go through a per-client
//! cache that refreshes itself at most once on a miss.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dnsmadeeasy::{BaseUrl, Client, Record, RecordType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Create a client against the sandbox or production endpoint
//!     let client = Client::new(
//!         "your-api-token".to_string(),
//!         "your-api-secret".to_string(),
//!         BaseUrl::Sandbox,
//!     );
//!
//!     // 2. Resolve a zone name to its numeric ID (cached per client)
//!     let domain_id = client.id_for_domain("example.com").await?;
//!
//!     // 3. Create a record
//!     let record = Record::new("www", RecordType::A, "198.51.100.1", 1800);
//!     let created = client.create_record(domain_id, &record).await?;
//!     println!("created record {:?}", created.id);
//!
//!     // 4. List what's there
//!     for record in client.enumerate_records(domain_id).await? {
//!         println!("{} {} -> {}", record.name, record.record_type, record.value);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError). Transport
//! failures ([`ClientError::Network`], [`ClientError::Timeout`]) surface
//! unmodified; API-reported errors arrive as [`ClientError::Api`] with the
//! provider's own message; a non-2xx response without a structured body
//! becomes [`ClientError::HttpStatus`]. A domain name that stays unknown
//! after the cache's single refresh is [`ClientError::DomainNotFound`],
//! which is a lookup outcome, not a transport failure.
//!
//! No operation retries on its own; timeouts and resiliency policy belong to
//! the caller and the transport configuration on [`ClientBuilder`].

mod client;
mod domains;
mod error;
mod http;
mod records;
mod sign;
mod types;
mod utils;

pub use client::{BaseUrl, Client, ClientBuilder};
pub use error::{ClientError, Result};
pub use types::{Domain, GtdLocation, Page, Record, RecordType};
