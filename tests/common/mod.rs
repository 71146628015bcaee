//! Shared helpers for the sandbox integration tests.

#![allow(dead_code)]

use std::env;
use std::time::Duration;

use dnsmadeeasy::{BaseUrl, Client, Result};

/// Skip the current test when any of the given environment variables is unset.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Assert that an `Option` is `Some` and unwrap it, failing the test otherwise.
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Ok` and unwrap it, failing the test otherwise.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Test context wrapping a sandbox client.
pub struct SandboxContext {
    pub client: Client,
}

impl SandboxContext {
    /// Build a sandbox client from `DME_API_TOKEN` / `DME_API_SECRET`.
    pub fn from_env() -> Option<Self> {
        let api_token = env::var("DME_API_TOKEN").ok()?;
        let api_secret = env::var("DME_API_SECRET").ok()?;

        Some(Self {
            client: Client::new(api_token, api_secret, BaseUrl::Sandbox),
        })
    }
}

/// Generate a unique throwaway zone name for this test run.
pub fn generate_test_domain_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("dme-test-{}.testing", &uuid.to_string()[..8])
}

/// Wait for a zone's pending action to clear, then delete it.
///
/// Freshly created sandbox zones stay in "pending creation" for a while, and
/// deleting one in that state is rejected, so the zone is polled until its
/// pending-action ID clears. Gives up after 10 polls 30 seconds apart.
pub async fn delete_domain_when_settled(client: &Client, domain_id: u64) -> Result<()> {
    const MAX_POLLS: u32 = 10;
    let wait = Duration::from_secs(30);

    let mut polls = 0;
    loop {
        let domain = client.get_domain(domain_id).await?;
        if !domain.has_pending_action() {
            break;
        }
        polls += 1;
        assert!(
            polls < MAX_POLLS,
            "domain {} still has a pending action after {} polls",
            domain.name,
            MAX_POLLS
        );
        tokio::time::sleep(wait).await;
    }

    client.delete_domain(domain_id).await
}
