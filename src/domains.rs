//! Domain operations and the name→ID lookup cache.

use std::collections::HashMap;
use std::future::Future;

use serde::Serialize;

use crate::client::{Client, DNS_MANAGED_PATH};
use crate::error::{ClientError, Result};
use crate::types::{Domain, Page};

impl Client {
    /// Fetch one page of the managed-domain listing.
    ///
    /// Pages are 1-indexed. The envelope carries `total_pages` for callers
    /// paging manually; [`enumerate_domains`](Client::enumerate_domains)
    /// follows the pagination itself.
    pub async fn list_domains(&self, page: u32) -> Result<Page<Domain>> {
        self.get(&format!("{DNS_MANAGED_PATH}?page={page}")).await
    }

    /// Name→ID map of every domain on the account.
    ///
    /// Follows the listing pagination to the last page, so the result is a
    /// complete snapshot of the account at the time of the call.
    pub async fn enumerate_domains(&self) -> Result<HashMap<String, u64>> {
        let mut domains = HashMap::new();
        let mut page = 1;
        loop {
            let listing = self.list_domains(page).await?;
            let last_page = listing.total_pages;
            for domain in listing.items {
                domains.insert(domain.name, domain.id);
            }
            if page >= last_page {
                break;
            }
            page += 1;
        }
        Ok(domains)
    }

    /// Fetch a single domain by its numeric ID.
    pub async fn get_domain(&self, domain_id: u64) -> Result<Domain> {
        self.get(&format!("{DNS_MANAGED_PATH}{domain_id}")).await
    }

    /// Create a zone with the given name.
    ///
    /// Provisioning is asynchronous: the returned domain usually carries a
    /// non-zero pending-action ID, and mutations that depend on the zone
    /// being settled (notably [`delete_domain`](Client::delete_domain)) must
    /// wait for [`Domain::has_pending_action`] to clear.
    pub async fn create_domain(&self, name: &str) -> Result<Domain> {
        #[derive(Serialize)]
        struct CreateDomain<'a> {
            name: &'a str,
        }

        self.post(DNS_MANAGED_PATH, &CreateDomain { name }).await
    }

    /// Delete a zone by its numeric ID.
    pub async fn delete_domain(&self, domain_id: u64) -> Result<()> {
        self.delete(&format!("{DNS_MANAGED_PATH}{domain_id}")).await
    }

    /// Resolve a domain name to its numeric ID through the per-client cache.
    ///
    /// The cache is populated by a full enumeration on first use. A miss
    /// against a cache populated before this call triggers exactly one
    /// wholesale re-enumeration, which picks up zones created since, before
    /// the name is declared unknown with
    /// [`ClientError::DomainNotFound`]. There is no invalidation API; the
    /// refresh replaces the map as a whole.
    pub async fn id_for_domain(&self, domain: &str) -> Result<u64> {
        let mut cache = self.domain_id_cache.lock().await;
        lookup_domain_id(&mut cache, domain, || self.enumerate_domains()).await
    }
}

/// Cache lookup with the refresh-on-miss policy.
///
/// At most one extra enumeration per call, and none at all when the cache
/// was filled within the same call; misses never loop.
async fn lookup_domain_id<F, Fut>(
    cache: &mut Option<HashMap<String, u64>>,
    domain: &str,
    mut enumerate: F,
) -> Result<u64>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<HashMap<String, u64>>>,
{
    let mut just_populated = false;
    if cache.is_none() {
        *cache = Some(enumerate().await?);
        just_populated = true;
    }

    if let Some(id) = cache.as_ref().and_then(|map| map.get(domain)) {
        return Ok(*id);
    }

    if !just_populated {
        log::debug!("domain '{domain}' missing from cache, refreshing enumeration");
        *cache = Some(enumerate().await?);
        if let Some(id) = cache.as_ref().and_then(|map| map.get(domain)) {
            return Ok(*id);
        }
    }

    Err(ClientError::DomainNotFound {
        domain: domain.to_string(),
    })
}
