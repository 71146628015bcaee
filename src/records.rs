//! Record operations.

use crate::client::{Client, DNS_MANAGED_PATH};
use crate::error::Result;
use crate::types::{Page, Record};

impl Client {
    /// Fetch one page of a zone's records.
    ///
    /// Pages are 1-indexed. The envelope carries `total_pages` for callers
    /// paging manually; [`enumerate_records`](Client::enumerate_records)
    /// follows the pagination itself.
    pub async fn list_records(&self, domain_id: u64, page: u32) -> Result<Page<Record>> {
        self.get(&format!("{DNS_MANAGED_PATH}{domain_id}/records?page={page}"))
            .await
    }

    /// Every record in the zone, following the listing pagination.
    pub async fn enumerate_records(&self, domain_id: u64) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut page = 1;
        loop {
            let listing = self.list_records(domain_id, page).await?;
            let last_page = listing.total_pages;
            records.extend(listing.items);
            if page >= last_page {
                break;
            }
            page += 1;
        }
        Ok(records)
    }

    /// Create a single record in the zone.
    ///
    /// The returned copy carries the provider-assigned ID, which addresses
    /// the record in later update and delete calls.
    pub async fn create_record(&self, domain_id: u64, record: &Record) -> Result<Record> {
        self.post(&format!("{DNS_MANAGED_PATH}{domain_id}/records"), record)
            .await
    }

    /// Create a batch of records in one transactional request.
    ///
    /// If the provider rejects any record in the batch, none are created and
    /// the whole call fails with a single classified error; on success every
    /// returned record carries its assigned ID. There is no partial-success
    /// outcome.
    pub async fn create_records(
        &self,
        domain_id: u64,
        records: &[Record],
    ) -> Result<Vec<Record>> {
        self.post(
            &format!("{DNS_MANAGED_PATH}{domain_id}/records/createMulti"),
            records,
        )
        .await
    }

    /// Replace an existing record in place, addressed by its numeric ID.
    ///
    /// The body sent to the API is `record` with its ID forced to
    /// `record_id`; the provider responds with an empty body.
    pub async fn update_record(
        &self,
        domain_id: u64,
        record_id: u64,
        record: &Record,
    ) -> Result<()> {
        let mut body = record.clone();
        body.id = Some(record_id);
        self.put(
            &format!("{DNS_MANAGED_PATH}{domain_id}/records/{record_id}"),
            &body,
        )
        .await
    }

    /// Delete a single record by its numeric ID.
    pub async fn delete_record(&self, domain_id: u64, record_id: u64) -> Result<()> {
        self.delete(&format!("{DNS_MANAGED_PATH}{domain_id}/records/{record_id}"))
            .await
    }

    /// Delete a set of records in one batch request.
    ///
    /// The IDs travel as repeated `ids` query parameters and the batch is
    /// atomic: either every listed record is deleted or the call fails as a
    /// whole with a single classified error. There is no per-ID best-effort
    /// fallback. An ID that does not belong to the zone is ignored by the
    /// provider rather than rejected.
    pub async fn delete_records(&self, domain_id: u64, record_ids: &[u64]) -> Result<()> {
        if record_ids.is_empty() {
            return Ok(());
        }
        self.delete(&format!(
            "{DNS_MANAGED_PATH}{domain_id}/records?{}",
            ids_query(record_ids)
        ))
        .await
    }

    /// Delete every record in the zone: one full enumeration followed by one
    /// atomic batch delete.
    pub async fn delete_all_records(&self, domain_id: u64) -> Result<()> {
        let records = self.enumerate_records(domain_id).await?;
        let ids: Vec<u64> = records.iter().filter_map(|r| r.id).collect();
        self.delete_records(domain_id, &ids).await
    }
}

/// Build the repeated-parameter query string `ids=X&ids=Y&ids=Z`.
///
/// A keyed map can't express repeated parameters, so the string is assembled
/// directly.
fn ids_query(record_ids: &[u64]) -> String {
    record_ids
        .iter()
        .map(|id| format!("ids={id}"))
        .collect::<Vec<_>>()
        .join("&")
}
