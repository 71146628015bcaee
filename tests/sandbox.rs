//! Sandbox integration tests.
//!
//! These exercise a live DNS Made Easy sandbox account and are ignored by
//! default. Run with:
//!
//! ```bash
//! DME_API_TOKEN=xxx DME_API_SECRET=xxx \
//!     cargo test --test sandbox -- --ignored --nocapture --test-threads=1
//! ```
//!
//! Zone provisioning in the sandbox is asynchronous, so the teardown polls
//! each zone's pending action before deleting it; a full run can take
//! several minutes.

mod common;

use common::{SandboxContext, delete_domain_when_settled, generate_test_domain_name};
use dnsmadeeasy::{Record, RecordType};

#[tokio::test]
#[ignore]
async fn sandbox_list_domains() {
    skip_if_no_credentials!("DME_API_TOKEN", "DME_API_SECRET");

    let ctx = require_some!(SandboxContext::from_env(), "failed to build sandbox context");

    let listing = require_ok!(ctx.client.list_domains(1).await, "list_domains failed");
    println!(
        "account has {} domains over {} pages",
        listing.total_records, listing.total_pages
    );
}

#[tokio::test]
#[ignore]
async fn sandbox_record_lifecycle() {
    skip_if_no_credentials!("DME_API_TOKEN", "DME_API_SECRET");

    let ctx = require_some!(SandboxContext::from_env(), "failed to build sandbox context");
    let client = &ctx.client;

    // throwaway zone for this run
    let domain_name = generate_test_domain_name();
    let domain = require_ok!(client.create_domain(&domain_name).await, "create_domain failed");
    println!("created domain {domain_name} (id {})", domain.id);

    // bulk-create 50 A records in one transactional request
    let to_create = 50;
    let records: Vec<Record> = (0..to_create)
        .map(|idx| Record::new(format!("test-{idx}"), RecordType::A, "1.1.1.1", 1800))
        .collect();
    let created = require_ok!(
        client.create_records(domain.id, &records).await,
        "create_records failed"
    );
    assert_eq!(created.len(), to_create);
    assert!(
        created.iter().all(|r| r.id.is_some()),
        "bulk-created records should carry provider-assigned IDs"
    );

    // enumeration sees all of them
    let listed = require_ok!(client.enumerate_records(domain.id).await);
    assert_eq!(listed.len(), to_create);

    // single-record CRUD against the same zone
    let single = Record::new("single", RecordType::Txt, "lifecycle-probe", 1800);
    let mut single = require_ok!(client.create_record(domain.id, &single).await);
    let single_id = require_some!(single.id, "created record should carry an ID");

    single.value = "lifecycle-probe-updated".to_string();
    require_ok!(
        client.update_record(domain.id, single_id, &single).await,
        "update_record failed"
    );
    require_ok!(client.delete_record(domain.id, single_id).await);

    // batch-delete everything, after which the listing is empty
    require_ok!(client.delete_all_records(domain.id).await);
    let listed = require_ok!(client.enumerate_records(domain.id).await);
    assert!(
        listed.is_empty(),
        "expected no records after delete_all_records, got {}",
        listed.len()
    );

    // cache: the first lookup populates it, and a zone created afterwards is
    // still found through the single refresh-on-miss fetch
    let id = require_ok!(client.id_for_domain(&domain_name).await);
    assert_eq!(id, domain.id);

    let second_name = generate_test_domain_name();
    let second = require_ok!(client.create_domain(&second_name).await);
    let second_id = require_ok!(client.id_for_domain(&second_name).await);
    assert_eq!(second_id, second.id);

    // teardown: wait out pending provisioning before deleting each zone
    for (name, id) in [(domain_name, domain.id), (second_name, second.id)] {
        println!("deleting {name}");
        require_ok!(
            delete_domain_when_settled(client, id).await,
            "failed to delete domain {name}"
        );
    }
}
