//! Wire types for the managed-DNS endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ Listing envelope ============

/// Paginated listing envelope shared by the domain and record endpoints.
///
/// The API wraps every listing in `totalRecords`/`totalPages`/`data`/`page`;
/// `items` maps the `data` member.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Total items across all pages.
    #[serde(default)]
    pub total_records: u32,
    /// Total number of pages at the server's page size.
    #[serde(default)]
    pub total_pages: u32,
    /// Items in this page.
    #[serde(rename = "data", default = "Vec::new")]
    pub items: Vec<T>,
    /// The page this envelope covers.
    #[serde(default)]
    pub page: u32,
}

impl<T> Page<T> {
    /// Whether more pages follow this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

// ============ Domains ============

/// A DNS zone managed by the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// Provider-assigned numeric identifier.
    pub id: u64,
    /// Zone name, e.g. `example.com`.
    pub name: String,

    /// When the zone was created, if reported.
    #[serde(
        rename = "created",
        with = "crate::utils::datetime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    /// When the zone was last updated, if reported.
    #[serde(
        rename = "updated",
        with = "crate::utils::datetime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,

    /// Folder the zone is filed under.
    #[serde(default)]
    pub folder_id: u64,

    /// Whether updates to the zone are applied across multiple name-server
    /// configurations.
    #[serde(default)]
    pub process_multi: bool,

    /// Third-party services enabled for this zone.
    #[serde(default)]
    pub active_third_parties: Vec<String>,

    /// Whether Global Traffic Director is enabled.
    #[serde(default)]
    pub gtd_enabled: bool,

    /// Identifier of an asynchronous provider-side change still being
    /// applied; `0` once the zone is settled.
    #[serde(default)]
    pub pending_action_id: u64,
}

impl Domain {
    /// True while the provider is still applying an asynchronous change
    /// (e.g. initial provisioning). Callers must wait for this to clear
    /// before issuing dependent mutations such as deleting the zone.
    #[must_use]
    pub fn has_pending_action(&self) -> bool {
        self.pending_action_id != 0
    }
}

// ============ Records ============

/// DNS record types supported by the API.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"HTTPRED"`, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Provider-level apex alias record.
    Aname,
    /// Canonical name (alias) record.
    Cname,
    /// HTTP redirection record.
    Httpred,
    /// Mail exchange record.
    Mx,
    /// Name server record.
    Ns,
    /// Reverse-lookup pointer record.
    Ptr,
    /// Service locator record.
    Srv,
    /// Text record.
    Txt,
    /// Sender policy framework record.
    Spf,
    /// Start of authority record.
    Soa,
}

impl RecordType {
    /// The uppercase wire name of this type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Aname => "ANAME",
            Self::Cname => "CNAME",
            Self::Httpred => "HTTPRED",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Ptr => "PTR",
            Self::Srv => "SRV",
            Self::Txt => "TXT",
            Self::Spf => "SPF",
            Self::Soa => "SOA",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Global Traffic Director region tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GtdLocation {
    /// Serve the record from every region.
    #[default]
    Default,
    /// US East region.
    UsEast,
    /// US West region.
    UsWest,
    /// Europe region.
    Europe,
    /// Asia-Pacific region.
    AsiaPac,
    /// Oceania region.
    Oceania,
    /// South America region.
    SouthAmerica,
}

/// A single DNS resource record.
///
/// `name` is unique per record type within a zone. Fields the provider only
/// reports for certain types (failover and monitoring for A records, the MX
/// level, the SRV triple, …) are optional and omitted from request bodies
/// when unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Record name, relative to the zone.
    pub name: String,

    /// Provider-assigned identifier. Stable once set; addresses the record
    /// in update and delete calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Record type.
    #[serde(rename = "type")]
    pub record_type: RecordType,

    /// Record value; its interpretation differs per type.
    pub value: String,

    /// `1` when the record is defined on the zone itself, `0` when it is
    /// inherited from a template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<u8>,

    /// Time to live in seconds.
    pub ttl: u32,

    /// Global Traffic Director region the record serves.
    #[serde(default)]
    pub gtd_location: GtdLocation,

    /// Identifier of the zone the record belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<u64>,

    /// Whether DNS failover is enabled (A records).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failover: Option<bool>,

    /// Whether system monitoring is enabled (A records).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor: Option<bool>,

    /// Hard-link flag (HTTPRED records).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hard_link: Option<bool>,

    /// Whether dynamic DNS is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_dns: Option<bool>,

    /// Whether an A record with failover is currently in failed status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed: Option<bool>,

    /// Priority (MX records; lower is preferred).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mx_level: Option<u16>,

    /// Priority (SRV records).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,

    /// Weight among same-priority targets (SRV records).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,

    /// Port the service listens on (SRV records).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl Record {
    /// A minimal record of the given type, served from the
    /// [`Default`](GtdLocation::Default) GTD region, with every
    /// provider-managed and type-specific optional field unset.
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        value: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            name: name.into(),
            id: None,
            record_type,
            value: value.into(),
            source: None,
            ttl,
            gtd_location: GtdLocation::Default,
            source_id: None,
            failover: None,
            monitor: None,
            hard_link: None,
            dynamic_dns: None,
            failed: None,
            mx_level: None,
            priority: None,
            weight: None,
            port: None,
        }
    }
}
