use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::common::null_as_default;

/// Custom DNS record as managed by the admin panel
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Fully qualified record name
    #[serde(rename = "qname")]
    pub name: String,

    /// Record type (A, AAAA, MX, TXT, CNAME, ...)
    #[serde(rename = "rtype")]
    pub record_type: String,

    /// Record value
    #[serde(default)]
    pub value: String,

    /// Why the record exists (only present in dumps)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Record {
    /// Create a record without explanation
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            value: value.into(),
            explanation: None,
        }
    }

    /// Create an A record
    #[must_use]
    pub fn a(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, "A", value)
    }

    /// Attach an explanation
    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Try to parse the value as an IP address
    #[must_use]
    pub fn as_ip(&self) -> Option<IpAddr> {
        self.value.parse().ok()
    }

    /// Returns true if this is an A or AAAA record
    #[must_use]
    pub fn is_address_record(&self) -> bool {
        matches!(self.record_type.as_str(), "A" | "AAAA")
    }
}

/// DNS zone with the records the box publishes for it
///
/// The dump endpoint sends each zone as a `[name, records]` pair. A zone
/// without records always carries an empty list here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ZoneRepr")]
pub struct Zone {
    /// Zone name
    pub zone: String,

    /// Records in the order the API returned them
    pub records: Vec<Record>,
}

impl Zone {
    /// Create a zone
    #[must_use]
    pub fn new(zone: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            zone: zone.into(),
            records,
        }
    }

    /// Returns true if the zone has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get all records of a specific type
    #[must_use]
    pub fn records_by_type(&self, record_type: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| r.record_type == record_type)
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ZoneRepr {
    Pair(String, #[serde(deserialize_with = "null_as_default")] Vec<Record>),
    Bare((String,)),
    Object {
        zone: String,
        #[serde(default, deserialize_with = "null_as_default")]
        records: Vec<Record>,
    },
}

impl From<ZoneRepr> for Zone {
    fn from(repr: ZoneRepr) -> Self {
        match repr {
            ZoneRepr::Pair(zone, records) | ZoneRepr::Object { zone, records } => {
                Self { zone, records }
            }
            ZoneRepr::Bare((zone,)) => Self {
                zone,
                records: Vec::new(),
            },
        }
    }
}

/// Body of `GET /admin/dns/secondary-nameserver`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecondaryNameservers {
    /// Configured secondary nameserver hostnames
    #[serde(default, deserialize_with = "null_as_default")]
    pub hostnames: Vec<String>,
}
