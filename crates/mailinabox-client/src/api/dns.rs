//! DNS API endpoints.

use crate::transport::{path_segment, ApiRequest};
use crate::MiabClient;
use mailinabox_core::{Record, Result, SecondaryNameservers, Zone};

const SECONDARY_NAMESERVER: &str = "/admin/dns/secondary-nameserver";
const ZONES: &str = "/admin/dns/zones";
const ZONEFILE: &str = "/admin/dns/zonefile";
const CUSTOM: &str = "/admin/dns/custom";
const DUMP: &str = "/admin/dns/dump";
const UPDATE: &str = "/admin/dns/update";

/// DNS API endpoints
///
/// Mutating calls return the box's acknowledgement text verbatim, e.g.
/// `updated DNS: example.com`.
pub struct DnsApi<'a> {
    client: &'a MiabClient,
}

impl<'a> DnsApi<'a> {
    pub(crate) const fn new(client: &'a MiabClient) -> Self {
        Self { client }
    }

    /// Get the configured secondary nameservers
    pub async fn secondary_nameservers(&self) -> Result<Vec<String>> {
        let ns: SecondaryNameservers = self
            .client
            .json(ApiRequest::get(SECONDARY_NAMESERVER))
            .await?;
        Ok(ns.hostnames)
    }

    /// Replace the secondary nameservers
    ///
    /// An empty list clears them.
    pub async fn set_secondary_nameservers<I, S>(&self, hostnames: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = hostnames
            .into_iter()
            .map(|h| h.as_ref().trim().to_string())
            .collect::<Vec<_>>()
            .join(",");

        self.client
            .status_line(ApiRequest::post(SECONDARY_NAMESERVER).form("hostnames", joined))
            .await
    }

    /// List the zones the box is authoritative for
    pub async fn zones(&self) -> Result<Vec<String>> {
        self.client.json(ApiRequest::get(ZONES)).await
    }

    /// Get the zone file text of a zone
    pub async fn zone_file(&self, zone: &str) -> Result<String> {
        self.client
            .text(ApiRequest::get(format!("{ZONEFILE}/{}", path_segment(zone)?)))
            .await
    }

    /// List all custom records
    pub async fn all_records(&self) -> Result<Vec<Record>> {
        self.client.json(ApiRequest::get(CUSTOM)).await
    }

    /// List custom records of one name and type
    pub async fn records(&self, name: &str, record_type: &str) -> Result<Vec<Record>> {
        self.client
            .json(ApiRequest::get(custom_path(name, Some(record_type))?))
            .await
    }

    /// Add a custom record
    pub async fn add_record(&self, record: &Record) -> Result<String> {
        self.client
            .status_line(
                ApiRequest::post(record_path(record)?).form("value", record.value.as_str()),
            )
            .await
    }

    /// Replace the value of all records with the record's name and type
    pub async fn update_record(&self, record: &Record, new_value: &str) -> Result<String> {
        self.client
            .status_line(ApiRequest::put(record_path(record)?).form("value", new_value))
            .await
    }

    /// Remove the record matching name, type and value exactly
    pub async fn remove_record(&self, record: &Record) -> Result<String> {
        self.client
            .status_line(
                ApiRequest::delete(record_path(record)?).form("value", record.value.as_str()),
            )
            .await
    }

    /// List the A records of a name
    pub async fn a_records(&self, name: &str) -> Result<Vec<Record>> {
        self.client.json(ApiRequest::get(custom_path(name, None)?)).await
    }

    /// Add an A record
    pub async fn add_a_record(&self, name: &str, value: &str) -> Result<String> {
        self.client
            .status_line(ApiRequest::post(custom_path(name, None)?).form("value", value))
            .await
    }

    /// Replace the A records of a name
    pub async fn update_a_record(&self, name: &str, value: &str) -> Result<String> {
        self.client
            .status_line(ApiRequest::put(custom_path(name, None)?).form("value", value))
            .await
    }

    /// Remove an A record
    pub async fn remove_a_record(&self, name: &str, value: &str) -> Result<String> {
        self.client
            .status_line(ApiRequest::delete(custom_path(name, None)?).form("value", value))
            .await
    }

    /// Dump every zone with the records the box publishes for it
    pub async fn dump(&self) -> Result<Vec<Zone>> {
        self.client.json(ApiRequest::get(DUMP)).await
    }

    /// Regenerate the zone files, optionally even if nothing changed
    pub async fn update_dns(&self, force: bool) -> Result<String> {
        let mut request = ApiRequest::post(UPDATE);
        if force {
            request = request.form("force", "1");
        }
        self.client.status_line(request).await
    }
}

/// `/admin/dns/custom/{name}[/{type}]`; without a type the box assumes A
fn custom_path(name: &str, record_type: Option<&str>) -> Result<String> {
    let name = path_segment(name)?;
    Ok(match record_type {
        Some(rtype) => format!("{CUSTOM}/{name}/{}", path_segment(rtype)?),
        None => format!("{CUSTOM}/{name}"),
    })
}

fn record_path(record: &Record) -> Result<String> {
    custom_path(&record.name, Some(&record.record_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_path() {
        assert_eq!(
            custom_path("example.com", None).unwrap(),
            "/admin/dns/custom/example.com"
        );
        assert_eq!(
            record_path(&Record::new("example.com", "MX", "10 example.com.")).unwrap(),
            "/admin/dns/custom/example.com/MX"
        );
    }

    #[test]
    fn test_custom_path_escapes_name_and_type() {
        assert_eq!(
            record_path(&Record::new("www.example.com#x", "TXT", "v")).unwrap(),
            "/admin/dns/custom/www.example.com%23x/TXT"
        );
        assert_eq!(
            custom_path("example.com", Some("MX/../A")).unwrap(),
            "/admin/dns/custom/example.com/MX%2F..%2FA"
        );
        assert!(custom_path("..", Some("MX")).is_err());
    }
}
