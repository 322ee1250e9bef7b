//! DNS endpoints against a mock box.

mod common;

use common::{authed, fixture, serve, setup};
use mailinabox_client::MiabError;
use mailinabox_core::{Record, Zone};
use wiremock::matchers::body_string;
use wiremock::ResponseTemplate;

const UPDATED: &str = "updated DNS: example.com";

fn mx_record() -> Record {
    Record::new("example.com", "MX", "10 example.com.")
}

#[tokio::test]
async fn secondary_nameservers() {
    let (client, server) = setup().await;
    serve(&server, "GET", "/admin/dns/secondary-nameserver", "dns/nameservers.json").await;

    let names = client.dns().secondary_nameservers().await.unwrap();
    assert_eq!(names, vec!["ns1.example.com"]);
}

#[tokio::test]
async fn set_secondary_nameservers_sends_comma_joined_list() {
    let (client, server) = setup().await;
    authed("POST", "/admin/dns/secondary-nameserver")
        .and(body_string(
            "hostnames=ns2.hostingcompany.com%2Cns3.hostingcompany.com",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("dns/set_nameservers.html")))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .dns()
        .set_secondary_nameservers(["ns2.hostingcompany.com", "ns3.hostingcompany.com"])
        .await
        .unwrap();
    assert_eq!(resp, UPDATED);
}

#[tokio::test]
async fn zones() {
    let (client, server) = setup().await;
    serve(&server, "GET", "/admin/dns/zones", "dns/zones.json").await;

    assert_eq!(client.dns().zones().await.unwrap(), vec!["example.com"]);
}

#[tokio::test]
async fn zone_file() {
    let (client, server) = setup().await;
    serve(&server, "GET", "/admin/dns/zonefile/example.com", "dns/zone_file.txt").await;

    assert_eq!(client.dns().zone_file("example.com").await.unwrap(), "string");
}

#[tokio::test]
async fn all_records() {
    let (client, server) = setup().await;
    serve(&server, "GET", "/admin/dns/custom", "dns/records.json").await;

    assert_eq!(client.dns().all_records().await.unwrap(), vec![mx_record()]);
}

#[tokio::test]
async fn records_by_name_and_type() {
    let (client, server) = setup().await;
    serve(&server, "GET", "/admin/dns/custom/example.com/MX", "dns/records.json").await;

    let records = client.dns().records("example.com", "MX").await.unwrap();
    assert_eq!(records, vec![mx_record()]);
}

#[tokio::test]
async fn add_record() {
    let (client, server) = setup().await;
    authed("POST", "/admin/dns/custom/example.com/MX")
        .and(body_string("value=10+example.com."))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("dns/add_record.html")))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.dns().add_record(&mx_record()).await.unwrap(), UPDATED);
}

#[tokio::test]
async fn update_record() {
    let (client, server) = setup().await;
    authed("PUT", "/admin/dns/custom/example.com/MX")
        .and(body_string("value=1.2.3.4"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("dns/update_record.html")))
        .expect(1)
        .mount(&server)
        .await;

    let record = Record::new("example.com", "MX", "");
    let resp = client.dns().update_record(&record, "1.2.3.4").await.unwrap();
    assert_eq!(resp, UPDATED);
}

#[tokio::test]
async fn remove_record() {
    let (client, server) = setup().await;
    authed("DELETE", "/admin/dns/custom/example.com/MX")
        .and(body_string("value=1.2.3.4"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("dns/remove_record.html")))
        .expect(1)
        .mount(&server)
        .await;

    let record = Record::new("example.com", "MX", "1.2.3.4");
    assert_eq!(client.dns().remove_record(&record).await.unwrap(), UPDATED);
}

#[tokio::test]
async fn remove_record_with_other_value_does_not_match() {
    let (client, server) = setup().await;
    authed("DELETE", "/admin/dns/custom/example.com/MX")
        .and(body_string("value=1.2.3.4"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("dns/remove_record.html")))
        .expect(0)
        .mount(&server)
        .await;

    let record = Record::new("example.com", "MX", "5.6.7.8");
    let err = client.dns().remove_record(&record).await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn add_record_with_hash_in_name_keeps_its_type() {
    let (client, server) = setup().await;
    authed("POST", "/admin/dns/custom/www.example.com%23x/TXT")
        .and(body_string("value=hello"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("dns/add_record.html")))
        .expect(1)
        .mount(&server)
        .await;
    authed("POST", "/admin/dns/custom/www.example.com")
        .respond_with(ResponseTemplate::new(200).set_body_string(UPDATED))
        .expect(0)
        .mount(&server)
        .await;

    let record = Record::new("www.example.com#x", "TXT", "hello");
    assert_eq!(client.dns().add_record(&record).await.unwrap(), UPDATED);
}

#[tokio::test]
async fn remove_record_name_cannot_climb_out_of_custom() {
    let (client, server) = setup().await;
    authed("DELETE", "/admin/dns/custom/..%2F..%2Fsystem/reboot")
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .expect(1)
        .mount(&server)
        .await;
    authed("DELETE", "/admin/system/reboot")
        .respond_with(ResponseTemplate::new(200).set_body_string("rebooting"))
        .expect(0)
        .mount(&server)
        .await;

    let record = Record::new("../../system", "reboot", "x");
    let err = client.dns().remove_record(&record).await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn dot_segment_name_is_refused_before_sending() {
    let (client, server) = setup().await;

    let err = client
        .dns()
        .remove_record(&Record::new("..", "MX", "x"))
        .await
        .unwrap_err();
    assert!(err.is_transport_error(), "{err:?}");

    let err = client.dns().zone_file("").await.unwrap_err();
    assert!(err.is_transport_error(), "{err:?}");

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

#[tokio::test]
async fn zone_file_name_is_one_segment() {
    let (client, server) = setup().await;
    serve(&server, "GET", "/admin/dns/zonefile/example.com%3Fx%3D1", "dns/zone_file.txt").await;

    assert_eq!(client.dns().zone_file("example.com?x=1").await.unwrap(), "string");
}

#[tokio::test]
async fn a_records() {
    let (client, server) = setup().await;
    serve(&server, "GET", "/admin/dns/custom/example.com", "dns/records.json").await;

    let records = client.dns().a_records("example.com").await.unwrap();
    assert_eq!(records, vec![mx_record()]);
}

#[tokio::test]
async fn add_a_record() {
    let (client, server) = setup().await;
    authed("POST", "/admin/dns/custom/example.com")
        .and(body_string("value=1.2.3.4"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("dns/add_record.html")))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.dns().add_a_record("example.com", "1.2.3.4").await.unwrap();
    assert_eq!(resp, UPDATED);
}

#[tokio::test]
async fn update_a_record() {
    let (client, server) = setup().await;
    authed("PUT", "/admin/dns/custom/example.com")
        .and(body_string("value=1.2.3.4"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("dns/update_record.html")))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.dns().update_a_record("example.com", "1.2.3.4").await.unwrap();
    assert_eq!(resp, UPDATED);
}

#[tokio::test]
async fn remove_a_record() {
    let (client, server) = setup().await;
    authed("DELETE", "/admin/dns/custom/example.com")
        .and(body_string("value=1.2.3.4"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("dns/remove_record.html")))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.dns().remove_a_record("example.com", "1.2.3.4").await.unwrap();
    assert_eq!(resp, UPDATED);
}

#[tokio::test]
async fn dump_keeps_empty_zones() {
    let (client, server) = setup().await;
    serve(&server, "GET", "/admin/dns/dump", "dns/dump.json").await;

    let zones = client.dns().dump().await.unwrap();

    let explanation = "Required. Specifies the hostname (and priority) of the machine that handles @example.com mail.";
    let expected = vec![
        Zone::new(
            "example1.com",
            vec![Record::new("example1.com", "MX", "10 box.example1.com.").with_explanation(explanation)],
        ),
        Zone::new(
            "example2.com",
            vec![Record::new("example2.com", "MX", "10 box.example2.com.").with_explanation(explanation)],
        ),
        Zone::new("example3.com", Vec::new()),
        Zone::new(
            "example4.com",
            vec![
                Record::new("example4.com", "MX", "10 box.example4.com.").with_explanation(explanation),
                Record::a("example4.com", "10.0.0.1"),
                Record::new("example4.com", "TXT", "data"),
            ],
        ),
    ];

    assert_eq!(zones, expected);
    assert!(zones[2].records.is_empty());
}

#[tokio::test]
async fn update_dns_forced() {
    let (client, server) = setup().await;
    authed("POST", "/admin/dns/update")
        .and(body_string("force=1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(UPDATED))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.dns().update_dns(true).await.unwrap(), UPDATED);
}

#[tokio::test]
async fn server_error_is_http_error() {
    let (client, server) = setup().await;
    authed("GET", "/admin/dns/zones")
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    match client.dns().zones().await.unwrap_err() {
        MiabError::Http { code, body } => {
            assert_eq!(code, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn wrong_credentials_are_rejected() {
    let server = wiremock::MockServer::start().await;
    serve(&server, "GET", "/admin/dns/zones", "dns/zones.json").await;

    let client = mailinabox_client::MiabClient::new(server.uri(), common::EMAIL, "wrong").unwrap();
    let err = client.dns().zones().await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));

    // The mounted mock expects one authenticated call.
    let authed_client =
        mailinabox_client::MiabClient::new(server.uri(), common::EMAIL, common::PASSWORD).unwrap();
    authed_client.dns().zones().await.unwrap();
}

#[tokio::test]
async fn html_error_page_is_decode_error() {
    let (client, server) = setup().await;
    authed("GET", "/admin/dns/custom")
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login required</html>"))
        .mount(&server)
        .await;

    let err = client.dns().all_records().await.unwrap_err();
    assert!(matches!(err, MiabError::Decode { .. }), "{err:?}");
}
