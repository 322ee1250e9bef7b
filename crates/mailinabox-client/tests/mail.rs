//! Mail user and alias endpoints against a mock box.

mod common;

use common::{authed, fixture, serve, setup};
use mailinabox_client::MiabError;
use mailinabox_core::{Alias, MailAliases, MailUsers, User};
use wiremock::matchers::{body_string, query_param};
use wiremock::ResponseTemplate;

#[tokio::test]
async fn users() {
    let (client, server) = setup().await;
    authed("GET", "/admin/mail/users")
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("mail/users.json")))
        .expect(1)
        .mount(&server)
        .await;

    let users = client.mail().users().await.unwrap();

    let expected = vec![MailUsers {
        domain: "example.com".into(),
        users: vec![User {
            email: "user@example.com".into(),
            privileges: vec!["admin".into()],
            status: "active".into(),
            mailbox: "/home/user-data/mail/mailboxes/example.com/user".into(),
        }],
    }];
    assert_eq!(users, expected);
}

#[tokio::test]
async fn add_user() {
    let (client, server) = setup().await;
    authed("POST", "/admin/mail/users/add")
        .and(body_string(
            "email=user%40example.com&password=secret&privileges=admin",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("mail/add_user.html")))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .mail()
        .add_user("user@example.com", "secret", "admin")
        .await
        .unwrap();
    assert_eq!(resp, "mail user added\nupdated DNS: OpenDKIM configuration");
}

#[tokio::test]
async fn add_user_rejected() {
    let (client, server) = setup().await;
    authed("POST", "/admin/mail/users/add")
        .respond_with(ResponseTemplate::new(400).set_body_string("Invalid email address."))
        .mount(&server)
        .await;

    match client.mail().add_user("nope", "secret", "").await.unwrap_err() {
        MiabError::Http { code, body } => {
            assert_eq!(code, 400);
            assert_eq!(body, "Invalid email address.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn remove_user() {
    let (client, server) = setup().await;
    authed("POST", "/admin/mail/users/remove")
        .and(body_string("email=user%40example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("mail/remove_user.html")))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.mail().remove_user("user@example.com").await.unwrap(), "OK");
}

#[tokio::test]
async fn add_user_privilege() {
    let (client, server) = setup().await;
    authed("POST", "/admin/mail/users/privileges/add")
        .and(body_string("email=user%40example.com&privilege=admin"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("mail/add_privilege.html")))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .mail()
        .add_user_privilege("user@example.com", "admin")
        .await
        .unwrap();
    assert_eq!(resp, "OK");
}

#[tokio::test]
async fn remove_user_privilege() {
    let (client, server) = setup().await;
    serve(&server, "POST", "/admin/mail/users/privileges/remove", "mail/remove_privilege.html").await;

    let resp = client
        .mail()
        .remove_user_privilege("user@example.com", "admin")
        .await
        .unwrap();
    assert_eq!(resp, "OK");
}

#[tokio::test]
async fn set_user_password() {
    let (client, server) = setup().await;
    authed("POST", "/admin/mail/users/password")
        .and(body_string("email=user%40example.com&password=secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("mail/set_password.html")))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .mail()
        .set_user_password("user@example.com", "secret")
        .await
        .unwrap();
    assert_eq!(resp, "OK");
}

#[tokio::test]
async fn user_privileges_stay_one_string() {
    let (client, server) = setup().await;
    authed("GET", "/admin/mail/users/privileges")
        .and(query_param("email", "user@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("mail/privileges.txt")))
        .expect(1)
        .mount(&server)
        .await;

    let privileges = client.mail().user_privileges("user@example.com").await.unwrap();
    assert_eq!(privileges, "admin");
}

#[tokio::test]
async fn domains() {
    let (client, server) = setup().await;
    serve(&server, "GET", "/admin/mail/domains", "mail/domains.txt").await;

    let domains = client.mail().domains().await.unwrap();
    assert_eq!(domains, vec!["example1.com", "example2.com"]);
}

#[tokio::test]
async fn aliases() {
    let (client, server) = setup().await;
    authed("GET", "/admin/mail/aliases")
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("mail/aliases.json")))
        .expect(1)
        .mount(&server)
        .await;

    let aliases = client.mail().aliases().await.unwrap();

    let expected = vec![MailAliases {
        domain: "example.com".into(),
        aliases: vec![Alias {
            address: "user@example.com".into(),
            address_display: "user@example.com".into(),
            forwards_to: vec!["user@example.com".into()],
            permitted_senders: vec!["user@example.com".into()],
            required: true,
        }],
    }];
    assert_eq!(aliases, expected);
}

#[tokio::test]
async fn upsert_alias() {
    let (client, server) = setup().await;
    authed("POST", "/admin/mail/aliases/add")
        .and(body_string(
            "update_if_exists=1&address=user%40example.com&forwards_to=user%40example.com&permitted_senders=user%40example.com",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("mail/upsert_alias.html")))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .mail()
        .upsert_alias(true, "user@example.com", ["user@example.com"], ["user@example.com"])
        .await
        .unwrap();
    assert_eq!(resp, "alias updated");
}

#[tokio::test]
async fn remove_alias() {
    let (client, server) = setup().await;
    authed("POST", "/admin/mail/aliases/remove")
        .and(body_string("address=user%40example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("mail/remove_alias.html")))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.mail().remove_alias("user@example.com").await.unwrap();
    assert_eq!(resp, "alias updated");
}

#[tokio::test]
async fn remove_required_alias_surfaces_remote_refusal() {
    let (client, server) = setup().await;
    authed("POST", "/admin/mail/aliases/remove")
        .respond_with(
            ResponseTemplate::new(400).set_body_string(fixture("mail/remove_required_alias.html")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client
        .mail()
        .remove_alias("postmaster@example.com")
        .await
        .unwrap_err();
    match err {
        MiabError::Http { code, body } => {
            assert_eq!(code, 400);
            assert!(body.contains("is required and cannot be removed"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
