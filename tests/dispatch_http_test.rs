//! Integration tests for delivery with the real HTTP providers
//!
//! Mock provider endpoints stand in for the email service and SMS gateway;
//! the disk saver writes into a temp directory. The point under test is the
//! contract: the save decides the result, the legs never do.

use chat_report::config::{EmailConfig, SmsConfig};
use chat_report::deliver::{DiskSaver, Dispatcher};
use chat_report::notify::{HttpEmailProvider, HttpSmsGateway};
use mockito::Server;
use serial_test::serial;
use std::sync::Arc;

fn sms_config(base_url: &str) -> SmsConfig {
    SmsConfig {
        api_base_url: base_url.to_string(),
        api_key: "test-key".to_string(),
        device_id: "device-1".to_string(),
        destination: "+15550001111".to_string(),
        ..SmsConfig::default()
    }
}

#[tokio::test]
#[serial]
async fn test_deliver_ok_with_both_providers_failing() {
    let mut server = Server::new_async().await;
    let email_mock = server
        .mock("POST", "/email/send")
        .with_status(500)
        .with_body("provider exploded")
        .create_async()
        .await;
    let sms_mock = server
        .mock("POST", "/gateway/devices/device-1/send-sms")
        .with_status(503)
        .with_body("gateway offline")
        .create_async()
        .await;

    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let client = reqwest::Client::new();
    let dispatcher = Dispatcher::new(
        Arc::new(DiskSaver::new(temp_dir.path())),
        Arc::new(HttpEmailProvider::new(
            client.clone(),
            EmailConfig {
                api_url: format!("{}/email/send", server.url()),
                api_key: "test-key".to_string(),
            },
        )),
        Arc::new(HttpSmsGateway::new(client, sms_config(&server.url()))),
        "+15550001111",
    );

    let delivery = dispatcher
        .deliver("<html>report</html>", "report.html", Some("ada@example.com"))
        .await
        .expect("deliver must succeed when only the legs fail");

    // The durable side effect happened before any notification attempt.
    let contents = std::fs::read_to_string(&delivery.path).expect("saved file should exist");
    assert_eq!(contents, "<html>report</html>");

    let outcome = delivery
        .notifications
        .await
        .expect("notification task should finish");
    assert_eq!(outcome.email, Some(false));
    assert!(!outcome.sms);

    email_mock.assert_async().await;
    sms_mock.assert_async().await;
}

#[tokio::test]
#[serial]
async fn test_deliver_ok_with_providers_succeeding() {
    let mut server = Server::new_async().await;
    let email_mock = server
        .mock("POST", "/email/send")
        .with_status(200)
        .with_body(r#"{"status": "queued"}"#)
        .create_async()
        .await;
    let sms_mock = server
        .mock("POST", "/gateway/devices/device-1/send-sms")
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;

    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let client = reqwest::Client::new();
    let dispatcher = Dispatcher::new(
        Arc::new(DiskSaver::new(temp_dir.path())),
        Arc::new(HttpEmailProvider::new(
            client.clone(),
            EmailConfig {
                api_url: format!("{}/email/send", server.url()),
                api_key: "test-key".to_string(),
            },
        )),
        Arc::new(HttpSmsGateway::new(client, sms_config(&server.url()))),
        "+15550001111",
    );

    let delivery = dispatcher
        .deliver("<html>report</html>", "report.html", Some("ada@example.com"))
        .await
        .expect("deliver should succeed");

    let outcome = delivery
        .notifications
        .await
        .expect("notification task should finish");
    assert_eq!(outcome.email, Some(true));
    assert!(outcome.sms);

    email_mock.assert_async().await;
    sms_mock.assert_async().await;
}

#[tokio::test]
async fn test_deliver_bad_filename_fails_before_any_leg() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let client = reqwest::Client::new();
    // Providers point nowhere; they must never be contacted.
    let dispatcher = Dispatcher::new(
        Arc::new(DiskSaver::new(temp_dir.path())),
        Arc::new(HttpEmailProvider::new(
            client.clone(),
            EmailConfig {
                api_url: "http://localhost:9/email/send".to_string(),
                api_key: "test-key".to_string(),
            },
        )),
        Arc::new(HttpSmsGateway::new(client, sms_config("http://localhost:9"))),
        "+15550001111",
    );

    let result = dispatcher
        .deliver("<html></html>", "../escape.html", Some("ada@example.com"))
        .await;
    assert!(result.is_err());
}
