// SPDX-License-Identifier: MPL-2.0
use portfolio_core::config::{self, Preferences};
use portfolio_core::contact::{ContactForm, ContactSender, Status, SubmitTracker, BANNER_INTERVAL};
use portfolio_core::i18n::{Catalog, Lang, LanguageProvider};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn valid_form() -> ContactForm {
    ContactForm::new("Ana Pérez", "ana@example.com", "I would like a quote.")
}

#[test]
fn language_survives_simulated_restart() {
    let dir = tempdir().expect("failed to create temporary directory");
    let store = dir.path().join("settings.toml");

    // Seed the store so the first session has a known starting language.
    config::save_to_path(
        &Preferences {
            language: Some("es".to_string()),
        },
        &store,
    )
    .expect("failed to seed preference store");

    let mut session = LanguageProvider::with_config_path(&store);
    assert_eq!(session.language(), Lang::Es);
    session.set_language(Lang::Pt);

    // A fresh provider over the same store plays the role of a restart.
    let restarted = LanguageProvider::with_config_path(&store);
    assert_eq!(restarted.language(), Lang::Pt);
}

#[test]
fn cycle_persists_each_step() {
    let dir = tempdir().expect("failed to create temporary directory");
    let store = dir.path().join("settings.toml");
    config::save_to_path(
        &Preferences {
            language: Some("en".to_string()),
        },
        &store,
    )
    .expect("failed to seed preference store");

    let mut session = LanguageProvider::with_config_path(&store);
    assert_eq!(session.cycle(), Lang::Pt);

    let saved = config::load_from_path(&store).expect("failed to read store");
    assert_eq!(saved.language.as_deref(), Some("pt"));
}

#[test]
fn embedded_catalog_resolves_in_every_language() {
    let catalog = Catalog::new();
    assert_eq!(catalog.resolve(Lang::Es, "title", Some("home")), "Hola, soy Juan Pablo");
    assert_eq!(catalog.resolve(Lang::En, "home.title", None), "Hi, I'm Juan Pablo");
    assert_eq!(catalog.resolve(Lang::Pt, "home.title", None), "Olá, eu sou Juan Pablo");

    // Bare keys read the common namespace.
    assert_eq!(catalog.resolve(Lang::En, "language", None), "Language");
}

#[tokio::test]
async fn successful_submission_reaches_the_relay() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/f/test")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let sender =
        ContactSender::with_endpoint(format!("{}/f/test", server.url())).expect("build sender");
    let mut tracker = SubmitTracker::new();

    let status = sender.deliver(&mut tracker, &valid_form(), Lang::En).await;
    assert_eq!(status, Status::Success);
    mock.assert_async().await;
}

#[tokio::test]
async fn relay_failure_surfaces_as_error_state() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/f/test")
        .with_status(500)
        .create_async()
        .await;

    let sender =
        ContactSender::with_endpoint(format!("{}/f/test", server.url())).expect("build sender");
    let mut tracker = SubmitTracker::new();

    let status = sender.deliver(&mut tracker, &valid_form(), Lang::Es).await;
    assert_eq!(status, Status::Error);
    mock.assert_async().await;
}

#[tokio::test]
async fn honeypot_succeeds_with_zero_network_calls() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/f/test")
        .with_status(200)
        .expect(0)
        .create_async()
        .await;

    let sender =
        ContactSender::with_endpoint(format!("{}/f/test", server.url())).expect("build sender");
    let mut tracker = SubmitTracker::new();

    let mut form = valid_form();
    form.company = "spambot".to_string();

    let status = sender.deliver(&mut tracker, &form, Lang::En).await;
    assert_eq!(status, Status::Success);
    mock.assert_async().await;
}

#[tokio::test]
async fn stalled_relay_times_out_and_banner_clears() {
    // A listener that accepts the connection and never answers.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    let handle = std::thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            std::thread::sleep(Duration::from_secs(2));
            drop(stream);
        }
    });

    let sender = ContactSender::with_timeout(
        format!("http://{}/f/test", addr),
        Duration::from_millis(200),
    )
    .expect("build sender");
    let mut tracker = SubmitTracker::new();

    let finished_at = Instant::now();
    let status = sender.deliver(&mut tracker, &valid_form(), Lang::En).await;
    assert_eq!(status, Status::Error);

    // The error banner holds for the display interval, then auto-clears.
    tracker.tick_at(finished_at + BANNER_INTERVAL - Duration::from_millis(50));
    assert_eq!(tracker.status(), Status::Error);
    tracker.tick_at(finished_at + BANNER_INTERVAL + Duration::from_secs(1));
    assert_eq!(tracker.status(), Status::Idle);

    handle.join().expect("listener thread");
}
