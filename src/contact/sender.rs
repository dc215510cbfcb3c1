// SPDX-License-Identifier: MPL-2.0
//! Delivery of a contact submission to the external form relay.

use crate::contact::form::ContactForm;
use crate::contact::status::{Status, SubmitTracker};
use crate::error::{Error, Result};
use crate::i18n::lang::Lang;
use reqwest::header::ACCEPT;
use reqwest::multipart;
use std::time::Duration;

/// The form-relay endpoint the site posts to.
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/mblpnbqw";

/// Time budget for one submission. If no response arrives within it the
/// in-flight request is cancelled and the submission reported as failed.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

/// Localized subject line attached to the relayed email.
pub fn subject_for(lang: Lang) -> &'static str {
    match lang {
        Lang::Es => "Nuevo mensaje desde el portafolio 🚀",
        Lang::En => "New message from portfolio 🚀",
        Lang::Pt => "Nova mensagem do portfólio 🚀",
    }
}

/// Posts contact submissions to the form relay.
pub struct ContactSender {
    client: reqwest::Client,
    endpoint: String,
}

impl ContactSender {
    /// A sender targeting the production endpoint with the standard budget.
    pub fn new() -> Result<Self> {
        Self::with_endpoint(FORM_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_timeout(endpoint, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("portfolio-core/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Submit(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Submits one validated draft.
    ///
    /// A tripped honeypot resolves to `Ok` without contacting the relay, so
    /// automated submitters see a normal success. Otherwise the draft is
    /// posted as one multipart request; only the response status class is
    /// inspected.
    pub async fn submit(&self, form: &ContactForm, lang: Lang) -> Result<()> {
        form.validate()
            .map_err(|e| Error::Validation(e.to_string()))?;

        if form.is_honeypot_tripped() {
            return Ok(());
        }

        let parts = multipart::Form::new()
            .text("name", form.name.clone())
            .text("email", form.email.clone())
            .text("message", form.message.clone())
            .text("_subject", subject_for(lang))
            .text("_language", lang.as_str())
            .text("company", form.company.clone());

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .multipart(parts)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Error::Submit(format!("HTTP status: {}", response.status())))
        }
    }

    /// Runs one full submission through a [`SubmitTracker`] and returns the
    /// resulting status. If a submission is already in flight the draft is
    /// dropped and the current status returned unchanged.
    pub async fn deliver(
        &self,
        tracker: &mut SubmitTracker,
        form: &ContactForm,
        lang: Lang,
    ) -> Status {
        if !tracker.begin() {
            return tracker.status();
        }
        let delivered = self.submit(form, lang).await.is_ok();
        tracker.finish(delivered);
        tracker.status()
    }
}
