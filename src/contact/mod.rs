// SPDX-License-Identifier: MPL-2.0
//! Contact-form pipeline: validation, submission lifecycle, and delivery
//! to the external form relay.
//!
//! The flow mirrors the site's contact section: the visitor's draft is
//! validated client-side (the submit control stays disabled until it
//! passes), a populated honeypot field short-circuits to success without
//! touching the network, and a real submission is a single multipart POST
//! with a 12-second budget. The outcome drives a four-state lifecycle
//! whose success/error banners auto-dismiss after a fixed interval.

pub mod form;
pub mod sender;
pub mod status;

pub use form::{ContactForm, ValidationError};
pub use sender::{subject_for, ContactSender, FORM_ENDPOINT, REQUEST_TIMEOUT};
pub use status::{Status, SubmitTracker, BANNER_INTERVAL};
