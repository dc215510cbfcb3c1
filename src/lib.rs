// SPDX-License-Identifier: MPL-2.0
//! `portfolio-core` is the headless core of a trilingual (es/en/pt) personal
//! portfolio site.
//!
//! The presentation layer (markup, styling, scroll animation) lives elsewhere;
//! this crate owns everything with a testable contract: the translation
//! catalog and its lookup rules, the active-language state with persisted
//! preference, and the contact-form pipeline (validation, honeypot
//! short-circuit, multipart delivery with a time budget, and the submission
//! status lifecycle).

pub mod config;
pub mod contact;
pub mod error;
pub mod i18n;
