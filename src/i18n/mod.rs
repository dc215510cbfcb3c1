// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the portfolio.
//!
//! The site ships three display languages (Spanish, English, Portuguese)
//! with a namespaced string catalog embedded in the binary. This module
//! provides:
//!
//! - the enumerated [`Lang`] codes with their fixed cycle order,
//! - the immutable [`Catalog`] with identity-fallback lookup,
//! - the [`LanguageProvider`] owning the active language, resolved from
//!   the persisted preference, a client locale hint, or the default.
//!
//! A missing translation never errors: lookup degrades to the raw key so
//! an untranslated string stays visible instead of blanking the page.

pub mod catalog;
pub mod lang;
pub mod provider;

pub use catalog::Catalog;
pub use lang::Lang;
pub use provider::{resolve_language, LanguageProvider};
