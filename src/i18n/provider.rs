// SPDX-License-Identifier: MPL-2.0
//! Active-language state: which language the visitor is currently reading.

use crate::config::{self, Preferences};
use crate::i18n::catalog::Catalog;
use crate::i18n::lang::Lang;
use std::path::PathBuf;

/// Owns the single source of truth for the active language.
///
/// This is an explicit, injectable state object rather than a hidden
/// global: views hold a reference to one provider, and tests can build
/// independent instances (with their own preference store paths) without
/// cross-test leakage.
pub struct LanguageProvider {
    catalog: Catalog,
    current: Lang,
    config_path: Option<PathBuf>,
}

impl Default for LanguageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProvider {
    /// Creates a provider using the default preference store and the OS
    /// locale as the client hint.
    pub fn new() -> Self {
        let saved = config::load().language;
        let hint = sys_locale::get_locale();
        Self::from_parts(Catalog::new(), saved.as_deref(), hint.as_deref(), None)
    }

    /// Creates a provider persisting to an explicit store path. Initial
    /// language resolution still consults the OS locale when the store has
    /// no saved preference.
    pub fn with_config_path(path: impl AsRef<std::path::Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let saved = config::load_from_path(&path)
            .unwrap_or_default()
            .language;
        let hint = sys_locale::get_locale();
        Self::from_parts(Catalog::new(), saved.as_deref(), hint.as_deref(), Some(path))
    }

    /// Assembles a provider from already-resolved inputs. This is the seam
    /// tests use to control every source of language resolution.
    pub fn from_parts(
        catalog: Catalog,
        saved: Option<&str>,
        hint: Option<&str>,
        config_path: Option<PathBuf>,
    ) -> Self {
        Self {
            catalog,
            current: resolve_language(saved, hint),
            config_path,
        }
    }

    /// The currently active language. Never fails.
    pub fn language(&self) -> Lang {
        self.current
    }

    /// Switches the active language and persists the choice.
    ///
    /// The in-memory state always updates; a preference-store failure only
    /// means the choice will not survive a restart.
    pub fn set_language(&mut self, lang: Lang) {
        self.current = lang;
        self.persist(lang);
    }

    /// Advances to the next language in the fixed circular order and
    /// returns it.
    pub fn cycle(&mut self) -> Lang {
        let next = self.current.next();
        self.set_language(next);
        next
    }

    /// Looks up `key` in the active language (dotted-path or default
    /// namespace rules, see [`Catalog::resolve`]).
    pub fn t(&self, key: &str) -> String {
        self.catalog.resolve(self.current, key, None)
    }

    /// Looks up `key` within an explicit namespace in the active language.
    pub fn t_in(&self, namespace: &str, key: &str) -> String {
        self.catalog.resolve(self.current, key, Some(namespace))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mutable catalog access, e.g. to install a missing-key observer.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    fn persist(&self, lang: Lang) {
        let mut prefs = match &self.config_path {
            Some(path) => config::load_from_path(path).unwrap_or_default(),
            None => config::load(),
        };
        prefs.language = Some(lang.as_str().to_string());
        // Best-effort: an unavailable store degrades to session-only state.
        let _ = self.store(&prefs);
    }

    fn store(&self, prefs: &Preferences) -> crate::error::Result<()> {
        match &self.config_path {
            Some(path) => config::save_to_path(prefs, path),
            None => config::save(prefs),
        }
    }
}

/// Resolves the initial language, first match wins:
/// 1. a previously persisted language code,
/// 2. a client locale hint matched by primary subtag/prefix,
/// 3. the default language.
pub fn resolve_language(saved: Option<&str>, hint: Option<&str>) -> Lang {
    if let Some(lang) = saved.and_then(Lang::from_code) {
        return lang;
    }
    if let Some(lang) = hint.and_then(Lang::from_hint) {
        return lang;
    }
    Lang::default()
}
