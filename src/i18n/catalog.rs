// SPDX-License-Identifier: MPL-2.0
//! The translation catalog: an immutable nested mapping from language to
//! namespace to key to localized string.

use crate::error::{Error, Result};
use crate::i18n::lang::Lang;
use rust_embed::RustEmbed;
use std::collections::{BTreeMap, BTreeSet, HashMap};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Namespace used for bare keys without an explicit namespace argument.
pub const DEFAULT_NAMESPACE: &str = "common";

type Bundle = BTreeMap<String, BTreeMap<String, String>>;

/// Called on every lookup that falls back to the raw key.
///
/// Receives `(language, namespace, key)`. Diagnostic only: installing an
/// observer never changes what `resolve` returns.
pub type MissingObserver = Box<dyn Fn(Lang, &str, &str) + Send + Sync>;

/// The string catalog for all supported languages.
///
/// Built once from the embedded per-language TOML bundles and read-only
/// afterwards. Lookups never fail: a missing namespace or key resolves to
/// the key itself, so an untranslated string shows up verbatim in the UI
/// instead of breaking it.
pub struct Catalog {
    bundles: HashMap<Lang, Bundle>,
    missing_observer: Option<MissingObserver>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Builds the catalog from the translation bundles embedded in the
    /// binary.
    pub fn new() -> Self {
        let mut bundles = HashMap::new();
        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(code) = filename.strip_suffix(".toml") {
                if let Some(lang) = Lang::from_code(code) {
                    if let Some(content) = Asset::get(filename) {
                        let text = String::from_utf8_lossy(content.data.as_ref());
                        // Embedded assets are part of the build; a parse
                        // failure here is a packaging defect, not runtime input.
                        let bundle: Bundle =
                            toml::from_str(&text).expect("Failed to parse embedded locale bundle.");
                        bundles.insert(lang, bundle);
                    }
                }
            }
        }
        Self {
            bundles,
            missing_observer: None,
        }
    }

    /// Builds a catalog from in-memory TOML sources. Used by tests and
    /// callers that supply their own dictionary.
    pub fn from_toml_sources(sources: &[(Lang, &str)]) -> Result<Self> {
        let mut bundles = HashMap::new();
        for (lang, text) in sources {
            let bundle: Bundle = toml::from_str(text)
                .map_err(|e| Error::Catalog(format!("bundle for {}: {}", lang, e)))?;
            bundles.insert(*lang, bundle);
        }
        Ok(Self {
            bundles,
            missing_observer: None,
        })
    }

    /// Installs a callback invoked whenever a lookup falls back to the raw
    /// key. Lets development builds and tests catch missing-translation
    /// regressions without changing production behavior.
    pub fn set_missing_observer(
        &mut self,
        observer: impl Fn(Lang, &str, &str) + Send + Sync + 'static,
    ) {
        self.missing_observer = Some(Box::new(observer));
    }

    /// Resolves `key` for `lang`.
    ///
    /// Tie-break policy, matching the site's original lookup:
    /// 1. an explicit `namespace` argument wins, and the key is looked up
    ///    verbatim in it (even if the key contains a dot);
    /// 2. otherwise a dotted key (`"footer.name"`) is split at the first dot
    ///    into namespace and key;
    /// 3. otherwise the key is looked up in [`DEFAULT_NAMESPACE`].
    ///
    /// Any miss returns the original `key` unchanged.
    pub fn resolve(&self, lang: Lang, key: &str, namespace: Option<&str>) -> String {
        let (ns, entry) = match namespace {
            Some(ns) => (ns, key),
            None => match key.split_once('.') {
                Some((ns, rest)) => (ns, rest),
                None => (DEFAULT_NAMESPACE, key),
            },
        };

        if let Some(text) = self
            .bundles
            .get(&lang)
            .and_then(|bundle| bundle.get(ns))
            .and_then(|table| table.get(entry))
        {
            return text.clone();
        }

        if let Some(observe) = &self.missing_observer {
            observe(lang, ns, entry);
        }
        key.to_string()
    }

    /// The namespaces defined for `lang`, in sorted order.
    pub fn namespaces(&self, lang: Lang) -> Vec<&str> {
        self.bundles
            .get(&lang)
            .map(|bundle| bundle.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Reports every `(lang, "namespace.key")` pair that some other language
    /// defines but `lang` does not.
    ///
    /// Key parity across languages is a content invariant, not a runtime
    /// one: a gap degrades via identity fallback. This report exists so a
    /// test can keep the shipped bundles honest.
    pub fn parity_report(&self) -> Vec<(Lang, String)> {
        let mut union: BTreeSet<(String, String)> = BTreeSet::new();
        for bundle in self.bundles.values() {
            for (ns, table) in bundle {
                for key in table.keys() {
                    union.insert((ns.clone(), key.clone()));
                }
            }
        }

        let mut gaps = Vec::new();
        for lang in Lang::ALL {
            let bundle = self.bundles.get(&lang);
            for (ns, key) in &union {
                let present = bundle
                    .and_then(|b| b.get(ns))
                    .is_some_and(|table| table.contains_key(key));
                if !present {
                    gaps.push((lang, format!("{}.{}", ns, key)));
                }
            }
        }
        gaps
    }
}
