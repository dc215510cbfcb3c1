// SPDX-License-Identifier: MPL-2.0
//! The enumerated set of supported display languages.

use std::fmt;
use unic_langid::LanguageIdentifier;

/// A supported display language.
///
/// The variants are a closed set: anything that is not one of these codes
/// is rejected at the parsing boundary (`from_code` / `from_hint`), so the
/// rest of the crate never has to reason about unsupported languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    Es,
    En,
    Pt,
}

impl Lang {
    /// All supported languages, in cycle order.
    pub const ALL: [Lang; 3] = [Lang::Es, Lang::En, Lang::Pt];

    /// The lowercase two-letter language code.
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
            Lang::Pt => "pt",
        }
    }

    /// The language's name in that language, for the switcher UI.
    pub fn display_name(self) -> &'static str {
        match self {
            Lang::Es => "Español",
            Lang::En => "English",
            Lang::Pt => "Português",
        }
    }

    /// Parses an exact language code, case-insensitively.
    ///
    /// Returns `None` for anything outside the supported set.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Some(Lang::Es),
            "en" => Some(Lang::En),
            "pt" => Some(Lang::Pt),
            _ => None,
        }
    }

    /// Matches a client locale hint such as `"en-US"`, `"pt_BR"` or `"es"`.
    ///
    /// The hint is parsed down to its primary language subtag; hints that do
    /// not parse as a language identifier (e.g. `"en_US.UTF-8"`) fall back
    /// to a lowercase prefix match.
    pub fn from_hint(hint: &str) -> Option<Lang> {
        let normalized = hint.trim().replace('_', "-");
        if let Ok(id) = normalized.parse::<LanguageIdentifier>() {
            if let Some(lang) = Lang::from_code(id.language.as_str()) {
                return Some(lang);
            }
        }
        let lower = hint.trim().to_ascii_lowercase();
        Lang::ALL.into_iter().find(|lang| lower.starts_with(lang.as_str()))
    }

    /// The next language in the fixed circular order `es → en → pt → es`.
    pub fn next(self) -> Lang {
        let idx = Lang::ALL.iter().position(|lang| *lang == self).unwrap_or(0);
        Lang::ALL[(idx + 1) % Lang::ALL.len()]
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
