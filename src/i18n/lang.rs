// SPDX-License-Identifier: PMPL-1.0-or-later

//! UI display languages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display language of the dashboard.
///
/// Chinese is the primary language and English the secondary one. Any other
/// tag handed to [`LocaleService::set_language`](super::LocaleService::set_language)
/// is carried verbatim in [`Lang::Other`]; it is a valid current language but
/// no catalog entry resolves for it, so every lookup falls back to the raw key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Lang {
    #[default]
    Zh,
    En,
    Other(String),
}

impl Lang {
    /// Language active on first run.
    pub const PRIMARY: Lang = Lang::Zh;
    pub const SECONDARY: Lang = Lang::En;

    /// Tag stored in the persisted store and used as catalog column name.
    pub fn code(&self) -> &str {
        match self {
            Lang::Zh => "zh",
            Lang::En => "en",
            Lang::Other(tag) => tag,
        }
    }

    /// Parse a stored tag. Never fails: unknown tags become [`Lang::Other`].
    pub fn from_code(code: &str) -> Lang {
        Lang::supported_by_code(code).unwrap_or_else(|| Lang::Other(code.to_string()))
    }

    fn supported_by_code(code: &str) -> Option<Lang> {
        match code {
            "zh" => Some(Lang::Zh),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// The two languages the catalog is written for, primary first.
    pub fn supported() -> [Lang; 2] {
        [Lang::Zh, Lang::En]
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Lang::Other(_))
    }

    /// The language a toggle switches to.
    ///
    /// Only the primary language flips to the secondary one; the secondary
    /// language and any unsupported tag go back to primary.
    pub fn toggled(&self) -> Lang {
        match self {
            Lang::Zh => Lang::En,
            _ => Lang::Zh,
        }
    }

    /// Human-readable name in the language itself, when known.
    pub fn native_name(&self) -> Option<&'static str> {
        super::iso639::native_name(self.code())
    }
}

impl From<String> for Lang {
    fn from(code: String) -> Self {
        Lang::supported_by_code(&code).unwrap_or(Lang::Other(code))
    }
}

impl From<Lang> for String {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::Other(tag) => tag,
            supported => supported.code().to_string(),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
