// SPDX-License-Identifier: PMPL-1.0-or-later

//! Key → {language → text} lookup table.

use super::catalog::{self, Area};
use super::lang::Lang;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Texts of one translation key, indexed by language tag.
///
/// Items may be missing for any language, including the supported ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationEntry {
    texts: BTreeMap<String, String>,
}

impl TranslationEntry {
    /// Entry with both supported languages filled in.
    pub fn new(zh: impl Into<String>, en: impl Into<String>) -> Self {
        Self::default().with(&Lang::Zh, zh).with(&Lang::En, en)
    }

    /// Add or replace the text for `lang`.
    pub fn with(mut self, lang: &Lang, text: impl Into<String>) -> Self {
        self.texts.insert(lang.code().to_string(), text.into());
        self
    }

    pub fn get(&self, lang: &Lang) -> Option<&str> {
        self.texts.get(lang.code()).map(String::as_str)
    }

    /// Languages this entry has a text for.
    pub fn languages(&self) -> impl Iterator<Item = Lang> + '_ {
        self.texts.keys().map(|code| Lang::from_code(code))
    }
}

/// Immutable table of every translation key the UI uses.
///
/// Built once, either from the compiled-in catalog or from a JSON catalog
/// file of the shape `{"key": {"zh": "...", "en": "..."}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: BTreeMap<String, TranslationEntry>,
}

impl TranslationTable {
    /// Table of the compiled-in dashboard catalog.
    pub fn builtin() -> Self {
        catalog::rows()
            .map(|(_, key, zh, en)| (key.to_string(), TranslationEntry::new(zh, en)))
            .collect()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid translation catalog")
    }

    /// Read a JSON catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        let table = Self::from_json_str(&content)
            .with_context(|| format!("failed to parse catalog {}", path.display()))?;
        log::info!("loaded {} translation keys from {}", table.len(), path.display());
        Ok(table)
    }

    /// Displayable text for `key` in `lang`.
    ///
    /// A blank item counts as no text, so callers fall back to the key.
    pub fn lookup(&self, key: &str, lang: &Lang) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|entry| entry.get(lang))
            .filter(|text| !text.is_empty())
    }

    pub fn entry(&self, key: &str) -> Option<&TranslationEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in lexical order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Keys of the table that the built-in catalog files under `area`.
    pub fn keys_in(&self, area: Area) -> impl Iterator<Item = &str> {
        self.keys()
            .filter(move |key| catalog::area_of(key) == Some(area))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every (key, supported language) pair without a text, in key order.
    pub fn missing(&self) -> Vec<(&str, Lang)> {
        let mut gaps = Vec::new();
        for (key, entry) in &self.entries {
            for lang in Lang::supported() {
                if entry.get(&lang).is_none() {
                    gaps.push((key.as_str(), lang));
                }
            }
        }
        gaps
    }
}

impl<K: Into<String>> FromIterator<(K, TranslationEntry)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, TranslationEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
