// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localization for the dashboard UI.
//!
//! Two display languages are supported:
//!
//! | Code | Language | Role      |
//! |------|----------|-----------|
//! | zh   | 中文      | primary   |
//! | en   | English  | secondary |
//!
//! ## Design
//!
//! Keys are flat, opaque identifiers grouped by UI area (`nav_dashboard`,
//! `market_cap`). [`LocaleService::translate`] returns the raw key whenever
//! the table has no text for it in the current language (fail-open, never
//! panics), so a typo or an unsupported language shows up as a raw key in
//! the UI instead of an error.
//!
//! The current language is owned by a [`LocaleService`] value, restored from
//! a [`KeyValueStore`](crate::storage::KeyValueStore) on construction and
//! written back on every change. There is no global instance.

mod catalog;
mod iso639;
mod lang;
mod service;
mod table;

pub use catalog::{area_of, Area};
pub use iso639::{is_known_tag, language_name, native_name, primary_subtag};
pub use lang::Lang;
pub use service::{LocaleService, SubscriptionId, STORAGE_KEY};
pub use table::{TranslationEntry, TranslationTable};
