// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dashboard-Locale: UI text localization for the finance dashboard.
//!
//! The crate resolves UI text keys to Chinese or English strings and keeps
//! the selected language across sessions.
//!
//! PIECES:
//! 1. **i18n**: the translation catalog, the lookup table, and the
//!    [`LocaleService`](i18n::LocaleService) that owns the current language.
//! 2. **storage**: key-value stores the service persists its language to.
//! 3. **config**: settings file for the command-line front end.

pub mod config;
pub mod i18n;
pub mod storage;
