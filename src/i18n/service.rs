// SPDX-License-Identifier: PMPL-1.0-or-later

//! The locale service: current language, lookups, and persistence.

use super::lang::Lang;
use super::table::TranslationTable;
use crate::storage::KeyValueStore;

/// Store key the current language is persisted under.
pub const STORAGE_KEY: &str = "locale";

/// Handle returned by [`LocaleService::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Lang)>;

/// Single authority for which language is active and what a key reads as.
///
/// One instance per UI session; nothing is shared between instances except
/// what they persist to the same store. All mutation goes through `&mut self`
/// and notifies subscribers before returning.
pub struct LocaleService<S: KeyValueStore> {
    table: TranslationTable,
    store: S,
    current: Lang,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<S: KeyValueStore> LocaleService<S> {
    /// Create the service, restoring the language persisted in `store`.
    ///
    /// An absent or empty persisted value yields [`Lang::PRIMARY`].
    pub fn new(table: TranslationTable, store: S) -> Self {
        let current = match store.get(STORAGE_KEY) {
            Some(code) if !code.is_empty() => Lang::from_code(&code),
            _ => Lang::PRIMARY,
        };
        log::debug!("locale service starting in '{}'", current);
        Self {
            table,
            store,
            current,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// The active language.
    pub fn current(&self) -> &Lang {
        &self.current
    }

    /// Whether the primary language is active. Derived on every call.
    pub fn is_primary(&self) -> bool {
        self.current == Lang::PRIMARY
    }

    /// Text of `key` in the current language, or `key` itself when the
    /// table has no text for it or the text is blank. Never fails.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.table.lookup(key, &self.current).unwrap_or(key)
    }

    /// Switch between the two supported languages and persist the result.
    ///
    /// From an unsupported tag this goes to the primary language.
    pub fn toggle_language(&mut self) {
        let next = self.current.toggled();
        self.apply(next);
    }

    /// Make `lang` current and persist it. Unsupported tags are accepted.
    pub fn set_language(&mut self, lang: Lang) {
        self.apply(lang);
    }

    /// Register a listener called with the new language after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&Lang) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// The table lookups resolve against.
    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// The store the language is persisted to.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, e.g. to reopen a service over it.
    pub fn into_store(self) -> S {
        self.store
    }

    fn apply(&mut self, lang: Lang) {
        // `Other("zh")` must become `Zh`, as it would after a reload.
        let lang = Lang::from_code(lang.code());
        log::debug!("language '{}' -> '{}'", self.current, lang);
        self.current = lang;
        if let Err(err) = self.store.set(STORAGE_KEY, self.current.code()) {
            log::warn!("language '{}' not persisted: {}", self.current, err);
        }
        for (_, listener) in &mut self.listeners {
            listener(&self.current);
        }
    }
}

impl<S: KeyValueStore> std::fmt::Debug for LocaleService<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleService")
            .field("current", &self.current)
            .field("keys", &self.table.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
