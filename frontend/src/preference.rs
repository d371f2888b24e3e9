//! Where the chosen language survives between visits.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::cell::RefCell;

use log::warn;
use web_sys::{window, Storage};

use crate::locale::Locale;

pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// Browser `localStorage` under a fixed key.
pub struct LocalStorage {
    storage: Storage,
    key: &'static str,
}

impl LocalStorage {
    /// `None` when the page has no usable `localStorage`, e.g. with storage
    /// disabled in the browser settings.
    pub fn open(key: &'static str) -> Option<Self> {
        let storage = window()?.local_storage().ok().flatten()?;
        Some(Self { storage, key })
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self) -> Option<String> {
        self.storage.get_item(self.key).ok().flatten()
    }

    fn save(&self, value: &str) {
        let _ = self.storage.set_item(self.key, value);
    }
}

/// Keeps the preference for the lifetime of the page only.
#[derive(Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_string())),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_string());
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, value: &str) {
        (**self).save(value)
    }
}

/// The locale to switch to at startup, if the visitor picked one other than
/// the default last time. Values that are not a known locale code are
/// ignored.
pub fn saved_locale(store: &impl PreferenceStore) -> Option<Locale> {
    let raw = store.load()?;
    match Locale::from_code(&raw) {
        Some(locale) if locale != Locale::default() => Some(locale),
        Some(_) => None,
        None => {
            warn!("Ignoring unknown saved language {:?}", raw);
            None
        }
    }
}
