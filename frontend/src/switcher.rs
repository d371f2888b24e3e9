#[cfg(test)]
#[path = "switcher_test.rs"]
mod switcher_test;

use std::cell::Cell;

use log::{debug, warn};

use crate::dom::Dom;
use crate::locale::Locale;
use crate::preference::{saved_locale, PreferenceStore};

pub const LANG_BUTTON: &str = ".lang-btn";

/// Renders every translatable part of the page in `locale`.
pub fn apply_locale<D: Dom>(dom: &D, locale: Locale) {
    dom.set_lang(locale.code());

    let attr = locale.content_attr();
    for node in dom.select_all("[data-ka][data-en]") {
        let payload = dom.attr(&node, attr).unwrap_or_default();
        if dom.tag_name(&node) == "OPTION" {
            dom.set_text(&node, &payload);
        } else {
            dom.set_inner_html(&node, &payload);
        }
    }

    let attr = locale.placeholder_attr();
    for node in dom.select_all("[data-placeholder-ka][data-placeholder-en]") {
        let payload = dom.attr(&node, attr).unwrap_or_default();
        dom.set_placeholder(&node, &payload);
    }

    for button in dom.select_all(LANG_BUTTON) {
        let selected = dom.attr(&button, "data-lang").as_deref() == Some(locale.code());
        dom.set_class(&button, "active", selected);
    }

    dom.set_title(locale.title());
}

/// Owns the active locale and the store it is remembered in.
pub struct LocaleSwitcher<S> {
    current: Cell<Locale>,
    store: S,
}

impl<S: PreferenceStore> LocaleSwitcher<S> {
    pub fn new(store: S) -> Self {
        Self {
            current: Cell::new(Locale::default()),
            store,
        }
    }

    pub fn current(&self) -> Locale {
        self.current.get()
    }

    pub fn set_locale<D: Dom>(&self, dom: &D, locale: Locale) {
        debug!("Switching language to {}", locale);
        self.current.set(locale);
        apply_locale(dom, locale);
        self.store.save(locale.code());
    }

    /// Re-applies the language remembered from a previous visit.
    pub fn restore<D: Dom>(&self, dom: &D) {
        if let Some(locale) = saved_locale(&self.store) {
            self.set_locale(dom, locale);
        }
    }

    /// Handles a click somewhere inside the language switch.
    pub fn handle_click<D: Dom>(&self, dom: &D, target: &D::Node) {
        let Some(button) = dom.closest(target, LANG_BUTTON) else {
            return;
        };
        let Some(code) = dom.attr(&button, "data-lang") else {
            return;
        };
        match Locale::from_code(&code) {
            Some(locale) if locale != self.current() => self.set_locale(dom, locale),
            Some(_) => {}
            None => warn!("Language button has unknown code {:?}", code),
        }
    }
}
