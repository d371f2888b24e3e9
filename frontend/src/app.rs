//! Attaches every behavior to the live page. Listeners stay registered for
//! the lifetime of the page, so their closures are leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, Window,
};

use crate::behaviors::anchor_scroll::{follow_anchor, IN_PAGE_LINKS};
use crate::behaviors::chrome::ScrollChrome;
use crate::behaviors::contact_form::submit;
use crate::behaviors::counter::{counters, Counter, CounterTrigger, STATS_SECTION};
use crate::behaviors::glow::follow_pointer;
use crate::behaviors::mobile_nav::MobileNav;
use crate::behaviors::parallax::Parallax;
use crate::behaviors::reveal::{PendingReveals, ANIMATED};
use crate::behaviors::{faq, tilt};
use crate::config::{LANG_STORAGE_KEY, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, STATS_THRESHOLD};
use crate::dom::browser::BrowserDom;
use crate::dom::Dom;
use crate::preference::{LocalStorage, MemoryStore, PreferenceStore};
use crate::schedule::Timeouts;
use crate::switcher::LocaleSwitcher;

type Switcher = LocaleSwitcher<Box<dyn PreferenceStore>>;

fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn observe(
    nodes: &[Element],
    threshold: f64,
    root_margin: Option<&str>,
    handler: impl FnMut(Array, IntersectionObserver) + 'static,
) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Array, IntersectionObserver)>);
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    for node in nodes {
        observer.observe(node);
    }
    Ok(())
}

/// Entry point: wires all behaviors against the current document.
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let dom = BrowserDom::new(document);

    let store: Box<dyn PreferenceStore> = match LocalStorage::open(LANG_STORAGE_KEY) {
        Some(storage) => Box::new(storage),
        None => {
            warn!("localStorage unavailable, language choice will not be remembered");
            Box::new(MemoryStore::default())
        }
    };
    let switcher = Rc::new(LocaleSwitcher::new(store));

    install_language_switch(&dom, &switcher)?;
    switcher.restore(&dom);

    install_cursor_glow(&dom)?;
    install_scroll_effects(&window, &dom)?;
    install_mobile_nav(&dom)?;
    install_anchor_scroll(&dom)?;
    install_reveals(&dom)?;
    install_counters(&window, &dom)?;
    install_contact_form(&dom, &switcher)?;
    install_card_tilt(&dom)?;
    install_faq(&dom)?;

    info!("Site behaviors attached, language {}", switcher.current());
    Ok(())
}

fn install_language_switch(dom: &BrowserDom, switcher: &Rc<Switcher>) -> Result<(), JsValue> {
    let Some(switch) = dom.by_id("langSwitch") else {
        return Ok(());
    };
    let dom = dom.clone();
    let switcher = switcher.clone();
    listen(&switch, "click", move |event: MouseEvent| {
        if let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
            switcher.handle_click(&dom, &target);
        }
    })
}

fn install_cursor_glow(dom: &BrowserDom) -> Result<(), JsValue> {
    let Some(glow) = dom.by_id("cursorGlow") else {
        return Ok(());
    };
    let handler_dom = dom.clone();
    listen(dom.document(), "mousemove", move |event: MouseEvent| {
        follow_pointer(&handler_dom, &glow, event.client_x(), event.client_y());
    })
}

fn install_scroll_effects(window: &Window, dom: &BrowserDom) -> Result<(), JsValue> {
    let chrome = ScrollChrome::discover(dom);
    let parallax = Parallax::discover(dom);
    let dom = dom.clone();
    let win = window.clone();
    listen(window, "scroll", move |_: Event| {
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        chrome.on_scroll(&dom, scroll_y);
        let viewport_height = win
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        parallax.on_scroll(&dom, scroll_y, viewport_height);
    })
}

fn install_mobile_nav(dom: &BrowserDom) -> Result<(), JsValue> {
    let (Some(toggle), Some(panel)) = (dom.by_id("navToggle"), dom.by_id("navLinks")) else {
        return Ok(());
    };
    let links = dom.select_within(&panel, "a");
    let button = toggle.clone();
    let nav = Rc::new(MobileNav { toggle, panel });

    {
        let nav = nav.clone();
        let dom = dom.clone();
        listen(&button, "click", move |_: MouseEvent| nav.toggle(&dom))?;
    }
    for link in &links {
        let nav = nav.clone();
        let dom = dom.clone();
        listen(link, "click", move |_: MouseEvent| nav.close(&dom))?;
    }
    Ok(())
}

fn install_anchor_scroll(dom: &BrowserDom) -> Result<(), JsValue> {
    let links = dom.select_all(IN_PAGE_LINKS);
    for link in &links {
        let dom = dom.clone();
        let anchor = link.clone();
        listen(link, "click", move |event: MouseEvent| {
            event.prevent_default();
            follow_anchor(&dom, &anchor);
        })?;
    }
    debug!("Smooth scrolling {} in-page links", links.len());
    Ok(())
}

fn install_reveals(dom: &BrowserDom) -> Result<(), JsValue> {
    let nodes = dom.select_all(ANIMATED);
    if nodes.is_empty() {
        return Ok(());
    }
    let mut pending = PendingReveals::new(nodes.clone());
    let handler_dom = dom.clone();
    observe(&nodes, REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), move |entries, observer| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            if pending.on_intersect(&handler_dom, target.clone(), &Timeouts) {
                observer.unobserve(&target);
            }
        }
    })?;
    debug!("Observing {} elements for reveal", nodes.len());
    Ok(())
}

fn install_counters(window: &Window, dom: &BrowserDom) -> Result<(), JsValue> {
    let Some(stats) = dom.select(STATS_SECTION) else {
        return Ok(());
    };
    let mut trigger = CounterTrigger::new();
    let window = window.clone();
    let dom = dom.clone();
    observe(&[stats], STATS_THRESHOLD, None, move |entries, observer| {
        let visible = entries
            .get(0)
            .dyn_into::<IntersectionObserverEntry>()
            .map(|entry| entry.is_intersecting())
            .unwrap_or(false);
        if !trigger.fire(visible) {
            return;
        }
        observer.disconnect();
        start_counters(&window, &dom);
    })
}

fn start_counters(window: &Window, dom: &BrowserDom) {
    let now = window.performance().map(|p| p.now()).unwrap_or(0.0);
    for counter in counters(dom, now) {
        if let Err(err) = animate_counter(window.clone(), dom.clone(), counter) {
            warn!("Could not schedule counter animation: {:?}", err);
        }
    }
}

fn animate_counter(window: Window, dom: BrowserDom, counter: Counter<Element>) -> Result<(), JsValue> {
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();
    let win = window.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if counter.tick(&dom, now) {
            if let Some(callback) = next.borrow().as_ref() {
                let _ = win.request_animation_frame(callback.as_ref().unchecked_ref());
            }
        } else {
            // Finished; dropping the handle frees this closure.
            let _ = next.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = frame.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}

fn install_contact_form(dom: &BrowserDom, switcher: &Rc<Switcher>) -> Result<(), JsValue> {
    let Some(form) = dom.by_id("contactForm") else {
        return Ok(());
    };
    let dom = dom.clone();
    let switcher = switcher.clone();
    let target = form.clone();
    listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        if !submit(&dom, &target, switcher.current(), &Timeouts) {
            debug!("Contact form has no submit label to acknowledge on");
        }
    })
}

fn install_card_tilt(dom: &BrowserDom) -> Result<(), JsValue> {
    for card in dom.select_all(tilt::CARDS) {
        {
            let dom = dom.clone();
            let target = card.clone();
            listen(&card, "mousemove", move |event: MouseEvent| {
                tilt::tilt(
                    &dom,
                    &target,
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                );
            })?;
        }
        let dom = dom.clone();
        let target = card.clone();
        listen(&card, "mouseleave", move |_: MouseEvent| tilt::reset(&dom, &target))?;
    }
    Ok(())
}

fn install_faq(dom: &BrowserDom) -> Result<(), JsValue> {
    for question in dom.select_all(faq::QUESTIONS) {
        let dom = dom.clone();
        let target = question.clone();
        listen(&question, "click", move |_: MouseEvent| faq::toggle(&dom, &target))?;
    }
    Ok(())
}
