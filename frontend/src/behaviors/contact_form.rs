//! Acknowledges contact form submissions on the submit button itself.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use crate::config::ACK_RESTORE_DELAY_MS;
use crate::dom::Dom;
use crate::locale::Locale;
use crate::schedule::Scheduler;

/// A submit label showing the confirmation, waiting to be put back.
pub struct Acknowledgement<N> {
    label: N,
    original: String,
}

/// Shows the "sent" confirmation in `locale` on the form's submit label and
/// clears the form. The label text to restore is captured now, for the same
/// locale, so a language switch during the confirmation window does not
/// change what the label returns to.
pub fn acknowledge<D: Dom>(dom: &D, form: &D::Node, locale: Locale) -> Option<Acknowledgement<D::Node>> {
    let button = dom
        .select_within(form, r#"button[type="submit"]"#)
        .into_iter()
        .next()?;
    let label = dom.select_within(&button, "span").into_iter().next()?;
    let original = dom.attr(&label, locale.content_attr()).unwrap_or_default();

    dom.set_text(&label, locale.sent_label());
    dom.reset_form(form);

    Some(Acknowledgement { label, original })
}

/// Handles a submission: acknowledges it and puts the label back after
/// [`ACK_RESTORE_DELAY_MS`]. Returns whether the form had a label to
/// acknowledge on.
pub fn submit<D>(dom: &D, form: &D::Node, locale: Locale, scheduler: &impl Scheduler) -> bool
where
    D: Dom + Clone + 'static,
    D::Node: 'static,
{
    let Some(ack) = acknowledge(dom, form, locale) else {
        return false;
    };
    let dom = dom.clone();
    scheduler.after(ACK_RESTORE_DELAY_MS, Box::new(move || ack.restore(&dom)));
    true
}

impl<N> Acknowledgement<N> {
    #[cfg(test)]
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn restore<D: Dom<Node = N>>(self, dom: &D) {
        dom.set_text(&self.label, &self.original);
    }
}
