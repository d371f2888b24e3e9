use crate::dom::Dom;

pub const QUESTIONS: &str = ".faq-question";
pub const ITEMS: &str = ".faq-item";

/// Opens the item owning `question` and closes every other one; clicking the
/// open item's question closes it.
pub fn toggle<D: Dom>(dom: &D, question: &D::Node) {
    let Some(item) = dom.closest(question, ITEMS) else {
        return;
    };
    let was_open = dom.has_class(&item, "active");
    for other in dom.select_all(ITEMS) {
        dom.set_class(&other, "active", false);
    }
    if !was_open {
        dom.set_class(&item, "active", true);
    }
}
