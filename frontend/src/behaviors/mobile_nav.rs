use crate::dom::Dom;

/// The burger button and the link panel it opens on narrow screens.
pub struct MobileNav<N> {
    pub toggle: N,
    pub panel: N,
}

impl<N: Clone> MobileNav<N> {
    pub fn toggle<D: Dom<Node = N>>(&self, dom: &D) {
        dom.toggle_class(&self.toggle, "active");
        dom.toggle_class(&self.panel, "active");
    }

    pub fn close<D: Dom<Node = N>>(&self, dom: &D) {
        dom.set_class(&self.toggle, "active", false);
        dom.set_class(&self.panel, "active", false);
    }
}
