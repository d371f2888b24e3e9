use crate::dom::Dom;

/// Pins the glow element under the pointer.
pub fn follow_pointer<D: Dom>(dom: &D, glow: &D::Node, client_x: i32, client_y: i32) {
    dom.set_style(glow, "left", &format!("{}px", client_x));
    dom.set_style(glow, "top", &format!("{}px", client_y));
}
