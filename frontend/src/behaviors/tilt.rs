use crate::config::{TILT_DEGREES, TILT_LIFT_PX, TILT_PERSPECTIVE_PX};
use crate::dom::{css_number, Dom, Rect};

pub const CARDS: &str = ".project-card";

/// Transform for a pointer at (`client_x`, `client_y`) over a card occupying
/// `rect`. `None` for a card with no area.
pub fn tilt_transform(rect: Rect, client_x: f64, client_y: f64) -> Option<String> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let x = (client_x - rect.left) / rect.width - 0.5;
    let y = (client_y - rect.top) / rect.height - 0.5;
    Some(format!(
        "translateY(-{}px) perspective({}px) rotateX({}deg) rotateY({}deg)",
        css_number(TILT_LIFT_PX),
        css_number(TILT_PERSPECTIVE_PX),
        css_number(-y * TILT_DEGREES),
        css_number(x * TILT_DEGREES),
    ))
}

pub fn tilt<D: Dom>(dom: &D, card: &D::Node, client_x: f64, client_y: f64) {
    if let Some(transform) = tilt_transform(dom.bounding_rect(card), client_x, client_y) {
        dom.set_style(card, "transform", &transform);
    }
}

pub fn reset<D: Dom>(dom: &D, card: &D::Node) {
    dom.set_style(card, "transform", "");
}
