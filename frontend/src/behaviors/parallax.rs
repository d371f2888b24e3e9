use crate::config::PARALLAX_FACTOR;
use crate::dom::{css_number, Dom};

/// Background layers and their (x, y) share of the scroll speed.
pub const LAYERS: [(&str, f64, f64); 2] = [(".hero-glow-1", 0.2, 0.5), (".hero-glow-2", -0.15, 0.3)];

/// Per-layer `translate` offsets, or `None` once the hero is scrolled out of
/// view and the layers should stay where they are.
pub fn layer_offsets(scroll_y: f64, viewport_height: f64) -> Option<[(f64, f64); 2]> {
    if scroll_y >= viewport_height {
        return None;
    }
    let speed = scroll_y * PARALLAX_FACTOR;
    Some(LAYERS.map(|(_, x, y)| (speed * x, speed * y)))
}

pub struct Parallax<N> {
    layers: [Option<N>; 2],
}

impl<N: Clone> Parallax<N> {
    pub fn discover<D: Dom<Node = N>>(dom: &D) -> Self {
        Self {
            layers: LAYERS.map(|(selector, _, _)| dom.select(selector)),
        }
    }

    pub fn on_scroll<D: Dom<Node = N>>(&self, dom: &D, scroll_y: f64, viewport_height: f64) {
        let Some(offsets) = layer_offsets(scroll_y, viewport_height) else {
            return;
        };
        for (layer, (x, y)) in self.layers.iter().zip(offsets) {
            if let Some(layer) = layer {
                let transform = format!("translate({}px, {}px)", css_number(x), css_number(y));
                dom.set_style(layer, "transform", &transform);
            }
        }
    }
}
