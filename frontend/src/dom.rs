//! The slice of the document API the behaviors need.
//!
//! Behaviors are written against [`Dom`] instead of `web_sys` directly so the
//! same code runs against the live page ([`browser::BrowserDom`]) and against
//! the in-memory document the tests build.

pub mod browser;
#[cfg(test)]
pub mod fake;

/// An element's box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

pub trait Dom {
    type Node: Clone;

    /// All elements matching `selector`, in document order. An invalid
    /// selector matches nothing.
    fn select_all(&self, selector: &str) -> Vec<Self::Node>;

    fn select(&self, selector: &str) -> Option<Self::Node> {
        self.select_all(selector).into_iter().next()
    }

    fn by_id(&self, id: &str) -> Option<Self::Node> {
        self.select(&format!("#{id}"))
    }

    /// Descendants of `scope` matching `selector`, in document order.
    fn select_within(&self, scope: &Self::Node, selector: &str) -> Vec<Self::Node>;

    /// `node` itself or its nearest ancestor matching `selector`.
    fn closest(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;

    fn attr(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Upper-case tag name, e.g. `OPTION`.
    fn tag_name(&self, node: &Self::Node) -> String;

    fn set_inner_html(&self, node: &Self::Node, html: &str);
    fn set_text(&self, node: &Self::Node, text: &str);
    fn set_placeholder(&self, node: &Self::Node, text: &str);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn set_class(&self, node: &Self::Node, class: &str, on: bool);

    fn toggle_class(&self, node: &Self::Node, class: &str) {
        let on = !self.has_class(node, class);
        self.set_class(node, class, on);
    }

    /// Sets an inline style property; an empty value removes it.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    fn set_title(&self, title: &str);
    fn set_lang(&self, lang: &str);

    fn offset_top(&self, node: &Self::Node) -> f64;
    fn bounding_rect(&self, node: &Self::Node) -> Rect;

    /// Restores every control of a form to its initial value.
    fn reset_form(&self, form: &Self::Node);

    fn scroll_into_view(&self, node: &Self::Node);
}

/// Integer parsing with the leniency markup attributes get in the browser:
/// leading whitespace and trailing garbage are ignored, `"12px"` is `12`.
/// Out-of-range values saturate.
pub fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let sign = if negative { -1 } else { 1 };
    let value = digits[..end].bytes().fold(0i64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(sign * i64::from(digit - b'0'))
    });
    Some(value)
}

/// Formats a number for inline CSS: no trailing `.0`, and no `-0`.
pub fn css_number(value: f64) -> String {
    format!("{}", value + 0.0)
}
