use crate::dom::Dom;

pub const IN_PAGE_LINKS: &str = r##"a[href^="#"]"##;

/// Smoothly scrolls to the element an in-page link points at. Returns whether
/// a target was found; links to missing or unparsable fragments do nothing.
pub fn follow_anchor<D: Dom>(dom: &D, link: &D::Node) -> bool {
    let Some(href) = dom.attr(link, "href") else {
        return false;
    };
    match dom.select(&href) {
        Some(target) => {
            dom.scroll_into_view(&target);
            true
        }
        None => false,
    }
}
