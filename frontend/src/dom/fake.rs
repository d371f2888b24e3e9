//! In-memory document for tests.
//!
//! Elements are declared with the same compound-selector syntax the
//! behaviors query with, e.g. `button.lang-btn[data-lang="en"]`, and are
//! kept in insertion order, which tests treat as document order. Queries
//! also understand descendant combinators and `:not(...)`. Clones share the
//! same document.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{Dom, Rect};

pub type NodeId = usize;

#[derive(Debug, Default)]
struct Element {
    tag: String,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    parent: Option<NodeId>,
    content: String,
    content_is_markup: bool,
    placeholder: String,
    value: String,
    style: BTreeMap<String, String>,
    offset_top: f64,
    rect: Rect,
    scrolled_into_view: usize,
}

#[derive(Clone, Default)]
pub struct FakeDom {
    nodes: Rc<RefCell<Vec<Element>>>,
    title: Rc<RefCell<String>>,
    lang: Rc<RefCell<String>>,
}

enum AttrTest {
    Exists,
    Equals(String),
    Prefix(String),
}

#[derive(Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, AttrTest)>,
    not: Vec<Compound>,
}

/// Compounds joined by descendant combinators, outermost first.
type Chain = Vec<Compound>;

/// Splits on `at` outside brackets, parentheses and quotes.
fn split_top_level(source: &str, at: impl Fn(char) -> bool) -> Vec<String> {
    let mut parts = vec![String::new()];
    let mut depth = 0usize;
    let mut quote = None;
    for c in source.chars() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '[' | '(') => depth += 1,
            (None, ']' | ')') => depth = depth.saturating_sub(1),
            (None, _) if depth == 0 && at(c) => {
                parts.push(String::new());
                continue;
            }
            _ => {}
        }
        if let Some(part) = parts.last_mut() {
            part.push(c);
        }
    }
    parts
}

fn ident(chars: &[char], pos: &mut usize) -> Option<String> {
    let start = *pos;
    while *pos < chars.len() && (chars[*pos].is_alphanumeric() || matches!(chars[*pos], '-' | '_')) {
        *pos += 1;
    }
    (*pos > start).then(|| chars[start..*pos].iter().collect())
}

fn attr_value(chars: &[char], pos: &mut usize) -> Option<String> {
    match chars.get(*pos).copied() {
        Some(quote) if quote == '"' || quote == '\'' => {
            *pos += 1;
            let start = *pos;
            while *pos < chars.len() && chars[*pos] != quote {
                *pos += 1;
            }
            let value = chars.get(start..*pos)?.iter().collect();
            *pos += 1;
            Some(value)
        }
        _ => {
            let start = *pos;
            while *pos < chars.len() && chars[*pos] != ']' {
                *pos += 1;
            }
            Some(chars[start..*pos].iter().collect())
        }
    }
}

fn parse_compound(source: &str) -> Option<Compound> {
    let chars: Vec<char> = source.trim().chars().collect();
    let mut pos = 0;
    let mut compound = Compound::default();
    if chars.first().is_some_and(|c| c.is_alphabetic()) {
        compound.tag = ident(&chars, &mut pos);
    }
    while pos < chars.len() {
        let marker = chars[pos];
        pos += 1;
        match marker {
            '#' => compound.id = Some(ident(&chars, &mut pos)?),
            ':' => {
                let rest: String = chars[pos..].iter().collect();
                if !rest.starts_with("not(") {
                    return None;
                }
                pos += 4;
                let mut depth = 1;
                let start = pos;
                while pos < chars.len() {
                    match chars[pos] {
                        '(' => depth += 1,
                        ')' => depth -= 1,
                        _ => {}
                    }
                    if depth == 0 {
                        break;
                    }
                    pos += 1;
                }
                let inner: String = chars.get(start..pos)?.iter().collect();
                if chars.get(pos) != Some(&')') {
                    return None;
                }
                pos += 1;
                compound.not.push(parse_compound(&inner)?);
            }
            '.' => compound.classes.push(ident(&chars, &mut pos)?),
            '[' => {
                let name = ident(&chars, &mut pos)?;
                let test = match chars.get(pos)? {
                    ']' => AttrTest::Exists,
                    '=' => {
                        pos += 1;
                        AttrTest::Equals(attr_value(&chars, &mut pos)?)
                    }
                    '^' if chars.get(pos + 1) == Some(&'=') => {
                        pos += 2;
                        AttrTest::Prefix(attr_value(&chars, &mut pos)?)
                    }
                    _ => return None,
                };
                if chars.get(pos) != Some(&']') {
                    return None;
                }
                pos += 1;
                compound.attrs.push((name, test));
            }
            _ => return None,
        }
    }
    let empty = compound.tag.is_none()
        && compound.id.is_none()
        && compound.classes.is_empty()
        && compound.attrs.is_empty()
        && compound.not.is_empty();
    (!empty).then_some(compound)
}

fn parse_chain(source: &str) -> Option<Chain> {
    let chain: Option<Chain> = split_top_level(source, char::is_whitespace)
        .iter()
        .filter(|part| !part.is_empty())
        .map(|part| parse_compound(part))
        .collect();
    chain.filter(|chain| !chain.is_empty())
}

/// Parses a comma-separated selector list; `None` if any part is invalid.
fn parse_list(selector: &str) -> Option<Vec<Chain>> {
    split_top_level(selector, |c| c == ',')
        .iter()
        .map(|part| parse_chain(part))
        .collect()
}

/// Whether `id` matches the last compound of `chain` and its ancestors,
/// nearest first, match the rest.
fn chain_matches(nodes: &[Element], id: NodeId, chain: &[Compound]) -> bool {
    let Some((last, mut remaining)) = chain.split_last() else {
        return false;
    };
    if !last.matches(&nodes[id]) {
        return false;
    }
    let mut current = nodes[id].parent;
    while let Some((needed, rest)) = remaining.split_last() {
        loop {
            let Some(ancestor) = current else {
                return false;
            };
            current = nodes[ancestor].parent;
            if needed.matches(&nodes[ancestor]) {
                break;
            }
        }
        remaining = rest;
    }
    true
}

impl Compound {
    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !tag.eq_ignore_ascii_case(&element.tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.attrs.get("id") != Some(id) {
                return false;
            }
        }
        if !self.classes.iter().all(|class| element.classes.contains(class)) {
            return false;
        }
        let attrs_match = self.attrs.iter().all(|(name, test)| match (element.attrs.get(name), test) {
            (None, _) => false,
            (Some(_), AttrTest::Exists) => true,
            (Some(value), AttrTest::Equals(expected)) => value == expected,
            (Some(value), AttrTest::Prefix(prefix)) => value.starts_with(prefix.as_str()),
        });
        attrs_match && !self.not.iter().any(|excluded| excluded.matches(element))
    }
}

impl FakeDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element described by a compound selector under `parent`.
    pub fn add(&self, parent: Option<NodeId>, markup: &str) -> NodeId {
        let compound = parse_compound(markup).expect("invalid element markup");
        let mut attrs: BTreeMap<String, String> = compound
            .attrs
            .into_iter()
            .map(|(name, test)| {
                let value = match test {
                    AttrTest::Exists => String::new(),
                    AttrTest::Equals(value) | AttrTest::Prefix(value) => value,
                };
                (name, value)
            })
            .collect();
        if let Some(id) = compound.id {
            attrs.insert("id".to_string(), id);
        }
        let value = attrs.get("value").cloned().unwrap_or_default();
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Element {
            tag: compound.tag.unwrap_or_else(|| "div".to_string()).to_uppercase(),
            attrs,
            classes: compound.classes,
            parent,
            value,
            ..Element::default()
        });
        nodes.len() - 1
    }

    pub fn find(&self, selector: &str) -> NodeId {
        self.select(selector).expect("no element matches selector")
    }

    pub fn content(&self, node: NodeId) -> String {
        self.nodes.borrow()[node].content.clone()
    }

    pub fn content_is_markup(&self, node: NodeId) -> bool {
        self.nodes.borrow()[node].content_is_markup
    }

    pub fn placeholder(&self, node: NodeId) -> String {
        self.nodes.borrow()[node].placeholder.clone()
    }

    pub fn value(&self, node: NodeId) -> String {
        self.nodes.borrow()[node].value.clone()
    }

    pub fn set_value(&self, node: NodeId, value: &str) {
        self.nodes.borrow_mut()[node].value = value.to_string();
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[node].style.get(property).cloned()
    }

    pub fn set_offset_top(&self, node: NodeId, top: f64) {
        self.nodes.borrow_mut()[node].offset_top = top;
    }

    pub fn set_rect(&self, node: NodeId, rect: Rect) {
        self.nodes.borrow_mut()[node].rect = rect;
    }

    pub fn scroll_count(&self, node: NodeId) -> usize {
        self.nodes.borrow()[node].scrolled_into_view
    }

    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }

    pub fn lang(&self) -> String {
        self.lang.borrow().clone()
    }

    fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = nodes[node].parent;
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = nodes[id].parent;
        }
        false
    }

    fn matching(&self, selector: &str, keep: impl Fn(NodeId) -> bool) -> Vec<NodeId> {
        let Some(list) = parse_list(selector) else {
            return Vec::new();
        };
        let count = self.nodes.borrow().len();
        (0..count)
            .filter(|&id| keep(id))
            .filter(|&id| {
                let nodes = self.nodes.borrow();
                list.iter().any(|chain| chain_matches(&nodes, id, chain))
            })
            .collect()
    }
}

impl Dom for FakeDom {
    type Node = NodeId;

    fn select_all(&self, selector: &str) -> Vec<NodeId> {
        self.matching(selector, |_| true)
    }

    fn select_within(&self, scope: &NodeId, selector: &str) -> Vec<NodeId> {
        self.matching(selector, |id| self.is_descendant(id, *scope))
    }

    fn closest(&self, node: &NodeId, selector: &str) -> Option<NodeId> {
        let list = parse_list(selector)?;
        let nodes = self.nodes.borrow();
        let mut current = Some(*node);
        while let Some(id) = current {
            if list.iter().any(|chain| chain_matches(&nodes, id, chain)) {
                return Some(id);
            }
            current = nodes[id].parent;
        }
        None
    }

    fn attr(&self, node: &NodeId, name: &str) -> Option<String> {
        let nodes = self.nodes.borrow();
        let element = &nodes[*node];
        if name == "class" {
            return Some(element.classes.join(" "));
        }
        element.attrs.get(name).cloned()
    }

    fn tag_name(&self, node: &NodeId) -> String {
        self.nodes.borrow()[*node].tag.clone()
    }

    fn set_inner_html(&self, node: &NodeId, html: &str) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[*node].content = html.to_string();
        nodes[*node].content_is_markup = true;
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[*node].content = text.to_string();
        nodes[*node].content_is_markup = false;
    }

    fn set_placeholder(&self, node: &NodeId, text: &str) {
        self.nodes.borrow_mut()[*node].placeholder = text.to_string();
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[*node].classes.iter().any(|c| c == class)
    }

    fn set_class(&self, node: &NodeId, class: &str, on: bool) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[*node].classes;
        classes.retain(|c| c != class);
        if on {
            classes.push(class.to_string());
        }
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        if value.is_empty() {
            nodes[*node].style.remove(property);
        } else {
            nodes[*node].style.insert(property.to_string(), value.to_string());
        }
    }

    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }

    fn set_lang(&self, lang: &str) {
        *self.lang.borrow_mut() = lang.to_string();
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.nodes.borrow()[*node].offset_top
    }

    fn bounding_rect(&self, node: &NodeId) -> Rect {
        self.nodes.borrow()[*node].rect
    }

    fn reset_form(&self, form: &NodeId) {
        for control in self.select_within(form, "input, textarea, select") {
            let mut nodes = self.nodes.borrow_mut();
            let initial = nodes[control].attrs.get("value").cloned().unwrap_or_default();
            nodes[control].value = initial;
        }
    }

    fn scroll_into_view(&self, node: &NodeId) {
        self.nodes.borrow_mut()[*node].scrolled_into_view += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_lists_match_in_insertion_order() {
        let dom = FakeDom::new();
        let hero = dom.add(None, "section#home.hero");
        let about = dom.add(None, "section#about.section");
        dom.add(None, "div.footer");
        assert_eq!(dom.select_all(".section, .hero"), vec![hero, about]);
    }

    #[test]
    fn attribute_tests_and_invalid_selectors() {
        let dom = FakeDom::new();
        let link = dom.add(None, r##"a[href="#about"]"##);
        dom.add(None, r#"a[href="https://example.com"]"#);
        assert_eq!(dom.select_all(r##"a[href^="#"]"##), vec![link]);
        assert!(dom.select("#").is_none());
        assert!(dom.select("").is_none());
    }

    #[test]
    fn closest_walks_up_from_the_node_itself() {
        let dom = FakeDom::new();
        let item = dom.add(None, "div.faq-item");
        let question = dom.add(Some(item), "button.faq-question");
        let label = dom.add(Some(question), "span");
        assert_eq!(dom.closest(&label, ".faq-item"), Some(item));
        assert_eq!(dom.closest(&question, ".faq-question"), Some(question));
        assert_eq!(dom.closest(&item, ".faq-question"), None);
    }

    #[test]
    fn descendant_chains_and_negation() {
        let dom = FakeDom::new();
        let list = dom.add(None, "ul.nav-links");
        let item = dom.add(Some(list), "li");
        let about = dom.add(Some(item), r##"a[href="#about"]"##);
        let cta = dom.add(Some(item), r##"a.nav-cta[href="#contact"]"##);
        let outside = dom.add(None, r##"a[href="#home"]"##);

        assert_eq!(dom.select_all(".nav-links a"), vec![about, cta]);
        assert_eq!(dom.select_all(".nav-links a:not(.nav-cta)"), vec![about]);
        assert_eq!(dom.select_all("a:not(.nav-cta)"), vec![about, outside]);
        assert!(dom.select_all("ul li a.missing").is_empty());
        assert!(dom.select(".nav-links a:not(").is_none());
    }
}
