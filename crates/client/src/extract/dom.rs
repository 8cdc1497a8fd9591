//! Library-neutral document tree.
//!
//! Extraction rules run over this tree only, so the HTML parser behind
//! [`PageParser`] can be swapped without touching them.

use scraper::{ElementRef, Html};

/// A child of an element: either a nested element or a raw text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Element(Node),
    Text(String),
}

/// An element with its lowercase tag name and children in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub tag: String,
    pub children: Vec<Child>,
}

impl Node {
    pub fn new(tag: impl Into<String>, children: Vec<Child>) -> Self {
        Self { tag: tag.into(), children }
    }

    /// Direct element children.
    pub fn elements(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(|c| match c {
            Child::Element(node) => Some(node),
            Child::Text(_) => None,
        })
    }

    /// Descendants (not including `self`) whose tag is in `tags`, in document order.
    pub fn find_all<'a>(&'a self, tags: &[&str]) -> Vec<&'a Node> {
        let mut found = Vec::new();
        self.collect_matching(tags, &mut found);
        found
    }

    fn collect_matching<'a>(&'a self, tags: &[&str], out: &mut Vec<&'a Node>) {
        for child in self.elements() {
            if tags.contains(&child.tag.as_str()) {
                out.push(child);
            }
            child.collect_matching(tags, out);
        }
    }

    /// All descendant text, concatenated as-is.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out, false);
        out
    }

    /// All descendant text runs, each trimmed, empty runs dropped, concatenated.
    pub fn stripped_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out, true);
        out
    }

    fn collect_text(&self, out: &mut String, strip: bool) {
        for child in &self.children {
            match child {
                Child::Element(node) => node.collect_text(out, strip),
                Child::Text(text) if strip => out.push_str(text.trim()),
                Child::Text(text) => out.push_str(text),
            }
        }
    }
}

/// Turns raw HTML into a [`Node`] tree rooted at `<html>`.
pub trait PageParser: Send + Sync {
    fn parse(&self, html: &str) -> Node;
}

/// [`PageParser`] backed by the `scraper` crate (html5ever).
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperParser;

impl PageParser for ScraperParser {
    fn parse(&self, html: &str) -> Node {
        let document = Html::parse_document(html);
        convert(document.root_element())
    }
}

/// Elements whose contents are code or inert markup, never page text.
const NON_TEXT_TAGS: &[&str] = &["script", "style", "template"];

fn convert(element: ElementRef<'_>) -> Node {
    let tag = element.value().name();
    if NON_TEXT_TAGS.contains(&tag) {
        return Node::new(tag, Vec::new());
    }

    let children = element
        .children()
        .filter_map(|child| match ElementRef::wrap(child) {
            Some(el) => Some(Child::Element(convert(el))),
            None => child.value().as_text().map(|t| Child::Text(String::from(&**t))),
        })
        .collect();

    Node::new(tag, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Node {
        ScraperParser.parse(html)
    }

    #[test]
    fn test_root_is_html() {
        let root = parse("<p>hi</p>");
        assert_eq!(root.tag, "html");
        assert_eq!(root.find_all(&["body"]).len(), 1);
    }

    #[test]
    fn test_find_all_document_order() {
        let root = parse("<table id=a></table><div><table id=b><tr><td><table></table></td></tr></table></div>");
        assert_eq!(root.find_all(&["table"]).len(), 3);
    }

    #[test]
    fn test_find_all_multiple_tags() {
        let root = parse("<table><tr><th>A</th><td>B</td><td>C</td></tr></table>");
        let row = root.find_all(&["tr"])[0];
        let cells: Vec<String> = row
            .find_all(&["td", "th"])
            .iter()
            .map(|c| c.stripped_text())
            .collect();
        assert_eq!(cells, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_text_concatenates_across_elements() {
        let root = parse("<p>更新時間：<span>2026/02/08</span> 20:01:11</p>");
        assert!(root.text().contains("更新時間：2026/02/08 20:01:11"));
    }

    #[test]
    fn test_stripped_text_trims_each_run() {
        let node = Node::new(
            "td",
            vec![
                Child::Text("  基隆".into()),
                Child::Element(Node::new("b", vec![Child::Text(" 市 \n".into())])),
                Child::Text("   ".into()),
            ],
        );
        assert_eq!(node.stripped_text(), "基隆市");
        assert_eq!(node.text(), "  基隆 市 \n   ");
    }

    #[test]
    fn test_script_and_style_are_not_text() {
        let root = parse(
            "<head><style>td::after { content: '縣市名稱'; }</style>\
             <script>var stamp = '更新時間：1999/01/01 00:00:00';</script></head>\
             <body><p>可見</p><template><p>模板</p></template></body>",
        );
        let text = root.text();
        assert!(text.contains("可見"));
        assert!(!text.contains("1999"));
        assert!(!text.contains("縣市名稱"));
        assert!(!text.contains("模板"));
        assert_eq!(root.find_all(&["script"]).len(), 1);
    }

    #[test]
    fn test_comments_are_not_text() {
        let root = parse("<p>a<!-- hidden -->b</p>");
        assert!(root.text().contains("ab"));
        assert!(!root.text().contains("hidden"));
    }
}
