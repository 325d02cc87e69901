//! An owned markup tree for one documentation entry.
//!
//! A fragment holds the *content* of a store entry (the children of its
//! `<member>` element), so `summary`, `remarks`, `docgen` and friends are
//! top-level elements of the fragment.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DocNode {
    Element(DocElement),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DocElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<DocNode>,
}

impl DocElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(DocNode::Text(text.into()));
        self
    }

    pub fn with_child(mut self, child: DocElement) -> Self {
        self.children.push(DocNode::Element(child));
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets an attribute, replacing any existing value in place.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let index = self.attributes.iter().position(|(key, _)| key == name)?;
        Some(self.attributes.remove(index).1)
    }

    pub fn elements(&self) -> impl Iterator<Item = &DocElement> {
        self.children.iter().filter_map(|node| match node {
            DocNode::Element(el) => Some(el),
            DocNode::Text(_) => None,
        })
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(nodes: &[DocNode], out: &mut String) {
    for node in nodes {
        match node {
            DocNode::Text(t) => out.push_str(t),
            DocNode::Element(el) => collect_text(&el.children, out),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DocFragment {
    pub children: Vec<DocNode>,
}

impl DocFragment {
    pub fn new(children: Vec<DocNode>) -> Self {
        Self { children }
    }

    pub fn elements(&self) -> impl Iterator<Item = &DocElement> {
        self.children.iter().filter_map(|node| match node {
            DocNode::Element(el) => Some(el),
            DocNode::Text(_) => None,
        })
    }

    /// First top-level element with the given name.
    pub fn element(&self, name: &str) -> Option<&DocElement> {
        self.elements().find(|el| el.name == name)
    }

    pub fn element_mut(&mut self, name: &str) -> Option<&mut DocElement> {
        self.children.iter_mut().find_map(|node| match node {
            DocNode::Element(el) if el.name == name => Some(el),
            _ => None,
        })
    }

    /// All elements reached by following `path` one child step at a time,
    /// e.g. `["docgen", "categories", "category"]`.
    pub fn select(&self, path: &[&str]) -> Vec<&DocElement> {
        let Some((first, rest)) = path.split_first() else {
            return Vec::new();
        };
        let mut current: Vec<&DocElement> =
            self.elements().filter(|el| el.name == *first).collect();
        for step in rest {
            current = current
                .into_iter()
                .flat_map(|el| el.elements().filter(|child| child.name == *step))
                .collect();
        }
        current
    }
}
