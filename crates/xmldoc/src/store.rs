// XML documentation store implementation using roxmltree
use crate::error::XmlDocError;
use docdump_traits::DocumentationStore;
use docdump_types::{DocElement, DocFragment, DocId, DocNode};
use roxmltree::Node;
use std::collections::HashMap;
use std::path::Path;

/// Documentation entries parsed from one XML documentation-comment file.
///
/// roxmltree borrows its input, so entries are converted into owned
/// [`DocFragment`]s at load time and the source text can be dropped.
#[derive(Debug)]
pub struct XmlDocumentationStore {
    name: String,
    entries: HashMap<DocId, DocFragment>,
}

impl XmlDocumentationStore {
    /// Parses documentation text. `name` identifies the store in logs.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, XmlDocError> {
        let name = name.into();
        let doc = roxmltree::Document::parse(text)?;
        let mut entries = HashMap::new();

        let root = doc.root_element();
        if root.tag_name().name() != "doc" {
            log::warn!(
                "Documentation file '{}' has root <{}>, expected <doc>; no entries loaded.",
                name,
                root.tag_name().name()
            );
        } else {
            let members = root
                .children()
                .filter(|n| n.has_tag_name("members"))
                .flat_map(|n| n.children())
                .filter(|n| n.has_tag_name("member"));

            for member in members {
                let Some(id) = member.attribute("name") else {
                    continue;
                };
                let fragment = DocFragment::new(convert_children(member));
                entries.entry(DocId::from(id)).or_insert(fragment);
            }
        }

        log::debug!("Loaded {} documentation entries from '{}'", entries.len(), name);
        Ok(Self { name, entries })
    }

    /// Loads and parses a documentation file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, XmlDocError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| XmlDocError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path.display().to_string(), &text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DocumentationStore for XmlDocumentationStore {
    fn lookup(&self, id: &DocId) -> Option<&DocFragment> {
        self.entries.get(id)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn convert_children(node: Node<'_, '_>) -> Vec<DocNode> {
    node.children().filter_map(convert_node).collect()
}

/// Elements and non-blank text survive; comments, processing instructions
/// and whitespace-only text between elements are dropped.
fn convert_node(node: Node<'_, '_>) -> Option<DocNode> {
    if node.is_element() {
        let attributes = node
            .attributes()
            .map(|attr| (attr.name().to_string(), attr.value().to_string()))
            .collect();
        Some(DocNode::Element(DocElement {
            name: node.tag_name().name().to_string(),
            attributes,
            children: convert_children(node),
        }))
    } else if node.is_text() {
        let text = node.text().unwrap_or("");
        if text.trim().is_empty() {
            None
        } else {
            Some(DocNode::Text(text.to_string()))
        }
    } else {
        None
    }
}
