//! Serialization of an [`ApiDocument`] as XML or JSON.
//!
//! The XML layout is consumed by a stylesheet and diffed between runs, so
//! attribute order and presence are fixed.

use crate::document::{ApiDocument, ElementTypeEntry, KindEntry, PropertyEntry, PropertyType};
use crate::error::OutputError;
use docdump_types::{DocElement, DocFragment, DocNode};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use std::io::Write;

const STYLESHEET_PI: &str = "xml-stylesheet type='text/xsl' href='style.xsl'";

/// Writes the document as indented XML.
pub struct XmlDocumentWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> XmlDocumentWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: Writer::new_with_indent(inner, b' ', 2),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    pub fn write(&mut self, document: &ApiDocument) -> Result<(), OutputError> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        self.writer
            .write_event(Event::PI(BytesPI::new(STYLESHEET_PI)))?;
        self.writer.write_event(Event::Start(BytesStart::new("types")))?;
        for kind in &document.types {
            self.write_kind(kind)?;
        }
        self.writer.write_event(Event::End(BytesEnd::new("types")))?;
        self.writer.get_mut().write_all(b"\n")?;
        Ok(())
    }

    fn write_kind(&mut self, kind: &KindEntry) -> Result<(), OutputError> {
        let mut start = BytesStart::new("type");
        start.push_attribute(("kind", kind.kind.as_str()));
        start.push_attribute(("assembly", kind.assembly.as_str()));
        start.push_attribute(("clrType", kind.clr_type.as_str()));
        if let Some(name) = &kind.name {
            start.push_attribute(("name", name.as_str()));
        }
        start.push_attribute(("slug", kind.slug.as_str()));
        start.push_attribute(("title", kind.title.as_str()));
        if kind.advanced {
            start.push_attribute(("advanced", "1"));
        }
        if kind.is_compound {
            start.push_attribute(("iscompound", "1"));
        }
        if kind.is_wrapper {
            start.push_attribute(("iswrapper", "1"));
        }

        self.write_members(start, kind.doc.as_ref(), &kind.properties)
    }

    /// Writes `start`, the optional documentation and the properties, then
    /// closes the element. Childless elements are written empty.
    fn write_members(
        &mut self,
        start: BytesStart<'_>,
        doc: Option<&DocFragment>,
        properties: &[PropertyEntry],
    ) -> Result<(), OutputError> {
        if doc.is_none() && properties.is_empty() {
            self.writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        let end = start.to_end().into_owned();
        self.writer.write_event(Event::Start(start))?;
        if let Some(doc) = doc {
            self.write_doc(doc)?;
        }
        for prop in properties {
            self.write_property(prop)?;
        }
        self.writer.write_event(Event::End(end))?;
        Ok(())
    }

    fn write_property(&mut self, prop: &PropertyEntry) -> Result<(), OutputError> {
        let mut start = BytesStart::new("property");
        start.push_attribute(("name", prop.name.as_str()));
        start.push_attribute(("camelName", prop.camel_name.as_str()));
        if let Some(default_value) = &prop.default_value {
            start.push_attribute(("defaultValue", default_value.as_str()));
        }
        start.push_attribute(("category", prop.category.as_str()));
        if prop.advanced {
            start.push_attribute(("advanced", "1"));
        }
        start.push_attribute(("required", if prop.required { "1" } else { "0" }));
        start.push_attribute(("type", prop.property_type.label()));
        if let PropertyType::Enum { enum_type, .. } = &prop.property_type {
            start.push_attribute(("enumType", enum_type.as_str()));
        }

        let has_children = prop.doc.is_some()
            || match &prop.property_type {
                PropertyType::Enum { members, .. } => !members.is_empty(),
                PropertyType::Collection { .. } => true,
                _ => false,
            };
        if !has_children {
            self.writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        self.writer.write_event(Event::Start(start))?;
        match &prop.property_type {
            PropertyType::Enum { members, .. } => {
                for member in members {
                    let mut start = BytesStart::new("enum");
                    start.push_attribute(("name", member.name.as_str()));
                    self.write_members(start, member.doc.as_ref(), &[])?;
                }
            }
            PropertyType::Collection { element_type } => self.write_element_type(element_type)?,
            _ => {}
        }
        if let Some(doc) = &prop.doc {
            self.write_doc(doc)?;
        }
        self.writer.write_event(Event::End(BytesEnd::new("property")))?;
        Ok(())
    }

    fn write_element_type(&mut self, element: &ElementTypeEntry) -> Result<(), OutputError> {
        let mut start = BytesStart::new("elementType");
        start.push_attribute(("name", element.name.as_str()));
        start.push_attribute(("elementTag", element.element_tag.as_str()));
        if element.recursive {
            start.push_attribute(("recursive", "1"));
        }
        self.write_members(start, element.doc.as_ref(), &element.properties)
    }

    /// Writes `<doc>` with its content unindented, so mixed content keeps
    /// exactly the whitespace the normalizer left in it.
    fn write_doc(&mut self, doc: &DocFragment) -> Result<(), OutputError> {
        if doc.children.is_empty() {
            self.writer.write_event(Event::Empty(BytesStart::new("doc")))?;
            return Ok(());
        }
        self.writer.write_event(Event::Start(BytesStart::new("doc")))?;
        write_nodes(&mut Writer::new(self.writer.get_mut()), &doc.children)?;
        // An empty text event suppresses the line break before `</doc>`.
        self.writer.write_event(Event::Text(BytesText::new("")))?;
        self.writer.write_event(Event::End(BytesEnd::new("doc")))?;
        Ok(())
    }
}

fn write_nodes<W: Write>(writer: &mut Writer<W>, nodes: &[DocNode]) -> Result<(), OutputError> {
    for node in nodes {
        match node {
            DocNode::Text(text) => {
                writer.write_event(Event::Text(BytesText::new(text)))?;
            }
            DocNode::Element(el) => write_element(writer, el)?,
        }
    }
    Ok(())
}

fn write_element<W: Write>(writer: &mut Writer<W>, el: &DocElement) -> Result<(), OutputError> {
    let mut start = BytesStart::new(el.name.as_str());
    for (key, value) in &el.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    if el.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }
    writer.write_event(Event::Start(start))?;
    write_nodes(writer, &el.children)?;
    writer.write_event(Event::End(BytesEnd::new(el.name.as_str())))?;
    Ok(())
}

/// Writes the document as pretty-printed JSON.
pub fn write_json<W: Write>(mut writer: W, document: &ApiDocument) -> Result<(), OutputError> {
    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.write_all(b"\n")?;
    Ok(())
}
