//! The assembled documentation tree.
//!
//! Built once by the [`Compiler`](crate::Compiler) and handed to a writer;
//! nothing in here refers back to the type descriptors it came from.

use crate::vocabulary::DocKind;
use docdump_types::DocFragment;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ApiDocument {
    pub types: Vec<KindEntry>,
}

/// One documented kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KindEntry {
    pub kind: DocKind,
    /// Owning library name.
    pub assembly: String,
    pub clr_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub slug: String,
    pub title: String,
    pub advanced: bool,
    pub is_compound: bool,
    pub is_wrapper: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<DocFragment>,
    pub properties: Vec<PropertyEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyEntry {
    pub name: String,
    pub camel_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    pub category: String,
    pub order: i32,
    pub advanced: bool,
    pub required: bool,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<DocFragment>,
}

/// The resolved semantic type of a property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PropertyType {
    Encoding,
    Layout,
    Condition,
    Enum {
        enum_type: String,
        members: Vec<EnumMemberEntry>,
    },
    Collection {
        element_type: ElementTypeEntry,
    },
    Plain {
        type_name: String,
    },
}

impl PropertyType {
    /// The value of the `type` attribute in the XML document.
    pub fn label(&self) -> &str {
        match self {
            PropertyType::Encoding => "Encoding",
            PropertyType::Layout => "Layout",
            PropertyType::Condition => "Condition",
            PropertyType::Enum { .. } => "Enum",
            PropertyType::Collection { .. } => "Collection",
            PropertyType::Plain { type_name } => type_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumMemberEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<DocFragment>,
}

/// The nested documentation of a collection's element type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementTypeEntry {
    pub name: String,
    pub element_tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<DocFragment>,
    pub properties: Vec<PropertyEntry>,
    /// Set when expansion stopped because the element type was already
    /// being expanded further up.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub recursive: bool,
}
