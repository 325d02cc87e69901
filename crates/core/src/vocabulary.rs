//! The annotation and naming vocabulary the compiler recognises.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four categories of documented kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocKind {
    Target,
    Layout,
    LayoutRenderer,
    Filter,
}

impl DocKind {
    /// The kind identifier written to the document and used for slugs.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocKind::Target => "target",
            DocKind::Layout => "layout",
            DocKind::LayoutRenderer => "layout-renderer",
            DocKind::Filter => "filter",
        }
    }

    pub fn title_prefix(&self) -> &'static str {
        match self {
            DocKind::LayoutRenderer => "${",
            _ => "",
        }
    }

    pub fn title_suffix(&self) -> &'static str {
        match self {
            DocKind::Target => " target",
            DocKind::Layout => "",
            DocKind::LayoutRenderer => "}",
            DocKind::Filter => " filter",
        }
    }

    pub fn title(&self, name: &str) -> String {
        format!("{}{}{}", self.title_prefix(), name, self.title_suffix())
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A marker annotation that makes a type a documented kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub kind: DocKind,
    pub attribute: String,
}

impl Marker {
    pub fn new(kind: DocKind, attribute: impl Into<String>) -> Self {
        Self {
            kind,
            attribute: attribute.into(),
        }
    }
}

/// Attribute identities, name rules and base-type names that drive
/// discovery and classification.
///
/// The default matches NLog's configuration attributes, including the
/// legacy 1.0 marker set. A vocabulary can also be read from JSON; missing
/// fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vocabulary {
    /// Processed in order; each marker produces one run of kinds.
    pub markers: Vec<Marker>,
    pub advanced: String,
    pub required: String,
    pub accepts_layout: String,
    pub accepts_condition: String,
    pub default_value: String,
    /// Collection declaration: `(element type, element tag)`.
    pub array_parameter: String,
    pub excluded_properties: Vec<String>,
    pub excluded_property_prefix: String,
    /// Value types that make a `…Layout` property a redundant alias.
    pub layout_type_prefixes: Vec<String>,
    /// Value types that make a `…Condition` property a redundant alias.
    pub condition_type_prefixes: Vec<String>,
    pub compound_bases: Vec<String>,
    pub wrapper_bases: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            markers: vec![
                Marker::new(DocKind::Target, "NLog.Targets.TargetAttribute"),
                Marker::new(DocKind::Layout, "NLog.Layouts.LayoutAttribute"),
                Marker::new(
                    DocKind::LayoutRenderer,
                    "NLog.LayoutRenderers.LayoutRendererAttribute",
                ),
                Marker::new(DocKind::Filter, "NLog.Filters.FilterAttribute"),
                Marker::new(DocKind::Target, "NLog.TargetAttribute"),
                Marker::new(DocKind::Layout, "NLog.LayoutAttribute"),
                Marker::new(DocKind::LayoutRenderer, "NLog.LayoutRendererAttribute"),
                Marker::new(DocKind::Filter, "NLog.FilterAttribute"),
            ],
            advanced: "NLog.Config.AdvancedAttribute".to_string(),
            required: "NLog.Config.RequiredParameterAttribute".to_string(),
            accepts_layout: "NLog.Config.AcceptsLayoutAttribute".to_string(),
            accepts_condition: "NLog.Config.AcceptsConditionAttribute".to_string(),
            default_value: "System.ComponentModel.DefaultValueAttribute".to_string(),
            array_parameter: "NLog.Config.ArrayParameterAttribute".to_string(),
            excluded_properties: strings(&["CultureInfo", "WrappedTarget"]),
            excluded_property_prefix: "Compiled".to_string(),
            layout_type_prefixes: strings(&["NLog.ILayout", "NLog.Layout"]),
            condition_type_prefixes: strings(&["NLog.Conditions.ConditionExpression"]),
            compound_bases: strings(&["CompoundTargetBase"]),
            wrapper_bases: strings(&["WrapperTargetBase", "WrapperLayoutRendererBase"]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Vocabulary {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub(crate) fn is_layout_type(&self, full_name: &str) -> bool {
        self.layout_type_prefixes
            .iter()
            .any(|p| full_name.starts_with(p.as_str()))
    }

    pub(crate) fn is_condition_type(&self, full_name: &str) -> bool {
        self.condition_type_prefixes
            .iter()
            .any(|p| full_name.starts_with(p.as_str()))
    }
}
