//! Descriptors for the types and properties of a loaded type library.
//!
//! These are plain data: a library loader fills them in once and the
//! compiler only ever reads them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A positional constructor argument of an attribute annotation.
///
/// Manifests write these as bare JSON values; a type reference is written as
/// `{"type": "Full.Type.Name"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Type {
        #[serde(rename = "type")]
        type_name: String,
    },
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_type_name(&self) -> Option<&str> {
        match self {
            AttrValue::Type { type_name } => Some(type_name),
            _ => None,
        }
    }
}

/// Culture-invariant rendering, as used for default values in the output.
impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Null => Ok(()),
            AttrValue::Bool(true) => f.write_str("True"),
            AttrValue::Bool(false) => f.write_str("False"),
            AttrValue::Int(n) => write!(f, "{}", n),
            AttrValue::Float(n) => write_float(f, *n),
            AttrValue::Str(s) => f.write_str(s),
            AttrValue::Type { type_name } => f.write_str(type_name),
        }
    }
}

/// Shortest round-trip digits, switching to `E+XX` exponent notation when the
/// decimal exponent is below -4 or above 14.
fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }

    let scientific = format!("{:e}", n);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if (-4..15).contains(&exponent) {
        write!(f, "{}", n)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{}E{}{:02}", mantissa, sign, exponent.abs())
    }
}

/// An attribute annotation: the attribute's type identity plus its
/// positional constructor arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub kind: String,
    #[serde(default)]
    pub args: Vec<AttrValue>,
}

impl Attribute {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: AttrValue) -> Self {
        self.args.push(arg);
        self
    }

    pub fn arg(&self, index: usize) -> Option<&AttrValue> {
        self.args.get(index)
    }
}

fn default_true() -> bool {
    true
}

/// A declared instance property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    pub name: String,
    /// Full name of the declared value type.
    pub value_type: String,
    #[serde(default = "default_true")]
    pub can_read: bool,
    #[serde(default = "default_true")]
    pub can_write: bool,
    /// Only meaningful when `can_write` is set.
    #[serde(default = "default_true")]
    pub public_setter: bool,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Full name of the type that declares this property. Filled in by the
    /// library loader; differs from the owning type for inherited properties.
    #[serde(default)]
    pub declaring_type: String,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, value_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_type: value_type.into(),
            can_read: true,
            can_write: true,
            public_setter: true,
            attributes: Vec::new(),
            declaring_type: String::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn read_only(mut self) -> Self {
        self.can_write = false;
        self
    }

    pub fn has_public_accessors(&self) -> bool {
        self.can_read && self.can_write && self.public_setter
    }

    pub fn find_attribute(&self, kind: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.kind == kind)
    }

    pub fn has_attribute(&self, kind: &str) -> bool {
        self.find_attribute(kind).is_some()
    }
}

/// A declared type in a loaded library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    pub full_name: String,
    /// Name of the owning library. Filled in by the library loader.
    #[serde(default)]
    pub library: String,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_enum: bool,
    #[serde(default)]
    pub base_type: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Properties declared directly on this type.
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
    /// Public static fields, in declaration order. Only enumerations have them.
    #[serde(default)]
    pub enum_members: Vec<String>,
}

impl TypeDescriptor {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            library: String::new(),
            is_abstract: false,
            is_enum: false,
            base_type: None,
            attributes: Vec::new(),
            properties: Vec::new(),
            enum_members: Vec::new(),
        }
    }

    pub fn short_name(&self) -> &str {
        short_name(&self.full_name)
    }

    pub fn find_attribute(&self, kind: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.kind == kind)
    }

    pub fn has_attribute(&self, kind: &str) -> bool {
        self.find_attribute(kind).is_some()
    }
}

/// The unqualified name of a type: the part after the last namespace or
/// nesting separator.
pub fn short_name(full_name: &str) -> &str {
    full_name
        .rsplit(['.', '+'])
        .next()
        .unwrap_or(full_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_strips_namespace_and_nesting() {
        assert_eq!(short_name("NLog.Targets.FileTarget"), "FileTarget");
        assert_eq!(
            short_name("NLog.Layouts.CsvLayout+ColumnDelimiterMode"),
            "ColumnDelimiterMode"
        );
        assert_eq!(short_name("Plain"), "Plain");
    }

    #[test]
    fn test_attr_value_invariant_display() {
        assert_eq!(AttrValue::Bool(true).to_string(), "True");
        assert_eq!(AttrValue::Bool(false).to_string(), "False");
        assert_eq!(AttrValue::Int(-3).to_string(), "-3");
        assert_eq!(AttrValue::Float(1.5).to_string(), "1.5");
        assert_eq!(AttrValue::Null.to_string(), "");
        assert_eq!(AttrValue::Str("utf-8".into()).to_string(), "utf-8");
    }

    #[test]
    fn test_float_display_uses_exponent_outside_fixed_range() {
        assert_eq!(AttrValue::Float(1e20).to_string(), "1E+20");
        assert_eq!(AttrValue::Float(1e15).to_string(), "1E+15");
        assert_eq!(AttrValue::Float(1e14).to_string(), "100000000000000");
        assert_eq!(AttrValue::Float(-2.5e16).to_string(), "-2.5E+16");
        assert_eq!(AttrValue::Float(0.0001).to_string(), "0.0001");
        assert_eq!(AttrValue::Float(0.00001).to_string(), "1E-05");
        assert_eq!(AttrValue::Float(1.5e-7).to_string(), "1.5E-07");
        assert_eq!(AttrValue::Float(1.5e-300).to_string(), "1.5E-300");
        assert_eq!(AttrValue::Float(0.0).to_string(), "0");
        assert_eq!(AttrValue::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(AttrValue::Float(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn test_manifest_values_deserialize() {
        let attr: Attribute = serde_json::from_str(
            r#"{"kind": "NLog.Config.ArrayParameterAttribute", "args": [{"type": "NLog.Targets.MethodCallParameter"}, "parameter"]}"#,
        )
        .unwrap();
        assert_eq!(
            attr.arg(0).and_then(AttrValue::as_type_name),
            Some("NLog.Targets.MethodCallParameter")
        );
        assert_eq!(attr.arg(1).and_then(AttrValue::as_str), Some("parameter"));

        let values: Vec<AttrValue> = serde_json::from_str("[null, true, 7, 2.5]").unwrap();
        assert_eq!(
            values,
            vec![
                AttrValue::Null,
                AttrValue::Bool(true),
                AttrValue::Int(7),
                AttrValue::Float(2.5)
            ]
        );
    }

    #[test]
    fn test_property_defaults_to_public_accessors() {
        let prop: PropertyDescriptor =
            serde_json::from_str(r#"{"name": "FileName", "valueType": "NLog.Layouts.Layout"}"#)
                .unwrap();
        assert!(prop.has_public_accessors());
        assert!(!prop.clone().read_only().has_public_accessors());
    }
}
