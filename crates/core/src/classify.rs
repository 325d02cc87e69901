//! Property classification: eligibility, categories, ordering and type kinds.
//!
//! A [`Classifier`] turns one type into its ordered list of
//! [`PropertyEntry`]s. Collection properties recurse into their element
//! type with the same rules and a fresh [`CategoryTable`].

use crate::document::{ElementTypeEntry, EnumMemberEntry, PropertyEntry, PropertyType};
use crate::error::CompileError;
use crate::ident::{camel_case, name_order};
use crate::lookup::DocLookup;
use crate::names::TypeNameResolver;
use crate::vocabulary::Vocabulary;
use docdump_traits::TypeCatalog;
use docdump_types::{
    AttrValue, Attribute, DocFragment, DocId, PropertyDescriptor, TypeDescriptor, short_name,
};

/// Categories every table starts with.
pub const BUILTIN_CATEGORIES: [(&str, i32); 2] = [("General Options", 10), ("Layout Options", 20)];

const DEFAULT_CATEGORY: &str = "Other";
const DEFAULT_ORDER: i32 = 100;
const NEW_CATEGORY_BASE: i32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub key: i32,
}

/// Category name to sort key, in insertion order.
///
/// An unseen category gets `100 + len()` as its key, so keys depend on the
/// order in which properties are visited. Ties in the emitted order are
/// broken by insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    entries: Vec<Category>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::seeded()
    }
}

impl CategoryTable {
    /// A table holding only the built-in categories.
    pub fn seeded() -> Self {
        Self {
            entries: BUILTIN_CATEGORIES
                .iter()
                .map(|&(name, key)| Category {
                    name: name.to_string(),
                    key,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn key(&self, name: &str) -> Option<i32> {
        self.entries.iter().find(|c| c.name == name).map(|c| c.key)
    }

    /// Sets an explicit key. An existing category keeps its position.
    pub fn set(&mut self, name: &str, key: i32) {
        match self.entries.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.key = key,
            None => self.entries.push(Category {
                name: name.to_string(),
                key,
            }),
        }
    }

    /// Returns the key for `name`, adding the category first if unseen.
    pub fn register(&mut self, name: &str) -> i32 {
        if let Some(key) = self.key(name) {
            return key;
        }
        let key = NEW_CATEGORY_BASE + self.entries.len() as i32;
        self.entries.push(Category {
            name: name.to_string(),
            key,
        });
        key
    }

    /// Categories by ascending key.
    pub fn ordered(&self) -> Vec<&Category> {
        let mut ordered: Vec<&Category> = self.entries.iter().collect();
        ordered.sort_by_key(|c| c.key);
        ordered
    }
}

/// The documentation and ordered properties of one type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypeMembers {
    pub doc: Option<DocFragment>,
    pub properties: Vec<PropertyEntry>,
}

/// A property with its resolved placement, before type-kind resolution.
struct Placed {
    prop: PropertyDescriptor,
    category: String,
    order: i32,
    doc: Option<DocFragment>,
}

pub struct Classifier<'a> {
    catalog: &'a dyn TypeCatalog,
    lookup: &'a DocLookup,
    vocabulary: &'a Vocabulary,
    names: &'a TypeNameResolver,
}

impl<'a> Classifier<'a> {
    pub fn new(
        catalog: &'a dyn TypeCatalog,
        lookup: &'a DocLookup,
        vocabulary: &'a Vocabulary,
        names: &'a TypeNameResolver,
    ) -> Self {
        Self {
            catalog,
            lookup,
            vocabulary,
            names,
        }
    }

    /// Whether a property is documented at all.
    pub fn is_eligible(&self, prop: &PropertyDescriptor) -> bool {
        let vocab = self.vocabulary;

        if prop.has_public_accessors() {
            if vocab.excluded_properties.iter().any(|n| *n == prop.name) {
                return false;
            }
            if vocab.is_layout_type(&prop.value_type)
                && prop.name != "Layout"
                && prop.name.ends_with("Layout")
            {
                return false;
            }
            if vocab.is_condition_type(&prop.value_type)
                && prop.name != "Condition"
                && prop.name.ends_with("Condition")
            {
                return false;
            }
            if !vocab.excluded_property_prefix.is_empty()
                && prop.name.starts_with(vocab.excluded_property_prefix.as_str())
            {
                return false;
            }
            return true;
        }

        prop.has_attribute(&vocab.array_parameter)
    }

    /// Documents `ty`: its own documentation plus its eligible properties in
    /// emission order.
    pub fn describe_type(&self, ty: &TypeDescriptor) -> Result<TypeMembers, CompileError> {
        let mut expanding = vec![ty.full_name.clone()];
        self.describe(ty, &mut expanding)
    }

    fn describe(
        &self,
        ty: &TypeDescriptor,
        expanding: &mut Vec<String>,
    ) -> Result<TypeMembers, CompileError> {
        let type_id = DocId::for_type(&ty.full_name);
        let doc = self.lookup.find(&type_id);

        let mut categories = CategoryTable::seeded();
        if let Some(doc) = &doc {
            for el in doc.select(&["docgen", "categories", "category"]) {
                let name = el.attribute("name").unwrap_or("");
                let key = parse_order(el.attribute("order").unwrap_or(""), &type_id)?;
                categories.set(name, key);
            }
        }

        let mut placed = Vec::new();
        for prop in self.catalog.properties(ty) {
            if !self.is_eligible(&prop) {
                continue;
            }

            let prop_id = DocId::for_property(&prop.declaring_type, &prop.name);
            let prop_doc = self.lookup.find(&prop_id);
            let (category, order) = docgen_placement(prop_doc.as_ref(), &prop_id)?;
            let category = category.unwrap_or_else(|| {
                log::warn!(
                    "Property {}.{} does not have <docgen /> element defined.",
                    short_name(&prop.declaring_type),
                    prop.name
                );
                DEFAULT_CATEGORY.to_string()
            });

            categories.register(&category);
            placed.push(Placed {
                prop,
                category,
                order,
                doc: prop_doc,
            });
        }

        let ranking: Vec<String> = categories
            .ordered()
            .into_iter()
            .map(|c| c.name.clone())
            .collect();
        let rank = |p: &Placed| ranking.iter().position(|name| *name == p.category);
        placed.sort_by(|a, b| {
            rank(a)
                .cmp(&rank(b))
                .then(a.order.cmp(&b.order))
                .then_with(|| name_order(&a.prop.name, &b.prop.name))
        });

        let mut properties = Vec::with_capacity(placed.len());
        for p in placed {
            properties.push(self.property_entry(p, expanding)?);
        }

        log::debug!(
            "{}: {} properties in {} categories",
            ty.full_name,
            properties.len(),
            categories.len()
        );
        Ok(TypeMembers { doc, properties })
    }

    fn property_entry(
        &self,
        placed: Placed,
        expanding: &mut Vec<String>,
    ) -> Result<PropertyEntry, CompileError> {
        let vocab = self.vocabulary;
        let Placed {
            prop,
            category,
            order,
            doc,
        } = placed;

        let default_value = prop
            .find_attribute(&vocab.default_value)
            .and_then(|a| a.arg(0))
            .map(AttrValue::to_string);
        let property_type = self.property_type(&prop, expanding)?;

        Ok(PropertyEntry {
            camel_name: camel_case(&prop.name),
            default_value,
            category,
            order,
            advanced: prop.has_attribute(&vocab.advanced),
            required: prop.has_attribute(&vocab.required),
            property_type,
            doc,
            name: prop.name,
        })
    }

    fn property_type(
        &self,
        prop: &PropertyDescriptor,
        expanding: &mut Vec<String>,
    ) -> Result<PropertyType, CompileError> {
        let vocab = self.vocabulary;

        if prop.name == "Encoding" {
            return Ok(PropertyType::Encoding);
        }
        if prop.has_attribute(&vocab.accepts_layout) || prop.name == "Layout" {
            return Ok(PropertyType::Layout);
        }
        if prop.has_attribute(&vocab.accepts_condition) || prop.name == "Condition" {
            return Ok(PropertyType::Condition);
        }
        if let Some(enum_ty) = self.catalog.resolve(&prop.value_type).filter(|t| t.is_enum) {
            return Ok(self.enum_type(enum_ty));
        }
        if let Some(attr) = prop.find_attribute(&vocab.array_parameter) {
            return self.collection_type(prop, attr, expanding);
        }

        Ok(PropertyType::Plain {
            type_name: self.names.resolve(&prop.value_type).to_string(),
        })
    }

    fn enum_type(&self, enum_ty: &TypeDescriptor) -> PropertyType {
        let members = enum_ty
            .enum_members
            .iter()
            .map(|member| EnumMemberEntry {
                name: member.clone(),
                doc: self
                    .lookup
                    .find(&DocId::for_enum_member(&enum_ty.full_name, member)),
            })
            .collect();

        PropertyType::Enum {
            enum_type: self.names.resolve(&enum_ty.full_name).to_string(),
            members,
        }
    }

    fn collection_type(
        &self,
        prop: &PropertyDescriptor,
        attr: &Attribute,
        expanding: &mut Vec<String>,
    ) -> Result<PropertyType, CompileError> {
        let member = format!("{}.{}", prop.declaring_type, prop.name);
        let malformed = |message: &str| CompileError::MalformedAnnotation {
            annotation: attr.kind.clone(),
            member: member.clone(),
            message: message.to_string(),
        };

        let element_name = attr
            .arg(0)
            .and_then(AttrValue::as_type_name)
            .ok_or_else(|| malformed("first argument must be the element type"))?;
        let element_tag = attr
            .arg(1)
            .and_then(AttrValue::as_str)
            .ok_or_else(|| malformed("second argument must be the element tag"))?
            .to_string();
        let element_ty =
            self.catalog
                .resolve(element_name)
                .ok_or_else(|| CompileError::UnresolvedType {
                    name: element_name.to_string(),
                    referenced_by: member.clone(),
                })?;
        let name = self.names.resolve(element_name).to_string();

        if expanding.iter().any(|t| *t == element_ty.full_name) {
            log::warn!(
                "Element type '{}' of {} is already being expanded; nested properties omitted.",
                element_ty.full_name,
                member
            );
            return Ok(PropertyType::Collection {
                element_type: ElementTypeEntry {
                    name,
                    element_tag,
                    doc: None,
                    properties: Vec::new(),
                    recursive: true,
                },
            });
        }

        expanding.push(element_ty.full_name.clone());
        let members = self.describe(element_ty, expanding);
        expanding.pop();
        let members = members?;

        Ok(PropertyType::Collection {
            element_type: ElementTypeEntry {
                name,
                element_tag,
                doc: members.doc,
                properties: members.properties,
                recursive: false,
            },
        })
    }
}

/// Category and order from a property's `docgen` directive.
fn docgen_placement(
    doc: Option<&DocFragment>,
    id: &DocId,
) -> Result<(Option<String>, i32), CompileError> {
    let Some(docgen) = doc.and_then(|d| d.element("docgen")) else {
        return Ok((None, DEFAULT_ORDER));
    };

    let category = docgen
        .attribute("category")
        .filter(|c| !c.is_empty())
        .map(str::to_string);
    let order = match docgen.attribute("order") {
        Some(value) if !value.trim().is_empty() => parse_order(value, id)?,
        _ => DEFAULT_ORDER,
    };
    Ok((category, order))
}

fn parse_order(value: &str, id: &DocId) -> Result<i32, CompileError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| CompileError::InvalidOrder {
            entry: id.to_string(),
            value: value.to_string(),
        })
}
