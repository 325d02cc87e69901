//! TypeCatalog trait for abstracting access to loaded type libraries.
//!
//! The compiler never loads libraries itself. It asks a catalog for the
//! types to scan and resolves base types, enum types and collection element
//! types through it.

use docdump_types::{PropertyDescriptor, TypeDescriptor, short_name};
use std::collections::HashSet;
use std::fmt::Debug;

/// Read access to a set of loaded type libraries.
///
/// # Implementations
///
/// - `LibrarySet` (docdump-library): JSON library manifests with reference resolution
/// - `InMemoryTypeCatalog`: descriptors registered programmatically
pub trait TypeCatalog: Debug {
    /// Types that take part in discovery, in library load order and then
    /// declaration order.
    fn types(&self) -> Vec<&TypeDescriptor>;

    /// Finds a type by full name, including types from libraries that were
    /// only loaded to satisfy references.
    fn resolve(&self, full_name: &str) -> Option<&TypeDescriptor>;

    /// Returns a human-readable name for this catalog (for logging/debugging).
    fn name(&self) -> &'static str;

    /// Short names of the type and its ancestors, most derived first.
    ///
    /// A base type that cannot be resolved still contributes its short name
    /// but ends the walk.
    fn ancestors(&self, ty: &TypeDescriptor) -> Vec<String> {
        let mut chain = vec![ty.short_name().to_string()];
        let mut seen = HashSet::from([ty.full_name.as_str()]);
        let mut next = ty.base_type.as_deref();

        while let Some(base) = next {
            if !seen.insert(base) {
                log::warn!("Inheritance cycle through '{}' in {}", base, self.name());
                break;
            }
            chain.push(short_name(base).to_string());
            next = self.resolve(base).and_then(|t| t.base_type.as_deref());
        }

        chain
    }

    /// Instance properties of the type, including inherited ones.
    ///
    /// Properties declared on the type come first, followed by each
    /// ancestor's properties that are not hidden by a same-named property
    /// further down. Every returned descriptor carries its declaring type.
    fn properties(&self, ty: &TypeDescriptor) -> Vec<PropertyDescriptor> {
        let mut props: Vec<PropertyDescriptor> = Vec::new();
        let mut seen = HashSet::new();
        let mut current = Some(ty);

        while let Some(t) = current {
            if !seen.insert(t.full_name.as_str()) {
                break;
            }
            for prop in &t.properties {
                if props.iter().any(|p| p.name == prop.name) {
                    continue;
                }
                let mut prop = prop.clone();
                if prop.declaring_type.is_empty() {
                    prop.declaring_type = t.full_name.clone();
                }
                props.push(prop);
            }
            current = t.base_type.as_deref().and_then(|base| self.resolve(base));
        }

        props
    }
}

/// A catalog populated in memory.
///
/// Discoverable types are added with [`InMemoryTypeCatalog::add`]; types
/// that should only be resolvable (base classes, enums, element types from
/// referenced libraries) with [`InMemoryTypeCatalog::add_reference`].
#[derive(Debug, Default)]
pub struct InMemoryTypeCatalog {
    types: Vec<TypeDescriptor>,
    references: Vec<TypeDescriptor>,
}

impl InMemoryTypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, ty: TypeDescriptor) {
        self.types.push(ty);
    }

    pub fn add_reference(&mut self, ty: TypeDescriptor) {
        self.references.push(ty);
    }

    pub fn with_type(mut self, ty: TypeDescriptor) -> Self {
        self.add(ty);
        self
    }

    pub fn with_reference(mut self, ty: TypeDescriptor) -> Self {
        self.add_reference(ty);
        self
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeCatalog for InMemoryTypeCatalog {
    fn types(&self) -> Vec<&TypeDescriptor> {
        self.types.iter().collect()
    }

    fn resolve(&self, full_name: &str) -> Option<&TypeDescriptor> {
        self.types
            .iter()
            .chain(self.references.iter())
            .find(|t| t.full_name == full_name)
    }

    fn name(&self) -> &'static str {
        "InMemoryTypeCatalog"
    }
}
