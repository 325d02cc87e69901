//! Documented-kind discovery and document assembly.

use crate::classify::Classifier;
use crate::document::{ApiDocument, KindEntry};
use crate::error::CompileError;
use crate::ident::{name_order, slugify};
use crate::lookup::DocLookup;
use crate::names::TypeNameResolver;
use crate::vocabulary::{DocKind, Vocabulary};
use docdump_traits::TypeCatalog;
use docdump_types::{AttrValue, TypeDescriptor};

/// Compiles a type catalog and its documentation into an [`ApiDocument`].
///
/// The compiler holds only shared references; one instance can compile any
/// number of times and always produces the same document for the same
/// inputs.
pub struct Compiler<'a> {
    catalog: &'a dyn TypeCatalog,
    lookup: &'a DocLookup,
    vocabulary: &'a Vocabulary,
    names: &'a TypeNameResolver,
}

impl<'a> Compiler<'a> {
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

    /// Concrete types carrying `marker`, ordered by short name.
    pub fn discover(&self, marker: &str) -> Vec<&'a TypeDescriptor> {
        let mut found: Vec<&TypeDescriptor> = self
            .catalog
            .types()
            .into_iter()
            .filter(|ty| !ty.is_abstract && ty.has_attribute(marker))
            .collect();
        found.sort_by(|a, b| name_order(a.short_name(), b.short_name()));
        found
    }

    pub fn compile(&self) -> Result<ApiDocument, CompileError> {
        let classifier =
            Classifier::new(self.catalog, self.lookup, self.vocabulary, self.names);
        let mut document = ApiDocument::default();

        for marker in &self.vocabulary.markers {
            let found = self.discover(&marker.attribute);
            log::debug!(
                "Found {} {} types marked with {}",
                found.len(),
                marker.kind,
                marker.attribute
            );
            for ty in found {
                document
                    .types
                    .push(self.kind_entry(&classifier, marker.kind, &marker.attribute, ty)?);
            }
        }

        log::info!(
            "Compiled {} documented kinds from {}",
            document.types.len(),
            self.catalog.name()
        );
        Ok(document)
    }

    fn kind_entry(
        &self,
        classifier: &Classifier<'_>,
        kind: DocKind,
        marker: &str,
        ty: &TypeDescriptor,
    ) -> Result<KindEntry, CompileError> {
        let name = ty
            .find_attribute(marker)
            .and_then(|a| a.arg(0))
            .and_then(AttrValue::as_str)
            .map(str::to_string);
        let display = name.as_deref().unwrap_or_default();
        if name.is_none() {
            log::warn!("{} has no name in its {} marker", ty.full_name, kind);
        }

        let ancestors = self.catalog.ancestors(ty);
        let inherits_any = |bases: &Vec<String>| ancestors.iter().any(|a| bases.contains(a));

        log::debug!("Documenting {} '{}' ({})", kind, display, ty.full_name);
        let members = classifier.describe_type(ty)?;

        Ok(KindEntry {
            kind,
            assembly: ty.library.clone(),
            clr_type: ty.full_name.clone(),
            slug: slugify(display, kind.as_str()),
            title: kind.title(display),
            advanced: ty.has_attribute(&self.vocabulary.advanced),
            is_compound: inherits_any(&self.vocabulary.compound_bases),
            is_wrapper: inherits_any(&self.vocabulary.wrapper_bases),
            doc: members.doc,
            properties: members.properties,
            name,
        })
    }
}
