//! The set of loaded type libraries.

use crate::error::LibraryError;
use crate::manifest::LibraryManifest;
use docdump_traits::TypeCatalog;
use docdump_types::TypeDescriptor;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

#[derive(Debug)]
struct LoadedLibrary {
    name: String,
    types: Vec<TypeDescriptor>,
    /// Explicitly loaded libraries are scanned for documented kinds;
    /// libraries pulled in to satisfy references are only used for lookups.
    discoverable: bool,
}

/// Loaded libraries plus the directories used to resolve their references.
///
/// References are resolved eagerly when a library is loaded: first against
/// libraries already in the set, then as `{dir}/{name}.json` in each
/// reference directory in registration order.
#[derive(Debug, Default)]
pub struct LibrarySet {
    libraries: Vec<LoadedLibrary>,
    reference_dirs: Vec<PathBuf>,
    /// Full type name to (library index, type index). First definition wins.
    index: HashMap<String, (usize, usize)>,
}

impl LibrarySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directory searched for referenced libraries.
    pub fn add_reference_dir<P: AsRef<Path>>(&mut self, dir: P) {
        self.reference_dirs.push(dir.as_ref().to_path_buf());
    }

    pub fn library_names(&self) -> Vec<&str> {
        self.libraries.iter().map(|l| l.name.as_str()).collect()
    }

    /// Loads a library manifest from a file, then resolves its references.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LibraryError> {
        let manifest = read_manifest(path.as_ref())?;
        self.load_manifest(manifest)
    }

    /// Adds an already-parsed manifest as a discoverable library, then
    /// resolves its references.
    pub fn load_manifest(&mut self, manifest: LibraryManifest) -> Result<(), LibraryError> {
        if let Some(existing) = self.libraries.iter_mut().find(|l| l.name == manifest.name) {
            // Already present as a reference; make it take part in discovery.
            existing.discoverable = true;
            log::info!("Library '{}' already loaded.", manifest.name);
            return Ok(());
        }

        let references = manifest.references.clone();
        let name = manifest.name.clone();
        self.insert(manifest, true);
        self.resolve_references(&name, &references)
    }

    fn insert(&mut self, manifest: LibraryManifest, discoverable: bool) {
        let lib_index = self.libraries.len();
        let name = manifest.name.clone();
        let types = manifest.into_types();
        for (type_index, ty) in types.iter().enumerate() {
            self.index
                .entry(ty.full_name.clone())
                .or_insert((lib_index, type_index));
        }
        log::debug!("Loaded library '{}' with {} types", name, types.len());
        self.libraries.push(LoadedLibrary {
            name,
            types,
            discoverable,
        });
    }

    fn resolve_references(
        &mut self,
        referenced_by: &str,
        references: &[String],
    ) -> Result<(), LibraryError> {
        for reference in references {
            if self.libraries.iter().any(|l| &l.name == reference) {
                log::info!("Resolved '{}' from pre-loaded library.", reference);
                continue;
            }

            let path = self.find_reference(reference).ok_or_else(|| {
                log::error!("Could not resolve: {}.json", reference);
                LibraryError::Unresolved {
                    library: reference.clone(),
                    referenced_by: referenced_by.to_string(),
                }
            })?;
            log::info!("Resolved '{}' from file '{}'.", reference, path.display());

            let manifest = read_manifest(&path)?;
            let nested = manifest.references.clone();
            let name = manifest.name.clone();
            self.insert(manifest, false);
            self.resolve_references(&name, &nested)?;
        }
        Ok(())
    }

    /// Library names are used as file stems, so anything that could walk
    /// out of a reference directory is never resolved.
    fn find_reference(&self, name: &str) -> Option<PathBuf> {
        let file_name = format!("{}.json", name);
        let candidate = Path::new(&file_name);
        let mut components = candidate.components();
        let single_normal = matches!(components.next(), Some(Component::Normal(_)))
            && components.next().is_none();
        if !single_normal {
            return None;
        }

        self.reference_dirs
            .iter()
            .map(|dir| dir.join(&file_name))
            .find(|path| path.is_file())
    }
}

fn read_manifest(path: &Path) -> Result<LibraryManifest, LibraryError> {
    let text = std::fs::read_to_string(path).map_err(|source| LibraryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    LibraryManifest::from_json(&text).map_err(|source| LibraryError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}

impl TypeCatalog for LibrarySet {
    fn types(&self) -> Vec<&TypeDescriptor> {
        self.libraries
            .iter()
            .filter(|l| l.discoverable)
            .flat_map(|l| l.types.iter())
            .collect()
    }

    fn resolve(&self, full_name: &str) -> Option<&TypeDescriptor> {
        let &(lib, ty) = self.index.get(full_name)?;
        self.libraries.get(lib).and_then(|l| l.types.get(ty))
    }

    fn name(&self) -> &'static str {
        "LibrarySet"
    }
}
