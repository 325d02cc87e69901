// src/builder.rs
use crate::config::OutputFormat;
use crate::error::DocDumpError;
use docdump_core::{
    ApiDocument, Compiler, DocLookup, TypeNameResolver, Vocabulary, XmlDocumentWriter, write_json,
};
use docdump_library::LibrarySet;
use docdump_traits::{DocumentationStore, TypeCatalog};
use docdump_xmldoc::XmlDocumentationStore;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// A builder for creating a [`DocDump`].
#[derive(Default)]
pub struct DocDumpBuilder {
    library_files: Vec<PathBuf>,
    reference_dirs: Vec<PathBuf>,
    comment_files: Vec<PathBuf>,
    stores: Vec<Box<dyn DocumentationStore>>,
    catalog: Option<Box<dyn TypeCatalog>>,
    comments_disabled: bool,
    output_format: OutputFormat,
    vocabulary: Vocabulary,
    names: TypeNameResolver,
}

impl DocDumpBuilder {
    /// Creates a builder with the default vocabulary and type names.
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds a library manifest to document. Libraries load in the order given.
    pub fn with_library_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.library_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Adds a directory searched for libraries referenced by the documented ones.
    pub fn with_reference_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.reference_dirs.push(dir.as_ref().to_path_buf());
        self
    }

    /// Adds an XML documentation-comment file. Earlier files take precedence.
    pub fn with_comments_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.comment_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Adds a documentation store after any comment files.
    pub fn with_store(mut self, store: Box<dyn DocumentationStore>) -> Self {
        self.stores.push(store);
        self
    }

    /// Uses an already-populated catalog instead of library files.
    pub fn with_catalog(mut self, catalog: Box<dyn TypeCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Ignores every documentation source; the output carries no `doc` elements.
    pub fn with_comments_disabled(mut self, disabled: bool) -> Self {
        self.comments_disabled = disabled;
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Reads a vocabulary from a JSON file. Fields the file omits keep their defaults.
    pub fn with_vocabulary_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, DocDumpError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            DocDumpError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read vocabulary from '{}': {}", path.display(), e),
            ))
        })?;
        self.vocabulary = Vocabulary::from_json(&text)?;
        Ok(self)
    }

    pub fn with_type_names(mut self, names: TypeNameResolver) -> Self {
        self.names = names;
        self
    }

    /// Consumes the builder, loading every library and documentation file.
    pub fn build(self) -> Result<DocDump, DocDumpError> {
        let catalog: Box<dyn TypeCatalog> = match self.catalog {
            Some(_) if !self.library_files.is_empty() => {
                return Err(DocDumpError::Config(
                    "Use either `with_catalog` or `with_library_file`, not both.".to_string(),
                ));
            }
            Some(catalog) => catalog,
            None if self.library_files.is_empty() => {
                return Err(DocDumpError::Config(
                    "No libraries have been configured. Use `with_library_file` or `with_catalog`."
                        .to_string(),
                ));
            }
            None => {
                let mut set = LibrarySet::new();
                for dir in &self.reference_dirs {
                    set.add_reference_dir(dir);
                }
                for path in &self.library_files {
                    log::info!("Loading library {}", path.display());
                    set.load_file(path)?;
                }
                Box::new(set)
            }
        };

        let mut lookup = DocLookup::new();
        for path in &self.comment_files {
            log::info!("Loading comments {}", path.display());
            lookup.add_store(Box::new(XmlDocumentationStore::from_file(path)?));
        }
        for store in self.stores {
            lookup.add_store(store);
        }
        if self.comments_disabled {
            log::info!("Documentation comments disabled.");
            lookup.clear();
        }

        Ok(DocDump {
            catalog,
            lookup,
            vocabulary: self.vocabulary,
            names: self.names,
            format: self.output_format,
        })
    }
}

/// Loaded inputs, ready to compile and write.
pub struct DocDump {
    catalog: Box<dyn TypeCatalog>,
    lookup: DocLookup,
    vocabulary: Vocabulary,
    names: TypeNameResolver,
    format: OutputFormat,
}

impl DocDump {
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn catalog(&self) -> &dyn TypeCatalog {
        self.catalog.as_ref()
    }

    /// Compiles the document tree without writing it.
    pub fn compile(&self) -> Result<ApiDocument, DocDumpError> {
        let compiler = Compiler::new(
            self.catalog.as_ref(),
            &self.lookup,
            &self.vocabulary,
            &self.names,
        );
        Ok(compiler.compile()?)
    }

    pub fn generate_to_writer<W: Write>(&self, writer: W) -> Result<(), DocDumpError> {
        let document = self.compile()?;
        match self.format {
            OutputFormat::Xml => {
                let mut xml = XmlDocumentWriter::new(writer);
                xml.write(&document)?;
                xml.into_inner().flush()?;
            }
            OutputFormat::Json => write_json(writer, &document)?,
        }
        Ok(())
    }

    pub fn generate_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DocDumpError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            DocDumpError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create '{}': {}", path.display(), e),
            ))
        })?;
        let mut writer = BufWriter::new(file);
        self.generate_to_writer(&mut writer)?;
        writer.flush()?;
        log::info!("Wrote {} output to {}", self.format, path.display());
        Ok(())
    }

    pub fn generate_to_string(&self) -> Result<String, DocDumpError> {
        let mut buffer = Vec::new();
        self.generate_to_writer(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
