pub mod fixtures;

use docdump::{DocDumpBuilder, DocDumpError};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A temporary directory holding manifests and comment files.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> std::io::Result<Self> {
        init_logger();
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn write_json(&self, relative: &str, value: &Value) -> std::io::Result<PathBuf> {
        self.write(relative, &value.to_string())
    }

    /// Writes the NLog fixture: main manifest, comments, and the base library
    /// in `refs/`.
    pub fn with_nlog(self) -> std::io::Result<Self> {
        self.write_json("NLog.json", &fixtures::nlog_manifest())?;
        self.write_json("refs/NLog.Base.json", &fixtures::nlog_base_manifest())?;
        self.write("NLog.xml", fixtures::NLOG_COMMENTS)?;
        Ok(self)
    }

    /// A builder preconfigured with the NLog fixture.
    pub fn nlog_builder(&self) -> DocDumpBuilder {
        DocDumpBuilder::new()
            .with_library_file(self.path("NLog.json"))
            .with_reference_dir(self.path("refs"))
            .with_comments_file(self.path("NLog.xml"))
    }
}

/// Runs the builder and returns the XML output.
pub fn generate_xml(builder: DocDumpBuilder) -> Result<String, DocDumpError> {
    builder.build()?.generate_to_string()
}

/// Finds the `<type>` element with the given `clrType`.
pub fn find_type<'a, 'input>(
    doc: &'a roxmltree::Document<'input>,
    clr_type: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    doc.descendants()
        .find(|n| n.has_tag_name("type") && n.attribute("clrType") == Some(clr_type))
}

/// Names of the direct `<property>` children of `node`, in document order.
pub fn property_names<'a>(node: roxmltree::Node<'a, '_>) -> Vec<&'a str> {
    node.children()
        .filter(|n| n.has_tag_name("property"))
        .filter_map(|n| n.attribute("name"))
        .collect()
}

/// The direct `<property>` child of `node` named `name`.
pub fn property<'a, 'input>(
    node: roxmltree::Node<'a, 'input>,
    name: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    node.children()
        .find(|n| n.has_tag_name("property") && n.attribute("name") == Some(name))
}
