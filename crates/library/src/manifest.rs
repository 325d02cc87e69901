use docdump_types::TypeDescriptor;
use serde::{Deserialize, Serialize};

/// The on-disk description of one type library.
///
/// ```json
/// {
///   "name": "NLog.Extended",
///   "references": ["NLog"],
///   "types": [{ "fullName": "NLog.Targets.MessageQueueTarget", "baseType": "NLog.Targets.TargetWithLayout" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryManifest {
    pub name: String,
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

impl LibraryManifest {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Stamps every type with the library name and every property with its
    /// declaring type.
    pub(crate) fn into_types(self) -> Vec<TypeDescriptor> {
        let name = self.name;
        self.types
            .into_iter()
            .map(|mut ty| {
                ty.library = name.clone();
                for prop in &mut ty.properties {
                    if prop.declaring_type.is_empty() {
                        prop.declaring_type = ty.full_name.clone();
                    }
                }
                ty
            })
            .collect()
    }
}
