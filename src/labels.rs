use std::borrow::Cow;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Class index to class name table, as exported next to the detection model
/// (a JSON array of strings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelMap {
    names: Vec<String>,
}

impl LabelMap {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn from_json_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let labels = Self::from_json_str(&content, path)?;
        log::info!("Loaded {} labels from {}", labels.len(), path.display());
        Ok(labels)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name for a class index; indices outside the table resolve to `class <i>`.
    pub fn name(&self, class_index: i64) -> Cow<'_, str> {
        usize::try_from(class_index)
            .ok()
            .and_then(|i| self.names.get(i))
            .map(|n| Cow::Borrowed(n.as_str()))
            .unwrap_or_else(|| Cow::Owned(format!("class {}", class_index)))
    }
}

impl Default for LabelMap {
    fn default() -> Self {
        Self::new(vec!["eye".to_string(), "pupil".to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn resolves_known_and_unknown_indices() {
        let labels = LabelMap::default();
        assert_eq!(labels.name(0), "eye");
        assert_eq!(labels.name(1), "pupil");
        assert_eq!(labels.name(7), "class 7");
        assert_eq!(labels.name(-1), "class -1");
    }

    #[test]
    fn loads_json_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["person", "eye", "pupil"]"#).unwrap();
        let labels = LabelMap::load(file.path()).unwrap();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels.name(2), "pupil");
    }

    #[test]
    fn rejects_non_array() {
        let err = LabelMap::from_json_str(r#"{"0": "eye"}"#, Path::new("labels.json"));
        assert!(matches!(err, Err(ConfigError::Parse { .. })));
    }
}
