use std::path::{Path, PathBuf};

use crate::record::TerminalRecord;

const BUILTIN_CATALOG: &str = include_str!("../data/terminals.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read terminal catalog {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse terminal catalog {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The fixed, ordered set of terminal records a search runs against.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<TerminalRecord>,
}

impl Catalog {
    pub fn new(records: Vec<TerminalRecord>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of terminal record objects.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::parse(json, "<inline>")
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// The sample catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::parse(BUILTIN_CATALOG, "<builtin>")
    }

    fn parse(json: &str, origin: &str) -> Result<Self, CatalogError> {
        let records: Vec<TerminalRecord> =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                origin: origin.to_string(),
                source,
            })?;
        tracing::info!(origin, count = records.len(), "loaded terminal catalog");
        Ok(Self { records })
    }

    pub fn records(&self) -> &[TerminalRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&TerminalRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog
            .records()
            .iter()
            .any(|record| record.model() == "Aisino V37"));
    }

    #[test]
    fn loads_catalog_from_file_in_order() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"model": "Beta", "terminal_type": "T"}},
                {{"model": "Alpha", "terminal_type": "T"}}
            ]"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        let models: Vec<&str> = catalog.records().iter().map(|r| r.model()).collect();
        assert_eq!(models, vec!["Beta", "Alpha"]);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn record_without_model_is_a_parse_error() {
        let err = Catalog::from_json_str(r#"[{"terminal_type": "T"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
