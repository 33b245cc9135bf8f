use serde::{Deserialize, Serialize};

/// One CSV record as read from the catalogue, header included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    /// 1-based line the record starts on.
    pub line: u64,
    pub fields: Vec<String>,
}

impl SourceRow {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }
}

/// Named view over the catalogue columns this tool cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueEntry {
    pub line: u64,
    pub actual_package: String,
    pub correct_package: String,
    pub aliases: String,
    pub exclude: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub name: String,
    pub aliases: Vec<String>,
}

/// Column positions in `names_data.csv`.
///
/// The catalogue carries 23 columns; only these four feed the generated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnMap {
    pub provider_package_actual: usize,
    pub provider_package_correct: usize,
    pub aliases: usize,
    pub exclude: usize,
}

impl ColumnMap {
    pub const NAMES_DATA: ColumnMap = ColumnMap {
        provider_package_actual: 4,
        provider_package_correct: 5,
        aliases: 7,
        exclude: 18,
    };

    /// Highest index any field reads; rows must have more fields than this.
    pub fn max_index(&self) -> usize {
        self.provider_package_actual
            .max(self.provider_package_correct)
            .max(self.aliases)
            .max(self.exclude)
    }

    pub fn entries(&self) -> [(&'static str, usize); 4] {
        [
            ("provider_package_actual", self.provider_package_actual),
            ("provider_package_correct", self.provider_package_correct),
            ("aliases", self.aliases),
            ("exclude", self.exclude),
        ]
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::NAMES_DATA
    }
}
