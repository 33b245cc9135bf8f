use crate::domain::model::{ColumnMap, ServiceRecord, SourceRow};
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    /// Appends `data`, creating the file if needed. Never truncates.
    fn append_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn source_path(&self) -> &str;
    fn target_path(&self) -> &str;
    fn columns(&self) -> ColumnMap;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<SourceRow>>;
    fn transform(&self, rows: Vec<SourceRow>) -> Result<Vec<ServiceRecord>>;
    fn load(&self, records: Vec<ServiceRecord>) -> Result<String>;
}
