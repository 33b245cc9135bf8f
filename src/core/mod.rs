pub mod etl;
pub mod loader;
pub mod pipeline;
pub mod projector;
pub mod renderer;
pub mod template;

pub use crate::domain::model::{CatalogueEntry, ColumnMap, ServiceRecord, SourceRow};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
