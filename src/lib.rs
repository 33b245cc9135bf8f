pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::toml_config::TomlConfig;
pub use core::{etl::EtlEngine, pipeline::EndpointsPipeline};
pub use domain::model::{ColumnMap, ServiceRecord, SourceRow};
pub use utils::error::{DocgenError, Result};
