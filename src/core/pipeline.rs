use crate::core::loader::read_rows;
use crate::core::projector::{sort_records, RecordProjector};
use crate::core::renderer::Renderer;
use crate::core::{ConfigProvider, Pipeline, ServiceRecord, SourceRow, Storage};
use crate::utils::error::{DocgenError, Result};
use std::io::Write;
use std::path::Path;

/// Catalogue CSV in, endpoint list appended to the guide page out.
pub struct EndpointsPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    dry_run: bool,
}

impl<S: Storage, C: ConfigProvider> EndpointsPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            dry_run: false,
        }
    }

    /// Print the rendered text to stdout instead of appending it.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for EndpointsPipeline<S, C> {
    fn extract(&self) -> Result<Vec<SourceRow>> {
        let path = Path::new(self.config.source_path());

        tracing::debug!("Reading service catalogue from: {}", path.display());
        let data = self.storage.read_file(path)?;
        tracing::debug!("Read {} bytes", data.len());

        read_rows(path, &data)
    }

    fn transform(&self, rows: Vec<SourceRow>) -> Result<Vec<ServiceRecord>> {
        let projector = RecordProjector::new(self.config.columns(), self.config.source_path());

        let mut records = projector.project(&rows)?;
        tracing::debug!(
            "{} of {} data rows qualify",
            records.len(),
            rows.len().saturating_sub(1)
        );

        sort_records(&mut records);
        Ok(records)
    }

    fn load(&self, records: Vec<ServiceRecord>) -> Result<String> {
        let rendered = Renderer::new()?.render(&records)?;

        if self.dry_run {
            tracing::info!("Dry run: writing {} bytes to stdout", rendered.len());
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| DocgenError::io("write", "<stdout>", e))?;
            return Ok("<stdout>".to_string());
        }

        let target = Path::new(self.config.target_path());
        tracing::debug!("Appending {} bytes to {}", rendered.len(), target.display());
        self.storage.append_file(target, rendered.as_bytes())?;

        Ok(self.config.target_path().to_string())
    }
}
