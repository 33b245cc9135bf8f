use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs extract, transform and load once. The first error aborts the run.
    pub fn run(mut self) -> Result<String> {
        tracing::info!("Starting endpoint list generation");

        tracing::info!("Loading service catalogue...");
        let rows = self.pipeline.extract()?;
        tracing::info!("Loaded {} rows (header included)", rows.len());
        self.monitor.log_stats("Extract");

        tracing::info!("Projecting service records...");
        let records = self.pipeline.transform(rows)?;
        tracing::info!("Projected {} service records", records.len());
        self.monitor.log_stats("Transform");

        tracing::info!("Rendering endpoint list...");
        let output_path = self.pipeline.load(records)?;
        tracing::info!("Output written to: {}", output_path);
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}
