use crate::domain::model::{NormalizedRecord, OutputTarget};
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub records: Vec<NormalizedRecord>,
    pub outputs: Vec<OutputTarget>,
}

impl RunReport {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn sample(&self) -> Option<&NormalizedRecord> {
        self.records.first()
    }
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor_enabled: bool,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
        }
    }

    /// Extract, transform, then load. The first failing stage aborts the run.
    pub fn run(&self) -> Result<RunReport> {
        self.run_with(|_| Ok(()))
    }

    /// Like [`run`](Self::run), calling `on_transformed` with the normalized
    /// records before anything is written.
    pub fn run_with<F>(&self, on_transformed: F) -> Result<RunReport>
    where
        F: FnOnce(&[NormalizedRecord]) -> Result<()>,
    {
        let mut monitor = SystemMonitor::new(self.monitor_enabled);
        tracing::info!("Starting product export");

        let raw_data = self.pipeline.extract()?;
        tracing::info!("Extracted {} records", raw_data.len());
        monitor.log_stats("Extract");

        let result = self.pipeline.transform(raw_data)?;
        tracing::info!("Transformed {} records", result.records.len());
        monitor.log_stats("Transform");
        on_transformed(&result.records)?;

        let outputs = self.pipeline.load(&result.records)?;
        tracing::info!("Loaded {} output files", outputs.len());
        monitor.log_final_stats();

        Ok(RunReport {
            records: result.records,
            outputs,
        })
    }
}
