use crate::core::Pipeline;
use crate::domain::model::DatasetSummary;
use crate::utils::error::Result;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub output_path: String,
    pub summary: DatasetSummary,
}

pub struct SynthEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SynthEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<GenerationReport> {
        let started = Instant::now();
        tracing::info!("Starting synthetic data generation");

        let dataset = self.pipeline.extract().await?;
        tracing::info!(
            "Generated {} employees, {} shifts, {} timecard entries",
            dataset.employees.len(),
            dataset.schedule.len(),
            dataset.timecards.len()
        );

        let transformed = self.pipeline.transform(dataset).await?;
        let summary = transformed.summary.clone();
        tracing::debug!(
            "Rendered tables: employees {} bytes, schedules {} bytes, timecards {} bytes",
            transformed.employees_csv.len(),
            transformed.schedules_csv.len(),
            transformed.timecards_csv.len()
        );

        let output_path = self.pipeline.load(transformed).await?;
        tracing::info!("Output written to {} in {:?}", output_path, started.elapsed());

        Ok(GenerationReport {
            output_path,
            summary,
        })
    }
}
