use crate::core::generator::{generate_dataset, resolve_start_date};
use crate::core::render::{self, TableRow, SUMMARY_FILE};
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{Dataset, Employee, ScheduledShift, TimecardEntry, TransformResult};
use crate::utils::error::Result;
use chrono::{NaiveDate, Utc};
use std::io::Write;
use std::path::Path;
use zip::write::{FileOptions, ZipWriter};

pub struct SyntheticPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    today: NaiveDate,
}

impl<S: Storage, C: ConfigProvider> SyntheticPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            today: Utc::now().date_naive(),
        }
    }

    /// Pins "today", which anchors the date range when no start date is configured.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SyntheticPipeline<S, C> {
    async fn extract(&self) -> Result<Dataset> {
        let start_date = resolve_start_date(&self.config, self.today);
        tracing::debug!(
            "Generating {} days from {} with seed {}",
            self.config.days(),
            start_date,
            self.config.seed()
        );
        generate_dataset(&self.config, start_date)
    }

    async fn transform(&self, data: Dataset) -> Result<TransformResult> {
        let summary = render::summarize(&data);

        Ok(TransformResult {
            employees_csv: render::to_csv_bytes(&data.employees)?,
            schedules_csv: render::to_csv_bytes(&data.schedule)?,
            timecards_csv: render::to_csv_bytes(&data.timecards)?,
            summary,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let mut files: Vec<(&str, Vec<u8>)> = vec![
            (Employee::FILE_NAME, result.employees_csv),
            (ScheduledShift::FILE_NAME, result.schedules_csv),
            (TimecardEntry::FILE_NAME, result.timecards_csv),
        ];
        if self.config.write_summary() {
            files.push((SUMMARY_FILE, serde_json::to_vec_pretty(&result.summary)?));
        }

        for (name, data) in &files {
            tracing::debug!("Writing {} ({} bytes)", name, data.len());
            self.storage.write_file(name, data).await?;
        }

        if let Some(zip_filename) = self.config.zip_filename() {
            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
                for (name, data) in &files {
                    zip.start_file::<_, ()>(*name, FileOptions::default())?;
                    zip.write_all(data)?;
                }
                let cursor = zip.finish()?;
                cursor.into_inner()
            };

            tracing::debug!("Writing ZIP bundle {} ({} bytes)", zip_filename, zip_data.len());
            self.storage.write_file(zip_filename, &zip_data).await?;
        }

        Ok(Path::new(self.config.output_path()).display().to_string())
    }
}
