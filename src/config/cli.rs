use crate::config::file_config::GeneratorConfig;
use crate::core::Storage;
use crate::utils::error::{Result, SynthError};
use chrono::NaiveDate;
use clap::Parser;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Parser)]
#[command(name = "wfm-synth")]
#[command(about = "Generate synthetic workforce-management data (employees, schedules, timecards)")]
pub struct CliArgs {
    /// Path to the YAML or TOML generator config
    #[arg(short, long, default_value = "config.yaml")]
    pub config: String,

    /// Override the output directory
    #[arg(long)]
    pub output_path: Option<String>,

    /// Override the RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the number of days to generate
    #[arg(long)]
    pub days: Option<u32>,

    /// First generated day (YYYY-MM-DD); defaults to today minus --days
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Override the headcount generated for each org
    #[arg(long)]
    pub employees_per_org: Option<usize>,

    /// Also bundle the output files into a ZIP archive
    #[arg(long)]
    pub zip: bool,

    /// Skip writing summary.json
    #[arg(long)]
    pub no_summary: bool,

    /// Show what would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    /// Command line flags win over values from the config file.
    pub fn apply_overrides(&self, config: &mut GeneratorConfig) {
        if let Some(seed) = self.seed {
            config.seed = seed;
            tracing::info!("🔧 Seed overridden to: {}", seed);
        }
        if let Some(days) = self.days {
            config.days = days;
            tracing::info!("🔧 Days overridden to: {}", days);
        }
        if let Some(start_date) = self.start_date {
            config.start_date = Some(start_date);
            tracing::info!("🔧 Start date overridden to: {}", start_date);
        }
        if let Some(per_org) = self.employees_per_org {
            config.employees_per_org = Some(per_org);
            tracing::info!("🔧 Employees per org overridden to: {}", per_org);
        }
        if let Some(path) = &self.output_path {
            config.set_output_path(path.clone());
            tracing::info!("🔧 Output path overridden to: {}", path);
        }
        if self.zip {
            config.set_zip(true);
        }
        if self.no_summary {
            config.set_write_summary(false);
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(&full_path).map_err(|e| {
            SynthError::IoError(std::io::Error::new(
                e.kind(),
                format!("{}: {}", full_path.display(), e),
            ))
        })?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const BASE_CONFIG: &str = r#"
seed: 1
days: 7
orgs: [Hospital/Nursing]
paycodes: [REG, OT, CALL]
"#;

    #[test]
    fn test_cli_overrides_config_values() {
        let args = CliArgs::parse_from([
            "wfm-synth",
            "--config",
            "custom.yaml",
            "--seed",
            "99",
            "--days",
            "3",
            "--start-date",
            "2024-01-01",
            "--employees-per-org",
            "4",
            "--output-path",
            "/tmp/out",
            "--zip",
            "--no-summary",
        ]);
        assert_eq!(args.config, "custom.yaml");

        let mut config = GeneratorConfig::from_yaml_str(BASE_CONFIG).unwrap();
        args.apply_overrides(&mut config);

        assert_eq!(config.seed, 99);
        assert_eq!(config.days, 3);
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(config.employees_per_org, Some(4));
        assert_eq!(config.output_path(), "/tmp/out");
        assert!(config.zip_enabled());
    }

    #[test]
    fn test_cli_without_flags_keeps_config() {
        let args = CliArgs::parse_from(["wfm-synth"]);
        assert_eq!(args.config, "config.yaml");

        let mut config = GeneratorConfig::from_yaml_str(BASE_CONFIG).unwrap();
        args.apply_overrides(&mut config);

        assert_eq!(config.seed, 1);
        assert_eq!(config.days, 7);
        assert!(!config.zip_enabled());
    }

    #[tokio::test]
    async fn test_local_storage_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage
            .write_file("nested/dir/employees.csv", b"employee_id\n")
            .await
            .unwrap();

        let data = storage.read_file("nested/dir/employees.csv").await.unwrap();
        assert_eq!(data, b"employee_id\n");
        assert!(storage.read_file("missing.csv").await.is_err());
    }
}
