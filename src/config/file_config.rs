use crate::core::ConfigProvider;
use crate::domain::model::{Job, Paycode};
use crate::utils::error::{Result, SynthError};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_EMPLOYEES_PER_ORG: usize = 70;
pub const DEFAULT_OUTPUT_PATH: &str = "data/synthetic_raw";
pub const DEFAULT_ZIP_FILENAME: &str = "synthetic_raw.zip";
pub const MAX_DAYS: u32 = 3660;
pub const MAX_EMPLOYEES_PER_ORG: usize = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub days: u32,
    pub orgs: Vec<String>,
    #[serde(default)]
    pub jobs: HashMap<String, Vec<Job>>,
    pub paycodes: Vec<String>,
    pub employees_per_org: Option<usize>,
    pub start_date: Option<NaiveDate>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub zip: Option<bool>,
    pub zip_filename: Option<String>,
    pub write_summary: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Yaml,
    Toml,
}

impl GeneratorConfig {
    /// Loads a config file; the format follows the extension (`.yaml`, `.yml`, `.toml`).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            Some("toml") => ConfigFormat::Toml,
            other => {
                return Err(SynthError::ConfigError {
                    message: format!(
                        "Unsupported config format '{}' for {}; use .yaml, .yml or .toml",
                        other.unwrap_or(""),
                        path.display()
                    ),
                })
            }
        };

        let content = std::fs::read_to_string(path)?;
        match format {
            ConfigFormat::Yaml => Self::from_yaml_str(&content),
            ConfigFormat::Toml => Self::from_toml_str(&content),
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(serde_yaml::from_str(&processed_content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SynthError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are kept verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SynthError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_range("days", self.days, 1, MAX_DAYS)?;

        if self.orgs.is_empty() {
            return Err(SynthError::MissingConfigError {
                field: "orgs".to_string(),
            });
        }
        for org in &self.orgs {
            validation::validate_non_empty_string("orgs", org)?;
            validation::validate_non_empty_string("orgs", department_of(org))?;
        }

        validation::validate_range(
            "employees_per_org",
            self.employees_per_org(),
            1,
            MAX_EMPLOYEES_PER_ORG,
        )?;

        for (department, jobs) in &self.jobs {
            let field = format!("jobs.{}", department);
            for job in jobs {
                validation::validate_non_empty_string(&field, &job.job_code)?;
                validation::validate_non_empty_string(&field, &job.job_title)?;
                validation::validate_non_empty_string(&field, &job.job_family)?;
            }
        }

        let emitted: Vec<&str> = Paycode::ALL.iter().map(|p| p.as_str()).collect();
        validation::validate_contains_all("paycodes", &self.paycodes, &emitted)?;

        validation::validate_path("output.path", self.output_path())?;
        if let Some(filename) = self.output.as_ref().and_then(|o| o.zip_filename.as_deref()) {
            validation::validate_file_extension("output.zip_filename", filename, &["zip"])?;
        }

        Ok(())
    }

    pub fn employees_per_org(&self) -> usize {
        self.employees_per_org.unwrap_or(DEFAULT_EMPLOYEES_PER_ORG)
    }

    pub fn output_path(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.path.as_deref())
            .unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    pub fn zip_enabled(&self) -> bool {
        self.output.as_ref().and_then(|o| o.zip).unwrap_or(false)
    }

    fn output_mut(&mut self) -> &mut OutputConfig {
        self.output.get_or_insert_with(OutputConfig::default)
    }

    pub fn set_output_path(&mut self, path: String) {
        self.output_mut().path = Some(path);
    }

    pub fn set_zip(&mut self, enabled: bool) {
        self.output_mut().zip = Some(enabled);
    }

    pub fn set_write_summary(&mut self, enabled: bool) {
        self.output_mut().write_summary = Some(enabled);
    }
}

/// Department is the last `/` segment of an org path.
pub fn department_of(org_path: &str) -> &str {
    org_path.rsplit('/').next().unwrap_or(org_path)
}

impl ConfigProvider for GeneratorConfig {
    fn seed(&self) -> u64 {
        self.seed
    }

    fn days(&self) -> u32 {
        self.days
    }

    fn orgs(&self) -> &[String] {
        &self.orgs
    }

    fn jobs_for(&self, department: &str) -> &[Job] {
        self.jobs.get(department).map(|j| j.as_slice()).unwrap_or(&[])
    }

    fn employees_per_org(&self) -> usize {
        GeneratorConfig::employees_per_org(self)
    }

    fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    fn output_path(&self) -> &str {
        GeneratorConfig::output_path(self)
    }

    fn zip_filename(&self) -> Option<&str> {
        if !self.zip_enabled() {
            return None;
        }
        Some(
            self.output
                .as_ref()
                .and_then(|o| o.zip_filename.as_deref())
                .unwrap_or(DEFAULT_ZIP_FILENAME),
        )
    }

    fn write_summary(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.write_summary)
            .unwrap_or(true)
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
