use crate::config::department_of;
use crate::core::generator::resolve_start_date;
use crate::core::render::{TableRow, SUMMARY_FILE};
use crate::core::ConfigProvider;
use crate::domain::model::{Employee, ScheduledShift, TimecardEntry};
use chrono::{Duration, NaiveDate};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgPlan {
    pub org_path: String,
    pub department: String,
    /// Empty when the department has no jobs and employees fall back to `GEN`.
    pub job_codes: Vec<String>,
}

impl OrgPlan {
    pub fn uses_general_staff(&self) -> bool {
        self.job_codes.is_empty()
    }
}

/// What a run would generate and write, resolved without drawing any data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub seed: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: u32,
    pub employees_per_org: usize,
    pub total_employees: usize,
    pub orgs: Vec<OrgPlan>,
    pub output_path: String,
    pub files: Vec<&'static str>,
    pub zip_filename: Option<String>,
}

impl GenerationPlan {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C, today: NaiveDate) -> Self {
        let start_date = resolve_start_date(config, today);
        let end_date = start_date + Duration::days(i64::from(config.days().saturating_sub(1)));
        let employees_per_org = config.employees_per_org();

        let orgs = config
            .orgs()
            .iter()
            .map(|org_path| {
                let department = department_of(org_path);
                OrgPlan {
                    org_path: org_path.clone(),
                    department: department.to_string(),
                    job_codes: config
                        .jobs_for(department)
                        .iter()
                        .map(|job| job.job_code.clone())
                        .collect(),
                }
            })
            .collect();

        let mut files = vec![
            Employee::FILE_NAME,
            ScheduledShift::FILE_NAME,
            TimecardEntry::FILE_NAME,
        ];
        if config.write_summary() {
            files.push(SUMMARY_FILE);
        }

        Self {
            seed: config.seed(),
            start_date,
            end_date,
            days: config.days(),
            employees_per_org,
            total_employees: config.orgs().len().saturating_mul(employees_per_org),
            orgs,
            output_path: config.output_path().to_string(),
            files,
            zip_filename: config.zip_filename().map(str::to_string),
        }
    }
}

impl fmt::Display for GenerationPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📋 Generation plan:")?;
        writeln!(f, "  Seed: {}", self.seed)?;
        writeln!(
            f,
            "  Dates: {} to {} ({} days)",
            self.start_date, self.end_date, self.days
        )?;
        writeln!(
            f,
            "  Employees: {} ({} per org)",
            self.total_employees, self.employees_per_org
        )?;
        writeln!(f)?;
        writeln!(f, "🏥 Orgs:")?;
        for org in &self.orgs {
            if org.uses_general_staff() {
                writeln!(
                    f,
                    "  {} -> {} (no jobs configured, using GEN)",
                    org.org_path, org.department
                )?;
            } else {
                writeln!(
                    f,
                    "  {} -> {} [{}]",
                    org.org_path,
                    org.department,
                    org.job_codes.join(", ")
                )?;
            }
        }
        writeln!(f)?;
        writeln!(f, "💾 Output: {}", self.output_path)?;
        for file in &self.files {
            writeln!(f, "  - {}", file)?;
        }
        if let Some(zip) = &self.zip_filename {
            writeln!(f, "  ZIP bundle: {}", zip)?;
        }
        Ok(())
    }
}
