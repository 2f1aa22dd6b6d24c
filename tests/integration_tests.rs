use anyhow::Result;
use chrono::{Duration, NaiveDate};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tempfile::TempDir;
use wfm_synth::domain::model::{DatasetSummary, Employee, Paycode, ScheduledShift, TimecardEntry};
use wfm_synth::{GeneratorConfig, LocalStorage, SynthEngine, SyntheticPipeline};

const CONFIG: &str = r#"
seed: 2024
days: 10
start_date: 2024-03-01
employees_per_org: 30
orgs:
  - Hospital/Nursing
  - Hospital/EVS
  - Corporate/HR
jobs:
  Nursing:
    - {job_code: RN, job_title: Registered Nurse, job_family: Nursing}
    - {job_code: CNA, job_title: Certified Nursing Assistant, job_family: Nursing}
  EVS:
    - {job_code: EVS1, job_title: Environmental Services Tech, job_family: EVS}
paycodes: [REG, OT, CALL]
"#;

fn config_for(output_path: &str) -> GeneratorConfig {
    let mut config = GeneratorConfig::from_yaml_str(CONFIG).unwrap();
    config.set_output_path(output_path.to_string());
    config
}

async fn run_into(dir: &Path, config: GeneratorConfig) -> Result<wfm_synth::GenerationReport> {
    let storage = LocalStorage::new(dir.to_str().unwrap().to_string());
    let pipeline = SyntheticPipeline::new(storage, config);
    Ok(SynthEngine::new(pipeline).run().await?)
}

fn read_table<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

#[tokio::test]
async fn test_end_to_end_generation_writes_consistent_tables() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let report = run_into(temp_dir.path(), config_for(&output_path)).await?;
    assert_eq!(report.output_path, output_path);

    let employees: Vec<Employee> = read_table(&temp_dir.path().join("employees.csv"))?;
    let schedule: Vec<ScheduledShift> = read_table(&temp_dir.path().join("schedules.csv"))?;
    let timecards: Vec<TimecardEntry> = read_table(&temp_dir.path().join("timecards.csv"))?;

    assert_eq!(employees.len(), 90);
    assert_eq!(report.summary.employees, employees.len());
    assert_eq!(report.summary.scheduled_shifts, schedule.len());
    assert_eq!(report.summary.timecard_entries, timecards.len());

    let employee_ids: HashSet<&str> = employees.iter().map(|e| e.employee_id.as_str()).collect();
    assert_eq!(employee_ids.len(), employees.len());

    let first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let last = first + Duration::days(9);
    let shifts: HashMap<&str, &ScheduledShift> =
        schedule.iter().map(|s| (s.shift_id.as_str(), s)).collect();

    for shift in &schedule {
        assert!(shift.schedule_date >= first && shift.schedule_date <= last);
        if let Some(id) = &shift.employee_id {
            assert!(employee_ids.contains(id.as_str()));
        }
    }

    let assigned = schedule.iter().filter(|s| !s.is_open_shift).count();
    let scheduled_punches: Vec<&TimecardEntry> = timecards
        .iter()
        .filter(|t| t.scheduled_shift_id.is_some())
        .collect();
    assert_eq!(scheduled_punches.len(), assigned);
    assert_eq!(
        timecards.len() - assigned,
        (assigned as f64 * 0.02).floor() as usize
    );

    for entry in &timecards {
        assert!(employee_ids.contains(entry.employee_id.as_str()));
        if let Some(shift_id) = &entry.scheduled_shift_id {
            let shift = shifts[shift_id.as_str()];
            assert_eq!(shift.employee_id.as_deref(), Some(entry.employee_id.as_str()));
            assert_eq!(entry.work_date, shift.schedule_date);
            assert!(entry.clock_in >= shift.shift_start - Duration::minutes(15));
            assert!(entry.clock_out <= shift.shift_end + Duration::minutes(30));
            if shift.org_path.ends_with("Nursing") && entry.worked_hours > 12.0 {
                assert_eq!(entry.paycode, Paycode::Ot);
            }
        }
    }

    let summary: DatasetSummary =
        serde_json::from_slice(&std::fs::read(temp_dir.path().join("summary.json"))?)?;
    assert_eq!(summary.seed, 2024);
    assert_eq!(summary.end_date, last);
    assert_eq!(
        summary.paycode_counts.values().sum::<usize>(),
        timecards.len()
    );

    Ok(())
}

#[tokio::test]
async fn test_same_seed_produces_identical_files() -> Result<()> {
    let first = TempDir::new()?;
    let second = TempDir::new()?;

    run_into(first.path(), config_for(first.path().to_str().unwrap())).await?;
    run_into(second.path(), config_for(second.path().to_str().unwrap())).await?;

    for file in ["employees.csv", "schedules.csv", "timecards.csv", "summary.json"] {
        let a = std::fs::read(first.path().join(file))?;
        let b = std::fs::read(second.path().join(file))?;
        assert_eq!(a, b, "{} differs between runs", file);
    }

    let third = TempDir::new()?;
    let mut reseeded = config_for(third.path().to_str().unwrap());
    reseeded.seed = 2025;
    run_into(third.path(), reseeded).await?;
    assert_ne!(
        std::fs::read(first.path().join("employees.csv"))?,
        std::fs::read(third.path().join("employees.csv"))?
    );

    Ok(())
}

#[tokio::test]
async fn test_zip_bundle_matches_loose_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut config = config_for(temp_dir.path().to_str().unwrap());
    config.set_zip(true);
    config.set_write_summary(false);

    run_into(temp_dir.path(), config).await?;

    let zip_path = temp_dir.path().join("synthetic_raw.zip");
    assert!(zip_path.exists());
    assert!(!temp_dir.path().join("summary.json").exists());

    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(std::fs::read(&zip_path)?))?;
    let mut names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).map(|f| f.name().to_string()))
        .collect::<std::result::Result<_, _>>()?;
    names.sort();
    assert_eq!(names, vec!["employees.csv", "schedules.csv", "timecards.csv"]);

    let mut bundled = String::new();
    std::io::Read::read_to_string(&mut archive.by_name("timecards.csv")?, &mut bundled)?;
    assert_eq!(
        bundled,
        std::fs::read_to_string(temp_dir.path().join("timecards.csv"))?
    );

    Ok(())
}

#[tokio::test]
async fn test_org_without_jobs_falls_back_to_general_staff() -> Result<()> {
    let temp_dir = TempDir::new()?;
    run_into(temp_dir.path(), config_for(temp_dir.path().to_str().unwrap())).await?;

    let employees: Vec<Employee> = read_table(&temp_dir.path().join("employees.csv"))?;
    let hr: Vec<&Employee> = employees
        .iter()
        .filter(|e| e.org_path == "Corporate/HR")
        .collect();

    assert_eq!(hr.len(), 30);
    assert!(hr
        .iter()
        .all(|e| e.job_code == "GEN" && e.job_title == "General Staff" && e.job_family == "HR"));

    Ok(())
}
