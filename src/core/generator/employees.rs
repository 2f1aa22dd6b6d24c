use crate::config::department_of;
use crate::core::generator::profile::{self, FIRST_EMPLOYEE_NUMBER};
use crate::core::ConfigProvider;
use crate::domain::model::{Employee, EmploymentStatus, Job};
use fake::faker::name::en::Name;
use fake::Fake;
use rand::seq::SliceRandom;
use rand::Rng;

/// Builds `employees_per_org` employees for every org, numbered sequentially in
/// config order.
pub fn generate_employees<C, R>(config: &C, rng: &mut R) -> Vec<Employee>
where
    C: ConfigProvider + ?Sized,
    R: Rng + ?Sized,
{
    let per_org = config.employees_per_org();
    let mut employees = Vec::with_capacity(config.orgs().len().saturating_mul(per_org));
    let mut employee_number = FIRST_EMPLOYEE_NUMBER;

    for org_path in config.orgs() {
        let department = department_of(org_path);
        let jobs = config.jobs_for(department);
        let fallback = Job::general_staff(department);

        for _ in 0..per_org {
            let job = jobs.choose(rng).unwrap_or(&fallback);
            let employee_name: String = Name().fake_with_rng(rng);
            let status = EmploymentStatus::ALL
                .choose(rng)
                .copied()
                .unwrap_or(EmploymentStatus::Ft);
            let hourly_rate = profile::round_cents(rng.gen_range(profile::hourly_rate_range(department)));

            employees.push(Employee {
                employee_id: format!("E{}", employee_number),
                employee_number,
                employee_name,
                org_path: org_path.clone(),
                department: department.to_string(),
                job_code: job.job_code.clone(),
                job_title: job.job_title.clone(),
                job_family: job.job_family.clone(),
                employment_status: status,
                home_org_path: org_path.clone(),
                hourly_rate,
            });
            employee_number += 1;
        }
    }

    tracing::debug!("Generated {} employees across {} orgs", employees.len(), config.orgs().len());
    employees
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config() -> GeneratorConfig {
        GeneratorConfig::from_yaml_str(
            r#"
seed: 11
days: 2
employees_per_org: 6
orgs: [Hospital/Nursing, Hospital/EVS]
jobs:
  Nursing:
    - {job_code: RN, job_title: Registered Nurse, job_family: Nursing}
paycodes: [REG, OT, CALL]
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_employee_counts_and_sequential_ids() {
        let config = config();
        let mut rng = StdRng::seed_from_u64(config.seed);
        let employees = generate_employees(&config, &mut rng);

        assert_eq!(employees.len(), 12);
        for (i, employee) in employees.iter().enumerate() {
            let number = FIRST_EMPLOYEE_NUMBER + i as u32;
            assert_eq!(employee.employee_number, number);
            assert_eq!(employee.employee_id, format!("E{}", number));
            assert_eq!(employee.home_org_path, employee.org_path);
            assert!(!employee.employee_name.is_empty());
        }
        assert!(employees[..6].iter().all(|e| e.org_path == "Hospital/Nursing"));
        assert!(employees[6..].iter().all(|e| e.org_path == "Hospital/EVS"));
    }

    #[test]
    fn test_jobs_and_rates_follow_department() {
        let config = config();
        let mut rng = StdRng::seed_from_u64(3);
        let employees = generate_employees(&config, &mut rng);

        for employee in &employees {
            match employee.department.as_str() {
                "Nursing" => {
                    assert_eq!(employee.job_code, "RN");
                    assert!((18.0..=55.0).contains(&employee.hourly_rate));
                }
                "EVS" => {
                    assert_eq!(employee.job_code, "GEN");
                    assert_eq!(employee.job_family, "EVS");
                    assert!((15.0..=35.0).contains(&employee.hourly_rate));
                }
                other => panic!("unexpected department {}", other),
            }
        }
    }

    #[test]
    fn test_same_seed_same_employees() {
        let config = config();
        let first = generate_employees(&config, &mut StdRng::seed_from_u64(5));
        let second = generate_employees(&config, &mut StdRng::seed_from_u64(5));
        assert_eq!(first, second);
    }
}
