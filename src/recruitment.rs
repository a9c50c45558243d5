//! Recruitment planning computations.
//!
//! Pure functions over recruitment plans, the salary master and the
//! previous-year employee list.  Each function takes the full collection
//! it needs and recomputes from scratch; nothing is cached and inputs are
//! never modified.  Year filtering is the caller's job (see
//! [`crate::store::Store`] selectors), except where a function takes the
//! year explicitly.

use crate::models::{FiscalMonth, PreviousEmployee, RecruitmentPlan, SalaryMaster};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Total planned hires over the fiscal year.
pub fn total_planned(plan: &RecruitmentPlan) -> u64 {
    plan.monthly_planned.total()
}

/// Total actual hires over the fiscal year.
pub fn total_actual(plan: &RecruitmentPlan) -> u64 {
    plan.monthly_actual.total()
}

/// Actual minus planned hires.  Negative means under-hiring.
pub fn variance(plan: &RecruitmentPlan) -> i64 {
    signed_difference(total_actual(plan), total_planned(plan))
}

/// `actual - planned` as a signed count, saturating at the `i64` bounds.
pub(crate) fn signed_difference(actual: u64, planned: u64) -> i64 {
    i128::from(actual)
        .saturating_sub(i128::from(planned))
        .clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

pub fn monthly_variance(plan: &RecruitmentPlan, month: FiscalMonth) -> i64 {
    i64::from(plan.monthly_actual.get(month)) - i64::from(plan.monthly_planned.get(month))
}

/// Annual cost of a monthly salary.  Every yearly figure in the crate is
/// derived through this function.
pub fn yearly_cost(monthly_salary: f64) -> f64 {
    monthly_salary * 12.0
}

/// Cost of `headcount` hires at `yearly_cost` each.
pub fn recruitment_cost(headcount: u64, yearly_cost: f64) -> f64 {
    headcount as f64 * yearly_cost
}

/// Actual hires as a percentage of planned hires; 0 when nothing was
/// planned.
pub fn completion_rate(planned: u64, actual: u64) -> f64 {
    if planned == 0 {
        0.0
    } else {
        actual as f64 / planned as f64 * 100.0
    }
}

/// Salary entry used to price a plan: the first entry with the same role
/// and experience level.
pub fn salary_for<'a>(plan: &RecruitmentPlan, salaries: &'a [SalaryMaster]) -> Option<&'a SalaryMaster> {
    salaries.iter().find(|s| s.matches(plan))
}

/// Cost of all actual hires across `plans`.
///
/// A plan without a matching salary entry contributes nothing.
pub fn total_recruitment_cost<'a, I>(plans: I, salaries: &[SalaryMaster]) -> f64
where
    I: IntoIterator<Item = &'a RecruitmentPlan>,
{
    plans
        .into_iter()
        .filter_map(|plan| {
            salary_for(plan, salaries).map(|s| recruitment_cost(total_actual(plan), s.yearly_cost()))
        })
        .sum()
}

/// Planned and actual hires for one fiscal month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyHires {
    pub month: FiscalMonth,
    /// Hires targeted, summed over plans (or running, for cumulative rows).
    pub planned: u64,
    /// Hires made, summed the same way as `planned`.
    pub actual: u64,
}

/// Hires per fiscal month summed over `plans`, in fiscal order.
pub fn monthly_hires(plans: &[&RecruitmentPlan]) -> Vec<MonthlyHires> {
    FiscalMonth::ALL
        .iter()
        .map(|&month| MonthlyHires {
            month,
            planned: plans.iter().map(|p| u64::from(p.monthly_planned.get(month))).sum(),
            actual: plans.iter().map(|p| u64::from(p.monthly_actual.get(month))).sum(),
        })
        .collect()
}

/// Running planned/actual totals over the first `months` entries of
/// `monthly`.  Each entry carries the cumulative figures up to and
/// including its month.
pub fn cumulative_hires(monthly: &[MonthlyHires], months: usize) -> Vec<MonthlyHires> {
    let mut planned = 0u64;
    let mut actual = 0u64;
    monthly
        .iter()
        .take(months)
        .map(|m| {
            planned += m.planned;
            actual += m.actual;
            MonthlyHires {
                month: m.month,
                planned,
                actual,
            }
        })
        .collect()
}

/// Target-versus-actual figures for one plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanAnalysis {
    /// Id of the analysed [`RecruitmentPlan`].
    pub id: String,
    pub role: String,
    pub department: String,
    pub experience_level: crate::models::ExperienceLevel,
    /// Planned hires over the year.
    pub planned: u64,
    /// Actual hires over the year.
    pub actual: u64,
    /// `actual - planned`; negative when behind target.
    pub variance: i64,
    /// Actual as a percentage of planned (may exceed 100); 0 when nothing
    /// was planned.
    pub completion_pct: f64,
}

impl PlanAnalysis {
    pub fn on_track(&self) -> bool {
        self.variance >= 0
    }
}

pub fn plan_analysis(plans: &[&RecruitmentPlan]) -> Vec<PlanAnalysis> {
    plans
        .iter()
        .map(|plan| {
            let planned = total_planned(plan);
            let actual = total_actual(plan);
            PlanAnalysis {
                id: plan.id.clone(),
                role: plan.role.clone(),
                department: plan.department.clone(),
                experience_level: plan.experience_level,
                planned,
                actual,
                variance: variance(plan),
                completion_pct: completion_rate(planned, actual),
            }
        })
        .collect()
}

/// Counts of plans that are on track (variance >= 0) and behind target.
pub fn track_counts(analysis: &[PlanAnalysis]) -> (usize, usize) {
    let on_track = analysis.iter().filter(|a| a.on_track()).count();
    (on_track, analysis.len() - on_track)
}

/// Recruitment cost per department for the plans of `year`.
///
/// Each salary entry prices the actual hires of every matching plan in
/// that year; departments that come to zero are left out.
pub fn recruitment_cost_by_department(
    plans: &[RecruitmentPlan],
    salaries: &[SalaryMaster],
    year: &str,
) -> BTreeMap<String, f64> {
    let mut by_department: BTreeMap<String, f64> = BTreeMap::new();
    for salary in salaries {
        let hires: u64 = plans
            .iter()
            .filter(|p| p.year == year && salary.matches(p))
            .map(total_actual)
            .sum();
        *by_department.entry(salary.department.clone()).or_default() +=
            recruitment_cost(hires, salary.yearly_cost());
    }
    by_department.retain(|_, cost| *cost > 0.0);
    by_department
}

/// Totals over the salary master.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SalaryTotals {
    /// Rupees per month.
    pub monthly: f64,
    /// Rupees per year.
    pub yearly: f64,
}

pub fn salary_totals(salaries: &[SalaryMaster]) -> SalaryTotals {
    salaries.iter().fold(SalaryTotals::default(), |acc, s| SalaryTotals {
        monthly: acc.monthly + s.monthly_salary,
        yearly: acc.yearly + s.yearly_cost(),
    })
}

/// Headcount and payroll over a set of previous-year employees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WorkforceSummary {
    pub total: usize,
    pub active: usize,
    pub exited: usize,
    /// Rupees per month across everyone counted in `total`.
    pub total_monthly_salary: f64,
}

/// Summary of previous-year employees, restricted to `year` when given.
pub fn workforce_summary(employees: &[PreviousEmployee], year: Option<&str>) -> WorkforceSummary {
    employees
        .iter()
        .filter(|e| year.map_or(true, |y| e.year == y))
        .fold(WorkforceSummary::default(), |mut acc, e| {
            acc.total += 1;
            if e.has_exited() {
                acc.exited += 1;
            } else {
                acc.active += 1;
            }
            acc.total_monthly_salary += e.monthly_salary;
            acc
        })
}

/// Distinct roles held by previous-year employees, sorted.
pub fn distinct_roles(employees: &[PreviousEmployee]) -> Vec<String> {
    employees
        .iter()
        .map(|e| e.role.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceLevel, MonthlyHeadcount};

    fn plan(id: &str, planned: [u32; 12], actual: [u32; 12]) -> RecruitmentPlan {
        RecruitmentPlan {
            id: id.into(),
            role: "Software Engineer".into(),
            experience_level: ExperienceLevel::Junior,
            department: "Engineering".into(),
            year: "2025-26".into(),
            monthly_planned: MonthlyHeadcount::from_counts(planned),
            monthly_actual: MonthlyHeadcount::from_counts(actual),
        }
    }

    fn salary(role: &str, level: ExperienceLevel, monthly: f64) -> SalaryMaster {
        SalaryMaster {
            id: format!("s-{role}"),
            role: role.into(),
            experience_level: level,
            department: "Engineering".into(),
            monthly_salary: monthly,
        }
    }

    #[test]
    fn test_yearly_cost_is_twelve_months() {
        for monthly in [0.0, 35000.0, 50000.0, 123456.5] {
            assert_eq!(yearly_cost(monthly), monthly * 12.0);
        }
    }

    #[test]
    fn test_variance_is_actual_minus_planned() {
        let p = plan("rp1", [2, 1, 2, 1, 2, 1, 2, 1, 0, 1, 2, 1], [2, 1, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(total_planned(&p), 16);
        assert_eq!(total_actual(&p), 7);
        assert_eq!(variance(&p), -9);
        assert_eq!(total_actual(&p) as i64 - total_planned(&p) as i64, variance(&p));

        let swapped = RecruitmentPlan {
            monthly_planned: p.monthly_actual,
            monthly_actual: p.monthly_planned,
            ..p.clone()
        };
        assert_eq!(variance(&swapped), -variance(&p));
        assert_eq!(monthly_variance(&p, FiscalMonth::Jun), -1);
    }

    #[test]
    fn test_totals_widen_past_u32() {
        let mut actual = [0; 12];
        actual[0] = u32::MAX;
        actual[1] = 1;
        let p = plan("rp1", [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], actual);
        let expected = u64::from(u32::MAX) + 1;

        assert_eq!(total_actual(&p), expected);
        assert_eq!(variance(&p), expected as i64 - 1);
        assert_eq!(completion_rate(total_planned(&p), total_actual(&p)), expected as f64 * 100.0);

        let monthly = monthly_hires(&[&p, &p]);
        assert_eq!(monthly[0].actual, 2 * u64::from(u32::MAX));
        assert_eq!(cumulative_hires(&monthly, 2)[1].actual, 2 * expected);
        assert_eq!(signed_difference(0, u64::MAX), i64::MIN);
    }

    #[test]
    fn test_recruitment_cost_skips_unpriced_plans() {
        let hired = plan("rp1", [0; 12], [1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let mut unpriced = plan("rp2", [0; 12], [4; 12]);
        unpriced.role = "Astronaut".into();
        let salaries = vec![salary("Software Engineer", ExperienceLevel::Junior, 50000.0)];

        assert_eq!(total_recruitment_cost([&hired], &salaries), 1_800_000.0);
        assert_eq!(total_recruitment_cost([&hired, &unpriced], &salaries), 1_800_000.0);
        assert_eq!(total_recruitment_cost([&unpriced], &salaries), 0.0);
    }

    #[test]
    fn test_monthly_and_cumulative_hires() {
        let a = plan("rp1", [1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0], [1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let b = plan("rp2", [0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1], [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let monthly = monthly_hires(&[&a, &b]);
        assert_eq!(monthly.len(), 12);
        assert_eq!(monthly[2], MonthlyHires { month: FiscalMonth::Jun, planned: 3, actual: 1 });
        assert_eq!(monthly[11].planned, 1);

        let cumulative = cumulative_hires(&monthly, 6);
        assert_eq!(cumulative.len(), 6);
        assert_eq!(cumulative[2], MonthlyHires { month: FiscalMonth::Jun, planned: 5, actual: 3 });
        assert_eq!(cumulative[5].planned, 5);
    }

    #[test]
    fn test_plan_analysis_and_track_counts() {
        let behind = plan("rp1", [2; 12], [1; 12]);
        let ahead = plan("rp2", [0; 12], [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let analysis = plan_analysis(&[&behind, &ahead]);
        assert_eq!(analysis[0].completion_pct, 50.0);
        assert_eq!(analysis[1].completion_pct, 0.0);
        assert_eq!(analysis[1].variance, 1);
        assert_eq!(track_counts(&analysis), (1, 1));
    }

    #[test]
    fn test_cost_by_department_omits_zero() {
        let plans = vec![plan("rp1", [0; 12], [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])];
        let mut design = salary("Designer", ExperienceLevel::Mid, 65000.0);
        design.department = "Design".into();
        let salaries = vec![salary("Software Engineer", ExperienceLevel::Junior, 50000.0), design];

        let costs = recruitment_cost_by_department(&plans, &salaries, "2025-26");
        assert_eq!(costs.len(), 1);
        assert_eq!(costs["Engineering"], 1_200_000.0);
        assert!(recruitment_cost_by_department(&plans, &salaries, "2024-25").is_empty());
    }

    #[test]
    fn test_salary_totals() {
        let salaries = vec![
            salary("A", ExperienceLevel::Junior, 35000.0),
            salary("B", ExperienceLevel::Mid, 75000.0),
        ];
        let totals = salary_totals(&salaries);
        assert_eq!(totals.monthly, 110000.0);
        assert_eq!(totals.yearly, 1_320_000.0);
    }

    #[test]
    fn test_workforce_summary_by_year() {
        let employee = |id: &str, year: &str, exit: Option<&str>| PreviousEmployee {
            id: id.into(),
            name: id.into(),
            role: "QA Engineer".into(),
            department: "Quality".into(),
            join_date: "2024-04-01".into(),
            exit_date: exit.map(String::from),
            year: year.into(),
            monthly_salary: 40000.0,
        };
        let staff = vec![
            employee("a", "2024-25", None),
            employee("b", "2024-25", Some("2024-10-15")),
            employee("c", "2023-24", None),
        ];
        let summary = workforce_summary(&staff, Some("2024-25"));
        assert_eq!(summary.total, 2);
        assert_eq!(summary.active, 1);
        assert_eq!(summary.exited, 1);
        assert_eq!(summary.total_monthly_salary, 80000.0);
        assert_eq!(workforce_summary(&staff, None).total, 3);
        assert_eq!(distinct_roles(&staff), vec!["QA Engineer".to_string()]);
    }
}
