//! Dashboard report.
//!
//! A [`DashboardReport`] gathers the figures every dashboard page reads
//! from a [`Store`] into one serialisable value: business totals and
//! rankings, the recruitment picture for the selected fiscal year and
//! the financial summary with its derived profits.

use crate::finance::FinancialView;
use crate::metrics::{self, BusinessTotals, EmployeeCommission, EmployeeRevenue, PaymentTotals};
use crate::models::{Client, Employee, Expense, ExpenseCategory, Payment, PreviousEmployee, Project};
use crate::recruitment::{self, MonthlyHires, PlanAnalysis, SalaryTotals, WorkforceSummary};
use crate::store::Store;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Months covered by the executive running summary.
const SUMMARY_MONTHS: usize = 6;
/// Clients listed in the top-clients ranking.
const TOP_CLIENTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopClient {
    pub id: String,
    pub company: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectProgress {
    pub id: String,
    pub name: String,
    pub progress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessReport {
    pub totals: BusinessTotals,
    pub payments: PaymentTotals,
    pub expenses_by_category: BTreeMap<ExpenseCategory, f64>,
    pub commissions: Vec<EmployeeCommission>,
    pub revenue_by_owner: Vec<EmployeeRevenue>,
    pub top_clients: Vec<TopClient>,
    pub project_progress: Vec<ProjectProgress>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecruitmentReport {
    pub year: String,
    /// Planned hires over the selected year, summed across plans.
    pub planned: u64,
    pub actual: u64,
    pub variance: i64,
    /// Actual hires as a percentage of planned.
    pub hiring_rate: f64,
    pub recruitment_cost: f64,
    pub monthly: Vec<MonthlyHires>,
    pub running: Vec<MonthlyHires>,
    pub plans: Vec<PlanAnalysis>,
    pub on_track: usize,
    pub behind_target: usize,
    pub cost_by_department: BTreeMap<String, f64>,
    pub salaries: SalaryTotals,
    pub previous_workforce: WorkforceSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub business: BusinessReport,
    pub recruitment: RecruitmentReport,
    pub finance: FinancialView,
}

impl DashboardReport {
    /// Builds the report for the store's selected year, with project
    /// progress measured on `today`.
    pub fn build(store: &Store, today: NaiveDate) -> Self {
        let payments = store.records::<Payment>();
        let expenses = store.records::<Expense>();
        let clients = store.records::<Client>();

        let business = BusinessReport {
            totals: store.business_totals(),
            payments: metrics::payment_totals(payments),
            expenses_by_category: metrics::expenses_by_category(expenses),
            commissions: store.commission_summary(),
            revenue_by_owner: metrics::revenue_by_owner(store.records::<Employee>(), clients),
            top_clients: metrics::top_clients(clients, TOP_CLIENTS)
                .into_iter()
                .map(|c| TopClient {
                    id: c.id.clone(),
                    company: c.company.clone(),
                    revenue: c.total_revenue,
                })
                .collect(),
            project_progress: store
                .records::<Project>()
                .iter()
                .map(|p| ProjectProgress {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    progress: metrics::project_progress(p, today),
                })
                .collect(),
        };

        let plans = store.plan_analysis();
        let (on_track, behind_target) = recruitment::track_counts(&plans);
        let recruitment = RecruitmentReport {
            year: store.selected_year().to_string(),
            planned: store.total_planned_hires(),
            actual: store.total_actual_hires(),
            variance: store.hiring_variance(),
            hiring_rate: store.hiring_rate(),
            recruitment_cost: store.total_recruitment_cost(),
            monthly: store.monthly_hires(),
            running: store.cumulative_hires(SUMMARY_MONTHS),
            plans,
            on_track,
            behind_target,
            cost_by_department: store.recruitment_cost_by_department(),
            salaries: store.salary_totals(),
            previous_workforce: recruitment::workforce_summary(
                store.records::<PreviousEmployee>(),
                None,
            ),
        };

        Self {
            business,
            recruitment,
            finance: store.financial_summary().view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_store;

    #[test]
    fn test_report_for_sample_data() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let report = DashboardReport::build(&sample_store(), today);

        assert_eq!(report.business.totals.total_revenue, 279000.0);
        assert_eq!(report.business.totals.total_cost, 167000.0);
        assert_eq!(report.business.totals.active_projects, 3);
        assert_eq!(report.business.top_clients[0].company, "Enterprise Co.");
        assert_eq!(report.business.commissions[0].employee_id, "e2");
        assert_eq!(report.business.commissions[0].pending, 1200.0);

        assert_eq!(report.recruitment.running.len(), 6);
        assert_eq!(report.recruitment.on_track + report.recruitment.behind_target, 8);
        assert_eq!(report.recruitment.previous_workforce.exited, 1);
        assert_eq!(report.finance.pbt, 15_000_000.0);
    }

    #[test]
    fn test_report_serialises() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let value = serde_json::to_value(DashboardReport::build(&sample_store(), today)).unwrap();
        assert_eq!(value["recruitment"]["year"], "2025-26");
        assert!(value["business"]["expenses_by_category"]["cloud"].is_number());
    }
}
