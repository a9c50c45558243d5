//! Business metrics.
//!
//! The `metrics` module turns the business collections (payments,
//! expenses, projects, clients, commissions) into the aggregates the
//! dashboards display.  Every function is pure: it takes the full
//! collections, recomputes from scratch and leaves its inputs untouched.
//! Per-employee summaries are computed with [`rayon`] parallel
//! iterators; `collect` preserves input order, so rankings tie-break on
//! the order of the input collection.

use crate::models::{
    Client, Commission, CommissionStatus, Employee, Expense, ExpenseCategory, Payment,
    PaymentStatus, Project, ProjectStatus,
};
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Commission earned on a payment at `rate` percent.
pub fn commission_amount(payment_amount: f64, rate: f64) -> f64 {
    payment_amount * rate / 100.0
}

/// Sum of payments with the given status.
pub fn payments_with_status(payments: &[Payment], status: PaymentStatus) -> f64 {
    payments
        .iter()
        .filter(|p| p.status == status)
        .map(|p| p.amount)
        .sum()
}

/// Revenue actually collected: the sum of received payments.
pub fn total_revenue(payments: &[Payment]) -> f64 {
    payments_with_status(payments, PaymentStatus::Received)
}

/// Sum of all expenses.
pub fn total_cost(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Payment amounts in rupees, split by status.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PaymentTotals {
    pub received: f64,
    pub pending: f64,
    pub overdue: f64,
}

pub fn payment_totals(payments: &[Payment]) -> PaymentTotals {
    PaymentTotals {
        received: payments_with_status(payments, PaymentStatus::Received),
        pending: payments_with_status(payments, PaymentStatus::Pending),
        overdue: payments_with_status(payments, PaymentStatus::Overdue),
    }
}

/// Expense amounts grouped by category.  Categories with no expenses are
/// absent.
pub fn expenses_by_category(expenses: &[Expense]) -> BTreeMap<ExpenseCategory, f64> {
    expenses.iter().fold(BTreeMap::new(), |mut acc, e| {
        *acc.entry(e.category).or_insert(0.0) += e.amount;
        acc
    })
}

/// Headline figures for the main dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BusinessTotals {
    /// Received payments, in rupees.
    pub total_revenue: f64,
    /// All expenses, in rupees.
    pub total_cost: f64,
    /// `total_revenue - total_cost`.
    pub total_profit: f64,
    pub active_projects: usize,
    pub total_clients: usize,
    /// Money still owed: pending plus overdue payments.
    pub outstanding_payments: f64,
}

pub fn business_totals(
    payments: &[Payment],
    expenses: &[Expense],
    projects: &[Project],
    clients: &[Client],
) -> BusinessTotals {
    let total_revenue = total_revenue(payments);
    let total_cost = total_cost(expenses);
    BusinessTotals {
        total_revenue,
        total_cost,
        total_profit: total_revenue - total_cost,
        active_projects: projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Active)
            .count(),
        total_clients: clients.len(),
        outstanding_payments: payments_with_status(payments, PaymentStatus::Pending)
            + payments_with_status(payments, PaymentStatus::Overdue),
    }
}

/// Commission amounts split by status.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CommissionTotals {
    pub total: f64,
    pub paid: f64,
    pub pending: f64,
}

pub fn commission_totals<'a, I>(commissions: I) -> CommissionTotals
where
    I: IntoIterator<Item = &'a Commission>,
{
    commissions
        .into_iter()
        .fold(CommissionTotals::default(), |mut acc, c| {
            acc.total += c.amount;
            match c.status {
                CommissionStatus::Paid => acc.paid += c.amount,
                CommissionStatus::Pending => acc.pending += c.amount,
            }
            acc
        })
}

/// One row of the commission leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeCommission {
    /// Id of the [`Employee`] the row is for.
    pub employee_id: String,
    pub name: String,
    pub total: f64,
    pub paid: f64,
    pub pending: f64,
}

/// Commission per commission-earning employee (role employee or
/// manager), highest total first.
///
/// Employees with no commission are left out.  Ties keep the order of
/// `employees`.
pub fn employee_commission_summary(
    employees: &[Employee],
    commissions: &[Commission],
) -> Vec<EmployeeCommission> {
    let mut summary: Vec<EmployeeCommission> = employees
        .par_iter()
        .filter(|e| e.role.earns_commission())
        .map(|employee| {
            let totals = commission_totals(
                commissions.iter().filter(|c| c.employee_id == employee.id),
            );
            EmployeeCommission {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                total: totals.total,
                paid: totals.paid,
                pending: totals.pending,
            }
        })
        .filter(|row| row.total > 0.0)
        .collect();
    summary.sort_by(|a, b| b.total.total_cmp(&a.total));
    summary
}

/// Revenue from the clients an employee owns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRevenue {
    pub employee_id: String,
    pub name: String,
    pub revenue: f64,
}

/// Client revenue per commission-earning employee, highest first.
/// Employees owning no revenue are left out.
pub fn revenue_by_owner(employees: &[Employee], clients: &[Client]) -> Vec<EmployeeRevenue> {
    let mut rows: Vec<EmployeeRevenue> = employees
        .par_iter()
        .filter(|e| e.role.earns_commission())
        .map(|employee| EmployeeRevenue {
            employee_id: employee.id.clone(),
            name: employee.name.clone(),
            revenue: clients
                .iter()
                .filter(|c| c.owner_id == employee.id)
                .map(|c| c.total_revenue)
                .sum(),
        })
        .filter(|row| row.revenue > 0.0)
        .collect();
    rows.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    rows
}

/// The `n` clients with the highest total revenue.
pub fn top_clients(clients: &[Client], n: usize) -> Vec<&Client> {
    let mut ranked: Vec<&Client> = clients.iter().collect();
    ranked.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    ranked.truncate(n);
    ranked
}

/// Completion percentage of a project on `today`.
///
/// Completed projects are at 100 and paused or cancelled ones at 0.  An
/// active project is credited with the elapsed share of its schedule,
/// clamped to 0..=100; if its dates do not parse it reports 0.
pub fn project_progress(project: &Project, today: NaiveDate) -> f64 {
    match project.status {
        ProjectStatus::Completed => 100.0,
        ProjectStatus::OnHold | ProjectStatus::Cancelled => 0.0,
        ProjectStatus::Active => {
            let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
            let (Some(start), Some(end)) = (parse(&project.start_date), parse(&project.end_date))
            else {
                return 0.0;
            };
            let total = (end - start).num_days();
            if total <= 0 {
                return if today >= end { 100.0 } else { 0.0 };
            }
            let elapsed = (today - start).num_days();
            (elapsed as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
        }
    }
}

/// Everything the personal dashboard shows for one employee.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EmployeeDashboard {
    pub employee_id: String,
    /// Ids of the clients this employee owns.
    pub client_ids: Vec<String>,
    /// Lifetime revenue of those clients, in rupees.
    pub client_revenue: f64,
    pub commissions: CommissionTotals,
    /// Ids of the projects the employee is assigned to.
    pub project_ids: Vec<String>,
    pub active_projects: usize,
}

/// Personal dashboard for `employee_id`.  An unknown id yields an empty
/// dashboard.
pub fn employee_dashboard(
    employee_id: &str,
    clients: &[Client],
    commissions: &[Commission],
    projects: &[Project],
) -> EmployeeDashboard {
    let owned: Vec<&Client> = clients.iter().filter(|c| c.owner_id == employee_id).collect();
    let assigned: Vec<&Project> = projects.iter().filter(|p| p.is_assigned(employee_id)).collect();
    EmployeeDashboard {
        employee_id: employee_id.to_string(),
        client_ids: owned.iter().map(|c| c.id.clone()).collect(),
        client_revenue: owned.iter().map(|c| c.total_revenue).sum(),
        commissions: commission_totals(commissions.iter().filter(|c| c.employee_id == employee_id)),
        project_ids: assigned.iter().map(|p| p.id.clone()).collect(),
        active_projects: assigned
            .iter()
            .filter(|p| p.status == ProjectStatus::Active)
            .count(),
    }
}
