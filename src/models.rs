//! Data models for the Dashboard Engine.
//!
//! The `models` module defines the flat, serialisable records the
//! dashboard works with: the business side (employees, clients,
//! projects, payments, expenses and commissions) and the HR side
//! (recruitment plans, the salary master and previous-year employees).
//! Records are values: a change is made by replacing the whole record in
//! its owning collection, never by patching it in place from outside the
//! store.
//!
//! Derived figures such as a salary entry's yearly cost are exposed as
//! methods and are never stored, so they cannot drift from their inputs.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Role of a user of the business dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    Employee,
    Finance,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Admin,
        UserRole::Manager,
        UserRole::Employee,
        UserRole::Finance,
    ];

    /// Employees and managers bring in clients and earn commission;
    /// admins and finance staff do not appear in sales rankings.
    pub fn earns_commission(self) -> bool {
        matches!(self, UserRole::Employee | UserRole::Manager)
    }
}

/// A member of staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Dashboard role; decides visible sections and commission eligibility.
    pub role: UserRole,
    /// Commission percentage (0-100) applied to payments from clients
    /// this employee owns.
    pub commission_rate: f64,
    pub department: String,
    /// ISO date (`YYYY-MM-DD`).
    pub join_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Active,
    Inactive,
    Pending,
}

/// A client company and the employee who brought it in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    /// Contact person at the client.
    pub name: String,
    pub email: String,
    /// Company name shown in rankings.
    pub company: String,
    /// Id of the [`Employee`] who owns the relationship.
    pub owner_id: String,
    pub status: ClientStatus,
    /// Lifetime revenue from this client, in rupees.
    pub total_revenue: f64,
    /// ISO date the client was added.
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Completed,
    OnHold,
    Cancelled,
}

/// A contracted piece of work for a client.
///
/// `profit` is kept by whoever edits the project and is expected to equal
/// `revenue - project_cost`; nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Id of the [`Client`] the work is for.
    pub client_id: String,
    /// Agreed contract value, in rupees.
    pub contract_value: f64,
    /// ISO start date; progress is measured from here.
    pub start_date: String,
    /// ISO end date; progress reaches 100% here.
    pub end_date: String,
    /// Ids of the [`Employee`]s working on the project.
    pub assigned_employees: BTreeSet<String>,
    /// Cost incurred so far, in rupees.
    pub project_cost: f64,
    pub status: ProjectStatus,
    /// Revenue earned so far, in rupees.
    pub revenue: f64,
    /// Rupees; see the type-level note.
    pub profit: f64,
}

impl Project {
    pub fn is_assigned(&self, employee_id: &str) -> bool {
        self.assigned_employees.contains(employee_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Received,
    Pending,
    Overdue,
}

/// An invoiced payment from a client against a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    /// Id of the paying [`Client`].
    pub client_id: String,
    /// Id of the [`Project`] being invoiced.
    pub project_id: String,
    /// Invoiced amount, in rupees.
    pub amount: f64,
    /// ISO invoice date.
    pub date: String,
    pub status: PaymentStatus,
    /// Free-form invoice reference, e.g. `"INV-2024-001"`.
    pub invoice_number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Salary,
    Tools,
    Cloud,
    Freelancer,
    Other,
}

/// A cost booked against a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    /// Id of the [`Project`] the cost is booked against.
    pub project_id: String,
    pub category: ExpenseCategory,
    pub description: String,
    /// Amount spent, in rupees.
    pub amount: f64,
    /// ISO date the cost was booked.
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommissionStatus {
    Paid,
    Pending,
}

/// Commission owed to an employee for a client payment.  By convention
/// `amount` is the payment amount times `rate / 100`; see
/// [`crate::metrics::commission_amount`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commission {
    pub id: String,
    /// Id of the [`Employee`] who earns the commission.
    pub employee_id: String,
    /// Id of the [`Client`] whose payment triggered it.
    pub client_id: String,
    /// Id of the [`Payment`] it is computed from.
    pub payment_id: String,
    /// Commission owed, in rupees.
    pub amount: f64,
    /// Percentage (0-100), not a fraction.
    pub rate: f64,
    /// ISO date.
    pub date: String,
    pub status: CommissionStatus,
}

/// Months of the Indian financial year, in fiscal order (April to March).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FiscalMonth {
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
    Jan,
    Feb,
    Mar,
}

impl FiscalMonth {
    pub const ALL: [FiscalMonth; 12] = [
        FiscalMonth::Apr,
        FiscalMonth::May,
        FiscalMonth::Jun,
        FiscalMonth::Jul,
        FiscalMonth::Aug,
        FiscalMonth::Sep,
        FiscalMonth::Oct,
        FiscalMonth::Nov,
        FiscalMonth::Dec,
        FiscalMonth::Jan,
        FiscalMonth::Feb,
        FiscalMonth::Mar,
    ];

    /// Zero-based position within the fiscal year (`Apr` is 0).
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Headcount per fiscal month.
///
/// Always covers exactly the twelve fiscal months.  It serialises as a
/// month-keyed map; months missing from stored data read back as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<FiscalMonth, u32>", into = "BTreeMap<FiscalMonth, u32>")]
pub struct MonthlyHeadcount([u32; 12]);

impl MonthlyHeadcount {
    /// Builds the map from counts listed in fiscal order (Apr..Mar).
    pub const fn from_counts(counts: [u32; 12]) -> Self {
        Self(counts)
    }

    pub fn get(&self, month: FiscalMonth) -> u32 {
        self.0[month.index()]
    }

    pub fn set(&mut self, month: FiscalMonth, value: u32) {
        self.0[month.index()] = value;
    }

    /// Sum over all twelve months, widened so that no set of monthly
    /// counts can overflow it.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&c| u64::from(c)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FiscalMonth, u32)> + '_ {
        FiscalMonth::ALL.iter().map(move |&m| (m, self.get(m)))
    }
}

impl From<BTreeMap<FiscalMonth, u32>> for MonthlyHeadcount {
    fn from(map: BTreeMap<FiscalMonth, u32>) -> Self {
        let mut counts = Self::default();
        for (month, value) in map {
            counts.set(month, value);
        }
        counts
    }
}

impl From<MonthlyHeadcount> for BTreeMap<FiscalMonth, u32> {
    fn from(counts: MonthlyHeadcount) -> Self {
        counts.iter().collect()
    }
}

/// Seniority band used to match recruitment plans to salary entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Fresher,
    Junior,
    Mid,
    Senior,
    Lead,
    Manager,
}

impl ExperienceLevel {
    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Fresher => "Fresher (0-1 yr)",
            ExperienceLevel::Junior => "Junior (1-3 yrs)",
            ExperienceLevel::Mid => "Mid-Level (3-5 yrs)",
            ExperienceLevel::Senior => "Senior (5-8 yrs)",
            ExperienceLevel::Lead => "Lead (8-10 yrs)",
            ExperienceLevel::Manager => "Manager (10+ yrs)",
        }
    }
}

/// Role of a user of the HR recruitment module.  HR edits the plans;
/// the CEO view is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HrRole {
    Hr,
    #[default]
    Ceo,
}

/// Planned and actual hires for one role and experience level over a
/// fiscal year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecruitmentPlan {
    pub id: String,
    /// Job title; together with `experience_level` it selects the
    /// [`SalaryMaster`] entry that prices the plan.
    pub role: String,
    pub experience_level: ExperienceLevel,
    pub department: String,
    /// Fiscal year label, e.g. `"2025-26"`.
    pub year: String,
    /// Hires targeted per month.
    pub monthly_planned: MonthlyHeadcount,
    /// Hires made per month.
    pub monthly_actual: MonthlyHeadcount,
}

/// Standard monthly salary for a role at an experience level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryMaster {
    pub id: String,
    pub role: String,
    pub experience_level: ExperienceLevel,
    pub department: String,
    /// Monthly salary in rupees.
    pub monthly_salary: f64,
}

impl SalaryMaster {
    /// Annual cost of one hire at this salary.
    pub fn yearly_cost(&self) -> f64 {
        crate::recruitment::yearly_cost(self.monthly_salary)
    }

    /// Whether this entry prices hires for `plan`.
    pub fn matches(&self, plan: &RecruitmentPlan) -> bool {
        self.role == plan.role && self.experience_level == plan.experience_level
    }
}

/// An employee on the books in a previous fiscal year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviousEmployee {
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub join_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_date: Option<String>,
    pub year: String,
    pub monthly_salary: f64,
}

impl PreviousEmployee {
    /// An employee with an exit date has left; one without is active.
    pub fn has_exited(&self) -> bool {
        self.exit_date.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_monthly_headcount_reads_missing_months_as_zero() {
        let counts: MonthlyHeadcount = serde_json::from_value(json!({"Apr": 2, "Mar": 5})).unwrap();
        assert_eq!(counts.get(FiscalMonth::Apr), 2);
        assert_eq!(counts.get(FiscalMonth::Mar), 5);
        assert_eq!(counts.get(FiscalMonth::Oct), 0);
        assert_eq!(counts.total(), 7);

        let back = serde_json::to_value(counts).unwrap();
        assert_eq!(back.as_object().unwrap().len(), 12);
        assert_eq!(back["Jan"], 0);
    }

    #[test]
    fn test_monthly_headcount_total_does_not_overflow() {
        let mut counts = MonthlyHeadcount::default();
        counts.set(FiscalMonth::Apr, u32::MAX);
        counts.set(FiscalMonth::May, 1);
        assert_eq!(counts.total(), u64::from(u32::MAX) + 1);
        assert_eq!(MonthlyHeadcount::from_counts([u32::MAX; 12]).total(), 12 * u64::from(u32::MAX));
    }

    #[test]
    fn test_fiscal_months_start_in_april() {
        assert_eq!(FiscalMonth::ALL[0], FiscalMonth::Apr);
        assert_eq!(FiscalMonth::Mar.index(), 11);
        assert!(FiscalMonth::Dec < FiscalMonth::Jan);
    }

    #[test]
    fn test_project_status_uses_kebab_case() {
        assert_eq!(serde_json::to_value(ProjectStatus::OnHold).unwrap(), json!("on-hold"));
        let status: PaymentStatus = serde_json::from_value(json!("overdue")).unwrap();
        assert_eq!(status, PaymentStatus::Overdue);
    }

    #[test]
    fn test_previous_employee_exit_state() {
        let mut employee = PreviousEmployee {
            id: "pe1".into(),
            name: "Test".into(),
            role: "QA Engineer".into(),
            department: "Quality".into(),
            join_date: "2024-04-01".into(),
            exit_date: None,
            year: "2024-25".into(),
            monthly_salary: 45000.0,
        };
        assert!(!employee.has_exited());
        employee.exit_date = Some("2024-10-15".into());
        assert!(employee.has_exited());
    }
}
