//! The dashboard's state container.
//!
//! A [`Store`] owns every record collection together with the view state
//! (selected fiscal year and HR role).  It is an ordinary value: callers
//! hold it, pass it to whatever needs it and get a new store back from
//! each mutator.  There is no global instance.
//!
//! Mutators are lenient.  A mutation that names an id not present in the
//! collection leaves the store unchanged and only logs a debug event; it
//! is not an error.  Selectors never fail either: missing data reads as
//! zero or empty.  Input values are not validated here.

use crate::finance::{FinancialSummary, FinancialUpdate};
use crate::metrics::{self, BusinessTotals, EmployeeCommission, EmployeeDashboard};
use crate::models::{
    Client, Commission, Employee, Expense, FiscalMonth, HrRole, Payment, PreviousEmployee, Project,
    RecruitmentPlan, SalaryMaster,
};
use crate::recruitment::{self, MonthlyHires, PlanAnalysis, SalaryTotals, WorkforceSummary};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// A record kept in one of the store's collections.
pub trait Record: Clone {
    /// Collection name, used in log events.
    const COLLECTION: &'static str;
    /// Prefix for ids assigned by [`Store::add_record`].
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn records(store: &Store) -> &[Self];
    fn records_mut(store: &mut Store) -> &mut Vec<Self>;
}

macro_rules! impl_record {
    ($ty:ty, $field:ident, $prefix:literal) => {
        impl Record for $ty {
            const COLLECTION: &'static str = stringify!($field);
            const ID_PREFIX: &'static str = $prefix;

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }

            fn records(store: &Store) -> &[Self] {
                &store.$field
            }

            fn records_mut(store: &mut Store) -> &mut Vec<Self> {
                &mut store.$field
            }
        }
    };
}

impl_record!(Employee, employees, "e");
impl_record!(Client, clients, "c");
impl_record!(Project, projects, "p");
impl_record!(Payment, payments, "pay");
impl_record!(Expense, expenses, "exp");
impl_record!(Commission, commissions, "com");
impl_record!(RecruitmentPlan, recruitment_plans, "rp");
impl_record!(SalaryMaster, salary_master, "s");
impl_record!(PreviousEmployee, previous_employees, "pe");

/// All dashboard data plus the current view selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    employees: Vec<Employee>,
    #[serde(default)]
    clients: Vec<Client>,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    payments: Vec<Payment>,
    #[serde(default)]
    expenses: Vec<Expense>,
    #[serde(default)]
    commissions: Vec<Commission>,
    #[serde(default)]
    recruitment_plans: Vec<RecruitmentPlan>,
    #[serde(default)]
    salary_master: Vec<SalaryMaster>,
    #[serde(default)]
    previous_employees: Vec<PreviousEmployee>,
    financial_summary: FinancialSummary,
    selected_year: String,
    #[serde(default)]
    selected_role: HrRole,
}

impl Store {
    /// An empty store for `financial_summary`, with its year selected.
    pub fn new(financial_summary: FinancialSummary) -> Self {
        Self {
            employees: Vec::new(),
            clients: Vec::new(),
            projects: Vec::new(),
            payments: Vec::new(),
            expenses: Vec::new(),
            commissions: Vec::new(),
            recruitment_plans: Vec::new(),
            salary_master: Vec::new(),
            previous_employees: Vec::new(),
            selected_year: financial_summary.year.clone(),
            financial_summary,
            selected_role: HrRole::default(),
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Every record of type `R`.
    pub fn records<R: Record>(&self) -> &[R] {
        R::records(self)
    }

    pub fn get<R: Record>(&self, id: &str) -> Option<&R> {
        R::records(self).iter().find(|r| r.id() == id)
    }

    pub fn financial_summary(&self) -> &FinancialSummary {
        &self.financial_summary
    }

    pub fn selected_year(&self) -> &str {
        &self.selected_year
    }

    pub fn selected_role(&self) -> HrRole {
        self.selected_role
    }

    /// Whether the selected HR role may edit recruitment data.  Only
    /// reported for the presentation layer; mutators do not check it.
    pub fn can_edit_recruitment(&self) -> bool {
        self.selected_role == HrRole::Hr
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    /// Appends `record` under a freshly assigned id, replacing whatever
    /// id it carried.
    #[must_use]
    pub fn add_record<R: Record>(mut self, mut record: R) -> Self {
        let id = self.fresh_id::<R>();
        debug!(collection = R::COLLECTION, id = %id, "adding record");
        record.set_id(id);
        R::records_mut(&mut self).push(record);
        self
    }

    /// Replaces the record with the same id as `record`.
    #[must_use]
    pub fn replace_record<R: Record>(self, record: R) -> Self {
        let id = record.id().to_string();
        self.modify::<R>(&id, move |existing| *existing = record)
    }

    #[must_use]
    pub fn delete_record<R: Record>(mut self, id: &str) -> Self {
        let records = R::records_mut(&mut self);
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            debug!(collection = R::COLLECTION, id, "no record to delete");
        }
        self
    }

    /// Sets one month's planned hires on a plan.  Counts are unsigned, so
    /// a negative headcount cannot be represented; any `u32` is accepted.
    #[must_use]
    pub fn update_monthly_planned(self, plan_id: &str, month: FiscalMonth, value: u32) -> Self {
        self.modify::<RecruitmentPlan>(plan_id, |plan| plan.monthly_planned.set(month, value))
    }

    /// Sets one month's actual hires on a plan.  As with
    /// [`Store::update_monthly_planned`], negative counts cannot be
    /// represented and every `u32` is accepted.
    #[must_use]
    pub fn update_monthly_actual(self, plan_id: &str, month: FiscalMonth, value: u32) -> Self {
        self.modify::<RecruitmentPlan>(plan_id, |plan| plan.monthly_actual.set(month, value))
    }

    /// Sets a salary entry's monthly salary.  Its yearly cost follows,
    /// being derived on read.
    #[must_use]
    pub fn update_salary(self, salary_id: &str, monthly_salary: f64) -> Self {
        self.modify::<SalaryMaster>(salary_id, |s| s.monthly_salary = monthly_salary)
    }

    #[must_use]
    pub fn update_financial_summary(mut self, update: FinancialUpdate) -> Self {
        self.financial_summary = self.financial_summary.apply(update);
        self
    }

    #[must_use]
    pub fn update_tax_rate(self, tax_rate: f64) -> Self {
        self.update_financial_summary(FinancialUpdate {
            tax_rate: Some(tax_rate),
            ..Default::default()
        })
    }

    #[must_use]
    pub fn set_selected_year(mut self, year: impl Into<String>) -> Self {
        self.selected_year = year.into();
        self
    }

    #[must_use]
    pub fn set_selected_role(mut self, role: HrRole) -> Self {
        self.selected_role = role;
        self
    }

    /// Appends records as given, keeping their ids.  Used when loading a
    /// dataset.
    pub(crate) fn extend_records<R: Record>(&mut self, records: impl IntoIterator<Item = R>) {
        R::records_mut(self).extend(records);
    }

    fn modify<R: Record>(mut self, id: &str, change: impl FnOnce(&mut R)) -> Self {
        match R::records_mut(&mut self).iter_mut().find(|r| r.id() == id) {
            Some(record) => change(record),
            None => debug!(collection = R::COLLECTION, id, "no record to update"),
        }
        self
    }

    /// `<prefix><unix millis>`, suffixed when that id is already taken.
    fn fresh_id<R: Record>(&self) -> String {
        let base = format!("{}{}", R::ID_PREFIX, chrono::Utc::now().timestamp_millis());
        let taken = |candidate: &str| R::records(self).iter().any(|r| r.id() == candidate);
        if !taken(&base) {
            return base;
        }
        let mut n = 1;
        loop {
            let candidate = format!("{base}-{n}");
            if !taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    // ------------------------------------------------------------------
    // Recruitment selectors (selected year)
    // ------------------------------------------------------------------

    /// Recruitment plans of the selected year.
    pub fn year_plans(&self) -> Vec<&RecruitmentPlan> {
        self.recruitment_plans
            .iter()
            .filter(|p| p.year == self.selected_year)
            .collect()
    }

    pub fn total_planned_hires(&self) -> u64 {
        self.year_plans().into_iter().map(recruitment::total_planned).sum()
    }

    pub fn total_actual_hires(&self) -> u64 {
        self.year_plans().into_iter().map(recruitment::total_actual).sum()
    }

    pub fn hiring_variance(&self) -> i64 {
        recruitment::signed_difference(self.total_actual_hires(), self.total_planned_hires())
    }

    pub fn hiring_rate(&self) -> f64 {
        recruitment::completion_rate(self.total_planned_hires(), self.total_actual_hires())
    }

    pub fn total_recruitment_cost(&self) -> f64 {
        recruitment::total_recruitment_cost(self.year_plans(), &self.salary_master)
    }

    pub fn monthly_hires(&self) -> Vec<MonthlyHires> {
        recruitment::monthly_hires(&self.year_plans())
    }

    /// Running hire totals for the first `months` fiscal months.
    pub fn cumulative_hires(&self, months: usize) -> Vec<MonthlyHires> {
        recruitment::cumulative_hires(&self.monthly_hires(), months)
    }

    pub fn plan_analysis(&self) -> Vec<PlanAnalysis> {
        recruitment::plan_analysis(&self.year_plans())
    }

    pub fn recruitment_cost_by_department(&self) -> BTreeMap<String, f64> {
        recruitment::recruitment_cost_by_department(
            &self.recruitment_plans,
            &self.salary_master,
            &self.selected_year,
        )
    }

    pub fn salary_totals(&self) -> SalaryTotals {
        recruitment::salary_totals(&self.salary_master)
    }

    /// Previous-year workforce, restricted to `year` when given.
    pub fn workforce_summary(&self, year: Option<&str>) -> WorkforceSummary {
        recruitment::workforce_summary(&self.previous_employees, year)
    }

    // ------------------------------------------------------------------
    // Business selectors
    // ------------------------------------------------------------------

    pub fn business_totals(&self) -> BusinessTotals {
        metrics::business_totals(&self.payments, &self.expenses, &self.projects, &self.clients)
    }

    pub fn commission_summary(&self) -> Vec<EmployeeCommission> {
        metrics::employee_commission_summary(&self.employees, &self.commissions)
    }

    pub fn employee_dashboard(&self, employee_id: &str) -> EmployeeDashboard {
        metrics::employee_dashboard(employee_id, &self.clients, &self.commissions, &self.projects)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(FinancialSummary {
            year: "2025-26".to_string(),
            turnover: 0.0,
            total_expense: 0.0,
            recruitment_cost: 0.0,
            tax_rate: 0.0,
        })
    }
}
