//! End-to-end checks of the store, aggregations and snapshot through the
//! public API.

use dashboard_engine::finance::{profit_after_tax, FinancialUpdate};
use dashboard_engine::metrics::employee_commission_summary;
use dashboard_engine::models::{
    Client, Commission, CommissionStatus, Employee, ExperienceLevel, FiscalMonth, HrRole,
    MonthlyHeadcount, Payment, PaymentStatus, RecruitmentPlan, SalaryMaster,
};
use dashboard_engine::persist::Snapshot;
use dashboard_engine::recruitment::{self, yearly_cost};
use dashboard_engine::seed::sample_store;
use dashboard_engine::store::Store;

#[test]
fn financial_summary_scenario() {
    let store = Store::default().update_financial_summary(FinancialUpdate {
        turnover: Some(50_000_000.0),
        total_expense: Some(35_000_000.0),
        tax_rate: Some(25.0),
        ..Default::default()
    });
    let summary = store.financial_summary();
    assert_eq!(summary.pbt(), 15_000_000.0);
    assert_eq!(summary.pat(), 11_250_000.0);

    let store = store.update_financial_summary(FinancialUpdate {
        turnover: Some(60_000_000.0),
        ..Default::default()
    });
    assert_eq!(store.financial_summary().pbt(), 25_000_000.0);
    assert_eq!(store.financial_summary().pat(), 18_750_000.0);
    assert_eq!(profit_after_tax(25_000_000.0, 0.0), 25_000_000.0);
}

#[test]
fn recruitment_cost_scenario() {
    let plan = |role: &str, actual: [u32; 12]| RecruitmentPlan {
        id: String::new(),
        role: role.into(),
        experience_level: ExperienceLevel::Junior,
        department: "Engineering".into(),
        year: "2025-26".into(),
        monthly_planned: MonthlyHeadcount::default(),
        monthly_actual: MonthlyHeadcount::from_counts(actual),
    };
    let store = Store::default()
        .add_record(plan("Software Engineer", [1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0]))
        .add_record(plan("Unpriced Role", [5; 12]))
        .add_record(SalaryMaster {
            id: String::new(),
            role: "Software Engineer".into(),
            experience_level: ExperienceLevel::Junior,
            department: "Engineering".into(),
            monthly_salary: 50_000.0,
        });
    assert_eq!(store.records::<SalaryMaster>()[0].yearly_cost(), 600_000.0);
    assert_eq!(store.total_recruitment_cost(), 1_800_000.0);
    assert_eq!(store.total_actual_hires(), 63);
}

#[test]
fn commission_summary_scenario() {
    let employees = vec![Employee {
        id: "e1".into(),
        name: "Michael Chen".into(),
        email: "michael@company.com".into(),
        role: dashboard_engine::models::UserRole::Employee,
        commission_rate: 5.0,
        department: "Development".into(),
        join_date: "2022-06-10".into(),
    }];
    let commission = |id: &str, amount: f64, status| Commission {
        id: id.into(),
        employee_id: "e1".into(),
        client_id: "c1".into(),
        payment_id: "pay1".into(),
        amount,
        rate: 5.0,
        date: "2023-03-15".into(),
        status,
    };
    let commissions = vec![
        commission("com1", 1000.0, CommissionStatus::Paid),
        commission("com2", 500.0, CommissionStatus::Pending),
    ];
    let summary = employee_commission_summary(&employees, &commissions);
    assert_eq!(summary.len(), 1);
    assert_eq!((summary[0].total, summary[0].paid, summary[0].pending), (1500.0, 1000.0, 500.0));
}

#[test]
fn deleting_unknown_id_leaves_collection_unchanged() {
    let store = sample_store();
    let before = store.records::<Payment>().to_vec();
    let store = store.delete_record::<Payment>("pay-missing");
    assert_eq!(store.records::<Payment>(), before.as_slice());

    let store = store.delete_record::<Payment>("pay13");
    assert_eq!(store.records::<Payment>().len(), before.len() - 1);
}

#[test]
fn status_changes_replace_the_record() {
    let store = sample_store();
    let mut payment = store.get::<Payment>("pay12").cloned().unwrap();
    payment.status = PaymentStatus::Received;
    let store = store.replace_record(payment);
    assert_eq!(store.get::<Payment>("pay12").unwrap().status, PaymentStatus::Received);
    assert_eq!(store.business_totals().outstanding_payments, 14_000.0);
}

#[test]
fn selectors_follow_the_selected_year_and_role() {
    let store = sample_store()
        .set_selected_role(HrRole::Hr)
        .update_monthly_actual("rp6", FiscalMonth::May, 1);
    assert!(store.can_edit_recruitment());
    assert_eq!(store.total_actual_hires(), 16);
    assert_eq!(store.hiring_variance(), -30);

    let plan = store.get::<RecruitmentPlan>("rp6").unwrap();
    assert_eq!(recruitment::variance(plan), -1);
    assert_eq!(yearly_cost(130_000.0), 1_560_000.0);

    let other_year = store.set_selected_year("2026-27");
    assert_eq!(other_year.total_actual_hires(), 0);
    assert_eq!(other_year.total_recruitment_cost(), 0.0);
    assert!(other_year.recruitment_cost_by_department().is_empty());
}

#[test]
fn snapshot_restores_mutated_store() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = Snapshot::in_dir(dir.path());

    let store = sample_store()
        .update_salary("s1", 40_000.0)
        .set_selected_year("2024-25");
    snapshot.save(&store).unwrap();

    let restored = snapshot.load_or_else(Store::default);
    assert_eq!(restored.selected_year(), "2024-25");
    assert_eq!(restored.get::<SalaryMaster>("s1").unwrap().yearly_cost(), 480_000.0);
    assert!(restored.get::<Client>("c1").is_some());
}
