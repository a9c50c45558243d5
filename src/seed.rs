//! Sample dataset used to seed a fresh store.

use crate::finance::FinancialSummary;
use crate::models::{
    Client, ClientStatus, Commission, CommissionStatus, Employee, Expense, ExpenseCategory,
    ExperienceLevel, MonthlyHeadcount, Payment, PaymentStatus, PreviousEmployee, Project,
    ProjectStatus, RecruitmentPlan, SalaryMaster, UserRole,
};
use crate::store::Store;

/// A store loaded with the sample data, with the 2025-26 year selected.
///
/// Records are inserted directly, so they keep their sample ids.
pub fn sample_store() -> Store {
    let mut store = Store::new(financial_summary());
    store.extend_records(employees());
    store.extend_records(clients());
    store.extend_records(projects());
    store.extend_records(payments());
    store.extend_records(expenses());
    store.extend_records(commissions());
    store.extend_records(recruitment_plans());
    store.extend_records(salary_master());
    store.extend_records(previous_employees());
    store
}

pub fn financial_summary() -> FinancialSummary {
    FinancialSummary {
        year: "2025-26".into(),
        turnover: 50_000_000.0,
        total_expense: 35_000_000.0,
        recruitment_cost: 8_500_000.0,
        tax_rate: 25.0,
    }
}

fn employees() -> Vec<Employee> {
    let employee = |id: &str, name: &str, email: &str, role, rate, department: &str, joined: &str| Employee {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        role,
        commission_rate: rate,
        department: department.into(),
        join_date: joined.into(),
    };
    vec![
        employee("e1", "Alex Johnson", "alex@company.com", UserRole::Admin, 10.0, "Management", "2022-01-15"),
        employee("e2", "Sarah Williams", "sarah@company.com", UserRole::Manager, 8.0, "Sales", "2022-03-20"),
        employee("e3", "Michael Chen", "michael@company.com", UserRole::Employee, 5.0, "Development", "2022-06-10"),
        employee("e4", "Emily Davis", "emily@company.com", UserRole::Employee, 5.0, "Design", "2022-08-05"),
        employee("e5", "James Brown", "james@company.com", UserRole::Finance, 3.0, "Finance", "2022-02-28"),
        employee("e6", "Lisa Anderson", "lisa@company.com", UserRole::Employee, 6.0, "Sales", "2023-01-10"),
    ]
}

fn clients() -> Vec<Client> {
    let client = |id: &str, name: &str, email: &str, company: &str, owner: &str, status, revenue, created: &str| Client {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        company: company.into(),
        owner_id: owner.into(),
        status,
        total_revenue: revenue,
        created_at: created.into(),
    };
    vec![
        client("c1", "John Smith", "john@techcorp.com", "TechCorp Inc.", "e3", ClientStatus::Active, 125000.0, "2023-02-15"),
        client("c2", "Maria Garcia", "maria@innovate.io", "Innovate.io", "e2", ClientStatus::Active, 89000.0, "2023-04-22"),
        client("c3", "David Lee", "david@startupx.com", "StartupX", "e6", ClientStatus::Active, 67500.0, "2023-06-10"),
        client("c4", "Emma Wilson", "emma@globaltech.net", "GlobalTech", "e3", ClientStatus::Pending, 45000.0, "2023-08-01"),
        client("c5", "Robert Taylor", "robert@enterprise.co", "Enterprise Co.", "e2", ClientStatus::Active, 210000.0, "2023-01-08"),
    ]
}

fn projects() -> Vec<Project> {
    #[allow(clippy::too_many_arguments)]
    fn project(
        id: &str,
        name: &str,
        client: &str,
        contract: f64,
        dates: (&str, &str),
        team: &[&str],
        cost: f64,
        status: ProjectStatus,
        revenue: f64,
    ) -> Project {
        Project {
            id: id.into(),
            name: name.into(),
            client_id: client.into(),
            contract_value: contract,
            start_date: dates.0.into(),
            end_date: dates.1.into(),
            assigned_employees: team.iter().map(|e| e.to_string()).collect(),
            project_cost: cost,
            status,
            revenue,
            profit: revenue - cost,
        }
    }
    vec![
        project("p1", "E-commerce Platform", "c1", 75000.0, ("2023-03-01", "2023-08-31"), &["e3", "e4"], 45000.0, ProjectStatus::Completed, 75000.0),
        project("p2", "Mobile App Development", "c2", 55000.0, ("2023-05-15", "2023-11-30"), &["e3"], 32000.0, ProjectStatus::Active, 40000.0),
        project("p3", "Website Redesign", "c3", 35000.0, ("2023-07-01", "2023-09-30"), &["e4"], 18000.0, ProjectStatus::Completed, 35000.0),
        project("p4", "CRM Integration", "c5", 120000.0, ("2023-02-01", "2024-01-31"), &["e3", "e4", "e6"], 72000.0, ProjectStatus::Active, 90000.0),
        project("p5", "Data Analytics Dashboard", "c1", 50000.0, ("2023-09-01", "2024-02-28"), &["e3"], 28000.0, ProjectStatus::Active, 25000.0),
        project("p6", "Brand Identity System", "c4", 28000.0, ("2023-08-15", "2023-10-31"), &["e4"], 15000.0, ProjectStatus::OnHold, 14000.0),
    ]
}

fn payments() -> Vec<Payment> {
    let payment = |id: &str, client: &str, project: &str, amount, date: &str, status, invoice: &str| Payment {
        id: id.into(),
        client_id: client.into(),
        project_id: project.into(),
        amount,
        date: date.into(),
        status,
        invoice_number: invoice.into(),
    };
    use PaymentStatus::*;
    vec![
        payment("pay1", "c1", "p1", 25000.0, "2023-03-15", Received, "INV-2023-001"),
        payment("pay2", "c1", "p1", 25000.0, "2023-06-01", Received, "INV-2023-015"),
        payment("pay3", "c1", "p1", 25000.0, "2023-09-01", Received, "INV-2023-032"),
        payment("pay4", "c2", "p2", 20000.0, "2023-05-20", Received, "INV-2023-010"),
        payment("pay5", "c2", "p2", 20000.0, "2023-08-15", Received, "INV-2023-028"),
        payment("pay6", "c3", "p3", 35000.0, "2023-10-01", Received, "INV-2023-040"),
        payment("pay7", "c5", "p4", 30000.0, "2023-02-15", Received, "INV-2023-002"),
        payment("pay8", "c5", "p4", 30000.0, "2023-05-15", Received, "INV-2023-012"),
        payment("pay9", "c5", "p4", 30000.0, "2023-08-15", Received, "INV-2023-027"),
        payment("pay10", "c1", "p5", 25000.0, "2023-09-15", Received, "INV-2023-035"),
        payment("pay11", "c4", "p6", 14000.0, "2023-08-20", Received, "INV-2023-029"),
        payment("pay12", "c2", "p2", 15000.0, "2023-12-01", Pending, "INV-2023-055"),
        payment("pay13", "c4", "p6", 14000.0, "2023-11-15", Overdue, "INV-2023-050"),
    ]
}

fn expenses() -> Vec<Expense> {
    let expense = |id: &str, project: &str, category, description: &str, amount, date: &str| Expense {
        id: id.into(),
        project_id: project.into(),
        category,
        description: description.into(),
        amount,
        date: date.into(),
    };
    use ExpenseCategory::*;
    vec![
        expense("exp1", "p1", Salary, "Developer salaries", 35000.0, "2023-08-31"),
        expense("exp2", "p1", Cloud, "AWS hosting", 5000.0, "2023-08-31"),
        expense("exp3", "p1", Tools, "Design software", 2500.0, "2023-04-15"),
        expense("exp4", "p1", Freelancer, "UI consultant", 2500.0, "2023-05-20"),
        expense("exp5", "p2", Salary, "Developer salary", 28000.0, "2023-11-30"),
        expense("exp6", "p2", Cloud, "Firebase services", 4000.0, "2023-10-15"),
        expense("exp7", "p3", Salary, "Designer salary", 15000.0, "2023-09-30"),
        expense("exp8", "p3", Tools, "Figma subscription", 3000.0, "2023-08-01"),
        expense("exp9", "p4", Salary, "Team salaries", 60000.0, "2024-01-15"),
        expense("exp10", "p4", Cloud, "Salesforce API", 12000.0, "2023-12-01"),
    ]
}

fn commissions() -> Vec<Commission> {
    let commission = |id: &str, employee: &str, client: &str, payment: &str, amount, rate, date: &str, status| Commission {
        id: id.into(),
        employee_id: employee.into(),
        client_id: client.into(),
        payment_id: payment.into(),
        amount,
        rate,
        date: date.into(),
        status,
    };
    use CommissionStatus::*;
    vec![
        commission("com1", "e3", "c1", "pay1", 1250.0, 5.0, "2023-03-15", Paid),
        commission("com2", "e3", "c1", "pay2", 1250.0, 5.0, "2023-06-01", Paid),
        commission("com3", "e3", "c1", "pay3", 1250.0, 5.0, "2023-09-01", Paid),
        commission("com4", "e2", "c2", "pay4", 1600.0, 8.0, "2023-05-20", Paid),
        commission("com5", "e2", "c2", "pay5", 1600.0, 8.0, "2023-08-15", Paid),
        commission("com6", "e6", "c3", "pay6", 2100.0, 6.0, "2023-10-01", Paid),
        commission("com7", "e2", "c5", "pay7", 2400.0, 8.0, "2023-02-15", Paid),
        commission("com8", "e2", "c5", "pay8", 2400.0, 8.0, "2023-05-15", Paid),
        commission("com9", "e2", "c5", "pay9", 2400.0, 8.0, "2023-08-15", Paid),
        commission("com10", "e3", "c1", "pay10", 1250.0, 5.0, "2023-09-15", Paid),
        commission("com11", "e3", "c4", "pay11", 700.0, 5.0, "2023-08-20", Paid),
        commission("com12", "e2", "c2", "pay12", 1200.0, 8.0, "2023-12-01", Pending),
    ]
}

fn recruitment_plans() -> Vec<RecruitmentPlan> {
    let plan = |id: &str, role: &str, level, department: &str, planned, actual| RecruitmentPlan {
        id: id.into(),
        role: role.into(),
        experience_level: level,
        department: department.into(),
        year: "2025-26".into(),
        monthly_planned: MonthlyHeadcount::from_counts(planned),
        monthly_actual: MonthlyHeadcount::from_counts(actual),
    };
    use ExperienceLevel::*;
    vec![
        plan("rp1", "Software Engineer", Fresher, "Engineering",
            [2, 1, 2, 1, 2, 1, 2, 1, 0, 1, 2, 1], [2, 1, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0]),
        plan("rp2", "Software Engineer", Mid, "Engineering",
            [1, 1, 1, 0, 1, 1, 0, 1, 0, 1, 0, 1], [1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0]),
        plan("rp3", "Senior Engineer", Senior, "Engineering",
            [0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0], [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        plan("rp4", "Tech Lead", Lead, "Engineering",
            [0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1], [0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        plan("rp5", "UI/UX Designer", Mid, "Design",
            [1, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0], [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        plan("rp6", "Product Manager", Senior, "Product",
            [0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0], [0; 12]),
        plan("rp7", "QA Engineer", Junior, "Quality",
            [1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0], [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        plan("rp8", "DevOps Engineer", Mid, "Infrastructure",
            [0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0], [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    ]
}

fn salary_master() -> Vec<SalaryMaster> {
    let salary = |id: &str, role: &str, level, department: &str, monthly| SalaryMaster {
        id: id.into(),
        role: role.into(),
        experience_level: level,
        department: department.into(),
        monthly_salary: monthly,
    };
    use ExperienceLevel::*;
    vec![
        salary("s1", "Software Engineer", Fresher, "Engineering", 35000.0),
        salary("s2", "Software Engineer", Junior, "Engineering", 50000.0),
        salary("s3", "Software Engineer", Mid, "Engineering", 75000.0),
        salary("s4", "Senior Engineer", Senior, "Engineering", 110000.0),
        salary("s5", "Tech Lead", Lead, "Engineering", 150000.0),
        salary("s6", "Engineering Manager", Manager, "Engineering", 200000.0),
        salary("s7", "UI/UX Designer", Mid, "Design", 65000.0),
        salary("s8", "Senior Designer", Senior, "Design", 95000.0),
        salary("s9", "Product Manager", Senior, "Product", 130000.0),
        salary("s10", "QA Engineer", Junior, "Quality", 40000.0),
        salary("s11", "QA Engineer", Mid, "Quality", 60000.0),
        salary("s12", "DevOps Engineer", Mid, "Infrastructure", 85000.0),
    ]
}

fn previous_employees() -> Vec<PreviousEmployee> {
    let employee = |id: &str, name: &str, role: &str, department: &str, joined: &str, exited: Option<&str>, monthly| {
        PreviousEmployee {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            department: department.into(),
            join_date: joined.into(),
            exit_date: exited.map(String::from),
            year: "2024-25".into(),
            monthly_salary: monthly,
        }
    };
    vec![
        employee("pe1", "Rahul Sharma", "Software Engineer", "Engineering", "2024-04-15", None, 50000.0),
        employee("pe2", "Priya Patel", "Senior Engineer", "Engineering", "2024-05-01", None, 110000.0),
        employee("pe3", "Amit Kumar", "UI/UX Designer", "Design", "2024-06-10", None, 65000.0),
        employee("pe4", "Sneha Reddy", "QA Engineer", "Quality", "2024-04-01", None, 45000.0),
        employee("pe5", "Vikram Singh", "DevOps Engineer", "Infrastructure", "2024-07-15", None, 85000.0),
        employee("pe6", "Ananya Iyer", "Product Manager", "Product", "2024-08-01", None, 130000.0),
        employee("pe7", "Karthik Nair", "Software Engineer", "Engineering", "2024-04-01", Some("2024-10-15"), 55000.0),
        employee("pe8", "Deepa Menon", "Tech Lead", "Engineering", "2024-05-15", None, 150000.0),
        employee("pe9", "Arjun Das", "Software Engineer", "Engineering", "2024-09-01", None, 38000.0),
        employee("pe10", "Meera Joshi", "Senior Designer", "Design", "2024-06-01", None, 95000.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_store_figures() {
        let store = sample_store();
        assert_eq!(store.selected_year(), "2025-26");
        assert_eq!(store.records::<RecruitmentPlan>().len(), 8);
        assert_eq!(store.total_planned_hires(), 46);
        assert_eq!(store.total_actual_hires(), 15);
        assert_eq!(store.total_recruitment_cost(), 11_040_000.0);
        assert_eq!(store.financial_summary().pat(), 11_250_000.0);
    }

    #[test]
    fn test_client_owners_exist() {
        let store = sample_store();
        for client in store.records::<Client>() {
            assert!(store.get::<Employee>(&client.owner_id).is_some(), "{}", client.id);
        }
    }
}
