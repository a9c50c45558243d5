//! Role-based section visibility.
//!
//! A static table from [`UserRole`] to the dashboard sections that role
//! may open.  It only describes visibility for the presentation layer;
//! nothing in the crate enforces it.

use crate::models::UserRole;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Dashboard,
    Clients,
    Projects,
    Employees,
    Payments,
    Commissions,
    Reports,
    CeoDashboard,
    RecruitmentPlan,
    TargetVsActual,
    SalaryCost,
    PreviousEmployees,
}

impl Section {
    pub const ALL: [Section; 12] = [
        Section::Dashboard,
        Section::Clients,
        Section::Projects,
        Section::Employees,
        Section::Payments,
        Section::Commissions,
        Section::Reports,
        Section::CeoDashboard,
        Section::RecruitmentPlan,
        Section::TargetVsActual,
        Section::SalaryCost,
        Section::PreviousEmployees,
    ];

    /// Roles allowed to open this section.
    pub fn roles(self) -> &'static [UserRole] {
        use UserRole::*;
        match self {
            Section::Dashboard => &[Admin, Manager, Employee, Finance],
            Section::Clients | Section::Projects => &[Admin, Manager, Employee],
            Section::Employees | Section::RecruitmentPlan | Section::PreviousEmployees => {
                &[Admin, Manager]
            }
            Section::Payments => &[Admin, Finance],
            Section::Commissions => &[Admin, Finance, Employee],
            Section::Reports
            | Section::CeoDashboard
            | Section::TargetVsActual
            | Section::SalaryCost => &[Admin, Manager, Finance],
        }
    }
}

/// Whether `role` may open `section`.
pub fn can_view(role: UserRole, section: Section) -> bool {
    section.roles().contains(&role)
}

/// Sections visible to `role`, in navigation order.
pub fn visible_sections(role: UserRole) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|&section| can_view(role, section))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_sees_everything() {
        assert_eq!(visible_sections(UserRole::Admin).len(), Section::ALL.len());
    }

    #[test]
    fn test_finance_and_employee_views() {
        assert!(can_view(UserRole::Finance, Section::Payments));
        assert!(!can_view(UserRole::Finance, Section::Clients));
        assert_eq!(
            visible_sections(UserRole::Employee),
            vec![Section::Dashboard, Section::Clients, Section::Projects, Section::Commissions]
        );
    }
}
