//! Financial summary and tax computations.
//!
//! The `finance` module holds the company-level figures for a fiscal
//! year and derives profit before and after tax from them.  PBT and PAT
//! are computed on every read rather than stored, so editing turnover,
//! expense or the tax rate can never leave them stale.

use serde::{Deserialize, Serialize};

/// Profit before tax: turnover minus total expense.
pub fn profit_before_tax(turnover: f64, total_expense: f64) -> f64 {
    turnover - total_expense
}

/// Profit after tax for a tax rate given as a percentage (25 for 25%).
pub fn profit_after_tax(pbt: f64, tax_rate_percent: f64) -> f64 {
    pbt - pbt * (tax_rate_percent / 100.0)
}

/// `value` as a percentage of `turnover`; 0 when there is no turnover.
pub fn margin(value: f64, turnover: f64) -> f64 {
    if turnover > 0.0 {
        value * 100.0 / turnover
    } else {
        0.0
    }
}

/// Fiscal years offered for planning.
pub fn financial_years() -> [&'static str; 3] {
    ["2024-25", "2025-26", "2026-27"]
}

/// Company figures for one fiscal year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Fiscal year label, e.g. `"2025-26"`.
    pub year: String,
    /// Rupees.
    pub turnover: f64,
    /// Rupees.
    pub total_expense: f64,
    /// Budgeted recruitment spend for the year, in rupees.  The cost of hires
    /// actually made is computed from the recruitment plans instead.
    pub recruitment_cost: f64,
    /// Tax rate as a percentage (25.0 means 25%), not a fraction.
    pub tax_rate: f64,
}

impl FinancialSummary {
    pub fn pbt(&self) -> f64 {
        profit_before_tax(self.turnover, self.total_expense)
    }

    pub fn pat(&self) -> f64 {
        profit_after_tax(self.pbt(), self.tax_rate)
    }

    pub fn pbt_margin(&self) -> f64 {
        margin(self.pbt(), self.turnover)
    }

    pub fn pat_margin(&self) -> f64 {
        margin(self.pat(), self.turnover)
    }

    /// Returns the summary with every field set in `update` replaced.
    #[must_use]
    pub fn apply(mut self, update: FinancialUpdate) -> Self {
        if let Some(year) = update.year {
            self.year = year;
        }
        if let Some(turnover) = update.turnover {
            self.turnover = turnover;
        }
        if let Some(total_expense) = update.total_expense {
            self.total_expense = total_expense;
        }
        if let Some(recruitment_cost) = update.recruitment_cost {
            self.recruitment_cost = recruitment_cost;
        }
        if let Some(tax_rate) = update.tax_rate {
            self.tax_rate = tax_rate;
        }
        self
    }

    /// Snapshot of the stored and derived figures, for display.
    pub fn view(&self) -> FinancialView {
        FinancialView {
            year: self.year.clone(),
            turnover: self.turnover,
            total_expense: self.total_expense,
            recruitment_cost: self.recruitment_cost,
            tax_rate: self.tax_rate,
            pbt: self.pbt(),
            pat: self.pat(),
            pbt_margin: self.pbt_margin(),
            pat_margin: self.pat_margin(),
        }
    }
}

/// Partial update of a [`FinancialSummary`]; `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialUpdate {
    pub year: Option<String>,
    pub turnover: Option<f64>,
    pub total_expense: Option<f64>,
    pub recruitment_cost: Option<f64>,
    pub tax_rate: Option<f64>,
}

/// A [`FinancialSummary`] with its derived figures filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialView {
    pub year: String,
    pub turnover: f64,
    pub total_expense: f64,
    pub recruitment_cost: f64,
    pub tax_rate: f64,
    pub pbt: f64,
    pub pat: f64,
    pub pbt_margin: f64,
    pub pat_margin: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> FinancialSummary {
        FinancialSummary {
            year: "2025-26".into(),
            turnover: 50_000_000.0,
            total_expense: 35_000_000.0,
            recruitment_cost: 8_500_000.0,
            tax_rate: 25.0,
        }
    }

    #[test]
    fn test_pbt_and_pat() {
        let s = summary();
        assert_eq!(s.pbt(), 15_000_000.0);
        assert_eq!(s.pat(), 11_250_000.0);
        assert_eq!(s.pbt_margin(), 30.0);
        assert_eq!(s.pat_margin(), 22.5);
    }

    #[test]
    fn test_tax_rate_bounds() {
        for pbt in [-1000.0, 0.0, 15_000_000.0] {
            assert_eq!(profit_after_tax(pbt, 0.0), pbt);
            assert_eq!(profit_after_tax(pbt, 100.0), 0.0);
        }
    }

    #[test]
    fn test_apply_recomputes_derived_figures() {
        let updated = summary().apply(FinancialUpdate {
            total_expense: Some(40_000_000.0),
            tax_rate: Some(30.0),
            ..Default::default()
        });
        assert_eq!(updated.turnover, 50_000_000.0);
        assert_eq!(updated.pbt(), 10_000_000.0);
        assert_eq!(updated.pat(), 7_000_000.0);
    }

    #[test]
    fn test_margin_without_turnover() {
        let mut s = summary();
        s.turnover = 0.0;
        assert_eq!(s.pbt_margin(), 0.0);
        assert_eq!(s.view().pat_margin, 0.0);
    }
}
