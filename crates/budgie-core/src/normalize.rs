//! Frequency normalization
//!
//! Converts periodic amounts to a common monthly basis. No rounding happens
//! here; rounding is a presentation concern.

use crate::models::{Expense, Frequency, IncomeConfig, IncomeType};

/// Average number of weeks in a month
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Days counted per month for daily expenses
pub const DAYS_PER_MONTH: f64 = 30.0;

impl Frequency {
    /// Multiplier that turns one occurrence into a monthly figure
    pub fn monthly_multiplier(&self) -> f64 {
        match self {
            Frequency::Daily => DAYS_PER_MONTH,
            Frequency::Weekly => WEEKS_PER_MONTH,
            Frequency::Biweekly => 2.0,
            Frequency::Monthly => 1.0,
        }
    }
}

/// Monthly equivalent of an amount paid at the given frequency
pub fn monthly_equivalent(amount: f64, frequency: Frequency) -> f64 {
    amount * frequency.monthly_multiplier()
}

/// Monthly equivalent for a raw frequency tag; unrecognized tags count as monthly
pub fn monthly_equivalent_for_tag(amount: f64, tag: &str) -> f64 {
    monthly_equivalent(amount, Frequency::from_tag(tag))
}

impl Expense {
    /// This expense normalized to a monthly amount
    pub fn monthly_amount(&self) -> f64 {
        monthly_equivalent(self.amount, self.frequency)
    }
}

impl IncomeConfig {
    /// This income stream normalized to a monthly amount
    pub fn monthly_amount(&self) -> f64 {
        let base = self.amount * self.frequency as f64;
        match self.income_type {
            IncomeType::Monthly => base,
            IncomeType::Biweekly => base * 2.0,
        }
    }
}

/// Monthly income, or 0 when no income is configured
pub fn monthly_income(income: Option<&IncomeConfig>) -> f64 {
    income.map(IncomeConfig::monthly_amount).unwrap_or(0.0)
}
