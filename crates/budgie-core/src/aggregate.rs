//! Aggregation of raw entries into monthly figures

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{BudgetData, Expense, ExpenseCategory, ExpenseType, IncomeConfig};
use crate::normalize::monthly_income;

/// Monthly totals derived from a budget
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    /// Income minus expenses; negative means a monthly deficit
    pub disposable_income: f64,
    /// Expenses as a percentage of income (0 when there is no income)
    pub debt_ratio: f64,
}

impl FinancialSnapshot {
    pub fn has_deficit(&self) -> bool {
        self.disposable_income < 0.0
    }
}

/// Monthly spending in one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub amount: f64,
}

/// Monthly spending split by essential vs variable
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TypeTotals {
    pub essential: f64,
    pub variable: f64,
}

/// `part / whole * 100`, or 0 when `whole` is not positive
pub fn percentage_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        let pct = part / whole * 100.0;
        if pct.is_finite() {
            return pct;
        }
    }
    0.0
}

/// Sum of monthly equivalents over all expenses
pub fn monthly_expenses(expenses: &[Expense]) -> f64 {
    expenses.iter().map(Expense::monthly_amount).sum()
}

/// Compute the monthly snapshot for an income stream and expense list
pub fn aggregate(income: Option<&IncomeConfig>, expenses: &[Expense]) -> FinancialSnapshot {
    let monthly_income = monthly_income(income);
    let monthly_expenses = monthly_expenses(expenses);
    let snapshot = FinancialSnapshot {
        monthly_income,
        monthly_expenses,
        disposable_income: monthly_income - monthly_expenses,
        debt_ratio: percentage_of(monthly_expenses, monthly_income),
    };
    debug!(
        income = snapshot.monthly_income,
        expenses = snapshot.monthly_expenses,
        debt_ratio = snapshot.debt_ratio,
        "Aggregated budget snapshot"
    );
    snapshot
}

/// Monthly totals per category, in order of first appearance
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        let amount = expense.monthly_amount();
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(total) => total.amount += amount,
            None => totals.push(CategoryTotal {
                category: expense.category,
                amount,
            }),
        }
    }
    totals
}

/// Monthly totals per expense type
pub fn type_totals(expenses: &[Expense]) -> TypeTotals {
    expenses
        .iter()
        .fold(TypeTotals::default(), |mut acc, expense| {
            match expense.expense_type {
                ExpenseType::Essential => acc.essential += expense.monthly_amount(),
                ExpenseType::Variable => acc.variable += expense.monthly_amount(),
            }
            acc
        })
}

/// Selects expenses by category and/or type for listing
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpenseFilter {
    pub category: Option<ExpenseCategory>,
    pub expense_type: Option<ExpenseType>,
}

impl ExpenseFilter {
    pub fn matches(&self, expense: &Expense) -> bool {
        self.category.map_or(true, |c| expense.category == c)
            && self.expense_type.map_or(true, |t| expense.expense_type == t)
    }

    pub fn apply<'a>(&self, expenses: &'a [Expense]) -> Vec<&'a Expense> {
        expenses.iter().filter(|e| self.matches(e)).collect()
    }
}

impl BudgetData {
    /// Monthly snapshot of the current entries
    pub fn snapshot(&self) -> FinancialSnapshot {
        aggregate(self.income.as_ref(), &self.expenses)
    }

    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        category_totals(&self.expenses)
    }
}
