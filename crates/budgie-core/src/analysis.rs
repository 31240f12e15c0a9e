//! Analysis engine
//!
//! Derives savings and resilience metrics from a snapshot, ranks spending
//! categories, builds a month-by-month cash flow projection and turns the
//! metrics into recommendations.
//!
//! The projection repeats the current monthly figures. Growth assumptions
//! can be supplied through [`ProjectionAssumptions`]; the default of zero
//! growth reproduces the flat projection exactly.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::{percentage_of, CategoryTotal, FinancialSnapshot};
use crate::models::ExpenseCategory;

/// Default number of projected months
pub const DEFAULT_PROJECTION_MONTHS: u32 = 6;

/// Accepted range for monthly growth assumptions, in percent
pub const MIN_GROWTH_PCT: f64 = -99.0;
pub const MAX_GROWTH_PCT: f64 = 100.0;

/// Qualitative tier for a single metric, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    Excellent,
    Good,
    Warning,
    Danger,
}

impl MetricStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Warning => "Review",
            Self::Danger => "Critical",
        }
    }
}

impl std::fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Savings rate: >=20 excellent, >=10 good, >=5 warning
pub fn savings_rate_status(rate: f64) -> MetricStatus {
    if rate >= 20.0 {
        MetricStatus::Excellent
    } else if rate >= 10.0 {
        MetricStatus::Good
    } else if rate >= 5.0 {
        MetricStatus::Warning
    } else {
        MetricStatus::Danger
    }
}

/// Debt ratio: <=30 excellent, <=50 good, <=70 warning
pub fn debt_ratio_status(ratio: f64) -> MetricStatus {
    if ratio <= 30.0 {
        MetricStatus::Excellent
    } else if ratio <= 50.0 {
        MetricStatus::Good
    } else if ratio <= 70.0 {
        MetricStatus::Warning
    } else {
        MetricStatus::Danger
    }
}

/// Emergency fund coverage in months: >=6 excellent, >=3 good, >=1 warning
pub fn emergency_fund_status(months: f64) -> MetricStatus {
    if months >= 6.0 {
        MetricStatus::Excellent
    } else if months >= 3.0 {
        MetricStatus::Good
    } else if months >= 1.0 {
        MetricStatus::Warning
    } else {
        MetricStatus::Danger
    }
}

/// A category with its share of total monthly spending
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: ExpenseCategory,
    pub amount: f64,
    pub percentage: f64,
}

/// One projected month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionMonth {
    /// First day of the projected month
    pub month: NaiveDate,
    /// e.g. "October 2026"
    pub label: String,
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
    /// Running total of balances up to and including this month
    pub accumulated_balance: f64,
}

/// Optional growth applied to the projection, in percent per month
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionAssumptions {
    pub income_growth_pct: f64,
    pub expense_growth_pct: f64,
}

impl ProjectionAssumptions {
    pub fn is_flat(&self) -> bool {
        self.income_growth_pct == 0.0 && self.expense_growth_pct == 0.0
    }

    /// Check both rates against [`MIN_GROWTH_PCT`]..=[`MAX_GROWTH_PCT`]
    pub fn validate(&self) -> std::result::Result<(), String> {
        for (name, pct) in [
            ("income growth", self.income_growth_pct),
            ("expense growth", self.expense_growth_pct),
        ] {
            if !pct.is_finite() || !(MIN_GROWTH_PCT..=MAX_GROWTH_PCT).contains(&pct) {
                return Err(format!(
                    "{} must be between {} and {} percent per month (got {})",
                    name, MIN_GROWTH_PCT, MAX_GROWTH_PCT, pct
                ));
            }
        }
        Ok(())
    }
}

/// Metrics derived from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetrics {
    pub savings_rate: f64,
    pub debt_to_income_ratio: f64,
    /// Months of expenses covered by one month of surplus
    pub emergency_fund_months: f64,
    pub top_expense_categories: Vec<CategoryShare>,
    pub monthly_projection: Vec<ProjectionMonth>,
}

impl AnalysisMetrics {
    pub fn savings_rate_status(&self) -> MetricStatus {
        savings_rate_status(self.savings_rate)
    }

    pub fn debt_ratio_status(&self) -> MetricStatus {
        debt_ratio_status(self.debt_to_income_ratio)
    }

    pub fn emergency_fund_status(&self) -> MetricStatus {
        emergency_fund_status(self.emergency_fund_months)
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        recommend(self)
    }
}

/// Analyze a snapshot with a flat projection
pub fn analyze(
    snapshot: &FinancialSnapshot,
    category_totals: &[CategoryTotal],
    horizon_months: u32,
    start_month: NaiveDate,
) -> AnalysisMetrics {
    analyze_with(
        snapshot,
        category_totals,
        horizon_months,
        start_month,
        &ProjectionAssumptions::default(),
    )
}

/// Analyze a snapshot, projecting with the given growth assumptions
pub fn analyze_with(
    snapshot: &FinancialSnapshot,
    category_totals: &[CategoryTotal],
    horizon_months: u32,
    start_month: NaiveDate,
    assumptions: &ProjectionAssumptions,
) -> AnalysisMetrics {
    let emergency_fund_months = if snapshot.monthly_expenses > 0.0 {
        snapshot.disposable_income.max(0.0) / snapshot.monthly_expenses
    } else {
        0.0
    };

    let metrics = AnalysisMetrics {
        savings_rate: percentage_of(snapshot.disposable_income, snapshot.monthly_income),
        debt_to_income_ratio: snapshot.debt_ratio,
        emergency_fund_months,
        top_expense_categories: top_expense_categories(
            category_totals,
            snapshot.monthly_expenses,
        ),
        monthly_projection: project_with(snapshot, horizon_months, start_month, assumptions),
    };
    debug!(
        savings_rate = metrics.savings_rate,
        emergency_fund_months = metrics.emergency_fund_months,
        categories = metrics.top_expense_categories.len(),
        "Computed analysis metrics"
    );
    metrics
}

/// Category totals ranked by amount, largest first
///
/// Ties keep their original order.
pub fn top_expense_categories(
    category_totals: &[CategoryTotal],
    monthly_expenses: f64,
) -> Vec<CategoryShare> {
    let mut shares: Vec<CategoryShare> = category_totals
        .iter()
        .map(|t| CategoryShare {
            category: t.category,
            amount: t.amount,
            percentage: percentage_of(t.amount, monthly_expenses),
        })
        .collect();
    shares.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    shares
}

/// Flat projection: the current figures repeated for each month
pub fn project(
    snapshot: &FinancialSnapshot,
    horizon_months: u32,
    start_month: NaiveDate,
) -> Vec<ProjectionMonth> {
    project_with(
        snapshot,
        horizon_months,
        start_month,
        &ProjectionAssumptions::default(),
    )
}

/// Projection with monthly compounding growth
pub fn project_with(
    snapshot: &FinancialSnapshot,
    horizon_months: u32,
    start_month: NaiveDate,
    assumptions: &ProjectionAssumptions,
) -> Vec<ProjectionMonth> {
    let first = start_month.with_day(1).unwrap_or(start_month);
    let income_factor = growth_factor(assumptions.income_growth_pct);
    let expense_factor = growth_factor(assumptions.expense_growth_pct);

    let mut accumulated = 0.0;
    (0..horizon_months)
        .map(|i| {
            let month = first.checked_add_months(Months::new(i)).unwrap_or(first);
            let exponent = i32::try_from(i).unwrap_or(i32::MAX);
            let income = saturate(snapshot.monthly_income * income_factor.powi(exponent));
            let expenses = saturate(snapshot.monthly_expenses * expense_factor.powi(exponent));
            let balance = saturate(income - expenses);
            accumulated = saturate(accumulated + balance);
            ProjectionMonth {
                month,
                label: month.format("%B %Y").to_string(),
                income,
                expenses,
                balance,
                accumulated_balance: accumulated,
            }
        })
        .collect()
}

/// Monthly multiplier for a growth rate, with the rate held to the accepted range
fn growth_factor(pct: f64) -> f64 {
    if pct.is_finite() {
        1.0 + pct.clamp(MIN_GROWTH_PCT, MAX_GROWTH_PCT) / 100.0
    } else {
        1.0
    }
}

/// Keep projected figures finite over long horizons
fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}

/// Area a recommendation addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Savings,
    Debt,
    EmergencyFund,
    TopCategory,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Savings => "savings",
            Self::Debt => "debt",
            Self::EmergencyFund => "emergency_fund",
            Self::TopCategory => "top_category",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Savings => "SAVINGS",
            Self::Debt => "DEBT",
            Self::EmergencyFund => "EMERGENCY FUND",
            Self::TopCategory => "TOP CATEGORY",
        }
    }
}

/// An actionable suggestion derived from the metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub text: String,
    pub impact: String,
}

/// Savings rate below this triggers a savings recommendation
const LOW_SAVINGS_RATE: f64 = 10.0;
/// Debt ratio above this triggers a debt recommendation
const HIGH_DEBT_RATIO: f64 = 50.0;
/// Emergency coverage below this many months triggers a recommendation
const MIN_EMERGENCY_MONTHS: f64 = 3.0;
/// A single non-housing category above this share is flagged
const DOMINANT_CATEGORY_SHARE: f64 = 40.0;

/// Evaluate every rule and collect the matching recommendations in rule order
pub fn recommend(metrics: &AnalysisMetrics) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if metrics.savings_rate < LOW_SAVINGS_RATE {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Savings,
            text: "Your savings rate is low. Try to save more by cutting non-essential expenses."
                .to_string(),
            impact: "Impact: better long-term financial stability".to_string(),
        });
    }

    if metrics.debt_to_income_ratio > HIGH_DEBT_RATIO {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Debt,
            text: "Your debt ratio is high. Look for ways to reduce expenses or increase income."
                .to_string(),
            impact: "Impact: less financial stress and more room to save".to_string(),
        });
    }

    if metrics.emergency_fund_months < MIN_EMERGENCY_MONTHS {
        recommendations.push(Recommendation {
            kind: RecommendationKind::EmergencyFund,
            text: "Your emergency fund is insufficient. Aim to cover at least 3-6 months of expenses."
                .to_string(),
            impact: "Impact: more security against unexpected events".to_string(),
        });
    }

    if let Some(top) = metrics.top_expense_categories.first() {
        if top.percentage > DOMINANT_CATEGORY_SHARE && top.category != ExpenseCategory::Housing {
            recommendations.push(Recommendation {
                kind: RecommendationKind::TopCategory,
                text: format!(
                    "{} accounts for {:.1}% of your expenses. Check whether this category can be trimmed.",
                    top.category.display_name(),
                    top.percentage
                ),
                impact: "Impact: potentially significant monthly savings".to_string(),
            });
        }
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn october() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn snapshot(income: f64, expenses: f64) -> FinancialSnapshot {
        FinancialSnapshot {
            monthly_income: income,
            monthly_expenses: expenses,
            disposable_income: income - expenses,
            debt_ratio: percentage_of(expenses, income),
        }
    }

    fn total(category: ExpenseCategory, amount: f64) -> CategoryTotal {
        CategoryTotal { category, amount }
    }

    #[test]
    fn test_empty_snapshot_metrics_are_zero() {
        let metrics = analyze(&FinancialSnapshot::default(), &[], 6, october());
        assert_eq!(metrics.savings_rate, 0.0);
        assert_eq!(metrics.debt_to_income_ratio, 0.0);
        assert_eq!(metrics.emergency_fund_months, 0.0);
        assert!(metrics.top_expense_categories.is_empty());
        assert_eq!(metrics.monthly_projection.len(), 6);
        assert!(metrics
            .monthly_projection
            .iter()
            .all(|m| m.income == 0.0 && m.expenses == 0.0 && m.balance == 0.0));
    }

    #[test]
    fn test_reference_metrics() {
        let totals = vec![
            total(ExpenseCategory::Housing, 1200.0),
            total(ExpenseCategory::Food, 400.0),
            total(ExpenseCategory::Transport, 80.0),
            total(ExpenseCategory::Health, 150.0),
            total(ExpenseCategory::Entertainment, 15.0),
        ];
        let metrics = analyze(&snapshot(3500.0, 1845.0), &totals, 3, october());

        assert!((metrics.savings_rate - 47.285_714).abs() < 1e-4);
        assert!((metrics.emergency_fund_months - 0.897_019).abs() < 1e-4);
        assert_eq!(metrics.savings_rate_status(), MetricStatus::Excellent);
        assert_eq!(metrics.debt_ratio_status(), MetricStatus::Warning);
        assert_eq!(metrics.emergency_fund_status(), MetricStatus::Danger);

        let order: Vec<ExpenseCategory> = metrics
            .top_expense_categories
            .iter()
            .map(|c| c.category)
            .collect();
        assert_eq!(
            order,
            vec![
                ExpenseCategory::Housing,
                ExpenseCategory::Food,
                ExpenseCategory::Health,
                ExpenseCategory::Transport,
                ExpenseCategory::Entertainment,
            ]
        );
        let pct_sum: f64 = metrics
            .top_expense_categories
            .iter()
            .map(|c| c.percentage)
            .sum();
        assert!((pct_sum - 100.0).abs() < 1e-9);

        // Housing dominates but is exempt from the category rule
        let kinds: Vec<RecommendationKind> =
            metrics.recommendations().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![RecommendationKind::Debt, RecommendationKind::EmergencyFund]
        );
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let totals = vec![
            total(ExpenseCategory::Food, 100.0),
            total(ExpenseCategory::Transport, 300.0),
            total(ExpenseCategory::Services, 100.0),
        ];
        let shares = top_expense_categories(&totals, 500.0);
        assert_eq!(shares[0].category, ExpenseCategory::Transport);
        assert_eq!(shares[1].category, ExpenseCategory::Food);
        assert_eq!(shares[2].category, ExpenseCategory::Services);
        assert_eq!(shares[0].percentage, 60.0);
    }

    #[test]
    fn test_zero_expenses_give_zero_percentages() {
        let shares = top_expense_categories(&[total(ExpenseCategory::Food, 0.0)], 0.0);
        assert_eq!(shares[0].percentage, 0.0);
    }

    #[test]
    fn test_flat_projection() {
        let projection = project(&snapshot(2000.0, 1500.0), 12, october());
        assert_eq!(projection.len(), 12);
        assert_eq!(projection[0].label, "October 2026");
        assert_eq!(projection[0].month, NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());
        assert_eq!(projection[3].label, "January 2027");
        assert!(projection
            .iter()
            .all(|m| m.income == 2000.0 && m.expenses == 1500.0 && m.balance == 500.0));
        assert_eq!(projection[11].accumulated_balance, 6000.0);
    }

    #[test]
    fn test_zero_horizon_is_empty() {
        assert!(project(&snapshot(2000.0, 1500.0), 0, october()).is_empty());
    }

    #[test]
    fn test_growth_assumptions_compound() {
        let assumptions = ProjectionAssumptions {
            income_growth_pct: 10.0,
            expense_growth_pct: 0.0,
        };
        assert!(!assumptions.is_flat());
        let projection = project_with(&snapshot(1000.0, 500.0), 3, october(), &assumptions);
        assert_eq!(projection[0].income, 1000.0);
        assert!((projection[1].income - 1100.0).abs() < 1e-9);
        assert!((projection[2].income - 1210.0).abs() < 1e-9);
        assert_eq!(projection[2].expenses, 500.0);
    }

    #[test]
    fn test_extreme_growth_stays_finite() {
        let assumptions = ProjectionAssumptions {
            income_growth_pct: 1e6,
            expense_growth_pct: 1e6,
        };
        assert!(assumptions.validate().is_err());

        let projection = project_with(&snapshot(1000.0, 500.0), 120, october(), &assumptions);
        assert_eq!(projection.len(), 120);
        assert!(projection.iter().all(|m| m.income.is_finite()
            && m.expenses.is_finite()
            && m.balance.is_finite()
            && m.accumulated_balance.is_finite()));

        // Rates outside the range are held to the bound
        let bounded = ProjectionAssumptions {
            income_growth_pct: MAX_GROWTH_PCT,
            expense_growth_pct: MAX_GROWTH_PCT,
        };
        assert_eq!(
            project_with(&snapshot(1000.0, 500.0), 4, october(), &bounded)[3].income,
            projection[3].income
        );
    }

    #[test]
    fn test_growth_validation_bounds() {
        let ok = ProjectionAssumptions {
            income_growth_pct: MAX_GROWTH_PCT,
            expense_growth_pct: MIN_GROWTH_PCT,
        };
        assert!(ok.validate().is_ok());
        assert!(ProjectionAssumptions::default().validate().is_ok());
        let nan = ProjectionAssumptions {
            income_growth_pct: f64::NAN,
            expense_growth_pct: 0.0,
        };
        assert!(nan.validate().is_err());
        let collapse = ProjectionAssumptions {
            income_growth_pct: 0.0,
            expense_growth_pct: -100.0,
        };
        assert!(collapse.validate().is_err());
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(savings_rate_status(20.0), MetricStatus::Excellent);
        assert_eq!(savings_rate_status(10.0), MetricStatus::Good);
        assert_eq!(savings_rate_status(5.0), MetricStatus::Warning);
        assert_eq!(savings_rate_status(4.99), MetricStatus::Danger);

        assert_eq!(debt_ratio_status(30.0), MetricStatus::Excellent);
        assert_eq!(debt_ratio_status(50.0), MetricStatus::Good);
        assert_eq!(debt_ratio_status(70.0), MetricStatus::Warning);
        assert_eq!(debt_ratio_status(70.1), MetricStatus::Danger);

        assert_eq!(emergency_fund_status(6.0), MetricStatus::Excellent);
        assert_eq!(emergency_fund_status(3.0), MetricStatus::Good);
        assert_eq!(emergency_fund_status(1.0), MetricStatus::Warning);
        assert_eq!(emergency_fund_status(0.5), MetricStatus::Danger);
    }

    #[test]
    fn test_dominant_non_housing_category_is_flagged() {
        let totals = vec![
            total(ExpenseCategory::Food, 900.0),
            total(ExpenseCategory::Housing, 600.0),
        ];
        let metrics = analyze(&snapshot(3000.0, 1500.0), &totals, 1, october());
        let recommendations = metrics.recommendations();
        assert_eq!(recommendations.len(), 2);
        assert_eq!(recommendations[0].kind, RecommendationKind::EmergencyFund);
        assert_eq!(recommendations[1].kind, RecommendationKind::TopCategory);
        assert!(recommendations[1].text.starts_with("Food accounts for 60.0%"));
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let totals = vec![total(ExpenseCategory::Entertainment, 1200.0)];
        let metrics = analyze(&snapshot(1000.0, 1200.0), &totals, 1, october());
        let kinds: Vec<RecommendationKind> =
            metrics.recommendations().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RecommendationKind::Savings,
                RecommendationKind::Debt,
                RecommendationKind::EmergencyFund,
                RecommendationKind::TopCategory,
            ]
        );
    }
}
