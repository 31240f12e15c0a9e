//! Reports and exports
//!
//! Supports:
//! - A full financial report (snapshot, health, analysis, goals) as JSON or text
//! - Expense CSV export with monthly equivalents
//! - A content fingerprint of the budget, stamped into every report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::aggregate::{type_totals, FinancialSnapshot, TypeTotals};
use crate::analysis::{analyze_with, AnalysisMetrics, ProjectionAssumptions, Recommendation};
use crate::error::{Error, Result};
use crate::format::MoneyFormatter;
use crate::goals::{summarize_goals, track_goals, GoalProgress, GoalSummary};
use crate::health::{assess, HealthAssessment};
use crate::models::{BudgetData, IncomeConfig};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("Unknown export format: {}", s)),
        }
    }
}

/// SHA-256 of the budget's canonical JSON, hex encoded
///
/// Two budgets with equal entries share a fingerprint, so callers can use it
/// as a cache key for derived results.
pub fn fingerprint(data: &BudgetData) -> Result<String> {
    let canonical = serde_json::to_vec(data)?;
    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    Ok(hex::encode(hasher.finalize()))
}

/// Everything derived from one budget at one point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialReport {
    pub generated_at: DateTime<Utc>,
    pub fingerprint: String,
    pub income: Option<IncomeConfig>,
    pub expense_count: usize,
    pub snapshot: FinancialSnapshot,
    pub type_totals: TypeTotals,
    pub health: HealthAssessment,
    pub analysis: AnalysisMetrics,
    pub recommendations: Vec<Recommendation>,
    /// Goals in priority order
    pub goals: Vec<GoalProgress>,
    pub goal_summary: GoalSummary,
}

impl FinancialReport {
    /// Build a report with a projection starting in the month of `now`
    pub fn build(
        data: &BudgetData,
        now: DateTime<Utc>,
        horizon_months: u32,
        assumptions: &ProjectionAssumptions,
    ) -> Result<Self> {
        let snapshot = data.snapshot();
        let analysis = analyze_with(
            &snapshot,
            &data.category_totals(),
            horizon_months,
            now.date_naive(),
            assumptions,
        );
        let recommendations = analysis.recommendations();

        Ok(Self {
            generated_at: now,
            fingerprint: fingerprint(data)?,
            income: data.income.clone(),
            expense_count: data.expenses.len(),
            snapshot,
            type_totals: type_totals(&data.expenses),
            health: assess(&snapshot),
            analysis,
            recommendations,
            goals: track_goals(&data.goals, now),
            goal_summary: summarize_goals(&data.goals),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Human-readable report
pub fn render_text(report: &FinancialReport, fmt: &MoneyFormatter) -> String {
    let mut out = String::new();
    let snapshot = &report.snapshot;

    out.push_str("BUDGIE FINANCIAL REPORT\n");
    out.push_str(&format!(
        "Generated: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    let short_fingerprint = report.fingerprint.get(..12).unwrap_or(report.fingerprint.as_str());
    out.push_str(&format!("Fingerprint: {}\n\n", short_fingerprint));

    out.push_str("SUMMARY\n");
    out.push_str(&format!("  Monthly income:     {}\n", fmt.amount(snapshot.monthly_income)));
    out.push_str(&format!("  Monthly expenses:   {}\n", fmt.amount(snapshot.monthly_expenses)));
    out.push_str(&format!("    Essential:        {}\n", fmt.amount(report.type_totals.essential)));
    out.push_str(&format!("    Variable:         {}\n", fmt.amount(report.type_totals.variable)));
    out.push_str(&format!("  Disposable income:  {}\n", fmt.amount(snapshot.disposable_income)));
    out.push_str(&format!("  Debt ratio:         {}\n\n", fmt.percent(snapshot.debt_ratio)));

    out.push_str("FINANCIAL HEALTH\n");
    out.push_str(&format!(
        "  {} {}/100 ({})\n",
        report.health.status.icon(),
        report.health.score,
        report.health.status.label()
    ));
    for rec in &report.health.recommendations {
        out.push_str(&format!("  - {}\n", rec));
    }
    out.push('\n');

    let analysis = &report.analysis;
    out.push_str("KEY METRICS\n");
    out.push_str(&format!(
        "  Savings rate:       {} ({})\n",
        fmt.percent(analysis.savings_rate),
        analysis.savings_rate_status().label()
    ));
    out.push_str(&format!(
        "  Debt to income:     {} ({})\n",
        fmt.percent(analysis.debt_to_income_ratio),
        analysis.debt_ratio_status().label()
    ));
    out.push_str(&format!(
        "  Emergency fund:     {:.1} months ({})\n\n",
        analysis.emergency_fund_months,
        analysis.emergency_fund_status().label()
    ));

    if !analysis.top_expense_categories.is_empty() {
        out.push_str("EXPENSES BY CATEGORY\n");
        for share in &analysis.top_expense_categories {
            out.push_str(&format!(
                "  {:<16} {:>14} {:>7}\n",
                share.category.display_name(),
                fmt.amount(share.amount),
                fmt.percent(share.percentage)
            ));
        }
        out.push('\n');
    }

    if !analysis.monthly_projection.is_empty() {
        out.push_str("PROJECTION\n");
        out.push_str(&format!(
            "  {:<16} {:>14} {:>14} {:>14} {:>14}\n",
            "Month", "Income", "Expenses", "Balance", "Accumulated"
        ));
        for month in &analysis.monthly_projection {
            out.push_str(&format!(
                "  {:<16} {:>14} {:>14} {:>14} {:>14}\n",
                month.label,
                fmt.amount(month.income),
                fmt.amount(month.expenses),
                fmt.amount(month.balance),
                fmt.amount(month.accumulated_balance)
            ));
        }
        out.push('\n');
    }

    if !report.recommendations.is_empty() {
        out.push_str("RECOMMENDATIONS\n");
        for rec in &report.recommendations {
            out.push_str(&format!("  [{}] {}\n", rec.kind.label(), rec.text));
            out.push_str(&format!("      {}\n", rec.impact));
        }
        out.push('\n');
    }

    let summary = &report.goal_summary;
    if summary.total > 0 {
        out.push_str(&format!(
            "GOALS ({}/{} completed, {} overall)\n",
            summary.completed,
            summary.total,
            fmt.percent(summary.overall_progress_pct)
        ));
        for goal in &report.goals {
            let status = if goal.is_completed {
                "Completed".to_string()
            } else {
                format!("{} days left, {}", goal.days_remaining, goal.deadline.label())
            };
            out.push_str(&format!(
                "  {} [{}]: {} / {} ({}), {}\n",
                goal.name,
                goal.priority,
                fmt.amount(goal.current_amount),
                fmt.amount(goal.target_amount),
                fmt.percent(goal.progress_pct),
                status
            ));
        }
    }

    out
}

/// Expense list as CSV
pub fn expenses_csv(data: &BudgetData) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record([
        "id",
        "name",
        "category",
        "type",
        "frequency",
        "amount",
        "monthly_amount",
    ])?;
    for expense in &data.expenses {
        let amount = format!("{:.2}", expense.amount);
        let monthly = format!("{:.2}", expense.monthly_amount());
        wtr.write_record([
            expense.id.as_str(),
            expense.name.as_str(),
            expense.category.as_str(),
            expense.expense_type.as_str(),
            expense.frequency.as_str(),
            amount.as_str(),
            monthly.as_str(),
        ])?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| Error::InvalidData(format!("Failed to finish CSV: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| Error::InvalidData(format!("CSV is not UTF-8: {}", e)))
}
