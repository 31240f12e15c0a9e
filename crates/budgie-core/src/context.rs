//! Context Assembler
//!
//! Collects the figures an assistant needs to answer questions about the
//! user's budget and renders them as a compact text block:
//! - Monthly income, expenses and disposable income
//! - Health score and status
//! - Spending per category
//! - Progress on each goal

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::aggregate::{CategoryTotal, FinancialSnapshot};
use crate::format::MoneyFormatter;
use crate::goals::{track_goals, GoalProgress};
use crate::health::{assess, HealthAssessment};
use crate::models::BudgetData;

/// Assembled context for an assistant prompt
#[derive(Debug, Clone)]
pub struct FinancialContext {
    pub snapshot: FinancialSnapshot,
    pub health: HealthAssessment,
    /// Category totals in order of first appearance
    pub categories: Vec<CategoryTotal>,
    pub goals: Vec<GoalProgress>,
    formatter: MoneyFormatter,
}

impl FinancialContext {
    pub fn assemble(data: &BudgetData, now: DateTime<Utc>, formatter: MoneyFormatter) -> Self {
        let snapshot = data.snapshot();
        Self {
            health: assess(&snapshot),
            snapshot,
            categories: data.category_totals(),
            goals: track_goals(&data.goals, now),
            formatter,
        }
    }

    pub fn has_data(&self) -> bool {
        self.snapshot.monthly_income > 0.0 || !self.categories.is_empty() || !self.goals.is_empty()
    }

    /// Render the summary block
    pub fn to_prompt_text(&self) -> String {
        let fmt = &self.formatter;
        let mut out = String::from("CURRENT FINANCIAL SITUATION:\n");
        out.push_str(&format!(
            "- Monthly income: {}\n",
            fmt.amount(self.snapshot.monthly_income)
        ));
        out.push_str(&format!(
            "- Monthly expenses: {}\n",
            fmt.amount(self.snapshot.monthly_expenses)
        ));
        out.push_str(&format!(
            "- Disposable income: {}\n",
            fmt.amount(self.snapshot.disposable_income)
        ));
        out.push_str(&format!(
            "- Financial health: {}/100 ({})\n",
            self.health.score,
            self.health.status.label()
        ));

        out.push_str("\nEXPENSES BY CATEGORY:\n");
        if self.categories.is_empty() {
            out.push_str("- none recorded\n");
        }
        for total in &self.categories {
            out.push_str(&format!(
                "- {}: {}\n",
                total.category.display_name(),
                fmt.amount(total.amount)
            ));
        }

        out.push_str("\nFINANCIAL GOALS:\n");
        if self.goals.is_empty() {
            out.push_str("- none set\n");
        }
        for goal in &self.goals {
            out.push_str(&format!(
                "- {}: {}/{} ({})\n",
                goal.name,
                fmt.amount(goal.current_amount),
                fmt.amount(goal.target_amount),
                fmt.percent(goal.progress_pct)
            ));
        }
        out
    }

    /// Convert context to template variables for prompt rendering
    pub fn to_template_vars(&self) -> HashMap<&'static str, String> {
        let fmt = &self.formatter;
        let mut vars = HashMap::new();

        vars.insert("monthly_income", fmt.amount(self.snapshot.monthly_income));
        vars.insert("monthly_expenses", fmt.amount(self.snapshot.monthly_expenses));
        vars.insert("disposable_income", fmt.amount(self.snapshot.disposable_income));
        vars.insert("debt_ratio", fmt.percent(self.snapshot.debt_ratio));
        vars.insert("health_score", self.health.score.to_string());
        vars.insert("health_status", self.health.status.label().to_string());
        vars.insert("goal_count", self.goals.len().to_string());

        if !self.categories.is_empty() {
            let categories = self
                .categories
                .iter()
                .map(|t| format!("{}: {}", t.category.display_name(), fmt.amount(t.amount)))
                .collect::<Vec<_>>()
                .join(", ");
            vars.insert("categories", categories);
        }

        vars.insert("financial_context", self.to_prompt_text());
        vars
    }
}
