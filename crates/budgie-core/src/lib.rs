//! Budgie Core Library
//!
//! Shared functionality for the Budgie personal budgeting tool:
//! - Domain models for income, expenses and savings goals
//! - Frequency normalization and monthly aggregation
//! - Financial health scoring
//! - Analysis engine (savings rate, projection, recommendations)
//! - Goal tracking
//! - JSON persistence, TOML configuration and report export
//! - Context assembler for assistant prompts
//!
//! The calculators (`normalize`, `aggregate`, `health`, `analysis`, `goals`)
//! are pure functions over value snapshots. They never fail: zero
//! denominators yield 0 and unknown tags fall back to neutral defaults.

pub mod aggregate;
pub mod analysis;
pub mod budget;
pub mod config;
pub mod context;
pub mod error;
pub mod export;
pub mod format;
pub mod goals;
pub mod health;
pub mod models;
pub mod normalize;
pub mod samples;
pub mod store;

pub use aggregate::{
    aggregate, category_totals, percentage_of, type_totals, CategoryTotal, ExpenseFilter,
    FinancialSnapshot, TypeTotals,
};
pub use analysis::{
    analyze, analyze_with, project, project_with, recommend, top_expense_categories,
    AnalysisMetrics, CategoryShare, MetricStatus, ProjectionAssumptions, ProjectionMonth,
    Recommendation, RecommendationKind,
};
pub use config::{BudgieConfig, DisplayConfig, ProjectionConfig, StorageConfig};
pub use context::FinancialContext;
pub use error::{Error, Result};
pub use export::{expenses_csv, fingerprint, render_text, ExportFormat, FinancialReport};
pub use format::{parse_amount, MoneyFormatter};
pub use goals::{
    sort_goals, summarize_goals, track_goal, track_goals, DeadlineStatus, GoalProgress,
    GoalSummary,
};
pub use health::{assess, HealthAssessment, HealthStatus};
pub use models::{
    BudgetData, Expense, ExpenseCategory, ExpenseType, Frequency, Goal, GoalCategory,
    IncomeConfig, IncomeType, NewExpense, NewGoal, Priority,
};
pub use normalize::{monthly_equivalent, monthly_income};
pub use samples::SampleProfile;
pub use store::JsonStore;
