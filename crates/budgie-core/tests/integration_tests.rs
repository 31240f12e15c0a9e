//! Integration tests for budgie-core
//!
//! These tests exercise the full entry → store → analyze → report workflow.

use budgie_core::{
    assess, expenses_csv, fingerprint, parse_amount, render_text, summarize_goals, track_goal,
    BudgetData, BudgieConfig, DisplayConfig, ExpenseCategory, ExpenseType, FinancialContext,
    FinancialReport, Frequency, GoalCategory, HealthStatus, IncomeConfig, IncomeType, JsonStore,
    MoneyFormatter, NewExpense, NewGoal, Priority, ProjectionAssumptions, RecommendationKind,
    SampleProfile,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tempfile::TempDir;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

fn monthly_expense(name: &str, amount: f64, category: ExpenseCategory) -> NewExpense {
    NewExpense {
        name: name.to_string(),
        amount,
        category,
        expense_type: ExpenseType::Essential,
        frequency: Frequency::Monthly,
    }
}

/// Income 3500 with five monthly expenses totalling 1845
fn reference_budget() -> BudgetData {
    let mut data = BudgetData::default();
    data.set_income(IncomeConfig::new(IncomeType::Monthly, 3500.0))
        .expect("Failed to set income");
    for (name, amount, category) in [
        ("Rent", 1200.0, ExpenseCategory::Housing),
        ("Groceries", 400.0, ExpenseCategory::Food),
        ("Bus pass", 80.0, ExpenseCategory::Transport),
        ("Insurance", 150.0, ExpenseCategory::Health),
        ("Streaming", 15.0, ExpenseCategory::Entertainment),
    ] {
        data.add_expense_at(monthly_expense(name, amount, category), now())
            .expect("Failed to add expense");
    }
    data
}

// =============================================================================
// Calculation Scenarios
// =============================================================================

#[test]
fn test_reference_scenario() {
    let data = reference_budget();
    let snapshot = data.snapshot();
    assert_eq!(snapshot.monthly_expenses, 1845.0);
    assert_eq!(snapshot.disposable_income, 1655.0);
    assert!((snapshot.debt_ratio - 52.71).abs() < 0.01);

    let health = assess(&snapshot);
    assert_eq!(health.status, HealthStatus::Good);
    assert_eq!(health.score, 87);
    assert_eq!(
        health.recommendations,
        vec!["You are in a good financial position. Consider saving more.".to_string()]
    );
}

#[test]
fn test_empty_budget_scenario() {
    let report = FinancialReport::build(
        &BudgetData::default(),
        now(),
        6,
        &ProjectionAssumptions::default(),
    )
    .expect("Failed to build report");

    assert_eq!(report.snapshot.monthly_income, 0.0);
    assert_eq!(report.snapshot.monthly_expenses, 0.0);
    assert_eq!(report.snapshot.debt_ratio, 0.0);
    assert_eq!(report.health.score, 100);
    assert_eq!(report.health.status, HealthStatus::Excellent);
    assert_eq!(report.analysis.savings_rate, 0.0);
    assert_eq!(report.analysis.emergency_fund_months, 0.0);
    assert!(report.analysis.top_expense_categories.is_empty());
}

#[test]
fn test_weekly_expense_normalization() {
    let mut data = BudgetData::default();
    data.add_expense(NewExpense {
        frequency: Frequency::Weekly,
        ..monthly_expense("Groceries", 100.0, ExpenseCategory::Food)
    })
    .expect("Failed to add expense");
    assert!((data.snapshot().monthly_expenses - 433.0).abs() < 1e-9);
}

#[test]
fn test_partial_file_with_unknown_tags() {
    let json = r#"{
        "income": {"type": "biweekly", "amount": 1500},
        "expenses": [
            {"id": "a", "name": "Gym", "amount": 40, "category": "fitness", "frequency": "yearly"},
            {"id": "b", "name": "Fuel", "amount": 50, "category": "transport", "type": "essential", "frequency": "weekly"}
        ],
        "monthlyIncome": 99999
    }"#;
    let data: BudgetData = serde_json::from_str(json).expect("Failed to parse budget");
    assert!(data.goals.is_empty());

    let totals = data.category_totals();
    assert_eq!(totals[0].category, ExpenseCategory::Other);
    assert_eq!(totals[0].amount, 40.0);

    let snapshot = data.snapshot();
    assert_eq!(snapshot.monthly_income, 3000.0);
    let summed: f64 = totals.iter().map(|t| t.amount).sum();
    assert!((summed - snapshot.monthly_expenses).abs() < 1e-9);
}

// =============================================================================
// Goal Workflow
// =============================================================================

#[test]
fn test_goal_lifecycle() {
    let mut data = BudgetData::default();
    let id = data
        .add_goal(
            NewGoal {
                name: "Emergency fund".to_string(),
                target_amount: 10000.0,
                current_amount: 2500.0,
                target_date: NaiveDate::from_ymd_opt(2027, 12, 31).unwrap(),
                category: GoalCategory::Emergency,
                priority: Priority::High,
                description: None,
            },
            now(),
        )
        .expect("Failed to add goal")
        .id
        .clone();

    let progress = track_goal(&data.goals[0], now());
    assert_eq!(progress.progress_pct, 25.0);
    assert!(!progress.is_completed);

    assert!(data.update_goal_amount(&id, 12000.0, false).is_err());
    data.update_goal_amount(&id, 12000.0, true)
        .expect("Confirmed overfunding should succeed");

    let progress = track_goal(&data.goals[0], now());
    assert_eq!(progress.progress_pct, 100.0);
    assert_eq!(progress.remaining, 0.0);
    assert!(progress.is_completed);
    assert_eq!(summarize_goals(&data.goals).completed, 1);

    data.remove_goal(&id).expect("Failed to remove goal");
    assert!(data.goals.is_empty());
}

// =============================================================================
// Store and Report Integration
// =============================================================================

#[test]
fn test_store_round_trip_preserves_fingerprint() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonStore::open(dir.path().join("budget.json"));

    let data = SampleProfile::Family.budget(now().date_naive());
    store.save(&data).expect("Failed to save");
    let loaded = store.load().expect("Failed to load");

    assert_eq!(loaded, data);
    assert_eq!(
        fingerprint(&loaded).expect("fingerprint"),
        fingerprint(&data).expect("fingerprint")
    );
}

#[test]
fn test_full_report_for_freelancer() {
    let data = SampleProfile::Freelancer.budget(now().date_naive());
    let config = BudgieConfig::embedded().expect("Embedded config should parse");
    let report = FinancialReport::build(
        &data,
        now(),
        config.projection.months,
        &config.projection.assumptions(),
    )
    .expect("Failed to build report");

    // 2330 of 4200 spent
    assert_eq!(report.snapshot.monthly_expenses, 2330.0);
    assert_eq!(report.health.status, HealthStatus::Good);
    assert_eq!(report.analysis.monthly_projection.len(), 6);
    assert_eq!(report.goals.len(), 3);
    assert_eq!(report.goals[2].name, "Tech equipment");
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.kind == RecommendationKind::EmergencyFund));

    let text = render_text(&report, &MoneyFormatter::new(config.display.clone()));
    assert!(text.contains("GOALS (0/3 completed"));
    assert!(text.contains("Business expansion"));

    let csv = expenses_csv(&data).expect("Failed to export CSV");
    assert_eq!(csv.lines().count(), 9);
}

#[test]
fn test_context_uses_configured_locale() {
    let display = DisplayConfig {
        currency_symbol: "$".to_string(),
        decimal_separator: ',',
        thousands_separator: '.',
        decimals: 0,
    };
    let amount = parse_amount("3.500", &display).expect("Failed to parse amount");

    let mut data = BudgetData::default();
    data.set_income(IncomeConfig::new(IncomeType::Monthly, amount))
        .expect("Failed to set income");

    let ctx = FinancialContext::assemble(&data, now(), MoneyFormatter::new(display));
    assert!(ctx.to_prompt_text().contains("- Monthly income: $3.500"));
}
