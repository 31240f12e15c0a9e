//! Status-related command implementations (dashboard, reset)

use anyhow::{Context, Result};
use budgie_core::{
    assess, summarize_goals, top_expense_categories, track_goals, DeadlineStatus,
};
use chrono::Utc;

use super::Session;

pub fn cmd_dashboard(session: &Session) -> Result<()> {
    let data = session.load()?;
    let fmt = session.formatter();

    if data.is_empty() {
        println!("No budget data yet. Get started with:");
        println!("  budgie income set 3500");
        println!("  budgie expenses add Rent 1200 --category housing --type essential");
        println!("Or load a sample: budgie sample");
        return Ok(());
    }

    let snapshot = data.snapshot();
    let health = assess(&snapshot);

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│          🐦 Budgie Dashboard            │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Monthly income:    {:>14}", fmt.amount(snapshot.monthly_income));
    println!("  Monthly expenses:  {:>14}", fmt.amount(snapshot.monthly_expenses));
    println!("  Disposable income: {:>14}", fmt.amount(snapshot.disposable_income));
    println!("  Debt ratio:        {:>14}", fmt.percent(snapshot.debt_ratio));
    println!();
    println!(
        "  {} Financial health: {}/100 ({})",
        health.status.icon(),
        health.score,
        health.status.label()
    );
    for rec in &health.recommendations {
        println!("     • {}", rec);
    }

    let totals = data.category_totals();
    if !totals.is_empty() {
        println!();
        println!("  📂 Top categories");
        for share in top_expense_categories(&totals, snapshot.monthly_expenses)
            .iter()
            .take(3)
        {
            println!(
                "     {:<15} {:>14} {:>8}",
                share.category.display_name(),
                fmt.amount(share.amount),
                fmt.percent(share.percentage)
            );
        }
    }

    if !data.goals.is_empty() {
        let summary = summarize_goals(&data.goals);
        let urgent = track_goals(&data.goals, Utc::now())
            .iter()
            .filter(|p| {
                !p.is_completed
                    && matches!(p.deadline, DeadlineStatus::Overdue | DeadlineStatus::Urgent)
            })
            .count();
        println!();
        println!(
            "  🎯 Goals: {}/{} completed, {} overall",
            summary.completed,
            summary.total,
            fmt.percent(summary.overall_progress_pct)
        );
        if urgent > 0 {
            println!("     ⚠️  {} goal(s) due within 30 days", urgent);
        }
    }
    println!();

    if snapshot.has_deficit() {
        println!("  Run 'budgie analyze' to see where to cut back.");
    }

    Ok(())
}

pub fn cmd_reset(session: &Session, yes: bool) -> Result<()> {
    use std::io::{self, Write};

    if !yes {
        print!("⚠️  This will DELETE your income, expenses and goals.\n");
        print!("   Budget file: {}\n\n", session.store.path().display());
        print!("Are you sure? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    session.store.delete().with_context(|| {
        format!(
            "Failed to delete budget: {}",
            session.store.path().display()
        )
    })?;

    println!("✅ Budget reset. All data cleared.");
    Ok(())
}
