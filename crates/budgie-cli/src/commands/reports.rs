//! Report command implementations (analyze, project, report, context)

use std::path::Path;

use anyhow::{Context, Result};
use budgie_core::{
    analyze_with, expenses_csv, project_with, render_text, ExportFormat, FinancialContext,
    FinancialReport, MetricStatus, MoneyFormatter, ProjectionAssumptions, ProjectionMonth,
};
use chrono::Utc;

use super::Session;

fn status_icon(status: MetricStatus) -> &'static str {
    match status {
        MetricStatus::Excellent => "🟢",
        MetricStatus::Good => "🔵",
        MetricStatus::Warning => "🟡",
        MetricStatus::Danger => "🔴",
    }
}

/// Config assumptions with any command-line overrides applied
fn assumptions(
    session: &Session,
    income_growth: Option<f64>,
    expense_growth: Option<f64>,
) -> Result<ProjectionAssumptions> {
    let mut assumptions = session.config.projection.assumptions();
    if let Some(pct) = income_growth {
        assumptions.income_growth_pct = pct;
    }
    if let Some(pct) = expense_growth {
        assumptions.expense_growth_pct = pct;
    }
    assumptions.validate().map_err(|e| anyhow::anyhow!(e))?;
    Ok(assumptions)
}

fn print_projection(months: &[ProjectionMonth], fmt: &MoneyFormatter) {
    println!(
        "   {:<16} │ {:>12} │ {:>12} │ {:>12} │ {:>14}",
        "Month", "Income", "Expenses", "Balance", "Accumulated"
    );
    println!("   {}", "─".repeat(80));
    for month in months {
        println!(
            "   {:<16} │ {:>12} │ {:>12} │ {:>12} │ {:>14}",
            month.label,
            fmt.amount(month.income),
            fmt.amount(month.expenses),
            fmt.amount(month.balance),
            fmt.amount(month.accumulated_balance)
        );
    }
}

pub fn cmd_analyze(
    session: &Session,
    months: Option<u32>,
    income_growth: Option<f64>,
    expense_growth: Option<f64>,
) -> Result<()> {
    let horizon = session.projection_months(months)?;
    let assumptions = assumptions(session, income_growth, expense_growth)?;
    let data = session.load()?;

    if data.income.is_none() && data.expenses.is_empty() {
        println!("Nothing to analyze yet. Set your income first:");
        println!("  budgie income set 3500");
        return Ok(());
    }

    let snapshot = data.snapshot();
    let metrics = analyze_with(
        &snapshot,
        &data.category_totals(),
        horizon,
        Utc::now().date_naive(),
        &assumptions,
    );
    let fmt = session.formatter();

    println!();
    println!("📈 Financial Analysis");
    println!("   ─────────────────────────────────────────────────────────────");
    let savings = metrics.savings_rate_status();
    let debt = metrics.debt_ratio_status();
    let emergency = metrics.emergency_fund_status();
    println!(
        "   {} Savings rate:    {:>10}  {}",
        status_icon(savings),
        fmt.percent(metrics.savings_rate),
        savings.label()
    );
    println!(
        "   {} Debt ratio:      {:>10}  {}",
        status_icon(debt),
        fmt.percent(metrics.debt_to_income_ratio),
        debt.label()
    );
    println!(
        "   {} Emergency fund:  {:>9.1}m  {}",
        status_icon(emergency),
        metrics.emergency_fund_months,
        emergency.label()
    );

    if !metrics.top_expense_categories.is_empty() {
        println!();
        println!("📂 Expenses by category");
        println!("   ─────────────────────────────────────────────────────────────");
        for share in &metrics.top_expense_categories {
            println!(
                "   {:<15} {:>14} {:>8}",
                share.category.display_name(),
                fmt.amount(share.amount),
                fmt.percent(share.percentage)
            );
        }
    }

    println!();
    if assumptions.is_flat() {
        println!("🔮 Projection ({} months)", horizon);
    } else {
        println!(
            "🔮 Projection ({} months, income {:+}%/mo, expenses {:+}%/mo)",
            horizon, assumptions.income_growth_pct, assumptions.expense_growth_pct
        );
    }
    print_projection(&metrics.monthly_projection, &fmt);

    let recommendations = metrics.recommendations();
    println!();
    if recommendations.is_empty() {
        println!("✅ No recommendations. Your finances look balanced.");
    } else {
        println!("💡 Recommendations");
        println!("   ─────────────────────────────────────────────────────────────");
        for rec in &recommendations {
            println!("   • [{}] {}", rec.kind.label(), rec.text);
            println!("     {}", rec.impact);
        }
    }

    Ok(())
}

pub fn cmd_project(session: &Session, months: Option<u32>) -> Result<()> {
    let horizon = session.projection_months(months)?;
    let assumptions = assumptions(session, None, None)?;
    let data = session.load()?;

    let projection = project_with(
        &data.snapshot(),
        horizon,
        Utc::now().date_naive(),
        &assumptions,
    );

    println!();
    println!("🔮 Cash Flow Projection ({} months)", horizon);
    print_projection(&projection, &session.formatter());

    if let Some(last) = projection.last() {
        if last.accumulated_balance < 0.0 {
            println!();
            println!("   ⚠️  Spending exceeds income over this period.");
        }
    }

    Ok(())
}

pub fn cmd_report(
    session: &Session,
    format: &str,
    output: Option<&Path>,
    months: Option<u32>,
) -> Result<()> {
    let format: ExportFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let horizon = session.projection_months(months)?;
    let assumptions = assumptions(session, None, None)?;
    let data = session.load()?;

    let content = match format {
        ExportFormat::Csv => expenses_csv(&data)?,
        ExportFormat::Json | ExportFormat::Text => {
            let report = FinancialReport::build(&data, Utc::now(), horizon, &assumptions)?;
            if format == ExportFormat::Json {
                report.to_json()?
            } else {
                render_text(&report, &session.formatter())
            }
        }
    };

    match output {
        Some(path) => {
            std::fs::write(path, &content)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            println!("✅ Wrote {} report to {}", format.as_str(), path.display());
        }
        None if content.ends_with('\n') => print!("{}", content),
        None => println!("{}", content),
    }

    Ok(())
}

/// Print the assistant context block, or its template variables with `vars`
pub fn cmd_context(session: &Session, vars: bool) -> Result<()> {
    let data = session.load()?;
    let ctx = FinancialContext::assemble(&data, Utc::now(), session.formatter());

    if !ctx.has_data() {
        println!("No budget data yet. Add income and expenses first.");
        return Ok(());
    }

    if vars {
        let mut pairs: Vec<_> = ctx.to_template_vars().into_iter().collect();
        pairs.sort_by_key(|(key, _)| *key);
        for (key, value) in pairs {
            // Multi-line values stay readable as an indented block
            if value.contains('\n') {
                println!("{}:", key);
                for line in value.lines() {
                    println!("  {}", line);
                }
            } else {
                println!("{} = {}", key, value);
            }
        }
        return Ok(());
    }

    println!("{}", ctx.to_prompt_text());
    Ok(())
}
