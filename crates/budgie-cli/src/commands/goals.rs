//! Goal command implementations (list, add, update, remove)

use anyhow::{Context, Result};
use budgie_core::{summarize_goals, track_goal, track_goals, DeadlineStatus, NewGoal};
use chrono::{NaiveDate, Utc};

use super::{truncate, Session};

/// Raw `goals add` arguments, parsed by [`cmd_goals_add`]
pub struct GoalArgs<'a> {
    pub name: &'a str,
    pub target: &'a str,
    pub date: &'a str,
    pub current: &'a str,
    pub category: &'a str,
    pub priority: &'a str,
    pub description: Option<&'a str>,
}

fn deadline_icon(deadline: DeadlineStatus) -> &'static str {
    match deadline {
        DeadlineStatus::Overdue => "🔴",
        DeadlineStatus::Urgent => "🟠",
        DeadlineStatus::Soon => "🟡",
        DeadlineStatus::OnTrack => "🟢",
    }
}

pub fn cmd_goals_list(session: &Session) -> Result<()> {
    let data = session.load()?;

    if data.goals.is_empty() {
        println!("No goals found. Add one with:");
        println!("  budgie goals add \"Emergency fund\" 10000 --date 2027-12-31 --priority high");
        return Ok(());
    }

    let fmt = session.formatter();
    let progress = track_goals(&data.goals, Utc::now());

    println!();
    println!("🎯 Goals ({})", progress.len());
    println!(
        "   {:>14} │ {:<22} │ {:<6} │ {:>12} │ {:>12} │ {:>7} │ {:<10} │ Status",
        "ID", "Name", "Prio", "Saved", "Target", "Done", "Deadline"
    );
    println!("   {}", "─".repeat(112));
    for goal in &progress {
        let status = if goal.is_completed {
            "✅ Completed".to_string()
        } else {
            format!(
                "{} {} ({}d)",
                deadline_icon(goal.deadline),
                goal.deadline.label(),
                goal.days_remaining
            )
        };
        println!(
            "   {:>14} │ {:<22} │ {:<6} │ {:>12} │ {:>12} │ {:>7} │ {:<10} │ {}",
            truncate(&goal.goal_id, 14),
            truncate(&goal.name, 22),
            goal.priority.as_str(),
            fmt.amount(goal.current_amount),
            fmt.amount(goal.target_amount),
            fmt.percent(goal.progress_pct),
            goal.target_date,
            status
        );
    }

    let summary = summarize_goals(&data.goals);
    println!("   {}", "─".repeat(112));
    println!(
        "   {}/{} completed │ {} of {} saved ({})",
        summary.completed,
        summary.total,
        fmt.amount(summary.total_current),
        fmt.amount(summary.total_target),
        fmt.percent(summary.overall_progress_pct)
    );

    Ok(())
}

pub fn cmd_goals_add(session: &Session, args: &GoalArgs<'_>) -> Result<()> {
    let target_date = NaiveDate::parse_from_str(args.date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", args.date))?;

    let new = NewGoal {
        name: args.name.to_string(),
        target_amount: session.parse_amount(args.target)?,
        current_amount: session.parse_amount(args.current)?,
        target_date,
        category: args.category.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        priority: args.priority.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        description: args.description.map(str::to_string),
    };

    let now = Utc::now();
    let mut data = session.load()?;
    let goal = data.add_goal(new, now)?.clone();
    session.save(&data)?;

    let fmt = session.formatter();
    let progress = track_goal(&goal, now);
    println!("✅ Added goal {}: {}", goal.id, goal.name);
    println!(
        "   {} of {} by {} ({} days)",
        fmt.amount(goal.current_amount),
        fmt.amount(goal.target_amount),
        goal.target_date,
        progress.days_remaining
    );
    Ok(())
}

pub fn cmd_goals_update(session: &Session, id: &str, amount: &str, force: bool) -> Result<()> {
    let amount = session.parse_amount(amount)?;

    let mut data = session.load()?;
    let goal = match data.update_goal_amount(id, amount, force) {
        Ok(goal) => goal.clone(),
        Err(budgie_core::Error::InvalidData(msg)) if !force && amount > 0.0 => {
            anyhow::bail!("{} (use --force to allow it)", msg)
        }
        Err(e) => return Err(e.into()),
    };
    session.save(&data)?;

    let fmt = session.formatter();
    let progress = track_goal(&goal, Utc::now());
    if progress.is_completed {
        println!("🎉 Goal completed: {}", goal.name);
    } else {
        println!(
            "✅ Updated {}: {} of {} ({})",
            goal.name,
            fmt.amount(goal.current_amount),
            fmt.amount(goal.target_amount),
            fmt.percent(progress.progress_pct)
        );
    }
    Ok(())
}

pub fn cmd_goals_remove(session: &Session, id: &str) -> Result<()> {
    let mut data = session.load()?;
    let removed = data.remove_goal(id)?;
    session.save(&data)?;
    println!("🗑️  Removed goal {}: {}", removed.id, removed.name);
    Ok(())
}
