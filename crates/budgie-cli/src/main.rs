//! Budgie CLI - Personal budgeting calculator
//!
//! Usage:
//!   budgie income set 3500               Set monthly income
//!   budgie expenses add Rent 1200 -c housing -t essential
//!   budgie goals add "Trip" 5000 --date 2027-07-01
//!   budgie dashboard                     Show the summary
//!   budgie report --format json          Full report

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let session = commands::open_session(cli.data.as_deref(), cli.config.as_deref())?;

    match cli.command {
        Commands::Dashboard => commands::cmd_dashboard(&session),
        Commands::Income { action } => match action {
            None | Some(IncomeAction::Show) => commands::cmd_income_show(&session),
            Some(IncomeAction::Set {
                amount,
                extra,
                income_type,
                multiplier,
            }) => commands::cmd_income_set(&session, &amount, &extra, &income_type, multiplier),
            Some(IncomeAction::Clear) => commands::cmd_income_clear(&session),
        },
        Commands::Expenses { action } => match action {
            None => commands::cmd_expenses_list(&session, None, None),
            Some(ExpensesAction::List {
                category,
                expense_type,
            }) => commands::cmd_expenses_list(&session, category.as_deref(), expense_type.as_deref()),
            Some(ExpensesAction::Add {
                name,
                amount,
                category,
                expense_type,
                frequency,
            }) => commands::cmd_expenses_add(
                &session,
                &name,
                &amount,
                &category,
                &expense_type,
                &frequency,
            ),
            Some(ExpensesAction::Remove { id }) => commands::cmd_expenses_remove(&session, &id),
        },
        Commands::Goals { action } => match action {
            None | Some(GoalsAction::List) => commands::cmd_goals_list(&session),
            Some(GoalsAction::Add {
                name,
                target,
                date,
                current,
                category,
                priority,
                description,
            }) => commands::cmd_goals_add(
                &session,
                &commands::GoalArgs {
                    name: &name,
                    target: &target,
                    date: &date,
                    current: &current,
                    category: &category,
                    priority: &priority,
                    description: description.as_deref(),
                },
            ),
            Some(GoalsAction::Update { id, amount, force }) => {
                commands::cmd_goals_update(&session, &id, &amount, force)
            }
            Some(GoalsAction::Remove { id }) => commands::cmd_goals_remove(&session, &id),
        },
        Commands::Analyze {
            months,
            income_growth,
            expense_growth,
        } => commands::cmd_analyze(&session, months, income_growth, expense_growth),
        Commands::Project { months } => commands::cmd_project(&session, months),
        Commands::Report {
            format,
            output,
            months,
        } => commands::cmd_report(&session, &format, output.as_deref(), months),
        Commands::Context { vars } => commands::cmd_context(&session, vars),
        Commands::Sample { profile, yes } => commands::cmd_sample(&session, &profile, yes),
        Commands::Reset { yes } => commands::cmd_reset(&session, yes),
    }
}
