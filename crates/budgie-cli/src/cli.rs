//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Budgie - Know where your money goes each month
#[derive(Parser)]
#[command(name = "budgie")]
#[command(about = "Personal budgeting calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Budget data file (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Config file (defaults to <data dir>/budgie/config.toml, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show dashboard summary
    Dashboard,

    /// Manage the income stream (set, show, clear)
    Income {
        #[command(subcommand)]
        action: Option<IncomeAction>,
    },

    /// Manage expenses (list, add, remove)
    Expenses {
        #[command(subcommand)]
        action: Option<ExpensesAction>,
    },

    /// Manage savings goals (list, add, update, remove)
    Goals {
        #[command(subcommand)]
        action: Option<GoalsAction>,
    },

    /// Show savings, debt and emergency fund metrics with recommendations
    Analyze {
        /// Months to project (defaults to config)
        #[arg(short, long)]
        months: Option<u32>,

        /// Monthly income growth in percent (defaults to config)
        #[arg(long, allow_hyphen_values = true)]
        income_growth: Option<f64>,

        /// Monthly expense growth in percent (defaults to config)
        #[arg(long, allow_hyphen_values = true)]
        expense_growth: Option<f64>,
    },

    /// Show the month-by-month cash flow projection
    Project {
        /// Months to project (defaults to config)
        #[arg(short, long)]
        months: Option<u32>,
    },

    /// Generate a full report
    Report {
        /// Output format: text, json, csv (csv exports the expense list)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Months to project (defaults to config)
        #[arg(short, long)]
        months: Option<u32>,
    },

    /// Print the financial summary used as assistant context
    Context {
        /// Print the template variables instead of the summary block
        #[arg(long)]
        vars: bool,
    },

    /// Load a built-in sample budget (replaces current data)
    Sample {
        /// Profile: employee, family, young-professional, freelancer
        #[arg(short, long, default_value = "employee")]
        profile: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete all budget data
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum IncomeAction {
    /// Set the income stream (replaces any existing one)
    Set {
        /// Amount per pay period (accepts 3,500.50 or 3.500,50)
        amount: String,

        /// Additional income added to each period's amount
        #[arg(short, long, default_value = "0")]
        extra: String,

        /// Pay schedule: monthly or biweekly
        #[arg(short = 't', long = "type", default_value = "monthly")]
        income_type: String,

        /// Multiplier applied per period (e.g. 2 for two identical paychecks)
        #[arg(short, long, default_value = "1")]
        multiplier: u32,
    },
    /// Show the income stream
    Show,
    /// Remove the income stream
    Clear,
}

#[derive(Subcommand)]
pub enum ExpensesAction {
    /// List expenses
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,

        /// Filter by type: essential or variable
        #[arg(short = 't', long = "type")]
        expense_type: Option<String>,
    },
    /// Add an expense
    Add {
        /// Expense name
        name: String,

        /// Amount per occurrence
        amount: String,

        /// Category: housing, food, transport, health, education, entertainment,
        /// shopping, services, savings, debt, other
        #[arg(short, long, default_value = "other")]
        category: String,

        /// Type: essential or variable
        #[arg(short = 't', long = "type", default_value = "variable")]
        expense_type: String,

        /// Frequency: daily, weekly, biweekly, monthly
        #[arg(short, long, default_value = "monthly")]
        frequency: String,
    },
    /// Remove an expense by ID
    Remove {
        /// Expense ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum GoalsAction {
    /// List goals by priority and deadline
    List,
    /// Add a goal
    Add {
        /// Goal name
        name: String,

        /// Target amount
        target: String,

        /// Deadline (YYYY-MM-DD), must be in the future
        #[arg(short, long)]
        date: String,

        /// Amount already saved
        #[arg(long, default_value = "0")]
        current: String,

        /// Category: savings, debt, investment, purchase, emergency
        #[arg(short, long, default_value = "savings")]
        category: String,

        /// Priority: high, medium, low
        #[arg(short, long, default_value = "medium")]
        priority: String,

        /// Optional description
        #[arg(long)]
        description: Option<String>,
    },
    /// Set the amount saved towards a goal
    Update {
        /// Goal ID
        id: String,

        /// New saved amount
        amount: String,

        /// Allow an amount above the target (marks the goal completed)
        #[arg(long)]
        force: bool,
    },
    /// Remove a goal by ID
    Remove {
        /// Goal ID
        id: String,
    },
}
