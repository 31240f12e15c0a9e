//! Shared utilities for command implementations
//!
//! This module contains:
//! - `Session` - The resolved config plus the budget store
//! - `open_session` - Resolve `--config` and `--data` into a session
//! - `cmd_sample` - Load a built-in sample budget

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use budgie_core::{parse_amount, store, BudgetData, BudgieConfig, JsonStore, MoneyFormatter, SampleProfile};
use chrono::Utc;
use tracing::debug;

/// Everything a command needs: where the budget lives and how to display it
pub struct Session {
    pub store: JsonStore,
    pub config: BudgieConfig,
}

/// Resolve config first, then the data file
///
/// Data file priority: `--data` > `[storage] data_file` > platform data dir.
pub fn open_session(data: Option<&Path>, config: Option<&Path>) -> Result<Session> {
    let config = BudgieConfig::load(config).context("Failed to load config")?;
    let path = data
        .map(PathBuf::from)
        .or_else(|| config.storage.data_file.clone())
        .unwrap_or_else(store::default_path);
    debug!(path = %path.display(), "Using budget file");

    Ok(Session::new(JsonStore::open(path), config))
}

impl Session {
    pub fn new(store: JsonStore, config: BudgieConfig) -> Self {
        Self { store, config }
    }

    pub fn load(&self) -> Result<BudgetData> {
        self.store
            .load()
            .with_context(|| format!("Failed to load budget: {}", self.store.path().display()))
    }

    pub fn save(&self, data: &BudgetData) -> Result<()> {
        self.store
            .save(data)
            .with_context(|| format!("Failed to save budget: {}", self.store.path().display()))
    }

    pub fn formatter(&self) -> MoneyFormatter {
        MoneyFormatter::new(self.config.display.clone())
    }

    /// Parse a user-entered amount with the configured separators
    pub fn parse_amount(&self, input: &str) -> Result<f64> {
        parse_amount(input, &self.config.display).map_err(|e| anyhow::anyhow!(e))
    }

    /// Horizon override, bounded like the config value
    pub fn projection_months(&self, months: Option<u32>) -> Result<u32> {
        match months {
            None => Ok(self.config.projection.months),
            Some(m) if (1..=budgie_core::config::MAX_PROJECTION_MONTHS).contains(&m) => Ok(m),
            Some(m) => anyhow::bail!(
                "Projection months must be between 1 and {} (got {})",
                budgie_core::config::MAX_PROJECTION_MONTHS,
                m
            ),
        }
    }
}

pub fn cmd_sample(session: &Session, profile: &str, yes: bool) -> Result<()> {
    use std::io::{self, Write};

    let profile: SampleProfile = profile.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let existing = session.load()?;
    if !existing.is_empty() && !yes {
        print!("⚠️  This will replace your current budget with the sample data.\n\n");
        print!("Are you sure? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let data = profile.budget(Utc::now().date_naive());
    session.save(&data)?;

    println!("✅ Loaded sample budget: {}", profile.label());
    println!(
        "   {} expenses, {} goals",
        data.expenses.len(),
        data.goals.len()
    );
    println!();
    println!("Next steps:");
    println!("  1. See the summary: budgie dashboard");
    println!("  2. Full analysis:   budgie analyze");

    Ok(())
}
