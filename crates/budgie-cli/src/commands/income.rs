//! Income command implementations (set, show, clear)

use anyhow::Result;
use budgie_core::{monthly_income, IncomeConfig, IncomeType};

use super::Session;

/// Store the pay schedule; `extra` is additional income folded into the amount
pub fn cmd_income_set(
    session: &Session,
    amount: &str,
    extra: &str,
    income_type: &str,
    multiplier: u32,
) -> Result<()> {
    let income_type: IncomeType = income_type.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let extra = session.parse_amount(extra)?;
    if extra < 0.0 {
        anyhow::bail!("Additional income cannot be negative");
    }
    let amount = session.parse_amount(amount)? + extra;

    let mut data = session.load()?;
    data.set_income(IncomeConfig {
        frequency: multiplier,
        ..IncomeConfig::new(income_type, amount)
    })?;
    session.save(&data)?;

    let fmt = session.formatter();
    println!(
        "✅ Income set: {} {} ({}/month)",
        fmt.amount(amount),
        income_type,
        fmt.amount(monthly_income(data.income.as_ref()))
    );
    if extra > 0.0 {
        println!("   Includes {} additional income", fmt.amount(extra));
    }
    Ok(())
}

pub fn cmd_income_show(session: &Session) -> Result<()> {
    let data = session.load()?;
    let Some(income) = data.income.as_ref() else {
        println!("No income set. Add one with:");
        println!("  budgie income set 3500 --type monthly");
        return Ok(());
    };

    let fmt = session.formatter();
    println!();
    println!("💵 Income");
    println!("   ─────────────────────────────");
    println!("   Schedule:   {}", income.income_type);
    println!("   Amount:     {}", fmt.amount(income.amount));
    if income.frequency != 1 {
        println!("   Multiplier: x{}", income.frequency);
    }
    println!("   Monthly:    {}", fmt.amount(income.monthly_amount()));
    Ok(())
}

pub fn cmd_income_clear(session: &Session) -> Result<()> {
    let mut data = session.load()?;
    if data.clear_income().is_none() {
        println!("No income to clear.");
        return Ok(());
    }
    session.save(&data)?;
    println!("✅ Income cleared.");
    Ok(())
}
