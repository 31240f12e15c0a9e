//! Expense command implementations (list, add, remove)

use anyhow::Result;
use budgie_core::{ExpenseCategory, ExpenseFilter, ExpenseType, Frequency, NewExpense};

use super::{truncate, Session};

pub fn cmd_expenses_list(
    session: &Session,
    category: Option<&str>,
    expense_type: Option<&str>,
) -> Result<()> {
    let filter = ExpenseFilter {
        category: category
            .map(|c| c.parse::<ExpenseCategory>())
            .transpose()
            .map_err(|e: String| anyhow::anyhow!(e))?,
        expense_type: expense_type
            .map(|t| t.parse::<ExpenseType>())
            .transpose()
            .map_err(|e: String| anyhow::anyhow!(e))?,
    };

    let data = session.load()?;
    let expenses = filter.apply(&data.expenses);

    if expenses.is_empty() {
        if data.expenses.is_empty() {
            println!("No expenses found. Add one with:");
            println!("  budgie expenses add Rent 1200 --category housing --type essential");
        } else {
            println!("No expenses match the filter.");
        }
        return Ok(());
    }

    let fmt = session.formatter();
    println!();
    println!("💸 Expenses ({})", expenses.len());
    println!(
        "   {:>14} │ {:<24} │ {:<13} │ {:<9} │ {:<9} │ {:>12} │ {:>12}",
        "ID", "Name", "Category", "Type", "Frequency", "Amount", "Monthly"
    );
    println!("   {}", "─".repeat(112));
    for expense in &expenses {
        println!(
            "   {:>14} │ {:<24} │ {:<13} │ {:<9} │ {:<9} │ {:>12} │ {:>12}",
            truncate(&expense.id, 14),
            truncate(&expense.name, 24),
            expense.category.display_name(),
            expense.expense_type.as_str(),
            expense.frequency.as_str(),
            fmt.amount(expense.amount),
            fmt.amount(expense.monthly_amount())
        );
    }
    println!("   {}", "─".repeat(112));
    let total: f64 = expenses.iter().map(|e| e.monthly_amount()).sum();
    println!("   Monthly total: {}", fmt.amount(total));

    Ok(())
}

pub fn cmd_expenses_add(
    session: &Session,
    name: &str,
    amount: &str,
    category: &str,
    expense_type: &str,
    frequency: &str,
) -> Result<()> {
    let new = NewExpense {
        name: name.to_string(),
        amount: session.parse_amount(amount)?,
        category: category.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        expense_type: expense_type.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        frequency: frequency
            .parse::<Frequency>()
            .map_err(|e: String| anyhow::anyhow!(e))?,
    };

    let mut data = session.load()?;
    let expense = data.add_expense(new)?.clone();
    session.save(&data)?;

    let fmt = session.formatter();
    println!(
        "✅ Added expense {}: {} {} {} ({}/month)",
        expense.id,
        expense.name,
        fmt.amount(expense.amount),
        expense.frequency.as_str(),
        fmt.amount(expense.monthly_amount())
    );
    Ok(())
}

pub fn cmd_expenses_remove(session: &Session, id: &str) -> Result<()> {
    let mut data = session.load()?;
    let removed = data.remove_expense(id)?;
    session.save(&data)?;
    println!("🗑️  Removed expense {}: {}", removed.id, removed.name);
    Ok(())
}
