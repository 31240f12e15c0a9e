//! Mutations on a budget
//!
//! Creation invariants for expenses and goals are enforced here, at the
//! boundary. The calculators never reject input; they assume entries that
//! made it into a [`BudgetData`] passed these checks (or came from a file,
//! in which case they compute finite results regardless).

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::{Error, Result};
use crate::models::{BudgetData, Expense, Goal, IncomeConfig, NewExpense, NewGoal};

/// Millisecond timestamp id, bumped until it is unused in `taken`
fn unique_id<'a>(now: DateTime<Utc>, taken: impl Iterator<Item = &'a str> + Clone) -> String {
    let mut candidate = now.timestamp_millis();
    while taken.clone().any(|id| id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

fn require_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidData("Name must not be empty".into()));
    }
    Ok(name.to_string())
}

fn require_positive(label: &str, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidData(format!(
            "{} must be greater than zero (got {})",
            label, amount
        )));
    }
    Ok(())
}

impl BudgetData {
    /// Replace the income stream
    pub fn set_income(&mut self, income: IncomeConfig) -> Result<()> {
        require_positive("Income amount", income.amount)?;
        if income.frequency == 0 {
            return Err(Error::InvalidData(
                "Income multiplier must be at least 1".into(),
            ));
        }
        info!(
            income_type = income.income_type.as_str(),
            amount = income.amount,
            "Income updated"
        );
        self.income = Some(income);
        Ok(())
    }

    pub fn clear_income(&mut self) -> Option<IncomeConfig> {
        self.income.take()
    }

    /// Append an expense and return it
    pub fn add_expense(&mut self, new: NewExpense) -> Result<&Expense> {
        self.add_expense_at(new, Utc::now())
    }

    /// Same as [`BudgetData::add_expense`] with an explicit clock for the id
    pub fn add_expense_at(&mut self, new: NewExpense, now: DateTime<Utc>) -> Result<&Expense> {
        let name = require_name(&new.name)?;
        require_positive("Expense amount", new.amount)?;

        let id = unique_id(now, self.expenses.iter().map(|e| e.id.as_str()));
        info!(id = %id, name = %name, "Adding expense");
        self.expenses.push(Expense {
            id,
            name,
            amount: new.amount,
            category: new.category,
            expense_type: new.expense_type,
            frequency: new.frequency,
        });
        self.expenses
            .last()
            .ok_or_else(|| Error::InvalidData("Expense was not stored".into()))
    }

    pub fn remove_expense(&mut self, id: &str) -> Result<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| Error::NotFound(format!("Expense {}", id)))?;
        Ok(self.expenses.remove(index))
    }

    /// Append a goal after checking its creation invariants
    pub fn add_goal(&mut self, new: NewGoal, now: DateTime<Utc>) -> Result<&Goal> {
        let name = require_name(&new.name)?;
        require_positive("Target amount", new.target_amount)?;
        if !new.current_amount.is_finite() || new.current_amount < 0.0 {
            return Err(Error::InvalidData(
                "Current amount must not be negative".into(),
            ));
        }
        if new.current_amount > new.target_amount {
            return Err(Error::InvalidData(format!(
                "Current amount {} exceeds target {}",
                new.current_amount, new.target_amount
            )));
        }
        if new.target_date <= now.date_naive() {
            return Err(Error::InvalidData(format!(
                "Target date {} must be in the future",
                new.target_date
            )));
        }

        let id = unique_id(now, self.goals.iter().map(|g| g.id.as_str()));
        info!(id = %id, name = %name, target = new.target_amount, "Adding goal");
        self.goals.push(Goal {
            id,
            name,
            target_amount: new.target_amount,
            current_amount: new.current_amount,
            target_date: new.target_date,
            category: new.category,
            priority: new.priority,
            description: new
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            created_at: Some(now),
        });
        self.goals
            .last()
            .ok_or_else(|| Error::InvalidData("Goal was not stored".into()))
    }

    /// Set a goal's saved amount
    ///
    /// Amounts above the target are rejected unless `allow_over_target` is set.
    pub fn update_goal_amount(
        &mut self,
        id: &str,
        amount: f64,
        allow_over_target: bool,
    ) -> Result<&Goal> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::InvalidData(format!(
                "Goal amount must not be negative (got {})",
                amount
            )));
        }
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| Error::NotFound(format!("Goal {}", id)))?;
        if amount > goal.target_amount && !allow_over_target {
            return Err(Error::InvalidData(format!(
                "Amount {} exceeds target {} for goal '{}'",
                amount, goal.target_amount, goal.name
            )));
        }
        goal.current_amount = amount;
        info!(id = %id, amount, "Goal amount updated");
        Ok(&*goal)
    }

    pub fn remove_goal(&mut self, id: &str) -> Result<Goal> {
        let index = self
            .goals
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| Error::NotFound(format!("Goal {}", id)))?;
        Ok(self.goals.remove(index))
    }

    /// Drop every entry
    pub fn reset(&mut self) {
        *self = BudgetData::default();
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_none() && self.expenses.is_empty() && self.goals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseType, Frequency, GoalCategory, IncomeType, Priority};
    use chrono::{NaiveDate, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap()
    }

    fn new_expense(name: &str, amount: f64) -> NewExpense {
        NewExpense {
            name: name.to_string(),
            amount,
            category: ExpenseCategory::Food,
            expense_type: ExpenseType::Variable,
            frequency: Frequency::Monthly,
        }
    }

    fn new_goal(target: f64, current: f64, date: NaiveDate) -> NewGoal {
        NewGoal {
            name: "Vacation".to_string(),
            target_amount: target,
            current_amount: current,
            target_date: date,
            category: GoalCategory::Purchase,
            priority: Priority::Medium,
            description: Some("  ".to_string()),
        }
    }

    #[test]
    fn test_expense_ids_are_unique() {
        let mut data = BudgetData::default();
        let first = data.add_expense_at(new_expense("Lunch", 12.0), now()).unwrap().id.clone();
        let second = data.add_expense_at(new_expense("Lunch", 12.0), now()).unwrap().id.clone();
        assert_ne!(first, second);
        assert_eq!(first, now().timestamp_millis().to_string());
        assert_eq!(data.expenses.len(), 2);
    }

    #[test]
    fn test_expense_validation() {
        let mut data = BudgetData::default();
        assert!(matches!(
            data.add_expense(new_expense("  ", 10.0)),
            Err(Error::InvalidData(_))
        ));
        assert!(data.add_expense(new_expense("Rent", 0.0)).is_err());
        assert!(data.add_expense(new_expense("Rent", f64::NAN)).is_err());
        assert!(data.expenses.is_empty());

        let stored = data.add_expense(new_expense("  Rent ", 900.0)).unwrap();
        assert_eq!(stored.name, "Rent");
    }

    #[test]
    fn test_remove_expense() {
        let mut data = BudgetData::default();
        let id = data.add_expense(new_expense("Gym", 30.0)).unwrap().id.clone();
        assert!(matches!(data.remove_expense("missing"), Err(Error::NotFound(_))));
        let removed = data.remove_expense(&id).unwrap();
        assert_eq!(removed.name, "Gym");
        assert!(data.expenses.is_empty());
    }

    #[test]
    fn test_income_replaced_wholesale() {
        let mut data = BudgetData::default();
        data.set_income(IncomeConfig::new(IncomeType::Monthly, 3000.0)).unwrap();
        data.set_income(IncomeConfig::new(IncomeType::Biweekly, 1400.0)).unwrap();
        assert_eq!(data.income.as_ref().unwrap().income_type, IncomeType::Biweekly);
        assert!(data.set_income(IncomeConfig::new(IncomeType::Monthly, -1.0)).is_err());
        assert!(data.clear_income().is_some());
        assert!(data.income.is_none());
    }

    #[test]
    fn test_goal_creation_invariants() {
        let mut data = BudgetData::default();
        let future = NaiveDate::from_ymd_opt(2027, 6, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        assert!(data.add_goal(new_goal(0.0, 0.0, future), now()).is_err());
        assert!(data.add_goal(new_goal(1000.0, 1500.0, future), now()).is_err());
        assert!(data.add_goal(new_goal(1000.0, -1.0, future), now()).is_err());
        assert!(data.add_goal(new_goal(1000.0, 0.0, today), now()).is_err());
        assert!(data.goals.is_empty());

        let goal = data.add_goal(new_goal(1000.0, 1000.0, future), now()).unwrap();
        assert_eq!(goal.created_at, Some(now()));
        assert!(goal.description.is_none());
    }

    #[test]
    fn test_goal_amount_over_target_needs_confirmation() {
        let mut data = BudgetData::default();
        let future = NaiveDate::from_ymd_opt(2027, 6, 1).unwrap();
        let id = data
            .add_goal(new_goal(1000.0, 100.0, future), now())
            .unwrap()
            .id
            .clone();

        assert!(data.update_goal_amount(&id, 1200.0, false).is_err());
        assert_eq!(data.goals[0].current_amount, 100.0);

        let goal = data.update_goal_amount(&id, 1200.0, true).unwrap();
        assert_eq!(goal.current_amount, 1200.0);

        assert!(data.update_goal_amount(&id, -5.0, true).is_err());
        assert!(matches!(
            data.update_goal_amount("nope", 5.0, false),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut data = BudgetData::default();
        data.set_income(IncomeConfig::new(IncomeType::Monthly, 3000.0)).unwrap();
        data.add_expense(new_expense("Rent", 900.0)).unwrap();
        assert!(!data.is_empty());
        data.reset();
        assert!(data.is_empty());
    }
}
