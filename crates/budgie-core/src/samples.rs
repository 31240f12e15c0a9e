//! Built-in sample budgets for trying the tool out
//!
//! Goal deadlines are placed a fixed number of months after the supplied
//! date so that a freshly loaded sample never contains overdue goals.

use chrono::{Months, NaiveDate};

use crate::models::{
    BudgetData, Expense, ExpenseCategory, ExpenseType, Frequency, Goal, GoalCategory,
    IncomeConfig, IncomeType, Priority,
};
use crate::models::ExpenseCategory as C;
use crate::models::ExpenseType::{Essential, Variable};

/// A sample household
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SampleProfile {
    #[default]
    AverageEmployee,
    Family,
    YoungProfessional,
    Freelancer,
}

impl SampleProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AverageEmployee => "employee",
            Self::Family => "family",
            Self::YoungProfessional => "young-professional",
            Self::Freelancer => "freelancer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AverageEmployee => "Average employee",
            Self::Family => "Family with children",
            Self::YoungProfessional => "Young professional",
            Self::Freelancer => "Entrepreneur / freelancer",
        }
    }

    pub fn all() -> &'static [SampleProfile] {
        &[
            Self::AverageEmployee,
            Self::Family,
            Self::YoungProfessional,
            Self::Freelancer,
        ]
    }

    /// Build the budget, with goal dates relative to `today`
    pub fn budget(&self, today: NaiveDate) -> BudgetData {
        let (income, expenses, goals) = match self {
            Self::AverageEmployee => (3500.0, AVERAGE_EMPLOYEE, AVERAGE_EMPLOYEE_GOALS),
            Self::Family => (5000.0, FAMILY, FAMILY_GOALS),
            Self::YoungProfessional => (2500.0, YOUNG_PROFESSIONAL, YOUNG_PROFESSIONAL_GOALS),
            Self::Freelancer => (4200.0, FREELANCER, FREELANCER_GOALS),
        };

        let created_at = today.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        BudgetData {
            income: Some(IncomeConfig::new(IncomeType::Monthly, income)),
            expenses: expenses
                .iter()
                .enumerate()
                .map(|(i, seed)| Expense {
                    id: (i + 1).to_string(),
                    name: seed.name.to_string(),
                    amount: seed.amount,
                    category: seed.category,
                    expense_type: seed.expense_type,
                    frequency: Frequency::Monthly,
                })
                .collect(),
            goals: goals
                .iter()
                .enumerate()
                .map(|(i, seed)| Goal {
                    id: (i + 1).to_string(),
                    name: seed.name.to_string(),
                    target_amount: seed.target,
                    current_amount: seed.current,
                    target_date: today
                        .checked_add_months(Months::new(seed.months_ahead))
                        .unwrap_or(today),
                    category: seed.category,
                    priority: seed.priority,
                    description: Some(seed.description.to_string()),
                    created_at,
                })
                .collect(),
        }
    }
}

impl std::str::FromStr for SampleProfile {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "employee" | "average" | "average-employee" => Ok(Self::AverageEmployee),
            "family" => Ok(Self::Family),
            "young-professional" | "young" | "professional" => Ok(Self::YoungProfessional),
            "freelancer" | "entrepreneur" => Ok(Self::Freelancer),
            _ => Err(format!(
                "Unknown sample profile: {} (expected one of: employee, family, young-professional, freelancer)",
                s
            )),
        }
    }
}

impl std::fmt::Display for SampleProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

struct ExpenseSeed {
    name: &'static str,
    amount: f64,
    category: ExpenseCategory,
    expense_type: ExpenseType,
}

struct GoalSeed {
    name: &'static str,
    target: f64,
    current: f64,
    months_ahead: u32,
    category: GoalCategory,
    priority: Priority,
    description: &'static str,
}

const fn expense(
    name: &'static str,
    amount: f64,
    category: ExpenseCategory,
    expense_type: ExpenseType,
) -> ExpenseSeed {
    ExpenseSeed {
        name,
        amount,
        category,
        expense_type,
    }
}

const AVERAGE_EMPLOYEE: &[ExpenseSeed] = &[
    expense("Rent", 1200.0, C::Housing, Essential),
    expense("Groceries", 400.0, C::Food, Variable),
    expense("Public transport", 80.0, C::Transport, Essential),
    expense("Health insurance", 150.0, C::Health, Essential),
    expense("Streaming", 15.0, C::Entertainment, Essential),
];

const AVERAGE_EMPLOYEE_GOALS: &[GoalSeed] = &[
    GoalSeed {
        name: "Emergency fund",
        target: 10000.0,
        current: 2500.0,
        months_ahead: 14,
        category: GoalCategory::Emergency,
        priority: Priority::High,
        description: "Cover six months of expenses in case of emergency",
    },
    GoalSeed {
        name: "Trip to Europe",
        target: 5000.0,
        current: 1200.0,
        months_ahead: 20,
        category: GoalCategory::Purchase,
        priority: Priority::Medium,
        description: "Two weeks travelling around Europe",
    },
];

const FAMILY: &[ExpenseSeed] = &[
    expense("Mortgage", 1800.0, C::Housing, Essential),
    expense("Food", 600.0, C::Food, Variable),
    expense("Car", 300.0, C::Transport, Essential),
    expense("School", 400.0, C::Education, Essential),
    expense("Gym", 50.0, C::Health, Essential),
];

const FAMILY_GOALS: &[GoalSeed] = &[
    GoalSeed {
        name: "New car",
        target: 15000.0,
        current: 3000.0,
        months_ahead: 16,
        category: GoalCategory::Purchase,
        priority: Priority::High,
        description: "Savings towards a new car",
    },
    GoalSeed {
        name: "College fund",
        target: 20000.0,
        current: 5000.0,
        months_ahead: 44,
        category: GoalCategory::Savings,
        priority: Priority::High,
        description: "University savings for the kids",
    },
];

const YOUNG_PROFESSIONAL: &[ExpenseSeed] = &[
    expense("Rent", 900.0, C::Housing, Essential),
    expense("Food", 350.0, C::Food, Variable),
    expense("Transport", 60.0, C::Transport, Essential),
    expense("Internet", 40.0, C::Services, Essential),
    expense("Cinema", 30.0, C::Entertainment, Variable),
];

const YOUNG_PROFESSIONAL_GOALS: &[GoalSeed] = &[
    GoalSeed {
        name: "Holiday savings",
        target: 2000.0,
        current: 500.0,
        months_ahead: 10,
        category: GoalCategory::Savings,
        priority: Priority::Medium,
        description: "Family holiday",
    },
    GoalSeed {
        name: "New laptop",
        target: 1200.0,
        current: 200.0,
        months_ahead: 9,
        category: GoalCategory::Purchase,
        priority: Priority::Low,
        description: "Upgrade work equipment",
    },
];

const FREELANCER: &[ExpenseSeed] = &[
    expense("Office / coworking", 800.0, C::Housing, Essential),
    expense("Food", 500.0, C::Food, Variable),
    expense("Software and apps", 150.0, C::Services, Essential),
    expense("Digital marketing", 300.0, C::Services, Variable),
    expense("Online training", 120.0, C::Education, Variable),
    expense("Health insurance", 180.0, C::Health, Essential),
    expense("Transport / fuel", 200.0, C::Transport, Variable),
    expense("Entertainment", 80.0, C::Entertainment, Variable),
];

const FREELANCER_GOALS: &[GoalSeed] = &[
    GoalSeed {
        name: "Business expansion",
        target: 25000.0,
        current: 8000.0,
        months_ahead: 17,
        category: GoalCategory::Investment,
        priority: Priority::High,
        description: "Hire help and widen the service offering",
    },
    GoalSeed {
        name: "Emergency fund",
        target: 15000.0,
        current: 4500.0,
        months_ahead: 11,
        category: GoalCategory::Emergency,
        priority: Priority::High,
        description: "Six months of financial security",
    },
    GoalSeed {
        name: "Tech equipment",
        target: 8000.0,
        current: 2000.0,
        months_ahead: 8,
        category: GoalCategory::Purchase,
        priority: Priority::Medium,
        description: "Replace computer and equipment",
    },
];
