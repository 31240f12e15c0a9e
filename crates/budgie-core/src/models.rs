//! Domain models for Budgie
//!
//! These are the raw entries a user maintains: one income stream, a list of
//! expenses and a list of savings goals. Everything else in the crate is
//! derived from them. Field names serialize in camelCase so a stored budget
//! file stays stable across releases.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// How an income stream is paid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IncomeType {
    /// Paid once per month
    #[default]
    Monthly,
    /// Paid every two weeks (counted as twice per month)
    #[serde(alias = "fortnightly")]
    Biweekly,
}

impl IncomeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Biweekly => "biweekly",
        }
    }
}

impl std::str::FromStr for IncomeType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "biweekly" | "bi-weekly" | "fortnightly" => Ok(Self::Biweekly),
            _ => Err(format!("Unknown income type: {}", s)),
        }
    }
}

impl std::fmt::Display for IncomeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recurring income stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeConfig {
    #[serde(rename = "type")]
    pub income_type: IncomeType,
    /// Amount received per pay period
    pub amount: f64,
    /// Integer multiplier applied on top of the pay period (usually 1)
    #[serde(default = "default_income_multiplier")]
    pub frequency: u32,
}

fn default_income_multiplier() -> u32 {
    1
}

impl IncomeConfig {
    pub fn new(income_type: IncomeType, amount: f64) -> Self {
        Self {
            income_type,
            amount,
            frequency: 1,
        }
    }
}

/// How often an expense recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    #[default]
    Monthly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Biweekly => "Biweekly",
            Self::Monthly => "Monthly",
        }
    }

    /// Parse a raw tag, falling back to `Monthly` for anything unrecognized
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or(Self::Monthly)
    }

    pub fn all() -> &'static [Frequency] {
        &[Self::Daily, Self::Weekly, Self::Biweekly, Self::Monthly]
    }
}

impl std::str::FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "biweekly" | "bi-weekly" | "fortnightly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(format!("Unknown frequency: {}", s)),
        }
    }
}

impl From<String> for Frequency {
    fn from(tag: String) -> Self {
        tag.parse().unwrap_or_else(|_| {
            warn!(tag = %tag, "Unrecognized expense frequency, treating as monthly");
            Self::Monthly
        })
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Spending category of an expense
///
/// Unknown tags land in `Other` so category totals still add up to the
/// overall monthly expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ExpenseCategory {
    Housing,
    Food,
    Transport,
    Health,
    Education,
    Entertainment,
    Shopping,
    Services,
    Savings,
    Debt,
    #[default]
    Other,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Health => "health",
            Self::Education => "education",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Services => "services",
            Self::Savings => "savings",
            Self::Debt => "debt",
            Self::Other => "other",
        }
    }

    /// Display name used in reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Services => "Services",
            Self::Savings => "Savings",
            Self::Debt => "Debt",
            Self::Other => "Other",
        }
    }

    /// Parse a raw tag, falling back to `Other` for anything unrecognized
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or(Self::Other)
    }

    pub fn all() -> &'static [ExpenseCategory] {
        &[
            Self::Housing,
            Self::Food,
            Self::Transport,
            Self::Health,
            Self::Education,
            Self::Entertainment,
            Self::Shopping,
            Self::Services,
            Self::Savings,
            Self::Debt,
            Self::Other,
        ]
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == tag)
            .ok_or_else(|| format!("Unknown expense category: {}", s))
    }
}

impl From<String> for ExpenseCategory {
    fn from(tag: String) -> Self {
        tag.parse().unwrap_or_else(|_| {
            warn!(tag = %tag, "Unrecognized expense category, filing under other");
            Self::Other
        })
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether an expense is a fixed necessity or discretionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseType {
    #[serde(alias = "fixed")]
    Essential,
    #[default]
    Variable,
}

impl ExpenseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Essential => "essential",
            Self::Variable => "variable",
        }
    }
}

impl std::str::FromStr for ExpenseType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "essential" | "fixed" => Ok(Self::Essential),
            "variable" | "optional" => Ok(Self::Variable),
            _ => Err(format!("Unknown expense type: {}", s)),
        }
    }
}

impl std::fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recurring expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub name: String,
    /// Amount per occurrence (not yet normalized)
    pub amount: f64,
    #[serde(default)]
    pub category: ExpenseCategory,
    #[serde(rename = "type", default)]
    pub expense_type: ExpenseType,
    #[serde(default)]
    pub frequency: Frequency,
}

/// What a savings goal is for
///
/// Unknown tags in a stored file read as `Savings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum GoalCategory {
    #[default]
    Savings,
    Debt,
    Investment,
    Purchase,
    Emergency,
}

impl GoalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Savings => "savings",
            Self::Debt => "debt",
            Self::Investment => "investment",
            Self::Purchase => "purchase",
            Self::Emergency => "emergency",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Savings => "General Savings",
            Self::Debt => "Pay Off Debt",
            Self::Investment => "Investment",
            Self::Purchase => "Major Purchase",
            Self::Emergency => "Emergency Fund",
        }
    }
}

impl std::str::FromStr for GoalCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "savings" => Ok(Self::Savings),
            "debt" => Ok(Self::Debt),
            "investment" => Ok(Self::Investment),
            "purchase" => Ok(Self::Purchase),
            "emergency" => Ok(Self::Emergency),
            _ => Err(format!("Unknown goal category: {}", s)),
        }
    }
}

impl From<String> for GoalCategory {
    fn from(tag: String) -> Self {
        tag.parse().unwrap_or_else(|_| {
            warn!(tag = %tag, "Unrecognized goal category, treating as savings");
            Self::default()
        })
    }
}

impl std::fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Goal priority. Ordering follows urgency: `High < Medium < Low`.
///
/// Unknown tags in a stored file read as `Medium`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

impl From<String> for Priority {
    fn from(tag: String) -> Self {
        tag.parse().unwrap_or_else(|_| {
            warn!(tag = %tag, "Unrecognized goal priority, treating as medium");
            Self::default()
        })
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A savings goal with a deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: NaiveDate,
    pub category: GoalCategory,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_lenient_timestamp"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

/// New expense for creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    pub name: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub expense_type: ExpenseType,
    pub frequency: Frequency,
}

/// New goal for creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGoal {
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: NaiveDate,
    pub category: GoalCategory,
    pub priority: Priority,
    pub description: Option<String>,
}

/// The complete set of user entries, as persisted
///
/// Every field is optional on input: a missing or `null` field yields no
/// income or an empty list. Unknown fields are ignored, and an income with
/// an unrecognized pay schedule is dropped so it counts as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetData {
    #[serde(deserialize_with = "deserialize_lenient_income")]
    pub income: Option<IncomeConfig>,
    #[serde(deserialize_with = "deserialize_nullable_list")]
    pub expenses: Vec<Expense>,
    #[serde(deserialize_with = "deserialize_nullable_list")]
    pub goals: Vec<Goal>,
}

fn deserialize_nullable_list<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Stored income with the pay schedule still as a raw tag
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIncome {
    #[serde(rename = "type")]
    income_type: String,
    amount: f64,
    #[serde(default = "default_income_multiplier")]
    frequency: u32,
}

fn deserialize_lenient_income<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<IncomeConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<RawIncome>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match raw.income_type.parse::<IncomeType>() {
        Ok(income_type) => Ok(Some(IncomeConfig {
            income_type,
            amount: raw.amount,
            frequency: raw.frequency,
        })),
        Err(_) => {
            warn!(tag = %raw.income_type, "Unrecognized income type, ignoring income");
            Ok(None)
        }
    }
}

fn deserialize_lenient_timestamp<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (taken at midnight UTC)
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
