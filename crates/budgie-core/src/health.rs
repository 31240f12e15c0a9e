//! Financial health scoring
//!
//! Maps the debt ratio to a 0-100 score and a status tier. Bands are checked
//! from the highest ratio down and only the first matching band applies.
//! Margin warnings are appended after the band recommendation.

use serde::{Deserialize, Serialize};

use crate::aggregate::FinancialSnapshot;

/// Qualitative health tier, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Excellent => "🟢",
            Self::Good => "🔵",
            Self::Fair => "🟡",
            Self::Poor => "🔴",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for HealthStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "excellent" => Ok(Self::Excellent),
            "good" => Ok(Self::Good),
            "fair" => Ok(Self::Fair),
            "poor" => Ok(Self::Poor),
            _ => Err(format!("Unknown health status: {}", s)),
        }
    }
}

/// Result of scoring a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessment {
    /// 0 to 100, higher is healthier
    pub score: u8,
    pub status: HealthStatus,
    pub recommendations: Vec<String>,
}

pub const REDUCE_SPENDING: &str = "Your debt ratio is very high. Consider reducing your expenses.";
pub const SEEK_MORE_INCOME: &str = "Look for additional sources of income.";
pub const REVIEW_NON_ESSENTIAL: &str =
    "Your debt ratio is moderate. Review your non-essential spending.";
pub const CONSIDER_SAVING_MORE: &str =
    "You are in a good financial position. Consider saving more.";
pub const EXCELLENT_MANAGEMENT: &str =
    "Excellent financial management! Consider investing your surplus.";
pub const DEFICIT_WARNING: &str = "You have a monthly deficit. Review your expenses urgently.";
pub const LOW_MARGIN_WARNING: &str =
    "Your savings margin is very low. Try to increase your income or reduce expenses.";

/// Share of income below which the savings margin counts as low
const LOW_MARGIN_SHARE: f64 = 0.1;

/// Score a snapshot
pub fn assess(snapshot: &FinancialSnapshot) -> HealthAssessment {
    let ratio = snapshot.debt_ratio;
    let mut recommendations = Vec::new();

    let (raw_score, status) = if ratio > 80.0 {
        recommendations.push(REDUCE_SPENDING.to_string());
        recommendations.push(SEEK_MORE_INCOME.to_string());
        ((100.0 - (ratio - 80.0) * 5.0).max(0.0), HealthStatus::Poor)
    } else if ratio > 60.0 {
        recommendations.push(REVIEW_NON_ESSENTIAL.to_string());
        ((100.0 - (ratio - 60.0) * 2.0).max(20.0), HealthStatus::Fair)
    } else if ratio > 40.0 {
        recommendations.push(CONSIDER_SAVING_MORE.to_string());
        ((100.0 - (ratio - 40.0)).max(60.0), HealthStatus::Good)
    } else {
        recommendations.push(EXCELLENT_MANAGEMENT.to_string());
        (100.0, HealthStatus::Excellent)
    };

    if snapshot.disposable_income < 0.0 {
        recommendations.push(DEFICIT_WARNING.to_string());
    } else if snapshot.disposable_income < snapshot.monthly_income * LOW_MARGIN_SHARE {
        recommendations.push(LOW_MARGIN_WARNING.to_string());
    }

    HealthAssessment {
        score: raw_score.round().clamp(0.0, 100.0) as u8,
        status,
        recommendations,
    }
}
