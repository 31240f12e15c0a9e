//! Goal tracking
//!
//! Progress, remaining amount and deadline distance for savings goals,
//! plus ordering and aggregate statistics across all goals.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregate::percentage_of;
use crate::models::{Goal, Priority};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// How close a goal is to its deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineStatus {
    /// Deadline today or already passed
    Overdue,
    /// 30 days or fewer left
    Urgent,
    /// 90 days or fewer left
    Soon,
    OnTrack,
}

impl DeadlineStatus {
    pub fn from_days(days_remaining: i64) -> Self {
        if days_remaining <= 0 {
            Self::Overdue
        } else if days_remaining <= 30 {
            Self::Urgent
        } else if days_remaining <= 90 {
            Self::Soon
        } else {
            Self::OnTrack
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Urgent => "urgent",
            Self::Soon => "soon",
            Self::OnTrack => "on_track",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overdue => "Overdue",
            Self::Urgent => "Urgent",
            Self::Soon => "Soon",
            Self::OnTrack => "On track",
        }
    }
}

impl std::fmt::Display for DeadlineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived progress for one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub goal_id: String,
    pub name: String,
    pub current_amount: f64,
    pub target_amount: f64,
    pub target_date: NaiveDate,
    pub priority: Priority,
    /// 0 to 100, clamped even when the goal is overfunded
    pub progress_pct: f64,
    pub remaining: f64,
    /// Whole days until the deadline, rounded up; negative once passed
    pub days_remaining: i64,
    pub is_completed: bool,
    pub deadline: DeadlineStatus,
}

/// Compute progress for a goal as of `now`
pub fn track_goal(goal: &Goal, now: DateTime<Utc>) -> GoalProgress {
    let progress_pct = percentage_of(goal.current_amount, goal.target_amount).clamp(0.0, 100.0);
    let days_remaining = days_until(goal, now);

    GoalProgress {
        goal_id: goal.id.clone(),
        name: goal.name.clone(),
        current_amount: goal.current_amount,
        target_amount: goal.target_amount,
        target_date: goal.target_date,
        priority: goal.priority,
        progress_pct,
        remaining: (goal.target_amount - goal.current_amount).max(0.0),
        days_remaining,
        is_completed: goal.current_amount >= goal.target_amount,
        deadline: DeadlineStatus::from_days(days_remaining),
    }
}

/// Days from `now` until midnight UTC of the goal's target date, rounded up
fn days_until(goal: &Goal, now: DateTime<Utc>) -> i64 {
    let Some(deadline) = goal.target_date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()) else {
        return 0;
    };
    let millis = (deadline - now).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64
}

/// Progress for every goal, in priority order
pub fn track_goals(goals: &[Goal], now: DateTime<Utc>) -> Vec<GoalProgress> {
    sorted_goals(goals)
        .iter()
        .map(|goal| track_goal(goal, now))
        .collect()
}

/// Order goals by priority, then by earliest deadline
///
/// The sort is stable, so goals that tie keep their stored order.
pub fn sort_goals(goals: &mut [Goal]) {
    goals.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| a.target_date.cmp(&b.target_date))
    });
}

/// Sorted copy of the goals, leaving the input untouched
pub fn sorted_goals(goals: &[Goal]) -> Vec<Goal> {
    let mut sorted = goals.to_vec();
    sort_goals(&mut sorted);
    sorted
}

/// Aggregate statistics across all goals
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GoalSummary {
    pub total: usize,
    pub completed: usize,
    pub total_target: f64,
    pub total_current: f64,
    pub overall_progress_pct: f64,
}

pub fn summarize_goals(goals: &[Goal]) -> GoalSummary {
    let total_target: f64 = goals.iter().map(|g| g.target_amount).sum();
    let total_current: f64 = goals.iter().map(|g| g.current_amount).sum();
    GoalSummary {
        total: goals.len(),
        completed: goals
            .iter()
            .filter(|g| g.current_amount >= g.target_amount)
            .count(),
        total_target,
        total_current,
        overall_progress_pct: percentage_of(total_current, total_target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalCategory;
    use chrono::TimeZone;

    fn goal(id: &str, target: f64, current: f64, date: (i32, u32, u32), priority: Priority) -> Goal {
        Goal {
            id: id.to_string(),
            name: format!("Goal {}", id),
            target_amount: target,
            current_amount: current,
            target_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            category: GoalCategory::Savings,
            priority,
            description: None,
            created_at: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_overfunded_goal_is_complete() {
        let progress = track_goal(&goal("a", 10000.0, 12000.0, (2027, 1, 1), Priority::High), now());
        assert_eq!(progress.progress_pct, 100.0);
        assert_eq!(progress.remaining, 0.0);
        assert!(progress.is_completed);
    }

    #[test]
    fn test_partial_progress() {
        let progress = track_goal(&goal("a", 5000.0, 1250.0, (2027, 1, 1), Priority::Low), now());
        assert_eq!(progress.progress_pct, 25.0);
        assert_eq!(progress.remaining, 3750.0);
        assert!(!progress.is_completed);
    }

    #[test]
    fn test_days_remaining_rounds_up() {
        // Noon on the 19th to midnight on the 21st is 1.5 days
        let progress = track_goal(&goal("a", 100.0, 0.0, (2026, 10, 21), Priority::High), now());
        assert_eq!(progress.days_remaining, 2);
        assert_eq!(progress.deadline, DeadlineStatus::Urgent);
    }

    #[test]
    fn test_past_deadline_is_overdue() {
        let progress = track_goal(&goal("a", 100.0, 0.0, (2026, 10, 1), Priority::High), now());
        assert!(progress.days_remaining < 0);
        assert_eq!(progress.deadline, DeadlineStatus::Overdue);

        // Midnight today has already passed at noon
        let today = track_goal(&goal("b", 100.0, 0.0, (2026, 10, 19), Priority::High), now());
        assert_eq!(today.days_remaining, 0);
        assert_eq!(today.deadline, DeadlineStatus::Overdue);
    }

    #[test]
    fn test_deadline_thresholds() {
        assert_eq!(DeadlineStatus::from_days(1), DeadlineStatus::Urgent);
        assert_eq!(DeadlineStatus::from_days(30), DeadlineStatus::Urgent);
        assert_eq!(DeadlineStatus::from_days(31), DeadlineStatus::Soon);
        assert_eq!(DeadlineStatus::from_days(90), DeadlineStatus::Soon);
        assert_eq!(DeadlineStatus::from_days(91), DeadlineStatus::OnTrack);
    }

    #[test]
    fn test_zero_target_stays_finite() {
        let progress = track_goal(&goal("a", 0.0, 50.0, (2027, 1, 1), Priority::High), now());
        assert_eq!(progress.progress_pct, 0.0);
        assert_eq!(progress.remaining, 0.0);
        assert!(progress.is_completed);
    }

    #[test]
    fn test_sort_by_priority_then_date() {
        let mut goals = vec![
            goal("low", 1.0, 0.0, (2027, 1, 1), Priority::Low),
            goal("high-late", 1.0, 0.0, (2028, 1, 1), Priority::High),
            goal("medium", 1.0, 0.0, (2027, 1, 1), Priority::Medium),
            goal("high-early", 1.0, 0.0, (2027, 6, 1), Priority::High),
            goal("high-late-2", 1.0, 0.0, (2028, 1, 1), Priority::High),
        ];
        sort_goals(&mut goals);
        let ids: Vec<&str> = goals.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["high-early", "high-late", "high-late-2", "medium", "low"]
        );
    }

    #[test]
    fn test_summary() {
        let goals = vec![
            goal("a", 1000.0, 1000.0, (2027, 1, 1), Priority::High),
            goal("b", 3000.0, 1000.0, (2027, 1, 1), Priority::Low),
        ];
        let summary = summarize_goals(&goals);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.total_target, 4000.0);
        assert_eq!(summary.total_current, 2000.0);
        assert_eq!(summary.overall_progress_pct, 50.0);

        assert_eq!(summarize_goals(&[]), GoalSummary::default());
    }

    #[test]
    fn test_track_goals_in_priority_order() {
        let goals = vec![
            goal("later", 100.0, 10.0, (2027, 1, 1), Priority::Low),
            goal("first", 100.0, 50.0, (2027, 1, 1), Priority::High),
        ];
        let progress = track_goals(&goals, now());
        assert_eq!(progress[0].goal_id, "first");
        assert_eq!(progress[0].progress_pct, 50.0);
        assert_eq!(progress[1].goal_id, "later");
        assert_eq!(goals[0].id, "later");
    }
}
