//! Goal domain models.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Kind of financial goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    Retirement,
    Home,
    Education,
    Custom,
}

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Retirement => "retirement",
            GoalType::Home => "home",
            GoalType::Education => "education",
            GoalType::Custom => "custom",
        }
    }

    pub fn display_name(&self) -> String {
        let s = self.as_str();
        let mut c = s.chars();
        match c.next() {
            Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
            None => String::new(),
        }
    }
}

impl std::str::FromStr for GoalType {
    type Err = crate::errors::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "retirement" => Ok(GoalType::Retirement),
            "home" => Ok(GoalType::Home),
            "education" => Ok(GoalType::Education),
            "custom" => Ok(GoalType::Custom),
            other => Err(crate::errors::ValidationError::InvalidInput(format!(
                "Unknown goal type: {}",
                other
            ))),
        }
    }
}

/// Lifecycle state of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    #[default]
    Active,
    Paused,
    Completed,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Active => "active",
            GoalStatus::Paused => "paused",
            GoalStatus::Completed => "completed",
        }
    }
}

impl std::str::FromStr for GoalStatus {
    type Err = crate::errors::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(GoalStatus::Active),
            "paused" => Ok(GoalStatus::Paused),
            "completed" => Ok(GoalStatus::Completed),
            other => Err(crate::errors::ValidationError::InvalidInput(format!(
                "Unknown goal status: {}",
                other
            ))),
        }
    }
}

/// Domain model representing a financial goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub goal_type: GoalType,
    pub target_amount: f64,
    pub target_date: NaiveDate,
    pub monthly_contribution: f64,
    pub status: GoalStatus,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating or updating a goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub goal_type: GoalType,
    pub target_amount: f64,
    pub target_date: NaiveDate,
    pub monthly_contribution: f64,
    #[serde(default)]
    pub status: GoalStatus,
}

/// Estimated progress toward an active goal, derived from its monthly
/// contribution and age rather than actual account flows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub id: String,
    pub name: String,
    pub target: f64,
    pub current: f64,
    pub percent: f64,
    pub monthly_contribution: f64,
    pub target_date: NaiveDate,
    pub months_remaining: i32,
    pub status: GoalStatus,
}

/// Whole months between two dates, ignoring day-of-month.
fn month_span(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32)
}

impl Goal {
    /// Estimates progress as `monthly_contribution x months since creation`,
    /// capped at the target. At least one month is assumed so a freshly
    /// created goal with a contribution shows non-zero progress.
    pub fn progress_at(&self, today: NaiveDate) -> GoalProgress {
        let created = self.created_at.date_naive();
        let months_elapsed = month_span(created, today).max(1);

        let current_saved = (self.monthly_contribution * f64::from(months_elapsed))
            .min(self.target_amount);
        let percent = if self.target_amount > 0.0 {
            (current_saved / self.target_amount * 100.0).min(100.0)
        } else {
            0.0
        };

        GoalProgress {
            id: self.id.clone(),
            name: self.goal_type.display_name(),
            target: self.target_amount,
            current: (current_saved * 100.0).round() / 100.0,
            percent: (percent * 10.0).round() / 10.0,
            monthly_contribution: self.monthly_contribution,
            target_date: self.target_date,
            months_remaining: month_span(today, self.target_date).max(0),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn goal(target: f64, monthly: f64, created: (i32, u32, u32), due: (i32, u32, u32)) -> Goal {
        Goal {
            id: "goal-1".to_string(),
            user_id: "user-1".to_string(),
            goal_type: GoalType::Home,
            target_amount: target,
            target_date: NaiveDate::from_ymd_opt(due.0, due.1, due.2).unwrap(),
            monthly_contribution: monthly,
            status: GoalStatus::Active,
            created_at: Utc
                .with_ymd_and_hms(created.0, created.1, created.2, 9, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn progress_accumulates_monthly_contributions() {
        let g = goal(60_000.0, 1000.0, (2025, 1, 15), (2030, 1, 1));
        let p = g.progress_at(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        // Jan -> Jul is six month boundaries
        assert_eq!(p.current, 6000.0);
        assert_eq!(p.percent, 10.0);
        assert_eq!(p.months_remaining, 54);
        assert_eq!(p.name, "Home");
    }

    #[test]
    fn progress_caps_at_target() {
        let g = goal(5000.0, 1000.0, (2020, 1, 1), (2021, 1, 1));
        let p = g.progress_at(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(p.current, 5000.0);
        assert_eq!(p.percent, 100.0);
        // Past-due goals never report negative months
        assert_eq!(p.months_remaining, 0);
    }

    #[test]
    fn fresh_goal_assumes_one_month_elapsed() {
        let g = goal(12_000.0, 500.0, (2026, 3, 1), (2028, 3, 1));
        let p = g.progress_at(NaiveDate::from_ymd_opt(2026, 3, 20).unwrap());
        assert_eq!(p.current, 500.0);
    }

    #[test]
    fn zero_target_reports_zero_percent() {
        let g = goal(0.0, 100.0, (2025, 1, 1), (2026, 1, 1));
        let p = g.progress_at(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(p.percent, 0.0);
        assert_eq!(p.current, 0.0);
    }
}
