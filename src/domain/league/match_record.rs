use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Outcome of a match from one side's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub const WIN_POINTS: u32 = 3;
    pub const DRAW_POINTS: u32 = 1;

    /// Outcome for the side that scored `scored` and conceded `conceded`
    pub fn from_score(scored: u32, conceded: u32) -> Self {
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            MatchOutcome::Win => Self::WIN_POINTS,
            MatchOutcome::Draw => Self::DRAW_POINTS,
            MatchOutcome::Loss => 0,
        }
    }
}

/// Entry in the league's append-only match log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub id: Uuid,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    pub played_at: DateTime<Utc>,
}

impl MatchRecord {
    pub fn new(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        home_goals: u32,
        away_goals: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_goals,
            away_goals,
            played_at: Utc::now(),
        }
    }

    pub fn home_outcome(&self) -> MatchOutcome {
        MatchOutcome::from_score(self.home_goals, self.away_goals)
    }

    pub fn away_outcome(&self) -> MatchOutcome {
        MatchOutcome::from_score(self.away_goals, self.home_goals)
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }
}
