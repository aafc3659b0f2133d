use uuid::Uuid;

use super::match_record::MatchRecord;

/// Domain events that occur within the League aggregate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeagueEvent {
    /// Fired when a team joins the league
    TeamAdded {
        league_id: Uuid,
        team: String,
    },
    /// Fired when a team is removed from the league
    TeamRemoved {
        league_id: Uuid,
        team: String,
    },
    /// Fired when a result is applied to the table and logged
    MatchRecorded {
        league_id: Uuid,
        record: MatchRecord,
    },
}

impl LeagueEvent {
    /// Returns the league_id for this event
    pub fn league_id(&self) -> Uuid {
        match self {
            LeagueEvent::TeamAdded { league_id, .. } => *league_id,
            LeagueEvent::TeamRemoved { league_id, .. } => *league_id,
            LeagueEvent::MatchRecorded { league_id, .. } => *league_id,
        }
    }
}
