// Decoding of view actions into handler calls.
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use super::errors::ApiError;
use super::handlers::leagues::{self, CreateLeagueRequest};
use super::handlers::matches::{self, RecordMatchRequest};
use super::handlers::players::{
    self, AddCardRequest, AddPlayerRequest, UpdateProfileRequest, UpdateStatsRequest,
};
use super::handlers::teams::{self, CreateTeamRequest};
use crate::domain::repositories::LeagueRepository;

/// One user action, as sent by a view
///
/// `league` is optional on every league-scoped action; when absent the
/// session's active league is used.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    CreateLeague(CreateLeagueRequest),
    GetLeague {
        league: Option<Uuid>,
    },
    ListLeagues,
    DeleteLeague {
        league: Uuid,
    },
    Standings {
        league: Option<Uuid>,
    },
    CreateTeam {
        league: Option<Uuid>,
        #[serde(flatten)]
        team: CreateTeamRequest,
    },
    GetTeam {
        league: Option<Uuid>,
        team: String,
    },
    RemoveTeam {
        league: Option<Uuid>,
        team: String,
    },
    AddPlayer {
        league: Option<Uuid>,
        team: String,
        player: AddPlayerRequest,
    },
    RemovePlayer {
        league: Option<Uuid>,
        team: String,
        player: String,
    },
    UpdatePlayerStats {
        league: Option<Uuid>,
        team: String,
        player: String,
        #[serde(flatten)]
        stats: UpdateStatsRequest,
    },
    UpdatePlayerProfile {
        league: Option<Uuid>,
        team: String,
        player: String,
        #[serde(flatten)]
        profile: UpdateProfileRequest,
    },
    SetPlayerInjury {
        league: Option<Uuid>,
        team: String,
        player: String,
        is_injured: bool,
    },
    AddPlayerCard {
        league: Option<Uuid>,
        team: String,
        player: String,
        #[serde(flatten)]
        card: AddCardRequest,
    },
    RecordMatch {
        league: Option<Uuid>,
        #[serde(flatten)]
        result: RecordMatchRequest,
    },
    TeamMatches {
        league: Option<Uuid>,
        team: String,
    },
}

impl Command {
    /// Decodes a single JSON command
    pub fn parse(line: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(line)?)
    }
}

/// Runs one command and returns the refreshed view as JSON
pub async fn dispatch<R>(repo: &R, active_league: Uuid, command: Command) -> Result<Value, ApiError>
where
    R: LeagueRepository + ?Sized,
{
    let scoped = |league: Option<Uuid>| league.unwrap_or(active_league);

    let view = match command {
        Command::CreateLeague(req) => to_json(&leagues::create_league(repo, req).await?)?,
        Command::GetLeague { league } => to_json(&leagues::get_league(repo, scoped(league)).await?)?,
        Command::ListLeagues => to_json(&leagues::list_leagues(repo).await?)?,
        Command::DeleteLeague { league } => {
            leagues::delete_league(repo, league).await?;
            serde_json::json!({ "deleted": league })
        }
        Command::Standings { league } => {
            to_json(&leagues::get_standings(repo, scoped(league)).await?)?
        }
        Command::CreateTeam { league, team } => {
            to_json(&teams::create_team(repo, scoped(league), team).await?)?
        }
        Command::GetTeam { league, team } => {
            to_json(&teams::get_team(repo, scoped(league), &team).await?)?
        }
        Command::RemoveTeam { league, team } => {
            to_json(&teams::remove_team(repo, scoped(league), &team).await?)?
        }
        Command::AddPlayer { league, team, player } => {
            to_json(&players::add_player(repo, scoped(league), &team, player).await?)?
        }
        Command::RemovePlayer { league, team, player } => {
            to_json(&players::remove_player(repo, scoped(league), &team, &player).await?)?
        }
        Command::UpdatePlayerStats { league, team, player, stats } => to_json(
            &players::update_player_stats(repo, scoped(league), &team, &player, stats).await?,
        )?,
        Command::UpdatePlayerProfile { league, team, player, profile } => to_json(
            &players::update_player_profile(repo, scoped(league), &team, &player, profile).await?,
        )?,
        Command::SetPlayerInjury { league, team, player, is_injured } => to_json(
            &players::set_player_injury(repo, scoped(league), &team, &player, is_injured).await?,
        )?,
        Command::AddPlayerCard { league, team, player, card } => to_json(
            &players::add_player_card(repo, scoped(league), &team, &player, card).await?,
        )?,
        Command::RecordMatch { league, result } => {
            to_json(&matches::record_match(repo, scoped(league), result).await?)?
        }
        Command::TeamMatches { league, team } => {
            to_json(&matches::get_team_matches(repo, scoped(league), &team).await?)?
        }
    };

    Ok(view)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::internal(format!("Failed to render view: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_record_match() {
        let command = Command::parse(
            r#"{"action":"record_match","home_team":"A","away_team":"B","home_goals":3,"away_goals":1}"#,
        )
        .unwrap();

        match command {
            Command::RecordMatch { league, result } => {
                assert!(league.is_none());
                assert_eq!(result.home_team, "A");
                assert_eq!(result.away_goals, 1);
            }
            other => panic!("Expected RecordMatch, got {:?}", other),
        }
    }

    #[test]
    fn parses_add_player_with_defaults() {
        let command = Command::parse(
            r#"{"action":"add_player","team":"A","player":{"name":"Kane","position":"Forward","pace":7,"shooting":10,"passing":8}}"#,
        )
        .unwrap();

        match command {
            Command::AddPlayer { team, player, .. } => {
                assert_eq!(team, "A");
                assert_eq!(player.name, "Kane");
                assert!(player.age.is_none());
            }
            other => panic!("Expected AddPlayer, got {:?}", other),
        }
    }

    #[test]
    fn parses_team_matches() {
        let command = Command::parse(r#"{"action":"team_matches","team":"A"}"#).unwrap();

        assert!(matches!(command, Command::TeamMatches { ref team, league: None } if team == "A"));
    }

    #[test]
    fn unknown_action_is_bad_request() {
        let err = Command::parse(r#"{"action":"transfer_window"}"#).unwrap_err();
        assert_eq!(err.kind, crate::api::errors::ErrorKind::BadRequest);
    }

    #[test]
    fn malformed_json_is_bad_request() {
        assert!(Command::parse("not json").is_err());
    }
}
